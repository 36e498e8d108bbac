//! # 流水线结果模型
//!
//! ## 设计思路
//!
//! 将“正常终止的两种形态”与错误解耦：
//! - `Trimmed` 表示完成裁剪并写出文件
//! - `FullyTransparent` 表示整图为空、按约定不写任何文件
//!
//! “完全透明”是产品语义上的正常结果，因此不进入 `TrimError`。

use std::path::PathBuf;

use super::BoundingBox;

/// 一次裁边运行的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrimOutcome {
    /// 完成裁剪并保存。
    Trimmed(TrimReport),
    /// 整图为空，未写出任何文件。
    FullyTransparent {
        /// 源图尺寸（宽, 高）。
        original_size: (u32, u32),
    },
}

/// 裁剪成功时的明细，供测试与诊断使用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrimReport {
    /// 源图尺寸（宽, 高）。
    pub original_size: (u32, u32),
    /// 非空像素包围盒。
    pub bounding_box: BoundingBox,
    /// 裁剪后尺寸（宽, 高），恒等于包围盒宽高。
    pub cropped_size: (u32, u32),
    /// 实际写入的目标路径。
    pub target_path: PathBuf,
}
