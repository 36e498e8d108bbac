//! # 配置模块
//!
//! ## 设计思路
//!
//! 将两个硬编码路径与 PNG 编码策略集中到 `TrimConfig`，
//! 保证流水线行为可观测、可测试（测试中替换为临时目录路径）。
//! 本工具不读取命令行参数与环境变量，路径常量即产品语义。
//!
//! ## 实现思路
//!
//! - `Default` 提供生产使用的固定路径与无损优化编码参数。
//! - 编码策略直接复用 `image` crate 的 PNG 参数类型，无自定义包装。

use std::path::PathBuf;

use image::codecs::png::{CompressionType, FilterType};

/// 默认源图片路径（相对当前工作目录）。
pub const DEFAULT_SOURCE_PATH: &str = "Head_icon.png";

/// 默认输出路径（相对当前工作目录，目录需已存在）。
pub const DEFAULT_TARGET_PATH: &str = "src/assets/header-main.png";

/// 裁边流水线配置。
///
/// 字段覆盖了输入、输出与编码三个方面。
#[derive(Debug, Clone)]
pub struct TrimConfig {
    /// 源图片路径。
    pub source_path: PathBuf,
    /// 输出文件路径；已存在时静默覆盖，父目录不存在时报 `Save` 错误。
    pub target_path: PathBuf,
    /// PNG 压缩等级，默认取最高压缩以换取更小体积。
    pub compression: CompressionType,
    /// PNG 行滤波策略，`Adaptive` 配合高压缩可进一步缩小体积。
    pub filter: FilterType,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            target_path: PathBuf::from(DEFAULT_TARGET_PATH),
            compression: CompressionType::Best,
            filter: FilterType::Adaptive,
        }
    }
}
