//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 在“尽可能早”的阶段执行输入校验：先判断存在性与文件类型，
//! 再读取字节，让缺失路径在解码前就以明确消息失败。
//!
//! ## 实现思路
//!
//! - 存在性 + metadata 校验，目录等非常规文件直接拒绝。
//! - IO 错误统一映射到 `TrimError::Load`，便于上层处理。

use std::fs;
use std::path::Path;

use super::TrimError;

/// 读取源图片的原始字节。
pub(super) fn load_source_bytes(path: &Path) -> Result<Vec<u8>, TrimError> {
    if !path.exists() {
        return Err(TrimError::Load(format!("文件不存在：{}", path.display())));
    }

    let metadata = fs::metadata(path)
        .map_err(|e| TrimError::Load(format!("读取文件信息失败：{}：{}", path.display(), e)))?;

    if !metadata.is_file() {
        return Err(TrimError::Load(format!("路径不是普通文件：{}", path.display())));
    }

    log::info!(
        "📁 开始读取源图片 - 路径: {} 体积: {} 字节",
        path.display(),
        metadata.len()
    );

    fs::read(path).map_err(|e| TrimError::Load(format!("读取文件失败：{}：{}", path.display(), e)))
}
