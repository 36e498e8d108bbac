//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载裁边链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。
//!
//! 注意：“图片完全透明”不是错误，而是 `TrimOutcome` 的正常分支。

/// 裁边流水线统一错误类型。
///
/// 入口处会被格式化为一行 `Error: ...` 打印到标准输出。
#[derive(Debug, thiserror::Error)]
pub enum TrimError {
    /// 源文件缺失或不可读。
    #[error("读取源图片失败：{0}")]
    Load(String),

    /// 字节无法解码为受支持的图片格式。
    #[error("图片解码失败：{0}")]
    Decode(String),

    /// 目标文件创建或 PNG 编码写入失败。
    #[error("保存目标文件失败：{0}")]
    Save(String),
}
