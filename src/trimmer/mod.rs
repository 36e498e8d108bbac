//! # 裁边模块（trimmer）
//!
//! ## 设计思路
//!
//! 将“加载校验 → 解码 → 包围盒扫描 → 裁剪 → 编码保存”
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! - `config`：固定路径与编码策略
//! - `error`：统一错误类型
//! - `loader`：负责源文件校验与字节加载
//! - `bbox`：负责非空像素包围盒扫描
//! - `pipeline`：编排整条处理流水线
//! - `outcome`：流水线结果模型
//!
//! ## 实现思路
//!
//! 对外仅暴露必要类型，内部细节保持 `mod` 私有。
//! 流水线在各阶段完成时立即向标准输出打印对应结果行，
//! 因此中途失败时，已完成阶段的输出行会保留在失败行之前。
//!
//! ## 新同事快速上手
//!
//! 可以按下面顺序理解调用链：
//!
//! ```text
//! main
//!    ↓
//! pipeline.rs（Trimmer::run，统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（存在性校验 + 字节读取）
//!    ├─ bbox.rs（alpha/非零通道包围盒扫描）
//!    └─ PNG 编码（Best 压缩 + Adaptive 滤波）写盘
//!    ↓
//! 返回 TrimOutcome / TrimError
//! ```

mod bbox;
mod config;
mod error;
mod loader;
mod outcome;
mod pipeline;

pub use bbox::BoundingBox;
pub use config::TrimConfig;
pub use error::TrimError;
pub use outcome::{TrimOutcome, TrimReport};
pub use pipeline::Trimmer;
