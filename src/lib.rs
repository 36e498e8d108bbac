//! # 图片裁边工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! main.rs（入口：日志初始化 + 错误行输出）
//!    ↓
//! trimmer::Trimmer（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs   源文件存在性校验 + 字节读取
//!    ├─ bbox.rs     非空像素包围盒扫描
//!    └─ pipeline.rs 解码 → 裁剪 → PNG 编码写盘
//!    ↓
//! 标准输出（进度/结果/错误行）
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`trimmer`] | 完整裁边流水线：加载、扫描、裁剪、保存 |

pub mod trimmer;
