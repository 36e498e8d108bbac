//! # 图片裁边工具 — 应用入口
//!
//! 本文件仅负责日志初始化与流水线启动。
//! 业务逻辑分布在 `trimmer` 模块中，详见 `lib.rs` 架构文档。
//!
//! 约定：无论成功还是失败，进程始终以 0 退出；
//! 错误只通过标准输出的 `Error: ...` 行对外报告。

use image_trimmer::trimmer::{TrimConfig, Trimmer};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let trimmer = Trimmer::new(TrimConfig::default());
    if let Err(err) = trimmer.run() {
        println!("Error: {err}");
    }
}
