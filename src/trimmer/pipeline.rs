//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `Trimmer` 只负责流程编排，处理链路固定为：
//! 1. 按路径加载原始字节
//! 2. 解码并报告源图尺寸
//! 3. 扫描非空像素包围盒
//! 4. 裁剪并以无损优化参数编码 PNG 写盘
//!
//! ## 实现思路
//!
//! - 约定的结果行（`Original size:` 等）在各阶段完成时立即打印，
//!   中途失败不会回收已打印的行。
//! - 记录 `load/scan/save/total` 阶段耗时，便于性能诊断。
//! - 裁剪使用 `crop_imm`，保持源图像素格式不变。

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, GenericImageView};

use super::{TrimConfig, TrimError, TrimOutcome, TrimReport, bbox, loader};

/// 裁边处理器。
///
/// 封装配置并编排各子模块实现完整流程。
pub struct Trimmer {
    config: TrimConfig,
}

impl Trimmer {
    /// 根据配置创建处理器。
    pub fn new(config: TrimConfig) -> Self {
        Self { config }
    }

    /// 处理主入口：加载、扫描、裁剪并保存。
    ///
    /// 返回 `TrimOutcome` 区分“已裁剪保存”与“整图为空未写文件”两种正常结束。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use image_trimmer::trimmer::{TrimConfig, Trimmer};
    ///
    /// let outcome = Trimmer::new(TrimConfig::default()).run()?;
    /// # Ok::<(), image_trimmer::trimmer::TrimError>(())
    /// ```
    pub fn run(&self) -> Result<TrimOutcome, TrimError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let bytes = loader::load_source_bytes(&self.config.source_path)?;
        let image = image::load_from_memory(&bytes)
            .map_err(|e| TrimError::Decode(format!("{}：{}", self.config.source_path.display(), e)))?;
        let load_elapsed = load_start.elapsed();

        let original_size = image.dimensions();
        println!("Original size: ({}, {})", original_size.0, original_size.1);

        let scan_start = Instant::now();
        let Some(bounding_box) = bbox::scan(&image) else {
            println!("Image is completely transparent!");
            log::info!(
                "🫥 整图为空，跳过裁剪与保存 - 源图: {}x{}",
                original_size.0,
                original_size.1
            );
            return Ok(TrimOutcome::FullyTransparent { original_size });
        };
        let scan_elapsed = scan_start.elapsed();

        println!("Bounding box: {bounding_box}");

        let cropped = image.crop_imm(
            bounding_box.left,
            bounding_box.top,
            bounding_box.width(),
            bounding_box.height(),
        );
        let cropped_size = cropped.dimensions();
        println!("Cropped size: ({}, {})", cropped_size.0, cropped_size.1);

        let save_start = Instant::now();
        self.save_png(&cropped)?;
        let save_elapsed = save_start.elapsed();

        println!("Saved to {}", self.config.target_path.display());

        log::info!(
            "✅ 裁剪完成 - {}x{} -> {}x{} load={}ms scan={}ms save={}ms total={}ms",
            original_size.0,
            original_size.1,
            cropped_size.0,
            cropped_size.1,
            load_elapsed.as_millis(),
            scan_elapsed.as_millis(),
            save_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(TrimOutcome::Trimmed(TrimReport {
            original_size,
            bounding_box,
            cropped_size,
            target_path: self.config.target_path.clone(),
        }))
    }

    /// 以无损优化参数将图像编码为 PNG 并写入目标路径。
    ///
    /// 目标文件已存在时静默覆盖；父目录不存在时报 `Save` 错误，不做隐式建目录。
    fn save_png(&self, image: &DynamicImage) -> Result<(), TrimError> {
        let file = File::create(&self.config.target_path).map_err(|e| {
            TrimError::Save(format!("{}：{}", self.config.target_path.display(), e))
        })?;

        let writer = BufWriter::new(file);
        let encoder = PngEncoder::new_with_quality(writer, self.config.compression, self.config.filter);

        image
            .write_with_encoder(encoder)
            .map_err(|e| TrimError::Save(format!("PNG 编码失败：{}", e)))
    }
}
