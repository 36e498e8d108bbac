//! # 包围盒扫描模块
//!
//! ## 设计思路
//!
//! “空像素”的判定在这里显式定义，而不是交给解码库：
//!
//! - 带 alpha 通道的图片：`alpha > 0` 即视为非空。
//! - 不带 alpha 通道的图片：RGBA 展开后任一通道非零即视为非空，
//!   即仅纯黑视为空，典型纯色背景会被整图保留。
//!
//! ## 实现思路
//!
//! 以 16 位 RGBA 工作精度单次全图扫描，累积非空像素的行列最小/最大值，
//! 输出 PIL 风格的半开区间包围盒（right/bottom 为开边界）。
//! 8 位通道放大到 16 位不改变“是否大于零”，而 16 位源若先截断到 8 位，
//! 1..=128 的微弱 alpha 会被误判为空。

use std::fmt;

use image::{DynamicImage, Rgba};

/// 非空像素的最小外接矩形。
///
/// `right` 与 `bottom` 为开边界：`width = right - left`，`height = bottom - top`。
/// 不变式：`left < right <= 图宽`，`top < bottom <= 图高`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    /// 包围盒宽度（像素）。
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    /// 包围盒高度（像素）。
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.left, self.top, self.right, self.bottom)
    }
}

/// 扫描整图，返回非空像素的包围盒。
///
/// 全图为空（完全透明，或非 alpha 图全黑）时返回 `None`。
/// 判定在 16 位通道精度上进行，16 位源的微弱 alpha 不会被截断丢失。
pub(crate) fn scan(image: &DynamicImage) -> Option<BoundingBox> {
    let has_alpha = image.color().has_alpha();
    let rgba = image.to_rgba16();

    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, &Rgba([r, g, b, a])) in rgba.enumerate_pixels() {
        let non_empty = if has_alpha { a > 0 } else { r > 0 || g > 0 || b > 0 };
        if !non_empty {
            continue;
        }

        found = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    if !found {
        return None;
    }

    Some(BoundingBox {
        left: min_x,
        top: min_y,
        right: max_x + 1,
        bottom: max_y + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba};
    use proptest::prelude::*;

    fn transparent_canvas_with_block(
        canvas: (u32, u32),
        offset: (u32, u32),
        block: (u32, u32),
    ) -> DynamicImage {
        let img = ImageBuffer::from_fn(canvas.0, canvas.1, |x, y| {
            let inside = x >= offset.0
                && x < offset.0 + block.0
                && y >= offset.1
                && y < offset.1 + block.1;
            if inside {
                Rgba([200u8, 120, 40, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn opaque_block_yields_expected_bbox() {
        let img = transparent_canvas_with_block((100, 100), (10, 10), (20, 30));

        let bbox = scan(&img).expect("bbox should exist");
        assert_eq!(
            bbox,
            BoundingBox {
                left: 10,
                top: 10,
                right: 30,
                bottom: 40,
            }
        );
        assert_eq!(bbox.width(), 20);
        assert_eq!(bbox.height(), 30);
    }

    #[test]
    fn fully_transparent_image_has_no_bbox() {
        let img = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(64, 64, Rgba([0, 0, 0, 0])));
        assert_eq!(scan(&img), None);
    }

    #[test]
    fn faint_alpha_pixel_counts_as_content() {
        let mut buffer = ImageBuffer::from_pixel(8, 8, Rgba([255u8, 255, 255, 0]));
        buffer.put_pixel(3, 5, Rgba([255, 255, 255, 1]));
        let img = DynamicImage::ImageRgba8(buffer);

        let bbox = scan(&img).expect("bbox should exist");
        assert_eq!(
            bbox,
            BoundingBox {
                left: 3,
                top: 5,
                right: 4,
                bottom: 6,
            }
        );
    }

    #[test]
    fn faint_16bit_alpha_survives_at_native_depth() {
        // 1..=128 的 16 位 alpha 在 8 位截断下会变成 0，这里必须仍算内容。
        let mut buffer = ImageBuffer::from_pixel(8, 8, Rgba([0u16, 0, 0, 0]));
        buffer.put_pixel(2, 6, Rgba([65535, 65535, 65535, 100]));
        let img = DynamicImage::ImageRgba16(buffer);

        let bbox = scan(&img).expect("bbox should exist");
        assert_eq!(
            bbox,
            BoundingBox {
                left: 2,
                top: 6,
                right: 3,
                bottom: 7,
            }
        );
    }

    #[test]
    fn faint_16bit_rgb_channel_counts_as_content() {
        let mut buffer = ImageBuffer::from_pixel(8, 8, Rgb([0u16, 0, 0]));
        buffer.put_pixel(4, 1, Rgb([0, 90, 0]));
        let img = DynamicImage::ImageRgb16(buffer);

        let bbox = scan(&img).expect("bbox should exist");
        assert_eq!(
            bbox,
            BoundingBox {
                left: 4,
                top: 1,
                right: 5,
                bottom: 2,
            }
        );
    }

    #[test]
    fn rgb_image_uses_non_zero_channel_predicate() {
        let mut buffer = ImageBuffer::from_pixel(16, 16, Rgb([0u8, 0, 0]));
        buffer.put_pixel(2, 3, Rgb([0, 0, 7]));
        buffer.put_pixel(9, 12, Rgb([30, 0, 0]));
        let img = DynamicImage::ImageRgb8(buffer);

        let bbox = scan(&img).expect("bbox should exist");
        assert_eq!(
            bbox,
            BoundingBox {
                left: 2,
                top: 3,
                right: 10,
                bottom: 13,
            }
        );
    }

    #[test]
    fn all_black_rgb_image_has_no_bbox() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(12, 12, Rgb([0, 0, 0])));
        assert_eq!(scan(&img), None);
    }

    #[test]
    fn bbox_display_matches_tuple_format() {
        let bbox = BoundingBox {
            left: 10,
            top: 10,
            right: 30,
            bottom: 40,
        };
        assert_eq!(bbox.to_string(), "(10, 10, 30, 40)");
    }

    proptest! {
        #[test]
        fn scan_recovers_arbitrary_opaque_rect(
            x in 0u32..80,
            y in 0u32..80,
            w in 1u32..20,
            h in 1u32..20,
        ) {
            let img = transparent_canvas_with_block((100, 100), (x, y), (w, h));

            let bbox = scan(&img).expect("bbox should exist");
            prop_assert_eq!(bbox, BoundingBox {
                left: x,
                top: y,
                right: x + w,
                bottom: y + h,
            });
        }

        #[test]
        fn cropping_to_bbox_is_a_fixed_point(
            x in 0u32..80,
            y in 0u32..80,
            w in 1u32..20,
            h in 1u32..20,
        ) {
            let img = transparent_canvas_with_block((100, 100), (x, y), (w, h));

            let bbox = scan(&img).expect("bbox should exist");
            let cropped = img.crop_imm(bbox.left, bbox.top, bbox.width(), bbox.height());

            let rescan = scan(&cropped).expect("cropped bbox should exist");
            prop_assert_eq!(rescan, BoundingBox {
                left: 0,
                top: 0,
                right: cropped.width(),
                bottom: cropped.height(),
            });
        }
    }
}
