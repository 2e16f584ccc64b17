//! Resizing the source logo into square icon variants.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

/// A square raster derived from the source logo, tagged with its pixel
/// dimension.
pub struct IconVariant {
    /// Pixel dimension of the variant (width and height are equal).
    pub size: u32,
    /// The resized RGBA raster.
    pub image: RgbaImage,
}

/// Resizes an RGBA raster to an exact `size` by `size` square with a
/// Lanczos3 filter.  The input is never mutated; a source that already has
/// the target dimensions is copied as-is.
pub fn resize_square(source: &RgbaImage, size: u32) -> RgbaImage {
    if source.width() == size && source.height() == size {
        source.clone()
    } else {
        imageops::resize(source, size, size, FilterType::Lanczos3)
    }
}

/// Builds the ordered variant set for the requested sizes.  The source is
/// coerced to RGBA once, whatever its original color mode, and the variants
/// come back in the same order as `sizes` -- the first entry becomes the
/// primary image in container formats that have one.
pub fn variant_set(source: &DynamicImage, sizes: &[u32]) -> Vec<IconVariant> {
    let rgba = source.to_rgba8();
    sizes.iter()
        .map(|&size| {
            log::debug!("resampling to {}x{}", size, size);
            IconVariant { size, image: resize_square(&rgba, size) }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba};

    #[test]
    fn output_has_exact_dimensions() {
        let source = RgbaImage::from_pixel(512, 512, Rgba([9, 9, 9, 255]));
        for size in [16, 32, 48, 64, 128, 256, 1024] {
            let resized = resize_square(&source, size);
            assert_eq!(resized.width(), size);
            assert_eq!(resized.height(), size);
        }
    }

    #[test]
    fn variant_set_preserves_order() {
        let source = DynamicImage::ImageRgba8(
            RgbaImage::from_pixel(256, 256, Rgba([1, 2, 3, 255])));
        let sizes = [16, 32, 48, 64, 128, 256];
        let variants = variant_set(&source, &sizes);
        let got: Vec<u32> = variants.iter().map(|v| v.size).collect();
        assert_eq!(got, sizes);
    }

    #[test]
    fn opaque_rgb_source_is_coerced_to_rgba() {
        let source = DynamicImage::ImageRgb8(
            RgbImage::from_pixel(64, 64, Rgb([10, 20, 30])));
        let variants = variant_set(&source, &[32]);
        let pixel = variants[0].image.get_pixel(16, 16);
        assert_eq!(pixel.0[3], 255);
    }
}
