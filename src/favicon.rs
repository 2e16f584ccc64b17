//! favicon.ico generation for the web frontend.

use image::DynamicImage;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::icoio;
use crate::resample;

/// The sizes a web favicon needs.
pub const FAVICON_SIZES: [u32; 3] = [16, 32, 48];

/// [`FAVICON_SIZES`] with the optional 64-pixel entry.
pub const FAVICON_SIZES_LARGE: [u32; 4] = [16, 32, 48, 64];

/// Resizes the source to the favicon sizes, encodes one ICO container in
/// memory, and writes the identical bytes to both the public assets
/// destination and the build-embedded destination.  Encoding once is what
/// guarantees the two files are byte-identical.
pub fn write_favicon(source: &DynamicImage,
                     sizes: &[u32],
                     public: &Path,
                     embedded: &Path)
                     -> Result<()> {
    let variants = resample::variant_set(source, sizes);
    let bytes = icoio::encode_ico(&variants)?;
    for dest in [public, embedded] {
        fs::write(dest, &bytes)?;
        log::info!("wrote {} ({} bytes)", dest.display(), bytes.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn destinations_are_byte_identical() {
        let source = DynamicImage::ImageRgba8(
            RgbaImage::from_pixel(128, 128, Rgba([50, 100, 150, 255])));
        let dir = tempfile::tempdir().expect("tempdir failed");
        let public = dir.path().join("favicon.ico");
        let embedded = dir.path().join("favicon-embedded.ico");
        write_favicon(&source, &FAVICON_SIZES, &public, &embedded)
            .expect("write failed");
        let public_bytes = fs::read(&public).expect("read failed");
        let embedded_bytes = fs::read(&embedded).expect("read failed");
        assert!(!public_bytes.is_empty());
        assert_eq!(public_bytes, embedded_bytes);
    }
}
