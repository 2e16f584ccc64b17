//! The iconset + `iconutil` strategy for producing `.icns` files.
//!
//! macOS ships `iconutil`, which compiles a directory of conventionally
//! named PNGs into an `.icns` file.  Everywhere else the tool does not
//! exist, so a high-resolution PNG is written as a substitute output
//! instead; that is a documented fallback, not an error.

use image::DynamicImage;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::resample;

/// File names and pixel sizes `iconutil` expects inside a `.iconset`
/// directory.  The `@2x` entries are the retina renditions of the size in
/// the file name.
pub const ICONSET_ENTRIES: [(&str, u32); 10] = [
    ("icon_16x16.png", 16),
    ("icon_16x16@2x.png", 32),
    ("icon_32x32.png", 32),
    ("icon_32x32@2x.png", 64),
    ("icon_128x128.png", 128),
    ("icon_128x128@2x.png", 256),
    ("icon_256x256.png", 256),
    ("icon_256x256@2x.png", 512),
    ("icon_512x512.png", 512),
    ("icon_512x512@2x.png", 1024),
];

/// Pixel size of the substitute PNG written when `iconutil` is unavailable.
pub const FALLBACK_SIZE: u32 = 1024;

/// What [`write_iconset_icns`] actually produced.
#[derive(Debug, Eq, PartialEq)]
pub enum IcnsOutput {
    /// `iconutil` was available and the requested `.icns` was written.
    Icns(PathBuf),
    /// `iconutil` was unavailable; a high-resolution PNG was written
    /// instead, at the contained path.
    FallbackPng(PathBuf),
}

/// Writes the resized iconset into a fresh temporary directory next to
/// `output` and compiles it with `iconutil`.  When the utility is
/// unavailable (any non-Mac platform, or a missing binary), a
/// [`FALLBACK_SIZE`] PNG is written beside the requested output instead.
/// The temporary directory is removed on every exit path.
pub fn write_iconset_icns(source: &DynamicImage,
                          output: &Path)
                          -> Result<IcnsOutput> {
    let parent = match output.parent() {
        Some(dir) if dir != Path::new("") => dir,
        _ => Path::new("."),
    };
    let iconset = tempfile::Builder::new()
        .prefix("icon-")
        .suffix(".iconset")
        .tempdir_in(parent)?;

    let rgba = source.to_rgba8();
    for (name, size) in ICONSET_ENTRIES {
        let resized = resample::resize_square(&rgba, size);
        resized.save(iconset.path().join(name))?;
        log::debug!("iconset entry {} ({}x{})", name, size, size);
    }

    let produced = match compile_iconset(iconset.path(), output) {
        Ok(()) => IcnsOutput::Icns(output.to_path_buf()),
        Err(Error::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            log::warn!("iconutil unavailable, writing a {}x{} PNG instead",
                       FALLBACK_SIZE,
                       FALLBACK_SIZE);
            let fallback = output.with_extension("png");
            resample::resize_square(&rgba, FALLBACK_SIZE).save(&fallback)?;
            IcnsOutput::FallbackPng(fallback)
        }
        Err(err) => return Err(err),
    };
    iconset.close()?;
    Ok(produced)
}

/// Runs `iconutil -c icns <iconset> -o <output>`.  A missing tool surfaces
/// as a NotFound I/O error; a tool that runs and fails is a real error.
fn compile_iconset(iconset: &Path, output: &Path) -> Result<()> {
    if !cfg!(target_os = "macos") {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            "iconutil only exists on macOS",
        )));
    }
    let result = Command::new("iconutil")
        .args(["-c", "icns"])
        .arg(iconset)
        .arg("-o")
        .arg(output)
        .output()?;
    if !result.status.success() {
        return Err(Error::IconUtil {
            status: result.status,
            stderr: String::from_utf8_lossy(&result.stderr).into_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iconset_entries_are_the_canonical_ten() {
        assert_eq!(ICONSET_ENTRIES.len(), 10);
        for (name, size) in ICONSET_ENTRIES {
            assert!(name.starts_with("icon_"));
            assert!(name.ends_with(".png"));
            let doubled = name.contains("@2x");
            let base: u32 = name
                .trim_start_matches("icon_")
                .split('x')
                .next()
                .unwrap()
                .parse()
                .unwrap();
            assert_eq!(size, if doubled { base * 2 } else { base });
        }
    }
}
