//! Writing ordered icon variants into a Windows ICO container.
//!
//! The exact byte layout of each embedded image is delegated to the `ico`
//! crate's encoder; this module only fixes the entry order and the declared
//! dimensions.

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::resample::IconVariant;

/// The sizes a Windows application icon needs, smallest first.  The 256
/// entry is required by modern Windows shells.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// [`ICO_SIZES`] with the extra 24-pixel small-toolbar entry.
pub const ICO_SIZES_LARGE: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Encodes the variants into an ICO container in memory.  The first variant
/// becomes the primary image; the rest are appended alternates, each
/// declaring its exact pixel dimensions.  Fails on an empty variant list.
pub fn encode_ico(variants: &[IconVariant]) -> Result<Vec<u8>> {
    if variants.is_empty() {
        return Err(Error::NoVariants);
    }
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for variant in variants {
        let image = IconImage::from_rgba_data(variant.size,
                                              variant.size,
                                              variant.image.as_raw().clone());
        icon_dir.add_entry(IconDirEntry::encode(&image)?);
    }
    let mut buffer = Vec::new();
    icon_dir.write(&mut buffer)?;
    Ok(buffer)
}

/// Writes the variants to an ICO file at `path`.  Any write failure aborts
/// the whole operation and is surfaced to the caller.
pub fn write_ico_file(variants: &[IconVariant], path: &Path) -> Result<()> {
    let bytes = encode_ico(variants)?;
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(&bytes)?;
    file.flush()?;
    log::info!("wrote {} ({} entries)", path.display(), variants.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_variant_list_is_rejected() {
        assert!(matches!(encode_ico(&[]), Err(Error::NoVariants)));
        let path = Path::new("should-not-exist.ico");
        assert!(matches!(write_ico_file(&[], path), Err(Error::NoVariants)));
        assert!(!path.exists());
    }
}
