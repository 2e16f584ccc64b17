use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use image::{DynamicImage, RgbaImage};
use std::io::{Read, Write};

use crate::element::IconElement;
use crate::error::{Error, Result};
use crate::icontype::IconType;
use crate::resample;

/// The first four bytes of an ICNS file:
const ICNS_MAGIC_LITERAL: &[u8; 4] = b"icns";

/// The length of an icon family header, in bytes:
const ICON_FAMILY_HEADER_LENGTH: u32 = 8;

/// A set of icons stored in a single ICNS file.
pub struct IconFamily {
    /// The icon elements stored in the ICNS file.
    pub elements: Vec<IconElement>,
}

impl IconFamily {
    /// Creates a new, empty icon family.
    pub fn new() -> IconFamily {
        IconFamily { elements: Vec::new() }
    }

    /// Returns true if the icon family contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Builds a complete icon family from a single source logo, resizing it
    /// to every supported icon type in the fixed
    /// [`IconType::ALL`](crate::IconType::ALL) order.  The source is coerced
    /// to RGBA before resampling and is never mutated.
    pub fn pack(source: &DynamicImage) -> Result<IconFamily> {
        let rgba = source.to_rgba8();
        let mut family = IconFamily::new();
        for &icon_type in &IconType::ALL {
            let size = icon_type.pixel_width();
            let resized = resample::resize_square(&rgba, size);
            log::debug!("packing '{}' ({}x{})", icon_type.ostype(), size, size);
            family.add_icon_with_type(&resized, icon_type)?;
        }
        Ok(family)
    }

    /// Encodes the image into the family using the given icon type.  Returns
    /// an error if the image has the wrong dimensions for the selected type.
    pub fn add_icon_with_type(&mut self,
                              image: &RgbaImage,
                              icon_type: IconType)
                              -> Result<()> {
        self.elements
            .push(IconElement::encode_image_with_type(image, icon_type)?);
        Ok(())
    }

    /// Decodes an image from the family with the given icon type.  Returns
    /// an error if no element with that type is present, or if the encoded
    /// data is malformed.
    pub fn get_icon_with_type(&self, icon_type: IconType) -> Result<RgbaImage> {
        self.find_element(icon_type)?.decode_image()
    }

    fn find_element(&self, icon_type: IconType) -> Result<&IconElement> {
        let ostype = icon_type.ostype();
        self.elements
            .iter()
            .find(|el| el.ostype == ostype)
            .ok_or(Error::ElementNotFound(ostype))
    }

    /// Reads an icon family from an ICNS file.
    pub fn read<R: Read>(mut reader: R) -> Result<IconFamily> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != *ICNS_MAGIC_LITERAL {
            return Err(Error::InvalidData("not an icns file \
                                           (wrong magic literal)"));
        }
        let file_length = reader.read_u32::<BigEndian>()?;
        let mut file_position: u32 = ICON_FAMILY_HEADER_LENGTH;
        let mut family = IconFamily::new();
        while file_position < file_length {
            let element = IconElement::read(reader.by_ref())?;
            file_position += element.total_length();
            family.elements.push(element);
        }
        Ok(family)
    }

    /// Writes the icon family to an ICNS file.  The header carries the total
    /// encoded length, which is known up front because every element already
    /// holds its encoded payload.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(ICNS_MAGIC_LITERAL)?;
        writer.write_u32::<BigEndian>(self.total_length())?;
        for element in &self.elements {
            element.write(writer.by_ref())?;
        }
        Ok(())
    }

    /// Returns the encoded length of the file, in bytes, including the
    /// length of the header.
    pub fn total_length(&self) -> u32 {
        let mut length = ICON_FAMILY_HEADER_LENGTH;
        for element in &self.elements {
            length += element.total_length();
        }
        length
    }
}

impl Default for IconFamily {
    fn default() -> IconFamily {
        IconFamily::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icontype::OSType;
    use image::Rgba;
    use std::io::Cursor;

    #[test]
    fn write_empty_icon_family() {
        let family = IconFamily::new();
        assert!(family.is_empty());
        let mut output: Vec<u8> = vec![];
        family.write(&mut output).expect("write failed");
        assert_eq!(b"icns\0\0\0\x08", &output as &[u8]);
    }

    #[test]
    fn read_icon_family_with_fake_elements() {
        let input: Cursor<&[u8]> =
            Cursor::new(b"icns\0\0\0\x1equux\0\0\0\x0dhellold!!\0\0\0\x09#");
        let family = IconFamily::read(input).expect("read failed");
        assert_eq!(2, family.elements.len());
        assert_eq!(OSType(*b"quux"), family.elements[0].ostype);
        assert_eq!(5, family.elements[0].data.len());
        assert_eq!(OSType(*b"ld!!"), family.elements[1].ostype);
        assert_eq!(1, family.elements[1].data.len());
    }

    #[test]
    fn write_icon_family_with_fake_elements() {
        let mut family = IconFamily::new();
        family.elements
            .push(IconElement::new(OSType(*b"quux"), b"hello".to_vec()));
        family.elements
            .push(IconElement::new(OSType(*b"ld!!"), b"#".to_vec()));
        let mut output: Vec<u8> = vec![];
        family.write(&mut output).expect("write failed");
        assert_eq!(b"icns\0\0\0\x1equux\0\0\0\x0dhellold!!\0\0\0\x09#",
                   &output as &[u8]);
        assert_eq!(family.total_length() as usize, output.len());
    }

    #[test]
    fn pack_covers_every_icon_type() {
        let source = DynamicImage::ImageRgba8(
            RgbaImage::from_pixel(512, 512, Rgba([200, 30, 30, 255])));
        let family = IconFamily::pack(&source).expect("pack failed");
        assert_eq!(family.elements.len(), IconType::ALL.len());
        for (&icon_type, element) in
            IconType::ALL.iter().zip(&family.elements)
        {
            assert_eq!(icon_type.ostype(), element.ostype);
        }
        let icon = family.get_icon_with_type(IconType::RGBA32_512x512_2x)
            .expect("decode failed");
        assert_eq!(icon.width(), 1024);
        assert_eq!(icon.height(), 1024);
    }

    #[test]
    fn header_length_matches_written_bytes() {
        let source = DynamicImage::ImageRgba8(
            RgbaImage::from_pixel(64, 64, Rgba([1, 2, 3, 255])));
        let family = IconFamily::pack(&source).expect("pack failed");
        let mut output: Vec<u8> = vec![];
        family.write(&mut output).expect("write failed");
        assert_eq!(family.total_length() as usize, output.len());
        let declared = u32::from_be_bytes([output[4], output[5], output[6],
                                           output[7]]);
        assert_eq!(declared as usize, output.len());
    }
}
