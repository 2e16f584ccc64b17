use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use image::{ImageFormat, RgbaImage};
use std::io::{Cursor, Read, Write};

use crate::error::{Error, Result};
use crate::icontype::{IconType, OSType};

/// The length of an icon element header, in bytes:
const ICON_ELEMENT_HEADER_LENGTH: u32 = 8;

/// One entry in an ICNS file: a four-byte type code followed by a
/// length-prefixed, PNG-encoded icon payload.
pub struct IconElement {
    /// The OSType identifying this element (e.g. `ic07`).
    pub ostype: OSType,
    /// The PNG-encoded data payload.
    pub data: Vec<u8>,
}

impl IconElement {
    /// Creates an icon element with the given OSType and data payload.
    pub fn new(ostype: OSType, data: Vec<u8>) -> IconElement {
        IconElement { ostype, data }
    }

    /// Encodes the image as a PNG payload tagged with the given icon type.
    /// Returns an error if the image does not have exactly the pixel
    /// dimensions that type requires.
    pub fn encode_image_with_type(image: &RgbaImage,
                                  icon_type: IconType)
                                  -> Result<IconElement> {
        let required = icon_type.pixel_width();
        if image.width() != required || image.height() != required {
            return Err(Error::WrongDimensions {
                ostype: icon_type.ostype(),
                required,
                width: image.width(),
                height: image.height(),
            });
        }
        let mut data = Cursor::new(Vec::new());
        image.write_to(&mut data, ImageFormat::Png)?;
        Ok(IconElement::new(icon_type.ostype(), data.into_inner()))
    }

    /// Decodes the element's payload back into an image.  Returns an error
    /// if the type code is not a supported icon type, or if the payload is
    /// malformed or has the wrong dimensions for its type.
    pub fn decode_image(&self) -> Result<RgbaImage> {
        let icon_type = self.icon_type()
            .ok_or(Error::UnsupportedOSType(self.ostype))?;
        let image = image::load_from_memory(&self.data)?;
        let required = icon_type.pixel_width();
        if image.width() != required || image.height() != required {
            return Err(Error::WrongDimensions {
                ostype: self.ostype,
                required,
                width: image.width(),
                height: image.height(),
            });
        }
        Ok(image.to_rgba8())
    }

    /// Returns the type of icon encoded by this element, or `None` if this
    /// element does not encode a supported icon type.
    pub fn icon_type(&self) -> Option<IconType> {
        IconType::from_ostype(self.ostype)
    }

    /// Returns the encoded length of the element, in bytes, including the
    /// length of the header.
    pub fn total_length(&self) -> u32 {
        ICON_ELEMENT_HEADER_LENGTH + (self.data.len() as u32)
    }

    /// Reads an icon element from within an ICNS file.
    pub fn read<R: Read>(mut reader: R) -> Result<IconElement> {
        let mut raw_ostype = [0u8; 4];
        reader.read_exact(&mut raw_ostype)?;
        let element_length = reader.read_u32::<BigEndian>()?;
        if element_length < ICON_ELEMENT_HEADER_LENGTH {
            return Err(Error::InvalidData("invalid element length"));
        }
        let data_length = element_length - ICON_ELEMENT_HEADER_LENGTH;
        let mut data = vec![0u8; data_length as usize];
        reader.read_exact(&mut data)?;
        Ok(IconElement::new(OSType(raw_ostype), data))
    }

    /// Writes the icon element to within an ICNS file.
    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        let OSType(ref raw_ostype) = self.ostype;
        writer.write_all(raw_ostype)?;
        writer.write_u32::<BigEndian>(self.total_length())?;
        writer.write_all(&self.data)?;
        Ok(())
    }
}
