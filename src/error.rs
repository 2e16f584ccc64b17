use std::io;
use std::process::ExitStatus;

use thiserror::Error;

use crate::icontype::OSType;

/// Errors returned by icon generation.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file or stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Decoding or encoding a raster image failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// A container writer was handed an empty variant list.
    #[error("no icon variants to write")]
    NoVariants,

    /// An ICNS stream did not have the expected layout.
    #[error("invalid icns data: {0}")]
    InvalidData(&'static str),

    /// An element's type code is not one of the supported icon types.
    #[error("unsupported element type '{0}'")]
    UnsupportedOSType(OSType),

    /// An image's dimensions do not match the icon type it was encoded as.
    #[error("image is {width}x{height}, but '{ostype}' holds a \
             {required}x{required} icon")]
    WrongDimensions {
        /// The type code the image was encoded (or decoded) as.
        ostype: OSType,
        /// The pixel dimension that type requires.
        required: u32,
        /// Actual image width.
        width: u32,
        /// Actual image height.
        height: u32,
    },

    /// The icon family has no element with the requested type code.
    #[error("no '{0}' element in the icon family")]
    ElementNotFound(OSType),

    /// `iconutil` was present but exited unsuccessfully.
    #[error("iconutil {status}: {stderr}")]
    IconUtil {
        /// The utility's exit status.
        status: ExitStatus,
        /// Captured standard error output.
        stderr: String,
    },
}

/// Alias for a `Result` with the error type [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
