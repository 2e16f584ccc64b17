//! Library for generating the icon assets a desktop/web build needs from a
//! single source logo: Windows `.ico` files, Mac `.icns` files, and a web
//! `favicon.ico` mirrored into the application bundle.
//!
//! The `.icns` container can be produced two ways: packed directly (a
//! portable encoder for Apple's icon family format, see
//! <https://en.wikipedia.org/wiki/Apple_Icon_Image_format>), or by writing
//! an iconset directory and compiling it with the macOS `iconutil` tool,
//! with a high-resolution PNG fallback where that tool does not exist.

#![warn(missing_docs)]

mod element;
mod error;
mod family;
pub mod favicon;
pub mod icoio;
pub mod iconset;
mod icontype;
pub mod resample;

pub use self::element::IconElement;
pub use self::error::{Error, Result};
pub use self::family::IconFamily;
pub use self::icontype::{IconType, OSType};
pub use self::resample::IconVariant;
