//! DDS texture parsing for the DDS Preview plugin.
//!
//! A DDS file is a magic number, a fixed 124-byte header, an optional DX10
//! extension header, and then the raw surface data: every mip level of
//! every stored face, back to back. This crate turns that into:
//!
//! - a resolved pixel format ([`FormatDescriptor`]), whether the file used
//!   a DXGI enumerant, a legacy FourCC code, or raw channel bitmasks
//! - the list of [`Surface`]s in stream order (face-major, mip-minor)
//! - the OpenGL capability the format needs and how to upload it ([`gl`])
//! - a one-line human readable summary
//!
//! Nothing here decodes compressed blocks; compressed surfaces are handed to
//! the GPU as-is.
//!
//! # Example
//!
//! ```no_run
//! use ddspreview_dds::{DdsTexture, GlVersion};
//!
//! let data = std::fs::read("texture.dds")?;
//! let texture = DdsTexture::parse(&data)?;
//!
//! println!("{}", texture.description());
//! texture
//!     .format()
//!     .check_capability(GlVersion::new(3, 3), |ext| ext == "GL_EXT_texture_compression_s3tc")?;
//!
//! for surface in texture.surfaces() {
//!     println!("level {}: {}x{}", surface.level, surface.width, surface.height);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod bitmask;
mod describe;
mod dxgi;
mod error;
mod file;
mod format;
mod fourcc;
pub mod gl;
mod header;
mod surface;

#[cfg(test)]
mod test_util;

pub use bitmask::BitmaskLayout;
pub use describe::{describe, describe_bitmask};
pub use dxgi::DxgiFormat;
pub use error::{Error, Result};
pub use file::{DdsFile, DdsTexture};
pub use format::{
    resolve, CanonicalFormat, Capability, FormatDescriptor, GlVersion, PixelSize, SampleType,
};
pub use fourcc::FourCC;
pub use gl::{Conversion, GlTextureFormat};
pub use header::{decode, DdsHeader, DdsHeaderDxt10, DdsPixelFormat};
pub use surface::{read_surfaces, walk, CubeFace, Surface, SurfaceLayout, SurfaceSpan};

/// DDS file magic bytes ("DDS ").
pub const DDS_MAGIC: &[u8; 4] = b"DDS ";
