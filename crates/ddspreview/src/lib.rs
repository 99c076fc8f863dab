//! DDS Preview - DDS texture inspection library.
//!
//! This crate provides a unified interface to the DDS Preview crates.
//!
//! # Crates
//!
//! - [`ddspreview_common`] - Common utilities (byte stream)
//! - [`ddspreview_dds`] - DDS header decoding, format resolution and surface extraction
//!
//! # Example
//!
//! ```no_run
//! use ddspreview::prelude::*;
//!
//! let bytes = std::fs::read("texture.dds")?;
//! let mut file = DdsFile::new(bytes, "texture.dds");
//! file.load()?;
//!
//! let texture = file.texture()?;
//! println!("{}", texture.description());
//! if let Some(requirement) = texture.capability() {
//!     println!("needs {requirement}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use ddspreview_common as common;
pub use ddspreview_dds as dds;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ddspreview_common::ByteStream;
    pub use ddspreview_dds::{
        CanonicalFormat, Capability, CubeFace, DdsFile, DdsTexture, DxgiFormat, FormatDescriptor,
        FourCC, GlTextureFormat, GlVersion, Surface,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
