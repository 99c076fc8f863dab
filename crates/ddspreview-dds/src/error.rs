//! Error types for DDS handling.

use thiserror::Error;

use crate::dxgi::DxgiFormat;
use crate::format::Capability;
use crate::fourcc::FourCC;

/// Errors that can occur when loading a DDS file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Bad magic, short header, or structurally invalid header fields.
    #[error("malformed DDS header: {0}")]
    MalformedHeader(String),

    /// Legacy FourCC code with no known equivalent.
    #[error("unknown FourCC {0}")]
    UnknownFourCC(FourCC),

    /// DX10 header names an enumerant outside the DXGI vocabulary.
    #[error("unknown DXGI format {0}")]
    UnknownDxgiFormat(u32),

    /// Known DXGI format whose surfaces cannot be sized.
    #[error("unsupported DXGI format {0}")]
    UnsupportedFormat(DxgiFormat),

    /// Stream ended before a surface was fully read.
    #[error("truncated surface data for face {face} level {level} at offset {offset}: needed {needed} bytes but only {available} available")]
    TruncatedData {
        face: usize,
        level: u32,
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The renderer lacks a capability the format requires.
    #[error("{format} requires {requirement}")]
    UnsupportedCapability {
        format: String,
        requirement: Capability,
    },

    /// `load` was called on an already loaded file.
    #[error("DDS file is already loaded")]
    AlreadyLoaded,

    /// Accessor used before a successful `load`.
    #[error("DDS file is not loaded")]
    NotLoaded,
}

/// Result type for DDS operations.
pub type Result<T> = std::result::Result<T, Error>;
