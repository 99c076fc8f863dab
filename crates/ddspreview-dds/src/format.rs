//! Format resolution.
//!
//! Turns the pixel format block and the optional DX10 header into a single
//! [`FormatDescriptor`] that drives surface sizing and tells the renderer
//! what it is about to upload.
//!
//! Resolution order encodes legacy precedence and must not change:
//!
//! 1. A DX10 header is authoritative.
//! 2. Otherwise a FourCC is mapped through the legacy table.
//! 3. Otherwise the bit count and channel masks describe the pixels.

use std::fmt;

use crate::bitmask::BitmaskLayout;
use crate::dxgi::DxgiFormat;
use crate::gl;
use crate::header::{DdsHeaderDxt10, DdsPixelFormat};
use crate::{Error, Result};

/// How the shader samples the channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SampleType {
    /// Float or normalized integer data, read through a float sampler.
    Float,
    /// Unsigned integer data, read through an unsigned sampler.
    Uint,
    /// Signed integer data, read through a signed sampler.
    Sint,
}

/// Storage granularity of a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PixelSize {
    /// Fixed-size blocks covering `width` x `height` pixels.
    Block { bytes: u32, width: u32, height: u32 },
    /// Bits per pixel.
    Bits(u32),
}

impl PixelSize {
    /// Bytes needed for one surface of the given dimensions.
    ///
    /// Per-pixel formats take whole bytes per pixel. Returns `None` when the
    /// size does not fit in `usize`.
    pub fn surface_bytes(&self, width: u32, height: u32) -> Option<usize> {
        let (width, height) = (width as usize, height as usize);
        match *self {
            PixelSize::Block {
                bytes,
                width: block_width,
                height: block_height,
            } => width
                .div_ceil(block_width as usize)
                .checked_mul(height.div_ceil(block_height as usize))?
                .checked_mul(bytes as usize),
            PixelSize::Bits(bits) => width
                .checked_mul(height)?
                .checked_mul(bits.div_ceil(8) as usize),
        }
    }
}

/// An OpenGL version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GlVersion {
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// What a renderer must support to consume a format.
///
/// The requirement is met by a context of at least `min_version`. Below that,
/// or when there is no core version at all, any one of `extensions` will do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Capability {
    pub min_version: Option<GlVersion>,
    pub extensions: &'static [&'static str],
}

impl Capability {
    /// Check the requirement against a running context.
    ///
    /// Extensions are only queried when the version alone is not enough.
    pub fn is_met_by<F>(&self, version: GlVersion, mut has_extension: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        if self.min_version.is_some_and(|min| version >= min) {
            return true;
        }
        self.extensions.iter().any(|ext| has_extension(ext))
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let extensions = self.extensions.join(", ");
        match self.min_version {
            Some(version) if extensions.is_empty() => write!(f, "OpenGL {version}"),
            Some(version) => write!(f, "OpenGL {version} or one of [{extensions}]"),
            None => write!(f, "one of [{extensions}]"),
        }
    }
}

/// The resolved identity of a texture's pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CanonicalFormat {
    /// A named DXGI format, from the DX10 header or a legacy FourCC.
    Dxgi(DxgiFormat),
    /// Pixels described only by bit count and channel masks.
    Bitmask(BitmaskLayout),
}

impl fmt::Display for CanonicalFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalFormat::Dxgi(format) => f.write_str(format.name()),
            CanonicalFormat::Bitmask(layout) => write!(f, "{}-bit bitmask", layout.bit_count),
        }
    }
}

/// Everything downstream consumers need to know about a texture's format.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormatDescriptor {
    format: CanonicalFormat,
    compressed: bool,
    size: PixelSize,
    channels: u8,
    sample: SampleType,
    requirement: Option<Capability>,
}

impl FormatDescriptor {
    /// Describe a DXGI format.
    pub fn from_dxgi(format: DxgiFormat) -> Result<Self> {
        let info = format.info().ok_or(Error::UnsupportedFormat(format))?;
        Ok(Self {
            format: CanonicalFormat::Dxgi(format),
            compressed: format.is_block_compressed(),
            size: info.size,
            channels: info.channels,
            sample: info.sample,
            requirement: gl::requirement(format),
        })
    }

    /// Describe a bitmask layout.
    pub fn from_bitmask(layout: BitmaskLayout) -> Self {
        Self {
            format: CanonicalFormat::Bitmask(layout),
            compressed: false,
            size: layout.pixel_size(),
            channels: layout.channel_count(),
            sample: SampleType::Float,
            requirement: None,
        }
    }

    pub fn format(&self) -> &CanonicalFormat {
        &self.format
    }

    /// The DXGI format, unless this is a bitmask layout.
    pub fn dxgi(&self) -> Option<DxgiFormat> {
        match self.format {
            CanonicalFormat::Dxgi(format) => Some(format),
            CanonicalFormat::Bitmask(_) => None,
        }
    }

    /// Whether surfaces are stored as BCn blocks.
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn pixel_size(&self) -> PixelSize {
        self.size
    }

    /// Bytes per block for block-based formats.
    pub fn bytes_per_block(&self) -> Option<u32> {
        match self.size {
            PixelSize::Block { bytes, .. } => Some(bytes),
            PixelSize::Bits(_) => None,
        }
    }

    /// Bits per pixel for per-pixel formats.
    pub fn bits_per_pixel(&self) -> Option<u32> {
        match self.size {
            PixelSize::Bits(bits) => Some(bits),
            PixelSize::Block { .. } => None,
        }
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn sample_type(&self) -> SampleType {
        self.sample
    }

    /// Capability the renderer must have, if any.
    pub fn requirement(&self) -> Option<&Capability> {
        self.requirement.as_ref()
    }

    /// Check the renderer can consume this format.
    pub fn check_capability<F>(&self, version: GlVersion, has_extension: F) -> Result<()>
    where
        F: FnMut(&str) -> bool,
    {
        match &self.requirement {
            Some(requirement) if !requirement.is_met_by(version, has_extension) => {
                Err(Error::UnsupportedCapability {
                    format: self.format.to_string(),
                    requirement: requirement.clone(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Bytes needed for one surface of the given dimensions.
    pub fn surface_bytes(&self, width: u32, height: u32) -> Option<usize> {
        self.size.surface_bytes(width, height)
    }
}

/// Resolve the canonical format of a texture.
pub fn resolve(
    pixel_format: &DdsPixelFormat,
    dx10: Option<&DdsHeaderDxt10>,
) -> Result<FormatDescriptor> {
    if let Some(dx10) = dx10 {
        let raw = dx10.dxgi_format.get();
        let format = DxgiFormat::from_u32(raw).ok_or(Error::UnknownDxgiFormat(raw))?;
        return FormatDescriptor::from_dxgi(format);
    }

    if pixel_format.is_four_cc() {
        let four_cc = pixel_format.four_cc;
        let format = four_cc.to_dxgi().ok_or(Error::UnknownFourCC(four_cc))?;
        return FormatDescriptor::from_dxgi(format);
    }

    Ok(FormatDescriptor::from_bitmask(BitmaskLayout::from_pixel_format(
        pixel_format,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fourcc::FourCC;
    use crate::test_util::DdsBuilder;

    fn pixel_format_of(builder: &DdsBuilder) -> DdsPixelFormat {
        builder.header().pixel_format
    }

    #[test]
    fn test_dxt1_is_bc1() {
        let pf = pixel_format_of(&DdsBuilder::four_cc(FourCC::DXT1, 4, 4));
        let desc = resolve(&pf, None).unwrap();

        assert_eq!(desc.dxgi(), Some(DxgiFormat::BC1_UNORM));
        assert!(desc.is_compressed());
        assert_eq!(desc.bytes_per_block(), Some(8));
        assert_eq!(desc.bits_per_pixel(), None);
        assert_eq!(desc.surface_bytes(4, 4), Some(8));
    }

    #[test]
    fn test_extended_header_wins_over_fourcc() {
        let builder = DdsBuilder::dx10(DxgiFormat::R16G16_UINT, 4, 4);
        let header = builder.header();
        let mut dx10 = builder.dx10_header().unwrap();
        assert_eq!(header.pixel_format.four_cc, FourCC::DX10);

        let desc = resolve(&header.pixel_format, Some(&dx10)).unwrap();
        assert_eq!(desc.dxgi(), Some(DxgiFormat::R16G16_UINT));

        // Even a legacy code in the FourCC field loses to the extended header.
        let mut pf = header.pixel_format;
        pf.four_cc = FourCC::DXT5;
        dx10.dxgi_format.set(DxgiFormat::R8_UNORM.to_u32());
        let desc = resolve(&pf, Some(&dx10)).unwrap();
        assert_eq!(desc.dxgi(), Some(DxgiFormat::R8_UNORM));
    }

    #[test]
    fn test_unknown_fourcc() {
        let pf = pixel_format_of(&DdsBuilder::four_cc(FourCC(*b"ZZZZ"), 4, 4));
        assert_eq!(
            resolve(&pf, None).unwrap_err(),
            Error::UnknownFourCC(FourCC(*b"ZZZZ"))
        );
    }

    #[test]
    fn test_unknown_and_unsupported_dxgi() {
        let builder = DdsBuilder::dx10(DxgiFormat::BC1_UNORM, 4, 4);
        let pf = builder.header().pixel_format;
        let mut dx10 = builder.dx10_header().unwrap();

        dx10.dxgi_format.set(500);
        assert_eq!(
            resolve(&pf, Some(&dx10)).unwrap_err(),
            Error::UnknownDxgiFormat(500)
        );

        dx10.dxgi_format.set(DxgiFormat::NV12.to_u32());
        assert_eq!(
            resolve(&pf, Some(&dx10)).unwrap_err(),
            Error::UnsupportedFormat(DxgiFormat::NV12)
        );
    }

    #[test]
    fn test_bitmask_is_not_promoted() {
        let pf = pixel_format_of(&DdsBuilder::bitmask(
            32,
            [0xFF, 0xFF00, 0xFF0000, 0xFF00_0000],
        ));
        let desc = resolve(&pf, None).unwrap();

        assert!(matches!(desc.format(), CanonicalFormat::Bitmask(_)));
        assert_eq!(desc.dxgi(), None);
        assert!(!desc.is_compressed());
        assert_eq!(desc.bits_per_pixel(), Some(32));
        assert_eq!(desc.channels(), 4);
        assert!(desc.requirement().is_none());
    }

    #[test]
    fn test_sample_types() {
        let uint = FormatDescriptor::from_dxgi(DxgiFormat::R8G8B8A8_UINT).unwrap();
        let sint = FormatDescriptor::from_dxgi(DxgiFormat::R32_SINT).unwrap();
        let unorm = FormatDescriptor::from_dxgi(DxgiFormat::R8G8B8A8_UNORM).unwrap();
        assert_eq!(uint.sample_type(), SampleType::Uint);
        assert_eq!(sint.sample_type(), SampleType::Sint);
        assert_eq!(unorm.sample_type(), SampleType::Float);
    }

    #[test]
    fn test_surface_bytes() {
        let bc1 = PixelSize::Block {
            bytes: 8,
            width: 4,
            height: 4,
        };
        assert_eq!(bc1.surface_bytes(1, 1), Some(8));
        assert_eq!(bc1.surface_bytes(5, 4), Some(16));
        assert_eq!(bc1.surface_bytes(256, 256), Some(64 * 64 * 8));

        let pair = PixelSize::Block {
            bytes: 4,
            width: 2,
            height: 1,
        };
        assert_eq!(pair.surface_bytes(3, 2), Some(2 * 2 * 4));

        assert_eq!(PixelSize::Bits(24).surface_bytes(3, 3), Some(27));
        // Sub-byte formats still take a whole byte per pixel.
        assert_eq!(PixelSize::Bits(1).surface_bytes(9, 2), Some(18));
        assert_eq!(PixelSize::Bits(12).surface_bytes(3, 1), Some(6));
    }

    #[test]
    fn test_surface_bytes_overflow() {
        let bc3 = PixelSize::Block {
            bytes: 16,
            width: 4,
            height: 4,
        };
        assert_eq!(bc3.surface_bytes(u32::MAX, u32::MAX), None);
        assert_eq!(PixelSize::Bits(128).surface_bytes(u32::MAX, u32::MAX), None);
    }

    #[test]
    fn test_bitmask_reports_declared_bit_depth() {
        let pf = pixel_format_of(&DdsBuilder::bitmask(12, [0xF00, 0xF0, 0xF, 0]));
        let desc = resolve(&pf, None).unwrap();

        assert_eq!(desc.bits_per_pixel(), Some(12));
        assert_eq!(desc.surface_bytes(2, 2), Some(8));
    }

    #[test]
    fn test_capability_version_or_extension() {
        let requirement = Capability {
            min_version: Some(GlVersion::new(4, 2)),
            extensions: &["GL_ARB_texture_compression_bptc"],
        };

        let mut queried = false;
        assert!(requirement.is_met_by(GlVersion::new(4, 5), |_| {
            queried = true;
            false
        }));
        assert!(!queried);

        assert!(requirement.is_met_by(GlVersion::new(3, 3), |ext| {
            ext == "GL_ARB_texture_compression_bptc"
        }));
        assert!(!requirement.is_met_by(GlVersion::new(3, 3), |_| false));
    }

    #[test]
    fn test_extension_only_capability() {
        let desc = FormatDescriptor::from_dxgi(DxgiFormat::BC3_UNORM).unwrap();
        let requirement = desc.requirement().unwrap();
        assert_eq!(requirement.min_version, None);

        assert!(desc
            .check_capability(GlVersion::new(4, 6), |ext| ext
                == "GL_EXT_texture_compression_s3tc")
            .is_ok());
        let err = desc
            .check_capability(GlVersion::new(4, 6), |_| false)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedCapability { .. }));
    }

    #[test]
    fn test_capability_display() {
        let desc = FormatDescriptor::from_dxgi(DxgiFormat::BC7_UNORM).unwrap();
        assert_eq!(
            desc.requirement().unwrap().to_string(),
            "OpenGL 4.2 or one of [GL_ARB_texture_compression_bptc]"
        );
    }
}
