//! DDS header structures and decoding.

use ddspreview_common::ByteStream;
use tracing::warn;
use zerocopy::little_endian::U32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::dxgi::DxgiFormat;
use crate::fourcc::FourCC;
use crate::{Error, Result, DDS_MAGIC};

/// DDS file header, as stored after the magic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct DdsHeader {
    /// Header size (should be 124).
    pub size: U32,
    /// Header flags (`DDSD_*`).
    pub flags: U32,
    /// Image height.
    pub height: U32,
    /// Image width.
    pub width: U32,
    /// Pitch or linear size.
    pub pitch_or_linear_size: U32,
    /// Depth (for volume textures).
    pub depth: U32,
    /// Number of mipmap levels.
    pub mipmap_count: U32,
    /// Reserved.
    pub reserved1: [U32; 11],
    /// Pixel format.
    pub pixel_format: DdsPixelFormat,
    /// Surface capabilities.
    pub caps: U32,
    /// Surface capabilities 2 (cubemap and volume bits).
    pub caps2: U32,
    /// Surface capabilities 3.
    pub caps3: U32,
    /// Surface capabilities 4.
    pub caps4: U32,
    /// Reserved.
    pub reserved2: U32,
}

impl DdsHeader {
    /// Expected header size.
    pub const SIZE: u32 = 124;

    pub const DDSD_CAPS: u32 = 0x1;
    pub const DDSD_HEIGHT: u32 = 0x2;
    pub const DDSD_WIDTH: u32 = 0x4;
    pub const DDSD_PITCH: u32 = 0x8;
    pub const DDSD_PIXELFORMAT: u32 = 0x1000;
    /// `mipmap_count` is valid.
    pub const DDSD_MIPMAPCOUNT: u32 = 0x20000;
    pub const DDSD_LINEARSIZE: u32 = 0x80000;
    pub const DDSD_DEPTH: u32 = 0x800000;

    /// Cubemap; the face bits say which faces are stored.
    pub const DDSCAPS2_CUBEMAP: u32 = 0x200;
    pub const DDSCAPS2_VOLUME: u32 = 0x200000;

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width.get()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height.get()
    }

    /// Check if the mipmap count field is meaningful.
    pub fn has_mipmap_count(&self) -> bool {
        self.flags.get() & Self::DDSD_MIPMAPCOUNT != 0
    }

    /// Number of mip levels stored per face.
    ///
    /// Files that do not flag a mipmap count hold exactly one level. A
    /// flagged count of zero is treated the same way.
    pub fn mip_levels(&self) -> u32 {
        if self.has_mipmap_count() {
            self.mipmap_count.get().max(1)
        } else {
            1
        }
    }

    /// Check if this is a cubemap.
    pub fn is_cubemap(&self) -> bool {
        self.caps2.get() & Self::DDSCAPS2_CUBEMAP != 0
    }

    /// Check if this is a DX10 extended header.
    pub fn is_dx10(&self) -> bool {
        self.pixel_format.is_four_cc() && self.pixel_format.four_cc == FourCC::DX10
    }
}

/// DDS pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct DdsPixelFormat {
    /// Structure size (should be 32).
    pub size: U32,
    /// Pixel format flags (`DDPF_*`).
    pub flags: U32,
    /// Four-character code for compression.
    pub four_cc: FourCC,
    /// Number of bits per pixel (for uncompressed).
    pub rgb_bit_count: U32,
    /// Red (or luminance, or Y) bit mask.
    pub r_bit_mask: U32,
    /// Green bit mask.
    pub g_bit_mask: U32,
    /// Blue bit mask.
    pub b_bit_mask: U32,
    /// Alpha bit mask.
    pub a_bit_mask: U32,
}

impl DdsPixelFormat {
    /// Expected structure size.
    pub const SIZE: u32 = 32;

    /// Alpha mask is valid alongside colour data.
    pub const DDPF_ALPHAPIXELS: u32 = 0x1;
    /// Alpha-only data.
    pub const DDPF_ALPHA: u32 = 0x2;
    /// `four_cc` is valid.
    pub const DDPF_FOURCC: u32 = 0x4;
    pub const DDPF_RGB: u32 = 0x40;
    pub const DDPF_YUV: u32 = 0x200;
    pub const DDPF_LUMINANCE: u32 = 0x20000;

    /// Flags that describe data through the bit count and masks.
    pub const BITMASK_FLAGS: u32 =
        Self::DDPF_ALPHA | Self::DDPF_RGB | Self::DDPF_YUV | Self::DDPF_LUMINANCE;

    pub fn flags(&self) -> u32 {
        self.flags.get()
    }

    /// Check if the format is named by the FourCC field.
    pub fn is_four_cc(&self) -> bool {
        self.flags() & Self::DDPF_FOURCC != 0
    }

    /// Check if the format is described by bit count and channel masks.
    pub fn is_bitmask(&self) -> bool {
        !self.is_four_cc() && self.flags() & Self::BITMASK_FLAGS != 0
    }

    pub fn has_flag(&self, flag: u32) -> bool {
        self.flags() & flag != 0
    }
}

/// DX10 extended header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct DdsHeaderDxt10 {
    /// DXGI format.
    pub dxgi_format: U32,
    /// Resource dimension.
    pub resource_dimension: U32,
    /// Misc flags.
    pub misc_flag: U32,
    /// Array size.
    pub array_size: U32,
    /// Misc flags 2 (alpha mode in the low bits).
    pub misc_flags2: U32,
}

impl DdsHeaderDxt10 {
    /// Expected header size.
    pub const SIZE: usize = 20;

    pub const RESOURCE_DIMENSION_TEXTURE2D: u32 = 3;
    pub const RESOURCE_DIMENSION_TEXTURE3D: u32 = 4;
    pub const MISC_TEXTURECUBE: u32 = 0x4;

    /// The declared format, if it is part of the DXGI vocabulary.
    pub fn format(&self) -> Option<DxgiFormat> {
        DxgiFormat::from_u32(self.dxgi_format.get())
    }

    /// Alpha mode (`DDS_ALPHA_MODE_*`).
    pub fn alpha_mode(&self) -> u32 {
        self.misc_flags2.get() & 0x7
    }
}

fn malformed(context: &str, err: ddspreview_common::Error) -> Error {
    Error::MalformedHeader(format!("{context}: {err}"))
}

/// Decode the magic, primary header and optional DX10 header.
///
/// On success the stream is positioned at the first surface byte.
pub fn decode(stream: &mut ByteStream<'_>) -> Result<(DdsHeader, Option<DdsHeaderDxt10>)> {
    stream
        .expect_magic(DDS_MAGIC)
        .map_err(|e| malformed("magic", e))?;

    let header: DdsHeader = stream
        .read_struct()
        .map_err(|e| malformed("primary header", e))?;

    if header.size.get() != DdsHeader::SIZE {
        warn!(size = header.size.get(), "unexpected DDS header size");
    }
    if header.pixel_format.size.get() != DdsPixelFormat::SIZE {
        warn!(
            size = header.pixel_format.size.get(),
            "unexpected DDS pixel format size"
        );
    }

    if header.width() == 0 || header.height() == 0 {
        return Err(Error::MalformedHeader(format!(
            "zero dimension {}x{}",
            header.width(),
            header.height()
        )));
    }

    let pixel_format = &header.pixel_format;
    if !pixel_format.is_four_cc() {
        if !pixel_format.is_bitmask() {
            return Err(Error::MalformedHeader(format!(
                "pixel format flags {:#x} declare neither FourCC nor bitmask data",
                pixel_format.flags()
            )));
        }
        if pixel_format.rgb_bit_count.get() == 0 {
            return Err(Error::MalformedHeader(
                "bitmask pixel format with zero bit count".into(),
            ));
        }
    }

    if header.caps2.get() & DdsHeader::DDSCAPS2_VOLUME != 0 {
        warn!(
            depth = header.depth.get(),
            "volume texture, only the first slice is read"
        );
    }

    let dx10 = if header.is_dx10() {
        let dx10: DdsHeaderDxt10 = stream
            .read_struct()
            .map_err(|e| malformed("DX10 header", e))?;

        if dx10.array_size.get() > 1 {
            warn!(
                array_size = dx10.array_size.get(),
                "texture array, only the first element is read"
            );
        }
        if dx10.resource_dimension.get() != DdsHeaderDxt10::RESOURCE_DIMENSION_TEXTURE2D {
            warn!(
                dimension = dx10.resource_dimension.get(),
                "non-2D resource dimension"
            );
        }
        Some(dx10)
    } else {
        None
    };

    Ok((header, dx10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::DdsBuilder;

    #[test]
    fn test_struct_sizes() {
        assert_eq!(std::mem::size_of::<DdsHeader>(), DdsHeader::SIZE as usize);
        assert_eq!(
            std::mem::size_of::<DdsPixelFormat>(),
            DdsPixelFormat::SIZE as usize
        );
        assert_eq!(std::mem::size_of::<DdsHeaderDxt10>(), DdsHeaderDxt10::SIZE);
    }

    #[test]
    fn test_decode_legacy_header() {
        let data = DdsBuilder::four_cc(FourCC::DXT1, 64, 32).mips(7).build();
        let mut stream = ByteStream::new(&data);

        let (header, dx10) = decode(&mut stream).unwrap();
        assert_eq!(header.width(), 64);
        assert_eq!(header.height(), 32);
        assert_eq!(header.mip_levels(), 7);
        assert_eq!(header.pixel_format.four_cc, FourCC::DXT1);
        assert!(dx10.is_none());
        assert_eq!(stream.position(), 4 + DdsHeader::SIZE as usize);
    }

    #[test]
    fn test_decode_dx10_header() {
        let data = DdsBuilder::dx10(DxgiFormat::BC7_UNORM, 16, 16).build();
        let mut stream = ByteStream::new(&data);

        let (_, dx10) = decode(&mut stream).unwrap();
        let dx10 = dx10.unwrap();
        assert_eq!(dx10.format(), Some(DxgiFormat::BC7_UNORM));
        assert_eq!(
            stream.position(),
            4 + DdsHeader::SIZE as usize + DdsHeaderDxt10::SIZE
        );
    }

    #[test]
    fn test_dx10_fourcc_without_fourcc_flag_is_not_extended() {
        let mut builder = DdsBuilder::bitmask(32, [0xFF, 0xFF00, 0xFF0000, 0xFF000000]);
        builder.four_cc_field = FourCC::DX10;
        let data = builder.build();
        let mut stream = ByteStream::new(&data);

        let (_, dx10) = decode(&mut stream).unwrap();
        assert!(dx10.is_none());
        assert_eq!(stream.position(), 4 + DdsHeader::SIZE as usize);
    }

    #[test]
    fn test_bad_magic() {
        let mut data = DdsBuilder::four_cc(FourCC::DXT1, 4, 4).build();
        data[3] = b'X';
        let err = decode(&mut ByteStream::new(&data)).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }

    #[test]
    fn test_short_header() {
        let data = DdsBuilder::four_cc(FourCC::DXT1, 4, 4).build();
        let err = decode(&mut ByteStream::new(&data[..100])).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }

    #[test]
    fn test_short_dx10_header() {
        let data = DdsBuilder::dx10(DxgiFormat::BC1_UNORM, 4, 4).build();
        let err = decode(&mut ByteStream::new(&data[..4 + 124 + 10])).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }

    #[test]
    fn test_zero_width_rejected() {
        let data = DdsBuilder::four_cc(FourCC::DXT1, 0, 4).build();
        let err = decode(&mut ByteStream::new(&data)).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }

    #[test]
    fn test_pixel_format_without_coding_rejected() {
        let mut builder = DdsBuilder::four_cc(FourCC::DXT1, 4, 4);
        builder.pixel_flags = 0;
        let err = decode(&mut ByteStream::new(&builder.build())).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader(_)));
    }

    #[test]
    fn test_zero_mipmap_count_is_one_level() {
        let data = DdsBuilder::four_cc(FourCC::DXT1, 8, 8).mips(0).build();
        let (header, _) = decode(&mut ByteStream::new(&data)).unwrap();
        assert!(header.has_mipmap_count());
        assert_eq!(header.mip_levels(), 1);
    }
}
