//! FourCC codes and the legacy FourCC to DXGI table.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::dxgi::DxgiFormat;

/// Four-character code identifying a legacy pixel format.
///
/// Older writers also store raw `D3DFORMAT` numbers in this field, which is
/// why it is not always printable ASCII.
#[derive(Clone, Copy, PartialEq, Eq, Hash, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(transparent)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// DXT1 compression.
    pub const DXT1: Self = Self(*b"DXT1");
    /// DXT2 compression (premultiplied DXT3).
    pub const DXT2: Self = Self(*b"DXT2");
    /// DXT3 compression.
    pub const DXT3: Self = Self(*b"DXT3");
    /// DXT4 compression (premultiplied DXT5).
    pub const DXT4: Self = Self(*b"DXT4");
    /// DXT5 compression.
    pub const DXT5: Self = Self(*b"DXT5");
    /// DX10 extended header.
    pub const DX10: Self = Self(*b"DX10");
    /// ATI single channel compression.
    pub const ATI1: Self = Self(*b"ATI1");
    /// ATI two channel compression.
    pub const ATI2: Self = Self(*b"ATI2");
    /// BC4U compression.
    pub const BC4U: Self = Self(*b"BC4U");
    /// BC4S compression.
    pub const BC4S: Self = Self(*b"BC4S");
    /// BC5U compression.
    pub const BC5U: Self = Self(*b"BC5U");
    /// BC5S compression.
    pub const BC5S: Self = Self(*b"BC5S");
    pub const RGBG: Self = Self(*b"RGBG");
    pub const GRGB: Self = Self(*b"GRGB");
    pub const YUY2: Self = Self(*b"YUY2");

    /// Build a FourCC from a `D3DFORMAT` number.
    pub const fn from_d3d(value: u32) -> Self {
        Self(value.to_le_bytes())
    }

    /// The code as a little-endian integer.
    pub const fn to_u32(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    /// The DXGI format this legacy code is equivalent to.
    pub fn to_dxgi(self) -> Option<DxgiFormat> {
        let format = match self {
            Self::DXT1 => DxgiFormat::BC1_UNORM,
            Self::DXT2 | Self::DXT3 => DxgiFormat::BC2_UNORM,
            Self::DXT4 | Self::DXT5 => DxgiFormat::BC3_UNORM,
            Self::ATI1 | Self::BC4U => DxgiFormat::BC4_UNORM,
            Self::BC4S => DxgiFormat::BC4_SNORM,
            Self::ATI2 | Self::BC5U => DxgiFormat::BC5_UNORM,
            Self::BC5S => DxgiFormat::BC5_SNORM,
            Self::RGBG => DxgiFormat::R8G8_B8G8_UNORM,
            Self::GRGB => DxgiFormat::G8R8_G8B8_UNORM,
            Self::YUY2 => DxgiFormat::YUY2,
            _ => match self.to_u32() {
                36 => DxgiFormat::R16G16B16A16_UNORM,
                110 => DxgiFormat::R16G16B16A16_SNORM,
                111 => DxgiFormat::R16_FLOAT,
                112 => DxgiFormat::R16G16_FLOAT,
                113 => DxgiFormat::R16G16B16A16_FLOAT,
                114 => DxgiFormat::R32_FLOAT,
                115 => DxgiFormat::R32G32_FLOAT,
                116 => DxgiFormat::R32G32B32A32_FLOAT,
                _ => return None,
            },
        };
        Some(format)
    }

    fn is_printable(self) -> bool {
        self.0.iter().all(|b| b.is_ascii_graphic() || *b == b' ')
    }
}

impl std::fmt::Display for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_printable() {
            self.0.iter().try_for_each(|&b| write!(f, "{}", b as char))
        } else {
            write!(f, "{}", self.to_u32())
        }
    }
}

impl std::fmt::Debug for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FourCC({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FourCC {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FourCC::DXT1, DxgiFormat::BC1_UNORM)]
    #[case(FourCC::DXT2, DxgiFormat::BC2_UNORM)]
    #[case(FourCC::DXT3, DxgiFormat::BC2_UNORM)]
    #[case(FourCC::DXT4, DxgiFormat::BC3_UNORM)]
    #[case(FourCC::DXT5, DxgiFormat::BC3_UNORM)]
    #[case(FourCC::ATI1, DxgiFormat::BC4_UNORM)]
    #[case(FourCC::BC4S, DxgiFormat::BC4_SNORM)]
    #[case(FourCC::ATI2, DxgiFormat::BC5_UNORM)]
    #[case(FourCC::BC5S, DxgiFormat::BC5_SNORM)]
    #[case(FourCC::GRGB, DxgiFormat::G8R8_G8B8_UNORM)]
    #[case(FourCC::from_d3d(36), DxgiFormat::R16G16B16A16_UNORM)]
    #[case(FourCC::from_d3d(113), DxgiFormat::R16G16B16A16_FLOAT)]
    #[case(FourCC::from_d3d(116), DxgiFormat::R32G32B32A32_FLOAT)]
    fn test_legacy_table(#[case] four_cc: FourCC, #[case] expected: DxgiFormat) {
        assert_eq!(four_cc.to_dxgi(), Some(expected));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(FourCC(*b"ABCD").to_dxgi(), None);
        assert_eq!(FourCC::DX10.to_dxgi(), None);
        assert_eq!(FourCC::from_d3d(0).to_dxgi(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(FourCC::DXT5.to_string(), "DXT5");
        assert_eq!(FourCC::from_d3d(113).to_string(), "113");
    }
}
