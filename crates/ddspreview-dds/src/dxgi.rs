//! DXGI format vocabulary.
//!
//! The extended DX10 header names its pixel format with a `DXGI_FORMAT`
//! enumerant. Every enumerant is listed here together with the sizing and
//! channel information the rest of the crate needs.

use crate::format::SampleType::{Float, Sint, Uint};
use crate::format::{PixelSize, SampleType};

/// Sizing and channel information for a DXGI format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Bytes per block or bits per pixel.
    pub size: PixelSize,
    /// Number of channels stored.
    pub channels: u8,
    /// How the channels are sampled.
    pub sample: SampleType,
}

const fn bits(bits: u32, channels: u8, sample: SampleType) -> Option<FormatInfo> {
    Some(FormatInfo {
        size: PixelSize::Bits(bits),
        channels,
        sample,
    })
}

const fn bc(bytes: u32, channels: u8, sample: SampleType) -> Option<FormatInfo> {
    Some(FormatInfo {
        size: PixelSize::Block {
            bytes,
            width: 4,
            height: 4,
        },
        channels,
        sample,
    })
}

/// Two pixels packed into one block (4:2:2 layouts).
const fn pair(bytes: u32, channels: u8) -> Option<FormatInfo> {
    Some(FormatInfo {
        size: PixelSize::Block {
            bytes,
            width: 2,
            height: 1,
        },
        channels,
        sample: Float,
    })
}

macro_rules! dxgi_formats {
    ($($variant:ident = $value:literal => $info:expr,)*) => {
        /// A `DXGI_FORMAT` enumerant.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[repr(u32)]
        pub enum DxgiFormat {
            $($variant = $value,)*
        }

        impl DxgiFormat {
            /// Look up a raw enumerant.
            pub fn from_u32(value: u32) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)*
                    _ => None,
                }
            }

            fn ident(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            /// Sizing information, or `None` for formats without a simple
            /// per-surface layout (planar video formats and `UNKNOWN`).
            pub fn info(self) -> Option<FormatInfo> {
                match self {
                    $(Self::$variant => $info,)*
                }
            }
        }
    };
}

dxgi_formats! {
    UNKNOWN = 0 => None,
    R32G32B32A32_TYPELESS = 1 => bits(128, 4, Float),
    R32G32B32A32_FLOAT = 2 => bits(128, 4, Float),
    R32G32B32A32_UINT = 3 => bits(128, 4, Uint),
    R32G32B32A32_SINT = 4 => bits(128, 4, Sint),
    R32G32B32_TYPELESS = 5 => bits(96, 3, Float),
    R32G32B32_FLOAT = 6 => bits(96, 3, Float),
    R32G32B32_UINT = 7 => bits(96, 3, Uint),
    R32G32B32_SINT = 8 => bits(96, 3, Sint),
    R16G16B16A16_TYPELESS = 9 => bits(64, 4, Float),
    R16G16B16A16_FLOAT = 10 => bits(64, 4, Float),
    R16G16B16A16_UNORM = 11 => bits(64, 4, Float),
    R16G16B16A16_UINT = 12 => bits(64, 4, Uint),
    R16G16B16A16_SNORM = 13 => bits(64, 4, Float),
    R16G16B16A16_SINT = 14 => bits(64, 4, Sint),
    R32G32_TYPELESS = 15 => bits(64, 2, Float),
    R32G32_FLOAT = 16 => bits(64, 2, Float),
    R32G32_UINT = 17 => bits(64, 2, Uint),
    R32G32_SINT = 18 => bits(64, 2, Sint),
    R32G8X24_TYPELESS = 19 => bits(64, 2, Float),
    D32_FLOAT_S8X24_UINT = 20 => bits(64, 2, Float),
    R32_FLOAT_X8X24_TYPELESS = 21 => bits(64, 1, Float),
    X32_TYPELESS_G8X24_UINT = 22 => bits(64, 1, Uint),
    R10G10B10A2_TYPELESS = 23 => bits(32, 4, Float),
    R10G10B10A2_UNORM = 24 => bits(32, 4, Float),
    R10G10B10A2_UINT = 25 => bits(32, 4, Uint),
    R11G11B10_FLOAT = 26 => bits(32, 3, Float),
    R8G8B8A8_TYPELESS = 27 => bits(32, 4, Float),
    R8G8B8A8_UNORM = 28 => bits(32, 4, Float),
    R8G8B8A8_UNORM_SRGB = 29 => bits(32, 4, Float),
    R8G8B8A8_UINT = 30 => bits(32, 4, Uint),
    R8G8B8A8_SNORM = 31 => bits(32, 4, Float),
    R8G8B8A8_SINT = 32 => bits(32, 4, Sint),
    R16G16_TYPELESS = 33 => bits(32, 2, Float),
    R16G16_FLOAT = 34 => bits(32, 2, Float),
    R16G16_UNORM = 35 => bits(32, 2, Float),
    R16G16_UINT = 36 => bits(32, 2, Uint),
    R16G16_SNORM = 37 => bits(32, 2, Float),
    R16G16_SINT = 38 => bits(32, 2, Sint),
    R32_TYPELESS = 39 => bits(32, 1, Float),
    D32_FLOAT = 40 => bits(32, 1, Float),
    R32_FLOAT = 41 => bits(32, 1, Float),
    R32_UINT = 42 => bits(32, 1, Uint),
    R32_SINT = 43 => bits(32, 1, Sint),
    R24G8_TYPELESS = 44 => bits(32, 2, Float),
    D24_UNORM_S8_UINT = 45 => bits(32, 2, Float),
    R24_UNORM_X8_TYPELESS = 46 => bits(32, 1, Float),
    X24_TYPELESS_G8_UINT = 47 => bits(32, 1, Uint),
    R8G8_TYPELESS = 48 => bits(16, 2, Float),
    R8G8_UNORM = 49 => bits(16, 2, Float),
    R8G8_UINT = 50 => bits(16, 2, Uint),
    R8G8_SNORM = 51 => bits(16, 2, Float),
    R8G8_SINT = 52 => bits(16, 2, Sint),
    R16_TYPELESS = 53 => bits(16, 1, Float),
    R16_FLOAT = 54 => bits(16, 1, Float),
    D16_UNORM = 55 => bits(16, 1, Float),
    R16_UNORM = 56 => bits(16, 1, Float),
    R16_UINT = 57 => bits(16, 1, Uint),
    R16_SNORM = 58 => bits(16, 1, Float),
    R16_SINT = 59 => bits(16, 1, Sint),
    R8_TYPELESS = 60 => bits(8, 1, Float),
    R8_UNORM = 61 => bits(8, 1, Float),
    R8_UINT = 62 => bits(8, 1, Uint),
    R8_SNORM = 63 => bits(8, 1, Float),
    R8_SINT = 64 => bits(8, 1, Sint),
    A8_UNORM = 65 => bits(8, 1, Float),
    R1_UNORM = 66 => bits(1, 1, Float),
    R9G9B9E5_SHAREDEXP = 67 => bits(32, 3, Float),
    R8G8_B8G8_UNORM = 68 => pair(4, 3),
    G8R8_G8B8_UNORM = 69 => pair(4, 3),
    BC1_TYPELESS = 70 => bc(8, 4, Float),
    BC1_UNORM = 71 => bc(8, 4, Float),
    BC1_UNORM_SRGB = 72 => bc(8, 4, Float),
    BC2_TYPELESS = 73 => bc(16, 4, Float),
    BC2_UNORM = 74 => bc(16, 4, Float),
    BC2_UNORM_SRGB = 75 => bc(16, 4, Float),
    BC3_TYPELESS = 76 => bc(16, 4, Float),
    BC3_UNORM = 77 => bc(16, 4, Float),
    BC3_UNORM_SRGB = 78 => bc(16, 4, Float),
    BC4_TYPELESS = 79 => bc(8, 1, Float),
    BC4_UNORM = 80 => bc(8, 1, Float),
    BC4_SNORM = 81 => bc(8, 1, Float),
    BC5_TYPELESS = 82 => bc(16, 2, Float),
    BC5_UNORM = 83 => bc(16, 2, Float),
    BC5_SNORM = 84 => bc(16, 2, Float),
    B5G6R5_UNORM = 85 => bits(16, 3, Float),
    B5G5R5A1_UNORM = 86 => bits(16, 4, Float),
    B8G8R8A8_UNORM = 87 => bits(32, 4, Float),
    B8G8R8X8_UNORM = 88 => bits(32, 3, Float),
    R10G10B10_XR_BIAS_A2_UNORM = 89 => bits(32, 4, Float),
    B8G8R8A8_TYPELESS = 90 => bits(32, 4, Float),
    B8G8R8A8_UNORM_SRGB = 91 => bits(32, 4, Float),
    B8G8R8X8_TYPELESS = 92 => bits(32, 3, Float),
    B8G8R8X8_UNORM_SRGB = 93 => bits(32, 3, Float),
    BC6H_TYPELESS = 94 => bc(16, 3, Float),
    BC6H_UF16 = 95 => bc(16, 3, Float),
    BC6H_SF16 = 96 => bc(16, 3, Float),
    BC7_TYPELESS = 97 => bc(16, 4, Float),
    BC7_UNORM = 98 => bc(16, 4, Float),
    BC7_UNORM_SRGB = 99 => bc(16, 4, Float),
    AYUV = 100 => bits(32, 4, Float),
    Y410 = 101 => bits(32, 4, Float),
    Y416 = 102 => bits(64, 4, Float),
    NV12 = 103 => None,
    P010 = 104 => None,
    P016 = 105 => None,
    OPAQUE_420 = 106 => None,
    YUY2 = 107 => pair(4, 3),
    Y210 = 108 => pair(8, 3),
    Y216 = 109 => pair(8, 3),
    NV11 = 110 => None,
    AI44 = 111 => bits(8, 2, Float),
    IA44 = 112 => bits(8, 2, Float),
    P8 = 113 => bits(8, 1, Float),
    A8P8 = 114 => bits(16, 2, Float),
    B4G4R4A4_UNORM = 115 => bits(16, 4, Float),
    P208 = 130 => None,
    V208 = 131 => None,
    V408 = 132 => None,
}

impl DxgiFormat {
    /// The enumerant name without the `DXGI_FORMAT_` prefix.
    pub fn name(self) -> &'static str {
        match self {
            Self::OPAQUE_420 => "420_OPAQUE",
            other => other.ident(),
        }
    }

    /// Raw enumerant value.
    pub fn to_u32(self) -> u32 {
        self as u32
    }

    /// Whether the format stores 4x4 BCn blocks.
    pub fn is_block_compressed(self) -> bool {
        matches!(self.to_u32(), 70..=84 | 94..=99)
    }

    /// Whether the format is an sRGB variant.
    pub fn is_srgb(self) -> bool {
        self.name().ends_with("_SRGB")
    }
}

impl std::fmt::Display for DxgiFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
