//! OpenGL upload descriptors and capability requirements.
//!
//! Nothing here touches a GL context. These are the enums a renderer passes
//! to `glTexImage2D` / `glCompressedTexImage2D` and the version/extension
//! checks it must make first.

use crate::dxgi::DxgiFormat;
use crate::format::{CanonicalFormat, Capability, FormatDescriptor, GlVersion, SampleType};

const GL_3_0: GlVersion = GlVersion::new(3, 0);
const GL_4_2: GlVersion = GlVersion::new(4, 2);

const S3TC: &[&str] = &["GL_EXT_texture_compression_s3tc"];
const RGTC: &[&str] = &[
    "GL_ARB_texture_compression_rgtc",
    "GL_EXT_texture_compression_rgtc",
];
const BPTC: &[&str] = &["GL_ARB_texture_compression_bptc"];
const TEXTURE_INTEGER: &[&str] = &["GL_EXT_texture_integer"];
const TEXTURE_FLOAT: &[&str] = &["GL_ARB_texture_float"];
const SHARED_EXPONENT: &[&str] = &["GL_EXT_texture_shared_exponent"];
const PACKED_FLOAT: &[&str] = &["GL_EXT_packed_float"];
const TEXTURE_RG: &[&str] = &["GL_ARB_texture_rg"];

/// Pixel transfer formats.
pub mod pixel {
    pub const RED: u32 = 0x1903;
    pub const ALPHA: u32 = 0x1906;
    pub const RGB: u32 = 0x1907;
    pub const RGBA: u32 = 0x1908;
    pub const BGRA: u32 = 0x80E1;
    pub const RG: u32 = 0x8227;
    pub const RG_INTEGER: u32 = 0x8228;
    pub const RED_INTEGER: u32 = 0x8D94;
    pub const RGB_INTEGER: u32 = 0x8D98;
    pub const RGBA_INTEGER: u32 = 0x8D99;
}

/// Pixel transfer types.
pub mod ty {
    pub const BYTE: u32 = 0x1400;
    pub const UNSIGNED_BYTE: u32 = 0x1401;
    pub const SHORT: u32 = 0x1402;
    pub const UNSIGNED_SHORT: u32 = 0x1403;
    pub const INT: u32 = 0x1404;
    pub const UNSIGNED_INT: u32 = 0x1405;
    pub const FLOAT: u32 = 0x1406;
    pub const HALF_FLOAT: u32 = 0x140B;
    pub const UNSIGNED_SHORT_5_6_5: u32 = 0x8363;
    pub const UNSIGNED_SHORT_4_4_4_4_REV: u32 = 0x8365;
    pub const UNSIGNED_SHORT_1_5_5_5_REV: u32 = 0x8366;
    pub const UNSIGNED_INT_2_10_10_10_REV: u32 = 0x8368;
    pub const UNSIGNED_INT_10F_11F_11F_REV: u32 = 0x8C3B;
    pub const UNSIGNED_INT_5_9_9_9_REV: u32 = 0x8C3E;
}

/// Sized internal formats.
pub mod internal {
    pub const ALPHA8: u32 = 0x803C;
    pub const RGB8: u32 = 0x8051;
    pub const RGBA4: u32 = 0x8056;
    pub const RGB5_A1: u32 = 0x8057;
    pub const RGBA8: u32 = 0x8058;
    pub const RGB10_A2: u32 = 0x8059;
    pub const RGBA16: u32 = 0x805B;
    pub const RGBA32F: u32 = 0x8814;
    pub const RGB32F: u32 = 0x8815;
    pub const RGBA16F: u32 = 0x881A;
    pub const R8: u32 = 0x8229;
    pub const R16: u32 = 0x822A;
    pub const RG8: u32 = 0x822B;
    pub const RG16: u32 = 0x822C;
    pub const R16F: u32 = 0x822D;
    pub const R32F: u32 = 0x822E;
    pub const RG16F: u32 = 0x822F;
    pub const RG32F: u32 = 0x8230;
    pub const R8I: u32 = 0x8231;
    pub const R8UI: u32 = 0x8232;
    pub const R16I: u32 = 0x8233;
    pub const R16UI: u32 = 0x8234;
    pub const R32I: u32 = 0x8235;
    pub const R32UI: u32 = 0x8236;
    pub const RG8I: u32 = 0x8237;
    pub const RG8UI: u32 = 0x8238;
    pub const RG16I: u32 = 0x8239;
    pub const RG16UI: u32 = 0x823A;
    pub const RG32I: u32 = 0x823B;
    pub const RG32UI: u32 = 0x823C;
    pub const R11F_G11F_B10F: u32 = 0x8C3A;
    pub const RGB9_E5: u32 = 0x8C3D;
    pub const SRGB8: u32 = 0x8C41;
    pub const SRGB8_ALPHA8: u32 = 0x8C43;
    pub const RGBA32UI: u32 = 0x8D70;
    pub const RGB32UI: u32 = 0x8D71;
    pub const RGBA16UI: u32 = 0x8D76;
    pub const RGBA8UI: u32 = 0x8D7C;
    pub const RGBA32I: u32 = 0x8D82;
    pub const RGB32I: u32 = 0x8D83;
    pub const RGBA16I: u32 = 0x8D88;
    pub const RGBA8I: u32 = 0x8D8E;
    pub const RGB565: u32 = 0x8D62;
    pub const R8_SNORM: u32 = 0x8F94;
    pub const RG8_SNORM: u32 = 0x8F95;
    pub const RGBA8_SNORM: u32 = 0x8F97;
    pub const R16_SNORM: u32 = 0x8F98;
    pub const RG16_SNORM: u32 = 0x8F99;
    pub const RGBA16_SNORM: u32 = 0x8F9B;
    pub const RGB10_A2UI: u32 = 0x906F;

    pub const COMPRESSED_RGBA_S3TC_DXT1: u32 = 0x83F1;
    pub const COMPRESSED_RGBA_S3TC_DXT3: u32 = 0x83F2;
    pub const COMPRESSED_RGBA_S3TC_DXT5: u32 = 0x83F3;
    pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT1: u32 = 0x8C4D;
    pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT3: u32 = 0x8C4E;
    pub const COMPRESSED_SRGB_ALPHA_S3TC_DXT5: u32 = 0x8C4F;
    pub const COMPRESSED_RED_RGTC1: u32 = 0x8DBB;
    pub const COMPRESSED_SIGNED_RED_RGTC1: u32 = 0x8DBC;
    pub const COMPRESSED_RG_RGTC2: u32 = 0x8DBD;
    pub const COMPRESSED_SIGNED_RG_RGTC2: u32 = 0x8DBE;
    pub const COMPRESSED_RGBA_BPTC_UNORM: u32 = 0x8E8C;
    pub const COMPRESSED_SRGB_ALPHA_BPTC_UNORM: u32 = 0x8E8D;
    pub const COMPRESSED_RGB_BPTC_SIGNED_FLOAT: u32 = 0x8E8E;
    pub const COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT: u32 = 0x8E8F;
}

/// Work the renderer must do on surface bytes before uploading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Upload the surface as stored.
    None,
    /// Expand with [`BitmaskLayout::expand_to_rgba8`](crate::BitmaskLayout::expand_to_rgba8) first.
    ExpandBitmask,
}

/// How to hand a surface to OpenGL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlTextureFormat {
    pub internal_format: u32,
    /// Transfer format; zero for compressed formats.
    pub format: u32,
    /// Transfer type; zero for compressed formats.
    pub pixel_type: u32,
    pub compressed: bool,
    pub conversion: Conversion,
}

impl GlTextureFormat {
    const fn uncompressed(internal_format: u32, format: u32, pixel_type: u32) -> Self {
        Self {
            internal_format,
            format,
            pixel_type,
            compressed: false,
            conversion: Conversion::None,
        }
    }

    const fn compressed(internal_format: u32) -> Self {
        Self {
            internal_format,
            format: 0,
            pixel_type: 0,
            compressed: true,
            conversion: Conversion::None,
        }
    }
}

/// GL description of a DXGI format, if GL can consume it directly.
pub fn dxgi_texture_format(format: DxgiFormat) -> Option<GlTextureFormat> {
    use internal as i;
    use pixel as p;
    use DxgiFormat::*;

    let un = GlTextureFormat::uncompressed;
    let bc = GlTextureFormat::compressed;

    let gl = match format {
        R32G32B32A32_TYPELESS | R32G32B32A32_FLOAT => un(i::RGBA32F, p::RGBA, ty::FLOAT),
        R32G32B32A32_UINT => un(i::RGBA32UI, p::RGBA_INTEGER, ty::UNSIGNED_INT),
        R32G32B32A32_SINT => un(i::RGBA32I, p::RGBA_INTEGER, ty::INT),
        R32G32B32_TYPELESS | R32G32B32_FLOAT => un(i::RGB32F, p::RGB, ty::FLOAT),
        R32G32B32_UINT => un(i::RGB32UI, p::RGB_INTEGER, ty::UNSIGNED_INT),
        R32G32B32_SINT => un(i::RGB32I, p::RGB_INTEGER, ty::INT),
        R16G16B16A16_FLOAT => un(i::RGBA16F, p::RGBA, ty::HALF_FLOAT),
        R16G16B16A16_TYPELESS | R16G16B16A16_UNORM => {
            un(i::RGBA16, p::RGBA, ty::UNSIGNED_SHORT)
        }
        R16G16B16A16_UINT => un(i::RGBA16UI, p::RGBA_INTEGER, ty::UNSIGNED_SHORT),
        R16G16B16A16_SNORM => un(i::RGBA16_SNORM, p::RGBA, ty::SHORT),
        R16G16B16A16_SINT => un(i::RGBA16I, p::RGBA_INTEGER, ty::SHORT),
        R32G32_TYPELESS | R32G32_FLOAT => un(i::RG32F, p::RG, ty::FLOAT),
        R32G32_UINT => un(i::RG32UI, p::RG_INTEGER, ty::UNSIGNED_INT),
        R32G32_SINT => un(i::RG32I, p::RG_INTEGER, ty::INT),
        R10G10B10A2_TYPELESS | R10G10B10A2_UNORM => {
            un(i::RGB10_A2, p::RGBA, ty::UNSIGNED_INT_2_10_10_10_REV)
        }
        R10G10B10A2_UINT => un(i::RGB10_A2UI, p::RGBA_INTEGER, ty::UNSIGNED_INT_2_10_10_10_REV),
        R11G11B10_FLOAT => un(i::R11F_G11F_B10F, p::RGB, ty::UNSIGNED_INT_10F_11F_11F_REV),
        R8G8B8A8_TYPELESS | R8G8B8A8_UNORM => un(i::RGBA8, p::RGBA, ty::UNSIGNED_BYTE),
        R8G8B8A8_UNORM_SRGB => un(i::SRGB8_ALPHA8, p::RGBA, ty::UNSIGNED_BYTE),
        R8G8B8A8_UINT => un(i::RGBA8UI, p::RGBA_INTEGER, ty::UNSIGNED_BYTE),
        R8G8B8A8_SNORM => un(i::RGBA8_SNORM, p::RGBA, ty::BYTE),
        R8G8B8A8_SINT => un(i::RGBA8I, p::RGBA_INTEGER, ty::BYTE),
        R16G16_FLOAT => un(i::RG16F, p::RG, ty::HALF_FLOAT),
        R16G16_TYPELESS | R16G16_UNORM => un(i::RG16, p::RG, ty::UNSIGNED_SHORT),
        R16G16_UINT => un(i::RG16UI, p::RG_INTEGER, ty::UNSIGNED_SHORT),
        R16G16_SNORM => un(i::RG16_SNORM, p::RG, ty::SHORT),
        R16G16_SINT => un(i::RG16I, p::RG_INTEGER, ty::SHORT),
        R32_TYPELESS | R32_FLOAT | D32_FLOAT => un(i::R32F, p::RED, ty::FLOAT),
        R32_UINT => un(i::R32UI, p::RED_INTEGER, ty::UNSIGNED_INT),
        R32_SINT => un(i::R32I, p::RED_INTEGER, ty::INT),
        R8G8_TYPELESS | R8G8_UNORM => un(i::RG8, p::RG, ty::UNSIGNED_BYTE),
        R8G8_UINT => un(i::RG8UI, p::RG_INTEGER, ty::UNSIGNED_BYTE),
        R8G8_SNORM => un(i::RG8_SNORM, p::RG, ty::BYTE),
        R8G8_SINT => un(i::RG8I, p::RG_INTEGER, ty::BYTE),
        R16_FLOAT => un(i::R16F, p::RED, ty::HALF_FLOAT),
        R16_TYPELESS | R16_UNORM | D16_UNORM => un(i::R16, p::RED, ty::UNSIGNED_SHORT),
        R16_UINT => un(i::R16UI, p::RED_INTEGER, ty::UNSIGNED_SHORT),
        R16_SNORM => un(i::R16_SNORM, p::RED, ty::SHORT),
        R16_SINT => un(i::R16I, p::RED_INTEGER, ty::SHORT),
        R8_TYPELESS | R8_UNORM => un(i::R8, p::RED, ty::UNSIGNED_BYTE),
        R8_UINT => un(i::R8UI, p::RED_INTEGER, ty::UNSIGNED_BYTE),
        R8_SNORM => un(i::R8_SNORM, p::RED, ty::BYTE),
        R8_SINT => un(i::R8I, p::RED_INTEGER, ty::BYTE),
        A8_UNORM => un(i::ALPHA8, p::ALPHA, ty::UNSIGNED_BYTE),
        R9G9B9E5_SHAREDEXP => un(i::RGB9_E5, p::RGB, ty::UNSIGNED_INT_5_9_9_9_REV),
        B5G6R5_UNORM => un(i::RGB565, p::RGB, ty::UNSIGNED_SHORT_5_6_5),
        B5G5R5A1_UNORM => un(i::RGB5_A1, p::BGRA, ty::UNSIGNED_SHORT_1_5_5_5_REV),
        B4G4R4A4_UNORM => un(i::RGBA4, p::BGRA, ty::UNSIGNED_SHORT_4_4_4_4_REV),
        B8G8R8A8_TYPELESS | B8G8R8A8_UNORM => un(i::RGBA8, p::BGRA, ty::UNSIGNED_BYTE),
        B8G8R8A8_UNORM_SRGB => un(i::SRGB8_ALPHA8, p::BGRA, ty::UNSIGNED_BYTE),
        B8G8R8X8_TYPELESS | B8G8R8X8_UNORM => un(i::RGB8, p::BGRA, ty::UNSIGNED_BYTE),
        B8G8R8X8_UNORM_SRGB => un(i::SRGB8, p::BGRA, ty::UNSIGNED_BYTE),
        BC1_TYPELESS | BC1_UNORM => bc(i::COMPRESSED_RGBA_S3TC_DXT1),
        BC1_UNORM_SRGB => bc(i::COMPRESSED_SRGB_ALPHA_S3TC_DXT1),
        BC2_TYPELESS | BC2_UNORM => bc(i::COMPRESSED_RGBA_S3TC_DXT3),
        BC2_UNORM_SRGB => bc(i::COMPRESSED_SRGB_ALPHA_S3TC_DXT3),
        BC3_TYPELESS | BC3_UNORM => bc(i::COMPRESSED_RGBA_S3TC_DXT5),
        BC3_UNORM_SRGB => bc(i::COMPRESSED_SRGB_ALPHA_S3TC_DXT5),
        BC4_TYPELESS | BC4_UNORM => bc(i::COMPRESSED_RED_RGTC1),
        BC4_SNORM => bc(i::COMPRESSED_SIGNED_RED_RGTC1),
        BC5_TYPELESS | BC5_UNORM => bc(i::COMPRESSED_RG_RGTC2),
        BC5_SNORM => bc(i::COMPRESSED_SIGNED_RG_RGTC2),
        BC6H_TYPELESS | BC6H_UF16 => bc(i::COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT),
        BC6H_SF16 => bc(i::COMPRESSED_RGB_BPTC_SIGNED_FLOAT),
        BC7_TYPELESS | BC7_UNORM => bc(i::COMPRESSED_RGBA_BPTC_UNORM),
        BC7_UNORM_SRGB => bc(i::COMPRESSED_SRGB_ALPHA_BPTC_UNORM),
        _ => return None,
    };
    Some(gl)
}

/// GL description of any resolved format.
pub fn texture_format(format: &CanonicalFormat) -> Option<GlTextureFormat> {
    match format {
        CanonicalFormat::Dxgi(format) => dxgi_texture_format(*format),
        CanonicalFormat::Bitmask(_) => Some(GlTextureFormat {
            conversion: Conversion::ExpandBitmask,
            ..GlTextureFormat::uncompressed(internal::RGBA8, pixel::RGBA, ty::UNSIGNED_BYTE)
        }),
    }
}

const fn needs(min_version: Option<GlVersion>, extensions: &'static [&'static str]) -> Capability {
    Capability {
        min_version,
        extensions,
    }
}

/// Capability a renderer needs before it can sample `format`.
pub(crate) fn requirement(format: DxgiFormat) -> Option<Capability> {
    let capability = match format.to_u32() {
        70..=78 => needs(None, S3TC),
        79..=84 => needs(Some(GL_3_0), RGTC),
        94..=99 => needs(Some(GL_4_2), BPTC),
        _ => match format {
            DxgiFormat::R9G9B9E5_SHAREDEXP => needs(Some(GL_3_0), SHARED_EXPONENT),
            DxgiFormat::R11G11B10_FLOAT => needs(Some(GL_3_0), PACKED_FLOAT),
            _ => {
                if format.info()?.sample != SampleType::Float {
                    return Some(needs(Some(GL_3_0), TEXTURE_INTEGER));
                }
                let gl = dxgi_texture_format(format)?;
                match (gl.pixel_type, gl.format) {
                    (ty::FLOAT | ty::HALF_FLOAT, _) => needs(Some(GL_3_0), TEXTURE_FLOAT),
                    (_, pixel::RED | pixel::RG) => needs(Some(GL_3_0), TEXTURE_RG),
                    _ => return None,
                }
            }
        },
    };
    Some(capability)
}

impl FormatDescriptor {
    /// How to upload surfaces of this format to OpenGL.
    pub fn gl_format(&self) -> Option<GlTextureFormat> {
        texture_format(self.format())
    }
}
