//! Uncompressed pixel formats described by channel bitmasks.

use byteorder::{ByteOrder, LittleEndian};

use crate::format::PixelSize;
use crate::header::DdsPixelFormat;

/// Bit count and channel masks of an uncompressed legacy format.
///
/// Common layouts such as RGBA8 are kept as plain masks rather
/// than mapped to a named DXGI format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BitmaskLayout {
    /// `DDPF_*` flags from the pixel format.
    pub flags: u32,
    /// Declared bits per pixel.
    pub bit_count: u32,
    /// Red, luminance or Y mask.
    pub r_mask: u32,
    pub g_mask: u32,
    pub b_mask: u32,
    pub a_mask: u32,
}

/// One channel's position inside a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Channel {
    mask: u32,
    shift: u32,
    max: u64,
}

impl Channel {
    fn new(mask: u32) -> Option<Self> {
        if mask == 0 {
            return None;
        }
        let shift = mask.trailing_zeros();
        let width = 32 - (mask >> shift).leading_zeros();
        Some(Self {
            mask,
            shift,
            max: (1u64 << width) - 1,
        })
    }

    /// Extract and rescale to 8 bits.
    fn unorm8(&self, pixel: u32) -> u8 {
        let raw = u64::from((pixel & self.mask) >> self.shift);
        ((raw * 255 + self.max / 2) / self.max) as u8
    }
}

impl BitmaskLayout {
    pub fn from_pixel_format(pixel_format: &DdsPixelFormat) -> Self {
        Self {
            flags: pixel_format.flags(),
            bit_count: pixel_format.rgb_bit_count.get(),
            r_mask: pixel_format.r_bit_mask.get(),
            g_mask: pixel_format.g_bit_mask.get(),
            b_mask: pixel_format.b_bit_mask.get(),
            a_mask: pixel_format.a_bit_mask.get(),
        }
    }

    fn has_flag(&self, flag: u32) -> bool {
        self.flags & flag != 0
    }

    /// RGB or YUV colour data.
    pub fn has_color(&self) -> bool {
        self.has_flag(DdsPixelFormat::DDPF_RGB | DdsPixelFormat::DDPF_YUV)
    }

    pub fn is_luminance(&self) -> bool {
        self.has_flag(DdsPixelFormat::DDPF_LUMINANCE)
    }

    /// Whether the alpha mask carries data.
    pub fn has_alpha(&self) -> bool {
        self.a_mask != 0
            && self.has_flag(DdsPixelFormat::DDPF_ALPHA | DdsPixelFormat::DDPF_ALPHAPIXELS)
    }

    pub fn channel_count(&self) -> u8 {
        let color = if self.has_color() {
            [self.r_mask, self.g_mask, self.b_mask]
                .iter()
                .filter(|&&m| m != 0)
                .count() as u8
        } else if self.is_luminance() {
            1
        } else {
            0
        };
        color + u8::from(self.has_alpha())
    }

    /// Storage size at the declared bit count.
    ///
    /// Surface sizing rounds each pixel up to whole bytes.
    pub fn pixel_size(&self) -> PixelSize {
        PixelSize::Bits(self.bit_count)
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.bit_count.div_ceil(8) as usize
    }

    /// Expand one surface to tightly packed RGBA8.
    ///
    /// Missing colour channels read as 0 and missing alpha as 255;
    /// luminance is replicated into red, green and blue. Pixels wider than
    /// 32 bits only contribute their low 32 bits, which is all a mask can
    /// address.
    pub fn expand_to_rgba8(&self, data: &[u8]) -> Vec<u8> {
        let stride = self.bytes_per_pixel().max(1);
        let read = stride.min(4);

        let (r, g, b) = if self.has_color() {
            (
                Channel::new(self.r_mask),
                Channel::new(self.g_mask),
                Channel::new(self.b_mask),
            )
        } else if self.is_luminance() {
            let l = Channel::new(self.r_mask);
            (l, l, l)
        } else {
            (None, None, None)
        };
        let a = if self.has_alpha() {
            Channel::new(self.a_mask)
        } else {
            None
        };

        let mut out = Vec::with_capacity(data.len() / stride * 4);
        for chunk in data.chunks_exact(stride) {
            let pixel = LittleEndian::read_uint(chunk, read) as u32;

            out.push(r.map_or(0, |c| c.unorm8(pixel)));
            out.push(g.map_or(0, |c| c.unorm8(pixel)));
            out.push(b.map_or(0, |c| c.unorm8(pixel)));
            out.push(a.map_or(255, |c| c.unorm8(pixel)));
        }
        out
    }
}
