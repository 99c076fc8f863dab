//! Synthetic DDS files for tests.

use zerocopy::{FromZeros, IntoBytes};

use crate::dxgi::DxgiFormat;
use crate::format::resolve;
use crate::fourcc::FourCC;
use crate::header::{DdsHeader, DdsHeaderDxt10, DdsPixelFormat};
use crate::surface::SurfaceLayout;
use crate::DDS_MAGIC;

const DDSD_REQUIRED: u32 = DdsHeader::DDSD_CAPS
    | DdsHeader::DDSD_HEIGHT
    | DdsHeader::DDSD_WIDTH
    | DdsHeader::DDSD_PIXELFORMAT;

/// Builds the bytes of a DDS file field by field.
#[derive(Debug, Clone)]
pub(crate) struct DdsBuilder {
    pub width: u32,
    pub height: u32,
    pub flags: u32,
    pub mipmap_count: u32,
    pub caps2: u32,
    pub pixel_flags: u32,
    pub four_cc_field: FourCC,
    pub bit_count: u32,
    pub masks: [u32; 4],
    pub dxgi_format: Option<u32>,
    pub payload: Vec<u8>,
}

impl DdsBuilder {
    fn base(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            flags: DDSD_REQUIRED,
            mipmap_count: 0,
            caps2: 0,
            pixel_flags: 0,
            four_cc_field: FourCC([0; 4]),
            bit_count: 0,
            masks: [0; 4],
            dxgi_format: None,
            payload: Vec::new(),
        }
    }

    pub fn four_cc(four_cc: FourCC, width: u32, height: u32) -> Self {
        Self {
            pixel_flags: DdsPixelFormat::DDPF_FOURCC,
            four_cc_field: four_cc,
            ..Self::base(width, height)
        }
    }

    pub fn dx10(format: DxgiFormat, width: u32, height: u32) -> Self {
        Self {
            dxgi_format: Some(format.to_u32()),
            ..Self::four_cc(FourCC::DX10, width, height)
        }
    }

    /// A 4x4 RGB bitmask texture; alpha is flagged when the alpha mask is set.
    pub fn bitmask(bit_count: u32, masks: [u32; 4]) -> Self {
        let mut pixel_flags = DdsPixelFormat::DDPF_RGB;
        if masks[3] != 0 {
            pixel_flags |= DdsPixelFormat::DDPF_ALPHAPIXELS;
        }
        Self {
            pixel_flags,
            bit_count,
            masks,
            ..Self::base(4, 4)
        }
    }

    pub fn alpha_only(mut self) -> Self {
        self.pixel_flags = DdsPixelFormat::DDPF_ALPHA;
        self
    }

    pub fn luminance(mut self) -> Self {
        self.pixel_flags = DdsPixelFormat::DDPF_LUMINANCE;
        if self.masks[3] != 0 {
            self.pixel_flags |= DdsPixelFormat::DDPF_ALPHAPIXELS;
        }
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn mips(mut self, count: u32) -> Self {
        self.flags |= DdsHeader::DDSD_MIPMAPCOUNT;
        self.mipmap_count = count;
        self
    }

    pub fn cubemap(mut self, face_bits: u32) -> Self {
        self.caps2 = DdsHeader::DDSCAPS2_CUBEMAP | face_bits;
        self
    }

    /// Append `len` bytes of counting pattern after the headers.
    pub fn payload_len(mut self, len: usize) -> Self {
        self.payload = (0..len).map(|i| i as u8).collect();
        self
    }

    pub fn header(&self) -> DdsHeader {
        let mut header = DdsHeader::new_zeroed();
        header.size.set(DdsHeader::SIZE);
        header.flags.set(self.flags);
        header.height.set(self.height);
        header.width.set(self.width);
        header.mipmap_count.set(self.mipmap_count);
        header.caps.set(0x1000);
        header.caps2.set(self.caps2);

        let pf = &mut header.pixel_format;
        pf.size.set(DdsPixelFormat::SIZE);
        pf.flags.set(self.pixel_flags);
        pf.four_cc = self.four_cc_field;
        pf.rgb_bit_count.set(self.bit_count);
        pf.r_bit_mask.set(self.masks[0]);
        pf.g_bit_mask.set(self.masks[1]);
        pf.b_bit_mask.set(self.masks[2]);
        pf.a_bit_mask.set(self.masks[3]);
        header
    }

    pub fn dx10_header(&self) -> Option<DdsHeaderDxt10> {
        self.dxgi_format.map(|format| {
            let mut dx10 = DdsHeaderDxt10::new_zeroed();
            dx10.dxgi_format.set(format);
            dx10.resource_dimension
                .set(DdsHeaderDxt10::RESOURCE_DIMENSION_TEXTURE2D);
            dx10.array_size.set(1);
            dx10
        })
    }

    /// The layout the parser should find, computed from the builder fields.
    pub fn layout(&self) -> SurfaceLayout {
        let header = self.header();
        let dx10 = self.dx10_header();
        let format = resolve(&header.pixel_format, dx10.as_ref()).expect("resolvable format");
        SurfaceLayout::new(&header, &format, header.is_cubemap()).expect("addressable layout")
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(DDS_MAGIC);
        out.extend_from_slice(self.header().as_bytes());
        if let Some(dx10) = self.dx10_header() {
            out.extend_from_slice(dx10.as_bytes());
        }
        out.extend_from_slice(&self.payload);
        out
    }
}
