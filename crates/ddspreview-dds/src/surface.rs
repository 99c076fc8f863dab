//! Surface layout and extraction.
//!
//! Surfaces are stored face-major, mip-minor: every mip level of the first
//! present face, then every level of the next. Consumers index the result
//! positionally, so the order here is part of the contract.

use ddspreview_common::ByteStream;
use tracing::{debug, trace, warn};

use crate::format::{FormatDescriptor, PixelSize};
use crate::header::DdsHeader;
use crate::{Error, Result};

/// A cubemap face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CubeFace {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl CubeFace {
    /// All faces, in on-disk order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PositiveX,
        CubeFace::NegativeX,
        CubeFace::PositiveY,
        CubeFace::NegativeY,
        CubeFace::PositiveZ,
        CubeFace::NegativeZ,
    ];

    /// The `DDSCAPS2_CUBEMAP_*` bit marking this face as present.
    pub const fn caps2_bit(self) -> u32 {
        match self {
            CubeFace::PositiveX => 0x400,
            CubeFace::NegativeX => 0x800,
            CubeFace::PositiveY => 0x1000,
            CubeFace::NegativeY => 0x2000,
            CubeFace::PositiveZ => 0x4000,
            CubeFace::NegativeZ => 0x8000,
        }
    }

    /// Faces flagged in `caps2`, in on-disk order.
    pub fn present_in(caps2: u32) -> Vec<CubeFace> {
        Self::ALL
            .into_iter()
            .filter(|face| caps2 & face.caps2_bit() != 0)
            .collect()
    }
}

/// Position and size of one surface, before it is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SurfaceSpan {
    /// Index among the present faces.
    pub face_index: usize,
    /// Cubemap face, `None` for plain 2D textures.
    pub face: Option<CubeFace>,
    pub level: u32,
    pub width: u32,
    pub height: u32,
    /// Size in bytes.
    pub len: usize,
}

/// Surface spans of a texture, in stream order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceLayout {
    width: u32,
    height: u32,
    mip_levels: u32,
    faces: Vec<Option<CubeFace>>,
    size: PixelSize,
}

impl SurfaceLayout {
    /// Lay out the surfaces of a texture.
    ///
    /// Fails when the base level is too large to address.
    pub fn new(header: &DdsHeader, format: &FormatDescriptor, is_cubemap: bool) -> Result<Self> {
        let faces = if is_cubemap {
            let faces = CubeFace::present_in(header.caps2.get());
            if faces.is_empty() {
                warn!("cubemap without any face bits set");
            }
            faces.into_iter().map(Some).collect()
        } else {
            vec![None]
        };

        let (width, height) = (header.width(), header.height());
        let size = format.pixel_size();
        if size.surface_bytes(width, height).is_none() {
            return Err(Error::MalformedHeader(format!(
                "surface size of {width}x{height} {} overflows",
                format.format()
            )));
        }

        Ok(Self {
            width,
            height,
            mip_levels: header.mip_levels(),
            faces,
            size,
        })
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn faces(&self) -> impl Iterator<Item = Option<CubeFace>> + '_ {
        self.faces.iter().copied()
    }

    pub fn mip_levels(&self) -> u32 {
        self.mip_levels
    }

    /// Iterate spans lazily, face-major then mip-minor.
    ///
    /// Dimensions restart from the base size for every face.
    pub fn spans(&self) -> impl Iterator<Item = SurfaceSpan> + '_ {
        self.faces
            .iter()
            .enumerate()
            .flat_map(move |(face_index, &face)| {
                let mut width = self.width;
                let mut height = self.height;
                (0..self.mip_levels).map(move |level| {
                    let span = SurfaceSpan {
                        face_index,
                        face,
                        level,
                        width,
                        height,
                        // Levels only shrink, and the base level was checked in `new`.
                        len: self
                            .size
                            .surface_bytes(width, height)
                            .unwrap_or(usize::MAX),
                    };
                    width = (width / 2).max(1);
                    height = (height / 2).max(1);
                    span
                })
            })
    }

    /// Total bytes of surface data the layout expects, or `None` if the
    /// sum does not fit in `usize`.
    pub fn total_bytes(&self) -> Option<usize> {
        self.spans()
            .try_fold(0usize, |total, span| total.checked_add(span.len))
    }
}

/// A decoded surface: one mip level of one face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub face_index: usize,
    pub face: Option<CubeFace>,
    pub level: u32,
    pub width: u32,
    pub height: u32,
    /// Offset of the first byte within the file.
    pub offset: usize,
    pub data: Vec<u8>,
}

/// Read every surface of `layout` from the stream.
///
/// Fails on the first surface that runs past the end of the stream; nothing
/// read before it is returned.
pub fn read_surfaces(layout: &SurfaceLayout, stream: &mut ByteStream<'_>) -> Result<Vec<Surface>> {
    let mut surfaces = Vec::new();

    for span in layout.spans() {
        let offset = stream.position();
        let data = stream
            .read_bytes(span.len)
            .map_err(|_| Error::TruncatedData {
                face: span.face_index,
                level: span.level,
                offset,
                needed: span.len,
                available: stream.remaining(),
            })?;

        trace!(
            face = span.face_index,
            level = span.level,
            width = span.width,
            height = span.height,
            offset,
            len = span.len,
            "read surface"
        );

        surfaces.push(Surface {
            face_index: span.face_index,
            face: span.face,
            level: span.level,
            width: span.width,
            height: span.height,
            offset,
            data: data.to_vec(),
        });
    }

    if !stream.is_empty() {
        debug!(trailing = stream.remaining(), "trailing bytes after surfaces");
    }

    Ok(surfaces)
}

/// Lay out and read every surface that follows the headers.
pub fn walk(
    header: &DdsHeader,
    format: &FormatDescriptor,
    is_cubemap: bool,
    stream: &mut ByteStream<'_>,
) -> Result<Vec<Surface>> {
    let layout = SurfaceLayout::new(header, format, is_cubemap)?;
    read_surfaces(&layout, stream)
}
