//! DDS file loading.

use ddspreview_common::ByteStream;
use tracing::debug;

use crate::describe::describe;
use crate::format::{resolve, Capability, FormatDescriptor};
use crate::gl::GlTextureFormat;
use crate::header::{decode, DdsHeader, DdsHeaderDxt10};
use crate::surface::{read_surfaces, CubeFace, Surface, SurfaceLayout};
use crate::{Error, Result};

/// A fully parsed DDS texture.
///
/// Produced once by [`DdsTexture::parse`] and immutable afterwards.
#[derive(Debug, Clone)]
pub struct DdsTexture {
    header: DdsHeader,
    dx10_header: Option<DdsHeaderDxt10>,
    format: FormatDescriptor,
    cubemap: bool,
    faces: Vec<Option<CubeFace>>,
    surfaces: Vec<Surface>,
    bytes_consumed: usize,
}

impl DdsTexture {
    /// Parse headers and every surface from a complete file.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut stream = ByteStream::new(data);

        let (header, dx10_header) = decode(&mut stream)?;
        let format = resolve(&header.pixel_format, dx10_header.as_ref())?;
        let cubemap = header.is_cubemap();

        let layout = SurfaceLayout::new(&header, &format, cubemap)?;
        let surfaces = read_surfaces(&layout, &mut stream)?;

        debug!(
            width = header.width(),
            height = header.height(),
            format = %format.format(),
            cubemap,
            faces = layout.face_count(),
            mip_levels = layout.mip_levels(),
            surfaces = surfaces.len(),
            "parsed DDS texture"
        );

        Ok(Self {
            header,
            dx10_header,
            format,
            cubemap,
            faces: layout.faces().collect(),
            surfaces,
            bytes_consumed: stream.position(),
        })
    }

    pub fn header(&self) -> &DdsHeader {
        &self.header
    }

    /// The DX10 extended header, when the file has one.
    pub fn dx10_header(&self) -> Option<&DdsHeaderDxt10> {
        self.dx10_header.as_ref()
    }

    /// The resolved pixel format.
    pub fn format(&self) -> &FormatDescriptor {
        &self.format
    }

    pub fn is_cubemap(&self) -> bool {
        self.cubemap
    }

    pub fn width(&self) -> u32 {
        self.header.width()
    }

    pub fn height(&self) -> u32 {
        self.header.height()
    }

    /// Mip levels stored per face.
    pub fn mip_levels(&self) -> u32 {
        self.header.mip_levels()
    }

    /// Number of faces stored: 1, or the present cubemap faces.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Stored faces in order; `None` stands for the single face of a 2D texture.
    pub fn faces(&self) -> &[Option<CubeFace>] {
        &self.faces
    }

    /// All surfaces, face-major then mip-minor.
    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    /// The surface for a face index (position among stored faces) and mip level.
    pub fn surface(&self, face_index: usize, level: u32) -> Option<&Surface> {
        let mip_levels = self.mip_levels() as usize;
        if face_index >= self.face_count() || level as usize >= mip_levels {
            return None;
        }
        self.surfaces.get(face_index * mip_levels + level as usize)
    }

    /// Bytes read from the start of the file, headers included.
    pub fn bytes_consumed(&self) -> usize {
        self.bytes_consumed
    }

    /// Capability the renderer must check before uploading.
    pub fn capability(&self) -> Option<&Capability> {
        self.format.requirement()
    }

    /// How to upload the surfaces to OpenGL.
    pub fn gl_format(&self) -> Option<GlTextureFormat> {
        self.format.gl_format()
    }

    /// One-line summary for display.
    pub fn description(&self) -> String {
        describe(
            &self.header,
            self.dx10_header.as_ref(),
            &self.format,
            self.cubemap,
        )
    }
}

/// A DDS file handed over by the host, parsed on demand.
///
/// # Example
///
/// ```no_run
/// use ddspreview_dds::DdsFile;
///
/// let bytes = std::fs::read("texture.dds")?;
/// let mut file = DdsFile::new(bytes, "texture.dds");
/// file.load()?;
///
/// let texture = file.texture()?;
/// println!("{}: {}", file.name(), texture.description());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct DdsFile {
    name: String,
    data: Vec<u8>,
    state: LoadState,
}

#[derive(Debug, Clone)]
enum LoadState {
    Unloaded,
    Loaded(DdsTexture),
    Failed,
}

impl DdsFile {
    /// Wrap file contents and a display name. Nothing is parsed yet.
    pub fn new(data: Vec<u8>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data,
            state: LoadState::Unloaded,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw file contents.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Parse the file. May only be attempted once.
    ///
    /// After a failure the file stays unusable and should be discarded.
    pub fn load(&mut self) -> Result<()> {
        if !matches!(self.state, LoadState::Unloaded) {
            return Err(Error::AlreadyLoaded);
        }

        match DdsTexture::parse(&self.data) {
            Ok(texture) => {
                self.state = LoadState::Loaded(texture);
                Ok(())
            }
            Err(err) => {
                debug!(name = %self.name, error = %err, "failed to load DDS file");
                self.state = LoadState::Failed;
                Err(err)
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Loaded(_))
    }

    /// The parsed texture, once `load` has succeeded.
    pub fn texture(&self) -> Result<&DdsTexture> {
        match &self.state {
            LoadState::Loaded(texture) => Ok(texture),
            LoadState::Unloaded | LoadState::Failed => Err(Error::NotLoaded),
        }
    }

    /// Give up the parsed texture, dropping the file bytes.
    pub fn into_texture(self) -> Result<DdsTexture> {
        match self.state {
            LoadState::Loaded(texture) => Ok(texture),
            LoadState::Unloaded | LoadState::Failed => Err(Error::NotLoaded),
        }
    }
}
