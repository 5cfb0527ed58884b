use std::{io::Write, path::Path, sync::Arc};

use resvg::{
    tiny_skia::{Color, Pixmap, PixmapPaint, Transform},
    usvg,
};

use crate::surface::Surface;

use super::{
    vector::{ready, standalone_markup},
    Artifact, ExportError,
};

pub const RASTER_FILENAME: &str = "ground-floor-plan.png";
const RASTER_MEDIA_TYPE: &str = "image/png";

/// Something which can decode a vector image resource into a bitmap
pub trait ImageDecoder {
    /// Decodes the image stored at `resource`.  The bitmap is sized however the image says it
    /// should be.
    fn decode(&self, resource: &Path) -> Result<Pixmap, ExportError>;
}

/// An [`ImageDecoder`] which parses SVG files with `usvg` and renders them with `resvg`.  Text is
/// only drawn if the decoder knows about a font which can render it.
#[derive(Clone, Default)]
pub struct SvgDecoder {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl SvgDecoder {
    /// Creates a decoder which knows no fonts, and will therefore skip any text
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder which can draw text using any font installed on the system
    pub fn with_system_fonts() -> Self {
        let mut fontdb = usvg::fontdb::Database::new();
        fontdb.load_system_fonts();
        log::debug!("Loaded {} font faces", fontdb.len());
        Self {
            fontdb: Arc::new(fontdb),
        }
    }
}

impl ImageDecoder for SvgDecoder {
    fn decode(&self, resource: &Path) -> Result<Pixmap, ExportError> {
        let data = std::fs::read(resource)?;
        let mut opt = usvg::Options::default();
        opt.fontdb = Arc::clone(&self.fontdb);
        let tree = usvg::Tree::from_data(&data, &opt)?;

        let size = tree.size().to_int_size();
        let mut pixmap =
            Pixmap::new(size.width(), size.height()).ok_or(ExportError::CanvasAllocation {
                width: size.width(),
                height: size.height(),
            })?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
        Ok(pixmap)
    }
}

/// Export the rendered surface as a PNG file.  The surface's markup is written to a temporary
/// `.svg` file, decoded by `decoder` and then painted over an opaque white canvas the size of the
/// surface.  The temporary file is always removed, whether or not the export succeeds.
pub fn export_raster(
    surface: Option<&Surface>,
    decoder: &impl ImageDecoder,
) -> Result<Artifact, ExportError> {
    let surface = ready(surface)?;
    let markup = standalone_markup(surface);

    // Deleted when dropped, including on early returns
    let mut resource = tempfile::Builder::new()
        .prefix("ground-floor-plan-")
        .suffix(".svg")
        .tempfile()?;
    resource.write_all(markup.as_bytes())?;
    resource.flush()?;
    let decoded = decoder.decode(resource.path())?;

    let (width, height) = (surface.width(), surface.height());
    let mut canvas =
        Pixmap::new(width, height).ok_or(ExportError::CanvasAllocation { width, height })?;
    // Without the white backing, everything outside the plan would be transparent
    canvas.fill(Color::WHITE);
    canvas.draw_pixmap(
        0,
        0,
        decoded.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );

    Ok(Artifact {
        filename: RASTER_FILENAME,
        media_type: RASTER_MEDIA_TYPE,
        bytes: encode_png(&canvas)?,
    })
}

/// Encodes a fully opaque [`Pixmap`] as an 8-bit RGBA PNG, compressed as much as possible
fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, png::EncodingError> {
    let mut bytes = Vec::new();
    let mut encoder = png::Encoder::new(&mut bytes, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Best);
    let mut writer = encoder.write_header()?;
    // `Pixmap`s store premultiplied alpha, which is the same as straight alpha when every pixel
    // is opaque
    writer.write_image_data(pixmap.data())?;
    writer.finish()?;
    Ok(bytes)
}
