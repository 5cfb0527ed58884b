//! Exporting a rendered [`Surface`](crate::Surface) to downloadable files.
//!
//! Two formats are supported: the SVG markup itself (see [`export_vector`]) and a PNG
//! rasterisation of that markup (see [`export_raster`]).  Saving the resulting [`Artifact`]s is
//! left to a [`FileSink`], so nothing in here cares where the files end up.

use std::path::{Path, PathBuf};

use thiserror::Error;

mod raster;
mod vector;

pub use raster::{export_raster, ImageDecoder, SvgDecoder, RASTER_FILENAME};
pub use vector::{export_vector, VECTOR_FILENAME};

/// An exported file, ready to be saved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: &'static str,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// The ways in which an export can fail
#[derive(Debug, Error)]
pub enum ExportError {
    /// The plan hasn't been rendered, so there's nothing to export
    #[error("the floor plan has not been rendered yet")]
    SurfaceNotReady,
    #[error("failed to parse SVG markup: {0}")]
    Parse(#[from] resvg::usvg::Error),
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("failed to allocate a {width}x{height} canvas")]
    CanvasAllocation { width: u32, height: u32 },
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] png::EncodingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Something which can save [`Artifact`]s, such as a directory on disk
pub trait FileSink {
    /// Saves `artifact`, returning where it was saved
    fn save(&mut self, artifact: &Artifact) -> Result<PathBuf, ExportError>;
}

/// A [`FileSink`] which writes every [`Artifact`] into one directory, under its own filename.
/// Existing files are overwritten.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSink for DirectorySink {
    fn save(&mut self, artifact: &Artifact) -> Result<PathBuf, ExportError> {
        let path = self.dir.join(artifact.filename);
        std::fs::write(&path, &artifact.bytes)?;
        log::info!(
            "Saved {} ({} bytes) to {}",
            artifact.media_type,
            artifact.bytes.len(),
            path.display()
        );
        Ok(path)
    }
}

/// A [`FileSink`] which keeps everything in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemorySink {
    pub saved: Vec<Artifact>,
}

#[cfg(test)]
impl FileSink for MemorySink {
    fn save(&mut self, artifact: &Artifact) -> Result<PathBuf, ExportError> {
        self.saved.push(artifact.clone());
        Ok(PathBuf::from(artifact.filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_sink_writes_under_filename() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        let artifact = Artifact {
            filename: "plan.txt",
            media_type: "text/plain",
            bytes: b"hello".to_vec(),
        };
        let path = sink.save(&artifact).unwrap();
        assert_eq!(path, dir.path().join("plan.txt"));
        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn directory_sink_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = DirectorySink::new(dir.path().join("missing"));
        let artifact = Artifact {
            filename: "plan.txt",
            media_type: "text/plain",
            bytes: vec![],
        };
        assert!(matches!(sink.save(&artifact), Err(ExportError::Io(_))));
    }
}
