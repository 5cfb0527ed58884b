use crate::{image::svg::Namespace, surface::Surface};

use super::{Artifact, ExportError};

pub const VECTOR_FILENAME: &str = "ground-floor-plan.svg";
const VECTOR_MEDIA_TYPE: &str = "image/svg+xml;charset=utf-8";

/// Unwraps the surface to export, failing if the plan hasn't been rendered yet
pub(super) fn ready(surface: Option<&Surface>) -> Result<&Surface, ExportError> {
    surface.ok_or_else(|| {
        log::warn!("Export requested before the floor plan was rendered");
        ExportError::SurfaceNotReady
    })
}

/// Serializes a stand-alone copy of the surface's markup.  The copy always declares the SVG
/// namespace (which the live, in-page markup leaves out) so that it can be opened on its own.
pub(super) fn standalone_markup(surface: &Surface) -> String {
    surface.gen_markup(Namespace::Standalone).to_string()
}

/// Export the rendered surface as an SVG file.  Returns [`ExportError::SurfaceNotReady`] if
/// `surface` is `None`.
pub fn export_vector(surface: Option<&Surface>) -> Result<Artifact, ExportError> {
    let markup = standalone_markup(ready(surface)?);
    Ok(Artifact {
        filename: VECTOR_FILENAME,
        media_type: VECTOR_MEDIA_TYPE,
        bytes: markup.into_bytes(),
    })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::{config::PlanConfig, image::RenderingOpts, image::svg::SVG_NAMESPACE};

    fn surface() -> Surface {
        Surface::render(&PlanConfig::default(), &RenderingOpts::default())
    }

    #[test]
    fn not_ready() {
        assert!(matches!(
            export_vector(None),
            Err(ExportError::SurfaceNotReady)
        ));
    }

    #[test]
    fn round_trip() {
        let surface = surface();
        let artifact = export_vector(Some(&surface)).unwrap();
        assert_eq!(artifact.filename, "ground-floor-plan.svg");

        let markup = String::from_utf8(artifact.bytes).unwrap();
        let doc = roxmltree::Document::parse(&markup).unwrap();
        let root = doc.root_element();
        assert_eq!(root.tag_name().namespace(), Some(SVG_NAMESPACE));
        assert_eq!(root.attribute("width"), Some("460"));
        assert_eq!(root.attribute("height"), Some("400"));

        // Every region comes back with the geometry it was laid out with
        let parsed_rects = root
            .children()
            .filter(|n| n.has_tag_name((SVG_NAMESPACE, "rect")))
            .map(|n| {
                ["x", "y", "width", "height"]
                    .iter()
                    .map(|attr| n.attribute(*attr).unwrap().parse::<u32>().unwrap())
                    .collect_vec()
            })
            .collect_vec();
        let expected_rects = surface
            .layout()
            .regions()
            .iter()
            .map(|r| vec![r.rect.x, r.rect.y, r.rect.width, r.rect.height])
            .collect_vec();
        assert_eq!(parsed_rects, expected_rects);
    }

    #[test]
    fn export_leaves_surface_untouched() {
        let surface = surface();
        let before = surface.markup();
        let first = export_vector(Some(&surface)).unwrap();
        let second = export_vector(Some(&surface)).unwrap();
        assert_eq!(surface.markup(), before);
        assert_eq!(first, second);
    }

    #[test]
    fn only_adds_namespace() {
        let surface = surface();
        let live = surface.markup();
        let exported = String::from_utf8(export_vector(Some(&surface)).unwrap().bytes).unwrap();
        // The file is a full XML document, so keeps its declaration
        assert!(exported.starts_with("<?xml"));
        let declaration = format!(" xmlns=\"{}\"", SVG_NAMESPACE);
        let without_namespace = exported.replacen(&declaration, "", 1);
        let root_start = without_namespace.find("<svg").unwrap();
        assert_eq!(&without_namespace[root_start..], live);
    }
}
