//! The rendered drawing surface, and the view which owns it.

use std::path::PathBuf;

use simple_xml_builder::XMLElement;

use crate::{
    annotations::{build_annotations, Annotation},
    config::PlanConfig,
    export::{self, ExportError, FileSink, ImageDecoder},
    image::{
        svg::{self, Namespace},
        LoweredImage, RenderingOpts,
    },
    layout::Layout,
    scene,
};

/// A fully rendered floor plan: every element with concrete styling, on a canvas of fixed size.
/// `Surface`s are never modified once rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    layout: Layout,
    annotations: Vec<Annotation>,
    image: LoweredImage,
}

impl Surface {
    /// Lays out, annotates and draws the plan described by `config`
    pub fn render(config: &PlanConfig, opts: &RenderingOpts) -> Self {
        let layout = Layout::from_config(config);
        let annotations = build_annotations(&layout, &config.dimensions);
        let image = scene::gen_image(&layout, &annotations, &config.dimensions, opts).lower(opts);
        Self {
            layout,
            annotations,
            image,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn image(&self) -> &LoweredImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.layout.canvas_width
    }

    pub fn height(&self) -> u32 {
        self.layout.canvas_height
    }

    /// The markup of this surface as it would be embedded in a page, i.e. a bare `<svg>` element
    /// with neither an XML declaration nor an `xmlns` attribute.
    pub fn markup(&self) -> String {
        let document = self.gen_markup(Namespace::Inline).to_string();
        // `XMLElement` always writes the declaration, which has no place inside a page
        match document
            .strip_prefix("<?xml")
            .and_then(|rest| rest.split_once("?>"))
        {
            Some((_, element)) => element.trim_start().to_owned(),
            None => document,
        }
    }

    /// Generates a fresh copy of this surface's markup, independent of any other copy
    pub(crate) fn gen_markup(&self, namespace: Namespace) -> XMLElement {
        svg::gen_svg(&self.image, self.width(), self.height(), namespace)
    }
}

/// The view of a floor plan.  A view starts out unrendered, and only has a [`Surface`] once
/// [`FloorPlanView::render`] has been called.
#[derive(Debug, Clone)]
pub struct FloorPlanView {
    config: PlanConfig,
    opts: RenderingOpts,
    surface: Option<Surface>,
}

impl FloorPlanView {
    pub fn new(config: PlanConfig, opts: RenderingOpts) -> Self {
        Self {
            config,
            opts,
            surface: None,
        }
    }

    /// Renders the plan, if it hasn't been rendered already.  The inputs never change, so
    /// rendering more than once would produce an identical [`Surface`].
    pub fn render(&mut self) -> &Surface {
        let (config, opts) = (&self.config, &self.opts);
        self.surface.get_or_insert_with(|| {
            let surface = Surface::render(config, opts);
            log::debug!(
                "Rendered floor plan: {} elements on a {}x{} canvas",
                surface.image().elements().len(),
                surface.width(),
                surface.height()
            );
            surface
        })
    }

    /// The rendered [`Surface`], or `None` if [`FloorPlanView::render`] hasn't been called
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Saves the plan as an SVG file to `sink`
    pub fn download_svg(&self, sink: &mut impl FileSink) -> Result<PathBuf, ExportError> {
        let artifact = export::export_vector(self.surface())?;
        sink.save(&artifact)
    }

    /// Rasterises the plan with `decoder`, and saves the result as a PNG file to `sink`
    pub fn download_png(
        &self,
        decoder: &impl ImageDecoder,
        sink: &mut impl FileSink,
    ) -> Result<PathBuf, ExportError> {
        let artifact = export::export_raster(self.surface(), decoder)?;
        sink.save(&artifact)
    }
}
