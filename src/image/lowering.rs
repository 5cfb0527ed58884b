use itertools::Itertools;
use rgb::RGB8;

use super::{
    ir::{ConcreteTextStyle, Hatch, Paint, TextStyle},
    ConcreteFillStyle, ConcreteStrokeStyle, Elem, FillStyle, Image, LoweredElem, LoweredImage,
    LoweredStyle, StrokeStyle, Style, TextAnchor,
};

/// 'Lower' an [`Image`] to a [`LoweredImage`] - i.e. use values from [`RenderingOpts`] to make
/// concrete versions for every style.  The [`LoweredImage`] can then be unambiguously converted to
/// an image file, and the [`RenderingOpts`] is no longer needed.
pub(super) fn lower(image: &Image, opts: &RenderingOpts) -> LoweredImage {
    LoweredImage {
        elements: image
            .elements
            .iter()
            .map(|e| lower_elem(e, opts))
            .collect_vec(),
    }
}

/// 'Lower' a single [`Elem`] to a [`LoweredElem`], by converting all `XStyle`s to
/// `ConcreteXStyle`s.  Geometry passes through untouched.
fn lower_elem(elem: &Elem, opts: &RenderingOpts) -> LoweredElem {
    match elem {
        Elem::Rect(rect, style) => LoweredElem::Rect(*rect, lower_style(style, opts)),
        Elem::LineSegment(pt1, pt2, stroke_style) => {
            LoweredElem::LineSegment(*pt1, *pt2, lower_stroke_style(stroke_style, opts))
        }
        Elem::Text {
            position,
            text,
            style,
        } => LoweredElem::Text {
            position: *position,
            text: text.to_owned(),
            style: lower_text_style(style, opts),
        },
    }
}

fn lower_style(style: &Style, opts: &RenderingOpts) -> LoweredStyle {
    match style {
        Style::JustFill(f) => LoweredStyle::JustFill(lower_fill_style(f, opts)),
        Style::JustStroke(s) => LoweredStyle::JustStroke(lower_stroke_style(s, opts)),
        Style::FillAndStroke(f, s) => {
            LoweredStyle::FillAndStroke(lower_fill_style(f, opts), lower_stroke_style(s, opts))
        }
    }
}

/// Lowers a [`FillStyle`] (like [`FillStyle::Interior`]) to a [`ConcreteFillStyle`] who's values
/// are populated from `opts`.
fn lower_fill_style(style: &FillStyle, opts: &RenderingOpts) -> ConcreteFillStyle {
    let paint = match style {
        FillStyle::Envelope => Paint::Color(opts.envelope_fill_color),
        FillStyle::Interior => Paint::Color(opts.interior_fill_color),
        FillStyle::StairHatch => Paint::Hatch(opts.stair_hatch.clone()),
    };
    ConcreteFillStyle { paint }
}

/// Lowers a [`StrokeStyle`] (like [`StrokeStyle::InnerWall`]) to a [`ConcreteStrokeStyle`] who's
/// values are populated from `opts`.
fn lower_stroke_style(style: &StrokeStyle, opts: &RenderingOpts) -> ConcreteStrokeStyle {
    let (line_width, stroke_color, arrowheads) = match style {
        StrokeStyle::OuterWall => (opts.outer_wall_width, opts.outer_wall_color, false),
        StrokeStyle::InnerWall => (opts.inner_wall_width, opts.inner_wall_color, false),
        StrokeStyle::Stair => (opts.stair_outline_width, opts.stair_outline_color, false),
        StrokeStyle::Dimension => (opts.dimension_line_width, opts.dimension_color, true),
    };
    ConcreteStrokeStyle {
        line_width,
        stroke_color,
        arrowheads,
    }
}

/// Lowers a [`TextStyle`] (like [`TextStyle::Note`]) to a [`ConcreteTextStyle`] who's values are
/// populated from `opts`.
fn lower_text_style(style: &TextStyle, opts: &RenderingOpts) -> ConcreteTextStyle {
    let (fill_color, font_size, font_weight, anchor) = match style {
        TextStyle::RegionLabel => (
            opts.label_color,
            opts.label_font_size,
            opts.bold_weight,
            TextAnchor::Middle,
        ),
        TextStyle::StairLabel => (
            opts.label_color,
            opts.stair_label_font_size,
            opts.bold_weight,
            TextAnchor::Middle,
        ),
        TextStyle::DimensionLabel => (
            opts.dimension_color,
            opts.dimension_font_size,
            opts.bold_weight,
            TextAnchor::Middle,
        ),
        // Notes hang off the right-hand edge of the plan
        TextStyle::Note => (
            opts.dimension_color,
            opts.note_font_size,
            opts.normal_weight,
            TextAnchor::End,
        ),
    };
    ConcreteTextStyle {
        fill_style: ConcreteFillStyle {
            paint: Paint::Color(fill_color),
        },
        font_size,
        font_weight,
        font_family: opts.font_family.to_owned(),
        anchor,
    }
}

/// Configuration for how a floor plan should be rendered.  All lengths are in pixels.
#[derive(Debug, Clone)]
pub struct RenderingOpts {
    /// Colour of the building's floor, visible between the walls
    envelope_fill_color: RGB8,
    /// Colour of the floor of the rooms and hall
    interior_fill_color: RGB8,

    outer_wall_width: f32,
    outer_wall_color: RGB8,
    inner_wall_width: f32,
    inner_wall_color: RGB8,

    stair_outline_width: f32,
    stair_outline_color: RGB8,
    /// How the stair's footprint is filled
    stair_hatch: Hatch,

    dimension_line_width: f32,
    /// The colour of dimension lines, their arrowheads and their labels
    dimension_color: RGB8,
    dimension_font_size: f32,
    /// How far the label of a dimension line sits above the line's midpoint
    pub(crate) dimension_label_offset: f32,

    font_family: String,
    label_color: RGB8,
    label_font_size: f32,
    stair_label_font_size: f32,
    note_font_size: f32,
    /// How far below the building's envelope the storey-height note is written
    pub(crate) note_offset: f32,
    /// How far left of the envelope's right-hand wall the storey-height note ends
    pub(crate) note_inset: f32,

    bold_weight: u16,
    normal_weight: u16,
}

impl Default for RenderingOpts {
    fn default() -> Self {
        Self {
            envelope_fill_color: RGB8::new(250, 250, 250),
            interior_fill_color: RGB8::new(255, 255, 255),

            outer_wall_width: 2.0,
            outer_wall_color: RGB8::new(17, 17, 17),
            inner_wall_width: 1.5,
            inner_wall_color: RGB8::new(85, 85, 85),

            stair_outline_width: 1.2,
            stair_outline_color: RGB8::new(51, 51, 51),
            stair_hatch: Hatch {
                spacing: 8.0,
                line_width: 2.0,
                color: RGB8::new(170, 170, 170),
                angle: 45.0,
            },

            dimension_line_width: 1.0,
            dimension_color: RGB8::new(51, 51, 51),
            dimension_font_size: 12.0,
            dimension_label_offset: 6.0,

            font_family: "sans-serif".to_owned(),
            label_color: RGB8::new(17, 17, 17),
            label_font_size: 13.0,
            stair_label_font_size: 12.0,
            note_font_size: 12.0,
            note_offset: 40.0,
            note_inset: 4.0,

            bold_weight: 600,
            normal_weight: 400,
        }
    }
}
