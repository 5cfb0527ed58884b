//! An intermediate representation for vector images

use rgb::RGB8;

use crate::{layout::Rect, V2};

use super::{lowering, LoweredImage, RenderingOpts};

/// A full [`Image`], composed of many [`Elem`]ents.  [`Image`]s are in pixel space, with the
/// y-axis pointing down.  Elements are drawn in the order they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct Image<F, S, T> {
    pub(super) elements: Vec<Elem<F, S, T>>,
}

impl<F, S, T> Image<F, S, T> {
    /// Creates an empty `Image` (i.e. one which contains no [`Elem`]s)
    pub fn empty() -> Self {
        Self { elements: vec![] }
    }

    /// Adds a new [`Elem`] to this `Image`
    pub fn add(&mut self, elem: Elem<F, S, T>) {
        self.elements.push(elem)
    }

    pub fn add_iter(&mut self, elems: impl IntoIterator<Item = Elem<F, S, T>>) {
        self.elements.extend(elems)
    }

    pub fn elements(&self) -> &[Elem<F, S, T>] {
        self.elements.as_slice()
    }
}

impl Image<FillStyle, StrokeStyle, TextStyle> {
    pub fn lower(&self, opts: &RenderingOpts) -> LoweredImage {
        lowering::lower(self, opts)
    }
}

/// The shape of an [`Elem`]
#[derive(Debug, Clone, PartialEq)]
pub enum Elem<F, S, T> {
    Rect(Rect, Style<F, S>),
    LineSegment(V2, V2, S),
    Text {
        position: V2,
        text: String,
        style: T,
    },
}

impl<S> Elem<ConcreteFillStyle, S, ConcreteTextStyle> {
    /// Gets the fill style of this `Elem`, if it exists.  It may not exist - for example,
    /// [`Elem::LineSegment`]s can't be filled.
    pub fn fill_style(&self) -> Option<&ConcreteFillStyle> {
        match self {
            Elem::LineSegment(_, _, _) => None, // Line segments can't be filled
            Elem::Text { style, .. } => Some(&style.fill_style),
            Elem::Rect(_, style) => style.fill_style(),
        }
    }

    /// Gets the stroke style of this `Elem`, if it exists.
    pub fn stroke_style(&self) -> Option<&S> {
        match self {
            Elem::Text { .. } => None, // Text elements can't be stroked
            Elem::LineSegment(_, _, stroke_style) => Some(stroke_style),
            Elem::Rect(_, style) => style.stroke_style(),
        }
    }
}

/////////////
// STYLING //
/////////////

/// The full styling of an [`Elem`], which is either filled or stroked or both (but invisible
/// elements are not possible).
#[derive(Debug, Clone, PartialEq)]
pub enum Style<F, S> {
    JustFill(F),
    JustStroke(S),
    FillAndStroke(F, S),
}

impl<F, S> Style<F, S> {
    pub fn fill_style(&self) -> Option<&F> {
        match self {
            Self::JustFill(f) => Some(f),
            Self::JustStroke(_) => None,
            Self::FillAndStroke(f, _) => Some(f),
        }
    }

    pub fn stroke_style(&self) -> Option<&S> {
        match self {
            Self::JustFill(_) => None,
            Self::JustStroke(s) => Some(s),
            Self::FillAndStroke(_, s) => Some(s),
        }
    }
}

/// The visual style of the body of an [`Elem`]
#[derive(Debug, Clone, PartialEq)]
pub enum FillStyle {
    /// The floor of the building, visible wherever no room covers it
    Envelope,
    /// The floor of a room or the hall
    Interior,
    /// The diagonal hatching of the stair
    StairHatch,
}

/// A fully specified [`FillStyle`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConcreteFillStyle {
    pub paint: Paint,
}

/// What a filled area is painted with
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Color(RGB8),
    Hatch(Hatch),
}

/// A repeating pattern of parallel lines
#[derive(Debug, Clone, PartialEq)]
pub struct Hatch {
    /// Distance between adjacent lines, in pixels
    pub spacing: f32,
    pub line_width: f32,
    pub color: RGB8,
    /// Clockwise rotation of the lines from vertical, in degrees
    pub angle: f32,
}

/// The visual style of the outline of an [`Elem`]
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeStyle {
    /// The walls round the outside of the building
    OuterWall,
    /// Walls between rooms
    InnerWall,
    /// The outline of the stair
    Stair,
    /// A dimension line, with arrowheads at both ends
    Dimension,
}

/// A fully specified [`StrokeStyle`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConcreteStrokeStyle {
    pub line_width: f32,
    pub stroke_color: RGB8,
    /// If `true`, line segments get an arrowhead at each end
    pub arrowheads: bool,
}

/// The visual style of some [`Elem::Text`]
#[derive(Debug, Clone, PartialEq)]
pub enum TextStyle {
    /// The name and size of a room or the hall
    RegionLabel,
    StairLabel,
    /// The measurement written above a dimension line
    DimensionLabel,
    /// Extra information written below the plan
    Note,
}

/// A fully specified [`TextStyle`]
#[derive(Debug, Clone, PartialEq)]
pub struct ConcreteTextStyle {
    pub fill_style: ConcreteFillStyle,
    pub font_size: f32,
    pub font_weight: u16,
    pub font_family: String,
    pub anchor: TextAnchor,
}

/// The horizontal location of the text, relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    Middle,
    End,
}
