//! Image specification and rendering utilities.  This is an intermediate representation (IR) for
//! vector images: the floor plan is described in terms of semantic styles (walls, rooms, dimension
//! lines), which are 'lowered' to concrete colours and widths before being written out as SVG.

mod ir;
mod lowering;
pub mod svg;

pub use ir::{
    ConcreteFillStyle, ConcreteStrokeStyle, ConcreteTextStyle, FillStyle, Hatch, Paint,
    StrokeStyle, TextAnchor, TextStyle,
};
pub use lowering::RenderingOpts;

/// Re-export of [`ir::Image`] with the type params needed by the rest of the code
pub type Image = ir::Image<FillStyle, StrokeStyle, TextStyle>;
/// Version of [`ir::Image`] where all the styles are fully specified
pub type LoweredImage = ir::Image<ConcreteFillStyle, ConcreteStrokeStyle, ConcreteTextStyle>;

/// Re-export of [`ir::Elem`] with the type params needed by the rest of the code
pub type Elem = ir::Elem<FillStyle, StrokeStyle, TextStyle>;
/// Version of [`ir::Elem`] where all the styles are fully specified
pub type LoweredElem = ir::Elem<ConcreteFillStyle, ConcreteStrokeStyle, ConcreteTextStyle>;

/// Re-export of [`ir::Style`] with the type params needed by the rest of the code
pub type Style = ir::Style<FillStyle, StrokeStyle>;
/// Version of [`ir::Style`] where all the styles are fully specified
pub type LoweredStyle = ir::Style<ConcreteFillStyle, ConcreteStrokeStyle>;
