//! Code to turn a computed [`Layout`] into an [`Image`] of the floor plan

use crate::{
    annotations::Annotation,
    config::Dimensions,
    image::{Elem, FillStyle, Image, RenderingOpts, StrokeStyle, Style, TextStyle},
    layout::{Layout, Rect},
    V2,
};

/// Generate the [`Image`] of a floor plan.  Elements are stacked in this order: the envelope, the
/// rooms and hall, the stair, the region labels, the dimension lines and finally the storey-height
/// note.
pub fn gen_image(
    layout: &Layout,
    annotations: &[Annotation],
    dims: &Dimensions,
    opts: &RenderingOpts,
) -> Image {
    let mut image = Image::empty();

    // Walls
    image.add(Elem::Rect(
        layout.outer,
        Style::FillAndStroke(FillStyle::Envelope, StrokeStyle::OuterWall),
    ));
    let interior = |rect: Rect| {
        Elem::Rect(
            rect,
            Style::FillAndStroke(FillStyle::Interior, StrokeStyle::InnerWall),
        )
    };
    image.add_iter(layout.left_rooms.iter().copied().map(interior));
    image.add_iter(layout.right_rooms.iter().copied().map(interior));
    image.add(interior(layout.hall));
    image.add(Elem::Rect(
        layout.stair,
        Style::FillAndStroke(FillStyle::StairHatch, StrokeStyle::Stair),
    ));

    // Labels, written at the centre of each region
    let label = |rect: Rect, text: String, style: TextStyle| Elem::Text {
        position: rect.centre(),
        text,
        style,
    };
    image.add(label(
        layout.hall,
        format!("Hall {}' × {}'", dims.hall_length, dims.hall_width),
        TextStyle::RegionLabel,
    ));
    for &room in layout.left_rooms.iter().chain(&layout.right_rooms) {
        image.add(label(
            room,
            format!("कमरा {}' × {}'", dims.room_length, dims.room_width),
            TextStyle::RegionLabel,
        ));
    }
    image.add(label(
        layout.stair,
        "सीढ़ी".to_owned(),
        TextStyle::StairLabel,
    ));

    // Dimension lines, each with its measurement written just above its midpoint
    for annotation in annotations {
        image.add(Elem::LineSegment(
            annotation.start,
            annotation.end,
            StrokeStyle::Dimension,
        ));
        image.add(Elem::Text {
            position: annotation.midpoint() + V2::new(0.0, -opts.dimension_label_offset),
            text: annotation.label.clone(),
            style: TextStyle::DimensionLabel,
        });
    }

    // Storey height, which is only ever displayed
    image.add(Elem::Text {
        position: V2::new(
            layout.outer.right() as f32 - opts.note_inset,
            layout.outer.bottom() as f32 + opts.note_offset,
        ),
        text: format!("ऊँचाई / Storey Height: {} ft", dims.storey_height),
        style: TextStyle::Note,
    });

    image
}
