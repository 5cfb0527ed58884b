//! Dimension lines, read off an already computed [`Layout`].

use crate::config::Dimensions;
use crate::layout::Layout;
use crate::V2;

/// Distance (in pixels) between the envelope and the nearest row of dimension lines
const NEAR_OFFSET: f32 = 24.0;
/// Distance (in pixels) between the envelope and the dimension line for the hall's width
const HALL_WIDTH_OFFSET: f32 = 20.0;
/// Distance (in pixels) between the envelope and the furthest row of dimension lines
const FAR_OFFSET: f32 = 40.0;
/// Distance (in pixels) between the envelope and the dimension line for the hall's length
const HALL_LENGTH_OFFSET: f32 = 48.0;

/// Which measurement an [`Annotation`] describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    OverallWidth,
    OverallLength,
    HallWidth,
    LeftColumnWidth,
    RightColumnWidth,
    FirstRoomLength,
    SecondRoomLength,
    HallLength,
}

/// A labelled measurement line between two points
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub start: V2,
    pub end: V2,
    pub label: String,
}

impl Annotation {
    pub fn midpoint(&self) -> V2 {
        (self.start + self.end) / 2.0
    }
}

/// Build the dimension lines for a plan.  The order is fixed (and only matters for how the lines
/// overlap): overall width and length, the widths along the top, then the lengths down the right.
pub fn build_annotations(layout: &Layout, dims: &Dimensions) -> Vec<Annotation> {
    let outer = layout.outer;
    let left = outer.x as f32;
    let top = outer.y as f32;
    let right = outer.right() as f32;
    let bottom = outer.bottom() as f32;

    // Lines running along the x-axis at height `y`, or along the y-axis at `x`
    let horizontal = |kind, x1: u32, x2: u32, y: f32, label: String| Annotation {
        kind,
        start: V2::new(x1 as f32, y),
        end: V2::new(x2 as f32, y),
        label,
    };
    let vertical = |kind, x: f32, y1: u32, y2: u32, label: String| Annotation {
        kind,
        start: V2::new(x, y1 as f32),
        end: V2::new(x, y2 as f32),
        label,
    };

    let [left_room_1, left_room_2] = layout.left_rooms;
    let right_room_1 = layout.right_rooms[0];
    let hall = layout.hall;
    vec![
        horizontal(
            AnnotationKind::OverallWidth,
            outer.x,
            outer.right(),
            bottom + NEAR_OFFSET,
            format!("कुल चौड़ाई: {} ft", dims.building_width()),
        ),
        vertical(
            AnnotationKind::OverallLength,
            left - NEAR_OFFSET,
            outer.y,
            outer.bottom(),
            format!("कुल लम्बाई: {} ft", dims.building_length()),
        ),
        horizontal(
            AnnotationKind::HallWidth,
            hall.x,
            hall.right(),
            top - HALL_WIDTH_OFFSET,
            format!("हॉल चौड़ाई: {} ft", dims.hall_width),
        ),
        horizontal(
            AnnotationKind::LeftColumnWidth,
            left_room_1.x,
            left_room_1.right(),
            top - FAR_OFFSET,
            format!("कमरा चौड़ाई: {} ft", dims.room_width),
        ),
        horizontal(
            AnnotationKind::RightColumnWidth,
            right_room_1.x,
            right_room_1.right(),
            top - FAR_OFFSET,
            format!("कमरा चौड़ाई: {} ft", dims.room_width),
        ),
        vertical(
            AnnotationKind::FirstRoomLength,
            right + NEAR_OFFSET,
            left_room_1.y,
            left_room_1.bottom(),
            format!("{} ft", dims.room_length),
        ),
        vertical(
            AnnotationKind::SecondRoomLength,
            right + NEAR_OFFSET,
            left_room_2.y,
            left_room_2.bottom(),
            format!("{} ft", dims.room_length),
        ),
        vertical(
            AnnotationKind::HallLength,
            right + HALL_LENGTH_OFFSET,
            hall.y,
            hall.bottom(),
            format!("हॉल {} ft", dims.hall_length),
        ),
    ]
}
