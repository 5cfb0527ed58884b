//! The layout engine: converts real-world [`Dimensions`] into pixel-space rectangles.

use itertools::Itertools;

use crate::config::{Dimensions, PlanConfig, Scale};
use crate::V2;

/// Inset (in pixels) of the stair from the top-left corner of the hall
pub const STAIR_INSET: u32 = 4;
/// Extra pixels added to the bottom of the canvas, below the padding, for the storey-height note
pub const BOTTOM_MARGIN: u32 = 40;

/// An axis-aligned rectangle in whole pixels.  The y-axis points down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    pub fn centre(&self) -> V2 {
        V2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Returns `true` if `other` lies entirely inside (or on the border of) `self`
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Which of the four rooms a [`Region`] is.  'First' rooms are the ones nearer the top of the
/// drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomPosition {
    LeftFirst,
    LeftSecond,
    RightFirst,
    RightSecond,
}

/// What part of the building a [`Region`] represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionRole {
    OuterWall,
    Room(RoomPosition),
    Hall,
    Stair,
}

/// A [`Rect`] tagged with the part of the building it represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub role: RegionRole,
    pub rect: Rect,
}

/// The pixel positions of every region of the plan, along with the size of the canvas needed to
/// contain them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layout {
    pub outer: Rect,
    pub left_rooms: [Rect; 2],
    pub right_rooms: [Rect; 2],
    pub hall: Rect,
    pub stair: Rect,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Layout {
    pub fn from_config(config: &PlanConfig) -> Self {
        compute_layout(&config.dimensions, config.scale, config.padding)
    }

    /// Every region in drawing order: the envelope, then the rooms, then the hall and finally the
    /// stair on top.
    pub fn regions(&self) -> Vec<Region> {
        let rooms = [
            (RoomPosition::LeftFirst, self.left_rooms[0]),
            (RoomPosition::LeftSecond, self.left_rooms[1]),
            (RoomPosition::RightFirst, self.right_rooms[0]),
            (RoomPosition::RightSecond, self.right_rooms[1]),
        ];
        std::iter::once(Region {
            role: RegionRole::OuterWall,
            rect: self.outer,
        })
        .chain(rooms.iter().map(|&(pos, rect)| Region {
            role: RegionRole::Room(pos),
            rect,
        }))
        .chain([
            Region {
                role: RegionRole::Hall,
                rect: self.hall,
            },
            Region {
                role: RegionRole::Stair,
                rect: self.stair,
            },
        ])
        .collect_vec()
    }
}

/// Compute the pixel positions of every region of the plan.  This is a pure function of its
/// inputs, and does not check that `dims` is self-consistent (see [`PlanConfig::validate`]).
/// Coordinates which don't fit in a `u32` saturate rather than overflow.
pub fn compute_layout(dims: &Dimensions, scale: Scale, padding: u32) -> Layout {
    let px = |feet: f64| scale.to_px(feet);
    // The top-left corner of the building's envelope
    let (origin_x, origin_y) = (padding, padding);

    let outer = Rect::new(
        origin_x,
        origin_y,
        px(dims.building_width()),
        px(dims.building_length()),
    );

    // Each room column is two rooms stacked along the length axis.  The second room starts
    // exactly where the first ends, so they can never gap or overlap.
    let room_w = px(dims.room_width);
    let room_h = px(dims.room_length);
    let column = |x: u32| {
        [
            Rect::new(x, origin_y, room_w, room_h),
            Rect::new(x, origin_y.saturating_add(room_h), room_w, room_h),
        ]
    };
    let left_rooms = column(origin_x);
    let right_rooms = column(origin_x.saturating_add(px(dims.room_width + dims.hall_width)));

    let hall = Rect::new(
        origin_x.saturating_add(room_w),
        origin_y,
        px(dims.hall_width),
        px(dims.hall_length),
    );

    let stair_size = px(dims.stair_size);
    let stair = Rect::new(
        hall.x.saturating_add(STAIR_INSET),
        hall.y.saturating_add(STAIR_INSET),
        stair_size,
        stair_size,
    );

    let canvas_width = outer.width.saturating_add(padding.saturating_mul(2));
    let canvas_height = outer
        .height
        .saturating_add(padding.saturating_mul(2))
        .saturating_add(BOTTOM_MARGIN);
    log::debug!(
        "Computed layout at {} px/ft: envelope {:?}, canvas {}x{}",
        scale.px_per_foot(),
        outer,
        canvas_width,
        canvas_height
    );

    Layout {
        outer,
        left_rooms,
        right_rooms,
        hall,
        stair,
        canvas_width,
        canvas_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_layout() -> Layout {
        Layout::from_config(&PlanConfig::default())
    }

    /// A spread of self-consistent dimension sets, including ones which don't land on whole
    /// pixels
    fn dimension_sets() -> Vec<(Dimensions, Scale)> {
        let mut sets = Vec::new();
        for &room_length in &[5.0, 7.25, 12.0, 13.3] {
            for &room_width in &[3.5, 11.0, 11.45, 20.05] {
                for &hall_width in &[4.0, 8.75, 12.0, 15.15] {
                    for &scale in &[1.0, 3.3, 10.0, 17.5] {
                        let dims = Dimensions {
                            hall_length: room_length * 2.0,
                            hall_width,
                            room_length,
                            room_width,
                            stair_size: 2.0,
                            storey_height: 10.0,
                        };
                        sets.push((dims, Scale(scale)));
                    }
                }
            }
        }
        sets
    }

    #[test]
    fn default_positions() {
        let layout = default_layout();
        assert_eq!(layout.outer, Rect::new(60, 60, 340, 240));
        assert_eq!(layout.left_rooms[0], Rect::new(60, 60, 110, 120));
        assert_eq!(layout.left_rooms[1], Rect::new(60, 180, 110, 120));
        assert_eq!(layout.right_rooms[0], Rect::new(290, 60, 110, 120));
        assert_eq!(layout.right_rooms[1], Rect::new(290, 180, 110, 120));
        assert_eq!(layout.hall, Rect::new(170, 60, 120, 240));
        assert_eq!(layout.stair, Rect::new(174, 64, 60, 60));
        assert_eq!((layout.canvas_width, layout.canvas_height), (460, 400));
    }

    #[test]
    fn regions_in_drawing_order() {
        let roles = default_layout()
            .regions()
            .into_iter()
            .map(|r| r.role)
            .collect_vec();
        assert_eq!(
            roles,
            vec![
                RegionRole::OuterWall,
                RegionRole::Room(RoomPosition::LeftFirst),
                RegionRole::Room(RoomPosition::LeftSecond),
                RegionRole::Room(RoomPosition::RightFirst),
                RegionRole::Room(RoomPosition::RightSecond),
                RegionRole::Hall,
                RegionRole::Stair,
            ]
        );
    }

    #[test]
    fn stair_inside_hall() {
        let layout = default_layout();
        assert!(layout.hall.contains(&layout.stair));
    }

    #[test]
    fn layout_is_deterministic() {
        for (dims, scale) in dimension_sets() {
            assert_eq!(
                compute_layout(&dims, scale, 25),
                compute_layout(&dims, scale, 25)
            );
        }
    }

    #[test]
    fn room_columns_tile_vertically() {
        for (dims, scale) in dimension_sets() {
            let layout = compute_layout(&dims, scale, 60);
            for column in [layout.left_rooms, layout.right_rooms] {
                assert_eq!(column[0].bottom(), column[1].y);
                assert_eq!(column[0].x, column[1].x);
                assert_eq!(column[0].y, layout.outer.y);
            }
        }
    }

    #[test]
    fn columns_span_the_envelope() {
        for (dims, scale) in dimension_sets() {
            let layout = compute_layout(&dims, scale, 60);
            let outer = layout.outer;
            // The hall sits flush against the left column
            assert_eq!(layout.left_rooms[0].right(), layout.hall.x);
            // Widths of the three columns add up to the envelope's width, give or take rounding
            let total = layout.left_rooms[0].width + layout.hall.width + layout.right_rooms[0].width;
            assert!((total as i64 - outer.width as i64).abs() <= 1, "{:?}", dims);
            // The right column ends at the right-hand wall, give or take rounding
            let right_edge = layout.right_rooms[0].right() as i64;
            assert!((right_edge - outer.right() as i64).abs() <= 1, "{:?}", dims);
        }
    }

    #[test]
    fn canvas_contains_envelope_and_padding() {
        for (dims, scale) in dimension_sets() {
            let padding = 30;
            let layout = compute_layout(&dims, scale, padding);
            assert_eq!(layout.canvas_width, layout.outer.right() + padding);
            assert_eq!(
                layout.canvas_height,
                layout.outer.bottom() + padding + BOTTOM_MARGIN
            );
        }
    }

    #[test]
    fn zero_padding_starts_at_origin() {
        let layout = compute_layout(&Dimensions::default(), Scale(10.0), 0);
        assert_eq!((layout.outer.x, layout.outer.y), (0, 0));
        assert_eq!((layout.canvas_width, layout.canvas_height), (340, 280));
    }

    #[test]
    fn oversized_plans_saturate() {
        // Rejected by `PlanConfig::validate`, but laying it out mustn't panic either
        let layout = compute_layout(&Dimensions::default(), Scale(f64::INFINITY), u32::MAX);
        assert_eq!(layout.outer.width, u32::MAX);
        assert_eq!((layout.canvas_width, layout.canvas_height), (u32::MAX, u32::MAX));
        assert_eq!(layout.stair.right(), u32::MAX);
    }
}
