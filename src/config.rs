//! The fixed real-world measurements of the plan, and the scale at which they're drawn.

use thiserror::Error;

use crate::layout::{BOTTOM_MARGIN, STAIR_INSET};

/// The real-world measurements of the ground floor, all in feet.  The building is a hall running
/// the full length of the building, flanked on each side by a column of two identical rooms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Length of the hall along the building's length axis.  This is also the length of the
    /// building, and should be twice `room_length`.
    pub hall_length: f64,
    /// Width of the hall, between the two room columns
    pub hall_width: f64,
    /// Length of one room along the building's length axis
    pub room_length: f64,
    /// Width of one room column
    pub room_width: f64,
    /// Side length of the square stair footprint
    pub stair_size: f64,
    /// Height of the storey.  Only ever displayed, never used for layout
    pub storey_height: f64,
}

impl Dimensions {
    /// Overall width of the building: a room column on either side of the hall
    pub fn building_width(&self) -> f64 {
        self.room_width + self.hall_width + self.room_width
    }

    /// Overall length of the building, which is the same as the hall's
    pub fn building_length(&self) -> f64 {
        self.hall_length
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            hall_length: 24.0,
            hall_width: 12.0,
            room_length: 12.0,
            room_width: 11.0,
            stair_size: 6.0,
            storey_height: 11.6,
        }
    }
}

/// A conversion factor from feet to pixels.  Should always be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale(pub f64);

impl Scale {
    /// Converts a length in feet to a whole number of pixels, rounding half-way values up.  All
    /// lengths go through this function, so regions computed from complementary measurements
    /// always tile exactly.  Lengths too long for a `u32` saturate; [`Scale::checked_to_px`]
    /// reports them instead.
    pub fn to_px(self, feet: f64) -> u32 {
        // Lengths are positive, so `round` (which rounds away from zero) is round-half-up
        (feet * self.0).round() as u32
    }

    /// Like [`Scale::to_px`], but returns `None` if the length has no whole number of pixels
    /// which fits in a `u32`
    pub fn checked_to_px(self, feet: f64) -> Option<u32> {
        let px = (feet * self.0).round();
        (px.is_finite() && px >= 0.0 && px <= u32::MAX as f64).then(|| px as u32)
    }

    pub fn px_per_foot(self) -> f64 {
        self.0
    }
}

impl Default for Scale {
    fn default() -> Self {
        Scale(10.0)
    }
}

/// Everything the layout engine needs to know to position the plan on a canvas
#[derive(Debug, Clone, PartialEq)]
pub struct PlanConfig {
    pub dimensions: Dimensions,
    pub scale: Scale,
    /// Whole pixels reserved round the building's envelope for dimension lines
    pub padding: u32,
}

impl PlanConfig {
    /// Checks the invariants which the layout engine assumes but never checks for itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = &self.dimensions;
        if !(self.scale.0 > 0.0) {
            return Err(ConfigError::NonPositiveScale(self.scale.0));
        }
        let measurements = [
            ("hall length", dims.hall_length),
            ("hall width", dims.hall_width),
            ("room length", dims.room_length),
            ("room width", dims.room_width),
            ("stair size", dims.stair_size),
            ("storey height", dims.storey_height),
        ];
        for (name, value) in measurements {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveMeasurement { name, value });
            }
        }
        if dims.hall_length != dims.room_length * 2.0 {
            return Err(ConfigError::InconsistentLength {
                hall_length: dims.hall_length,
                room_length: dims.room_length,
            });
        }

        // The canvas is the largest extent the layout computes, give or take a pixel of rounding
        let px = |name: &'static str, value: f64| {
            self.scale
                .checked_to_px(value)
                .ok_or(ConfigError::TooLarge { name, value })
        };
        let building_width = px("building width", dims.building_width())?;
        let building_length = px("building length", dims.building_length())?;
        let canvas_size = self.padding.checked_mul(2).and_then(|padding| {
            let width = building_width.checked_add(padding)?;
            let height = building_length
                .checked_add(padding)?
                .checked_add(BOTTOM_MARGIN)?;
            Some((width, height))
        });
        if canvas_size.is_none() {
            return Err(ConfigError::CanvasTooLarge);
        }

        // The stair sits at a fixed pixel inset from the hall's corner, so this can only be
        // checked once converted to pixels
        let stair_extent = px("stair size", dims.stair_size)?.checked_add(STAIR_INSET);
        let hall_width = px("hall width", dims.hall_width)?;
        let hall_length = px("hall length", dims.hall_length)?;
        match stair_extent {
            Some(extent) if extent <= hall_width && extent <= hall_length => Ok(()),
            _ => Err(ConfigError::StairOutsideHall),
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            scale: Scale::default(),
            padding: 60,
        }
    }
}

/// The ways that a [`PlanConfig`] can fail to describe a drawable plan
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("scale must be positive, got {0} px/ft")]
    NonPositiveScale(f64),
    #[error("{name} must be positive, got {value} ft")]
    NonPositiveMeasurement { name: &'static str, value: f64 },
    #[error("hall length ({hall_length} ft) must equal two room lengths ({room_length} ft each)")]
    InconsistentLength { hall_length: f64, room_length: f64 },
    #[error("the stair does not fit inside the hall")]
    StairOutsideHall,
    #[error("{name} of {value} ft is too large to draw at this scale")]
    TooLarge { name: &'static str, value: f64 },
    #[error("the plan and its padding are too large for a canvas")]
    CanvasTooLarge,
}
