use vector2d::Vector2D;

pub mod annotations;
pub mod config;
pub mod export;
pub mod image;
pub mod layout;
mod scene;
mod surface;

pub use config::{ConfigError, Dimensions, PlanConfig, Scale};
pub use layout::{compute_layout, Layout, Rect, Region, RegionRole, RoomPosition};
pub use surface::{FloorPlanView, Surface};

/// Type alias for 2D floating point vectors (in the geometric sense, unlike [`Vec`])
pub type V2 = Vector2D<f32>;
