// Module declarations
pub mod jitter;
pub mod types;

// Re-export key types and functions for callers
pub use jitter::{compute_display_points, compute_display_points_with};
pub use types::{BoundingBox, DisplayPoint, LayoutConfig};

/// Jitter magnitude in degrees applied when no override is configured
pub const DEFAULT_JITTER_FACTOR: f64 = 0.02;

/// Approximate continental-US bounding box; pins outside it are dropped
pub const CONUS_BOUNDS: BoundingBox = BoundingBox {
    min_latitude: 24.396308,
    max_latitude: 49.384358,
    min_longitude: -124.848974,
    max_longitude: -66.885444,
};
