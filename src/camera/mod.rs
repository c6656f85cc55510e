//! Camera system for 3D scene viewing.
//!
//! Provides a free-flying perspective camera with a top-down orthographic
//! alternative, per-frame input integration, and frustum visibility tests.

/// Axis-aligned bounding boxes for visibility queries.
pub mod bounds;
/// Per-frame update driven by host frame data and input snapshots.
pub mod controller;
/// Core camera state, accessors, and matrix derivation.
pub mod core;
/// View frustum extraction and intersection tests.
pub mod frustum;

pub use bounds::BoundingBox;
pub use controller::{FrameContext, Viewport};
pub use self::core::{Camera, CameraUniform, MIN_ORTHO_SCALE, ORTHO_EYE_HEIGHT};
pub use frustum::{Frustum, Plane};
