//! Input handling: event types, per-frame snapshots, the event tracker, and
//! the mapping from raw input to camera intent.

/// Platform-agnostic input events and the camera key set.
pub mod event;
/// Input-to-intent mapping and the mode-key edge latch.
pub mod intent;
/// Immutable per-frame keyboard and pointer state.
pub mod snapshot;
/// Folds raw events into snapshots.
pub mod tracker;

pub use event::{CameraKey, InputEvent, MouseButton};
pub use intent::{CameraIntent, EdgeLatch};
pub use snapshot::{InputSnapshot, KeyboardState, PointerState};
pub use tracker::InputTracker;
