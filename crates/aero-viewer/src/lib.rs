//! Aeroplanner viewer - render-sink contract and synchronizer
//!
//! The actual 3D engine (camera, terrain, picking input) is out of scope;
//! this crate defines the primitive set the orchestrator pushes at it and
//! the reconciliation rules for surfaces, obstacle markers, and batch
//! results.

pub mod memory;
pub mod picker;
pub mod sink;
pub mod sync;

pub use memory::MemorySink;
pub use picker::{ObstaclePicker, PickEvent};
pub use sink::{CameraFrame, DisplayColor, MarkerPrimitive, PolygonPrimitive, RenderSink};
pub use sync::{
    draw_surfaces, render_batch_results, set_obstacle_marker, DisplayMode, BATCH_MARKER_PREFIX,
    OBSTACLE_MARKER_ID,
};
