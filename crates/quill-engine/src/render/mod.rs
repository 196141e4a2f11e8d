//! Curve-to-instance buffer preparation.
//!
//! Turns a path (segments in render space, a stroke style, a reveal progress)
//! into the byte-exact records a GPU curve rasterizer consumes:
//! - one [`GlobalParameters`] per draw
//! - one [`BezierParameters`] instance per segment
//! - a sampled gradient table
//! - [`CircleVertex`] caps and joins
//!
//! Nothing here touches a GPU device; `wgpu` is only used to describe layouts.

mod cache;
mod caps;
mod config;
mod frame;
mod instances;
mod wire;

pub use cache::FrameCache;
pub use caps::{COINCIDENT_TOLERANCE, CapGeometry, CapKind, CapSite, build_caps, cap_sites};
pub use config::{
    DEFAULT_ELEMENTS_PER_INSTANCE, DEFAULT_GRADIENT_STEPS, DEFAULT_JOIN_THRESHOLD, MIN_LINE_WIDTH,
    PipelineConfig, clamp_line_width,
};
pub use frame::{Frame, FrameInput, build_frame, build_frames};
pub use instances::{InstanceBuffers, build_instances};
pub use wire::{BezierParameters, CircleVertex, GlobalParameters};
