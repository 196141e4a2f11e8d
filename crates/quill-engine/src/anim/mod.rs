//! Fill-percent animation.
//!
//! Maps a single global progress value onto per-segment reveal factors, decides
//! which caps are shown, and locates the animated frontier (pen tip).

mod clock;
mod fill;
mod weights;

pub use clock::{RevealClock, RevealTick};
pub use fill::{InstanceState, Visibility, clamp_percent, frontier_point};
pub use weights::{SegmentWeights, Weighting};
