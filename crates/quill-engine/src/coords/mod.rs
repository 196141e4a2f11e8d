//! Coordinate types and the user-space → render-space transform.
//!
//! Authoring space:
//! - view-box units, origin top-left, +X right, +Y down
//!
//! Render space is whatever the consumer's vertex shader expects; the default
//! fit ([`ViewTransform::fit`]) produces clip space with +Y up.

mod vec2;
mod view;
mod viewport;

pub use vec2::Vec2;
pub use view::{NDC_MARGIN, ViewTransform};
pub use viewport::Viewport;
