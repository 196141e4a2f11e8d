use crate::anim::{SegmentWeights, Visibility, frontier_point};
use crate::coords::{Vec2, ViewTransform};
use crate::error::{BuildError, BuildResult};
use crate::paint::GradientTable;
use crate::path::CurveSegment;

use super::config::{PipelineConfig, clamp_line_width};
use super::wire::CircleVertex;

/// Endpoints closer than this (in authoring units) count as the same vertex.
pub const COINCIDENT_TOLERANCE: f32 = 1.0e-5;

/// What a `CircleVertex` rounds off.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CapKind {
    /// Start of the stroke, or of a segment after a break.
    Start,
    /// Sharp corner between two connected segments.
    Join,
    /// End of a segment followed by a break.
    End,
    /// End of the revealed stroke; follows the animated frontier.
    PenTip,
}

/// Where a cap sits in the path: its kind and the segment whose reveal controls it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CapSite {
    pub kind: CapKind,
    pub segment: usize,
}

/// Cap and join circles for one path, in traversal order, with the pen tip last.
#[derive(Debug, Clone, PartialEq)]
pub struct CapGeometry {
    pub circles: Vec<CircleVertex>,
    pub sites: Vec<CapSite>,
}

/// Lists cap sites for `segments`. Depends on geometry only, never on the reveal state.
///
/// Distances and turn angles are measured in whatever space `segments` are in;
/// pass authoring-space segments so a non-uniform view fit cannot add joins.
pub fn cap_sites(segments: &[CurveSegment], join_threshold: f32) -> Vec<CapSite> {
    let Some(last) = segments.len().checked_sub(1) else {
        return Vec::new();
    };

    let mut sites = vec![CapSite { kind: CapKind::Start, segment: 0 }];
    for (i, pair) in segments.windows(2).enumerate() {
        let (cur, next) = (&pair[0], &pair[1]);
        if cur.b.distance(next.a) > COINCIDENT_TOLERANCE {
            sites.push(CapSite { kind: CapKind::End, segment: i });
            sites.push(CapSite { kind: CapKind::Start, segment: i + 1 });
        } else if cur.end_tangent().angle_between(next.start_tangent()) > join_threshold {
            sites.push(CapSite { kind: CapKind::Join, segment: i });
        }
    }
    sites.push(CapSite { kind: CapKind::PenTip, segment: last });
    sites
}

/// Emits one `CircleVertex` per cap site.
///
/// Radius is half the stroke width, or 0 for caps the reveal has not reached:
/// start caps need their segment started, joins and end caps need it finished,
/// the pen tip needs anything revealed. Colors are read from `gradient` at the
/// cap's position along the path; the pen tip reads it at the current progress.
///
/// `segments`, `weights` and `visibility` are all in authoring space; only the
/// emitted centers go through `transform`. `line_width` is already in render units.
pub fn build_caps(
    segments: &[CurveSegment],
    weights: &SegmentWeights,
    visibility: &Visibility,
    gradient: &GradientTable,
    line_width: f32,
    transform: &ViewTransform,
    config: &PipelineConfig,
) -> BuildResult<CapGeometry> {
    if segments.is_empty() {
        return Err(BuildError::EmptyPath);
    }
    for found in [visibility.len(), weights.len()] {
        if found != segments.len() {
            return Err(BuildError::VisibilityMismatch { expected: segments.len(), found });
        }
    }

    let config = config.sanitized();
    let radius = clamp_line_width(line_width) / 2.0;
    let sites = cap_sites(segments, config.join_threshold);

    let circles = sites
        .iter()
        .map(|site| {
            let i = site.segment;
            let (center, offset, visible) = match site.kind {
                CapKind::Start => (segments[i].a, weights.start_offset(i), visibility.start_cap_visible(i)),
                CapKind::Join | CapKind::End => {
                    (segments[i].b, weights.end_offset(i), visibility.end_cap_visible(i))
                }
                CapKind::PenTip => (
                    frontier_point(segments, weights, visibility).unwrap_or(segments[0].a),
                    visibility.percent(),
                    visibility.pen_tip_visible(),
                ),
            };
            circle(transform.apply(center), gradient, offset, if visible { radius } else { 0.0 })
        })
        .collect::<Vec<_>>();

    log::trace!(
        "cap geometry: {} circles, {} visible",
        circles.len(),
        circles.iter().filter(|c| !c.is_suppressed()).count()
    );

    Ok(CapGeometry { circles, sites })
}

fn circle(center: Vec2, gradient: &GradientTable, offset: f32, radius: f32) -> CircleVertex {
    CircleVertex::new(center.to_array(), gradient.sample(offset), radius)
}
