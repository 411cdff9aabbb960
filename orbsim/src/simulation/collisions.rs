//! Event detection for the orbit engine
//!
//! Three checks, all pure functions over positions:
//! - center hits, in continuous space against the center's radius
//! - point-point collisions, in pixel space (same rounded pixel)
//! - close calls, in continuous space against `close_call_distance`

use std::collections::HashMap;

use super::states::{CenterObject, NVec2, StepPosition};

/// Largest pixel coordinate magnitude that still maps to a distinct `i64`
const PIXEL_LIMIT: f64 = 9.0e18;

/// Integer pixel a position falls on for the given grid size
///
/// Coordinates beyond `i64` range saturate; see [`pixel_in_range`].
pub fn to_pixel(position: NVec2, meters_per_pixel: f64) -> (i64, i64) {
    let p = position / meters_per_pixel;
    (p.x.round() as i64, p.y.round() as i64)
}

/// True when `position` lies on a pixel [`to_pixel`] can represent exactly
pub fn pixel_in_range(position: NVec2, meters_per_pixel: f64) -> bool {
    let p = position / meters_per_pixel;
    p.x.abs() <= PIXEL_LIMIT && p.y.abs() <= PIXEL_LIMIT
}

/// True once `position` is inside or on the edge of the center object
pub fn hits_center(center: &CenterObject, position: NVec2) -> bool {
    (position - center.position()).norm() <= center.radius()
}

/// Indexes of every active body that shares its pixel with another active body
/// Retired entries and bodies off the representable pixel grid never collide.
/// The result is sorted.
pub fn pixel_collisions(positions: &[StepPosition], meters_per_pixel: f64) -> Vec<usize> {
    let mut by_pixel: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
    for (i, pos) in positions.iter().enumerate() {
        if let StepPosition::Active(p) = pos {
            if !pixel_in_range(*p, meters_per_pixel) {
                continue;
            }
            by_pixel.entry(to_pixel(*p, meters_per_pixel)).or_default().push(i);
        }
    }

    let mut colliding: Vec<usize> = by_pixel
        .into_values()
        .filter(|group| group.len() > 1)
        .flatten()
        .collect();
    colliding.sort_unstable();
    colliding
}

/// Participants of a close call centered on body `index`
///
/// Returns `index` plus every other active body within `threshold` of it,
/// sorted, or `None` if nothing is that close (or `index` itself is retired).
pub fn close_call(index: usize, positions: &[StepPosition], threshold: f64) -> Option<Vec<usize>> {
    let own = positions.get(index)?.active()?;

    let mut participants: Vec<usize> = positions
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != index)
        .filter_map(|(j, pos)| pos.active().map(|p| (j, p)))
        .filter(|(_, p)| (p - own).norm() <= threshold)
        .map(|(j, _)| j)
        .collect();

    if participants.is_empty() {
        return None;
    }
    participants.push(index);
    participants.sort_unstable();
    Some(participants)
}
