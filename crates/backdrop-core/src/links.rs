use crate::config::LinkRule;
use glam::Vec2;

/// Connecting line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    /// Indices into the slice the link was computed from.
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub length: f32,
    /// Direction from `from` to `to`, radians.
    pub angle: f32,
}

/// Links between each of the first `rule.prefix` positions and the
/// `rule.window` positions after it, for pairs strictly closer than
/// `rule.max_distance_px`. Cost is bounded by `prefix * window`.
pub fn proximity_links(positions: &[Vec2], rule: &LinkRule) -> Vec<Link> {
    let mut links = Vec::new();
    for (a, &from) in positions.iter().enumerate().take(rule.prefix) {
        let end = (a + 1 + rule.window).min(positions.len());
        for (b, &to) in positions.iter().enumerate().take(end).skip(a + 1) {
            let delta = to - from;
            let length = delta.length();
            if length < rule.max_distance_px {
                links.push(Link {
                    a,
                    b,
                    from,
                    to,
                    length,
                    angle: delta.y.atan2(delta.x),
                });
            }
        }
    }
    links
}
