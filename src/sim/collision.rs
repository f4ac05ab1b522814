//! Collision predicates for the ball against bricks, walls, and the paddle plane
//!
//! All functions here are pure; the tick applies their verdicts to mutable
//! state. Wall and paddle-plane checks are pre-emptive: they test the
//! projected next position, so a bounce is resolved the tick before the ball
//! would leave the arena.

use glam::Vec2;

/// Which velocity component a brick bounce flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    /// Side impact: flip dx
    Horizontal,
    /// Top/bottom impact: flip dy
    Vertical,
    /// Exact corner: flip both
    Corner,
}

/// Separating-offset test between a circle and an axis-aligned square.
///
/// Overlap exists when the center-to-center distance is under
/// `half_extent + radius` on both axes. The bounce axis is the one with the
/// smaller overlap; equal overlaps are a corner hit.
pub fn circle_square_overlap(
    circle_center: Vec2,
    circle_radius: f32,
    square_center: Vec2,
    half_extent: f32,
) -> Option<BounceAxis> {
    let dist = circle_center - square_center;
    let reach = half_extent + circle_radius;

    if dist.x.abs() >= reach || dist.y.abs() >= reach {
        return None;
    }

    let overlap_x = reach - dist.x.abs();
    let overlap_y = reach - dist.y.abs();

    Some(if overlap_x < overlap_y {
        BounceAxis::Horizontal
    } else if overlap_y < overlap_x {
        BounceAxis::Vertical
    } else {
        BounceAxis::Corner
    })
}

/// Would the projected x put the ball past the left or right wall?
#[inline]
pub fn exits_side_walls(next_x: f32, radius: f32, arena_width: f32) -> bool {
    next_x > arena_width - radius || next_x < radius
}

/// Would the projected y put the ball past the top wall?
#[inline]
pub fn exits_top_wall(next_y: f32, radius: f32) -> bool {
    next_y < radius
}

/// Would the projected y carry the ball across the paddle plane at the
/// bottom edge?
#[inline]
pub fn crosses_paddle_plane(next_y: f32, radius: f32, arena_height: f32) -> bool {
    next_y > arena_height - radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_side_impact_flips_dx() {
        // Ball left of a brick at origin, overlapping mostly in x.
        let axis = circle_square_overlap(Vec2::new(-20.0, 2.0), 8.0, Vec2::ZERO, 15.0);
        assert_eq!(axis, Some(BounceAxis::Horizontal));
    }

    #[test]
    fn test_overlap_top_impact_flips_dy() {
        let axis = circle_square_overlap(Vec2::new(2.0, -20.0), 8.0, Vec2::ZERO, 15.0);
        assert_eq!(axis, Some(BounceAxis::Vertical));
    }

    #[test]
    fn test_overlap_exact_corner_flips_both() {
        // Equidistant on both axes: overlaps tie.
        let axis = circle_square_overlap(Vec2::new(20.0, 20.0), 8.0, Vec2::ZERO, 15.0);
        assert_eq!(axis, Some(BounceAxis::Corner));
    }

    #[test]
    fn test_no_overlap_misses() {
        // reach = 23, so 23 away on one axis is a miss.
        assert_eq!(
            circle_square_overlap(Vec2::new(23.0, 0.0), 8.0, Vec2::ZERO, 15.0),
            None
        );
        assert_eq!(
            circle_square_overlap(Vec2::new(0.0, -23.0), 8.0, Vec2::ZERO, 15.0),
            None
        );
    }

    #[test]
    fn test_side_wall_bounds() {
        assert!(exits_side_walls(7.9, 8.0, 480.0));
        assert!(!exits_side_walls(8.0, 8.0, 480.0));
        assert!(!exits_side_walls(472.0, 8.0, 480.0));
        assert!(exits_side_walls(472.1, 8.0, 480.0));
    }

    #[test]
    fn test_top_wall_bounds() {
        assert!(exits_top_wall(7.9, 8.0));
        assert!(!exits_top_wall(8.0, 8.0));
    }

    #[test]
    fn test_paddle_plane_bounds() {
        assert!(!crosses_paddle_plane(312.0, 8.0, 320.0));
        assert!(crosses_paddle_plane(312.1, 8.0, 320.0));
    }
}
