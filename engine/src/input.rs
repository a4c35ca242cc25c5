use crate::game::Direction;

/// Maps a drag of `(dx, dy)` cells to a direction once it is longer than
/// `threshold` along its dominant axis.
pub fn swipe_direction(dx: i32, dy: i32, threshold: u16) -> Option<Direction> {
    let (abs_x, abs_y) = (dx.unsigned_abs(), dy.unsigned_abs());
    if abs_x.max(abs_y) <= threshold as u32 {
        return None;
    }

    if abs_x > abs_y {
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}
