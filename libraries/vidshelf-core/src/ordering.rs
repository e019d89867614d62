//! Position arithmetic for playlist memberships
//!
//! Positions are 1-based ranks scoped to one playlist. Appends always land
//! after the current maximum; the storage layer does that inside its insert
//! statement. Moves overwrite the moved row's position and never shift
//! siblings, so two rows may end up sharing a rank; readers break such ties
//! by membership id.

use crate::types::Direction;

/// Position a membership currently at `current` is overwritten with.
///
/// `max_position` is the playlist maximum *including* the moved row and is
/// only consulted for [`Direction::Bottom`].
pub fn target_position(direction: Direction, current: i64, max_position: i64) -> i64 {
    match direction {
        Direction::Up => current - 1,
        Direction::Down => current + 1,
        Direction::Top => 1,
        Direction::Bottom => max_position + 1,
    }
}
