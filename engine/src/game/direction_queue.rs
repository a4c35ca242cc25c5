use super::types::Direction;

/// One-slot buffer between input and the tick: the last accepted proposal
/// wins, reversals are judged against the committed direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionQueue {
    committed: Direction,
    pending: Direction,
}

impl DirectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn committed(&self) -> Direction {
        self.committed
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }

    pub fn is_idle(&self) -> bool {
        self.committed.is_none() && self.pending.is_none()
    }

    /// Returns whether the proposal was accepted.
    pub fn propose(&mut self, direction: Direction, snake_len: usize) -> bool {
        if direction.is_none() {
            return false;
        }
        if snake_len > 1 && direction.is_opposite(&self.committed) {
            return false;
        }

        self.pending = direction;
        // a stationary snake starts moving on the very next tick
        if self.committed.is_none() {
            self.committed = direction;
        }
        true
    }

    pub fn commit(&mut self) -> Direction {
        if !self.pending.is_none() {
            self.committed = self.pending;
        }
        self.committed
    }

    pub fn reset(&mut self) {
        self.committed = Direction::None;
        self.pending = Direction::None;
    }

    #[cfg(test)]
    pub(crate) fn force(&mut self, direction: Direction) {
        self.committed = direction;
        self.pending = direction;
    }
}
