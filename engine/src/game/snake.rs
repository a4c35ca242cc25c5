use std::collections::{HashSet, VecDeque};

use super::types::Position;

/// Ordered body (head first) plus an occupancy set kept in lockstep.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
    body_set: HashSet<Position>,
}

impl Snake {
    pub fn new(start_pos: Position) -> Self {
        let mut body = VecDeque::new();
        let mut body_set = HashSet::new();
        body.push_back(start_pos);
        body_set.insert(start_pos);
        Self { body, body_set }
    }

    /// Builds a snake from explicit segments, head first. Duplicate cells
    /// are rejected.
    pub fn from_segments(segments: &[Position]) -> Option<Self> {
        let mut body = VecDeque::with_capacity(segments.len());
        let mut body_set = HashSet::with_capacity(segments.len());
        for &segment in segments {
            if !body_set.insert(segment) {
                return None;
            }
            body.push_back(segment);
        }
        if body.is_empty() {
            return None;
        }
        Some(Self { body, body_set })
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, position: &Position) -> bool {
        self.body_set.contains(position)
    }

    pub fn segments(&self) -> impl ExactSizeIterator<Item = &Position> {
        self.body.iter()
    }

    pub(crate) fn push_head(&mut self, position: Position) {
        self.body.push_front(position);
        self.body_set.insert(position);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Position> {
        if self.body.len() <= 1 {
            return None;
        }
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }
}
