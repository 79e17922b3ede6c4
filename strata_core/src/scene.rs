// Copyright 2025 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained mark set with deterministic paint ordering.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::mark::{Mark, MarkId};

/// A retained set of marks keyed by [`MarkId`].
///
/// Panels re-render by calling [`Scene::replace`] with a fresh mark list;
/// identity-stable generators make this an in-place swap rather than a
/// churn of ids. Iteration order is always `(z_index, id)` so painting is
/// deterministic regardless of insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self {
            marks: HashMap::new(),
        }
    }

    /// Inserts or replaces a single mark.
    pub fn insert(&mut self, mark: Mark) {
        self.marks.insert(mark.id, mark);
    }

    /// Replaces the entire scene content with `marks`.
    pub fn replace(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.clear();
        for mark in marks {
            self.marks.insert(mark.id, mark);
        }
    }

    /// Removes a mark by id; returns it if present.
    pub fn remove(&mut self, id: MarkId) -> Option<Mark> {
        self.marks.remove(&id)
    }

    /// Removes all marks.
    pub fn clear(&mut self) {
        self.marks.clear();
    }

    /// Returns the number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` when the scene holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns marks sorted by `(z_index, id)`.
    pub fn iter_sorted(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.values().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use kurbo::Rect;
    use peniko::Color;

    use super::*;

    fn rect_mark(id: u64, z: i32) -> Mark {
        Mark::rect(
            MarkId(id),
            z,
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Color::WHITE,
        )
    }

    #[test]
    fn iteration_is_sorted_by_z_then_id() {
        let mut scene = Scene::new();
        scene.insert(rect_mark(2, 10));
        scene.insert(rect_mark(1, 10));
        scene.insert(rect_mark(3, -50));

        let ids: Vec<u64> = scene.iter_sorted().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, std::vec![3, 1, 2]);
    }

    #[test]
    fn replace_swaps_content() {
        let mut scene = Scene::new();
        scene.insert(rect_mark(1, 0));
        scene.insert(rect_mark(2, 0));
        scene.replace([rect_mark(7, 0)]);
        assert_eq!(scene.len(), 1);
        assert!(scene.remove(MarkId(7)).is_some());
        assert!(scene.is_empty());
    }

    #[test]
    fn insert_with_same_id_replaces() {
        let mut scene = Scene::new();
        scene.insert(rect_mark(1, 0));
        scene.insert(rect_mark(1, 5));
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.iter_sorted()[0].z_index, 5);
    }
}
