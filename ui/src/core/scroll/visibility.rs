//! Which cards are currently on screen.
//!
//! Fed by intersection observer callbacks; the layered card renderer skips
//! style work for everything else.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleSet {
    visible: BTreeSet<usize>,
}

impl VisibleSet {
    /// Returns `true` if the set changed.
    pub fn set(&mut self, index: usize, visible: bool) -> bool {
        if visible {
            self.visible.insert(index)
        } else {
            self.visible.remove(&index)
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }
}
