// ABOUTME: Stacking order assignment for panels.
// ABOUTME: A per-engine counter that only ever grows, so the latest interaction is on top.

use crate::{PanelId, PanelRegistry, PanelUpdate};

#[derive(Debug)]
pub struct ZOrderManager {
    next: u64,
}

impl ZOrderManager {
    /// Panels start at z 1..=panel_count, so the counter begins just above them
    pub fn new(panel_count: usize) -> Self {
        Self {
            next: panel_count as u64 + 1,
        }
    }

    /// Value the next `bring_to_front` will assign
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Raise a panel above everything else. Always consumes a value, even if
    /// the panel is already topmost.
    pub fn bring_to_front(&mut self, registry: &mut PanelRegistry, id: &PanelId) -> Option<u64> {
        let z_index = self.next;
        registry.update(id, PanelUpdate::z_index(z_index))?;
        self.next += 1;
        Some(z_index)
    }
}
