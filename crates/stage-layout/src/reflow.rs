// ABOUTME: Container resize handling.
// ABOUTME: Recomputes every panel from its configured defaults against the new size.

use stage_core::ContainerSize;

use crate::panel::default_rect;
use crate::{LayoutEngine, PanelId, PanelUpdate};

impl LayoutEngine {
    /// Apply a new container size.
    ///
    /// Geometry is rebuilt from each panel's configured default, so manual
    /// arrangement is discarded. Z-order, visibility, and any gesture lock are
    /// left as they are.
    ///
    /// Panels are not resolved against each other here. When a panel's minimum
    /// is larger than its percentage share of a small container, it keeps the
    /// minimum and may overlap its neighbors until the container grows again.
    pub fn resize_container(&mut self, width: f32, height: f32) {
        let container = ContainerSize::new(width, height);
        self.container = container;

        for config in &self.defaults {
            let rect = default_rect(config, container);
            self.registry
                .update(&PanelId::new(config.id.clone()), PanelUpdate::rect(rect));
        }

        tracing::debug!(
            "Reflowed {} panels into {}x{}",
            self.defaults.len(),
            container.width,
            container.height
        );
    }
}
