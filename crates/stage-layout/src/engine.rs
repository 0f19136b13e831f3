// ABOUTME: Layout engine facade that owns all panel state for one workspace.
// ABOUTME: Routes pointer and container events to the controllers and exposes snapshots.

use stage_core::{ContainerSize, EngineSettings, LayoutConfig, PanelConfig};

use crate::gesture::{GestureKind, GestureLock};
use crate::snap::SnapLines;
use crate::{LayoutError, Panel, PanelId, PanelPlacement, PanelRegistry, PanelUpdate, ZOrderManager};

#[derive(Debug)]
pub struct LayoutEngine {
    pub(crate) registry: PanelRegistry,
    pub(crate) z_order: ZOrderManager,
    pub(crate) gestures: GestureLock,
    pub(crate) snap_lines: SnapLines,
    pub(crate) container: ContainerSize,
    pub(crate) settings: EngineSettings,
    /// Configured defaults, kept for reflow
    pub(crate) defaults: Vec<PanelConfig>,
}

impl LayoutEngine {
    /// Build an engine from a static panel list. Panels get z 1..=n in configuration order.
    pub fn new(
        panels: Vec<PanelConfig>,
        container: ContainerSize,
        settings: EngineSettings,
    ) -> Result<Self, LayoutError> {
        let state = panels
            .iter()
            .enumerate()
            .map(|(i, config)| Panel::from_config(config, i as u64 + 1, container))
            .collect();
        let registry = PanelRegistry::new(state)?;
        let z_order = ZOrderManager::new(registry.len());

        tracing::debug!(
            "Layout engine created with {} panels in {}x{}",
            registry.len(),
            container.width,
            container.height
        );

        Ok(Self {
            registry,
            z_order,
            gestures: GestureLock::default(),
            snap_lines: SnapLines::default(),
            container,
            settings,
            defaults: panels,
        })
    }

    pub fn from_config(config: &LayoutConfig) -> Result<Self, LayoutError> {
        Self::new(config.panels.clone(), config.container, config.settings)
    }

    pub fn container(&self) -> ContainerSize {
        self.container
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn panel(&self, id: &PanelId) -> Option<&Panel> {
        self.registry.get(id)
    }

    pub fn panels(&self) -> &[Panel] {
        self.registry.list()
    }

    /// Every panel in configuration order, hidden ones included
    pub fn snapshot(&self) -> Vec<PanelPlacement> {
        self.registry.list().iter().map(Panel::placement).collect()
    }

    /// Visible panels in paint order (lowest z first)
    pub fn render_order(&self) -> Vec<PanelPlacement> {
        let mut visible: Vec<_> = self
            .registry
            .list()
            .iter()
            .filter(|p| p.visible)
            .map(Panel::placement)
            .collect();
        visible.sort_by_key(|p| p.z_index);
        visible
    }

    /// Guides for the drag in progress; empty when idle
    pub fn snap_lines(&self) -> &SnapLines {
        &self.snap_lines
    }

    pub fn active(&self) -> Option<(&PanelId, GestureKind)> {
        self.gestures.active()
    }

    pub fn bring_to_front(&mut self, id: &PanelId) -> bool {
        self.z_order.bring_to_front(&mut self.registry, id).is_some()
    }

    /// Flip visibility without touching geometry or z-order
    pub fn toggle_visibility(&mut self, id: &PanelId) -> bool {
        let Some(visible) = self.registry.get(id).map(|p| p.visible) else {
            tracing::warn!("Cannot toggle visibility of unknown panel {}", id);
            return false;
        };
        self.registry.update(id, PanelUpdate::visible(!visible)).is_some()
    }

    /// Log a rejected operation and report whether it was applied
    pub(crate) fn report(&self, operation: &str, result: Result<(), LayoutError>) -> bool {
        match result {
            Ok(()) => true,
            Err(e @ (LayoutError::NotDraggable(_) | LayoutError::NotResizable(_))) => {
                tracing::debug!("Ignoring {}: {}", operation, e);
                false
            }
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", operation, e);
                false
            }
        }
    }
}
