// ABOUTME: Authoritative store of panel state.
// ABOUTME: Every geometry, z-order, and visibility change goes through `update`.

use std::collections::HashMap;

use crate::{LayoutError, Panel, PanelId, PanelUpdate};

#[derive(Debug, Default)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
    index: HashMap<PanelId, usize>,
}

impl PanelRegistry {
    pub fn new(panels: Vec<Panel>) -> Result<Self, LayoutError> {
        let mut index = HashMap::with_capacity(panels.len());
        for (i, panel) in panels.iter().enumerate() {
            if index.insert(panel.id.clone(), i).is_some() {
                return Err(LayoutError::DuplicatePanel(panel.id.clone()));
            }
        }
        Ok(Self { panels, index })
    }

    pub fn get(&self, id: &PanelId) -> Option<&Panel> {
        self.index.get(id).map(|&i| &self.panels[i])
    }

    /// All panels in configuration order
    pub fn list(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Merge the set fields of `update` into the panel.
    /// Unknown ids are logged and ignored.
    pub fn update(&mut self, id: &PanelId, update: PanelUpdate) -> Option<&Panel> {
        let Some(&i) = self.index.get(id) else {
            tracing::warn!("Ignoring update for unknown panel {}", id);
            return None;
        };

        let panel = &mut self.panels[i];
        if let Some(x) = update.x {
            panel.rect.x = x;
        }
        if let Some(y) = update.y {
            panel.rect.y = y;
        }
        if let Some(width) = update.width {
            panel.rect.width = width;
        }
        if let Some(height) = update.height {
            panel.rect.height = height;
        }
        if let Some(z_index) = update.z_index {
            panel.z_index = z_index;
        }
        if let Some(visible) = update.visible {
            panel.visible = visible;
        }
        Some(panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{panel, panels};
    use stage_core::{ContainerSize, Rect};

    fn registry() -> PanelRegistry {
        let configs = [
            panel("a", 0.0, 0.0, 100.0, 100.0),
            panel("b", 100.0, 0.0, 100.0, 100.0),
            panel("c", 200.0, 0.0, 100.0, 100.0),
        ];
        PanelRegistry::new(panels(&configs, ContainerSize::new(800.0, 600.0))).unwrap()
    }

    #[test]
    fn list_keeps_configuration_order() {
        let registry = registry();
        let ids: Vec<_> = registry.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn update_merges_only_set_fields() {
        let mut registry = registry();
        let id = PanelId::from("b");
        let updated = registry.update(&id, PanelUpdate::position(10.0, 20.0)).unwrap();
        assert_eq!(updated.rect, Rect::new(10.0, 20.0, 100.0, 100.0));
        assert_eq!(updated.z_index, 2);
        assert!(updated.visible);
    }

    #[test]
    fn update_unknown_panel_is_ignored() {
        let mut registry = registry();
        let before = registry.list().to_vec();
        assert!(registry.update(&PanelId::from("ghost"), PanelUpdate::visible(false)).is_none());
        assert_eq!(registry.list(), &before[..]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let registry = registry();
        let mut panels = registry.list().to_vec();
        panels.push(panels[0].clone());
        assert_eq!(
            PanelRegistry::new(panels).unwrap_err(),
            LayoutError::DuplicatePanel(PanelId::from("a"))
        );
    }
}
