// ABOUTME: Panel state tracked by the layout engine.
// ABOUTME: Includes the partial update record and the placement snapshot for renderers.

use serde::{Deserialize, Serialize};
use stage_core::{clamp_to_bounds, sanitize, ContainerSize, PanelConfig, Rect};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(pub String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub id: PanelId,
    pub component_key: String,
    pub rect: Rect,
    pub min_width: f32,
    pub min_height: f32,
    pub z_index: u64,
    pub visible: bool,
    pub draggable: bool,
    pub resizable: bool,
}

impl Panel {
    /// Build a panel from its configuration, resolving dimensions against the container
    pub(crate) fn from_config(
        config: &PanelConfig,
        z_index: u64,
        container: ContainerSize,
    ) -> Self {
        let (min_width, min_height) = min_size(config);
        Self {
            id: PanelId::new(config.id.clone()),
            component_key: config.component_key.clone(),
            rect: default_rect(config, container),
            min_width,
            min_height,
            z_index,
            visible: config.visible.unwrap_or(true),
            draggable: config.draggable.unwrap_or(true),
            resizable: config.resizable.unwrap_or(true),
        }
    }

    /// Clamp a candidate rectangle to this panel's minimums and the container
    pub fn fit(&self, rect: Rect, container: ContainerSize) -> Rect {
        clamp_to_bounds(rect, self.min_width, self.min_height, container)
    }

    pub fn placement(&self) -> PanelPlacement {
        PanelPlacement {
            id: self.id.clone(),
            component_key: self.component_key.clone(),
            x: self.rect.x,
            y: self.rect.y,
            width: self.rect.width,
            height: self.rect.height,
            z_index: self.z_index,
            visible: self.visible,
        }
    }
}

/// Configured minimums; missing, negative or non-finite values become 0
fn min_size(config: &PanelConfig) -> (f32, f32) {
    let min = |value: Option<f32>| sanitize(value.unwrap_or(0.0)).max(0.0);
    (min(config.min_width), min(config.min_height))
}

/// Configured default geometry, clamped to minimums and bounds
pub(crate) fn default_rect(config: &PanelConfig, container: ContainerSize) -> Rect {
    let rect = Rect::new(
        config.x.resolve(container.width),
        config.y.resolve(container.height),
        config.width.resolve(container.width),
        config.height.resolve(container.height),
    );
    let (min_width, min_height) = min_size(config);
    clamp_to_bounds(rect, min_width, min_height, container)
}

/// Shallow patch applied through the registry. `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanelUpdate {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub z_index: Option<u64>,
    pub visible: Option<bool>,
}

impl PanelUpdate {
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn rect(rect: Rect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
            ..Self::default()
        }
    }

    pub fn z_index(z_index: u64) -> Self {
        Self {
            z_index: Some(z_index),
            ..Self::default()
        }
    }

    pub fn visible(visible: bool) -> Self {
        Self {
            visible: Some(visible),
            ..Self::default()
        }
    }
}

/// Read-only placement handed to the rendering layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelPlacement {
    pub id: PanelId,
    pub component_key: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub z_index: u64,
    pub visible: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::panel;

    #[test]
    fn malformed_minimums_become_zero() {
        let mut config = panel("a", 10.0, 10.0, 200.0, 100.0);
        config.min_width = Some(f32::NAN);
        config.min_height = Some(-20.0);

        let panel = Panel::from_config(&config, 1, ContainerSize::new(800.0, 600.0));

        assert_eq!(panel.min_width, 0.0);
        assert_eq!(panel.min_height, 0.0);
        assert_eq!(panel.rect, Rect::new(10.0, 10.0, 200.0, 100.0));
    }

    #[test]
    fn infinite_minimum_does_not_poison_geometry() {
        let mut config = panel("a", 0.0, 0.0, 200.0, 100.0);
        config.min_width = Some(f32::INFINITY);

        let panel = Panel::from_config(&config, 1, ContainerSize::new(800.0, 600.0));
        let fitted = panel.fit(Rect::new(0.0, 0.0, 50.0, 50.0), ContainerSize::new(800.0, 600.0));

        assert_eq!(panel.min_width, 0.0);
        assert_eq!(fitted, Rect::new(0.0, 0.0, 50.0, 50.0));
    }
}
