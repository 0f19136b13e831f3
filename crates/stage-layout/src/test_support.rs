// ABOUTME: Shared fixtures for layout engine unit tests.
// ABOUTME: Builds fixed-pixel panel configurations and engines around them.

use stage_core::{ContainerSize, Dimension, EngineSettings, PanelConfig};

use crate::{LayoutEngine, Panel};

pub fn panel(id: &str, x: f32, y: f32, width: f32, height: f32) -> PanelConfig {
    PanelConfig::new(
        id,
        "slide",
        Dimension::Fixed(x),
        Dimension::Fixed(y),
        Dimension::Fixed(width),
        Dimension::Fixed(height),
    )
}

pub fn panels(configs: &[PanelConfig], container: ContainerSize) -> Vec<Panel> {
    configs
        .iter()
        .enumerate()
        .map(|(i, config)| Panel::from_config(config, i as u64 + 1, container))
        .collect()
}

pub fn engine(configs: Vec<PanelConfig>, width: f32, height: f32) -> LayoutEngine {
    let settings = EngineSettings {
        snap_threshold: 5.0,
        overlap_epsilon: 0.5,
    };
    LayoutEngine::new(configs, ContainerSize::new(width, height), settings).unwrap()
}

/// Invariants every visible panel must satisfy at rest
pub fn assert_in_bounds(engine: &LayoutEngine) {
    let container = engine.container();
    for p in engine.panels().iter().filter(|p| p.visible) {
        assert!(p.rect.x >= 0.0 && p.rect.y >= 0.0, "{} has negative origin", p.id);
        assert!(p.rect.right() <= container.width + 0.001, "{} overflows right", p.id);
        assert!(p.rect.bottom() <= container.height + 0.001, "{} overflows bottom", p.id);
        assert!(p.rect.width >= p.min_width, "{} below min width", p.id);
        assert!(p.rect.height >= p.min_height, "{} below min height", p.id);
    }
}

pub fn assert_no_overlap(engine: &LayoutEngine) {
    let epsilon = engine.settings().overlap_epsilon;
    let visible: Vec<_> = engine.panels().iter().filter(|p| p.visible).collect();
    for (i, a) in visible.iter().enumerate() {
        for b in &visible[i + 1..] {
            assert!(
                !a.rect.overlaps(&b.rect, epsilon),
                "{} overlaps {}: {:?} vs {:?}",
                a.id,
                b.id,
                a.rect,
                b.rect
            );
        }
    }
}
