// ABOUTME: Edge snapping for dragged panels.
// ABOUTME: Pulls a proposed position onto nearby panel or container edges within a threshold.

use serde::Serialize;
use stage_core::{clamp, ContainerSize};

use crate::{Panel, PanelId};

/// Guide positions for the rendering layer while a drag is in progress
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapLines {
    /// x coordinates of vertical guides
    pub lines_v: Vec<f32>,
    /// y coordinates of horizontal guides
    pub lines_h: Vec<f32>,
}

impl SnapLines {
    pub fn is_empty(&self) -> bool {
        self.lines_v.is_empty() && self.lines_h.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines_v.clear();
        self.lines_h.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    pub x: f32,
    pub y: f32,
    pub lines: SnapLines,
}

/// Compute the snapped position of `active` when dragged to `(proposed_x, proposed_y)`.
///
/// The proposal is first clamped into the container. Each axis then snaps
/// independently to the closest candidate edge within `threshold`; on ties the
/// candidate seen first (other panels in registry order, then the container)
/// wins. Returns `None` when `active` is not in `panels`.
pub fn compute_snap(
    panels: &[Panel],
    container: ContainerSize,
    active: &PanelId,
    proposed_x: f32,
    proposed_y: f32,
    threshold: f32,
) -> Option<SnapResult> {
    let panel = panels.iter().find(|p| &p.id == active)?;
    let width = panel.rect.width;
    let height = panel.rect.height;
    let max_x = (container.width - width).max(0.0);
    let max_y = (container.height - height).max(0.0);

    let x = clamp(finite_or_zero(proposed_x), 0.0, max_x);
    let y = clamp(finite_or_zero(proposed_y), 0.0, max_y);

    let others: Vec<&Panel> = panels
        .iter()
        .filter(|p| p.visible && &p.id != active)
        .collect();

    let x_candidates = others
        .iter()
        .flat_map(|o| [o.rect.x, o.rect.right(), o.rect.x - width, o.rect.right() - width])
        .chain([0.0, max_x]);
    let y_candidates = others
        .iter()
        .flat_map(|o| [o.rect.y, o.rect.bottom(), o.rect.y - height, o.rect.bottom() - height])
        .chain([0.0, max_y]);

    let mut lines = SnapLines::default();
    let x = match nearest(x, x_candidates, max_x, threshold) {
        Some(snapped) => {
            lines.lines_v = vec![snapped, snapped + width];
            snapped
        }
        None => x,
    };
    let y = match nearest(y, y_candidates, max_y, threshold) {
        Some(snapped) => {
            lines.lines_h = vec![snapped, snapped + height];
            snapped
        }
        None => y,
    };

    Some(SnapResult { x, y, lines })
}

/// Closest in-bounds candidate within `threshold` of `value`, first one winning ties
fn nearest(
    value: f32,
    candidates: impl Iterator<Item = f32>,
    max: f32,
    threshold: f32,
) -> Option<f32> {
    let mut best: Option<(f32, f32)> = None;
    for candidate in candidates {
        // Candidates that would push the panel out of the container are skipped.
        if candidate < 0.0 || candidate > max {
            continue;
        }
        let distance = (candidate - value).abs();
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((candidate, distance));
        }
    }
    best.filter(|&(_, d)| d <= threshold).map(|(c, _)| c)
}

fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{panel, panels};

    fn container() -> ContainerSize {
        ContainerSize::new(800.0, 600.0)
    }

    fn snap(panels: &[Panel], id: &str, x: f32, y: f32, threshold: f32) -> SnapResult {
        compute_snap(panels, container(), &PanelId::from(id), x, y, threshold).unwrap()
    }

    #[test]
    fn snaps_left_edge_to_neighbor_right_edge() {
        let panels = panels(
            &[
                panel("p1", 0.0, 0.0, 400.0, 300.0),
                panel("p2", 450.0, 310.0, 200.0, 200.0),
            ],
            container(),
        );

        let result = snap(&panels, "p2", 395.0, 320.0, 5.0);

        assert_eq!(result.x, 400.0);
        assert!(result.lines.lines_v.contains(&400.0));
    }

    #[test]
    fn no_snap_outside_threshold() {
        let panels = panels(
            &[
                panel("p1", 0.0, 0.0, 400.0, 300.0),
                panel("p2", 450.0, 350.0, 100.0, 100.0),
            ],
            container(),
        );

        let result = snap(&panels, "p2", 420.0, 350.0, 5.0);

        assert_eq!(result.x, 420.0);
        assert_eq!(result.y, 350.0);
        assert!(result.lines.is_empty());
    }

    #[test]
    fn proposal_is_clamped_before_snapping() {
        let panels = panels(&[panel("p1", 0.0, 0.0, 200.0, 200.0)], container());

        let result = snap(&panels, "p1", 900.0, -50.0, 0.0);

        assert_eq!(result.x, 600.0);
        assert_eq!(result.y, 0.0);
    }

    #[test]
    fn snaps_to_container_edges() {
        let panels = panels(&[panel("p1", 100.0, 100.0, 200.0, 100.0)], container());

        let result = snap(&panels, "p1", 3.0, 497.0, 8.0);

        assert_eq!(result.x, 0.0);
        assert_eq!(result.y, 500.0);
        assert_eq!(result.lines.lines_v, vec![0.0, 200.0]);
        assert_eq!(result.lines.lines_h, vec![500.0, 600.0]);
    }

    #[test]
    fn right_edges_align() {
        // p2's right edge lands on p1's right edge: x = 400 - 100
        let panels = panels(
            &[
                panel("p1", 0.0, 0.0, 400.0, 300.0),
                panel("p2", 500.0, 400.0, 100.0, 100.0),
            ],
            container(),
        );

        let result = snap(&panels, "p2", 303.0, 400.0, 5.0);

        assert_eq!(result.x, 300.0);
        assert_eq!(result.lines.lines_v, vec![300.0, 400.0]);
    }

    #[test]
    fn hidden_panels_are_ignored() {
        let mut configs = vec![
            panel("p1", 0.0, 0.0, 400.0, 300.0),
            panel("p2", 500.0, 400.0, 100.0, 100.0),
        ];
        configs[0].visible = Some(false);
        let panels = panels(&configs, container());

        let result = snap(&panels, "p2", 397.0, 400.0, 5.0);

        assert_eq!(result.x, 397.0);
    }

    #[test]
    fn result_is_deterministic() {
        let panels = panels(
            &[
                panel("p1", 0.0, 0.0, 100.0, 100.0),
                panel("p2", 110.0, 0.0, 100.0, 100.0),
                panel("p3", 300.0, 300.0, 100.0, 100.0),
            ],
            container(),
        );
        let id = PanelId::from("p3");

        let first = compute_snap(&panels, container(), &id, 105.0, 200.0, 10.0).unwrap();
        let second = compute_snap(&panels, container(), &id, 105.0, 200.0, 10.0).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn unknown_panel_yields_none() {
        let panels = panels(&[panel("p1", 0.0, 0.0, 100.0, 100.0)], container());
        let ghost = PanelId::from("ghost");
        assert!(compute_snap(&panels, container(), &ghost, 0.0, 0.0, 5.0).is_none());
    }
}
