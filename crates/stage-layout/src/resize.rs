// ABOUTME: Resize lifecycle and collision resolution against neighboring panels.
// ABOUTME: Neighbors in the way of the growing edge are shrunk, down to their minimums.

use serde::{Deserialize, Serialize};
use stage_core::{clamp, ContainerSize, Rect};
use std::str::FromStr;

use crate::gesture::GestureKind;
use crate::{LayoutEngine, LayoutError, Panel, PanelId, PanelUpdate};

/// Edge or corner handle being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeDirection {
    Top,
    Right,
    Bottom,
    Left,
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

/// Which end of an axis moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Start,
    End,
}

impl ResizeDirection {
    fn horizontal(self) -> Option<Edge> {
        match self {
            Self::Left | Self::TopLeft | Self::BottomLeft => Some(Edge::Start),
            Self::Right | Self::TopRight | Self::BottomRight => Some(Edge::End),
            Self::Top | Self::Bottom => None,
        }
    }

    fn vertical(self) -> Option<Edge> {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Some(Edge::Start),
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Some(Edge::End),
            Self::Left | Self::Right => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown resize direction: {0}")]
pub struct ParseDirectionError(String);

impl FromStr for ResizeDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "topRight" => Ok(Self::TopRight),
            "bottomRight" => Ok(Self::BottomRight),
            "bottomLeft" => Ok(Self::BottomLeft),
            "topLeft" => Ok(Self::TopLeft),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// One axis of a rectangle
#[derive(Debug, Clone, Copy)]
struct Span {
    start: f32,
    len: f32,
}

impl Span {
    fn end(&self) -> f32 {
        self.start + self.len
    }
}

fn horizontal(rect: &Rect) -> Span {
    Span {
        start: rect.x,
        len: rect.width,
    }
}

fn vertical(rect: &Rect) -> Span {
    Span {
        start: rect.y,
        len: rect.height,
    }
}

/// Clamp one axis of a resize into `[0, extent]`.
///
/// The moving edge is cut at the container and the opposite edge stays where it
/// was proposed. It only moves when the minimum would otherwise be violated.
fn fit_span(span: Span, min: f32, extent: f32, moving: Option<Edge>) -> Span {
    match moving {
        Some(Edge::Start) => {
            let end = span.end().min(extent);
            let start = span.start.max(0.0).min(end - min).max(0.0);
            Span {
                start,
                len: (end - start).max(min),
            }
        }
        Some(Edge::End) => {
            let start = span.start.max(0.0);
            let len = span.end().min(extent).max(start + min) - start;
            Span {
                start: start.min(extent - len).max(0.0),
                len,
            }
        }
        None => {
            let len = clamp(span.len, min, extent.max(min));
            Span {
                start: clamp(span.start, 0.0, extent - len),
                len,
            }
        }
    }
}

/// Fit a resized rectangle to the panel's minimums and the container,
/// anchoring the edges the handle does not move
fn fit_to_handle(
    panel: &Panel,
    rect: Rect,
    direction: ResizeDirection,
    container: ContainerSize,
) -> Rect {
    let rect = rect.sanitized();
    let across = fit_span(
        horizontal(&rect),
        panel.min_width,
        container.width,
        direction.horizontal(),
    );
    let down = fit_span(
        vertical(&rect),
        panel.min_height,
        container.height,
        direction.vertical(),
    );
    Rect::new(across.start, down.start, across.len, down.len)
}

/// Overlap along one axis that the moving `edge` of `active` is responsible for
fn attributable_overlap(edge: Edge, active: Span, neighbor: Span) -> Option<f32> {
    let hit = match edge {
        // The neighbor's leading edge sits inside the grown span
        Edge::End => neighbor.start > active.start && neighbor.start < active.end(),
        // The neighbor's trailing edge sits inside the grown span
        Edge::Start => {
            neighbor.start < active.start
                && neighbor.end() > active.start
                && neighbor.end() <= active.end()
        }
    };
    if !hit {
        return None;
    }
    Some(match edge {
        Edge::End => active.end() - neighbor.start,
        Edge::Start => neighbor.end() - active.start,
    })
}

/// Shrink `neighbor` away from `active` by `overlap`. Whatever the neighbor's
/// minimum does not allow is taken back from the active panel instead.
fn push(
    edge: Edge,
    overlap: f32,
    active: &mut Span,
    active_min: f32,
    neighbor: &mut Span,
    neighbor_min: f32,
) {
    let room = (neighbor.len - neighbor_min).max(0.0);
    let shrink = overlap.min(room);
    let deficit = overlap - shrink;

    match edge {
        Edge::End => {
            let neighbor_end = neighbor.end();
            neighbor.len -= shrink;
            neighbor.start = neighbor_end - neighbor.len;
            if deficit > 0.0 {
                active.len = (active.len - deficit).max(active_min);
            }
        }
        Edge::Start => {
            neighbor.len -= shrink;
            if deficit > 0.0 {
                let active_end = active.end();
                active.len = (active.len - deficit).max(active_min);
                active.start = active_end - active.len;
            }
        }
    }
}

/// Resolve overlaps introduced by resizing `active_id` to `proposed`.
///
/// Each visible neighbor overlapping the new rectangle is pushed once, along a
/// single axis: the one whose moving edge caused the overlap. For corner handles
/// both axes may qualify and the one with the smaller overlap is used, so a
/// neighbor pinned at its minimum on that axis can stay partly overlapped.
/// Neighbors of neighbors are not revisited.
///
/// Returns the final rectangles, active panel first, for every panel that changed.
pub fn resolve_collisions(
    panels: &[Panel],
    container: ContainerSize,
    active_id: &PanelId,
    proposed: Rect,
    direction: ResizeDirection,
    epsilon: f32,
) -> Vec<(PanelId, Rect)> {
    let Some(active) = panels.iter().find(|p| &p.id == active_id) else {
        return Vec::new();
    };

    let mut rect = fit_to_handle(active, proposed, direction, container);
    let mut neighbors = Vec::new();

    for other in panels.iter().filter(|p| p.visible && &p.id != active_id) {
        if !rect.overlaps(&other.rect, epsilon) {
            continue;
        }

        let across = direction.horizontal().and_then(|edge| {
            attributable_overlap(edge, horizontal(&rect), horizontal(&other.rect))
                .map(|o| (edge, o))
        });
        let down = direction.vertical().and_then(|edge| {
            attributable_overlap(edge, vertical(&rect), vertical(&other.rect))
                .map(|o| (edge, o))
        });

        let mut moved = other.rect;
        match (across, down) {
            (Some((edge, overlap)), vert) if vert.map_or(true, |(_, v)| overlap <= v) => {
                let mut a = horizontal(&rect);
                let mut n = horizontal(&moved);
                push(edge, overlap, &mut a, active.min_width, &mut n, other.min_width);
                rect.x = a.start;
                rect.width = a.len;
                moved.x = n.start;
                moved.width = n.len;
            }
            (_, Some((edge, overlap))) => {
                let mut a = vertical(&rect);
                let mut n = vertical(&moved);
                push(edge, overlap, &mut a, active.min_height, &mut n, other.min_height);
                rect.y = a.start;
                rect.height = a.len;
                moved.y = n.start;
                moved.height = n.len;
            }
            _ => continue,
        }

        neighbors.push((other.id.clone(), other.fit(moved, container)));
    }

    let mut result = Vec::with_capacity(neighbors.len() + 1);
    result.push((active_id.clone(), fit_to_handle(active, rect, direction, container)));
    result.extend(neighbors);
    result
}

impl LayoutEngine {
    /// Raise the panel and take the gesture lock for a resize
    pub fn resize_start(&mut self, id: &PanelId) -> bool {
        let result = self.try_resize_start(id);
        self.report("resize start", result)
    }

    /// Preview geometry mid-gesture. Clamped, but neighbors are left alone.
    pub fn resize(&mut self, id: &PanelId, rect: Rect) -> bool {
        let result = self.try_resize(id, rect);
        self.report("resize", result)
    }

    /// Commit the final geometry and release the lock.
    ///
    /// The edges the handle does not move stay anchored while the moving edges
    /// are clamped to the container and the panel's minimums. With
    /// `override_held` nothing else happens, so the panel may overlap others.
    /// Otherwise neighbors in the way are shrunk, see [`resolve_collisions`].
    pub fn resize_stop(
        &mut self,
        id: &PanelId,
        rect: Rect,
        direction: ResizeDirection,
        override_held: bool,
    ) -> bool {
        let result = self.try_resize_stop(id, rect, direction, override_held);
        self.report("resize stop", result)
    }

    fn try_resize_start(&mut self, id: &PanelId) -> Result<(), LayoutError> {
        let panel = self
            .registry
            .get(id)
            .ok_or_else(|| LayoutError::UnknownPanel(id.clone()))?;
        if !panel.resizable {
            return Err(LayoutError::NotResizable(id.clone()));
        }

        self.gestures.acquire(id, GestureKind::Resize)?;
        self.z_order.bring_to_front(&mut self.registry, id);
        tracing::debug!("Resize started on {}", id);
        Ok(())
    }

    fn try_resize(&mut self, id: &PanelId, rect: Rect) -> Result<(), LayoutError> {
        self.gestures.check(id, GestureKind::Resize)?;
        let fitted = self
            .registry
            .get(id)
            .map(|p| p.fit(rect, self.container))
            .ok_or_else(|| LayoutError::UnknownPanel(id.clone()))?;
        self.registry.update(id, PanelUpdate::rect(fitted));
        Ok(())
    }

    fn try_resize_stop(
        &mut self,
        id: &PanelId,
        rect: Rect,
        direction: ResizeDirection,
        override_held: bool,
    ) -> Result<(), LayoutError> {
        self.gestures.release(id, GestureKind::Resize)?;

        let panel = self
            .registry
            .get(id)
            .ok_or_else(|| LayoutError::UnknownPanel(id.clone()))?;

        let updates = if override_held {
            vec![(id.clone(), fit_to_handle(panel, rect, direction, self.container))]
        } else {
            resolve_collisions(
                self.registry.list(),
                self.container,
                id,
                rect,
                direction,
                self.settings.overlap_epsilon,
            )
        };

        tracing::debug!(
            "Resize stopped on {} ({:?}, override={}), {} neighbor(s) adjusted",
            id,
            direction,
            override_held,
            updates.len().saturating_sub(1)
        );

        for (panel_id, rect) in updates {
            self.registry.update(&panel_id, PanelUpdate::rect(rect));
        }
        Ok(())
    }
}
