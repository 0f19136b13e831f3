// ABOUTME: Drag lifecycle for a single panel (start, move, stop).
// ABOUTME: Moves go through the snap engine and publish guide lines while active.

use crate::gesture::GestureKind;
use crate::snap::compute_snap;
use crate::{LayoutEngine, LayoutError, PanelId, PanelUpdate};

impl LayoutEngine {
    /// Raise the panel and take the gesture lock. Ignored for locked panels
    /// or while another drag/resize is in progress.
    pub fn drag_start(&mut self, id: &PanelId) -> bool {
        let result = self.try_drag_start(id);
        self.report("drag start", result)
    }

    /// Move the active panel toward `(x, y)`, snapping to nearby edges
    pub fn drag(&mut self, id: &PanelId, x: f32, y: f32) -> bool {
        let result = self.try_drag(id, x, y);
        self.report("drag", result)
    }

    /// Release the lock. The panel keeps its last snapped position.
    pub fn drag_stop(&mut self, id: &PanelId) -> bool {
        let result = self.try_drag_stop(id);
        self.report("drag stop", result)
    }

    fn try_drag_start(&mut self, id: &PanelId) -> Result<(), LayoutError> {
        let panel = self
            .registry
            .get(id)
            .ok_or_else(|| LayoutError::UnknownPanel(id.clone()))?;
        if !panel.draggable {
            return Err(LayoutError::NotDraggable(id.clone()));
        }

        self.gestures.acquire(id, GestureKind::Drag)?;
        self.z_order.bring_to_front(&mut self.registry, id);
        tracing::debug!("Drag started on {}", id);
        Ok(())
    }

    fn try_drag(&mut self, id: &PanelId, x: f32, y: f32) -> Result<(), LayoutError> {
        self.gestures.check(id, GestureKind::Drag)?;

        let snapped = compute_snap(
            self.registry.list(),
            self.container,
            id,
            x,
            y,
            self.settings.snap_threshold,
        )
        .ok_or_else(|| LayoutError::UnknownPanel(id.clone()))?;

        self.registry.update(id, PanelUpdate::position(snapped.x, snapped.y));
        self.snap_lines = snapped.lines;
        Ok(())
    }

    fn try_drag_stop(&mut self, id: &PanelId) -> Result<(), LayoutError> {
        self.gestures.release(id, GestureKind::Drag)?;
        self.snap_lines.clear();
        tracing::debug!("Drag stopped on {}", id);
        Ok(())
    }
}
