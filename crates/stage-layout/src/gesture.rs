// ABOUTME: Exclusive lock for pointer gestures.
// ABOUTME: Only one drag or resize may be active across all panels at a time.

use serde::Serialize;

use crate::{LayoutError, PanelId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GestureKind {
    Drag,
    Resize,
}

#[derive(Debug, Clone, PartialEq)]
struct ActiveGesture {
    panel: PanelId,
    kind: GestureKind,
}

#[derive(Debug, Default)]
pub struct GestureLock {
    active: Option<ActiveGesture>,
}

impl GestureLock {
    pub fn active(&self) -> Option<(&PanelId, GestureKind)> {
        self.active.as_ref().map(|g| (&g.panel, g.kind))
    }

    pub fn is_held(&self) -> bool {
        self.active.is_some()
    }

    /// Fails if any gesture is already in progress, including on the same panel
    pub fn acquire(&mut self, panel: &PanelId, kind: GestureKind) -> Result<(), LayoutError> {
        if let Some(current) = &self.active {
            return Err(LayoutError::Busy {
                active: current.panel.clone(),
                requested: panel.clone(),
                kind,
            });
        }
        self.active = Some(ActiveGesture {
            panel: panel.clone(),
            kind,
        });
        Ok(())
    }

    /// Succeeds when `panel` holds the lock for a gesture of `kind`
    pub fn check(&self, panel: &PanelId, kind: GestureKind) -> Result<(), LayoutError> {
        match &self.active {
            Some(current) if &current.panel == panel && current.kind == kind => Ok(()),
            _ => Err(LayoutError::NotActive {
                panel: panel.clone(),
                kind,
            }),
        }
    }

    pub fn release(&mut self, panel: &PanelId, kind: GestureKind) -> Result<(), LayoutError> {
        self.check(panel, kind)?;
        self.active = None;
        Ok(())
    }
}
