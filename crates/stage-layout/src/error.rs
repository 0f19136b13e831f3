// ABOUTME: Error type for rejected layout operations.
// ABOUTME: None of these are fatal; the engine logs them and keeps its prior state.

use crate::gesture::GestureKind;
use crate::PanelId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("Unknown panel: {0}")]
    UnknownPanel(PanelId),

    #[error("Panel {0} is not draggable")]
    NotDraggable(PanelId),

    #[error("Panel {0} is not resizable")]
    NotResizable(PanelId),

    #[error("Cannot start {kind:?} on {requested}: {active} is already active")]
    Busy {
        active: PanelId,
        requested: PanelId,
        kind: GestureKind,
    },

    #[error("No {kind:?} in progress for panel {panel}")]
    NotActive { panel: PanelId, kind: GestureKind },

    #[error("Duplicate panel id in configuration: {0}")]
    DuplicatePanel(PanelId),
}
