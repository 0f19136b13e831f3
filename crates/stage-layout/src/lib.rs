// ABOUTME: Panel layout engine for the presentation editor workspace.
// ABOUTME: Tracks draggable, resizable panels with snapping, collision resolution, and stacking.

mod drag;
mod engine;
mod error;
mod gesture;
mod panel;
mod reflow;
mod registry;
mod resize;
mod snap;
mod z_order;

#[cfg(test)]
mod test_support;

pub use engine::LayoutEngine;
pub use error::LayoutError;
pub use gesture::GestureKind;
pub use panel::{Panel, PanelId, PanelPlacement, PanelUpdate};
pub use registry::PanelRegistry;
pub use resize::{resolve_collisions, ParseDirectionError, ResizeDirection};
pub use snap::{compute_snap, SnapLines, SnapResult};
pub use z_order::ZOrderManager;
