// ABOUTME: Scripted pointer and container events for replaying against the engine.
// ABOUTME: Parses a JSON event list and feeds each event to the layout engine in order.

use serde::{Deserialize, Deserializer};
use stage_core::{parse_size, Rect};
use stage_layout::{LayoutEngine, PanelId, ResizeDirection};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ScriptEvent {
    DragStart {
        id: PanelId,
    },
    Drag {
        id: PanelId,
        #[serde(deserialize_with = "lenient")]
        x: f32,
        #[serde(deserialize_with = "lenient")]
        y: f32,
    },
    DragStop {
        id: PanelId,
    },
    ResizeStart {
        id: PanelId,
    },
    Resize {
        id: PanelId,
        #[serde(flatten)]
        rect: ScriptRect,
    },
    #[serde(rename_all = "camelCase")]
    ResizeStop {
        id: PanelId,
        #[serde(flatten)]
        rect: ScriptRect,
        direction: ResizeDirection,
        #[serde(default)]
        override_held: bool,
    },
    BringToFront {
        id: PanelId,
    },
    ToggleVisibility {
        id: PanelId,
    },
    ContainerResize {
        #[serde(deserialize_with = "lenient")]
        width: f32,
        #[serde(deserialize_with = "lenient")]
        height: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScriptRect {
    #[serde(deserialize_with = "lenient")]
    pub x: f32,
    #[serde(deserialize_with = "lenient")]
    pub y: f32,
    #[serde(deserialize_with = "lenient")]
    pub width: f32,
    #[serde(deserialize_with = "lenient")]
    pub height: f32,
}

impl From<ScriptRect> for Rect {
    fn from(r: ScriptRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

/// Accept numbers or numeric strings; anything malformed becomes 0
fn lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(n) if n.is_finite() => n as f32,
        Raw::Number(_) | Raw::Other(_) => 0.0,
        Raw::Text(text) => parse_size(&text),
    })
}

pub fn parse(json: &str) -> Result<Vec<ScriptEvent>, serde_json::Error> {
    serde_json::from_str(json)
}

impl ScriptEvent {
    /// Feed this event to the engine. Returns false if the engine ignored it.
    pub fn apply(&self, engine: &mut LayoutEngine) -> bool {
        match self {
            ScriptEvent::DragStart { id } => engine.drag_start(id),
            ScriptEvent::Drag { id, x, y } => engine.drag(id, *x, *y),
            ScriptEvent::DragStop { id } => engine.drag_stop(id),
            ScriptEvent::ResizeStart { id } => engine.resize_start(id),
            ScriptEvent::Resize { id, rect } => engine.resize(id, (*rect).into()),
            ScriptEvent::ResizeStop {
                id,
                rect,
                direction,
                override_held,
            } => engine.resize_stop(id, (*rect).into(), *direction, *override_held),
            ScriptEvent::BringToFront { id } => engine.bring_to_front(id),
            ScriptEvent::ToggleVisibility { id } => engine.toggle_visibility(id),
            ScriptEvent::ContainerResize { width, height } => {
                engine.resize_container(*width, *height);
                true
            }
        }
    }
}
