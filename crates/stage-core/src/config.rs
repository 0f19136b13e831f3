// ABOUTME: Layout configuration handling.
// ABOUTME: Loads and saves the static panel configuration from TOML files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{ContainerSize, Dimension};

/// Static description of one panel, resolved against the container at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub id: String,
    /// Opaque tag telling the rendering layer what the panel hosts
    pub component_key: String,
    pub x: Dimension,
    pub y: Dimension,
    pub width: Dimension,
    pub height: Dimension,
    #[serde(default)]
    pub min_width: Option<f32>,
    #[serde(default)]
    pub min_height: Option<f32>,
    #[serde(default)]
    pub visible: Option<bool>,
    #[serde(default)]
    pub draggable: Option<bool>,
    #[serde(default)]
    pub resizable: Option<bool>,
}

impl PanelConfig {
    pub fn new(
        id: impl Into<String>,
        component_key: impl Into<String>,
        x: Dimension,
        y: Dimension,
        width: Dimension,
        height: Dimension,
    ) -> Self {
        Self {
            id: id.into(),
            component_key: component_key.into(),
            x,
            y,
            width,
            height,
            min_width: None,
            min_height: None,
            visible: None,
            draggable: None,
            resizable: None,
        }
    }

    pub fn with_min_size(mut self, min_width: f32, min_height: f32) -> Self {
        self.min_width = Some(min_width);
        self.min_height = Some(min_height);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = Some(false);
        self
    }

    pub fn locked(mut self) -> Self {
        self.draggable = Some(false);
        self.resizable = Some(false);
        self
    }
}

/// Tuning knobs for interactive behavior
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Max distance in pixels at which a dragged edge is pulled into alignment
    pub snap_threshold: f32,
    /// Overlap area below which two panels are considered disjoint
    pub overlap_epsilon: f32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            snap_threshold: 8.0,
            overlap_epsilon: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Interaction settings
    pub settings: EngineSettings,

    /// Initial workspace size
    pub container: ContainerSize,

    /// Panels in configuration order
    pub panels: Vec<PanelConfig>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            settings: EngineSettings::default(),
            container: ContainerSize::default(),
            panels: vec![
                PanelConfig::new(
                    "library",
                    "library",
                    Dimension::Fixed(0.0),
                    Dimension::Fixed(0.0),
                    Dimension::Percent(20.0),
                    Dimension::Percent(100.0),
                )
                .with_min_size(160.0, 200.0),
                PanelConfig::new(
                    "slide-editor",
                    "slide_editor",
                    Dimension::Percent(20.0),
                    Dimension::Fixed(0.0),
                    Dimension::Percent(55.0),
                    Dimension::Percent(100.0),
                )
                .with_min_size(320.0, 240.0),
                PanelConfig::new(
                    "cue-list",
                    "cue_list",
                    Dimension::Percent(75.0),
                    Dimension::Fixed(0.0),
                    Dimension::Percent(25.0),
                    Dimension::Percent(100.0),
                )
                .with_min_size(200.0, 200.0),
            ],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read layout file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse layout: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize layout: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl LayoutConfig {
    /// Get the default layout file path (~/.config/stage-layout/layout.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stage-layout").join("layout.toml"))
    }

    /// Load layout from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load layout from default path, or return the built-in layout if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save layout to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
