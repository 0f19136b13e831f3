// ABOUTME: Shared types and configuration for the stage layout engine.
// ABOUTME: Defines geometry helpers, configured dimensions, and layout file handling.

pub mod config;
pub mod dimension;
pub mod geometry;

pub use config::{ConfigError, EngineSettings, LayoutConfig, PanelConfig};
pub use dimension::Dimension;
pub use geometry::{clamp, clamp_to_bounds, parse_size, sanitize, ContainerSize, Rect};
