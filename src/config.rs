use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// How the child cursor advances while placing siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChildSpacing {
    /// Fixed `node_width + horizontal_spacing` per child. Subtrees wider than
    /// one slot can overlap their neighbours.
    #[default]
    Slot,
    /// Each child takes its measured subtree width plus `horizontal_spacing`.
    Measured,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub node_width: f32,
    /// Only used by the presentation geometry (bounds, connectors).
    pub node_height: f32,
    pub horizontal_spacing: f32,
    pub vertical_spacing: f32,
    pub child_spacing: ChildSpacing,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 100.0,
            node_height: 80.0,
            horizontal_spacing: 50.0,
            vertical_spacing: 100.0,
            child_spacing: ChildSpacing::Slot,
        }
    }
}

impl LayoutConfig {
    pub fn slot_width(&self) -> f32 {
        self.node_width + self.horizontal_spacing
    }

    fn warn_non_positive(&self) {
        let sizes = [
            ("nodeWidth", self.node_width),
            ("nodeHeight", self.node_height),
            ("horizontalSpacing", self.horizontal_spacing),
            ("verticalSpacing", self.vertical_spacing),
        ];
        for (name, value) in sizes {
            if !(value > 0.0) {
                warn!(option = name, value, "layout size should be positive");
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssemblyConfig {
    /// Reject duplicate ids, unknown parents and cycles instead of repairing them.
    pub strict: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub layout: LayoutConfig,
    pub assembly: AssemblyConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    node_width: Option<f32>,
    node_height: Option<f32>,
    horizontal_spacing: Option<f32>,
    vertical_spacing: Option<f32>,
    child_spacing: Option<ChildSpacing>,
    strict: Option<bool>,
}

impl ConfigFile {
    fn apply(self, config: &mut Config) {
        if let Some(v) = self.node_width {
            config.layout.node_width = v;
        }
        if let Some(v) = self.node_height {
            config.layout.node_height = v;
        }
        if let Some(v) = self.horizontal_spacing {
            config.layout.horizontal_spacing = v;
        }
        if let Some(v) = self.vertical_spacing {
            config.layout.vertical_spacing = v;
        }
        if let Some(v) = self.child_spacing {
            config.layout.child_spacing = v;
        }
        if let Some(v) = self.strict {
            config.assembly.strict = v;
        }
    }
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = match serde_json::from_str(contents) {
        Ok(parsed) => parsed,
        Err(_) => json5::from_str(contents)?,
    };
    parsed.apply(&mut config);
    config.layout.warn_non_positive();
    Ok(config)
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)?;
    let config = parse_config(&contents)?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
