use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::IdStrategy;
use crate::layout::ViewportRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Seed new canvases with `Node 1 -> Node 2`.
    pub starter_graph: bool,
    pub id_strategy: IdStrategy,
    pub spawn: SpawnArea,
    /// Fixed seed for spawn positions. Random when absent.
    pub seed: Option<u64>,
    pub fit_view: FitViewConfig,
    pub layout: LayoutConfig,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            starter_graph: true,
            id_strategy: IdStrategy::Sequential,
            spawn: SpawnArea::default(),
            seed: None,
            fit_view: FitViewConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpawnArea {
    pub width: f64,
    pub height: f64,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FitViewConfig {
    pub padding: f64,
    pub duration_ms: u64,
}

impl Default for FitViewConfig {
    fn default() -> Self {
        Self {
            padding: 0.2,
            duration_ms: 300,
        }
    }
}

impl FitViewConfig {
    pub fn request(&self) -> ViewportRequest {
        ViewportRequest::FitView {
            padding: self.padding,
            duration_ms: self.duration_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub node_width: f64,
    pub node_height: f64,
    pub nodesep: f64,
    pub ranksep: f64,
    pub order_iterations: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: 150.0,
            node_height: 50.0,
            nodesep: 50.0,
            ranksep: 50.0,
            order_iterations: 4,
        }
    }
}

impl CanvasConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a config file; `.yaml`/`.yml` files are parsed as YAML, everything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml {
            Self::from_yaml_str(&text)
        } else {
            Self::from_json_str(&text)
        }
    }

    pub fn validate(&self) -> Result<()> {
        fn non_negative(field: &'static str, value: f64) -> Result<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidConfig {
                    field,
                    message: format!("expected a finite non-negative number, got {value}"),
                })
            }
        }

        non_negative("spawn.width", self.spawn.width)?;
        non_negative("spawn.height", self.spawn.height)?;
        non_negative("fit_view.padding", self.fit_view.padding)?;
        non_negative("layout.node_width", self.layout.node_width)?;
        non_negative("layout.node_height", self.layout.node_height)?;
        non_negative("layout.nodesep", self.layout.nodesep)?;
        non_negative("layout.ranksep", self.layout.ranksep)?;
        Ok(())
    }
}
