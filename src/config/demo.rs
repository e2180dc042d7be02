use crate::QuickshiftParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DemoConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: ParamsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    pub sigma: f64,
    pub tau: f64,
    /// Channel multiplier applied before distance computations. The demo
    /// feeds raw RGB floats in [0, 255]; rescaling color against space is the
    /// caller's knob, not the core's.
    pub ratio: f64,
    pub return_tree: bool,
    pub seed: Option<u64>,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        let defaults = QuickshiftParams::default();
        Self {
            sigma: defaults.sigma,
            tau: defaults.tau,
            ratio: defaults.ratio,
            return_tree: defaults.return_tree,
            seed: defaults.seed,
        }
    }
}

impl ParamsConfig {
    pub fn to_params(&self) -> QuickshiftParams {
        QuickshiftParams {
            sigma: self.sigma,
            tau: self.tau,
            ratio: self.ratio,
            return_tree: self.return_tree,
            seed: self.seed,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// When set, the full segmentation (labels, diagnostics, optional tree)
    /// is written here as pretty JSON.
    pub report_json: Option<PathBuf>,
    /// Suppress the text summary on stdout.
    pub quiet: bool,
}

pub fn load_config(path: &Path) -> Result<DemoConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
