use anyhow::Context;
use minado_core::{DEFAULT_LONG_PRESS, Difficulty, GestureClassifier};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::cli::Args;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    pub long_press_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            seed: None,
            long_press_ms: DEFAULT_LONG_PRESS.as_millis() as u64,
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read settings from {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid settings in {}", path.display()))
    }

    /// File values first, then whatever was given on the command line.
    pub fn resolve(args: &Args) -> anyhow::Result<Self> {
        let mut settings = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(difficulty) = args.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(seed) = args.seed {
            settings.seed = Some(seed);
        }
        if let Some(long_press_ms) = args.long_press_ms {
            settings.long_press_ms = long_press_ms;
        }
        Ok(settings)
    }

    pub fn gestures(&self) -> GestureClassifier {
        GestureClassifier::new(Duration::from_millis(self.long_press_ms))
    }
}
