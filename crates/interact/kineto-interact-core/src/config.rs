//! Author-facing configuration.

use serde::{Deserialize, Serialize};

use crate::actions::{validate_actions, Action};
use crate::error::InteractError;
use crate::mode::Mode;

/// Declarative setup: an ordered action list and the mode that drives it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default = "default_mode")]
    pub mode: Mode,
}

fn default_mode() -> Mode {
    Mode::Scroll
}

impl Default for Config {
    fn default() -> Self {
        Self {
            actions: Vec::new(),
            mode: default_mode(),
        }
    }
}

impl Config {
    /// First validation finding, if any. Engine construction does not call
    /// this; strict hosts and tests do.
    pub fn validate(&self) -> Result<(), InteractError> {
        match self.findings().into_iter().next() {
            Some(finding) => Err(finding),
            None => Ok(()),
        }
    }

    /// Every validation finding: malformed ranges, missing frame windows,
    /// kinds the configured mode cannot drive.
    pub fn findings(&self) -> Vec<InteractError> {
        let mut findings = validate_actions(&self.actions);
        for (index, action) in self.actions.iter().enumerate() {
            if !self.mode.supports(action.kind) {
                findings.push(InteractError::UnsupportedKind {
                    index,
                    kind: action.kind,
                    mode: self.mode,
                });
            }
        }
        findings
    }
}

/// Parse a configuration from its JSON wire form.
pub fn parse_config_json(text: &str) -> Result<Config, InteractError> {
    serde_json::from_str(text).map_err(InteractError::from)
}
