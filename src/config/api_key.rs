// ABOUTME: API key values with environment interpolation support.
// ABOUTME: Handles literal keys and references to environment variables.

use crate::error::{Error, Result};
use serde::Deserialize;

/// An API key in portside.yml: either written inline or pulled from the
/// environment so the file can be committed without the secret.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ApiKey {
    Literal(String),
    FromEnv {
        #[serde(rename = "env")]
        var: String,
        #[serde(default)]
        default: Option<String>,
    },
}

impl ApiKey {
    pub fn resolve(&self) -> Result<String> {
        match self {
            ApiKey::Literal(s) => Ok(s.clone()),
            ApiKey::FromEnv { var, default } => match std::env::var(var) {
                Ok(val) => Ok(val),
                Err(_) => default
                    .clone()
                    .ok_or_else(|| Error::MissingEnvVar(var.clone())),
            },
        }
    }
}
