//! Environment configuration.
//!
//! Values come from `SCREENDIFF_*` environment variables, optionally seeded
//! from a `.env` file in the working directory:
//!
//! | variable | default |
//! |---|---|
//! | `SCREENDIFF_CURRENT_MAIN_APP_ID` | required |
//! | `SCREENDIFF_CURRENT_SUB_APP_ID` | required |
//! | `SCREENDIFF_PREVIEW_MAIN_APP_ID` | required |
//! | `SCREENDIFF_PREVIEW_SUB_APP_ID` | required |
//! | `SCREENDIFF_IGNORE_SCRIPT_CONTENTS` | `true` |
//! | `SCREENDIFF_ARTIFACT_ROOT` | `out` |
//! | `SCREENDIFF_LOG_PROFILE` | `development` |

use crate::errors::{Result, ScreenDiffError};
use crate::logging_facility::Profile;
use crate::normalize::{NormalizationContext, Side};
use ::config::{Config, Environment};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "SCREENDIFF";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnvironmentConfig {
    pub current_main_app_id: u64,
    pub current_sub_app_id: u64,
    pub preview_main_app_id: u64,
    pub preview_sub_app_id: u64,
    pub ignore_script_contents: bool,
    pub artifact_root: PathBuf,
    pub log_profile: Profile,
}

impl EnvironmentConfig {
    /// Load from the process environment after reading `.env` if present.
    ///
    /// # Errors
    ///
    /// Returns `ERR_INVALID_CONFIG` when a required key is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::load(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load from an explicit variable map instead of the process environment.
    ///
    /// Keys are full variable names, e.g. `SCREENDIFF_CURRENT_MAIN_APP_ID`.
    ///
    /// # Errors
    ///
    /// Same as [`EnvironmentConfig::from_env`].
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        Self::load(
            Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(vars)),
        )
    }

    fn load(source: Environment) -> Result<Self> {
        let settings: EnvironmentConfig = Config::builder()
            .set_default("ignore_script_contents", true)?
            .set_default("artifact_root", "out")?
            .set_default("log_profile", "development")?
            .add_source(source)
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> std::result::Result<(), ScreenDiffError> {
        let ids = [
            ("current_main_app_id", self.current_main_app_id),
            ("current_sub_app_id", self.current_sub_app_id),
            ("preview_main_app_id", self.preview_main_app_id),
            ("preview_sub_app_id", self.preview_sub_app_id),
        ];
        if let Some((key, _)) = ids.iter().find(|(_, id)| *id == 0) {
            return Err(ScreenDiffError::InvalidConfig {
                reason: format!("{key} must be a positive app id"),
            });
        }
        Ok(())
    }

    /// Normalization context for trees scraped from `side`.
    pub fn context(&self, side: Side) -> NormalizationContext {
        let (main, sub) = match side {
            Side::Current => (self.current_main_app_id, self.current_sub_app_id),
            Side::Preview => (self.preview_main_app_id, self.preview_sub_app_id),
        };
        NormalizationContext::new(side, main, sub, self.ignore_script_contents)
    }
}
