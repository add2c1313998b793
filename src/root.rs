//! Project root validation.

use std::path::Path;

use crate::config::CONFIG_FILE_NAME;
use crate::error::OptionsError;

/// Decides whether a canonical path is a legitimate project root.
pub trait RootValidator {
    fn validate(&self, root: &Path) -> Result<(), OptionsError>;
}

/// A root is a directory holding a `.hhconfig` file.
#[derive(Debug, Clone, Copy, Default)]
pub struct HhconfigRoot;

impl RootValidator for HhconfigRoot {
    fn validate(&self, root: &Path) -> Result<(), OptionsError> {
        if !root.is_dir() {
            return Err(OptionsError::Validation {
                root: root.to_path_buf(),
                reason: "not a directory".to_string(),
            });
        }
        if !root.join(CONFIG_FILE_NAME).is_file() {
            return Err(OptionsError::Validation {
                root: root.to_path_buf(),
                reason: format!("missing {} file", CONFIG_FILE_NAME),
            });
        }
        Ok(())
    }
}
