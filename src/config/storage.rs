use crate::core::{AppError, Result};
use std::env;
use std::path::PathBuf;

/// Location of the JSON data file holding all customer records
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_path: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self> {
        let data_path = env::var("DATA_PATH")
            .unwrap_or_else(|_| "data/customers.json".to_string())
            .into();

        Ok(Self { data_path })
    }

    pub fn validate(&self) -> Result<()> {
        if self.data_path.as_os_str().is_empty() {
            return Err(AppError::Configuration(
                "DATA_PATH must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
