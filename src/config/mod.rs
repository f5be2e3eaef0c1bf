pub mod types;


pub use types::*;

use crate::environment::BuildEnvironment;
use crate::error::ElbError;
use std::path::Path;

impl RegistrarConfig {
    /// Load configuration from a file (if it exists) and apply
    /// environment variable overrides. When the file does not exist,
    /// built-in defaults are used so credentials can come entirely from
    /// the environment.
    pub fn load(path: &Path, environment: &dyn BuildEnvironment) -> Result<Self, ElbError> {
        let mut config: RegistrarConfig = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| ElbError::Config(format!("{}: {}", path.display(), e)))?;
            match path.extension().and_then(|e| e.to_str()) {
                Some("toml") => toml::from_str(&content)
                    .map_err(|e| ElbError::Config(format!("{}: {}", path.display(), e)))?,
                Some("json") => serde_json::from_str(&content)
                    .map_err(|e| ElbError::Config(format!("{}: {}", path.display(), e)))?,
                Some(ext) => {
                    return Err(ElbError::Config(format!(
                        "unsupported config format: .{ext}, use .toml or .json"
                    )))
                }
                None => {
                    return Err(ElbError::Config(
                        "config file has no extension, use .toml or .json".to_string(),
                    ))
                }
            }
        } else {
            tracing::info!("config file not found at {}, using defaults", path.display());
            RegistrarConfig::default()
        };

        config.apply_env_overrides(environment);

        tracing::info!(
            region = %config.aws.region,
            "loaded load balancing settings"
        );
        Ok(config)
    }

    /// Apply the standard AWS environment variables on top of whatever
    /// the file provided. Environment wins, so CI systems can inject
    /// credentials without touching checked-in config.
    fn apply_env_overrides(&mut self, environment: &dyn BuildEnvironment) {
        if let Some(v) = environment.var("AWS_ACCESS_KEY_ID") {
            self.aws.access_key = v;
        }
        if let Some(v) = environment.var("AWS_SECRET_ACCESS_KEY") {
            self.aws.secret_key = v;
        }
        if let Some(v) = environment.var("AWS_SESSION_TOKEN") {
            self.aws.session_token = Some(v);
        }
        if let Some(v) = environment
            .var("AWS_REGION")
            .or_else(|| environment.var("AWS_DEFAULT_REGION"))
        {
            self.aws.region = v;
        }
    }
}
