use crate::error::ElbError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Top-level settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrarConfig {
    #[serde(default)]
    pub aws: LoadBalancingSettings,
}

/// Credentials and target region for requests against the load
/// balancing service. Built once by the caller and reused across
/// calls; operations never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadBalancingSettings {
    #[serde(default)]
    pub access_key: String,

    #[serde(default)]
    pub secret_key: String,

    /// Third credential component for temporary STS credentials.
    #[serde(default)]
    pub session_token: Option<String>,

    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default)]
    pub timeout: TimeoutSettings,
}

impl Default for LoadBalancingSettings {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            secret_key: String::new(),
            session_token: None,
            region: default_region(),
            timeout: TimeoutSettings::default(),
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl LoadBalancingSettings {
    /// Check the fields a request cannot be signed without. Runs before
    /// any client is built; names the first offending field.
    pub fn validate(&self) -> Result<(), ElbError> {
        if self.access_key.is_empty() {
            return Err(ElbError::InvalidArgument("settings.access_key"));
        }
        if self.secret_key.is_empty() {
            return Err(ElbError::InvalidArgument("settings.secret_key"));
        }
        if self.region.is_empty() {
            return Err(ElbError::InvalidArgument("settings.region"));
        }
        Ok(())
    }
}

/// Timeouts handed to the underlying SDK client, in seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutSettings {
    #[serde(default = "default_connect_secs")]
    pub connect: f64,

    /// Covers the whole call including retries the SDK may perform.
    #[serde(default = "default_operation_secs")]
    pub operation: f64,
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            connect: default_connect_secs(),
            operation: default_operation_secs(),
        }
    }
}

fn default_connect_secs() -> f64 {
    5.0
}

fn default_operation_secs() -> f64 {
    30.0
}

impl TimeoutSettings {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.connect)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs_f64(self.operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = LoadBalancingSettings::default();
        assert_eq!(settings.access_key, "");
        assert_eq!(settings.secret_key, "");
        assert!(settings.session_token.is_none());
        assert_eq!(settings.region, "us-east-1");
        assert_eq!(settings.timeout.connect, 5.0);
        assert_eq!(settings.timeout.operation, 30.0);
    }

    #[test]
    fn test_settings_minimal_toml() {
        let toml_str = r#"
access_key = "AK"
secret_key = "SK"
"#;
        let settings: LoadBalancingSettings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.access_key, "AK");
        assert_eq!(settings.secret_key, "SK");
        assert!(settings.session_token.is_none());
        assert_eq!(settings.region, "us-east-1");
        assert_eq!(settings.timeout.connect, 5.0);
    }

    #[test]
    fn test_settings_full_json() {
        let json = r#"{
            "access_key": "AK",
            "secret_key": "SK",
            "session_token": "TOKEN",
            "region": "eu-west-1",
            "timeout": {"connect": 2.5, "operation": 60.0}
        }"#;
        let settings: LoadBalancingSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.session_token, Some("TOKEN".to_string()));
        assert_eq!(settings.region, "eu-west-1");
        assert_eq!(settings.timeout.connect, 2.5);
        assert_eq!(settings.timeout.operation, 60.0);
    }

    #[test]
    fn test_timeout_durations() {
        let timeout = TimeoutSettings {
            connect: 1.5,
            operation: 10.0,
        };
        assert_eq!(timeout.connect_timeout(), Duration::from_millis(1500));
        assert_eq!(timeout.operation_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_validate_empty_access_key() {
        let settings = LoadBalancingSettings {
            secret_key: "SK".into(),
            ..LoadBalancingSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ElbError::InvalidArgument("settings.access_key"))
        ));
    }

    #[test]
    fn test_validate_empty_secret_key() {
        let settings = LoadBalancingSettings {
            access_key: "AK".into(),
            ..LoadBalancingSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ElbError::InvalidArgument("settings.secret_key"))
        ));
    }

    #[test]
    fn test_validate_empty_region() {
        let settings = LoadBalancingSettings {
            access_key: "AK".into(),
            secret_key: "SK".into(),
            region: String::new(),
            ..LoadBalancingSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ElbError::InvalidArgument("settings.region"))
        ));
    }

    #[test]
    fn test_validate_complete_settings() {
        let settings = LoadBalancingSettings {
            access_key: "AK".into(),
            secret_key: "SK".into(),
            ..LoadBalancingSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_registrar_config_defaults() {
        let cfg: RegistrarConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.aws.region, "us-east-1");
        assert!(cfg.aws.access_key.is_empty());
    }
}
