use crate::config::LoadBalancingSettings;
use crate::error::ElbError;
use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_sdk_elasticloadbalancing::config::{BehaviorVersion, Region};
use aws_sdk_elasticloadbalancing::config::timeout::TimeoutConfig;
use aws_sdk_elasticloadbalancing::types::Instance;

/// The one outgoing request shape: a load balancer name and the
/// instance ids to add or remove, in caller order. Duplicates are kept
/// as given; the service decides what they mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceChangeRequest {
    pub load_balancer_name: String,
    pub instance_ids: Vec<String>,
}

impl InstanceChangeRequest {
    pub fn new(load_balancer_name: &str, instance_ids: &[String]) -> Self {
        Self {
            load_balancer_name: load_balancer_name.to_string(),
            instance_ids: instance_ids.to_vec(),
        }
    }
}

/// The two remote operations this crate exposes. Implemented by the
/// AWS-backed client; tests substitute a recording double.
#[async_trait]
pub trait LoadBalancingApi: Send + Sync {
    /// Add the listed instances to the load balancer's registered set.
    async fn register_instances(&self, request: &InstanceChangeRequest) -> Result<(), ElbError>;

    /// Remove the listed instances from the load balancer's registered set.
    async fn deregister_instances(&self, request: &InstanceChangeRequest) -> Result<(), ElbError>;
}

/// Builds an API client for a single call. The manager constructs a
/// fresh client per operation, so settings may differ between calls.
pub trait ClientFactory: Send + Sync {
    type Api: LoadBalancingApi;

    fn create_client(&self, settings: &LoadBalancingSettings) -> Result<Self::Api, ElbError>;
}

/// Default factory backed by the AWS SDK.
#[derive(Debug, Clone, Default)]
pub struct AwsClientFactory;

impl ClientFactory for AwsClientFactory {
    type Api = ElbClient;

    fn create_client(&self, settings: &LoadBalancingSettings) -> Result<ElbClient, ElbError> {
        Ok(ElbClient::from_settings(settings))
    }
}

/// Elastic Load Balancing client bound to one set of credentials and
/// one region. Construction performs no network I/O; the SDK connects
/// lazily on the first call.
#[derive(Clone)]
pub struct ElbClient {
    inner: aws_sdk_elasticloadbalancing::Client,
}

impl ElbClient {
    pub fn from_settings(settings: &LoadBalancingSettings) -> Self {
        let credentials = Credentials::from_keys(
            settings.access_key.as_str(),
            settings.secret_key.as_str(),
            settings.session_token.clone(),
        );

        let timeouts = TimeoutConfig::builder()
            .connect_timeout(settings.timeout.connect_timeout())
            .operation_timeout(settings.timeout.operation_timeout())
            .build();

        let config = aws_sdk_elasticloadbalancing::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials)
            .timeout_config(timeouts)
            .build();

        Self {
            inner: aws_sdk_elasticloadbalancing::Client::from_conf(config),
        }
    }
}

#[async_trait]
impl LoadBalancingApi for ElbClient {
    async fn register_instances(&self, request: &InstanceChangeRequest) -> Result<(), ElbError> {
        let mut call = self
            .inner
            .register_instances_with_load_balancer()
            .load_balancer_name(request.load_balancer_name.as_str());

        for id in &request.instance_ids {
            call = call.instances(Instance::builder().instance_id(id.as_str()).build());
        }

        call.send()
            .await
            .map_err(|e| ElbError::Remote(Box::new(e)))?;

        Ok(())
    }

    async fn deregister_instances(&self, request: &InstanceChangeRequest) -> Result<(), ElbError> {
        let mut call = self
            .inner
            .deregister_instances_from_load_balancer()
            .load_balancer_name(request.load_balancer_name.as_str());

        for id in &request.instance_ids {
            call = call.instances(Instance::builder().instance_id(id.as_str()).build());
        }

        call.send()
            .await
            .map_err(|e| ElbError::Remote(Box::new(e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> LoadBalancingSettings {
        LoadBalancingSettings {
            access_key: "AK".into(),
            secret_key: "SK".into(),
            ..LoadBalancingSettings::default()
        }
    }

    #[test]
    fn test_request_preserves_order_and_duplicates() {
        let ids = vec!["i-2".to_string(), "i-1".to_string(), "i-2".to_string()];
        let request = InstanceChangeRequest::new("lb-1", &ids);
        assert_eq!(request.load_balancer_name, "lb-1");
        assert_eq!(request.instance_ids, ids);
    }

    #[test]
    fn test_request_allows_empty_instance_list() {
        let request = InstanceChangeRequest::new("lb-1", &[]);
        assert!(request.instance_ids.is_empty());
    }

    #[test]
    fn test_client_builds_without_network() {
        // Construction is pure config assembly; a call would be needed
        // to reach the service.
        let _ = ElbClient::from_settings(&settings());
    }

    #[test]
    fn test_factory_builds_client() {
        assert!(AwsClientFactory.create_client(&settings()).is_ok());
    }
}
