use super::client::{AwsClientFactory, ClientFactory, InstanceChangeRequest, LoadBalancingApi};
use crate::config::LoadBalancingSettings;
use crate::environment::BuildEnvironment;
use crate::error::ElbError;
use std::sync::Arc;

/// Entry point for the two load balancing operations. Holds the
/// execution environment for its lifetime and builds a fresh API
/// client per call, so one manager can serve calls with different
/// settings and concurrent callers never share client state.
pub struct LoadBalancingManager<F: ClientFactory = AwsClientFactory> {
    environment: Arc<dyn BuildEnvironment>,
    factory: F,
}

impl LoadBalancingManager<AwsClientFactory> {
    pub fn new(environment: Arc<dyn BuildEnvironment>) -> Self {
        Self::with_factory(environment, AwsClientFactory)
    }
}

impl<F: ClientFactory> LoadBalancingManager<F> {
    pub fn with_factory(environment: Arc<dyn BuildEnvironment>, factory: F) -> Self {
        Self {
            environment,
            factory,
        }
    }

    pub fn environment(&self) -> &Arc<dyn BuildEnvironment> {
        &self.environment
    }

    /// Validate the settings and build a client for a single call.
    /// Fails before any network interaction when a credential field is
    /// missing.
    fn create_client(&self, settings: &LoadBalancingSettings) -> Result<F::Api, ElbError> {
        settings.validate()?;
        self.factory.create_client(settings)
    }

    /// Add instances to the load balancer. Once registered, an instance
    /// starts receiving traffic; instances outside the load balancer's
    /// availability zones stay out of service until their zone is
    /// added. All of that state lives on the remote side, never here.
    pub async fn register_instances(
        &self,
        load_balancer: &str,
        instances: &[String],
        settings: &LoadBalancingSettings,
    ) -> Result<(), ElbError> {
        let client = self.create_client(settings)?;
        let request = InstanceChangeRequest::new(load_balancer, instances);

        tracing::debug!(
            "elb: registering {} instance(s) with load balancer {}",
            request.instance_ids.len(),
            request.load_balancer_name
        );

        client.register_instances(&request).await
    }

    /// Remove instances from the load balancer. Deregistered instances
    /// stop receiving traffic.
    pub async fn deregister_instances(
        &self,
        load_balancer: &str,
        instances: &[String],
        settings: &LoadBalancingSettings,
    ) -> Result<(), ElbError> {
        let client = self.create_client(settings)?;
        let request = InstanceChangeRequest::new(load_balancer, instances);

        tracing::debug!(
            "elb: deregistering {} instance(s) from load balancer {}",
            request.instance_ids.len(),
            request.load_balancer_name
        );

        client.deregister_instances(&request).await
    }
}
