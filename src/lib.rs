//! Build-script glue for AWS Classic Elastic Load Balancing: register
//! and deregister EC2 instances with a named load balancer. Signing,
//! transport, and fault semantics belong to the AWS SDK; this crate
//! supplies settings handling, input validation, and a small
//! capability seam so deployment tooling can call the two operations
//! directly and tests can substitute the remote service.

pub mod config;
pub mod elb;
pub mod environment;
pub mod error;

pub use config::{LoadBalancingSettings, RegistrarConfig, TimeoutSettings};
pub use elb::{
    AwsClientFactory, ClientFactory, ElbClient, InstanceChangeRequest, LoadBalancingApi,
    LoadBalancingManager,
};
pub use environment::{BuildEnvironment, SystemEnvironment};
pub use error::ElbError;
