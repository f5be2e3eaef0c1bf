pub mod client;
pub mod manager;

pub use client::{AwsClientFactory, ClientFactory, ElbClient, InstanceChangeRequest, LoadBalancingApi};
pub use manager::LoadBalancingManager;
