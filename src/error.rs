use std::fmt;

/// Error raised by the underlying AWS SDK call, boxed and carried
/// through to the caller without translation.
pub type RemoteError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug)]
pub enum ElbError {
    /// A required argument was missing or empty. Raised locally, before
    /// any request leaves the process. Carries the argument name.
    InvalidArgument(&'static str),
    /// Settings file could not be read or parsed.
    Config(String),
    /// Fault reported by the remote service or its SDK, such as an
    /// auth failure, an unknown load balancer, or throttling. Never
    /// retried or rewritten here.
    Remote(RemoteError),
}

impl fmt::Display for ElbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElbError::InvalidArgument(name) => write!(f, "invalid argument: {}", name),
            ElbError::Config(msg) => write!(f, "config error: {}", msg),
            ElbError::Remote(e) => write!(f, "remote service error: {}", e),
        }
    }
}

impl std::error::Error for ElbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ElbError::Remote(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
