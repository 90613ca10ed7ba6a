use thiserror::Error;

use super::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Kube(#[from] kube::Error),

    #[error("timed out waiting for the condition after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("failed to find CertificateRequest owned by pod with UID {uid:?}")]
    OwnerNotFound { uid: String },

    #[error("CertificateRequest not ready: {0:?}")]
    NotReady(Box<CertificateRequest>),

    #[error("pod {namespace}/{name} has no UID")]
    MissingUid { namespace: String, name: String },

    #[error("failed to describe {kind} {namespace}/{name}")]
    Describe {
        kind: String,
        namespace: String,
        name: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
