use constcat::concat;

use super::*;

pub use certificate_request::CertificateRequest;
pub use certificate_request::CertificateRequestSpec;
pub use certificate_request::CertificateRequestStatus;
pub use certificate_request::IssuerReference;
pub use condition::CertificateRequestCondition;
pub use condition::CertificateRequestConditionType;
pub use condition::ConditionStatus;

pub const CERTMANAGER_API_GROUP: &str = "cert-manager.io";
pub const CERTMANAGER_API_VERSION: &str = "v1";
pub const CERTMANAGER_API_GROUP_VERSION: &str =
    concat!(CERTMANAGER_API_GROUP, "/", CERTMANAGER_API_VERSION);

mod certificate_request;
mod condition;

#[cfg(test)]
mod tests;
