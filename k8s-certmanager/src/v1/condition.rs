use super::*;

/// A single status condition reported on a `CertificateRequest`
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestCondition {
    #[serde(rename = "type")]
    pub type_: CertificateRequestConditionType,

    pub status: ConditionStatus,

    /// brief machine readable explanation for the last transition
    /// +optional
    ///
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    /// human readable description of the last transition
    /// +optional
    ///
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<metav1::Time>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
}

impl CertificateRequestCondition {
    pub fn new(type_: CertificateRequestConditionType, status: ConditionStatus) -> Self {
        Self {
            type_,
            status,
            reason: None,
            message: None,
            last_transition_time: None,
            observed_generation: None,
        }
    }
}

/// Condition types set by cert-manager on a `CertificateRequest`.
///
/// Types this crate does not know about are kept verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CertificateRequestConditionType {
    Ready,
    InvalidRequest,
    Approved,
    Denied,
    #[serde(untagged)]
    Other(String),
}

impl fmt::Display for CertificateRequestConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready => f.write_str("Ready"),
            Self::InvalidRequest => f.write_str("InvalidRequest"),
            Self::Approved => f.write_str("Approved"),
            Self::Denied => f.write_str("Denied"),
            Self::Other(other) => f.write_str(other),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

impl fmt::Display for ConditionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True => f.write_str("True"),
            Self::False => f.write_str("False"),
            Self::Unknown => f.write_str("Unknown"),
        }
    }
}
