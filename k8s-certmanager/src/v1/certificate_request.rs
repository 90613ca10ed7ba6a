use super::*;

/// `CertificateRequest` is a request to an issuer for a signed certificate.
///
/// It is normally created by a controller on behalf of some owning object
/// (a `Certificate`, or a pod when a CSI driver is involved) and carries the
/// owner as its first owner reference.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateRequest {
    pub metadata: metav1::ObjectMeta,

    #[serde(default)]
    pub spec: CertificateRequestSpec,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CertificateRequestStatus>,
}

/// Desired state of a `CertificateRequest`
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestSpec {
    /// PEM encoded x509 certificate signing request, base64 encoded on the wire
    ///
    #[serde(default)]
    pub request: String,

    /// reference to the issuer responsible for signing the request
    ///
    #[serde(default)]
    pub issuer_ref: IssuerReference,

    /// requested certificate lifetime as a Go duration string, e.g. `2160h`
    /// +optional
    ///
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(rename = "isCA", skip_serializing_if = "Option::is_none")]
    pub is_ca: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usages: Vec<String>,

    /// name of the user that created the request, populated by the webhook
    ///
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
}

/// `IssuerReference` points at an `Issuer` or `ClusterIssuer`
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuerReference {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Observed state of a `CertificateRequest`
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequestStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<CertificateRequestCondition>,

    /// PEM encoded signed certificate, set once the request is issued
    ///
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,

    /// PEM encoded CA of the issuer, if known
    ///
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<String>,

    /// time at which the request entered a terminal failed state
    ///
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_time: Option<metav1::Time>,
}

impl CertificateRequest {
    /// All condition records currently reported, empty if there is no status yet.
    pub fn conditions(&self) -> &[CertificateRequestCondition] {
        match &self.status {
            Some(status) => &status.conditions,
            None => &[],
        }
    }

    /// Whether any condition carries exactly this type and this status.
    pub fn has_condition(
        &self,
        type_: &CertificateRequestConditionType,
        status: ConditionStatus,
    ) -> bool {
        self.conditions()
            .iter()
            .any(|condition| condition.type_ == *type_ && condition.status == status)
    }

    pub fn is_ready(&self) -> bool {
        self.has_condition(&CertificateRequestConditionType::Ready, ConditionStatus::True)
    }

    pub fn is_approved(&self) -> bool {
        self.has_condition(
            &CertificateRequestConditionType::Approved,
            ConditionStatus::True,
        )
    }

    pub fn is_denied(&self) -> bool {
        self.has_condition(&CertificateRequestConditionType::Denied, ConditionStatus::True)
    }

    pub fn is_invalid(&self) -> bool {
        self.has_condition(
            &CertificateRequestConditionType::InvalidRequest,
            ConditionStatus::True,
        )
    }

    /// UID of the first owner reference.
    ///
    /// Only the first reference is considered when correlating a request
    /// with the object that caused its creation.
    pub fn owner_uid(&self) -> Option<&str> {
        self.metadata
            .owner_references
            .as_deref()
            .and_then(|owners| owners.first())
            .map(|owner| owner.uid.as_str())
    }
}

impl k8s::Resource for CertificateRequest {
    const API_VERSION: &'static str = CERTMANAGER_API_GROUP_VERSION;
    const GROUP: &'static str = CERTMANAGER_API_GROUP;
    const KIND: &'static str = "CertificateRequest";
    const VERSION: &'static str = CERTMANAGER_API_VERSION;
    const URL_PATH_SEGMENT: &'static str = "certificaterequests";
    type Scope = k8s::NamespaceResourceScope;
}

impl k8s::Metadata for CertificateRequest {
    type Ty = metav1::ObjectMeta;

    fn metadata(&self) -> &<Self as k8s::Metadata>::Ty {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut <Self as k8s::Metadata>::Ty {
        &mut self.metadata
    }
}
