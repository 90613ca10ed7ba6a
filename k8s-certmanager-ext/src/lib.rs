pub use k8s_certmanager::certmanagerv1;
pub use k8s_openapi as openapi;
pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;

use certmanagerv1::CertificateRequest;
use certmanagerv1::CertificateRequestCondition;
use certmanagerv1::CertificateRequestConditionType;
use certmanagerv1::CertificateRequestStatus;
use certmanagerv1::ConditionStatus;
use openapi::Metadata;
use openapi::Resource;

pub trait ObjectMetaExt {
    fn new(name: impl ToString) -> Self;
    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self;
    fn uid(self, uid: impl ToString) -> Self;
    fn owner(self, owner: metav1::OwnerReference) -> Self;
}

impl ObjectMetaExt for metav1::ObjectMeta {
    fn new(name: impl ToString) -> Self {
        let name = Some(name.to_string());
        Self { name, ..default() }
    }

    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            ..Self::new(name)
        }
    }

    fn uid(self, uid: impl ToString) -> Self {
        Self {
            uid: Some(uid.to_string()),
            ..self
        }
    }

    /// Appends `owner` to the owner references, keeping existing ones first.
    fn owner(mut self, owner: metav1::OwnerReference) -> Self {
        self.owner_references.get_or_insert_with(Vec::new).push(owner);
        self
    }
}

pub trait OwnerReferenceExt {
    fn controller_of<K>(owner: &K) -> Self
    where
        K: Resource + Metadata<Ty = metav1::ObjectMeta>;
}

impl OwnerReferenceExt for metav1::OwnerReference {
    /// Controller reference pointing at `owner`, the way a controller
    /// links the objects it creates back to their cause.
    fn controller_of<K>(owner: &K) -> Self
    where
        K: Resource + Metadata<Ty = metav1::ObjectMeta>,
    {
        let metadata = owner.metadata();
        Self {
            api_version: K::API_VERSION.to_string(),
            kind: K::KIND.to_string(),
            name: metadata.name.clone().unwrap_or_default(),
            uid: metadata.uid.clone().unwrap_or_default(),
            controller: Some(true),
            block_owner_deletion: Some(true),
        }
    }
}

pub trait PodExt {
    fn new(name: impl ToString, namespace: impl ToString, uid: impl ToString) -> Self;
}

impl PodExt for corev1::Pod {
    fn new(name: impl ToString, namespace: impl ToString, uid: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta::with_namespace(name, namespace).uid(uid);
        Self {
            metadata,
            ..default()
        }
    }
}

pub trait CertificateRequestExt {
    fn new(name: impl ToString, namespace: impl ToString) -> Self;
    fn owned_by<K>(self, owner: &K) -> Self
    where
        K: Resource + Metadata<Ty = metav1::ObjectMeta>;
    fn condition(self, type_: CertificateRequestConditionType, status: ConditionStatus) -> Self;
    fn ready(self) -> Self;
}

impl CertificateRequestExt for CertificateRequest {
    fn new(name: impl ToString, namespace: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta::with_namespace(name, namespace);
        Self {
            metadata,
            ..default()
        }
    }

    fn owned_by<K>(self, owner: &K) -> Self
    where
        K: Resource + Metadata<Ty = metav1::ObjectMeta>,
    {
        let owner = metav1::OwnerReference::controller_of(owner);
        Self {
            metadata: self.metadata.owner(owner),
            ..self
        }
    }

    /// Records a condition, replacing any earlier record of the same type.
    fn condition(mut self, type_: CertificateRequestConditionType, status: ConditionStatus) -> Self {
        let conditions = &mut self
            .status
            .get_or_insert_with(CertificateRequestStatus::default)
            .conditions;
        conditions.retain(|condition| condition.type_ != type_);
        conditions.push(CertificateRequestCondition::new(type_, status));
        self
    }

    fn ready(self) -> Self {
        self.condition(CertificateRequestConditionType::Ready, ConditionStatus::True)
    }
}

pub trait StatusExt {
    fn not_found<K>(name: impl ToString) -> Self
    where
        K: Resource;
}

impl StatusExt for metav1::Status {
    /// The `Status` body an API server answers with for a missing object.
    fn not_found<K>(name: impl ToString) -> Self
    where
        K: Resource,
    {
        let kind = K::URL_PATH_SEGMENT.to_string();
        let group = (!K::GROUP.is_empty()).then(|| K::GROUP.to_string());
        let name = name.to_string();
        let resource = match &group {
            Some(group) => format!("{kind}.{group}"),
            None => kind.clone(),
        };
        let message = format!(r#"{resource} "{name}" not found"#);
        let details = metav1::StatusDetails {
            name: Some(name),
            group,
            kind: Some(kind),
            ..default()
        };
        Self {
            code: Some(404),
            details: Some(details),
            message: Some(message),
            metadata: metav1::ListMeta::default(),
            reason: Some("NotFound".to_string()),
            status: Some("Failure".to_string()),
        }
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}
