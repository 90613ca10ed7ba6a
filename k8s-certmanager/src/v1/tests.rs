use super::*;

const ISSUED: &str = r#"{
    "apiVersion": "cert-manager.io/v1",
    "kind": "CertificateRequest",
    "metadata": {
        "name": "csi-7d9c2",
        "namespace": "sandbox",
        "uid": "5c1f2d2e-0f0e-4b4a-9c3e-8d7a6b5c4d3e",
        "ownerReferences": [
            {
                "apiVersion": "v1",
                "kind": "Pod",
                "name": "my-csi-app",
                "uid": "0bb0d7f4-4a43-4d2c-8e6a-2c5f6f0d7b11"
            }
        ]
    },
    "spec": {
        "request": "LS0tLS1CRUdJTi...",
        "issuerRef": {"name": "ca-issuer", "kind": "Issuer", "group": "cert-manager.io"},
        "duration": "2160h",
        "isCA": false,
        "usages": ["digital signature", "key encipherment"]
    },
    "status": {
        "conditions": [
            {"type": "Approved", "status": "True", "reason": "cert-manager.io"},
            {"type": "Ready", "status": "True", "reason": "Issued", "message": "Certificate fetched from issuer successfully"},
            {"type": "example.com/Audited", "status": "Unknown"}
        ],
        "certificate": "LS0tLS1CRUdJTiBDRVJUSUZJQ0FURS0tLS0t"
    }
}"#;

fn issued() -> CertificateRequest {
    serde_json::from_str(ISSUED).unwrap()
}

fn with_conditions(conditions: Vec<CertificateRequestCondition>) -> CertificateRequest {
    CertificateRequest {
        status: Some(CertificateRequestStatus {
            conditions,
            ..CertificateRequestStatus::default()
        }),
        ..CertificateRequest::default()
    }
}

#[test]
fn issued_request_is_ready_and_approved() {
    let cr = issued();
    assert!(cr.is_ready());
    assert!(cr.is_approved());
    assert!(!cr.is_denied());
    assert!(!cr.is_invalid());
    assert_eq!(cr.spec.issuer_ref.name, "ca-issuer");
    assert_eq!(cr.spec.is_ca, Some(false));
}

#[test]
fn unknown_condition_type_is_preserved() {
    let cr = issued();
    let other = &cr.conditions()[2];
    assert_eq!(
        other.type_,
        CertificateRequestConditionType::Other("example.com/Audited".to_string())
    );
    assert_eq!(other.status, ConditionStatus::Unknown);
    assert_eq!(other.type_.to_string(), "example.com/Audited");

    let json = serde_json::to_value(other).unwrap();
    assert_eq!(json["type"], "example.com/Audited");
}

#[test]
fn first_owner_uid() {
    let cr = issued();
    assert_eq!(cr.owner_uid(), Some("0bb0d7f4-4a43-4d2c-8e6a-2c5f6f0d7b11"));
    assert_eq!(CertificateRequest::default().owner_uid(), None);
}

#[test]
fn missing_status_has_no_conditions() {
    let cr = CertificateRequest::default();
    assert!(cr.conditions().is_empty());
    assert!(!cr.is_ready());
}

#[test]
fn ready_false_is_not_ready() {
    let cr = with_conditions(vec![CertificateRequestCondition::new(
        CertificateRequestConditionType::Ready,
        ConditionStatus::False,
    )]);
    assert!(!cr.is_ready());
    assert!(cr.has_condition(
        &CertificateRequestConditionType::Ready,
        ConditionStatus::False
    ));
}

#[test]
fn ready_status_must_match_exactly() {
    let cr = with_conditions(vec![
        CertificateRequestCondition::new(
            CertificateRequestConditionType::Approved,
            ConditionStatus::True,
        ),
        CertificateRequestCondition::new(
            CertificateRequestConditionType::Ready,
            ConditionStatus::Unknown,
        ),
    ]);
    assert!(cr.is_approved());
    assert!(!cr.is_ready());
}

#[test]
fn spec_duration_is_kept_verbatim() {
    let cr = issued();
    assert_eq!(cr.spec.duration.as_deref(), Some("2160h"));

    let json = serde_json::to_value(CertificateRequestSpec::default()).unwrap();
    assert!(json.get("duration").is_none());
}

#[test]
fn kube_resource_identity() {
    use kube::Resource as _;

    assert_eq!(CertificateRequest::kind(&()), "CertificateRequest");
    assert_eq!(CertificateRequest::group(&()), CERTMANAGER_API_GROUP);
    assert_eq!(CertificateRequest::api_version(&()), "cert-manager.io/v1");
    assert_eq!(CertificateRequest::plural(&()), "certificaterequests");
}
