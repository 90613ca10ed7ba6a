use std::convert::Infallible;

use http::StatusCode;
use kube::client::Body;
use serde_json::json;

use k8s_certmanager_ext::metav1;
use k8s_certmanager_ext::CertificateRequestExt as _;
use k8s_certmanager_ext::StatusExt as _;

use super::*;

fn mock_client<F>(respond: F) -> kube::Client
where
    F: Fn(&http::Request<Body>) -> (StatusCode, serde_json::Value) + Send + Sync + 'static,
{
    let service = tower::service_fn(move |request: http::Request<Body>| {
        let (status, body) = respond(&request);
        let body = Body::from(serde_json::to_vec(&body).unwrap());
        let response = http::Response::builder().status(status).body(body).unwrap();
        async move { Ok::<_, Infallible>(response) }
    });
    kube::Client::new(service, "default")
}

#[tokio::test]
async fn list_uses_namespaced_collection() {
    let client = mock_client(|request| {
        assert_eq!(request.method(), http::Method::GET);
        assert_eq!(
            request.uri().path(),
            "/apis/cert-manager.io/v1/namespaces/sandbox/certificaterequests"
        );
        let items = vec![
            CertificateRequest::new("csi-1", "sandbox").ready(),
            CertificateRequest::new("csi-2", "sandbox"),
        ];
        let list = json!({
            "apiVersion": "cert-manager.io/v1",
            "kind": "CertificateRequestList",
            "metadata": {"resourceVersion": "42"},
            "items": items,
        });
        (StatusCode::OK, list)
    });
    let api = KubeApi::with_client(client);

    let crs = api.list_certificate_requests("sandbox").await.unwrap();
    assert_eq!(crs.len(), 2);
    assert!(crs[0].is_ready());
    assert!(!crs[1].is_ready());
}

#[tokio::test]
async fn get_by_name() {
    let client = mock_client(|request| {
        assert_eq!(
            request.uri().path(),
            "/apis/cert-manager.io/v1/namespaces/sandbox/certificaterequests/csi-1"
        );
        let cr = CertificateRequest::new("csi-1", "sandbox").ready();
        (StatusCode::OK, serde_json::to_value(cr).unwrap())
    });
    let api = KubeApi::with_client(client);

    let cr = api.get_certificate_request("sandbox", "csi-1").await.unwrap();
    assert_eq!(cr.metadata.name.as_deref(), Some("csi-1"));
    assert!(cr.is_ready());
}

#[tokio::test]
async fn missing_object_is_not_found() {
    let client = mock_client(|_| {
        let status = metav1::Status::not_found::<CertificateRequest>("csi-1");
        (StatusCode::NOT_FOUND, serde_json::to_value(status).unwrap())
    });
    let api = KubeApi::with_client(client);

    let err = api
        .get_certificate_request("sandbox", "csi-1")
        .await
        .unwrap_err();
    assert!(is_not_found(&err));
}

#[tokio::test]
async fn server_error_is_not_not_found() {
    let client = mock_client(|_| {
        let status = json!({
            "apiVersion": "v1",
            "kind": "Status",
            "metadata": {},
            "status": "Failure",
            "message": "etcdserver: request timed out",
            "reason": "InternalError",
            "code": 500,
        });
        (StatusCode::INTERNAL_SERVER_ERROR, status)
    });
    let api = KubeApi::with_client(client);

    let err = api.list_certificate_requests("sandbox").await.unwrap_err();
    assert!(matches!(err, kube::Error::Api(_)));
    assert!(!is_not_found(&err));
}
