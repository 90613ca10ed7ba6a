use k8s_certmanager_kubeapi::is_not_found;

use super::*;

const CERTIFICATE_REQUEST_RESOURCE: &str = "certificaterequest";

/// Waits on the lifecycle of `CertificateRequest`s created for pods.
#[derive(Debug)]
pub struct Helper<D = Kubectl> {
    kubeapi: KubeApi,
    describer: D,
}

impl Helper {
    /// Helper talking to the cluster from the ambient kube configuration,
    /// describing failures with the `kubectl` from [`Kubectl::from_env`].
    pub async fn new() -> Result<Self> {
        let kubeapi = KubeApi::new().await?;
        Ok(Self::with_parts(kubeapi, Kubectl::from_env()))
    }
}

impl<D: Describe> Helper<D> {
    pub fn with_parts(kubeapi: KubeApi, describer: D) -> Self {
        Self { kubeapi, describer }
    }

    pub fn kubeapi(&self) -> &KubeApi {
        &self.kubeapi
    }

    /// Waits for the `CertificateRequest` owned by `pod` to report `Ready=True`.
    ///
    /// The request may not exist yet when polling starts; until it shows up
    /// the wait simply continues. Listing errors end the wait immediately.
    pub async fn wait_for_certificate_request_ready(
        &self,
        pod: &corev1::Pod,
        timeout: Duration,
    ) -> Result<CertificateRequest> {
        let uid = owner::pod_uid(pod)?;
        let namespace = pod.namespace().unwrap_or_else(|| "default".to_string());
        let name = pod.name_any();

        let kubeapi = &self.kubeapi;
        let (uid, namespace, name) = (uid.as_str(), namespace.as_str(), name.as_str());

        Poller::new()
            .with_interval(READY_POLL_INTERVAL)
            .with_timeout(timeout)
            .poll_immediate(move || async move {
                let crs = kubeapi.list_certificate_requests(namespace).await?;

                let Ok(cr) = find_certificate_request(&crs, uid) else {
                    tracing::info!(
                        namespace,
                        pod = name,
                        "Cannot find CertificateRequest for pod, waiting..."
                    );
                    return Ok(None);
                };

                if !cr.is_ready() {
                    tracing::info!(
                        namespace,
                        pod = name,
                        conditions = ?cr.conditions(),
                        "Expected CertificateRequest for pod to have Ready condition 'True'"
                    );
                    return Ok(None);
                }

                Ok(Some(cr.clone()))
            })
            .await
    }

    /// See [`find_certificate_request_ready`].
    pub fn find_certificate_request_ready<'a>(
        &self,
        crs: &'a [CertificateRequest],
        pod: &corev1::Pod,
    ) -> Result<&'a CertificateRequest> {
        find_certificate_request_ready(crs, pod)
    }

    /// See [`find_certificate_request`].
    pub fn find_certificate_request<'a>(
        &self,
        crs: &'a [CertificateRequest],
        uid: &str,
    ) -> Result<&'a CertificateRequest> {
        find_certificate_request(crs, uid)
    }

    /// Waits until getting `namespace/name` answers with not found.
    ///
    /// Any other API error ends the wait. Whenever the wait fails the
    /// resource is described first; a failing describe is only logged.
    pub async fn wait_for_certificate_request_deletion(
        &self,
        namespace: &str,
        name: &str,
        timeout: Duration,
    ) -> Result<()> {
        tracing::info!(namespace, name, "Waiting for CertificateRequest to be deleted");

        let kubeapi = &self.kubeapi;
        let result = Poller::new()
            .with_interval(DELETION_POLL_INTERVAL)
            .with_timeout(timeout)
            .poll_immediate(move || async move {
                match kubeapi.get_certificate_request(namespace, name).await {
                    Ok(cr) => {
                        tracing::info!(
                            namespace,
                            name,
                            conditions = ?cr.conditions(),
                            "CertificateRequest not deleted"
                        );
                        Ok(None)
                    }
                    Err(err) if is_not_found(&err) => Ok(Some(())),
                    Err(err) => Err(err.into()),
                }
            })
            .await;

        if let Err(err) = &result {
            tracing::warn!(namespace, name, %err, "CertificateRequest was not deleted");
            if let Err(err) = self
                .describer
                .describe_resource(namespace, CERTIFICATE_REQUEST_RESOURCE, name)
                .await
            {
                tracing::warn!(namespace, name, ?err, "Failed to describe CertificateRequest");
            }
        }

        result
    }
}
