use std::fmt::Debug;

use k8s_certmanager_ext as k8s;
use kube::api;

use k8s::certmanagerv1::CertificateRequest;

pub struct KubeApi {
    list_params: api::ListParams,
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi configured with a default Kubernetes client.
    ///
    /// The client is inferred from the environment: `KUBECONFIG` or the local
    /// kubeconfig file, falling back to the in-cluster service account.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), kube::Error> {
    /// let api = k8s_certmanager_kubeapi::KubeApi::new().await?;
    /// // use `api`...
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new() -> kube::Result<Self> {
        kube::Client::try_default().await.map(Self::with_client)
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = kube::Client::try_default().await?;
    /// let api = k8s_certmanager_kubeapi::KubeApi::with_client(client);
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_client(client: kube::Client) -> Self {
        Self {
            list_params: api::ListParams::default(),
            client,
        }
    }

    /// Lists every CertificateRequest in `namespace`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(api: &k8s_certmanager_kubeapi::KubeApi) -> kube::Result<()> {
    /// let crs = api.list_certificate_requests("sandbox").await?;
    /// println!("found {} certificate requests", crs.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_certificate_requests(
        &self,
        namespace: &str,
    ) -> kube::Result<Vec<CertificateRequest>> {
        let lp = self.list_params();
        let items = self
            .certificate_requests(namespace)
            .list(lp)
            .await
            .map(|list| list.items)?;
        tracing::trace!(namespace, count = items.len(), "Listed CertificateRequests");
        Ok(items)
    }

    /// Fetches a single CertificateRequest by name.
    ///
    /// A missing object surfaces as an API error with code 404, see [`is_not_found`].
    pub async fn get_certificate_request(
        &self,
        namespace: &str,
        name: &str,
    ) -> kube::Result<CertificateRequest> {
        self.certificate_requests(namespace).get(name).await
    }

    fn certificate_requests(&self, namespace: &str) -> api::Api<CertificateRequest> {
        api::Api::namespaced(self.client.clone(), namespace)
    }

    fn list_params(&self) -> &api::ListParams {
        &self.list_params
    }
}

impl Debug for KubeApi {
    /// Formats the `KubeApi` for debugging, redacting the `client`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeApi")
            .field("list_params", &self.list_params)
            .field("client", &"<kube::Client>")
            .finish()
    }
}

/// Whether `err` is the API server reporting that the object does not exist.
pub fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(response) if response.code == 404)
}

#[cfg(test)]
mod tests;
