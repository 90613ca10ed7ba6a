//! Polling helpers for e2e tests that exercise cert-manager through a CSI driver.
//!
//! The driver creates one `CertificateRequest` per pod, owned by that pod.
//! [`Helper`] correlates the two through the request's first owner reference
//! and waits for the request to become ready or to disappear.

use std::future::Future;
use std::io;
use std::sync::Once;
use std::time::Duration;

use k8s_certmanager_ext as k8s;
use k8s_certmanager_kubeapi::KubeApi;
use kube::ResourceExt as _;

use k8s::certmanagerv1::CertificateRequest;
use k8s::corev1;

pub use error::Error;
pub use helper::Helper;
pub use kubectl::Describe;
pub use kubectl::Kubectl;
pub use owner::find_certificate_request;
pub use owner::find_certificate_request_ready;
pub use poller::Poller;

mod error;
mod helper;
mod kubectl;
mod owner;
mod poller;

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);
pub const DELETION_POLL_INTERVAL: Duration = Duration::from_millis(500);

static INIT: Once = Once::new();

/// Installs a `tracing` subscriber writing through the test harness.
///
/// The filter comes from `RUST_LOG`. Safe to call from every test; only the
/// first call has an effect, and an already installed subscriber is kept.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
