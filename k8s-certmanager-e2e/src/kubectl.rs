use std::ffi::OsString;
use std::path::PathBuf;

use tokio::process::Command;

use super::*;

/// Source of diagnostic output for a resource that misbehaved during a test.
pub trait Describe {
    fn describe_resource(
        &self,
        namespace: &str,
        kind: &str,
        name: &str,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Runs the `kubectl` binary.
///
/// The child inherits the environment, so `KUBECONFIG` applies to it the
/// same way it applies to the kube client.
#[derive(Clone, Debug)]
pub struct Kubectl {
    binary: PathBuf,
    kubeconfig: Option<PathBuf>,
}

impl Kubectl {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            kubeconfig: None,
        }
    }

    /// Uses the binary named by `KUBECTL`, or `kubectl` from `PATH`.
    pub fn from_env() -> Self {
        let binary = std::env::var_os("KUBECTL").unwrap_or_else(|| OsString::from("kubectl"));
        Self::new(binary)
    }

    pub fn kubeconfig(self, kubeconfig: impl Into<PathBuf>) -> Self {
        Self {
            kubeconfig: Some(kubeconfig.into()),
            ..self
        }
    }

    /// `kubectl describe` output for one resource.
    pub async fn describe(&self, namespace: &str, kind: &str, name: &str) -> Result<String> {
        let describe_error = |source: io::Error| Error::Describe {
            kind: kind.to_string(),
            namespace: namespace.to_string(),
            name: name.to_string(),
            source,
        };

        let output = self
            .command(namespace)
            .args(["describe", kind, name])
            .output()
            .await
            .map_err(describe_error)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = format!(
                "{} exited with {}: {}",
                self.binary.display(),
                output.status,
                stderr.trim()
            );
            return Err(describe_error(io::Error::other(message)));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn command(&self, namespace: &str) -> Command {
        let mut command = Command::new(&self.binary);
        if let Some(kubeconfig) = &self.kubeconfig {
            command.arg("--kubeconfig").arg(kubeconfig);
        }
        command.args(["--namespace", namespace]);
        command
    }
}

impl Default for Kubectl {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Describe for Kubectl {
    async fn describe_resource(&self, namespace: &str, kind: &str, name: &str) -> Result<()> {
        let description = self.describe(namespace, kind, name).await?;
        tracing::info!(namespace, kind, name, "Describing resource\n{description}");
        Ok(())
    }
}
