//! Typed resources of the `cert-manager.io` API group.
//!
//! Only the pieces needed to observe certificate issuance are modelled:
//! the `CertificateRequest` resource and its status conditions.

use std::fmt;

use k8s_openapi as k8s;
use serde::{Deserialize, Serialize};

use k8s::apimachinery::pkg::apis::meta::v1 as metav1;

pub use v1 as certmanagerv1;

pub mod v1;
