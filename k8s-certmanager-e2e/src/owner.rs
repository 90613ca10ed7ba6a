use super::*;

/// First request whose first owner reference carries `uid`.
///
/// Requests without owner references are skipped, as are requests owned by
/// `uid` only through a later reference.
pub fn find_certificate_request<'a>(
    crs: &'a [CertificateRequest],
    uid: &str,
) -> Result<&'a CertificateRequest> {
    crs.iter()
        .find(|cr| cr.owner_uid() == Some(uid))
        .ok_or_else(|| Error::OwnerNotFound {
            uid: uid.to_string(),
        })
}

/// The request owned by `pod` in an already fetched list, provided it is ready.
pub fn find_certificate_request_ready<'a>(
    crs: &'a [CertificateRequest],
    pod: &corev1::Pod,
) -> Result<&'a CertificateRequest> {
    let uid = pod_uid(pod)?;
    let cr = find_certificate_request(crs, &uid)?;
    if cr.is_ready() {
        Ok(cr)
    } else {
        Err(Error::NotReady(Box::new(cr.clone())))
    }
}

pub(crate) fn pod_uid(pod: &corev1::Pod) -> Result<String> {
    pod.uid().ok_or_else(|| Error::MissingUid {
        namespace: pod.namespace().unwrap_or_default(),
        name: pod.name_any(),
    })
}
