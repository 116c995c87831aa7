//! Scan intent and acknowledgment types.

use crate::error::{ScbError, ScbResult};
use crate::scan::resource::{Scan, ScanSpec};

/// Longest name the apiserver accepts for a namespaced object.
const MAX_NAME_LEN: usize = 253;

/// An operator's request to run one scan. Built once, submitted once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanIntent {
    name: String,
    target: String,
    namespace: String,
}

impl ScanIntent {
    /// Validate and build an intent.
    pub fn new(
        name: impl Into<String>,
        target: impl Into<String>,
        namespace: impl Into<String>,
    ) -> ScbResult<Self> {
        let name = name.into();
        let target = target.into();
        let namespace = namespace.into();

        validate_scan_args(&name, &target)?;
        if namespace.trim().is_empty() {
            return Err(ScbError::Validation("namespace must not be empty".to_string()));
        }

        Ok(Self {
            name,
            target,
            namespace,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Declarative form sent to the cluster. The scan name doubles as the scan type.
    pub fn to_resource(&self) -> Scan {
        let mut scan = Scan::new(
            &self.name,
            ScanSpec {
                scan_type: self.name.clone(),
                parameters: vec![self.target.clone()],
            },
        );
        scan.metadata.namespace = Some(self.namespace.clone());
        scan
    }
}

/// The cluster accepted the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledged {
    pub name: String,
    pub namespace: String,
    /// UID assigned by the apiserver, if it returned one.
    pub uid: Option<String>,
}

/// Check the positional arguments before any cluster interaction.
pub fn validate_scan_args(name: &str, target: &str) -> ScbResult<()> {
    if name.is_empty() || target.trim().is_empty() {
        return Err(ScbError::Validation(
            "you must specify the name of the scan and the target".to_string(),
        ));
    }
    if !is_dns_subdomain(name) {
        return Err(ScbError::Validation(format!(
            "scan name '{}' must consist of lower case alphanumeric characters, '-' or '.', \
             and must start and end with an alphanumeric character",
            name
        )));
    }
    Ok(())
}

/// RFC 1123 subdomain, as required for object names.
fn is_dns_subdomain(name: &str) -> bool {
    let bytes = name.as_bytes();
    let edge_ok = |b: &u8| b.is_ascii_lowercase() || b.is_ascii_digit();

    !bytes.is_empty()
        && bytes.len() <= MAX_NAME_LEN
        && bytes.first().is_some_and(edge_ok)
        && bytes.last().is_some_and(edge_ok)
        && bytes
            .iter()
            .all(|b| edge_ok(b) || *b == b'-' || *b == b'.')
}
