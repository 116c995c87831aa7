//! The `Scan` custom resource submitted to the operator.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// API group of the execution resources.
pub const SCAN_GROUP: &str = "execution.securecodebox.io";

/// API version of the `Scan` resource.
pub const SCAN_VERSION: &str = "v1";

/// Desired state of a scan, as reconciled by the operator.
#[derive(CustomResource, Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "execution.securecodebox.io",
    version = "v1",
    kind = "Scan",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct ScanSpec {
    /// Name of the registered scan type to run.
    pub scan_type: String,

    /// Arguments handed to the scanner; the first one is the target.
    pub parameters: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::Resource;

    #[test]
    fn test_api_version() {
        assert_eq!(Scan::api_version(&()), format!("{}/{}", SCAN_GROUP, SCAN_VERSION));
        assert_eq!(Scan::kind(&()), "Scan");
    }

    #[test]
    fn test_wire_shape() {
        let mut scan = Scan::new(
            "nmap",
            ScanSpec {
                scan_type: "nmap".to_string(),
                parameters: vec!["scanme.nmap.org".to_string()],
            },
        );
        scan.metadata.namespace = Some("foobar".to_string());

        let value = serde_json::to_value(&scan).unwrap();
        assert_eq!(value["apiVersion"], "execution.securecodebox.io/v1");
        assert_eq!(value["kind"], "Scan");
        assert_eq!(value["metadata"]["name"], "nmap");
        assert_eq!(value["metadata"]["namespace"], "foobar");
        assert_eq!(value["spec"]["scanType"], "nmap");
        assert_eq!(value["spec"]["parameters"][0], "scanme.nmap.org");
    }
}
