//! Document Module - generic tree the step parser reads
//!
//! - `node`: `Node`, `Scalar`, `Mapping` (duplicate keys preserved)
//! - `canonical`: compact JSON rendering and structural comparison
//!
//! Text parsing itself is delegated to `serde_yaml` and `serde_json`.

mod canonical;
mod node;

pub use canonical::{render, structural_value, structurally_equal};
pub use node::{Mapping, Node, Scalar};

/// Parse YAML text into a document node
pub fn from_yaml_str(text: &str) -> Result<Node, serde_yaml::Error> {
    serde_yaml::from_str(text)
}

/// Parse JSON text into a document node
pub fn from_json_str(text: &str) -> Result<Node, serde_json::Error> {
    serde_json::from_str(text)
}
