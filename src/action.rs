//! Action - one parsed API invocation
//!
//! Produced by [`ActionStepParser`](crate::ActionStepParser), immutable
//! afterwards. `bodies` is the authoritative payload; [`Action::body`] is
//! only the joined wire form.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::document;

/// Separator between body documents in the joined payload
pub const BODY_SEPARATOR: &str = "\n";

/// A single API call described by a test step
///
/// # Example
///
/// ```yaml
/// catch: missing
/// indices.get_warmer:
///   index: test_index
///   name: test_warmer
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    api: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    catch: Option<String>,
    params: IndexMap<String, String>,
    bodies: Vec<String>,
}

impl Action {
    pub(crate) fn new(
        api: String,
        catch: Option<String>,
        params: IndexMap<String, String>,
        bodies: Vec<String>,
    ) -> Self {
        Self {
            api,
            catch,
            params,
            bodies,
        }
    }

    /// Name of the API, e.g. `search` or `indices.get_warmer`
    pub fn api(&self) -> &str {
        &self.api
    }

    /// Expected error tag, stored verbatim
    pub fn catch(&self) -> Option<&str> {
        self.catch.as_deref()
    }

    /// Query parameters in source order
    pub fn params(&self) -> &IndexMap<String, String> {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Body documents in source order, one entry per document
    pub fn bodies(&self) -> &[String] {
        &self.bodies
    }

    #[inline]
    pub fn has_body(&self) -> bool {
        !self.bodies.is_empty()
    }

    /// Body documents joined by newlines, as sent on the wire.
    ///
    /// A single document is returned unchanged.
    pub fn body(&self) -> Option<String> {
        self.has_body().then(|| self.bodies.join(BODY_SEPARATOR))
    }

    /// Each body document re-parsed for structural comparison.
    ///
    /// Entries that do not parse as a document are `None`.
    pub fn body_values(&self) -> Vec<Option<Value>> {
        self.bodies
            .iter()
            .map(|body| document::structural_value(body))
            .collect()
    }
}
