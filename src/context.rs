//! Parse context - where a step comes from
//!
//! Carries only diagnostic metadata. Nothing in it changes how a step is
//! parsed; it ends up in error messages.

use std::fmt;

use serde::Serialize;

use crate::error::{MalformedKind, MalformedStepError};

/// Diagnostic metadata for one step: suite, file, format version, step index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseContext {
    suite: String,
    file: Option<String>,
    version: Option<String>,
    step_index: Option<usize>,
}

impl ParseContext {
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            ..Self::default()
        }
    }

    /// Originating file of the suite
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Format-version hint of the suite (e.g. `0.90.7`)
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Zero-based position of the step within its section
    pub fn at_step(mut self, index: usize) -> Self {
        self.step_index = Some(index);
        self
    }

    pub fn suite(&self) -> &str {
        &self.suite
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn step_index(&self) -> Option<usize> {
        self.step_index
    }

    pub(crate) fn malformed(&self, kind: MalformedKind) -> MalformedStepError {
        MalformedStepError::new(kind, self.clone())
    }
}

impl fmt::Display for ParseContext {
    /// `suite 'search' (rest/search.yaml), step #2, version 0.90.7`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "suite '{}'", self.suite)?;
        if let Some(file) = &self.file {
            write!(f, " ({})", file)?;
        }
        if let Some(index) = self.step_index {
            write!(f, ", step #{}", index)?;
        }
        if let Some(version) = &self.version {
            write!(f, ", version {}", version)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_suite_only() {
        assert_eq!(ParseContext::new("search").to_string(), "suite 'search'");
    }

    #[test]
    fn display_full_location() {
        let ctx = ParseContext::new("search")
            .with_file("rest/search/10_basic.yaml")
            .with_version("0.90.7")
            .at_step(2);
        assert_eq!(
            ctx.to_string(),
            "suite 'search' (rest/search/10_basic.yaml), step #2, version 0.90.7"
        );
        assert_eq!(ctx.step_index(), Some(2));
        assert_eq!(ctx.version(), Some("0.90.7"));
    }
}
