//! Step parse errors with error codes
//!
//! Error codes:
//! - STEP-001: step is not a mapping
//! - STEP-002: no action call
//! - STEP-003: ambiguous action call
//! - STEP-004: repeated error expectation
//! - STEP-005: error expectation is not a scalar
//! - STEP-006: action does not map to parameters
//! - STEP-007: unsupported parameter value
//! - STEP-008: document reader/renderer failure
//!
//! There is a single error type, [`MalformedStepError`]; the rule that was
//! violated is its [`MalformedKind`].

use miette::Diagnostic;
use thiserror::Error;

use crate::context::ParseContext;

pub type Result<T> = std::result::Result<T, MalformedStepError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// The structural rule a step violated
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum MalformedKind {
    #[error("step must be a mapping, found {found}")]
    #[diagnostic(
        code("STEP-001"),
        help("Write the step as a mapping: `api_name: {{ param: value }}`")
    )]
    NotAMapping { found: &'static str },

    #[error("no action call found")]
    #[diagnostic(code("STEP-002"), help("Add the API to call, e.g. `get: {{ index: test }}`"))]
    NoActionCall,

    #[error("ambiguous action call: found {}", .names.join(", "))]
    #[diagnostic(
        code("STEP-003"),
        help("Split the calls into separate steps, one API per step")
    )]
    AmbiguousActionCall { names: Vec<String> },

    #[error("error expectation '{key}' is declared more than once")]
    #[diagnostic(code("STEP-004"), help("Keep a single error expectation per step"))]
    DuplicateCatch { key: String },

    #[error("error expectation '{key}' must be a scalar, found {found}")]
    #[diagnostic(
        code("STEP-005"),
        help("Use a plain value for the expected error, e.g. `catch: missing`")
    )]
    InvalidCatch { key: String, found: &'static str },

    #[error("action '{api}' must map to its parameters, found {found}")]
    #[diagnostic(
        code("STEP-006"),
        help("Map the API name to its parameters, or use `{{}}` for none")
    )]
    InvalidActionBody { api: String, found: &'static str },

    #[error("parameter '{name}' must be a scalar or a list of scalars, found {found}")]
    #[diagnostic(
        code("STEP-007"),
        help("Use a scalar or a flat list; structured payloads belong under `body`")
    )]
    UnsupportedParam { name: String, found: &'static str },

    #[error("malformed document: {details}")]
    #[diagnostic(
        code("STEP-008"),
        help("Check YAML syntax: indentation and quoting; numbers must be finite")
    )]
    Document { details: String },
}

impl MalformedKind {
    pub fn code(&self) -> &'static str {
        match self {
            MalformedKind::NotAMapping { .. } => "STEP-001",
            MalformedKind::NoActionCall => "STEP-002",
            MalformedKind::AmbiguousActionCall { .. } => "STEP-003",
            MalformedKind::DuplicateCatch { .. } => "STEP-004",
            MalformedKind::InvalidCatch { .. } => "STEP-005",
            MalformedKind::InvalidActionBody { .. } => "STEP-006",
            MalformedKind::UnsupportedParam { .. } => "STEP-007",
            MalformedKind::Document { .. } => "STEP-008",
        }
    }
}

impl FixSuggestion for MalformedKind {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            MalformedKind::NotAMapping { .. } => {
                Some("Write the step as a mapping: `api_name: { param: value }`")
            }
            MalformedKind::NoActionCall => Some("Add the API to call, e.g. `get: { index: test }`"),
            MalformedKind::AmbiguousActionCall { .. } => {
                Some("Split the calls into separate steps, one API per step")
            }
            MalformedKind::DuplicateCatch { .. } => Some("Keep a single error expectation per step"),
            MalformedKind::InvalidCatch { .. } => {
                Some("Use a plain value for the expected error, e.g. `catch: missing`")
            }
            MalformedKind::InvalidActionBody { .. } => {
                Some("Map the API name to its parameters, or use `{}` for none")
            }
            MalformedKind::UnsupportedParam { .. } => {
                Some("Use a scalar or a flat list; structured payloads belong under `body`")
            }
            MalformedKind::Document { .. } => {
                Some("Check YAML syntax: indentation and quoting; numbers must be finite")
            }
        }
    }
}

/// A step that could not be turned into an action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{}] {}: {}", .kind.code(), .context, .kind)]
pub struct MalformedStepError {
    kind: MalformedKind,
    context: ParseContext,
}

impl MalformedStepError {
    pub fn new(kind: MalformedKind, context: ParseContext) -> Self {
        Self { kind, context }
    }

    pub fn kind(&self) -> &MalformedKind {
        &self.kind
    }

    /// Where the offending step lives
    pub fn context(&self) -> &ParseContext {
        &self.context
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

// Forwards every diagnostic method to `kind`. Written by hand because
// `#[diagnostic(forward(kind))]` resolves `kind.code()` to the inherent
// `MalformedKind::code` instead of `Diagnostic::code`.
impl Diagnostic for MalformedStepError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Diagnostic::code(&self.kind)
    }

    fn severity(&self) -> Option<miette::Severity> {
        Diagnostic::severity(&self.kind)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Diagnostic::help(&self.kind)
    }

    fn url<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Diagnostic::url(&self.kind)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Diagnostic::source_code(&self.kind)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        Diagnostic::labels(&self.kind)
    }

    fn related<'a>(&'a self) -> Option<Box<dyn Iterator<Item = &'a dyn Diagnostic> + 'a>> {
        Diagnostic::related(&self.kind)
    }

    fn diagnostic_source(&self) -> Option<&dyn Diagnostic> {
        Diagnostic::diagnostic_source(&self.kind)
    }
}

impl FixSuggestion for MalformedStepError {
    fn fix_suggestion(&self) -> Option<&str> {
        self.kind.fix_suggestion()
    }
}
