//! rest-step - action-step parser for YAML REST API test suites
//!
//! ## Module Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        DOCUMENT MODEL                        │
//! │  document/  YAML/JSON → Node (duplicate keys preserved)      │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          PARSING                             │
//! │  parser     Node → Action (api, params, catch, bodies)       │
//! │  action     Parsed call, joined wire payload                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Responsibilities
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`document`] | `Node` tree, canonical JSON rendering, structural comparison |
//! | [`parser`] | `ActionStepParser`: step node → `Action` |
//! | [`action`] | `Action` accessors and joined body |
//! | [`context`] | `ParseContext`: suite/file/step metadata for errors |
//! | [`config`] | `ParserConfig`: reserved key names |
//! | [`error`] | `MalformedStepError` with codes and fix suggestions |
//!
//! ## Example
//!
//! ```
//! use rest_step::{ActionStepParser, ParseContext};
//!
//! let yaml = "
//! bulk:
//!   refresh: true
//!   body:
//!     - index: { _index: test_index }
//!     - f1: v1
//! ";
//! let action = ActionStepParser::new()
//!     .parse_yaml(yaml, &ParseContext::new("bulk"))
//!     .unwrap();
//!
//! assert_eq!(action.api(), "bulk");
//! assert_eq!(action.param("refresh"), Some("true"));
//! assert_eq!(action.bodies().len(), 2);
//! ```

// ═══════════════════════════════════════════════════════════════
// DOCUMENT MODEL
// ═══════════════════════════════════════════════════════════════
pub mod document;

// ═══════════════════════════════════════════════════════════════
// PARSING
// ═══════════════════════════════════════════════════════════════
pub mod action;
pub mod parser;

// ═══════════════════════════════════════════════════════════════
// CROSS-CUTTING - Context, configuration, errors
// ═══════════════════════════════════════════════════════════════
pub mod config;
pub mod context;
pub mod error;

// ═══════════════════════════════════════════════════════════════
// PUBLIC API RE-EXPORTS
// ═══════════════════════════════════════════════════════════════
pub use action::Action;
pub use config::{ConfigError, ParserConfig};
pub use context::ParseContext;
pub use document::Node;
pub use error::{FixSuggestion, MalformedKind, MalformedStepError, Result};
pub use parser::ActionStepParser;
