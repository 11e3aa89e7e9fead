//! Action step parser
//!
//! Turns one `do:` step node into an [`Action`]:
//!
//! ```yaml
//! catch: missing          # optional error expectation
//! bulk:                   # exactly one API name
//!   refresh: true         # scalar param -> "true"
//!   field: [text, text1]  # list param   -> "text,text1"
//!   body:                 # one document per list element
//!     - index: { _index: test }
//!     - f1: v1
//! ```
//!
//! Body encodings:
//! - string: kept verbatim, never re-parsed
//! - mapping or other scalar: rendered to compact JSON
//! - sequence: one document per element, strings verbatim
//! - repeated `body:` keys: accumulated in source order

use indexmap::IndexMap;
use tracing::{debug, instrument, trace};

use crate::action::Action;
use crate::config::{ConfigError, ParserConfig};
use crate::context::ParseContext;
use crate::document::{self, Mapping, Node};
use crate::error::{MalformedKind, Result};

/// Stateless parser for action steps. Share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ActionStepParser {
    config: ParserConfig,
}

impl ActionStepParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser with custom reserved keys; the config is validated first
    pub fn with_config(config: ParserConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a step node into an action
    #[instrument(name = "parse_step", skip_all, fields(suite = %ctx.suite(), step = ?ctx.step_index()))]
    pub fn parse(&self, step: &Node, ctx: &ParseContext) -> Result<Action> {
        let mapping = step.as_mapping().ok_or_else(|| {
            ctx.malformed(MalformedKind::NotAMapping { found: step.kind() })
        })?;

        let catch = self.extract_catch(mapping, ctx)?;
        let (api, calls) = self.extract_call(mapping, ctx)?;

        let mut params = IndexMap::new();
        let mut bodies = Vec::new();

        for call in calls {
            let entries = match call {
                Node::Mapping(entries) => entries,
                Node::Scalar(document::Scalar::Null) => continue,
                other => {
                    return Err(ctx.malformed(MalformedKind::InvalidActionBody {
                        api: api.to_string(),
                        found: other.kind(),
                    }))
                }
            };

            for (key, value) in entries.iter() {
                if key == self.config.body_key() {
                    self.push_bodies(value, &mut bodies, ctx)?;
                } else {
                    params.insert(key.to_string(), self.param_text(key, value, ctx)?);
                }
            }
        }

        let action = Action::new(api.to_string(), catch, params, bodies);
        debug!(
            api = %action.api(),
            params = action.params().len(),
            bodies = action.bodies().len(),
            catch = ?action.catch(),
            "parsed action step"
        );
        Ok(action)
    }

    /// Load YAML text through the document model, then parse it
    pub fn parse_yaml(&self, text: &str, ctx: &ParseContext) -> Result<Action> {
        let node = document::from_yaml_str(text).map_err(|e| {
            ctx.malformed(MalformedKind::Document {
                details: e.to_string(),
            })
        })?;
        self.parse(&node, ctx)
    }

    /// Load JSON text through the document model, then parse it
    pub fn parse_json(&self, text: &str, ctx: &ParseContext) -> Result<Action> {
        let node = document::from_json_str(text).map_err(|e| {
            ctx.malformed(MalformedKind::Document {
                details: e.to_string(),
            })
        })?;
        self.parse(&node, ctx)
    }

    fn extract_catch(&self, mapping: &Mapping, ctx: &ParseContext) -> Result<Option<String>> {
        let key = self.config.catch_key();
        let mut values = mapping.get_all(key);

        let Some(value) = values.next() else {
            return Ok(None);
        };
        if values.next().is_some() {
            return Err(ctx.malformed(MalformedKind::DuplicateCatch {
                key: key.to_string(),
            }));
        }

        match value {
            Node::Scalar(scalar) => Ok(Some(scalar.to_text())),
            other => Err(ctx.malformed(MalformedKind::InvalidCatch {
                key: key.to_string(),
                found: other.kind(),
            })),
        }
    }

    /// The single API name, and every value written under it.
    ///
    /// A name repeated at top level is one call whose entries are read in
    /// source order.
    fn extract_call<'a>(
        &self,
        mapping: &'a Mapping,
        ctx: &ParseContext,
    ) -> Result<(&'a str, Vec<&'a Node>)> {
        let mut names: Vec<&str> = Vec::new();
        let mut calls = Vec::new();

        for (key, value) in mapping.iter() {
            if key == self.config.catch_key() {
                continue;
            }
            if !names.contains(&key) {
                names.push(key);
            }
            calls.push(value);
        }

        match names.as_slice() {
            [] => Err(ctx.malformed(MalformedKind::NoActionCall)),
            [api] => Ok((*api, calls)),
            _ => Err(ctx.malformed(MalformedKind::AmbiguousActionCall {
                names: names.iter().map(|n| n.to_string()).collect(),
            })),
        }
    }

    fn param_text(&self, name: &str, value: &Node, ctx: &ParseContext) -> Result<String> {
        let unsupported = |found: &'static str| {
            ctx.malformed(MalformedKind::UnsupportedParam {
                name: name.to_string(),
                found,
            })
        };

        match value {
            Node::Scalar(scalar) => Ok(scalar.to_text()),
            Node::Sequence(items) => {
                let parts = items
                    .iter()
                    .map(|item| match item {
                        Node::Scalar(scalar) => Ok(scalar.to_text()),
                        other => Err(unsupported(other.kind())),
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(parts.join(self.config.param_separator()))
            }
            Node::Mapping(_) => Err(unsupported(value.kind())),
        }
    }

    fn push_bodies(&self, value: &Node, bodies: &mut Vec<String>, ctx: &ParseContext) -> Result<()> {
        match value {
            Node::Sequence(items) if !items.is_empty() => {
                trace!(documents = items.len(), "multi-document body");
                for item in items {
                    bodies.push(self.body_document(item, ctx)?);
                }
            }
            // an empty list is still one document, so `has_body` holds
            other => bodies.push(self.body_document(other, ctx)?),
        }
        Ok(())
    }

    fn body_document(&self, node: &Node, ctx: &ParseContext) -> Result<String> {
        if let Some(text) = node.as_str() {
            trace!(len = text.len(), "verbatim body document");
            return Ok(text.to_string());
        }
        let rendered = document::render(node).map_err(|e| {
            ctx.malformed(MalformedKind::Document {
                details: e.to_string(),
            })
        })?;
        trace!(kind = node.kind(), len = rendered.len(), "rendered body document");
        Ok(rendered)
    }
}
