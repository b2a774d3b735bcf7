// ABOUTME: Thin wrapper around the handlebars substitution engine
// ABOUTME: Exposes parse and execute against a shared function library

use std::io::Write;

use handlebars::Handlebars;
use tracing::debug;

use super::error::{RenderError, Result};
use super::{funcs, helpers};
use crate::data::DocData;

/// The substitution engine with the full function library registered.
///
/// One instance serves a whole render pass: templates are registered under
/// their document names and executed independently, so no parse state is
/// shared between documents.
pub struct Engine {
    registry: Handlebars<'static>,
}

impl Engine {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();

        // Documents are arbitrary text, not HTML.
        registry.register_escape_fn(handlebars::no_escape);
        registry.set_strict_mode(false);

        helpers::register_helpers(&mut registry);
        // Registered last so these names win on collision.
        funcs::register_funcs(&mut registry);

        Self { registry }
    }

    /// Parse a document's content, registering it under the given name.
    /// The name doubles as the engine's diagnostic identifier.
    pub fn parse(&mut self, name: &str, content: &str) -> Result<()> {
        debug!("Parsing document: {}", name);
        self.registry
            .register_template_string(name, content)
            .map_err(|source| RenderError::Parse {
                name: name.to_string(),
                source,
            })
    }

    /// Execute a previously parsed document against its context, writing
    /// rendered output to the sink.
    pub fn execute<W: Write>(&self, name: &str, data: &DocData, sink: W) -> Result<()> {
        debug!("Executing document: {}", name);
        self.registry
            .render_to_write(name, data, sink)
            .map_err(|source| RenderError::Execute {
                name: name.to_string(),
                source,
            })
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Document, Environment, MetaData, Values};
    use serde_json::json;

    fn test_meta() -> MetaData {
        let mut env = Environment::new();
        env.insert("USER".to_string(), "alice".to_string());

        let mut values = Values::new();
        values.insert("greeting".to_string(), json!("hi"));

        MetaData::new("test", env, values)
    }

    #[test]
    fn test_parse_and_execute() {
        let meta = test_meta();
        let doc = Document::new("doc", "{{greeting}} {{Env.USER}}", false);

        let mut engine = Engine::new();
        engine.parse(&doc.filename, &doc.content).unwrap();

        let mut sink = Vec::new();
        engine
            .execute(&doc.filename, &DocData::new(&meta, &doc), &mut sink)
            .unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), "hi alice");
    }

    #[test]
    fn test_parse_failure_on_malformed_syntax() {
        let mut engine = Engine::new();
        let err = engine.parse("bad", "{{#if x}}unclosed").unwrap_err();
        assert!(matches!(err, RenderError::Parse { .. }));
    }

    #[test]
    fn test_execute_failure_on_unknown_function() {
        let meta = test_meta();
        let doc = Document::new("doc", "{{definitelyNotAFunction \"x\"}}", false);

        let mut engine = Engine::new();
        engine.parse(&doc.filename, &doc.content).unwrap();

        let err = engine
            .execute(&doc.filename, &DocData::new(&meta, &doc), Vec::new())
            .unwrap_err();
        assert!(matches!(err, RenderError::Execute { .. }));
    }

    #[test]
    fn test_domain_funcs_shadow_utility_helpers() {
        // Both helpers.rs and funcs.rs could claim a name; funcs must win.
        // `lookup` is also a handlebars built-in, so it covers that case too.
        let meta = test_meta();
        let doc = Document::new("doc", "{{lookup \"v1\" \"Pod\" \"ns\" \"nm\"}}", false);

        let mut engine = Engine::new();
        engine.parse(&doc.filename, &doc.content).unwrap();

        let mut sink = Vec::new();
        engine
            .execute(&doc.filename, &DocData::new(&meta, &doc), &mut sink)
            .unwrap();
        assert_eq!(String::from_utf8(sink).unwrap(), funcs::NOT_IMPLEMENTED);
    }
}
