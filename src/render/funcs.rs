// ABOUTME: Domain function library merged over the utility helpers
// ABOUTME: Structural YAML/JSON conversions, external-command execution, and inert compatibility stubs

use std::process::Command;

use handlebars::{
    Context, Handlebars, Helper, HelperDef, RenderContext, RenderError, ScopedJson,
};
use serde_json::Value as Json;

use crate::data::Values;

/// Marker returned by every compatibility stub.
pub const NOT_IMPLEMENTED: &str = "[not implemented]";

/// Names carried over from a richer templating ecosystem so documents
/// written against it keep parsing and executing. Their semantics are
/// intentionally inert.
const STUB_NAMES: &[&str] = &["include", "tpl", "required", "lookup"];

/// Register the domain functions. Called after the utility helpers so these
/// entries take precedence on name collision.
pub fn register_funcs(handlebars: &mut Handlebars) {
    handlebars.register_helper("run", Box::new(RunHelper));
    handlebars.register_helper("toYaml", Box::new(ToYamlHelper));
    handlebars.register_helper("fromYaml", Box::new(FromYamlHelper));
    handlebars.register_helper("fromYamlArray", Box::new(FromYamlArrayHelper));
    handlebars.register_helper("toJson", Box::new(ToJsonHelper));
    handlebars.register_helper("fromJson", Box::new(FromJsonHelper));
    handlebars.register_helper("fromJsonArray", Box::new(FromJsonArrayHelper));

    for name in STUB_NAMES {
        handlebars.register_helper(name, Box::new(NotImplementedHelper));
    }
}

/// Strip a single trailing newline, leaving everything else intact.
fn trim_newline(s: &str) -> &str {
    s.strip_suffix('\n').unwrap_or(s)
}

/// `run` - execute an external command and capture its combined output.
///
/// Failure never surfaces as a render error: the substitution engine has no
/// structured-error channel at expression level, so spawn failures and
/// non-zero exits are encoded into the returned string as
/// `"<output>; error: <reason>"` or `"error: <reason>"`.
pub struct RunHelper;

impl HelperDef for RunHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'reg, 'rc>, RenderError> {
        let Some(command) = h.param(0).and_then(|v| v.value().as_str()) else {
            return Ok(string_value("error: run requires a command parameter"));
        };

        let args: Vec<String> = h.params()[1..]
            .iter()
            .map(|p| match p.value() {
                Json::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect();

        Ok(string_value(&run_command(command, &args)))
    }
}

fn run_command(command: &str, args: &[String]) -> String {
    let output = match Command::new(command).args(args).output() {
        Ok(output) => output,
        Err(err) => return format!("error: {err}"),
    };

    // stdout first, then stderr; the exact interleaving of the child is not
    // reconstructable from separate pipes.
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    if output.status.success() {
        return trim_newline(&combined).to_string();
    }

    if combined.is_empty() {
        format!("error: {}", output.status)
    } else {
        format!("{}; error: {}", trim_newline(&combined), output.status)
    }
}

/// `toYaml` - encode a value as YAML text, trailing newline trimmed.
/// Encoding failure yields an empty string.
pub struct ToYamlHelper;

impl HelperDef for ToYamlHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'reg, 'rc>, RenderError> {
        let value = required_param(h, 0, "toYaml")?;
        let text = serde_yaml::to_string(value)
            .map(|s| trim_newline(&s).to_string())
            .unwrap_or_default();
        Ok(string_value(&text))
    }
}

/// `toJson` - encode a value as JSON text, trailing newline trimmed.
/// Encoding failure yields an empty string.
pub struct ToJsonHelper;

impl HelperDef for ToJsonHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'reg, 'rc>, RenderError> {
        let value = required_param(h, 0, "toJson")?;
        let text = serde_json::to_string(value)
            .map(|s| trim_newline(&s).to_string())
            .unwrap_or_default();
        Ok(string_value(&text))
    }
}

/// `fromYaml` - decode YAML text into a mapping. Decode failure yields a
/// mapping with a single `Error` key holding the failure message.
pub struct FromYamlHelper;

impl HelperDef for FromYamlHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'reg, 'rc>, RenderError> {
        let text = required_str(h, 0, "fromYaml")?;
        let map = serde_yaml::from_str::<Values>(text).unwrap_or_else(|err| error_map(&err));
        Ok(ScopedJson::Derived(Json::Object(map)))
    }
}

/// `fromYamlArray` - decode a YAML sequence. Decode failure yields a
/// one-element sequence containing the failure message.
pub struct FromYamlArrayHelper;

impl HelperDef for FromYamlArrayHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'reg, 'rc>, RenderError> {
        let text = required_str(h, 0, "fromYamlArray")?;
        let seq = serde_yaml::from_str::<Vec<Json>>(text)
            .unwrap_or_else(|err| vec![Json::String(err.to_string())]);
        Ok(ScopedJson::Derived(Json::Array(seq)))
    }
}

/// `fromJson` - JSON analogue of `fromYaml`, same error-swallowing contract.
pub struct FromJsonHelper;

impl HelperDef for FromJsonHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'reg, 'rc>, RenderError> {
        let text = required_str(h, 0, "fromJson")?;
        let map = serde_json::from_str::<Values>(text).unwrap_or_else(|err| error_map(&err));
        Ok(ScopedJson::Derived(Json::Object(map)))
    }
}

/// `fromJsonArray` - JSON analogue of `fromYamlArray`.
pub struct FromJsonArrayHelper;

impl HelperDef for FromJsonArrayHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'reg, 'rc>, RenderError> {
        let text = required_str(h, 0, "fromJsonArray")?;
        let seq = serde_json::from_str::<Vec<Json>>(text)
            .unwrap_or_else(|err| vec![Json::String(err.to_string())]);
        Ok(ScopedJson::Derived(Json::Array(seq)))
    }
}

/// Constant-response stub for names kept only so prior-ecosystem documents
/// keep executing. Ignores every argument.
pub struct NotImplementedHelper;

impl HelperDef for NotImplementedHelper {
    fn call_inner<'reg: 'rc, 'rc>(
        &self,
        _: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
    ) -> Result<ScopedJson<'reg, 'rc>, RenderError> {
        Ok(string_value(NOT_IMPLEMENTED))
    }
}

fn string_value<'reg, 'rc>(s: &str) -> ScopedJson<'reg, 'rc> {
    ScopedJson::Derived(Json::String(s.to_string()))
}

fn error_map(err: &dyn std::error::Error) -> Values {
    let mut map = Values::new();
    map.insert("Error".to_string(), Json::String(err.to_string()));
    map
}

fn required_param<'a>(
    h: &'a Helper<'_, '_>,
    index: usize,
    name: &str,
) -> Result<&'a Json, RenderError> {
    h.param(index)
        .map(|p| p.value())
        .ok_or_else(|| RenderError::new(format!("{name} requires a value parameter")))
}

fn required_str<'a>(
    h: &'a Helper<'_, '_>,
    index: usize,
    name: &str,
) -> Result<&'a str, RenderError> {
    h.param(index)
        .and_then(|p| p.value().as_str())
        .ok_or_else(|| RenderError::new(format!("{name} requires a string parameter")))
}
