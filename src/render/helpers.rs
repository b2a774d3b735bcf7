// ABOUTME: General-purpose utility helpers exposed to every document
// ABOUTME: String, encoding, and host-introspection helpers in handlebars function style

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderError,
};
use uuid::Uuid;

/// Environment variable helper with an optional default value.
pub fn env_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let var_name = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("env helper requires a variable name parameter"))?;

    let default_value = h.param(1).and_then(|v| v.value().as_str()).unwrap_or("");

    let value = std::env::var(var_name).unwrap_or_else(|_| default_value.to_string());
    out.write(&value)?;
    Ok(())
}

/// Hostname helper - writes the system hostname.
pub fn hostname_helper(
    _: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let name = hostname::get().map_err(|_| RenderError::new("failed to get hostname"))?;
    out.write(&name.to_string_lossy())?;
    Ok(())
}

/// Timestamp helper - formats the current UTC time, default `%Y-%m-%d %H:%M:%S`.
pub fn timestamp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let format = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d %H:%M:%S");

    out.write(&Utc::now().format(format).to_string())?;
    Ok(())
}

/// UUID helper - writes a fresh v4 UUID.
pub fn uuid_helper(
    _: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    out.write(&Uuid::new_v4().to_string())?;
    Ok(())
}

pub fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = required_str(h, 0, "upper")?;
    out.write(&input.to_uppercase())?;
    Ok(())
}

pub fn lower_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = required_str(h, 0, "lower")?;
    out.write(&input.to_lowercase())?;
    Ok(())
}

pub fn trim_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = required_str(h, 0, "trim")?;
    out.write(input.trim())?;
    Ok(())
}

/// Indent helper - prefixes every line of the input with N spaces.
pub fn indent_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let width = h
        .param(0)
        .and_then(|v| v.value().as_u64())
        .ok_or_else(|| RenderError::new("indent helper requires a numeric width parameter"))?;
    let input = required_str(h, 1, "indent")?;

    out.write(&indent(width as usize, input))?;
    Ok(())
}

/// Nindent helper - like indent, preceded by a newline.
pub fn nindent_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let width = h
        .param(0)
        .and_then(|v| v.value().as_u64())
        .ok_or_else(|| RenderError::new("nindent helper requires a numeric width parameter"))?;
    let input = required_str(h, 1, "nindent")?;

    out.write("\n")?;
    out.write(&indent(width as usize, input))?;
    Ok(())
}

/// Default helper - falls back to the second parameter when the first is empty.
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    let fallback = h
        .param(1)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new("default helper requires a fallback parameter"))?;

    out.write(if value.is_empty() { fallback } else { value })?;
    Ok(())
}

/// Join helper - joins string array elements with a separator.
pub fn join_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let separator = h.param(0).and_then(|v| v.value().as_str()).unwrap_or(",");
    let array = h
        .param(1)
        .and_then(|v| v.value().as_array())
        .ok_or_else(|| RenderError::new("join helper requires an array parameter"))?;

    let parts: Result<Vec<&str>, RenderError> = array
        .iter()
        .map(|v| {
            v.as_str()
                .ok_or_else(|| RenderError::new("join helper array elements must be strings"))
        })
        .collect();

    out.write(&parts?.join(separator))?;
    Ok(())
}

pub fn base64_encode_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = required_str(h, 0, "base64_encode")?;
    out.write(&BASE64.encode(input.as_bytes()))?;
    Ok(())
}

pub fn base64_decode_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = required_str(h, 0, "base64_decode")?;

    let bytes = BASE64
        .decode(input)
        .map_err(|e| RenderError::new(format!("base64 decode error: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| RenderError::new(format!("utf-8 decode error: {e}")))?;

    out.write(&text)?;
    Ok(())
}

fn required_str<'a>(h: &'a Helper, index: usize, name: &str) -> Result<&'a str, RenderError> {
    h.param(index)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new(format!("{name} helper requires a string parameter")))
}

fn indent(width: usize, text: &str) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Register the utility helper set with a handlebars registry.
pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("env", Box::new(env_helper));
    handlebars.register_helper("hostname", Box::new(hostname_helper));
    handlebars.register_helper("timestamp", Box::new(timestamp_helper));
    handlebars.register_helper("uuid", Box::new(uuid_helper));
    handlebars.register_helper("upper", Box::new(upper_helper));
    handlebars.register_helper("lower", Box::new(lower_helper));
    handlebars.register_helper("trim", Box::new(trim_helper));
    handlebars.register_helper("indent", Box::new(indent_helper));
    handlebars.register_helper("nindent", Box::new(nindent_helper));
    handlebars.register_helper("default", Box::new(default_helper));
    handlebars.register_helper("join", Box::new(join_helper));
    handlebars.register_helper("base64_encode", Box::new(base64_encode_helper));
    handlebars.register_helper("base64_decode", Box::new(base64_decode_helper));
}
