//! JSON request handling.
//!
//! The entry points here accept loosely-typed values, the way text and
//! option values arrive from a form or another process. They are the only
//! place the crate reports [`OutdentError::InvalidArgument`]:
//!
//! - `text` must be a JSON string;
//! - for collapsing, `maxEmptyLines` must be a JSON number.
//!
//! Everything else is normalized: numbers are floored and clamped, a
//! non-object `options` value counts as `{}`.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use log::{debug, warn};
use serde_json::Value;

use crate::error::OutdentError;
use crate::options::{self, PartialOptions};
use crate::transform;

pub mod protocol;

use protocol::{Request, Response};

// ---------------------------------------------------------------------------
// Loosely-typed entry points
// ---------------------------------------------------------------------------

/// Collapse blank lines in `text` to at most `max_empty_lines`.
pub fn collapse_value(text: &Value, max_empty_lines: &Value) -> Result<String, OutdentError> {
    let text = text
        .as_str()
        .ok_or_else(|| OutdentError::invalid_argument("text", "string", text))?;
    let max = options::number_value(max_empty_lines).ok_or_else(|| {
        OutdentError::invalid_argument("maxEmptyLines", "number", max_empty_lines)
    })?;

    Ok(transform::collapse_blank_lines(
        text,
        options::clamp_max_empty_lines(max),
    ))
}

/// Strip common indentation from `text` using the options found in `options`.
pub fn strip_value(text: &Value, options: &Value) -> Result<String, OutdentError> {
    let text = text
        .as_str()
        .ok_or_else(|| OutdentError::invalid_argument("text", "string", text))?;
    let options = PartialOptions::from_value(options).validate();

    Ok(transform::strip_common_indentation(text, &options))
}

/// Dispatch a parsed request.
pub fn handle(request: &Request) -> Response {
    let result = match request {
        Request::Collapse {
            text,
            max_empty_lines,
        } => collapse_value(text, max_empty_lines),
        Request::Strip { text, options } => strip_value(text, options),
    };

    if let Err(error) = &result {
        warn!("request rejected: {error}");
    }
    Response::from(result)
}

// ---------------------------------------------------------------------------
// stdin / stdout driver
// ---------------------------------------------------------------------------

/// Read one JSON request from stdin and write the JSON response to stdout.
pub fn run() -> Result<()> {
    let mut stdin_buf = String::new();
    std::io::stdin()
        .read_to_string(&mut stdin_buf)
        .context("failed reading request from stdin")?;

    let response = handle_raw(&stdin_buf)?;

    let json = serde_json::to_string(&response).context("failed to serialize response")?;
    std::io::stdout()
        .write_all(json.as_bytes())
        .context("failed writing response to stdout")?;

    Ok(())
}

/// Parse and handle a raw request body.
pub fn handle_raw(raw: &str) -> Result<Response> {
    let request: Request = serde_json::from_str(raw).context("invalid request JSON")?;
    debug!("request: {}", summarize(&request));
    Ok(handle(&request))
}

fn summarize(request: &Request) -> String {
    match request {
        Request::Collapse { text, .. } => format!("collapse ({})", describe_text(text)),
        Request::Strip { text, .. } => format!("strip ({})", describe_text(text)),
    }
}

fn describe_text(text: &Value) -> String {
    match text.as_str() {
        Some(s) => format!("{} bytes", s.len()),
        None => crate::error::json_type_name(text).to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
