//! Handlebars helpers shared by every template.
//!
//! All four helpers are total: malformed input degrades to an empty or
//! fallback string rather than failing the render. The backend PDF
//! generator registers the same helper set, so any change here is a
//! cross-system behavior change.

use chrono::{DateTime, NaiveDate};
use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext, Renderable};
use serde_json::Value;

/// Formats a date-like string as short month plus year, e.g. "Mar 2024".
///
/// Empty input stays empty, any casing of "present" becomes "Present",
/// and anything unparseable is passed through unchanged. Only the ISO
/// shapes the builder forms emit are parsed; non-ISO strings such as
/// "03/15/2024" or "May 2023" fall through as-is, and the backend's
/// renderer must treat them the same way.
pub(crate) fn format_date(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    if input.eq_ignore_ascii_case("present") {
        return "Present".to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    // Month and year-only precision, as the builder forms produce.
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{input}-01"), "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{input}-01-01"), "%Y-%m-%d") {
        return date.format("%b %Y").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return dt.format("%b %Y").to_string();
    }
    input.to_string()
}

pub(crate) fn format_date_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let raw = h.param(0).and_then(|p| p.value().as_str()).unwrap_or("");
    out.write(&format_date(raw))?;
    Ok(())
}

/// `{{join list ", "}}` — joins an array with a separator. A non-array
/// first parameter produces nothing; a non-string separator falls back
/// to ", ".
pub(crate) fn join_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let Some(items) = h.param(0).and_then(|p| p.value().as_array()) else {
        return Ok(());
    };
    let separator = h
        .param(1)
        .and_then(|p| p.value().as_str())
        .unwrap_or(", ");
    let joined = items
        .iter()
        .map(scalar_text)
        .collect::<Vec<_>>()
        .join(separator);
    out.write(&joined)?;
    Ok(())
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// `{{#hasItems list}}...{{else}}...{{/hasItems}}` — renders the main
/// block only for a non-empty array, the inverse block otherwise.
pub(crate) fn has_items_helper<'reg, 'rc>(
    h: &Helper<'rc>,
    r: &'reg Handlebars<'reg>,
    ctx: &'rc Context,
    rc: &mut RenderContext<'reg, 'rc>,
    out: &mut dyn Output,
) -> HelperResult {
    let non_empty = h
        .param(0)
        .and_then(|p| p.value().as_array())
        .is_some_and(|items| !items.is_empty());
    let block = if non_empty { h.template() } else { h.inverse() };
    if let Some(t) = block {
        t.render(r, ctx, rc, out)?;
    }
    Ok(())
}

/// `{{#ifCond a "op" b}}...{{else}}...{{/ifCond}}` — comparison gate for
/// layout branches not covered by plain truthiness. Supported operators
/// are `==`, `===`, `||` and `&&`; anything else selects the inverse
/// block.
pub(crate) fn if_cond_helper<'reg, 'rc>(
    h: &Helper<'rc>,
    r: &'reg Handlebars<'reg>,
    ctx: &'rc Context,
    rc: &mut RenderContext<'reg, 'rc>,
    out: &mut dyn Output,
) -> HelperResult {
    let v1 = h.param(0).map(|p| p.value()).unwrap_or(&Value::Null);
    let operator = h.param(1).and_then(|p| p.value().as_str()).unwrap_or("");
    let v2 = h.param(2).map(|p| p.value()).unwrap_or(&Value::Null);

    let matched = match operator {
        // JSON values have no loose/strict distinction, so both
        // operators compare structural equality.
        "==" | "===" => v1 == v2,
        "||" => truthy(v1) || truthy(v2),
        "&&" => truthy(v1) && truthy(v2),
        _ => false,
    };
    let block = if matched { h.template() } else { h.inverse() };
    if let Some(t) = block {
        t.render(r, ctx, rc, out)?;
    }
    Ok(())
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Registers the full helper set on an engine instance.
pub(crate) fn register_all(engine: &mut Handlebars<'static>) {
    engine.register_helper("formatDate", Box::new(format_date_helper));
    engine.register_helper("join", Box::new(join_helper));
    engine.register_helper("hasItems", Box::new(has_items_helper));
    engine.register_helper("ifCond", Box::new(if_cond_helper));
}
