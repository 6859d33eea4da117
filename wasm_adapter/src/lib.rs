//! WASM adapter exposing csvgrid parsing to JS

use csvgrid::{CsvParser, ParseOptions};
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

/// Parse CSV text into an array of arrays of strings
///
/// `separator` and `quote` default to `,` and `"` when missing or empty.
/// Values longer than one character throw.
#[wasm_bindgen]
pub fn parse(input: &str, separator: Option<String>, quote: Option<String>) -> Result<JsValue, JsValue> {
    let options = resolve_options(separator.as_deref(), quote.as_deref())?;
    let rows = CsvParser::from(options).parse(input);
    to_value(&rows).map_err(JsValue::from)
}

fn resolve_options(separator: Option<&str>, quote: Option<&str>) -> Result<ParseOptions, JsValue> {
    ParseOptions::from_strs(separator, quote).map_err(|e| JsValue::from_str(&e.to_string()))
}
