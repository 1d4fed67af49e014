//! JSON output for lookup results.

use serde::Serialize;
use std::error::Error;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}").into())
}
