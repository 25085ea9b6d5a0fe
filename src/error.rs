//! Errors and results.
use std::result::Result as StdResult;
use wasm_bindgen::JsValue;

// *************
// *** Error ***
// *************

#[derive(Debug)]
pub enum Error {
    /// A browser binding call failed.
    Binding(JsValue),

    /// Data could not be (de)serialized.
    Serde(String),
}

impl From<JsValue> for Error {
    fn from(err: JsValue) -> Self {
        Self::Binding(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;
