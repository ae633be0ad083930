//! Console logging and JsValue conversions shared by the placement exports
//!
//! Every failure crossing the JS boundary is logged through [`wasm_error!`]
//! before it is handed back as a string `JsValue`.

use crate::placement::PlacementError;
use crate::wasm_error;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

/// Debug line on the browser console, `[WASM]` prefixed
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Error line on the browser console; the rejection path of every export
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

/// Log a rejection and turn it into the `JsValue` thrown on the JS side
fn rejection(msg: String) -> JsValue {
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}

pub fn deserialize<T: DeserializeOwned>(value: JsValue, context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| rejection(format!("{}: {}", context, e)))
}

pub fn serialize<T: Serialize>(value: &T, context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| rejection(format!("{}: {}", context, e)))
}

pub fn placement_error(err: PlacementError) -> JsValue {
    rejection(err.to_string())
}

/// Parse a string argument into one of the domain enumerations
pub fn parse_arg<T: std::str::FromStr<Err = String>>(value: &str) -> Result<T, JsValue> {
    value.parse::<T>().map_err(rejection)
}
