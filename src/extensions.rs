use std::fmt::Debug;
use wasm_bindgen::JsValue;

/// Converts Rust-side failures into the `JsValue` errors wasm-bindgen
/// expects at the JS boundary.
pub trait ResultExt<T> {
    fn ok_or_js_err(self) -> Result<T, JsValue>;
    fn ok_or_js_err_with_msg(self, msg: &str) -> Result<T, JsValue>;
}

impl<T, E: Debug> ResultExt<T> for Result<T, E> {
    fn ok_or_js_err(self) -> Result<T, JsValue> {
        self.map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    fn ok_or_js_err_with_msg(self, msg: &str) -> Result<T, JsValue> {
        self.map_err(|e| JsValue::from_str(&format!("{}: {:?}", msg, e)))
    }
}

pub trait OptionExt<T> {
    fn ok_or_js_err_with_msg(self, msg: &str) -> Result<T, JsValue>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_js_err_with_msg(self, msg: &str) -> Result<T, JsValue> {
        self.ok_or_else(|| JsValue::from_str(msg))
    }
}
