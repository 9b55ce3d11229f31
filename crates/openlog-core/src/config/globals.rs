//! Host global variable source
//!
//! In a browser this reads `globalThis[name]`. Native hosts have no such
//! object, so a process-wide registry stands in for it.

use super::traits::VariableSource;

#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use parking_lot::RwLock;

#[cfg(not(target_arch = "wasm32"))]
static GLOBALS: Lazy<RwLock<HashMap<String, String>>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Define a global variable on native hosts
#[cfg(not(target_arch = "wasm32"))]
pub fn set_global(name: impl Into<String>, value: impl Into<String>) {
    GLOBALS.write().insert(name.into(), value.into());
}

/// Remove a global variable on native hosts
#[cfg(not(target_arch = "wasm32"))]
pub fn remove_global(name: &str) {
    GLOBALS.write().remove(name);
}

/// Reads variables from host globals, coerced to strings
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalVariables {
    _private: (),
}

impl GlobalVariables {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl VariableSource for GlobalVariables {
    fn name(&self) -> &str {
        "globals"
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn get_variable(&self, name: &str) -> Option<String> {
        GLOBALS.read().get(name).cloned()
    }

    #[cfg(target_arch = "wasm32")]
    fn get_variable(&self, name: &str) -> Option<String> {
        use wasm_bindgen::JsValue;

        let value = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(name)).ok()?;
        if value.is_undefined() {
            return None;
        }
        js_string(&value)
    }
}

/// JS `String(value)`: `true` → `"true"`, objects → `"[object Object]"`
#[cfg(target_arch = "wasm32")]
fn js_string(value: &wasm_bindgen::JsValue) -> Option<String> {
    use wasm_bindgen::{JsCast, JsValue};

    if let Some(text) = value.as_string() {
        return Some(text);
    }

    let convert: js_sys::Function = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("String"))
        .ok()?
        .dyn_into()
        .ok()?;
    convert.call1(&JsValue::UNDEFINED, value).ok()?.as_string()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn define(name: &str, value: &JsValue) {
        js_sys::Reflect::set(&js_sys::global(), &JsValue::from_str(name), value).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_globals_coerced_like_js_string() {
        let globals = GlobalVariables::new();

        define("OPENLOG_TEST_FLAG", &JsValue::TRUE);
        define("OPENLOG_TEST_NUMBER", &JsValue::from_f64(5.0));
        define("OPENLOG_TEST_OBJECT", &js_sys::Object::new());
        define("OPENLOG_TEST_ARRAY", &js_sys::Array::of2(&JsValue::from(1), &JsValue::from(2)));
        define("OPENLOG_TEST_NULL", &JsValue::NULL);

        assert_eq!(globals.get_variable("OPENLOG_TEST_FLAG"), Some("true".to_string()));
        assert_eq!(globals.get_variable("OPENLOG_TEST_NUMBER"), Some("5".to_string()));
        assert_eq!(globals.get_variable("OPENLOG_TEST_OBJECT"), Some("[object Object]".to_string()));
        assert_eq!(globals.get_variable("OPENLOG_TEST_ARRAY"), Some("1,2".to_string()));
        assert_eq!(globals.get_variable("OPENLOG_TEST_NULL"), Some("null".to_string()));
        assert_eq!(globals.get_variable("OPENLOG_TEST_MISSING"), None);
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_global_registry() {
        let globals = GlobalVariables::new();
        assert_eq!(globals.get_variable("OPENLOG_TEST_GLOBAL"), None);

        set_global("OPENLOG_TEST_GLOBAL", "true");
        assert_eq!(globals.get_variable("OPENLOG_TEST_GLOBAL"), Some("true".to_string()));

        remove_global("OPENLOG_TEST_GLOBAL");
        assert_eq!(globals.get_variable("OPENLOG_TEST_GLOBAL"), None);
    }
}
