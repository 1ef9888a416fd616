//! Binding to the JsBarcode library loaded by `index.html`.

use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = JsBarcode, catch)]
    fn js_barcode(target: &Element, value: &str, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Draw `value` as a CODE128 barcode into an `<svg>` element.
pub(crate) fn render_barcode(target: &Element, value: &str) -> Result<(), JsValue> {
    let options = Object::new();
    Reflect::set(&options, &"format".into(), &"CODE128".into())?;
    Reflect::set(&options, &"displayValue".into(), &JsValue::TRUE)?;
    Reflect::set(&options, &"height".into(), &JsValue::from_f64(80.0))?;
    js_barcode(target, value, &options)?;
    Ok(())
}
