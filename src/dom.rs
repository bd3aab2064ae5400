use crate::constants::heap_mib;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Size the canvas backing store to its CSS box times `scale` and return the
/// CSS size in logical pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, scale: f64) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    let css_w = rect.width().max(1.0);
    let css_h = rect.height().max(1.0);
    canvas.set_width(((css_w * scale) as u32).max(1));
    canvas.set_height(((css_h * scale) as u32).max(1));
    (css_w, css_h)
}

/// True when `name` is defined on the global object.
pub fn has_global(window: &web::Window, name: &str) -> bool {
    Reflect::get(window.as_ref(), &JsValue::from_str(name))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false)
}

/// `performance.memory.usedJSHeapSize` in MiB, where the browser exposes it.
pub fn used_heap_mb(window: &web::Window) -> Option<u32> {
    let performance = window.performance()?;
    let memory = Reflect::get(performance.as_ref(), &JsValue::from_str("memory")).ok()?;
    if memory.is_undefined() || memory.is_null() {
        return None;
    }
    let used = Reflect::get(&memory, &JsValue::from_str("usedJSHeapSize")).ok()?;
    heap_mib(used.as_f64()?)
}
