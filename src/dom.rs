use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Size a canvas to `width` x `height` CSS pixels with a backing store
/// scaled by devicePixelRatio. Returns the backing size.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, width: u32, height: u32) -> (u32, u32) {
    let dpr = device_pixel_ratio();
    let w_px = ((width as f64 * dpr).round() as u32).max(1);
    let h_px = ((height as f64 * dpr).round() as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", width));
    _ = style.set_property("height", &format!("{}px", height));
    (w_px, h_px)
}

/// Swap one class for another on an element.
pub fn swap_class(el: &web::Element, remove: &str, add: &str) {
    let cl = el.class_list();
    _ = cl.remove_1(remove);
    _ = cl.add_1(add);
}

/// Create `<tag class="..">text</tag>`.
pub fn element(
    document: &web::Document,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    if let Some(t) = text {
        el.set_text_content(Some(t));
    }
    Ok(el)
}

pub fn append(parent: &web::Element, child: &web::Element) -> anyhow::Result<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
