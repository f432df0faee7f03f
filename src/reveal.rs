use crate::constants::{REVEAL_DELAY_ATTR, REVEAL_SELECTOR, REVEAL_VISIBLE_CLASS};
use crate::core::constants::REVEAL_THRESHOLD;
use crate::core::{reveal::parse_delay, Reveal};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Attach a one-shot fade-in observer to every `[data-reveal]` element.
pub fn wire_all(document: &web::Document) -> anyhow::Result<usize> {
    let nodes = document
        .query_selector_all(REVEAL_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut count = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        observe(&el)?;
        count += 1;
    }
    log::info!("[page] {} fade-in regions", count);
    Ok(count)
}

fn observe(el: &web::Element) -> anyhow::Result<()> {
    let delay = parse_delay(el.get_attribute(REVEAL_DELAY_ATTR).as_deref());
    let state = Rc::new(Cell::new(Reveal::new(delay)));
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html
            .style()
            .set_property("transition-delay", &state.get().transition_delay());
    }

    let target = el.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let intersecting = entries.iter().any(|e| {
                e.dyn_into::<web::IntersectionObserverEntry>()
                    .map(|e| e.is_intersecting())
                    .unwrap_or(false)
            });
            let mut reveal = state.get();
            if reveal.observe(intersecting) {
                _ = target.class_list().add_1(REVEAL_VISIBLE_CLASS);
                observer.disconnect();
            }
            state.set(reveal);
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    observer.observe(el);
    // The observer disconnects itself after the first trigger; the callback
    // lives as long as the page.
    callback.forget();
    Ok(())
}
