use crate::constants::PRODUCT_LOADING_ID;
use web_sys as web;

// Loading indicator over the product render. It stays up until the GPU
// backend is ready, and for good if it never is.

const HIDDEN_CLASS: &str = "hidden";

#[inline]
fn indicator(document: &web::Document) -> Option<web::Element> {
    document.get_element_by_id(PRODUCT_LOADING_ID)
}

pub fn is_visible(document: &web::Document) -> bool {
    indicator(document)
        .map(|el| !el.class_list().contains(HIDDEN_CLASS))
        .unwrap_or(false)
}

pub fn set_visible(document: &web::Document, visible: bool) {
    let Some(el) = indicator(document) else {
        return;
    };
    let cl = el.class_list();
    if visible {
        _ = cl.remove_1(HIDDEN_CLASS);
        _ = el.remove_attribute("aria-hidden");
    } else {
        _ = cl.add_1(HIDDEN_CLASS);
        _ = el.set_attribute("aria-hidden", "true");
    }
    log::debug!("[mount] loading indicator visible={}", visible);
}
