use crate::core::Rect;
use glam::Vec2;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    rect_from_dom(&el.get_bounding_client_rect())
}

#[inline]
pub fn rect_from_dom(r: &web::DomRect) -> Rect {
    Rect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

#[inline]
pub fn pointer_client(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Container size in whole CSS pixels.
#[inline]
pub fn element_size(el: &web::Element) -> (u32, u32) {
    (
        el.client_width().max(0) as u32,
        el.client_height().max(0) as u32,
    )
}
