use crate::frame::Mounted;
use crate::input;
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer-move on the container and window resize for one mounted render.
///
/// Callbacks hold only a weak reference to the render, so a late event after
/// unmount is a no-op. Events arriving while a tick holds the render are
/// dropped rather than queued.
pub struct RenderListeners {
    target: web::HtmlElement,
    pointer_move: Closure<dyn FnMut(web::PointerEvent)>,
    resize: Closure<dyn FnMut()>,
}

impl RenderListeners {
    pub fn new(target: web::HtmlElement, slot: Weak<RefCell<Option<Mounted>>>) -> Self {
        let slot_move = slot.clone();
        let pointer_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = input::pointer_client(&ev);
            with_render(&slot_move, |r| r.on_pointer_move(pos.x, pos.y));
        }) as Box<dyn FnMut(web::PointerEvent)>);

        let resize = Closure::wrap(Box::new(move || {
            with_render(&slot, |r| r.on_resize());
        }) as Box<dyn FnMut()>);

        Self {
            target,
            pointer_move,
            resize,
        }
    }

    pub fn attach(&self) {
        _ = self.target.add_event_listener_with_callback(
            "pointermove",
            self.pointer_move.as_ref().unchecked_ref(),
        );
        if let Some(w) = web::window() {
            _ = w.add_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        }
    }

    pub fn detach(&self) {
        _ = self.target.remove_event_listener_with_callback(
            "pointermove",
            self.pointer_move.as_ref().unchecked_ref(),
        );
        if let Some(w) = web::window() {
            _ = w.remove_event_listener_with_callback(
                "resize",
                self.resize.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Run `f` on the live render, if there is one and nobody else holds it.
pub(crate) fn with_render(slot: &Weak<RefCell<Option<Mounted>>>, f: impl FnOnce(&mut Mounted)) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let Ok(mut guard) = slot.try_borrow_mut() else {
        return;
    };
    if let Some(render) = guard.as_mut() {
        f(render);
    }
}
