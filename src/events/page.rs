use crate::constants::{MENU_CLOSE_ID, MENU_OPEN_ID, MOBILE_LINKS_ID, MOBILE_MENU_ID, NAV_ID};
use crate::core::ShellState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Wire navbar scroll styling and the mobile menu. Lives for the page.
pub fn wire_shell(document: &web::Document) {
    let shell = Rc::new(RefCell::new(ShellState::default()));
    apply_nav(document, &shell.borrow());
    apply_menu(document, &shell.borrow());
    wire_scroll(document, shell.clone());

    {
        let shell = shell.clone();
        let doc = document.clone();
        dom::add_click_listener(document, MENU_OPEN_ID, move || {
            if shell.borrow_mut().open_menu() {
                apply_menu(&doc, &shell.borrow());
            }
        });
    }
    {
        let shell = shell.clone();
        let doc = document.clone();
        dom::add_click_listener(document, MENU_CLOSE_ID, move || {
            if shell.borrow_mut().close_menu() {
                apply_menu(&doc, &shell.borrow());
            }
        });
    }
    // Following a link inside the open menu closes it.
    {
        let doc = document.clone();
        dom::add_click_listener(document, MOBILE_LINKS_ID, move || {
            if shell.borrow_mut().close_menu() {
                apply_menu(&doc, &shell.borrow());
            }
        });
    }
}

fn wire_scroll(document: &web::Document, shell: Rc<RefCell<ShellState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let doc = document.clone();
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let y = win.scroll_y().unwrap_or(0.0);
        if shell.borrow_mut().on_scroll(y) {
            apply_nav(&doc, &shell.borrow());
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn apply_nav(document: &web::Document, shell: &ShellState) {
    if let Some(nav) = document.get_element_by_id(NAV_ID) {
        let other = if shell.is_scrolled() {
            "nav--top"
        } else {
            "nav--scrolled"
        };
        dom::swap_class(&nav, other, shell.nav_class());
    }
}

fn apply_menu(document: &web::Document, shell: &ShellState) {
    if let Some(menu) = document.get_element_by_id(MOBILE_MENU_ID) {
        let other = if shell.is_menu_open() {
            "menu--closed"
        } else {
            "menu--open"
        };
        dom::swap_class(&menu, other, shell.menu_class());
    }
    if let Some(body) = document.body() {
        _ = body.style().set_property("overflow", shell.body_overflow());
    }
    log::debug!("[page] menu open={}", shell.is_menu_open());
}
