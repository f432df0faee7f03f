//! Page-shell UI state: navbar scroll flag and mobile menu.

use crate::constants::SCROLLED_THRESHOLD_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    scrolled: bool,
    menu_open: bool,
}

impl ShellState {
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Track the window scroll offset. Returns `true` when the flag changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > SCROLLED_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn open_menu(&mut self) -> bool {
        let changed = !self.menu_open;
        self.menu_open = true;
        changed
    }

    pub fn close_menu(&mut self) -> bool {
        let changed = self.menu_open;
        self.menu_open = false;
        changed
    }

    /// Body `overflow` while the menu is in this state; the page must not
    /// scroll behind an open menu.
    pub fn body_overflow(&self) -> &'static str {
        if self.menu_open {
            "hidden"
        } else {
            "unset"
        }
    }

    pub fn nav_class(&self) -> &'static str {
        if self.scrolled {
            "nav--scrolled"
        } else {
            "nav--top"
        }
    }

    pub fn menu_class(&self) -> &'static str {
        if self.menu_open {
            "menu--open"
        } else {
            "menu--closed"
        }
    }
}

/// In-page anchor for a nav label: lowercase, first space becomes a dash.
pub fn anchor_for(label: &str) -> String {
    format!("#{}", label.to_lowercase().replacen(' ', "-", 1))
}

/// Repeat `items` back to back so a track translated by `-1/copies` of its
/// width loops without a visible jump.
pub fn marquee_track<T: Clone>(items: &[T], copies: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * copies);
    for _ in 0..copies {
        out.extend_from_slice(items);
    }
    out
}

/// Same as [`marquee_track`] over the reversed list, for the counter-moving row.
pub fn reversed_track<T: Clone>(items: &[T], copies: usize) -> Vec<T> {
    let reversed: Vec<T> = items.iter().rev().cloned().collect();
    marquee_track(&reversed, copies)
}
