/// One-shot visibility latch for a fade-in region.
///
/// Starts hidden; the first intersecting observation flips it visible for
/// good. Later observations, including the element leaving the viewport,
/// change nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
    delay_ms: u32,
}

impl Reveal {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            visible: false,
            delay_ms,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Feed one observation. Returns `true` only on the transition, which is
    /// the caller's cue to stop observing.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.visible || !intersecting {
            return false;
        }
        self.visible = true;
        true
    }

    /// `transition-delay` value for the host element.
    pub fn transition_delay(&self) -> String {
        format!("{}ms", self.delay_ms)
    }
}

/// Parse a `data-delay` attribute; anything unparsable means no delay.
pub fn parse_delay(attr: Option<&str>) -> u32 {
    attr.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}
