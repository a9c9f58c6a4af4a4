//! Entrance animations.
//!
//! An [`AnimatedReveal`] describes when and how an element fades in; the
//! `Reveal` component attaches it to markup and CSS performs the transition.
//! [`RevealLatch`] is the per-element memory that keeps single-shot
//! animations from replaying.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Delay added per list position.
pub const STAGGER_INTERVAL_MS: u32 = 200;
pub const REVEAL_DURATION_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealTrigger {
    /// As soon as the element is mounted in the browser.
    OnMount,
    /// When the element first intersects the viewport.
    OnScrollIntoView,
}

/// Starting pose the element animates away from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealFrom {
    /// Transparent at half size.
    Scale,
    /// Transparent, 50px below its final position.
    Rise,
}

impl RevealFrom {
    fn modifier(self) -> &'static str {
        match self {
            Self::Scale => "reveal--scale",
            Self::Rise => "reveal--rise",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimatedReveal {
    pub trigger: RevealTrigger,
    pub play_once: bool,
    pub delay_ms: u32,
    pub duration_ms: u32,
    pub from: RevealFrom,
}

/// Delay for the item at `index` in a staggered list.
pub fn stagger_delay_ms(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(STAGGER_INTERVAL_MS)
}

impl AnimatedReveal {
    /// Play on mount, staggered by list position.
    pub fn on_mount(index: usize, from: RevealFrom) -> Self {
        Self {
            trigger: RevealTrigger::OnMount,
            play_once: true,
            delay_ms: stagger_delay_ms(index),
            duration_ms: REVEAL_DURATION_MS,
            from,
        }
    }

    /// Play once when scrolled into view, staggered by list position.
    pub fn on_scroll_into_view(index: usize, from: RevealFrom) -> Self {
        Self {
            trigger: RevealTrigger::OnScrollIntoView,
            play_once: true,
            delay_ms: stagger_delay_ms(index),
            duration_ms: REVEAL_DURATION_MS,
            from,
        }
    }

    /// Class list for the element in its hidden or revealed state.
    pub fn class(&self, shown: bool) -> String {
        let mut class = format!("reveal {}", self.from.modifier());
        if shown {
            class.push_str(" is-revealed");
        }
        class
    }

    /// Inline timing for the CSS transition.
    pub fn style(&self) -> String {
        format!("transition-duration: {}ms; transition-delay: {}ms", self.duration_ms, self.delay_ms)
    }
}

/// Per-element reveal memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealLatch {
    play_once: bool,
    played: bool,
    shown: bool,
}

impl RevealLatch {
    pub fn new(play_once: bool) -> Self {
        Self { play_once, played: false, shown: false }
    }

    /// Feed a trigger observation (`visible` = in view / mounted).
    ///
    /// Returns the new shown state when it changes. Once a single-shot latch
    /// has played, every later observation returns `None`.
    pub fn observe(&mut self, visible: bool) -> Option<bool> {
        if self.is_settled() || visible == self.shown {
            return None;
        }
        self.played |= visible;
        self.shown = visible;
        Some(visible)
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Whether further observations can be dropped entirely.
    pub fn is_settled(&self) -> bool {
        self.play_once && self.played
    }
}
