use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Pixels an element must clear past the bottom edge before it counts as seen.
pub const IN_VIEW_MARGIN: f64 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Reveal {
    /// Rises into place from `px` below.
    FadeUp(i32),
    SlideFromLeft,
    SlideFromRight,
    Pop,
    /// Rises like `FadeUp(60)` and settles at a tilt of `deg`.
    Tilt(i32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub reveal: Reveal,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

pub const NAV_DROP: Transition = Transition::new(Reveal::FadeUp(-100), 800);
pub const HERO_BLOCK: Transition = Transition::new(Reveal::FadeUp(100), 1000);
pub const HERO_TITLE: Transition = Transition::new(Reveal::FadeUp(50), 800).delayed(400);
pub const HERO_COPY: Transition = Transition::new(Reveal::FadeUp(30), 800).delayed(600);
pub const HERO_ACTIONS: Transition = Transition::new(Reveal::FadeUp(30), 800).delayed(800);
pub const HIGHLIGHT: Transition = Transition::new(Reveal::FadeUp(30), 600).delayed(1200);
pub const SECTION_HEADING: Transition = Transition::new(Reveal::FadeUp(50), 1000);
pub const CARD: Transition = Transition::new(Reveal::FadeUp(60), 600);
pub const STEP: Transition = Transition::new(Reveal::FadeUp(50), 600);
pub const FROM_LEFT: Transition = Transition::new(Reveal::SlideFromLeft, 1000);
pub const FROM_RIGHT: Transition = Transition::new(Reveal::SlideFromRight, 1000);
pub const CONFIRMATION: Transition = Transition::new(Reveal::Pop, 600);

impl Transition {
    pub const fn new(reveal: Reveal, duration_ms: u32) -> Self {
        Self { reveal, duration_ms, delay_ms: 0 }
    }

    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn with_reveal(mut self, reveal: Reveal) -> Self {
        self.reveal = reveal;
        self
    }

    /// Offsets the delay for the `index`-th item of a list.
    pub fn stagger(self, index: usize, step_ms: u32) -> Self {
        let extra = step_ms.saturating_mul(index as u32);
        self.delayed(self.delay_ms.saturating_add(extra))
    }

    fn hidden(&self) -> String {
        match self.reveal {
            Reveal::FadeUp(px) => format!("opacity: 0; transform: translateY({}px);", px),
            Reveal::SlideFromLeft => "opacity: 0; transform: translateX(-100px);".to_string(),
            Reveal::SlideFromRight => "opacity: 0; transform: translateX(100px);".to_string(),
            Reveal::Pop => "opacity: 0; transform: scale(0);".to_string(),
            Reveal::Tilt(_) => "opacity: 0; transform: translateY(60px) rotate(0deg);".to_string(),
        }
    }

    fn shown(&self) -> String {
        match self.reveal {
            Reveal::Tilt(deg) => format!("opacity: 1; transform: translateY(0) rotate({}deg);", deg),
            _ => "opacity: 1; transform: none;".to_string(),
        }
    }

    /// Inline style for the element in its hidden or revealed state.
    pub fn style(&self, active: bool) -> String {
        let state = if active { self.shown() } else { self.hidden() };
        format!(
            "{} transition: opacity {d}ms ease-out {w}ms, transform {d}ms ease-out {w}ms;",
            state,
            d = self.duration_ms,
            w = self.delay_ms,
        )
    }
}

pub fn entered_viewport(top: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin
}

/// False on the first render, true from then on; lets mount transitions run.
#[hook]
pub fn use_mounted() -> bool {
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }
    *mounted
}

/// Latches to true the first time `node` scrolls into the viewport.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let seen = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |deps: &(f64, f64)| {
                let viewport_height = deps.1;
                if !*seen {
                    if let Some(element) = node.cast::<Element>() {
                        let top = element.get_bounding_client_rect().top();
                        if entered_viewport(top, viewport_height, IN_VIEW_MARGIN) {
                            seen.set(true);
                        }
                    }
                }
                || ()
            },
            (scroll_y, viewport_height),
        );
    }
    *seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_adds_to_base_delay() {
        let t = HIGHLIGHT.stagger(3, 100);
        assert_eq!(t.delay_ms, 1500);
        assert_eq!(t.duration_ms, HIGHLIGHT.duration_ms);
        assert_eq!(CARD.stagger(0, 100), CARD);
    }

    #[test]
    fn styles_switch_between_states() {
        let hidden = CARD.delayed(200).style(false);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(60px);"));
        assert!(hidden.contains("opacity 600ms ease-out 200ms"));

        let shown = CARD.style(true);
        assert!(shown.starts_with("opacity: 1; transform: none;"));
    }

    #[test]
    fn tilt_keeps_its_angle_once_shown() {
        let t = CARD.with_reveal(Reveal::Tilt(-2));
        assert!(t.style(true).contains("rotate(-2deg)"));
        assert!(t.style(false).contains("rotate(0deg)"));
    }

    #[test]
    fn viewport_entry_respects_margin() {
        assert!(entered_viewport(500.0, 800.0, IN_VIEW_MARGIN));
        assert!(!entered_viewport(750.0, 800.0, IN_VIEW_MARGIN));
        assert!(entered_viewport(-2000.0, 800.0, IN_VIEW_MARGIN));
    }
}
