//! Directional slide animation for the wallet window.
//!
//! A single animation slot drives the whole interface: starting a new slide
//! while one is in flight overwrites it, and the superseded completion
//! callback is dropped without ever being invoked. Completion callbacks are
//! returned to the caller (cleared from the slot first) so a callback that
//! starts the next slide of a choreography is never re-entered by the tick
//! that detected completion.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

/// Fixed slide duration, matching the half-second window slide of the
/// original wallet.
pub const SLIDE_DURATION: Duration = Duration::from_millis(500);

/// Axis and sense of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Completion continuation, invoked with the owning context exactly once.
pub type SlideDone<C> = Box<dyn FnOnce(&mut C)>;

struct Slide<C> {
    direction: SlideDirection,
    inverted: bool,
    started: Instant,
    on_done: Option<SlideDone<C>>,
}

/// Drives at most one directional slide at a time.
///
/// Generic over the callback context `C` so the flow layer can hand out
/// continuations that mutate itself.
pub struct Animator<C> {
    slide: Option<Slide<C>>,
    /// Progress of the current slide in `[0, 1]`, already inverted when the
    /// slide plays backwards. 1.0 when idle (window at rest).
    progress: f32,
}

impl<C> Default for Animator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Animator<C> {
    pub fn new() -> Self {
        Self {
            slide: None,
            progress: 1.0,
        }
    }

    /// Whether a slide is currently in flight.
    pub fn active(&self) -> bool {
        self.slide.is_some()
    }

    /// Start a slide, overwriting any in-flight one. The previous completion
    /// callback is discarded, never invoked.
    pub fn animate(
        &mut self,
        direction: SlideDirection,
        inverted: bool,
        now: Instant,
        on_done: Option<SlideDone<C>>,
    ) {
        self.slide = Some(Slide {
            direction,
            inverted,
            started: now,
            on_done,
        });
        self.progress = if inverted { 1.0 } else { 0.0 };
    }

    /// Advance the animation. Returns the completion callback when this tick
    /// finished the slide; the slot is cleared before the callback is handed
    /// back, so the callback may immediately start another slide.
    pub fn tick(&mut self, now: Instant) -> Option<SlideDone<C>> {
        let slide = self.slide.as_mut()?;

        let elapsed = now.saturating_duration_since(slide.started);
        let mut t = (elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        let finished = elapsed >= SLIDE_DURATION;
        if slide.inverted {
            t = 1.0 - t;
        }
        self.progress = t;

        if finished {
            let done = self.slide.take().and_then(|s| s.on_done);
            return done;
        }
        None
    }

    /// Cell offset to apply to the wallet window for the current frame.
    ///
    /// Interpolates from one viewport dimension off-screen (along the slide
    /// axis) to the resting position. `(0, 0)` when idle.
    pub fn offset(&self, viewport: Rect) -> (i32, i32) {
        let Some(slide) = &self.slide else {
            return (0, 0);
        };

        let remaining = 1.0 - self.progress;
        match slide.direction {
            SlideDirection::Up => (0, -((f32::from(viewport.height) * remaining) as i32)),
            SlideDirection::Down => (0, (f32::from(viewport.height) * remaining) as i32),
            SlideDirection::Left => (-((f32::from(viewport.width) * remaining) as i32), 0),
            SlideDirection::Right => ((f32::from(viewport.width) * remaining) as i32, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Ctx;

    fn counter_cb(hits: &Rc<Cell<u32>>) -> SlideDone<Ctx> {
        let hits = Rc::clone(hits);
        Box::new(move |_ctx: &mut Ctx| hits.set(hits.get() + 1))
    }

    #[test]
    fn completes_after_duration_and_fires_callback_once() {
        let t0 = Instant::now();
        let hits = Rc::new(Cell::new(0));
        let mut anim: Animator<Ctx> = Animator::new();
        anim.animate(SlideDirection::Down, false, t0, Some(counter_cb(&hits)));

        assert!(anim.tick(t0 + Duration::from_millis(100)).is_none());
        assert!(anim.active());

        let done = anim.tick(t0 + Duration::from_millis(600));
        assert!(!anim.active(), "slot cleared before callback runs");
        let mut ctx = Ctx;
        done.expect("callback returned on completion")(&mut ctx);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn tick_after_completion_is_idempotent() {
        let t0 = Instant::now();
        let mut anim: Animator<Ctx> = Animator::new();
        anim.animate(SlideDirection::Up, false, t0, None);
        assert!(anim.tick(t0 + Duration::from_millis(500)).is_none());
        assert!(!anim.active());
        assert!(anim.tick(t0 + Duration::from_secs(5)).is_none());
        assert_eq!(anim.offset(Rect::new(0, 0, 80, 24)), (0, 0));
    }

    #[test]
    fn overwriting_slide_drops_previous_callback() {
        let t0 = Instant::now();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let mut anim: Animator<Ctx> = Animator::new();

        anim.animate(SlideDirection::Left, false, t0, Some(counter_cb(&first)));
        anim.animate(
            SlideDirection::Right,
            false,
            t0 + Duration::from_millis(200),
            Some(counter_cb(&second)),
        );

        // Past the first slide's would-be completion, before the second's.
        assert!(anim.tick(t0 + Duration::from_millis(600)).is_none());
        assert_eq!(first.get(), 0);

        let done = anim.tick(t0 + Duration::from_millis(800));
        let mut ctx = Ctx;
        done.expect("second slide completes")(&mut ctx);
        assert_eq!(first.get(), 0, "superseded callback never invoked");
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn offset_moves_toward_rest() {
        let t0 = Instant::now();
        let area = Rect::new(0, 0, 80, 40);
        let mut anim: Animator<Ctx> = Animator::new();
        anim.animate(SlideDirection::Down, false, t0, None);

        anim.tick(t0);
        let (_, dy_start) = anim.offset(area);
        assert_eq!(dy_start, 40, "starts a full viewport below rest");

        anim.tick(t0 + Duration::from_millis(250));
        let (_, dy_mid) = anim.offset(area);
        assert!(dy_mid > 0 && dy_mid < 40);
    }

    #[test]
    fn inverted_slide_ends_off_screen() {
        let t0 = Instant::now();
        let area = Rect::new(0, 0, 80, 40);
        let mut anim: Animator<Ctx> = Animator::new();
        anim.animate(SlideDirection::Up, true, t0, None);

        anim.tick(t0 + Duration::from_millis(499));
        let (_, dy) = anim.offset(area);
        assert!(dy < 0, "inverted up-slide heads off the top");
    }
}
