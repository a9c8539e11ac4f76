// ABOUTME: Tick-driven animations: typed headline, loading splash, and the
// staggered skill-bar reveal

use std::time::{Duration, Instant};

const TYPE_SPEED: Duration = Duration::from_millis(100);
const BACK_SPEED: Duration = Duration::from_millis(100);
const BACK_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypedPhase {
    Typing,
    Holding,
    Deleting,
}

/// Rotating typed-and-deleted headline text, advanced from the app tick.
#[derive(Debug)]
pub struct TypedText {
    strings: &'static [&'static str],
    index: usize,
    shown: usize,
    phase: TypedPhase,
    next_step: Instant,
    reduced_motion: bool,
}

impl TypedText {
    pub fn new(strings: &'static [&'static str], reduced_motion: bool) -> Self {
        debug_assert!(!strings.is_empty());
        Self {
            strings,
            index: 0,
            shown: 0,
            phase: TypedPhase::Typing,
            next_step: Instant::now(),
            reduced_motion,
        }
    }

    /// The headline as currently typed out.
    pub fn current(&self) -> String {
        if self.reduced_motion {
            return self.strings[self.index].to_string();
        }
        self.strings[self.index].chars().take(self.shown).collect()
    }

    fn full_len(&self) -> usize {
        self.strings[self.index].chars().count()
    }

    pub fn tick(&mut self) {
        let now = Instant::now();
        if now < self.next_step {
            return;
        }

        if self.reduced_motion {
            // No per-character animation; rotate whole strings on the hold
            // interval.
            self.index = (self.index + 1) % self.strings.len();
            self.next_step = now + BACK_DELAY * 2;
            return;
        }

        match self.phase {
            TypedPhase::Typing => {
                if self.shown < self.full_len() {
                    self.shown += 1;
                    self.next_step = now + TYPE_SPEED;
                } else {
                    self.phase = TypedPhase::Holding;
                    self.next_step = now + BACK_DELAY;
                }
            }
            TypedPhase::Holding => {
                self.phase = TypedPhase::Deleting;
                self.next_step = now + BACK_SPEED;
            }
            TypedPhase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                    self.next_step = now + BACK_SPEED;
                } else {
                    self.index = (self.index + 1) % self.strings.len();
                    self.phase = TypedPhase::Typing;
                    self.next_step = now + TYPE_SPEED;
                }
            }
        }
    }
}

/// How long the splash stays up at minimum, regardless of startup speed.
pub const SPLASH_MIN_DURATION: Duration = Duration::from_millis(1500);
/// Splash fade-out window after the minimum has elapsed.
pub const SPLASH_FADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    Loading,
    Fading,
    Done,
}

/// Startup loading screen with a minimum display time and a fade-out.
#[derive(Debug)]
pub struct Splash {
    started: Instant,
    phase: SplashPhase,
    fade_started: Option<Instant>,
}

impl Splash {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            phase: SplashPhase::Loading,
            fade_started: None,
        }
    }

    /// A splash that never shows, for `--no-splash` and reduced motion.
    pub fn skipped() -> Self {
        Self {
            started: Instant::now(),
            phase: SplashPhase::Done,
            fade_started: None,
        }
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == SplashPhase::Done
    }

    pub fn tick(&mut self) {
        match self.phase {
            SplashPhase::Loading => {
                if self.started.elapsed() >= SPLASH_MIN_DURATION {
                    self.phase = SplashPhase::Fading;
                    self.fade_started = Some(Instant::now());
                }
            }
            SplashPhase::Fading => {
                if self
                    .fade_started
                    .is_some_and(|t| t.elapsed() >= SPLASH_FADE)
                {
                    self.phase = SplashPhase::Done;
                }
            }
            SplashPhase::Done => {}
        }
    }
}

impl Default for Splash {
    fn default() -> Self {
        Self::new()
    }
}

const REVEAL_DELAY: Duration = Duration::from_millis(300);
const REVEAL_STAGGER: Duration = Duration::from_millis(150);
const REVEAL_GROWTH: Duration = Duration::from_millis(900);

/// Drives the one-time skill-bar reveal. Bars grow from zero to their target
/// the first time the Skills page is shown, each starting a little after the
/// previous one.
#[derive(Debug, Default)]
pub struct SkillsReveal {
    started: Option<Instant>,
    reduced_motion: bool,
}

impl SkillsReveal {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            started: None,
            reduced_motion,
        }
    }

    /// Call when the Skills page becomes visible; only the first call arms
    /// the animation.
    pub fn begin(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Fraction of the target width bar `index` should show right now.
    pub fn progress(&self, index: usize) -> f64 {
        if self.reduced_motion {
            return 1.0;
        }
        let Some(started) = self.started else {
            return 0.0;
        };
        let lead_in = REVEAL_DELAY + REVEAL_STAGGER * index as u32;
        let elapsed = started.elapsed();
        if elapsed <= lead_in {
            return 0.0;
        }
        ((elapsed - lead_in).as_secs_f64() / REVEAL_GROWTH.as_secs_f64()).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_text_types_one_char_per_step() {
        let mut typed = TypedText::new(&["ab"], false);
        assert_eq!(typed.current(), "");
        typed.tick();
        assert_eq!(typed.current(), "a");
        // The next character is gated on the type-speed interval.
        typed.tick();
        assert_eq!(typed.current(), "a");
    }

    #[test]
    fn reduced_motion_shows_full_string() {
        let typed = TypedText::new(&["Web Developer"], true);
        assert_eq!(typed.current(), "Web Developer");
    }

    #[test]
    fn splash_stays_up_before_minimum() {
        let mut splash = Splash::new();
        splash.tick();
        assert_eq!(splash.phase(), SplashPhase::Loading);
        assert!(!splash.is_done());
    }

    #[test]
    fn skipped_splash_is_done_immediately() {
        assert!(Splash::skipped().is_done());
    }

    #[test]
    fn reveal_shows_nothing_until_begun() {
        let reveal = SkillsReveal::new(false);
        assert_eq!(reveal.progress(0), 0.0);
    }

    #[test]
    fn reveal_waits_out_the_lead_in() {
        let mut reveal = SkillsReveal::new(false);
        reveal.begin();
        // Inside the 300 ms delay the first bar is still empty, and later
        // bars even more so.
        assert_eq!(reveal.progress(0), 0.0);
        assert_eq!(reveal.progress(5), 0.0);
    }

    #[test]
    fn reduced_motion_reveal_is_instant() {
        let reveal = SkillsReveal::new(true);
        assert_eq!(reveal.progress(0), 1.0);
        assert_eq!(reveal.progress(3), 1.0);
    }
}
