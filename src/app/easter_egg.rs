// ABOUTME: Easter egg state: Konami key sequence tracker and logo click counter

use crossterm::event::KeyCode;

const KONAMI_SEQUENCE: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

/// Tracks progress through the Konami sequence. Any wrong key resets to the
/// start; completing the sequence reports true and resets.
#[derive(Debug, Default)]
pub struct KonamiTracker {
    index: usize,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key press. Returns true when the full sequence completes.
    pub fn observe(&mut self, code: KeyCode) -> bool {
        if code == KONAMI_SEQUENCE[self.index] {
            self.index += 1;
            if self.index == KONAMI_SEQUENCE.len() {
                self.index = 0;
                return true;
            }
        } else {
            self.index = 0;
        }
        false
    }
}

const CLICKS_TO_TRIGGER: u32 = 10;

/// Counts mouse clicks on the logo; every tenth click triggers the egg.
#[derive(Debug, Default)]
pub struct LogoClickCounter {
    count: u32,
}

impl LogoClickCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click. Returns true on the tenth, then starts over.
    pub fn click(&mut self) -> bool {
        self.count += 1;
        if self.count == CLICKS_TO_TRIGGER {
            self.count = 0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_sequence_triggers() {
        let mut tracker = KonamiTracker::new();
        for code in KONAMI_SEQUENCE.iter().take(9) {
            assert!(!tracker.observe(*code));
        }
        assert!(tracker.observe(KeyCode::Char('a')));
    }

    #[test]
    fn wrong_key_resets_progress() {
        let mut tracker = KonamiTracker::new();
        assert!(!tracker.observe(KeyCode::Up));
        assert!(!tracker.observe(KeyCode::Up));
        assert!(!tracker.observe(KeyCode::Char('x')));
        // Starting over: the full sequence is needed again.
        for code in KONAMI_SEQUENCE.iter().take(9) {
            assert!(!tracker.observe(*code));
        }
        assert!(tracker.observe(KeyCode::Char('a')));
    }

    #[test]
    fn sequence_resets_after_triggering() {
        let mut tracker = KonamiTracker::new();
        for code in KONAMI_SEQUENCE {
            tracker.observe(code);
        }
        // A fresh run is required for a second trigger.
        assert!(!tracker.observe(KeyCode::Char('a')));
    }

    #[test]
    fn tenth_click_triggers_and_resets() {
        let mut counter = LogoClickCounter::new();
        for _ in 0..9 {
            assert!(!counter.click());
        }
        assert!(counter.click());
        assert!(!counter.click());
    }
}
