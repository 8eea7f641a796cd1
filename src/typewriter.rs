use std::time::Duration;

/// Interval between typed characters.
pub const TYPING_TICK: Duration = Duration::from_millis(100);
/// How long a fully typed line stays on screen.
pub const LINE_PAUSE: Duration = Duration::from_millis(2000);
/// Cursor visibility toggle interval.
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

const PAUSE_TICKS: u128 = LINE_PAUSE.as_millis() / TYPING_TICK.as_millis();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing { elapsed: u128 },
}

/// Types a fixed list of lines one character per tick, holding each
/// finished line for [`LINE_PAUSE`] before moving to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    lines: &'static [&'static str],
    index: usize,
    typed: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(lines: &'static [&'static str]) -> Self {
        Self {
            lines,
            index: 0,
            typed: 0,
            phase: Phase::Typing,
        }
    }

    /// Advance by one [`TYPING_TICK`].
    pub fn tick(&mut self) {
        let Some(line) = self.lines.get(self.index) else {
            return;
        };
        match self.phase {
            Phase::Typing => {
                let len = line.chars().count();
                if self.typed < len {
                    self.typed += 1;
                }
                if self.typed >= len {
                    self.phase = Phase::Pausing { elapsed: 0 };
                }
            }
            Phase::Pausing { elapsed } => {
                let elapsed = elapsed + 1;
                if elapsed >= PAUSE_TICKS {
                    self.typed = 0;
                    self.index = (self.index + 1) % self.lines.len();
                    self.phase = Phase::Typing;
                } else {
                    self.phase = Phase::Pausing { elapsed };
                }
            }
        }
    }

    /// The visible prefix of the current line.
    pub fn text(&self) -> &'static str {
        let Some(line) = self.lines.get(self.index) else {
            return "";
        };
        match line.char_indices().nth(self.typed) {
            Some((end, _)) => &line[..end],
            None => line,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SUBTITLES;

    static LINES: [&str; 2] = ["ab", "café"];

    #[test]
    fn test_types_one_char_per_tick() {
        let mut tw = Typewriter::new(&LINES);
        assert_eq!(tw.text(), "");
        tw.tick();
        assert_eq!(tw.text(), "a");
        tw.tick();
        assert_eq!(tw.text(), "ab");
        assert_eq!(tw.phase(), Phase::Pausing { elapsed: 0 });
    }

    #[test]
    fn test_pause_then_next_line() {
        let mut tw = Typewriter::new(&LINES);
        tw.tick();
        tw.tick();
        // Full line held for the whole pause
        for _ in 0..PAUSE_TICKS - 1 {
            tw.tick();
            assert_eq!(tw.text(), "ab");
            assert_eq!(tw.index(), 0);
        }
        tw.tick();
        assert_eq!(tw.index(), 1);
        assert_eq!(tw.text(), "");

        // Multi-byte characters are typed whole
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.text(), "café");
    }

    #[test]
    fn test_full_cycle_wraps_to_start() {
        let mut tw = Typewriter::new(&SUBTITLES);
        let total: u128 = SUBTITLES
            .iter()
            .map(|s| s.chars().count() as u128 + PAUSE_TICKS)
            .sum();
        // Ticks per cycle match sum(len * 100ms + 2000ms)
        let cycle_ms: u128 = SUBTITLES
            .iter()
            .map(|s| s.chars().count() as u128 * TYPING_TICK.as_millis() + LINE_PAUSE.as_millis())
            .sum();
        assert_eq!(total * TYPING_TICK.as_millis(), cycle_ms);

        for _ in 0..total - 1 {
            tw.tick();
        }
        assert_eq!(tw.index(), SUBTITLES.len() - 1);
        tw.tick();
        assert_eq!(tw.index(), 0);
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_empty_lines_is_inert() {
        static EMPTY: [&str; 0] = [];
        let mut tw = Typewriter::new(&EMPTY);
        tw.tick();
        assert_eq!(tw.text(), "");
        assert_eq!(tw.index(), 0);
    }
}
