use std::time::Duration;

pub const AUTO_ADVANCE: Duration = Duration::from_millis(5000);

/// What the auto-advance timer depends on. The timer restarts only when this value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFlags {
    pub auto_play: bool,
    pub animation_enabled: bool,
}

/// Position in a fixed-length rotation, advanced by a timer while auto-play runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    auto_play: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            auto_play: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    /// Auto-advance needs both the local auto-play flag and the global animation setting.
    pub fn is_running(&self, animation_enabled: bool) -> bool {
        self.auto_play && animation_enabled && self.len > 0
    }

    /// One [`AUTO_ADVANCE`] interval elapsed. Returns whether the index moved.
    pub fn tick(&mut self, animation_enabled: bool) -> bool {
        if !self.is_running(animation_enabled) {
            return false;
        }
        self.index = (self.index + 1) % self.len;
        true
    }

    /// Jump straight to `index`; out-of-range indices are ignored.
    pub fn jump(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn timer_flags(&self, animation_enabled: bool) -> TimerFlags {
        TimerFlags {
            auto_play: self.auto_play,
            animation_enabled,
        }
    }

    pub fn toggle_auto_play(&mut self) {
        self.auto_play = !self.auto_play;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_and_wraps() {
        let mut carousel = Carousel::new(4);
        for expected in [1, 2, 3, 0, 1] {
            assert!(carousel.tick(true));
            assert_eq!(carousel.index(), expected);
        }
    }

    #[test]
    fn test_pause_keeps_position() {
        let mut carousel = Carousel::new(4);
        carousel.tick(true);
        carousel.tick(true);
        carousel.toggle_auto_play();
        assert!(!carousel.tick(true));
        assert!(!carousel.tick(true));
        assert_eq!(carousel.index(), 2);

        carousel.toggle_auto_play();
        assert!(carousel.tick(true));
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn test_animation_setting_halts_advance() {
        let mut carousel = Carousel::new(4);
        assert!(carousel.auto_play());
        assert!(!carousel.is_running(false));
        assert!(!carousel.tick(false));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_jump() {
        let mut carousel = Carousel::new(4);
        carousel.jump(3);
        assert_eq!(carousel.index(), 3);
        carousel.jump(9);
        assert_eq!(carousel.index(), 3);
        carousel.tick(true);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_timer_flags_ignore_position() {
        let mut carousel = Carousel::new(4);
        let before = carousel.timer_flags(true);
        carousel.jump(2);
        carousel.tick(true);
        assert_eq!(carousel.timer_flags(true), before);

        carousel.toggle_auto_play();
        assert_ne!(carousel.timer_flags(true), before);
        assert_ne!(carousel.timer_flags(false), carousel.timer_flags(true));
    }

    #[test]
    fn test_empty_never_runs() {
        let mut carousel = Carousel::new(0);
        assert!(!carousel.tick(true));
        assert_eq!(carousel.index(), 0);
    }
}
