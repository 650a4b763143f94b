use serde::{Deserialize, Serialize};

/// Identifies the clock of one game instance.
///
/// A ticker hands its token back on every tick; ticks from a replaced or
/// finished game no longer match and are dropped.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockToken(u64);

impl ClockToken {
    pub const fn epoch(self) -> u64 {
        self.0
    }
}

/// Whole-second game clock advanced by an external once-per-second tick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    epoch: u64,
    elapsed_secs: u32,
    running: bool,
}

impl GameClock {
    pub fn new(epoch: u64) -> Self {
        Self {
            epoch,
            elapsed_secs: 0,
            running: false,
        }
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn token(&self) -> ClockToken {
        ClockToken(self.epoch)
    }

    pub(crate) fn start(&mut self) -> ClockToken {
        self.running = true;
        self.token()
    }

    pub(crate) fn stop(&mut self) {
        self.running = false;
    }

    /// Counts one second if `token` belongs to this clock and it is running.
    pub(crate) fn tick(&mut self, token: ClockToken) -> bool {
        if !self.running || token != self.token() {
            return false;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_while_running() {
        let mut clock = GameClock::new(1);
        let token = clock.token();

        assert!(!clock.tick(token));
        clock.start();
        assert!(clock.tick(token));
        assert!(clock.tick(token));
        clock.stop();
        assert!(!clock.tick(token));
        assert_eq!(clock.elapsed_secs(), 2);
    }

    #[test]
    fn ignores_foreign_tokens() {
        let mut old = GameClock::new(1);
        let stale = old.start();
        let mut clock = GameClock::new(2);
        clock.start();

        assert!(!clock.tick(stale));
        assert_eq!(clock.elapsed_secs(), 0);
    }
}
