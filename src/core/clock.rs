//! Per-player inactivity clock.
//!
//! Each player's elapsed-since-last-action time is measured
//! independently against a fixed budget. The clock does not start until
//! the first action of the match is recorded; until then both elapsed
//! times read as zero and nobody can be force-expired.
//!
//! Time is a caller-supplied monotonic `Duration` (time since match
//! start). The clock never reads a wall clock.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{Player, PlayerPair};

/// Per-player countdown that signals a forced turn expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnClock {
    budget: Duration,
    started: bool,
    last_action: PlayerPair<Duration>,
}

impl TurnClock {
    /// Create a clock with the given inactivity budget.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        assert!(!budget.is_zero(), "Timeout budget must be non-zero");
        Self {
            budget,
            started: false,
            last_action: PlayerPair::with_value(Duration::ZERO),
        }
    }

    /// The configured inactivity budget.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Whether any action has been recorded this match.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Elapsed time since `player` last acted or was granted the turn.
    ///
    /// Held at zero until the first action of the match.
    #[must_use]
    pub fn elapsed(&self, player: Player, now: Duration) -> Duration {
        if !self.started {
            return Duration::ZERO;
        }
        now.saturating_sub(self.last_action[player])
    }

    /// Reset `player`'s baseline to `now`, starting the clock if this is
    /// the first action of the match.
    pub fn record_action(&mut self, player: Player, now: Duration) {
        self.started = true;
        self.last_action[player] = now;
    }

    /// Reset both baselines to `now`.
    ///
    /// Used on forced expiry: the newly active player starts with a full
    /// budget, and the expired player cannot instantly re-expire when the
    /// turn eventually comes back.
    pub fn reset_all(&mut self, now: Duration) {
        self.last_action = PlayerPair::with_value(now);
    }

    /// Returns the active player if they have idled past the budget.
    ///
    /// Expiry requires strictly more than the budget to have elapsed, and
    /// never fires before the first recorded action.
    #[must_use]
    pub fn check_expiry(&self, active: Player, now: Duration) -> Option<Player> {
        if self.elapsed(active, now) > self.budget {
            Some(active)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUDGET: Duration = Duration::from_secs(20);

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_no_expiry_before_first_action() {
        let clock = TurnClock::new(BUDGET);

        assert!(!clock.started());
        assert_eq!(clock.elapsed(Player::One, secs(1000)), Duration::ZERO);
        assert_eq!(clock.check_expiry(Player::One, secs(1000)), None);
    }

    #[test]
    fn test_expiry_after_budget() {
        let mut clock = TurnClock::new(BUDGET);
        clock.record_action(Player::One, secs(5));

        assert_eq!(clock.check_expiry(Player::One, secs(25)), None); // exactly 20
        assert_eq!(
            clock.check_expiry(Player::One, secs(26)),
            Some(Player::One)
        );
    }

    #[test]
    fn test_players_measured_independently() {
        let mut clock = TurnClock::new(BUDGET);
        clock.record_action(Player::One, secs(0));
        clock.record_action(Player::Two, secs(15));

        assert_eq!(clock.elapsed(Player::One, secs(30)), secs(30));
        assert_eq!(clock.elapsed(Player::Two, secs(30)), secs(15));
        assert_eq!(clock.check_expiry(Player::Two, secs(30)), None);
        assert_eq!(
            clock.check_expiry(Player::One, secs(30)),
            Some(Player::One)
        );
    }

    #[test]
    fn test_reset_all_clears_both_baselines() {
        let mut clock = TurnClock::new(BUDGET);
        clock.record_action(Player::One, secs(0));

        clock.reset_all(secs(40));

        assert_eq!(clock.elapsed(Player::One, secs(41)), secs(1));
        assert_eq!(clock.elapsed(Player::Two, secs(41)), secs(1));
        assert_eq!(clock.check_expiry(Player::One, secs(41)), None);
    }

    #[test]
    fn test_elapsed_saturates_on_stale_now() {
        let mut clock = TurnClock::new(BUDGET);
        clock.record_action(Player::One, secs(10));

        assert_eq!(clock.elapsed(Player::One, secs(5)), Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "Timeout budget must be non-zero")]
    fn test_zero_budget() {
        TurnClock::new(Duration::ZERO);
    }
}
