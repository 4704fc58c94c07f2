//! Tab group state machine
//!
//! ```text
//! Idle
//!   ↓ initial / user click / auto-advance expired
//! Transitioning
//!   ↓ transition complete
//! Idle
//! ```
//!
//! Switch triggers arriving while transitioning are dropped, never queued.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No switch in flight; clicks and timer expiry are accepted
    Idle,
    /// A switch timeline is running
    Transitioning,
}

/// What asked for a switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwitchCause {
    /// First activation at construction
    Initial,
    UserClick,
    AutoAdvance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Initial,
    UserClick,
    AutoAdvanceExpired,
    TransitionComplete,
}

impl From<SwitchCause> for Trigger {
    fn from(cause: SwitchCause) -> Self {
        match cause {
            SwitchCause::Initial => Trigger::Initial,
            SwitchCause::UserClick => Trigger::UserClick,
            SwitchCause::AutoAdvance => Trigger::AutoAdvanceExpired,
        }
    }
}

impl Phase {
    /// Phase after `trigger`, or `None` when the trigger must be dropped
    pub fn next(self, trigger: Trigger) -> Option<Phase> {
        match (self, trigger) {
            (Phase::Idle, Trigger::Initial)
            | (Phase::Idle, Trigger::UserClick)
            | (Phase::Idle, Trigger::AutoAdvanceExpired) => Some(Phase::Transitioning),
            (Phase::Transitioning, Trigger::TransitionComplete) => Some(Phase::Idle),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Transitioning => "transitioning",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl SwitchCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            SwitchCause::Initial => "initial",
            SwitchCause::UserClick => "click",
            SwitchCause::AutoAdvance => "autoplay",
        }
    }
}

impl std::fmt::Display for SwitchCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert_eq!(Phase::Idle.next(Trigger::Initial), Some(Phase::Transitioning));
        assert_eq!(Phase::Idle.next(Trigger::UserClick), Some(Phase::Transitioning));
        assert_eq!(
            Phase::Idle.next(Trigger::AutoAdvanceExpired),
            Some(Phase::Transitioning)
        );
        assert_eq!(
            Phase::Transitioning.next(Trigger::TransitionComplete),
            Some(Phase::Idle)
        );
    }

    #[test]
    fn test_dropped_triggers() {
        // Switch requests during a transition are debounced
        assert_eq!(Phase::Transitioning.next(Trigger::UserClick), None);
        assert_eq!(Phase::Transitioning.next(Trigger::AutoAdvanceExpired), None);
        assert_eq!(Phase::Transitioning.next(Trigger::Initial), None);
        // Nothing to complete while idle
        assert_eq!(Phase::Idle.next(Trigger::TransitionComplete), None);
    }

    #[test]
    fn test_cause_maps_to_trigger() {
        assert_eq!(Trigger::from(SwitchCause::AutoAdvance), Trigger::AutoAdvanceExpired);
        assert_eq!(SwitchCause::UserClick.to_string(), "click");
    }
}
