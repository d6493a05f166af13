//! Delayed show/hide timing for [`Tooltip`](crate::Tooltip).

use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Visibility phase.
pub enum TooltipPhase {
    /// Not shown and no timer pending.
    #[default]
    Hidden,
    /// Waiting for the show timer tagged with `generation`.
    Pending {
        /// Timer tag; stale timers carry an older value.
        generation: u64,
    },
    /// Shown.
    Visible,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Tooltip timing state.
pub struct TooltipState {
    phase: TooltipPhase,
    generation: u64,
}

impl TooltipState {
    /// Current phase.
    pub fn phase(&self) -> TooltipPhase {
        self.phase
    }

    /// Whether the bubble should render.
    pub fn is_visible(&self) -> bool {
        self.phase == TooltipPhase::Visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Inputs to [`reduce_tooltip`].
pub enum TooltipAction {
    /// Pointer entered or focus arrived.
    Show {
        /// Show delay in milliseconds.
        delay_ms: u32,
        /// Disabled tooltips never show.
        disabled: bool,
    },
    /// Pointer left or focus moved away.
    Hide,
    /// A scheduled show timer fired.
    TimerElapsed {
        /// Tag the timer was scheduled with.
        generation: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side effects requested by [`reduce_tooltip`].
pub enum TooltipEffect {
    /// Start a timer that reports [`TooltipAction::TimerElapsed`] with `generation`.
    Schedule {
        /// Tag to report back.
        generation: u64,
        /// Wait before reporting.
        delay: Duration,
    },
    /// Cancel the pending timer.
    CancelTimer,
}

/// Applies one action and returns the effects to run.
pub fn reduce_tooltip(state: &mut TooltipState, action: TooltipAction) -> Vec<TooltipEffect> {
    match action {
        TooltipAction::Show { disabled: true, .. } => Vec::new(),
        TooltipAction::Show { delay_ms, .. } => {
            let mut effects = Vec::new();
            match state.phase {
                TooltipPhase::Visible => return effects,
                TooltipPhase::Pending { .. } => effects.push(TooltipEffect::CancelTimer),
                TooltipPhase::Hidden => {}
            }
            if delay_ms == 0 {
                state.phase = TooltipPhase::Visible;
                return effects;
            }
            state.generation += 1;
            state.phase = TooltipPhase::Pending {
                generation: state.generation,
            };
            effects.push(TooltipEffect::Schedule {
                generation: state.generation,
                delay: Duration::from_millis(u64::from(delay_ms)),
            });
            effects
        }
        TooltipAction::Hide => {
            let pending = matches!(state.phase, TooltipPhase::Pending { .. });
            state.phase = TooltipPhase::Hidden;
            if pending {
                vec![TooltipEffect::CancelTimer]
            } else {
                Vec::new()
            }
        }
        TooltipAction::TimerElapsed { generation } => {
            if state.phase == (TooltipPhase::Pending { generation }) {
                state.phase = TooltipPhase::Visible;
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn show(delay_ms: u32) -> TooltipAction {
        TooltipAction::Show {
            delay_ms,
            disabled: false,
        }
    }

    #[test]
    fn shows_after_the_scheduled_timer() {
        let mut state = TooltipState::default();
        let effects = reduce_tooltip(&mut state, show(200));
        assert_eq!(
            effects,
            vec![TooltipEffect::Schedule {
                generation: 1,
                delay: Duration::from_millis(200),
            }]
        );
        assert!(!state.is_visible());

        reduce_tooltip(&mut state, TooltipAction::TimerElapsed { generation: 1 });
        assert!(state.is_visible());
    }

    #[test]
    fn hide_before_timer_cancels_and_ignores_stale_fire() {
        let mut state = TooltipState::default();
        reduce_tooltip(&mut state, show(200));
        assert_eq!(
            reduce_tooltip(&mut state, TooltipAction::Hide),
            vec![TooltipEffect::CancelTimer]
        );
        reduce_tooltip(&mut state, TooltipAction::TimerElapsed { generation: 1 });
        assert_eq!(state.phase(), TooltipPhase::Hidden);
    }

    #[test]
    fn reentering_replaces_the_pending_timer() {
        let mut state = TooltipState::default();
        reduce_tooltip(&mut state, show(200));
        reduce_tooltip(&mut state, TooltipAction::Hide);
        let effects = reduce_tooltip(&mut state, show(200));
        assert_eq!(
            effects,
            vec![TooltipEffect::Schedule {
                generation: 2,
                delay: Duration::from_millis(200),
            }]
        );

        reduce_tooltip(&mut state, TooltipAction::TimerElapsed { generation: 1 });
        assert!(!state.is_visible());
        reduce_tooltip(&mut state, TooltipAction::TimerElapsed { generation: 2 });
        assert!(state.is_visible());
    }

    #[test]
    fn zero_delay_shows_immediately() {
        let mut state = TooltipState::default();
        assert!(reduce_tooltip(&mut state, show(0)).is_empty());
        assert!(state.is_visible());
        assert!(reduce_tooltip(&mut state, TooltipAction::Hide).is_empty());
        assert!(!state.is_visible());
    }

    #[test]
    fn disabled_never_schedules() {
        let mut state = TooltipState::default();
        let effects = reduce_tooltip(
            &mut state,
            TooltipAction::Show {
                delay_ms: 0,
                disabled: true,
            },
        );
        assert!(effects.is_empty());
        assert_eq!(state.phase(), TooltipPhase::Hidden);
    }
}
