//! Lifecycle state machine
//!
//! The host drives a face through three stages. While live, the
//! visibility and ambient flags resolve to a composite phase; the
//! interactive timer is a function of that phase alone.

use super::display::DisplayFlags;
use super::events::LifecycleEvent;

/// Lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Constructed, `Created` not yet seen
    #[default]
    Pending,
    /// Between `Created` and `Destroyed`
    Live,
    /// Torn down; nothing is accepted any more
    Destroyed,
}

impl Stage {
    /// Check if an event is handled in this stage
    pub fn accepts(&self, event: &LifecycleEvent) -> bool {
        match self {
            Stage::Pending => matches!(event, LifecycleEvent::Created),
            Stage::Live => !matches!(event, LifecycleEvent::Created),
            Stage::Destroyed => false,
        }
    }

    /// Process an event and return the next stage
    pub fn transition(self, event: &LifecycleEvent) -> Self {
        use Stage::*;

        match (self, event) {
            (Pending, LifecycleEvent::Created) => Live,
            (Live, event) if event.is_terminal() => Destroyed,
            // Destroyed is terminal; everything else leaves the stage alone
            _ => self,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Stage::Live)
    }
}

/// Composite display phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FacePhase {
    /// Not created yet
    Pending,
    /// Live but not on screen
    Hidden,
    /// On screen at full power, redrawn every second
    InteractiveVisible,
    /// On screen in low-power mode, redrawn by the host's minute tick
    AmbientVisible,
    /// Torn down
    Destroyed,
}

impl FacePhase {
    /// Derive the phase from the stage and the current flags
    ///
    /// Ambient without visibility resolves to `Hidden`.
    pub fn resolve(stage: Stage, flags: &DisplayFlags) -> Self {
        match stage {
            Stage::Pending => FacePhase::Pending,
            Stage::Destroyed => FacePhase::Destroyed,
            Stage::Live => match (flags.visible, flags.ambient) {
                (false, _) => FacePhase::Hidden,
                (true, false) => FacePhase::InteractiveVisible,
                (true, true) => FacePhase::AmbientVisible,
            },
        }
    }

    /// Check if the per-second interactive timer should be armed
    pub fn timer_should_run(&self) -> bool {
        matches!(self, FacePhase::InteractiveVisible)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FacePhase::Destroyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(visible: bool, ambient: bool) -> DisplayFlags {
        DisplayFlags {
            visible,
            ambient,
            ..Default::default()
        }
    }

    #[test]
    fn test_pending_to_live() {
        let stage = Stage::Pending.transition(&LifecycleEvent::Created);
        assert_eq!(stage, Stage::Live);
    }

    #[test]
    fn test_pending_ignores_other_events() {
        assert!(!Stage::Pending.accepts(&LifecycleEvent::VisibilityChanged(true)));
        let stage = Stage::Pending.transition(&LifecycleEvent::Destroyed);
        assert_eq!(stage, Stage::Pending);
    }

    #[test]
    fn test_destroyed_is_terminal() {
        let stage = Stage::Live.transition(&LifecycleEvent::Destroyed);
        assert_eq!(stage, Stage::Destroyed);

        let events = [
            LifecycleEvent::Created,
            LifecycleEvent::VisibilityChanged(true),
            LifecycleEvent::TimeTick,
            LifecycleEvent::Destroyed,
        ];
        for event in events {
            assert!(!stage.accepts(&event));
            assert_eq!(stage.transition(&event), Stage::Destroyed);
        }
    }

    #[test]
    fn test_live_rejects_second_create() {
        assert!(!Stage::Live.accepts(&LifecycleEvent::Created));
        assert!(Stage::Live.accepts(&LifecycleEvent::AmbientModeChanged(true)));
    }

    #[test]
    fn test_phase_resolution() {
        assert_eq!(
            FacePhase::resolve(Stage::Live, &flags(false, false)),
            FacePhase::Hidden
        );
        assert_eq!(
            FacePhase::resolve(Stage::Live, &flags(false, true)),
            FacePhase::Hidden
        );
        assert_eq!(
            FacePhase::resolve(Stage::Live, &flags(true, false)),
            FacePhase::InteractiveVisible
        );
        assert_eq!(
            FacePhase::resolve(Stage::Live, &flags(true, true)),
            FacePhase::AmbientVisible
        );
        assert_eq!(
            FacePhase::resolve(Stage::Pending, &flags(true, false)),
            FacePhase::Pending
        );
        assert_eq!(
            FacePhase::resolve(Stage::Destroyed, &flags(true, false)),
            FacePhase::Destroyed
        );
    }

    #[test]
    fn test_timer_only_interactive_visible() {
        let phases = [
            FacePhase::Pending,
            FacePhase::Hidden,
            FacePhase::AmbientVisible,
            FacePhase::Destroyed,
        ];
        for phase in phases {
            assert!(!phase.timer_should_run());
        }
        assert!(FacePhase::InteractiveVisible.timer_should_run());
    }
}
