//! Tap gestures reported by the watch host

/// Tap gesture phases delivered with a tap command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapKind {
    /// Finger went down on the face
    Touch,
    /// Gesture turned into something else (swipe, long press)
    TouchCancel,
    /// Finger lifted; the tap is complete
    Tap,
}

// Wire format values
const TAP_TYPE_TOUCH: u8 = 0;
const TAP_TYPE_TOUCH_CANCEL: u8 = 1;
const TAP_TYPE_TAP: u8 = 2;

impl TapKind {
    /// Parse a tap kind from its wire code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            TAP_TYPE_TOUCH => Some(TapKind::Touch),
            TAP_TYPE_TOUCH_CANCEL => Some(TapKind::TouchCancel),
            TAP_TYPE_TAP => Some(TapKind::Tap),
            _ => None,
        }
    }

    /// Convert to wire code
    pub fn to_code(self) -> u8 {
        match self {
            TapKind::Touch => TAP_TYPE_TOUCH,
            TapKind::TouchCancel => TAP_TYPE_TOUCH_CANCEL,
            TapKind::Tap => TAP_TYPE_TAP,
        }
    }

    /// Returns true if the user finished the gesture
    pub fn completes_gesture(&self) -> bool {
        matches!(self, TapKind::Tap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(TapKind::from_code(0), Some(TapKind::Touch));
        assert_eq!(TapKind::from_code(1), Some(TapKind::TouchCancel));
        assert_eq!(TapKind::from_code(2), Some(TapKind::Tap));
        assert_eq!(TapKind::Tap.to_code(), 2);
    }

    #[test]
    fn test_unknown_code() {
        assert!(TapKind::from_code(3).is_none());
        assert!(TapKind::from_code(0xFF).is_none());
    }

    #[test]
    fn test_completes_gesture() {
        assert!(TapKind::Tap.completes_gesture());
        assert!(!TapKind::Touch.completes_gesture());
        assert!(!TapKind::TouchCancel.completes_gesture());
    }
}
