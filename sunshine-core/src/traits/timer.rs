//! One-shot wake-up timer

use crate::scheduler::TimerToken;

/// Trait for the platform's delayed wake-up
///
/// At most one wake-up is pending at a time. When it fires the platform
/// calls back into the engine with the same token; a token that no
/// longer matches the armed one is ignored there, so a late fire after
/// `cancel` is harmless.
pub trait TimerHost {
    /// Arrange a fire of `token` after `delay_ms`
    fn schedule(&mut self, token: TimerToken, delay_ms: u64);

    /// Drop the pending fire of `token`, if any
    fn cancel(&mut self, token: TimerToken);
}
