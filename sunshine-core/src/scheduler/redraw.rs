//! Aligned repeating wake-up
//!
//! The scheduler never keeps a free-running period. Every arm computes the
//! delay to the next whole period boundary from the current wall clock, so
//! a late fire shortens the next delay instead of shifting every later one.
//!
//! Each arm gets a fresh [`TimerToken`]. A fire carrying any other token
//! (cancelled, superseded, or delivered after teardown) is stale and is
//! dropped without side effects.

use crate::traits::TimerHost;
use crate::{debug, trace};

/// Default interactive redraw period
pub const INTERACTIVE_UPDATE_RATE_MS: u64 = 1000;

/// Identifies one armed wake-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerToken(pub u32);

/// What happened to a fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FireOutcome {
    /// Token did not match the armed one; ignored
    Stale,
    /// Fire accepted and the next wake-up armed
    Rearmed(TimerToken),
    /// Fire accepted; the timer should no longer run so nothing was armed
    Stopped,
}

impl FireOutcome {
    /// Check if the fire was accepted and should produce a frame
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FireOutcome::Stale)
    }
}

/// Delay from `now_ms` to the next multiple of `period_ms`
///
/// Always in `1..=period_ms`; exactly on a boundary waits a full period.
pub fn aligned_delay_ms(now_ms: u64, period_ms: u64) -> u64 {
    let period_ms = period_ms.max(1);
    period_ms - now_ms % period_ms
}

/// Single-instance redraw timer
#[derive(Debug, Clone)]
pub struct RedrawScheduler {
    period_ms: u64,
    armed: Option<TimerToken>,
    generation: u32,
}

impl Default for RedrawScheduler {
    fn default() -> Self {
        Self::new(INTERACTIVE_UPDATE_RATE_MS)
    }
}

impl RedrawScheduler {
    /// Create a disarmed scheduler with the given period
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            armed: None,
            generation: 0,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Token of the pending wake-up, if any
    pub fn armed_token(&self) -> Option<TimerToken> {
        self.armed
    }

    /// Arm or disarm the wake-up
    ///
    /// Idempotent: arming while armed keeps the pending wake-up, disarming
    /// while disarmed does nothing.
    pub fn set_desired_running<T: TimerHost + ?Sized>(
        &mut self,
        run: bool,
        now_ms: u64,
        timer: &mut T,
    ) {
        match (run, self.armed) {
            (true, None) => {
                let token = self.arm(now_ms, timer);
                debug!("redraw timer started ({})", token.0);
            }
            (false, Some(_)) => {
                self.cancel(timer);
                debug!("redraw timer stopped");
            }
            _ => {}
        }
    }

    /// Cancel the pending wake-up, if any
    pub fn cancel<T: TimerHost + ?Sized>(&mut self, timer: &mut T) {
        if let Some(token) = self.armed.take() {
            timer.cancel(token);
        }
    }

    /// Handle a fire of `token`
    ///
    /// `still_running` is the caller's fresh evaluation of whether the
    /// timer should keep going.
    pub fn on_fire<T: TimerHost + ?Sized>(
        &mut self,
        token: TimerToken,
        still_running: bool,
        now_ms: u64,
        timer: &mut T,
    ) -> FireOutcome {
        if self.armed != Some(token) {
            trace!("stale timer fire ({})", token.0);
            return FireOutcome::Stale;
        }
        self.armed = None;

        if still_running {
            FireOutcome::Rearmed(self.arm(now_ms, timer))
        } else {
            FireOutcome::Stopped
        }
    }

    fn arm<T: TimerHost + ?Sized>(&mut self, now_ms: u64, timer: &mut T) -> TimerToken {
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        timer.schedule(token, aligned_delay_ms(now_ms, self.period_ms));
        self.armed = Some(token);
        token
    }
}
