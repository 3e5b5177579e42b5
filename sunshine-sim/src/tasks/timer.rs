//! Wake-up timer task
//!
//! Holds at most one pending wake-up. A newer arm replaces the pending
//! one; a cancel only clears the token it names.

use embassy_futures::select::{select, Either};
use embassy_time::{Instant, Timer};
use log::{debug, info};

use sunshine_core::scheduler::TimerToken;

use crate::channels::{HostEvent, TimerCommand, HOST_EVENTS, TIMER_CMD};

/// Timer task - turns armed deadlines into fire events
#[embassy_executor::task]
pub async fn timer_task() {
    info!("Timer task started");

    let mut pending: Option<(TimerToken, Instant)> = None;

    loop {
        let command = match pending {
            None => TIMER_CMD.wait().await,
            Some((token, deadline)) => match select(TIMER_CMD.wait(), Timer::at(deadline)).await {
                Either::First(command) => command,
                Either::Second(()) => {
                    pending = None;
                    HOST_EVENTS.send(HostEvent::TimerFired(token)).await;
                    continue;
                }
            },
        };
        pending = apply(pending, command);
    }
}

fn apply(
    pending: Option<(TimerToken, Instant)>,
    command: TimerCommand,
) -> Option<(TimerToken, Instant)> {
    match command {
        TimerCommand::Arm { token, deadline } => Some((token, deadline)),
        TimerCommand::Cancel(token) => match pending {
            Some((armed, _)) if armed == token => {
                debug!("Wake-up {} cancelled", token.0);
                None
            }
            other => other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_time::Duration;

    #[test]
    fn test_arm_replaces_pending() {
        let at = Instant::from_millis(500);
        let pending = Some((TimerToken(1), at));
        let later = at + Duration::from_millis(1000);
        let next = apply(
            pending,
            TimerCommand::Arm {
                token: TimerToken(2),
                deadline: later,
            },
        );
        assert_eq!(next, Some((TimerToken(2), later)));
    }

    #[test]
    fn test_cancel_only_matching_token() {
        let at = Instant::from_millis(500);
        let pending = Some((TimerToken(3), at));
        assert_eq!(apply(pending, TimerCommand::Cancel(TimerToken(2))), pending);
        assert_eq!(apply(pending, TimerCommand::Cancel(TimerToken(3))), None);
        assert_eq!(apply(None, TimerCommand::Cancel(TimerToken(3))), None);
    }
}
