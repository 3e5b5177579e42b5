//! Inter-task communication channels
//!
//! Defines the static channels used between the simulator's tasks and
//! the companion thread.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use embassy_time::Instant;

use sunshine_core::inbound::UpdateChannel;
use sunshine_core::scheduler::TimerToken;

use crate::config::HostCall;

/// Channel capacity for host callbacks
const HOST_EVENT_CHANNEL_SIZE: usize = 8;

/// Queue depth for companion messages not yet applied
pub const UPDATE_QUEUE_SIZE: usize = 4;

/// Everything the engine task reacts to, apart from companion messages
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Scripted or periodic host callback
    Call(HostCall),
    /// Redraw wake-up came due
    TimerFired(TimerToken),
}

/// Wake-up timer commands (latest wins)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Arm { token: TimerToken, deadline: Instant },
    Cancel(TimerToken),
}

/// Host callbacks into the engine task
pub static HOST_EVENTS: Channel<CriticalSectionRawMutex, HostEvent, HOST_EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Wake-up timer command (updated by the engine's host)
pub static TIMER_CMD: Signal<CriticalSectionRawMutex, TimerCommand> = Signal::new();

/// Companion messages; written by the companion thread
pub static UPDATES: UpdateChannel<CriticalSectionRawMutex, UPDATE_QUEUE_SIZE> =
    UpdateChannel::new();
