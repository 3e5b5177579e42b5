//! Bounded cross-context message queue

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use heapless::{String, Vec};

use crate::debug;

/// Longest topic accepted
pub const MAX_TOPIC_LEN: usize = 32;

/// Largest payload accepted
pub const MAX_UPDATE_PAYLOAD: usize = 256;

/// Why a delivery was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeliverError {
    /// Face not created yet, or already destroyed
    #[error("update channel closed")]
    Closed,
    #[error("topic longer than {} bytes", MAX_TOPIC_LEN)]
    TopicTooLong,
    #[error("payload larger than {} bytes", MAX_UPDATE_PAYLOAD)]
    PayloadTooLarge,
    /// No slot could be freed, e.g. another producer took it first
    #[error("update queue full")]
    QueueFull,
}

/// One `(topic, payload)` delivery, copied out of the transport's buffers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub topic: String<MAX_TOPIC_LEN>,
    pub payload: Vec<u8, MAX_UPDATE_PAYLOAD>,
}

impl InboundMessage {
    pub fn new(topic: &str, payload: &[u8]) -> Result<Self, DeliverError> {
        let topic = String::try_from(topic).map_err(|_| DeliverError::TopicTooLong)?;
        let payload = Vec::from_slice(payload).map_err(|_| DeliverError::PayloadTooLarge)?;
        Ok(Self { topic, payload })
    }
}

/// Single-consumer queue between the transport and the engine
///
/// `deliver` may be called from any context holding a shared reference
/// (an interrupt, another thread, another task). Only the engine takes
/// messages out. The channel starts closed; the engine opens it on
/// `Created` and closes it on `Destroyed`.
pub struct UpdateChannel<M: RawMutex, const N: usize> {
    queue: Channel<M, InboundMessage, N>,
    open: AtomicBool,
}

impl<M: RawMutex, const N: usize> Default for UpdateChannel<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> UpdateChannel<M, N> {
    /// Create a closed, empty channel; usable in a `static`
    pub const fn new() -> Self {
        Self {
            queue: Channel::new(),
            open: AtomicBool::new(false),
        }
    }

    /// Queue a message for the engine
    ///
    /// Never blocks. When the queue is full the oldest message is dropped
    /// so the newest one is always kept. No parsing happens here;
    /// malformed payloads are dropped later by the engine.
    pub fn deliver(&self, topic: &str, payload: &[u8]) -> Result<(), DeliverError> {
        if !self.is_open() {
            return Err(DeliverError::Closed);
        }
        let message = InboundMessage::new(topic, payload)?;
        match self.queue.try_send(message) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(message)) => {
                if let Ok(dropped) = self.queue.try_receive() {
                    debug!("update queue full, dropped message on {}", dropped.topic.as_str());
                }
                self.queue
                    .try_send(message)
                    .map_err(|_| DeliverError::QueueFull)
            }
        }
    }

    /// Take the oldest queued message without waiting
    pub fn try_take(&self) -> Option<InboundMessage> {
        self.queue.try_receive().ok()
    }

    /// Wait for the next message
    pub async fn receive(&self) -> InboundMessage {
        self.queue.receive().await
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    pub(crate) fn open(&self) {
        self.open.store(true, Ordering::Release);
    }

    /// Close and drop anything still queued
    pub(crate) fn close(&self) {
        self.open.store(false, Ordering::Release);
        while self.queue.try_receive().is_ok() {}
    }
}
