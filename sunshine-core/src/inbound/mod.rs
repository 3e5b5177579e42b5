//! Inbound update channel
//!
//! The companion transport delivers on its own context. Messages are
//! queued here and drained by the engine on its serialized context; the
//! display state is never touched from the delivering side.

pub mod channel;

pub use channel::{DeliverError, InboundMessage, UpdateChannel, MAX_TOPIC_LEN, MAX_UPDATE_PAYLOAD};
