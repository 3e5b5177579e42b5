//! Wall clock and time zone queries

use jiff::civil::DateTime;

use crate::state::ZoneId;

/// Trait for the platform clock
///
/// Time zone rules live with the platform; the core only ever asks for
/// the civil time in a named zone.
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_ms(&self) -> u64;

    /// Zone the device is currently set to
    fn system_zone(&self) -> ZoneId;

    /// Civil time in `zone` at `epoch_ms`
    ///
    /// Unknown zones should fall back to UTC rather than fail.
    fn local_time(&self, zone: &str, epoch_ms: u64) -> DateTime;
}
