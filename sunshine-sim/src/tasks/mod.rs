//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod engine;
pub mod script;
pub mod tick;
pub mod timer;

pub use engine::engine_task;
pub use script::script_task;
pub use tick::tick_task;
pub use timer::timer_task;
