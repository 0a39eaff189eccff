//! Pointer Event Replay
//!
//! Drives one histogram's hover behavior from a script instead of a mouse.
//! Each stdin line is a JSON pointer event stamped with a virtual time in
//! milliseconds; the session's hide timer only ever sees that virtual clock,
//! so a replay is deterministic no matter how fast it runs.
//!
//! The data processing architecture is:
//!
//! stdin
//! parse_pointer_event
//! PointerEvent
//! HistogramSession
//! popup state line (stdout)
//!

mod parse;
mod run;
mod types;

pub use parse::parse_pointer_event;
pub use run::run_replay;
pub use types::{PointerAction, PointerEvent};
