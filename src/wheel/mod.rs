//! Selection engine: which names are eligible, the random draw, and the
//! spin state machine that animates towards the drawn winner.

mod draw;
mod spin;

pub use draw::{Draw, Slot, eligible};
pub use spin::{SpinError, Wheel};
