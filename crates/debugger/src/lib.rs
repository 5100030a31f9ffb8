//! Debugger views over a running x86 emulator.
//!
//! Each refresh tick, the [`Renderer`] reads an [`EmulatorStateView`] and produces a
//! [`FormattedSnapshot`]: the CPU information lines and the register table, already formatted
//! for display. The [`RefreshDriver`] runs that on a fixed cadence and hands the result to a
//! [`Present`] target.
//!
//! [`EmulatorStateView`]: machine::EmulatorStateView

pub mod error;
pub mod panel;
pub mod refresh;
pub mod registers;
pub mod snapshot;
pub mod units;

pub use error::Error;
pub use panel::{Panel, Present};
pub use refresh::{RefreshDriver, StateSource, TickOutcome};
pub use registers::{RegisterDescriptor, RegisterDirectory, Width, build_register_set};
pub use snapshot::{FormattedSnapshot, RegisterRow, Renderer, render};
