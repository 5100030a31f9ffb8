//! Data model shared between an x86 emulator core and the tools that inspect it.
//!
//! Nothing in here knows how the emulator executes code. The emulator exposes its state through
//! [`EmulatorStateView`] and accepts pause requests through [`PauseControl`]; everything else
//! only reads.

pub mod cpu;
pub mod regs;
pub mod state;

pub use cpu::{CpuMode, CpuType, FpuType, PitMode};
pub use regs::{Register, RegisterFile};
pub use state::{EmulatorStateView, PauseControl, StaticState};
