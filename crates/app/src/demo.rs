//! A stand-in CPU core that produces plausible register traffic.
//!
//! It does not decode anything: each "instruction" advances IP by a few bytes, scribbles over a
//! random general purpose register and flips some arithmetic flags.

use crate::cli::MachineConfig;
use machine::{CpuMode, EmulatorStateView, PitMode, RegisterFile, StaticState};
use nanorand::Rng;
use std::time::Duration;

/// Average clock cycles per emulated instruction.
const CYCLES_PER_INSTR: u64 = 4;

/// Most instructions actually emulated per slice. The rest are only accounted for.
const MAX_INSTR_PER_SLICE: u64 = 256;

/// Arithmetic flags (CF, PF, AF, ZF, SF, OF).
const ARITH_FLAGS: u16 = 0x08D5;

pub struct DemoCore {
    config: MachineConfig,
    regs: RegisterFile,
    executed: u64,
}

impl DemoCore {
    pub fn new(config: MachineConfig) -> Self {
        let mut core = Self {
            config,
            regs: RegisterFile::default(),
            executed: 0,
        };

        core.reset();
        core
    }

    /// Puts the registers in their power-on state.
    pub fn reset(&mut self) {
        self.regs = RegisterFile {
            pc: 0xFFF0,
            flags: 0x0002,
            cs: 0xF000,
            ..Default::default()
        };

        if CpuMode::from_ordinal(self.config.cpu) == CpuMode::Extended {
            // i386 reset value of EDX: family and stepping
            self.regs.edx = 0x0308;
        }
    }

    pub fn executed(&self) -> u64 {
        self.executed
    }

    /// Executes a single instruction.
    pub fn step(&mut self) {
        let mut rng = nanorand::tls_rng();

        let len = rng.generate_range(1u32..=4);
        self.regs.pc = match CpuMode::from_ordinal(self.config.cpu) {
            CpuMode::Legacy => (self.regs.pc + len) & 0xFFFF,
            CpuMode::Extended => self.regs.pc.wrapping_add(len),
        };

        let index = rng.generate_range(0usize..8);
        *self.regs.gprs_mut()[index] = rng.generate::<u32>();

        let flags = rng.generate::<u16>() & ARITH_FLAGS;
        self.regs.flags = (self.regs.flags & !ARITH_FLAGS) | flags;

        self.executed += 1;
    }

    /// Executes as many instructions as fit in `slice` of emulated time, returning how many.
    pub fn exec(&mut self, slice: Duration) -> u64 {
        let cycles = u64::from(self.config.speed) * slice.as_micros() as u64 / 1_000_000;
        let instrs = cycles / CYCLES_PER_INSTR;

        for _ in 0..instrs.min(MAX_INSTR_PER_SLICE) {
            self.step();
        }

        // account for the ones skipped
        self.executed += instrs.saturating_sub(MAX_INSTR_PER_SLICE);
        instrs
    }

    /// Copies the current state out.
    pub fn freeze(&self) -> StaticState {
        StaticState {
            cpu_type: self.cpu_type(),
            cpu_speed: self.cpu_speed(),
            fpu_type: self.fpu_type(),
            dynarec: self.dynarec(),
            softfloat: self.softfloat(),
            pit_mode: self.pit_mode(),
            wait_states: self.wait_states(),
            memory_kb: self.memory_kb(),
            registers: self.registers(),
        }
    }
}

impl EmulatorStateView for DemoCore {
    fn cpu_type(&self) -> u32 {
        self.config.cpu
    }

    fn cpu_speed(&self) -> u32 {
        self.config.speed
    }

    fn fpu_type(&self) -> u32 {
        self.config.fpu
    }

    fn dynarec(&self) -> bool {
        self.config.dynarec
    }

    fn softfloat(&self) -> bool {
        self.config.softfloat
    }

    fn pit_mode(&self) -> PitMode {
        if self.config.slow_pit {
            PitMode::Slow
        } else {
            PitMode::Fast
        }
    }

    fn wait_states(&self) -> u32 {
        self.config.wait_states
    }

    fn memory_kb(&self) -> u32 {
        self.config.memory
    }

    fn registers(&self) -> RegisterFile {
        self.regs
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;

    fn demo_core(args: &[&str]) -> DemoCore {
        let config = crate::cli::Config::try_parse_from(
            std::iter::once("inspector").chain(args.iter().copied()),
        )
        .unwrap();

        DemoCore::new(config.machine)
    }

    #[test]
    fn legacy_ip_wraps_at_64k() {
        let mut core = demo_core(&["--cpu", "i8088"]);
        for _ in 0..32 {
            core.step();
            assert!(core.registers().pc <= 0xFFFF);
        }

        assert_eq!(core.executed(), 32);
        assert_eq!(core.registers().cs, 0xF000);
    }

    #[test]
    fn exec_accounts_for_the_whole_slice() {
        let mut core = demo_core(&["--cpu", "pentium", "--speed", "100000000"]);

        // 1ms at 100 MHz is 100k cycles, 25k instructions
        let executed = core.exec(Duration::from_millis(1));
        assert_eq!(executed, 25_000);
        assert_eq!(core.executed(), 25_000);
    }

    #[test]
    fn freeze_copies_the_configuration() {
        let core = demo_core(&["--memory", "640", "--slow-pit", "--wait-states", "3"]);
        let frozen = core.freeze();

        assert_eq!(frozen.memory_kb, 640);
        assert_eq!(frozen.pit_mode, PitMode::Slow);
        assert_eq!(frozen.wait_states, 3);
        assert_eq!(frozen.registers, core.registers());
    }
}
