use crate::{CpuType, FpuType, PitMode, RegisterFile};

/// Read-only view into the state of a running emulator.
///
/// Implementations are free to return values that are slightly out of sync with each other (for
/// example, a register file copied while the CPU thread is writing to it). Consumers must not
/// rely on the view being a consistent snapshot.
pub trait EmulatorStateView {
    /// Raw CPU type ordinal, 1-based. See [`CpuType`].
    fn cpu_type(&self) -> u32;
    /// CPU clock speed, in Hz.
    fn cpu_speed(&self) -> u32;
    /// Raw FPU type ordinal, 1-based. See [`FpuType`].
    fn fpu_type(&self) -> u32;
    /// Whether the dynamic recompiler is in use.
    fn dynarec(&self) -> bool;
    /// Whether the FPU is emulated with softfloat.
    fn softfloat(&self) -> bool;
    fn pit_mode(&self) -> PitMode;
    /// Configured wait states. 0 means the machine default, otherwise the count is off by one.
    fn wait_states(&self) -> u32;
    /// Installed memory, in kilobytes.
    fn memory_kb(&self) -> u32;
    fn registers(&self) -> RegisterFile;
}

/// Pause switch of an emulator. Pausing only affects execution.
pub trait PauseControl {
    fn paused(&self) -> bool;
    fn set_paused(&self, paused: bool);

    /// Flips the pause state and returns the new one.
    fn toggle_pause(&self) -> bool {
        let paused = !self.paused();
        self.set_paused(paused);
        paused
    }
}

/// A frozen machine state. Useful for tests and one-shot dumps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticState {
    pub cpu_type: u32,
    pub cpu_speed: u32,
    pub fpu_type: u32,
    pub dynarec: bool,
    pub softfloat: bool,
    pub pit_mode: PitMode,
    pub wait_states: u32,
    pub memory_kb: u32,
    pub registers: RegisterFile,
}

impl Default for StaticState {
    /// A 4.77 MHz IBM PC with 640 KB and no coprocessor.
    fn default() -> Self {
        Self {
            cpu_type: CpuType::I8088.ordinal(),
            cpu_speed: 4_772_728,
            fpu_type: FpuType::None.ordinal(),
            dynarec: false,
            softfloat: false,
            pit_mode: PitMode::Fast,
            wait_states: 0,
            memory_kb: 640,
            registers: RegisterFile::default(),
        }
    }
}

impl EmulatorStateView for StaticState {
    fn cpu_type(&self) -> u32 {
        self.cpu_type
    }

    fn cpu_speed(&self) -> u32 {
        self.cpu_speed
    }

    fn fpu_type(&self) -> u32 {
        self.fpu_type
    }

    fn dynarec(&self) -> bool {
        self.dynarec
    }

    fn softfloat(&self) -> bool {
        self.softfloat
    }

    fn pit_mode(&self) -> PitMode {
        self.pit_mode
    }

    fn wait_states(&self) -> u32 {
        self.wait_states
    }

    fn memory_kb(&self) -> u32 {
        self.memory_kb
    }

    fn registers(&self) -> RegisterFile {
        self.registers
    }
}
