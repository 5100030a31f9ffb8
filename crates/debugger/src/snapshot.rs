//! Formatting of machine state into display strings.

use crate::{
    Error,
    registers::{RegisterDescriptor, RegisterDirectory, Width},
    units,
};
use machine::{CpuMode, CpuType, EmulatorStateView, FpuType};
use tracing::debug;

/// A row of the register table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRow {
    pub name: &'static str,
    pub width: Width,
    pub value: String,
}

/// Everything a debugger view displays for one refresh tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedSnapshot {
    pub cpu: String,
    pub fpu: String,
    pub dynarec: String,
    pub softfloat: String,
    pub pit_mode: String,
    pub wait_states: String,
    pub memory: String,
    pub mode: CpuMode,
    pub registers: Vec<RegisterRow>,
}

impl FormattedSnapshot {
    /// The information lines, in panel order.
    pub fn info_lines(&self) -> [&str; 7] {
        [
            self.cpu.as_str(),
            self.fpu.as_str(),
            self.dynarec.as_str(),
            self.softfloat.as_str(),
            self.pit_mode.as_str(),
            self.wait_states.as_str(),
            self.memory.as_str(),
        ]
    }

    pub fn register(&self, name: &str) -> Option<&RegisterRow> {
        self.registers.iter().find(|row| row.name == name)
    }

    /// Names of the registers whose value differs from `previous`.
    ///
    /// Every register counts as changed when `previous` was rendered in another [`CpuMode`].
    pub fn changed_registers<'a>(
        &'a self,
        previous: &'a FormattedSnapshot,
    ) -> impl Iterator<Item = &'static str> + 'a {
        let mode_changed = self.mode != previous.mode;
        self.registers
            .iter()
            .filter(move |row| {
                mode_changed
                    || previous
                        .register(row.name)
                        .is_none_or(|old| old.value != row.value)
            })
            .map(|row| row.name)
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "On" } else { "Off" }
}

/// Renders [`EmulatorStateView`]s into [`FormattedSnapshot`]s.
///
/// The register set is resolved once per CPU mode and reused until the mode changes.
#[derive(Debug, Clone)]
pub struct Renderer {
    directory: RegisterDirectory,
    register_set: Option<(CpuMode, Vec<RegisterDescriptor>)>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RegisterDirectory::x86())
    }
}

impl Renderer {
    pub fn new(directory: RegisterDirectory) -> Self {
        Self {
            directory,
            register_set: None,
        }
    }

    fn register_set(&mut self, mode: CpuMode) -> Result<&[RegisterDescriptor], Error> {
        let stale = self
            .register_set
            .as_ref()
            .is_none_or(|(cached, _)| *cached != mode);

        if stale {
            debug!("building register set for {mode:?} mode");
            let set = self.directory.register_set(mode)?;
            self.register_set = Some((mode, set));
        }

        Ok(self
            .register_set
            .as_ref()
            .map(|(_, set)| set.as_slice())
            .unwrap_or_default())
    }

    pub fn render(&mut self, state: &dyn EmulatorStateView) -> Result<FormattedSnapshot, Error> {
        let cpu_ordinal = state.cpu_type();
        let cpu = CpuType::from_ordinal(cpu_ordinal).ok_or(Error::UnknownCpuType {
            ordinal: cpu_ordinal,
        })?;

        let fpu_ordinal = state.fpu_type();
        let fpu = FpuType::from_ordinal(fpu_ordinal).ok_or(Error::UnknownFpuType {
            ordinal: fpu_ordinal,
        })?;

        let wait_states = match state.wait_states() {
            0 => "Default".to_owned(),
            n => (n - 1).to_string(),
        };

        let memory_bytes = u64::from(state.memory_kb()) * bytesize::KB;

        let mode = cpu.mode();
        let regs = state.registers();
        let registers = self
            .register_set(mode)?
            .iter()
            .map(|desc| RegisterRow {
                name: desc.name(),
                width: desc.width,
                value: units::format_hex(desc.read(&regs), desc.width),
            })
            .collect();

        Ok(FormattedSnapshot {
            cpu: format!(
                "CPU Type: {} @ {}",
                cpu.name(),
                units::format_frequency(state.cpu_speed())
            ),
            fpu: format!("FPU Type: {}", fpu.name()),
            dynarec: format!("Dynamic recompiler: {}", on_off(state.dynarec())),
            softfloat: format!("Softfloat FPU: {}", on_off(state.softfloat())),
            pit_mode: format!("PIT mode: {}", state.pit_mode().label()),
            wait_states: format!("Wait states: {wait_states}"),
            memory: format!(
                "Memory: {} of RAM ({memory_bytes} bytes)",
                units::format_bytes(memory_bytes)
            ),
            mode,
            registers,
        })
    }
}

/// Renders `state` with a fresh [`Renderer`] over the x86 directory.
pub fn render(state: &dyn EmulatorStateView) -> Result<FormattedSnapshot, Error> {
    Renderer::default().render(state)
}
