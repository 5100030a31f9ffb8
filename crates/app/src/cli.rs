use clap::{Args, Parser};
use machine::{CpuType, FpuType};
use std::path::PathBuf;

fn parse_cpu(value: &str) -> Result<u32, String> {
    if let Ok(ordinal) = value.parse() {
        return Ok(ordinal);
    }

    CpuType::from_name(value)
        .map(CpuType::ordinal)
        .ok_or_else(|| format!("unknown cpu {value:?}"))
}

fn parse_fpu(value: &str) -> Result<u32, String> {
    if let Ok(ordinal) = value.parse() {
        return Ok(ordinal);
    }

    FpuType::from_name(value)
        .map(FpuType::ordinal)
        .ok_or_else(|| format!("unknown fpu {value:?}"))
}

#[derive(Args, Debug, Clone)]
pub struct MachineConfig {
    /// CPU model, by name (e.g. "Intel 80286" or "i486dx") or by raw type ordinal
    #[arg(long, default_value = "i386dx", value_parser = parse_cpu)]
    pub cpu: u32,
    /// CPU clock speed, in Hz
    #[arg(long, default_value_t = 33_000_000)]
    pub speed: u32,
    /// FPU model, by name (e.g. "i387") or by raw type ordinal
    #[arg(long, default_value = "none", value_parser = parse_fpu)]
    pub fpu: u32,
    /// Installed memory, in kilobytes
    #[arg(long, default_value_t = 4096)]
    pub memory: u32,
    /// Whether the dynamic recompiler is enabled
    #[arg(long, default_value_t = false)]
    pub dynarec: bool,
    /// Whether the FPU uses softfloat
    #[arg(long, default_value_t = false)]
    pub softfloat: bool,
    /// Whether to use the slow (accurate) PIT
    #[arg(long, default_value_t = false)]
    pub slow_pit: bool,
    /// Wait states. 0 is the machine default, any other value N means N - 1 wait states
    #[arg(long, default_value_t = 0)]
    pub wait_states: u32,
}

/// Inspector: debugger view of an x86 machine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[command(flatten)]
    pub machine: MachineConfig,
    /// Redraw interval of the debugger view, in milliseconds
    #[arg(long, default_value_t = 16)]
    pub refresh_ms: u64,
    /// Whether to start running right away
    #[arg(short, long, default_value_t = false)]
    pub run: bool,
    /// Print this many snapshots to stdout and exit instead of opening the debugger view
    #[arg(long)]
    pub dump: Option<usize>,
    /// Path of the log file
    #[arg(long, default_value = "inspector.log")]
    pub log: PathBuf,
}

#[cfg(test)]
mod test {
    use super::Config;
    use clap::{CommandFactory, Parser};
    use machine::{CpuType, FpuType};

    #[test]
    fn command_is_valid() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["inspector"]).unwrap();
        assert_eq!(config.machine.cpu, CpuType::I386DX.ordinal());
        assert_eq!(config.machine.fpu, FpuType::None.ordinal());
        assert_eq!(config.refresh_ms, 16);
        assert!(!config.run);
        assert!(config.dump.is_none());
    }

    #[test]
    fn cpu_by_name_or_ordinal() {
        let config =
            Config::try_parse_from(["inspector", "--cpu", "Intel 80286", "--fpu", "i287"]).unwrap();
        assert_eq!(config.machine.cpu, CpuType::I80286.ordinal());
        assert_eq!(config.machine.fpu, FpuType::I287.ordinal());

        // raw ordinals are passed through unchecked, the view reports them
        let config = Config::try_parse_from(["inspector", "--cpu", "77"]).unwrap();
        assert_eq!(config.machine.cpu, 77);

        assert!(Config::try_parse_from(["inspector", "--cpu", "z80"]).is_err());
    }
}
