use easyerr::Error;

/// Configuration errors of a debugger view.
///
/// None of these are transient: they mean the view and the emulator disagree about something
/// (a name table, a register mapping, the widgets it renders into).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("register {name:?} has no accessor in the register directory")]
    UnknownRegister { name: String },
    #[error("cpu type ordinal {ordinal} is not in the cpu name table")]
    UnknownCpuType { ordinal: u32 },
    #[error("fpu type ordinal {ordinal} is not in the fpu name table")]
    UnknownFpuType { ordinal: u32 },
    #[error("widget {widget:?} is not bound to the panel")]
    StaleWidgetHandle { widget: &'static str },
}
