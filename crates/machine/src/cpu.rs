//! CPU and FPU identification tables.
//!
//! The emulator reports its processor and coprocessor as raw ordinals. The enums in here are
//! the single place those ordinals are assigned names, so they must follow the emulator's
//! numbering exactly. Both tables start at 1.

use strum::{FromRepr, IntoStaticStr, VariantArray};

/// Register semantics exposed by a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CpuMode {
    /// 8086 through 80286: 16-bit registers, no FS/GS.
    Legacy,
    /// i386SX and later: 32-bit registers, FS/GS and EFLAGS.
    Extended,
}

impl CpuMode {
    /// Mode for a raw CPU type ordinal. Ordinals below [`CpuType::I386SX`] are legacy.
    ///
    /// This does not validate the ordinal; unknown ordinals above the table are extended.
    pub fn from_ordinal(ordinal: u32) -> Self {
        if ordinal < CpuType::I386SX as u32 {
            Self::Legacy
        } else {
            Self::Extended
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr, VariantArray, IntoStaticStr,
)]
#[repr(u32)]
pub enum CpuType {
    I8088 = 1,
    I8086,
    K1810VM86,
    V20,
    V30,
    I80188,
    I80186,
    I80286,
    I386SX,
    Ibm386SLC,
    Ibm486SLC,
    I386DX,
    Ibm486BL,
    RapidCad,
    I486SLC,
    I486DLC,
    I486SX,
    Am486SX,
    Cx486S,
    I486DX,
    Am486DX,
    Am486DXL,
    Cx486DX,
    StpcDX,
    I486SXS,
    I486DXS,
    Am486DXEnhanced,
    Cx5x86,
    PentiumOverDrive,
    WinChip,
    WinChip2,
    Pentium,
    PentiumMmx,
    Cx6x86,
    Cx6x86MX,
    Cx6x86L,
    CxGX1,
    K5Model0,
    K5,
    K6,
    K62,
    K62C,
    K63,
    K62Plus,
    K63Plus,
    CyrixIII,
    PentiumPro,
    PentiumII,
    PentiumIIOverDrive,
}

impl CpuType {
    /// Looks up a raw ordinal. Returns `None` for 0 and for anything past the end of the table.
    #[inline(always)]
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::from_repr(ordinal)
    }

    #[inline(always)]
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Finds a CPU by its display name or identifier, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|cpu| {
            let ident: &'static str = (*cpu).into();
            cpu.name().eq_ignore_ascii_case(name) || ident.eq_ignore_ascii_case(name)
        })
    }

    #[inline(always)]
    pub fn mode(self) -> CpuMode {
        CpuMode::from_ordinal(self.ordinal())
    }

    /// Marketing name of this processor.
    pub fn name(self) -> &'static str {
        match self {
            Self::I8088 => "Intel 8088",
            Self::I8086 => "Intel 8086",
            Self::K1810VM86 => "Kyiv Research Institute of Microdevices K1810VM86",
            Self::V20 => "NEC V20",
            Self::V30 => "NEC V30",
            Self::I80188 => "Intel 80188",
            Self::I80186 => "Intel 80186",
            Self::I80286 => "Intel 80286",
            Self::I386SX => "Intel i386SX",
            Self::Ibm386SLC => "IBM 386SLC",
            Self::Ibm486SLC => "IBM 486SLC",
            Self::I386DX => "Intel i386DX",
            Self::Ibm486BL => "IBM 486BL",
            Self::RapidCad => "Intel RapidCAD",
            Self::I486SLC => "Intel 486SLC",
            Self::I486DLC => "Intel 486DLC",
            Self::I486SX => "Intel i486SX",
            Self::Am486SX => "AMD Am486SX",
            Self::Cx486S => "Cyrix Cx486S",
            Self::I486DX => "Intel i486DX",
            Self::Am486DX => "AMD Am486DX",
            Self::Am486DXL => "AMD Am486DXL",
            Self::Cx486DX => "Cyrix Cx486DX",
            Self::StpcDX => "ST STPC-DX",
            Self::I486SXS => "Intel i486SX-S",
            Self::I486DXS => "Intel i486DX-S",
            Self::Am486DXEnhanced => "AMD Am486DX (Enhanced)",
            Self::Cx5x86 => "Cyrix Cx5x86",
            Self::PentiumOverDrive => "Intel Pentium OverDrive",
            Self::WinChip => "IDT WinChip",
            Self::WinChip2 => "IDT WinChip 2",
            Self::Pentium => "Intel Pentium",
            Self::PentiumMmx => "Intel Pentium MMX",
            Self::Cx6x86 => "Cyrix Cx6x86",
            Self::Cx6x86MX => "Cyrix Cx6x86MX",
            Self::Cx6x86L => "Cyrix Cx6x86L",
            Self::CxGX1 => "Cyrix CxGX1",
            Self::K5Model0 => "AMD K5 (Model 0)",
            Self::K5 => "AMD K5 (Model 1/2/3)",
            Self::K6 => "AMD K6 (Model 6)",
            Self::K62 => "AMD K6-2",
            Self::K62C => "AMD K6-2C",
            Self::K63 => "AMD K6-3",
            Self::K62Plus => "AMD K6-2+",
            Self::K63Plus => "AMD K6-III+",
            Self::CyrixIII => "Cyrix III",
            Self::PentiumPro => "Intel Pentium Pro",
            Self::PentiumII => "Intel Pentium II",
            Self::PentiumIIOverDrive => "Intel Pentium II OverDrive",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromRepr, VariantArray, IntoStaticStr,
)]
#[repr(u32)]
pub enum FpuType {
    None = 1,
    I8087,
    I80187,
    I287,
    I287XL,
    I387,
    I487SX,
    Internal,
}

impl FpuType {
    /// Looks up a raw ordinal. Returns `None` for 0 and for anything past the end of the table.
    #[inline(always)]
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        Self::from_repr(ordinal)
    }

    #[inline(always)]
    pub fn ordinal(self) -> u32 {
        self as u32
    }

    /// Finds an FPU by its display name or identifier, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|fpu| {
            let ident: &'static str = (*fpu).into();
            fpu.name().eq_ignore_ascii_case(name) || ident.eq_ignore_ascii_case(name)
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::I8087 => "Intel 8087",
            Self::I80187 => "Intel 80187",
            Self::I287 => "Intel 287",
            Self::I287XL => "Intel 287XL",
            Self::I387 => "Intel 387",
            Self::I487SX => "Intel 487SX",
            Self::Internal => "Internal FPU",
        }
    }
}

/// Timing model of the programmable interval timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PitMode {
    #[default]
    Fast,
    Slow,
}

impl PitMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Fast => "Fast",
            Self::Slow => "Slow",
        }
    }
}
