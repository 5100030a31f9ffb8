//! The x86 register file.

use strum::{EnumString, IntoStaticStr, VariantArray};

/// Every register name the inspector knows how to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, VariantArray)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Register {
    // 32-bit general purpose (i386+)
    Eax,
    Ebx,
    Ecx,
    Edx,
    Esp,
    Ebp,
    Esi,
    Edi,

    // 16-bit views
    Ax,
    Bx,
    Cx,
    Dx,
    Sp,
    Bp,
    Si,
    Di,

    // 8-bit views
    Al,
    Ah,
    Bl,
    Bh,
    Cl,
    Ch,
    Dl,
    Dh,

    // misc
    Ip,
    Flags,
    Eflags,

    // segments
    Cs,
    Ds,
    Es,
    Fs,
    Gs,
    Ss,
}

impl Register {
    /// Upper case name, as shown in register tables.
    #[inline(always)]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Register file as stored by the emulator.
///
/// The 16 and 8-bit general purpose registers do not have storage of their own: they alias the
/// low bits of the 32-bit ones. `eflags` holds only the upper half of EFLAGS, the lower half
/// being `flags`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegisterFile {
    pub eax: u32,
    pub ebx: u32,
    pub ecx: u32,
    pub edx: u32,
    pub esp: u32,
    pub ebp: u32,
    pub esi: u32,
    pub edi: u32,
    /// Program counter.
    pub pc: u32,
    pub flags: u16,
    pub eflags: u16,
    pub cs: u16,
    pub ds: u16,
    pub es: u16,
    pub fs: u16,
    pub gs: u16,
    pub ss: u16,
}

impl RegisterFile {
    /// The general purpose registers in encoding order (EAX, ECX, EDX, EBX, ESP, EBP, ESI, EDI).
    pub fn gprs_mut(&mut self) -> [&mut u32; 8] {
        [
            &mut self.eax,
            &mut self.ecx,
            &mut self.edx,
            &mut self.ebx,
            &mut self.esp,
            &mut self.ebp,
            &mut self.esi,
            &mut self.edi,
        ]
    }
}
