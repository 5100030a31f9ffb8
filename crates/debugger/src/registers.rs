//! Register directory: which registers exist, how wide they are and where to read them from.

use crate::Error;
use indexmap::IndexMap;
use machine::{CpuMode, Register, RegisterFile};

/// Width of a register, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    W8,
    W16,
    W32,
}

impl Width {
    #[inline(always)]
    pub fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
        }
    }

    #[inline(always)]
    pub fn mask(self) -> u32 {
        u32::MAX >> (32 - self.bits())
    }
}

/// Reads the raw storage a register lives in.
pub type Accessor = fn(&RegisterFile) -> u32;

#[derive(Debug, Clone, Copy)]
pub struct RegisterDescriptor {
    pub register: Register,
    pub width: Width,
    accessor: Accessor,
}

impl RegisterDescriptor {
    pub fn new(register: Register, width: Width, accessor: Accessor) -> Self {
        Self {
            register,
            width,
            accessor,
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.register.name()
    }

    /// Reads this register out of `regs`, masked to its width.
    #[inline(always)]
    pub fn read(&self, regs: &RegisterFile) -> u32 {
        (self.accessor)(regs) & self.width.mask()
    }
}

// accessors are not compared: two descriptors naming the same register at the same width
// read the same thing
impl PartialEq for RegisterDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.register == other.register && self.width == other.width
    }
}

impl Eq for RegisterDescriptor {}

const LEGACY_GPRS: [Register; 8] = [
    Register::Ax,
    Register::Bx,
    Register::Cx,
    Register::Dx,
    Register::Sp,
    Register::Bp,
    Register::Si,
    Register::Di,
];

const EXTENDED_GPRS: [Register; 8] = [
    Register::Eax,
    Register::Ebx,
    Register::Ecx,
    Register::Edx,
    Register::Esp,
    Register::Ebp,
    Register::Esi,
    Register::Edi,
];

/// Table row order for a CPU mode.
pub fn register_order(mode: CpuMode) -> Vec<Register> {
    let mut order = Vec::with_capacity(20);
    match mode {
        CpuMode::Legacy => {
            order.extend(LEGACY_GPRS);
            order.extend([Register::Ip, Register::Flags]);
            order.extend([Register::Cs, Register::Ds, Register::Es, Register::Ss]);
        }
        CpuMode::Extended => {
            order.extend(EXTENDED_GPRS);
            order.extend([Register::Ip, Register::Flags, Register::Eflags]);
            order.extend([
                Register::Cs,
                Register::Ds,
                Register::Es,
                Register::Fs,
                Register::Gs,
                Register::Ss,
            ]);
        }
    }

    order
}

/// Mapping from register names to descriptors.
#[derive(Debug, Clone, Default)]
pub struct RegisterDirectory {
    entries: IndexMap<Register, RegisterDescriptor>,
}

impl RegisterDirectory {
    /// An empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory with every x86 register the inspector can show.
    pub fn x86() -> Self {
        let mut dir = Self::new();

        dir.insert(Register::Eax, Width::W32, |r| r.eax);
        dir.insert(Register::Ebx, Width::W32, |r| r.ebx);
        dir.insert(Register::Ecx, Width::W32, |r| r.ecx);
        dir.insert(Register::Edx, Width::W32, |r| r.edx);
        dir.insert(Register::Esp, Width::W32, |r| r.esp);
        dir.insert(Register::Ebp, Width::W32, |r| r.ebp);
        dir.insert(Register::Esi, Width::W32, |r| r.esi);
        dir.insert(Register::Edi, Width::W32, |r| r.edi);

        // narrower views are masked on read
        dir.insert(Register::Ax, Width::W16, |r| r.eax);
        dir.insert(Register::Bx, Width::W16, |r| r.ebx);
        dir.insert(Register::Cx, Width::W16, |r| r.ecx);
        dir.insert(Register::Dx, Width::W16, |r| r.edx);
        dir.insert(Register::Sp, Width::W16, |r| r.esp);
        dir.insert(Register::Bp, Width::W16, |r| r.ebp);
        dir.insert(Register::Si, Width::W16, |r| r.esi);
        dir.insert(Register::Di, Width::W16, |r| r.edi);

        dir.insert(Register::Al, Width::W8, |r| r.eax);
        dir.insert(Register::Ah, Width::W8, |r| r.eax >> 8);
        dir.insert(Register::Bl, Width::W8, |r| r.ebx);
        dir.insert(Register::Bh, Width::W8, |r| r.ebx >> 8);
        dir.insert(Register::Cl, Width::W8, |r| r.ecx);
        dir.insert(Register::Ch, Width::W8, |r| r.ecx >> 8);
        dir.insert(Register::Dl, Width::W8, |r| r.edx);
        dir.insert(Register::Dh, Width::W8, |r| r.edx >> 8);

        dir.insert(Register::Ip, Width::W32, |r| r.pc);
        dir.insert(Register::Flags, Width::W16, |r| u32::from(r.flags));
        dir.insert(Register::Eflags, Width::W16, |r| u32::from(r.eflags));

        dir.insert(Register::Cs, Width::W16, |r| u32::from(r.cs));
        dir.insert(Register::Ds, Width::W16, |r| u32::from(r.ds));
        dir.insert(Register::Es, Width::W16, |r| u32::from(r.es));
        dir.insert(Register::Fs, Width::W16, |r| u32::from(r.fs));
        dir.insert(Register::Gs, Width::W16, |r| u32::from(r.gs));
        dir.insert(Register::Ss, Width::W16, |r| u32::from(r.ss));

        dir
    }

    /// Adds or replaces the descriptor of `register`.
    pub fn insert(&mut self, register: Register, width: Width, accessor: Accessor) {
        self.entries
            .insert(register, RegisterDescriptor::new(register, width, accessor));
    }

    /// Removes `register` from the directory, returning its descriptor.
    pub fn remove(&mut self, register: Register) -> Option<RegisterDescriptor> {
        self.entries.shift_remove(&register)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, register: Register) -> Result<RegisterDescriptor, Error> {
        self.entries
            .get(&register)
            .copied()
            .ok_or_else(|| Error::UnknownRegister {
                name: register.name().to_owned(),
            })
    }

    /// Looks a register up by name, ignoring ASCII case.
    pub fn lookup(&self, name: &str) -> Result<RegisterDescriptor, Error> {
        let register = name
            .parse::<Register>()
            .map_err(|_| Error::UnknownRegister {
                name: name.to_owned(),
            })?;

        self.get(register)
    }

    /// Ordered descriptors for the registers shown in `mode`.
    pub fn register_set(&self, mode: CpuMode) -> Result<Vec<RegisterDescriptor>, Error> {
        register_order(mode)
            .into_iter()
            .map(|register| self.get(register))
            .collect()
    }
}

/// Ordered descriptors for the registers shown in `mode`, using the full x86 directory.
pub fn build_register_set(mode: CpuMode) -> Result<Vec<RegisterDescriptor>, Error> {
    RegisterDirectory::x86().register_set(mode)
}
