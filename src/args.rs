use serde::{Deserialize, Serialize};
use std::fmt;

/// A single register in one numeric space: 0..=31 are the general-purpose
/// registers, 32..=63 the floating-point registers. `Reg(0)` is the
/// architectural zero register, not the absence of a register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Reg(pub u16);

impl Reg {
    /// First floating-point register in the combined numeric space.
    pub const FLOAT_BASE: u16 = 32;

    pub fn gpr(n: u16) -> Self {
        Reg(n)
    }

    pub fn fpr(n: u16) -> Self {
        Reg(Self::FLOAT_BASE + n)
    }
}

impl fmt::Display for Reg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        match r {
            0 => write!(f, "$zero"),
            1 => write!(f, "$ra"),
            2 => write!(f, "$tp"),
            3 => write!(f, "$sp"),
            4..=11 => write!(f, "$a{}", r - 4),
            12..=20 => write!(f, "$t{}", r - 12),
            21 => write!(f, "$r21"),
            22 => write!(f, "$fp"),
            23..=31 => write!(f, "$s{}", r - 23),
            32..=39 => write!(f, "$fa{}", r - 32),
            40..=55 => write!(f, "$ft{}", r - 40),
            56..=63 => write!(f, "$fs{}", r - 56),
            _ => write!(f, "Unknown({r})"),
        }
    }
}

/// One of the eight floating condition-flag registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fcc(pub u8);

impl fmt::Display for Fcc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$fcc{}", self.0)
    }
}

/// An unsigned immediate. The rendering base is fixed per opcode field, not
/// per instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uimm {
    pub imm: u32,
    pub decimal: bool,
}

impl fmt::Display for Uimm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.decimal {
            write!(f, "{}", self.imm)
        } else {
            write!(f, "{:#x}", self.imm)
        }
    }
}

/// A signed immediate decoded from a field of `width` bits (1..=16).
/// `imm` is already sign-extended; `width` is retained only to reconstruct
/// the raw bit pattern for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simm16 {
    pub imm: i16,
    pub width: u8,
}

impl Simm16 {
    pub fn new(imm: i16, width: u8) -> Self {
        debug_assert!((1..=16).contains(&width), "bad Simm16 width {width}");
        Simm16 { imm, width }
    }
}

impl fmt::Display for Simm16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imm == 0 {
            return write!(f, "{:#x}", self.imm);
        }
        // Mask back down to the encoded field, then reinterpret the pattern
        // as i16 so a full-width negative prints its sign-extended form.
        let mask = (1u32 << self.width) - 1;
        let raw = (self.imm as u16 as u32 & mask) as u16;
        write!(f, "{}(0x{:x})", self.imm, raw as i16 as i64 as u64)
    }
}

/// A signed immediate decoded from a field of `width` bits (1..=32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simm32 {
    pub imm: i32,
    pub width: u8,
}

impl Simm32 {
    pub fn new(imm: i32, width: u8) -> Self {
        debug_assert!((1..=32).contains(&width), "bad Simm32 width {width}");
        Simm32 { imm, width }
    }
}

impl fmt::Display for Simm32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imm == 0 {
            return write!(f, "{:#x}", self.imm);
        }
        let mask = (((1u64 << self.width) - 1) & 0xFFFF_FFFF) as u32;
        let raw = self.imm as u32 & mask;
        write!(f, "{}(0x{:x})", self.imm, raw as i32 as i64 as u64)
    }
}

/// A PC-relative branch offset, in bytes, already scaled and sign-extended.
/// `width` covers the encoded bits plus the two implied zero bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetSimm {
    pub imm: i32,
    pub width: u8,
}

impl OffsetSimm {
    pub fn new(imm: i32, width: u8) -> Self {
        debug_assert!((1..=32).contains(&width), "bad OffsetSimm width {width}");
        OffsetSimm { imm, width }
    }
}

impl fmt::Display for OffsetSimm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imm == 0 {
            return write!(f, "{:#x}", self.imm);
        }
        let mask = (((1u64 << self.width) - 1) & 0xFFFF_FFFF) as u32;
        let raw = self.imm as u32 & mask;
        write!(f, "{}(0x{:x})", self.imm, raw as i32 as i64 as u64)
    }
}

/// A shift amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaSimm(pub i16);

impl fmt::Display for SaSimm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// A syscall/break code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSimm(pub i16);

impl fmt::Display for CodeSimm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// One decoded operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arg {
    Reg(Reg),
    Fcc(Fcc),
    Uimm(Uimm),
    Simm16(Simm16),
    Simm32(Simm32),
    Offset(OffsetSimm),
    Sa(SaSimm),
    Code(CodeSimm),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Reg(a) => a.fmt(f),
            Arg::Fcc(a) => a.fmt(f),
            Arg::Uimm(a) => a.fmt(f),
            Arg::Simm16(a) => a.fmt(f),
            Arg::Simm32(a) => a.fmt(f),
            Arg::Offset(a) => a.fmt(f),
            Arg::Sa(a) => a.fmt(f),
            Arg::Code(a) => a.fmt(f),
        }
    }
}
