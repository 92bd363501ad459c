use crate::args::{Arg, CodeSimm, Fcc, OffsetSimm, Reg, SaSimm, Simm16, Simm32, Uimm};
use crate::inst::{Args, Inst, Op};

/// Every instruction occupies exactly four bytes; callers advance their
/// cursor by this much whether or not a word decoded.
pub const INST_SIZE: usize = 4;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("illegal instruction {word:#010x} at {addr:#x}")]
    IllegalInstruction { word: u32, addr: u64 },
}

/// Operand-extraction descriptor: which field of the word an operand comes
/// from and how to widen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Rd,
    Rj,
    Rk,
    Fd,
    Fj,
    Fk,
    Fa,
    Cd,
    Cj,
    Ca,
    Sa2,
    Sa3,
    Ui5,
    Ui6,
    Ui12,
    Csr14,
    Msb6,
    Lsb6,
    Hint5,
    Hint15,
    Si12,
    Si14,
    Si16,
    Si20,
    Code15,
    Offs16,
    Offs21,
    Offs26,
}

#[inline]
fn sign_ext(v: u32, bits: u32) -> i32 {
    let s = 32 - bits;
    ((v << s) as i32) >> s
}

fn extract(field: Field, w: u32) -> Arg {
    match field {
        Field::Rd => Arg::Reg(Reg::gpr((w & 0x1F) as u16)),
        Field::Rj => Arg::Reg(Reg::gpr(((w >> 5) & 0x1F) as u16)),
        Field::Rk => Arg::Reg(Reg::gpr(((w >> 10) & 0x1F) as u16)),
        Field::Fd => Arg::Reg(Reg::fpr((w & 0x1F) as u16)),
        Field::Fj => Arg::Reg(Reg::fpr(((w >> 5) & 0x1F) as u16)),
        Field::Fk => Arg::Reg(Reg::fpr(((w >> 10) & 0x1F) as u16)),
        Field::Fa => Arg::Reg(Reg::fpr(((w >> 15) & 0x1F) as u16)),
        Field::Cd => Arg::Fcc(Fcc((w & 0x7) as u8)),
        Field::Cj => Arg::Fcc(Fcc(((w >> 5) & 0x7) as u8)),
        Field::Ca => Arg::Fcc(Fcc(((w >> 15) & 0x7) as u8)),
        Field::Sa2 => Arg::Sa(SaSimm(((w >> 15) & 0x3) as i16)),
        Field::Sa3 => Arg::Sa(SaSimm(((w >> 15) & 0x7) as i16)),
        Field::Ui5 => Arg::Uimm(Uimm { imm: (w >> 10) & 0x1F, decimal: false }),
        Field::Ui6 => Arg::Uimm(Uimm { imm: (w >> 10) & 0x3F, decimal: false }),
        Field::Ui12 => Arg::Uimm(Uimm { imm: (w >> 10) & 0xFFF, decimal: false }),
        Field::Csr14 => Arg::Uimm(Uimm { imm: (w >> 10) & 0x3FFF, decimal: false }),
        Field::Msb6 => Arg::Uimm(Uimm { imm: (w >> 16) & 0x3F, decimal: true }),
        Field::Lsb6 => Arg::Uimm(Uimm { imm: (w >> 10) & 0x3F, decimal: true }),
        Field::Hint5 => Arg::Uimm(Uimm { imm: w & 0x1F, decimal: true }),
        Field::Hint15 => Arg::Uimm(Uimm { imm: w & 0x7FFF, decimal: false }),
        Field::Si12 => Arg::Simm16(Simm16::new(sign_ext((w >> 10) & 0xFFF, 12) as i16, 12)),
        // ll/sc offsets are encoded in units of four bytes; store the scaled
        // value, widened by the two implied zero bits.
        Field::Si14 => Arg::Simm32(Simm32::new(sign_ext((w >> 10) & 0x3FFF, 14) << 2, 16)),
        Field::Si16 => Arg::Simm16(Simm16::new(sign_ext((w >> 10) & 0xFFFF, 16) as i16, 16)),
        Field::Si20 => Arg::Simm32(Simm32::new(sign_ext((w >> 5) & 0xF_FFFF, 20), 20)),
        Field::Code15 => Arg::Code(CodeSimm((w & 0x7FFF) as i16)),
        Field::Offs16 => {
            Arg::Offset(OffsetSimm::new(sign_ext((w >> 10) & 0xFFFF, 16) << 2, 18))
        }
        Field::Offs21 => {
            let raw = ((w & 0x1F) << 16) | ((w >> 10) & 0xFFFF);
            Arg::Offset(OffsetSimm::new(sign_ext(raw, 21) << 2, 23))
        }
        Field::Offs26 => {
            let raw = ((w & 0x3FF) << 16) | ((w >> 10) & 0xFFFF);
            Arg::Offset(OffsetSimm::new(sign_ext(raw, 26) << 2, 28))
        }
    }
}

/// One table entry: the fixed bits identifying an opcode and the recipe for
/// pulling its operands out of the word, in manual order.
#[derive(Debug, Clone, Copy)]
pub struct InstFormat {
    pub op: Op,
    pub mask: u32,
    pub value: u32,
    pub args: &'static [Field],
}

use Field::*;

const DJK: &[Field] = &[Rd, Rj, Rk];
const DJ: &[Field] = &[Rd, Rj];
const DJK_SA2: &[Field] = &[Rd, Rj, Rk, Sa2];
const DJK_SA3: &[Field] = &[Rd, Rj, Rk, Sa3];
const DJ_UI5: &[Field] = &[Rd, Rj, Ui5];
const DJ_UI6: &[Field] = &[Rd, Rj, Ui6];
const DJ_UI12: &[Field] = &[Rd, Rj, Ui12];
const DJ_SI12: &[Field] = &[Rd, Rj, Si12];
const DJ_SI14: &[Field] = &[Rd, Rj, Si14];
const DJ_SI16: &[Field] = &[Rd, Rj, Si16];
const DJ_BSTR: &[Field] = &[Rd, Rj, Msb6, Lsb6];
const D_SI20: &[Field] = &[Rd, Si20];
const D_CSR: &[Field] = &[Rd, Csr14];
const DJ_CSR: &[Field] = &[Rd, Rj, Csr14];
const CODE: &[Field] = &[Code15];
const HINT: &[Field] = &[Hint15];
const PRELD: &[Field] = &[Hint5, Rj, Si12];
const J_OFFS21: &[Field] = &[Rj, Offs21];
const CJ_OFFS21: &[Field] = &[Cj, Offs21];
const DJ_OFFS16: &[Field] = &[Rd, Rj, Offs16];
const JD_OFFS16: &[Field] = &[Rj, Rd, Offs16];
const OFFS26: &[Field] = &[Offs26];
const FDJK: &[Field] = &[Fd, Fj, Fk];
const FDJ: &[Field] = &[Fd, Fj];
const FDJKA: &[Field] = &[Fd, Fj, Fk, Fa];
const FDJK_CA: &[Field] = &[Fd, Fj, Fk, Ca];
const FD_RJ: &[Field] = &[Fd, Rj];
const D_FJ: &[Field] = &[Rd, Fj];
const CD_RJ: &[Field] = &[Cd, Rj];
const D_CJ: &[Field] = &[Rd, Cj];
const CD_FJK: &[Field] = &[Cd, Fj, Fk];
const FDJ_MEM: &[Field] = &[Fd, Rj, Si12];
const FDJK_MEM: &[Field] = &[Fd, Rj, Rk];
const NONE: &[Field] = &[];

const fn ent(op: Op, mask: u32, value: u32, args: &'static [Field]) -> InstFormat {
    InstFormat { op, mask, value, args }
}

/// The opcode table. Entries whose fixed-bit patterns nest (csrrd/csrwr
/// inside csrxchg, bceqz/bcnez inside the same major opcode) rely on the
/// matcher preferring the entry with the more specific mask.
pub const FORMATS: &[InstFormat] = &[
    ent(Op::CloW, 0xFFFF_FC00, 0x0000_1000, DJ),
    ent(Op::ClzW, 0xFFFF_FC00, 0x0000_1400, DJ),
    ent(Op::CtoW, 0xFFFF_FC00, 0x0000_1800, DJ),
    ent(Op::CtzW, 0xFFFF_FC00, 0x0000_1C00, DJ),
    ent(Op::CloD, 0xFFFF_FC00, 0x0000_2000, DJ),
    ent(Op::ClzD, 0xFFFF_FC00, 0x0000_2400, DJ),
    ent(Op::CtoD, 0xFFFF_FC00, 0x0000_2800, DJ),
    ent(Op::CtzD, 0xFFFF_FC00, 0x0000_2C00, DJ),
    ent(Op::RevB2H, 0xFFFF_FC00, 0x0000_3000, DJ),
    ent(Op::RevBD, 0xFFFF_FC00, 0x0000_3C00, DJ),
    ent(Op::ExtWH, 0xFFFF_FC00, 0x0000_5800, DJ),
    ent(Op::ExtWB, 0xFFFF_FC00, 0x0000_5C00, DJ),
    ent(Op::RdtimelW, 0xFFFF_FC00, 0x0000_6000, DJ),
    ent(Op::RdtimehW, 0xFFFF_FC00, 0x0000_6400, DJ),
    ent(Op::RdtimeD, 0xFFFF_FC00, 0x0000_6800, DJ),
    ent(Op::Cpucfg, 0xFFFF_FC00, 0x0000_6C00, DJ),
    ent(Op::AlslW, 0xFFFE_8000, 0x0004_0000, DJK_SA2),
    ent(Op::AlslWu, 0xFFFE_8000, 0x0006_0000, DJK_SA2),
    ent(Op::AlslD, 0xFFFE_8000, 0x002C_0000, DJK_SA2),
    ent(Op::BytepickW, 0xFFFE_8000, 0x0008_0000, DJK_SA2),
    ent(Op::BytepickD, 0xFFFC_0000, 0x000C_0000, DJK_SA3),
    ent(Op::AddW, 0xFFFF_8000, 0x0010_0000, DJK),
    ent(Op::AddD, 0xFFFF_8000, 0x0010_8000, DJK),
    ent(Op::SubW, 0xFFFF_8000, 0x0011_0000, DJK),
    ent(Op::SubD, 0xFFFF_8000, 0x0011_8000, DJK),
    ent(Op::Slt, 0xFFFF_8000, 0x0012_0000, DJK),
    ent(Op::Sltu, 0xFFFF_8000, 0x0012_8000, DJK),
    ent(Op::Maskeqz, 0xFFFF_8000, 0x0013_0000, DJK),
    ent(Op::Masknez, 0xFFFF_8000, 0x0013_8000, DJK),
    ent(Op::Nor, 0xFFFF_8000, 0x0014_0000, DJK),
    ent(Op::And, 0xFFFF_8000, 0x0014_8000, DJK),
    ent(Op::Or, 0xFFFF_8000, 0x0015_0000, DJK),
    ent(Op::Xor, 0xFFFF_8000, 0x0015_8000, DJK),
    ent(Op::Orn, 0xFFFF_8000, 0x0016_0000, DJK),
    ent(Op::Andn, 0xFFFF_8000, 0x0016_8000, DJK),
    ent(Op::SllW, 0xFFFF_8000, 0x0017_0000, DJK),
    ent(Op::SrlW, 0xFFFF_8000, 0x0017_8000, DJK),
    ent(Op::SraW, 0xFFFF_8000, 0x0018_0000, DJK),
    ent(Op::SllD, 0xFFFF_8000, 0x0018_8000, DJK),
    ent(Op::SrlD, 0xFFFF_8000, 0x0019_0000, DJK),
    ent(Op::SraD, 0xFFFF_8000, 0x0019_8000, DJK),
    ent(Op::RotrW, 0xFFFF_8000, 0x001B_0000, DJK),
    ent(Op::RotrD, 0xFFFF_8000, 0x001B_8000, DJK),
    ent(Op::MulW, 0xFFFF_8000, 0x001C_0000, DJK),
    ent(Op::MulhW, 0xFFFF_8000, 0x001C_8000, DJK),
    ent(Op::MulhWu, 0xFFFF_8000, 0x001D_0000, DJK),
    ent(Op::MulD, 0xFFFF_8000, 0x001D_8000, DJK),
    ent(Op::MulhD, 0xFFFF_8000, 0x001E_0000, DJK),
    ent(Op::MulhDu, 0xFFFF_8000, 0x001E_8000, DJK),
    ent(Op::MulwDW, 0xFFFF_8000, 0x001F_0000, DJK),
    ent(Op::MulwDWu, 0xFFFF_8000, 0x001F_8000, DJK),
    ent(Op::DivW, 0xFFFF_8000, 0x0020_0000, DJK),
    ent(Op::ModW, 0xFFFF_8000, 0x0020_8000, DJK),
    ent(Op::DivWu, 0xFFFF_8000, 0x0021_0000, DJK),
    ent(Op::ModWu, 0xFFFF_8000, 0x0021_8000, DJK),
    ent(Op::DivD, 0xFFFF_8000, 0x0022_0000, DJK),
    ent(Op::ModD, 0xFFFF_8000, 0x0022_8000, DJK),
    ent(Op::DivDu, 0xFFFF_8000, 0x0023_0000, DJK),
    ent(Op::ModDu, 0xFFFF_8000, 0x0023_8000, DJK),
    ent(Op::Break, 0xFFFF_8000, 0x002A_0000, CODE),
    ent(Op::Syscall, 0xFFFF_8000, 0x002B_0000, CODE),
    ent(Op::SlliW, 0xFFFF_8000, 0x0040_8000, DJ_UI5),
    ent(Op::SlliD, 0xFFFF_0000, 0x0041_0000, DJ_UI6),
    ent(Op::SrliW, 0xFFFF_8000, 0x0044_8000, DJ_UI5),
    ent(Op::SrliD, 0xFFFF_0000, 0x0045_0000, DJ_UI6),
    ent(Op::SraiW, 0xFFFF_8000, 0x0048_8000, DJ_UI5),
    ent(Op::SraiD, 0xFFFF_0000, 0x0049_0000, DJ_UI6),
    ent(Op::RotriW, 0xFFFF_8000, 0x004C_8000, DJ_UI5),
    ent(Op::RotriD, 0xFFFF_0000, 0x004D_0000, DJ_UI6),
    ent(Op::BstrinsD, 0xFFC0_0000, 0x0080_0000, DJ_BSTR),
    ent(Op::BstrpickD, 0xFFC0_0000, 0x00C0_0000, DJ_BSTR),
    ent(Op::FaddS, 0xFFFF_8000, 0x0100_8000, FDJK),
    ent(Op::FaddD, 0xFFFF_8000, 0x0101_0000, FDJK),
    ent(Op::FsubS, 0xFFFF_8000, 0x0102_8000, FDJK),
    ent(Op::FsubD, 0xFFFF_8000, 0x0103_0000, FDJK),
    ent(Op::FmulS, 0xFFFF_8000, 0x0104_8000, FDJK),
    ent(Op::FmulD, 0xFFFF_8000, 0x0105_0000, FDJK),
    ent(Op::FdivS, 0xFFFF_8000, 0x0106_8000, FDJK),
    ent(Op::FdivD, 0xFFFF_8000, 0x0107_0000, FDJK),
    ent(Op::FmaxS, 0xFFFF_8000, 0x0108_8000, FDJK),
    ent(Op::FmaxD, 0xFFFF_8000, 0x0109_0000, FDJK),
    ent(Op::FminS, 0xFFFF_8000, 0x010A_8000, FDJK),
    ent(Op::FminD, 0xFFFF_8000, 0x010B_0000, FDJK),
    ent(Op::FabsS, 0xFFFF_FC00, 0x0114_0400, FDJ),
    ent(Op::FabsD, 0xFFFF_FC00, 0x0114_0800, FDJ),
    ent(Op::FnegS, 0xFFFF_FC00, 0x0114_1400, FDJ),
    ent(Op::FnegD, 0xFFFF_FC00, 0x0114_1800, FDJ),
    ent(Op::FsqrtS, 0xFFFF_FC00, 0x0114_4400, FDJ),
    ent(Op::FsqrtD, 0xFFFF_FC00, 0x0114_4800, FDJ),
    ent(Op::FmovS, 0xFFFF_FC00, 0x0114_9400, FDJ),
    ent(Op::FmovD, 0xFFFF_FC00, 0x0114_9800, FDJ),
    ent(Op::Movgr2frW, 0xFFFF_FC00, 0x0114_A400, FD_RJ),
    ent(Op::Movgr2frD, 0xFFFF_FC00, 0x0114_A800, FD_RJ),
    ent(Op::Movfr2grS, 0xFFFF_FC00, 0x0114_B400, D_FJ),
    ent(Op::Movfr2grD, 0xFFFF_FC00, 0x0114_B800, D_FJ),
    ent(Op::Movgr2cf, 0xFFFF_FC18, 0x0114_D800, CD_RJ),
    ent(Op::Movcf2gr, 0xFFFF_FF00, 0x0114_DC00, D_CJ),
    ent(Op::Slti, 0xFFC0_0000, 0x0200_0000, DJ_SI12),
    ent(Op::Sltui, 0xFFC0_0000, 0x0240_0000, DJ_SI12),
    ent(Op::AddiW, 0xFFC0_0000, 0x0280_0000, DJ_SI12),
    ent(Op::AddiD, 0xFFC0_0000, 0x02C0_0000, DJ_SI12),
    ent(Op::Lu52iD, 0xFFC0_0000, 0x0300_0000, DJ_SI12),
    ent(Op::Andi, 0xFFC0_0000, 0x0340_0000, DJ_UI12),
    ent(Op::Ori, 0xFFC0_0000, 0x0380_0000, DJ_UI12),
    ent(Op::Xori, 0xFFC0_0000, 0x03C0_0000, DJ_UI12),
    ent(Op::Csrrd, 0xFF00_03E0, 0x0400_0000, D_CSR),
    ent(Op::Csrwr, 0xFF00_03E0, 0x0400_0020, D_CSR),
    ent(Op::Csrxchg, 0xFF00_0000, 0x0400_0000, DJ_CSR),
    ent(Op::Ertn, 0xFFFF_FFFF, 0x0648_3800, NONE),
    ent(Op::Idle, 0xFFFF_8000, 0x0648_8000, HINT),
    ent(Op::FmaddS, 0xFFF0_0000, 0x0810_0000, FDJKA),
    ent(Op::FmaddD, 0xFFF0_0000, 0x0820_0000, FDJKA),
    ent(Op::FcmpCltS, 0xFFFF_8018, 0x0C11_0000, CD_FJK),
    ent(Op::FcmpCeqS, 0xFFFF_8018, 0x0C12_0000, CD_FJK),
    ent(Op::FcmpCleS, 0xFFFF_8018, 0x0C13_0000, CD_FJK),
    ent(Op::FcmpCltD, 0xFFFF_8018, 0x0C21_0000, CD_FJK),
    ent(Op::FcmpCeqD, 0xFFFF_8018, 0x0C22_0000, CD_FJK),
    ent(Op::FcmpCleD, 0xFFFF_8018, 0x0C23_0000, CD_FJK),
    ent(Op::Fsel, 0xFFFC_0000, 0x0D00_0000, FDJK_CA),
    ent(Op::Addu16iD, 0xFC00_0000, 0x1000_0000, DJ_SI16),
    ent(Op::Lu12iW, 0xFE00_0000, 0x1400_0000, D_SI20),
    ent(Op::Lu32iD, 0xFE00_0000, 0x1600_0000, D_SI20),
    ent(Op::Pcaddi, 0xFE00_0000, 0x1800_0000, D_SI20),
    ent(Op::Pcalau12i, 0xFE00_0000, 0x1A00_0000, D_SI20),
    ent(Op::Pcaddu12i, 0xFE00_0000, 0x1C00_0000, D_SI20),
    ent(Op::Pcaddu18i, 0xFE00_0000, 0x1E00_0000, D_SI20),
    ent(Op::LlW, 0xFF00_0000, 0x2000_0000, DJ_SI14),
    ent(Op::ScW, 0xFF00_0000, 0x2100_0000, DJ_SI14),
    ent(Op::LlD, 0xFF00_0000, 0x2200_0000, DJ_SI14),
    ent(Op::ScD, 0xFF00_0000, 0x2300_0000, DJ_SI14),
    ent(Op::LdptrW, 0xFF00_0000, 0x2400_0000, DJ_SI14),
    ent(Op::StptrW, 0xFF00_0000, 0x2500_0000, DJ_SI14),
    ent(Op::LdptrD, 0xFF00_0000, 0x2600_0000, DJ_SI14),
    ent(Op::StptrD, 0xFF00_0000, 0x2700_0000, DJ_SI14),
    ent(Op::LdB, 0xFFC0_0000, 0x2800_0000, DJ_SI12),
    ent(Op::LdH, 0xFFC0_0000, 0x2840_0000, DJ_SI12),
    ent(Op::LdW, 0xFFC0_0000, 0x2880_0000, DJ_SI12),
    ent(Op::LdD, 0xFFC0_0000, 0x28C0_0000, DJ_SI12),
    ent(Op::StB, 0xFFC0_0000, 0x2900_0000, DJ_SI12),
    ent(Op::StH, 0xFFC0_0000, 0x2940_0000, DJ_SI12),
    ent(Op::StW, 0xFFC0_0000, 0x2980_0000, DJ_SI12),
    ent(Op::StD, 0xFFC0_0000, 0x29C0_0000, DJ_SI12),
    ent(Op::LdBu, 0xFFC0_0000, 0x2A00_0000, DJ_SI12),
    ent(Op::LdHu, 0xFFC0_0000, 0x2A40_0000, DJ_SI12),
    ent(Op::LdWu, 0xFFC0_0000, 0x2A80_0000, DJ_SI12),
    ent(Op::Preld, 0xFFC0_0000, 0x2AC0_0000, PRELD),
    ent(Op::FldS, 0xFFC0_0000, 0x2B00_0000, FDJ_MEM),
    ent(Op::FstS, 0xFFC0_0000, 0x2B40_0000, FDJ_MEM),
    ent(Op::FldD, 0xFFC0_0000, 0x2B80_0000, FDJ_MEM),
    ent(Op::FstD, 0xFFC0_0000, 0x2BC0_0000, FDJ_MEM),
    ent(Op::LdxB, 0xFFFF_8000, 0x3800_0000, DJK),
    ent(Op::LdxH, 0xFFFF_8000, 0x3804_0000, DJK),
    ent(Op::LdxW, 0xFFFF_8000, 0x3808_0000, DJK),
    ent(Op::LdxD, 0xFFFF_8000, 0x380C_0000, DJK),
    ent(Op::StxB, 0xFFFF_8000, 0x3810_0000, DJK),
    ent(Op::StxH, 0xFFFF_8000, 0x3814_0000, DJK),
    ent(Op::StxW, 0xFFFF_8000, 0x3818_0000, DJK),
    ent(Op::StxD, 0xFFFF_8000, 0x381C_0000, DJK),
    ent(Op::LdxBu, 0xFFFF_8000, 0x3820_0000, DJK),
    ent(Op::LdxHu, 0xFFFF_8000, 0x3824_0000, DJK),
    ent(Op::LdxWu, 0xFFFF_8000, 0x3828_0000, DJK),
    ent(Op::FldxS, 0xFFFF_8000, 0x3830_0000, FDJK_MEM),
    ent(Op::FldxD, 0xFFFF_8000, 0x3834_0000, FDJK_MEM),
    ent(Op::FstxS, 0xFFFF_8000, 0x3838_0000, FDJK_MEM),
    ent(Op::FstxD, 0xFFFF_8000, 0x383C_0000, FDJK_MEM),
    ent(Op::Dbar, 0xFFFF_8000, 0x3872_0000, HINT),
    ent(Op::Ibar, 0xFFFF_8000, 0x3872_8000, HINT),
    ent(Op::Beqz, 0xFC00_0000, 0x4000_0000, J_OFFS21),
    ent(Op::Bnez, 0xFC00_0000, 0x4400_0000, J_OFFS21),
    ent(Op::Bceqz, 0xFC00_0300, 0x4800_0000, CJ_OFFS21),
    ent(Op::Bcnez, 0xFC00_0300, 0x4800_0100, CJ_OFFS21),
    ent(Op::Jirl, 0xFC00_0000, 0x4C00_0000, DJ_OFFS16),
    ent(Op::B, 0xFC00_0000, 0x5000_0000, OFFS26),
    ent(Op::Bl, 0xFC00_0000, 0x5400_0000, OFFS26),
    ent(Op::Beq, 0xFC00_0000, 0x5800_0000, JD_OFFS16),
    ent(Op::Bne, 0xFC00_0000, 0x5C00_0000, JD_OFFS16),
    ent(Op::Blt, 0xFC00_0000, 0x6000_0000, JD_OFFS16),
    ent(Op::Bge, 0xFC00_0000, 0x6400_0000, JD_OFFS16),
    ent(Op::Bltu, 0xFC00_0000, 0x6800_0000, JD_OFFS16),
    ent(Op::Bgeu, 0xFC00_0000, 0x6C00_0000, JD_OFFS16),
];

/// Decode one instruction word fetched from `addr`.
///
/// The address only feeds the error value (and future PC-relative display);
/// decoding itself is a pure function of the word. When several table
/// entries match, the one whose fixed-bit mask covers more bits wins, since
/// more specific encodings are subsets of more general ones in this
/// instruction set.
pub fn decode(word: u32, addr: u64) -> Result<Inst, DecodeError> {
    let mut best: Option<&InstFormat> = None;
    for fmt in FORMATS {
        if word & fmt.mask == fmt.value {
            match best {
                Some(b) if b.mask.count_ones() >= fmt.mask.count_ones() => {}
                _ => best = Some(fmt),
            }
        }
    }
    let fmt = best.ok_or(DecodeError::IllegalInstruction { word, addr })?;

    let mut args: Args = [None; 5];
    for (slot, field) in args.iter_mut().zip(fmt.args.iter()) {
        *slot = Some(extract(*field, word));
    }
    Ok(Inst { op: fmt.op, enc: word, args })
}
