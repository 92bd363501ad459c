use crate::args::Arg;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opcode identity of a decoded instruction, independent of its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    // Integer register-register
    AddW,
    AddD,
    SubW,
    SubD,
    Slt,
    Sltu,
    Maskeqz,
    Masknez,
    Nor,
    And,
    Or,
    Xor,
    Orn,
    Andn,
    SllW,
    SrlW,
    SraW,
    SllD,
    SrlD,
    SraD,
    RotrW,
    RotrD,
    MulW,
    MulhW,
    MulhWu,
    MulD,
    MulhD,
    MulhDu,
    MulwDW,
    MulwDWu,
    DivW,
    ModW,
    DivWu,
    ModWu,
    DivD,
    ModD,
    DivDu,
    ModDu,
    AlslW,
    AlslWu,
    AlslD,
    BytepickW,
    BytepickD,
    // Bit counting / byte reversal / widening
    CloW,
    ClzW,
    CtoW,
    CtzW,
    CloD,
    ClzD,
    CtoD,
    CtzD,
    RevB2H,
    RevBD,
    ExtWH,
    ExtWB,
    // Timers and configuration
    RdtimelW,
    RdtimehW,
    RdtimeD,
    Cpucfg,
    // Shifts by immediate
    SlliW,
    SlliD,
    SrliW,
    SrliD,
    SraiW,
    SraiD,
    RotriW,
    RotriD,
    // Bit-string insert/extract
    BstrinsD,
    BstrpickD,
    // Integer register-immediate
    Slti,
    Sltui,
    AddiW,
    AddiD,
    Lu52iD,
    Andi,
    Ori,
    Xori,
    Addu16iD,
    // Large-constant builders and PC-relative address material
    Lu12iW,
    Lu32iD,
    Pcaddi,
    Pcalau12i,
    Pcaddu12i,
    Pcaddu18i,
    // CSR access
    Csrrd,
    Csrwr,
    Csrxchg,
    // Load-linked / store-conditional and pointer loads
    LlW,
    ScW,
    LlD,
    ScD,
    LdptrW,
    StptrW,
    LdptrD,
    StptrD,
    // Loads and stores
    LdB,
    LdH,
    LdW,
    LdD,
    StB,
    StH,
    StW,
    StD,
    LdBu,
    LdHu,
    LdWu,
    Preld,
    FldS,
    FstS,
    FldD,
    FstD,
    LdxB,
    LdxH,
    LdxW,
    LdxD,
    StxB,
    StxH,
    StxW,
    StxD,
    LdxBu,
    LdxHu,
    LdxWu,
    FldxS,
    FldxD,
    FstxS,
    FstxD,
    // Barriers and traps
    Dbar,
    Ibar,
    Break,
    Syscall,
    // Branches
    Beqz,
    Bnez,
    Bceqz,
    Bcnez,
    Jirl,
    B,
    Bl,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    // Privileged
    Ertn,
    Idle,
    // Floating-point arithmetic
    FaddS,
    FaddD,
    FsubS,
    FsubD,
    FmulS,
    FmulD,
    FdivS,
    FdivD,
    FmaxS,
    FmaxD,
    FminS,
    FminD,
    FmaddS,
    FmaddD,
    FabsS,
    FabsD,
    FnegS,
    FnegD,
    FsqrtS,
    FsqrtD,
    FmovS,
    FmovD,
    // Moves between register files
    Movgr2frW,
    Movgr2frD,
    Movfr2grS,
    Movfr2grD,
    Movgr2cf,
    Movcf2gr,
    // Floating-point compare and select
    FcmpCeqS,
    FcmpCltS,
    FcmpCleS,
    FcmpCeqD,
    FcmpCltD,
    FcmpCleD,
    Fsel,
}

impl Op {
    /// Canonical mnemonic in the reference assembly syntax.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Op::AddW => "add.w",
            Op::AddD => "add.d",
            Op::SubW => "sub.w",
            Op::SubD => "sub.d",
            Op::Slt => "slt",
            Op::Sltu => "sltu",
            Op::Maskeqz => "maskeqz",
            Op::Masknez => "masknez",
            Op::Nor => "nor",
            Op::And => "and",
            Op::Or => "or",
            Op::Xor => "xor",
            Op::Orn => "orn",
            Op::Andn => "andn",
            Op::SllW => "sll.w",
            Op::SrlW => "srl.w",
            Op::SraW => "sra.w",
            Op::SllD => "sll.d",
            Op::SrlD => "srl.d",
            Op::SraD => "sra.d",
            Op::RotrW => "rotr.w",
            Op::RotrD => "rotr.d",
            Op::MulW => "mul.w",
            Op::MulhW => "mulh.w",
            Op::MulhWu => "mulh.wu",
            Op::MulD => "mul.d",
            Op::MulhD => "mulh.d",
            Op::MulhDu => "mulh.du",
            Op::MulwDW => "mulw.d.w",
            Op::MulwDWu => "mulw.d.wu",
            Op::DivW => "div.w",
            Op::ModW => "mod.w",
            Op::DivWu => "div.wu",
            Op::ModWu => "mod.wu",
            Op::DivD => "div.d",
            Op::ModD => "mod.d",
            Op::DivDu => "div.du",
            Op::ModDu => "mod.du",
            Op::AlslW => "alsl.w",
            Op::AlslWu => "alsl.wu",
            Op::AlslD => "alsl.d",
            Op::BytepickW => "bytepick.w",
            Op::BytepickD => "bytepick.d",
            Op::CloW => "clo.w",
            Op::ClzW => "clz.w",
            Op::CtoW => "cto.w",
            Op::CtzW => "ctz.w",
            Op::CloD => "clo.d",
            Op::ClzD => "clz.d",
            Op::CtoD => "cto.d",
            Op::CtzD => "ctz.d",
            Op::RevB2H => "revb.2h",
            Op::RevBD => "revb.d",
            Op::ExtWH => "ext.w.h",
            Op::ExtWB => "ext.w.b",
            Op::RdtimelW => "rdtimel.w",
            Op::RdtimehW => "rdtimeh.w",
            Op::RdtimeD => "rdtime.d",
            Op::Cpucfg => "cpucfg",
            Op::SlliW => "slli.w",
            Op::SlliD => "slli.d",
            Op::SrliW => "srli.w",
            Op::SrliD => "srli.d",
            Op::SraiW => "srai.w",
            Op::SraiD => "srai.d",
            Op::RotriW => "rotri.w",
            Op::RotriD => "rotri.d",
            Op::BstrinsD => "bstrins.d",
            Op::BstrpickD => "bstrpick.d",
            Op::Slti => "slti",
            Op::Sltui => "sltui",
            Op::AddiW => "addi.w",
            Op::AddiD => "addi.d",
            Op::Lu52iD => "lu52i.d",
            Op::Andi => "andi",
            Op::Ori => "ori",
            Op::Xori => "xori",
            Op::Addu16iD => "addu16i.d",
            Op::Lu12iW => "lu12i.w",
            Op::Lu32iD => "lu32i.d",
            Op::Pcaddi => "pcaddi",
            Op::Pcalau12i => "pcalau12i",
            Op::Pcaddu12i => "pcaddu12i",
            Op::Pcaddu18i => "pcaddu18i",
            Op::Csrrd => "csrrd",
            Op::Csrwr => "csrwr",
            Op::Csrxchg => "csrxchg",
            Op::LlW => "ll.w",
            Op::ScW => "sc.w",
            Op::LlD => "ll.d",
            Op::ScD => "sc.d",
            Op::LdptrW => "ldptr.w",
            Op::StptrW => "stptr.w",
            Op::LdptrD => "ldptr.d",
            Op::StptrD => "stptr.d",
            Op::LdB => "ld.b",
            Op::LdH => "ld.h",
            Op::LdW => "ld.w",
            Op::LdD => "ld.d",
            Op::StB => "st.b",
            Op::StH => "st.h",
            Op::StW => "st.w",
            Op::StD => "st.d",
            Op::LdBu => "ld.bu",
            Op::LdHu => "ld.hu",
            Op::LdWu => "ld.wu",
            Op::Preld => "preld",
            Op::FldS => "fld.s",
            Op::FstS => "fst.s",
            Op::FldD => "fld.d",
            Op::FstD => "fst.d",
            Op::LdxB => "ldx.b",
            Op::LdxH => "ldx.h",
            Op::LdxW => "ldx.w",
            Op::LdxD => "ldx.d",
            Op::StxB => "stx.b",
            Op::StxH => "stx.h",
            Op::StxW => "stx.w",
            Op::StxD => "stx.d",
            Op::LdxBu => "ldx.bu",
            Op::LdxHu => "ldx.hu",
            Op::LdxWu => "ldx.wu",
            Op::FldxS => "fldx.s",
            Op::FldxD => "fldx.d",
            Op::FstxS => "fstx.s",
            Op::FstxD => "fstx.d",
            Op::Dbar => "dbar",
            Op::Ibar => "ibar",
            Op::Break => "break",
            Op::Syscall => "syscall",
            Op::Beqz => "beqz",
            Op::Bnez => "bnez",
            Op::Bceqz => "bceqz",
            Op::Bcnez => "bcnez",
            Op::Jirl => "jirl",
            Op::B => "b",
            Op::Bl => "bl",
            Op::Beq => "beq",
            Op::Bne => "bne",
            Op::Blt => "blt",
            Op::Bge => "bge",
            Op::Bltu => "bltu",
            Op::Bgeu => "bgeu",
            Op::Ertn => "ertn",
            Op::Idle => "idle",
            Op::FaddS => "fadd.s",
            Op::FaddD => "fadd.d",
            Op::FsubS => "fsub.s",
            Op::FsubD => "fsub.d",
            Op::FmulS => "fmul.s",
            Op::FmulD => "fmul.d",
            Op::FdivS => "fdiv.s",
            Op::FdivD => "fdiv.d",
            Op::FmaxS => "fmax.s",
            Op::FmaxD => "fmax.d",
            Op::FminS => "fmin.s",
            Op::FminD => "fmin.d",
            Op::FmaddS => "fmadd.s",
            Op::FmaddD => "fmadd.d",
            Op::FabsS => "fabs.s",
            Op::FabsD => "fabs.d",
            Op::FnegS => "fneg.s",
            Op::FnegD => "fneg.d",
            Op::FsqrtS => "fsqrt.s",
            Op::FsqrtD => "fsqrt.d",
            Op::FmovS => "fmov.s",
            Op::FmovD => "fmov.d",
            Op::Movgr2frW => "movgr2fr.w",
            Op::Movgr2frD => "movgr2fr.d",
            Op::Movfr2grS => "movfr2gr.s",
            Op::Movfr2grD => "movfr2gr.d",
            Op::Movgr2cf => "movgr2cf",
            Op::Movcf2gr => "movcf2gr",
            Op::FcmpCeqS => "fcmp.ceq.s",
            Op::FcmpCltS => "fcmp.clt.s",
            Op::FcmpCleS => "fcmp.cle.s",
            Op::FcmpCeqD => "fcmp.ceq.d",
            Op::FcmpCltD => "fcmp.clt.d",
            Op::FcmpCleD => "fcmp.cle.d",
            Op::Fsel => "fsel",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Instruction arguments in LoongArch manual order. Instructions with fewer
/// than five arguments leave the trailing slots `None`.
pub type Args = [Option<Arg>; 5];

/// A single decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inst {
    pub op: Op,
    /// Raw encoding bits.
    pub enc: u32,
    pub args: Args,
}

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self
            .args
            .iter()
            .take_while(|a| a.is_some())
            .flatten()
            .map(|a| a.to_string())
            .collect();

        let text = if args.is_empty() {
            self.op.to_string()
        } else {
            format!("{} {}", self.op, args.join(", "))
        };
        // Attach offset(base)-shaped operands to the preceding immediate.
        f.write_str(&text.replace(", (", "("))
    }
}
