pub mod args;
pub mod decode;
pub mod disasm;
pub mod inst;
pub mod regnum;

pub use args::{Arg, CodeSimm, Fcc, OffsetSimm, Reg, SaSimm, Simm16, Simm32, Uimm};
pub use decode::{decode, DecodeError, INST_SIZE};
pub use inst::{Args, Inst, Op};
