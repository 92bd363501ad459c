use crate::decode::{decode, DecodeError, INST_SIZE};
use serde::{Deserialize, Serialize};

/// One rendered line of a disassembly listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub addr: u64,
    pub enc: u32,
    pub text: String,
}

/// Disassemble a little-endian code slice loaded at `base`.
///
/// Each word decodes independently; an illegal word becomes a `.word` line
/// and the cursor still advances by one instruction, so a single bad word
/// never sinks the rest of the stream. A trailing fragment shorter than one
/// instruction is ignored.
pub fn disassemble(code: &[u8], base: u64) -> Vec<Line> {
    let mut lines = Vec::with_capacity(code.len() / INST_SIZE);
    for (i, chunk) in code.chunks_exact(INST_SIZE).enumerate() {
        let addr = base + (i * INST_SIZE) as u64;
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let text = match decode(word, addr) {
            Ok(inst) => inst.to_string(),
            Err(DecodeError::IllegalInstruction { .. }) => {
                tracing::debug!(addr, word, "skipping illegal instruction");
                format!(".word {word:#010x}")
            }
        };
        lines.push(Line { addr, enc: word, text });
    }
    lines
}
