use loong64_rs::disasm::{disassemble, Line};
use loong64_rs::{decode, Inst, INST_SIZE};
use pretty_assertions::assert_eq;

// A small hand-assembled function: build a constant, add it, store the
// result, then return through $ra.
const PROLOGUE: &[u32] = &[
    0x1400_0085, // lu12i.w $a1, 4(0x4)
    0x0280_04A4, // addi.w $a0, $a1, 1(0x1)
    0x2980_10A4, // st.w $a0, $a1, 4(0x4)
    0x4C00_0020, // jirl $zero, $ra, 0x0
];

fn as_bytes(words: &[u32]) -> Vec<u8> {
    words.iter().flat_map(|w| w.to_le_bytes()).collect()
}

#[test]
fn listing_matches_reference_syntax() {
    let lines = disassemble(&as_bytes(PROLOGUE), 0x12_0000);
    let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "lu12i.w $a1, 4(0x4)",
            "addi.w $a0, $a1, 1(0x1)",
            "st.w $a0, $a1, 4(0x4)",
            "jirl $zero, $ra, 0x0",
        ]
    );
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line.addr, 0x12_0000 + (i * INST_SIZE) as u64);
    }
}

#[test]
fn decoding_is_deterministic_across_a_stream() {
    let bytes = as_bytes(PROLOGUE);
    assert_eq!(disassemble(&bytes, 0), disassemble(&bytes, 0));
}

#[test]
fn records_survive_a_serde_round_trip() {
    let inst = decode(PROLOGUE[1], 0).unwrap();
    let json = serde_json::to_string(&inst).unwrap();
    let back: Inst = serde_json::from_str(&json).unwrap();
    assert_eq!(back, inst);
    assert_eq!(back.to_string(), inst.to_string());

    let line = Line { addr: 16, enc: PROLOGUE[1], text: inst.to_string() };
    let json = serde_json::to_string(&line).unwrap();
    assert_eq!(serde_json::from_str::<Line>(&json).unwrap(), line);
}
