use loong64_rs::{decode, Op};

fn enc_b16(major: u32, offs: i32, rj: u32, rd: u32) -> u32 {
    major | (((offs >> 2) as u32 & 0xFFFF) << 10) | (rj << 5) | rd
}

fn enc_b26(major: u32, offs: i32) -> u32 {
    let raw = (offs >> 2) as u32 & 0x3FF_FFFF;
    major | ((raw & 0xFFFF) << 10) | (raw >> 16)
}

#[test]
fn compare_branches_take_rj_first() {
    // beq $a0, $a1, -16
    let word = enc_b16(0x5800_0000, -16, 4, 5);
    let inst = decode(word, 0).unwrap();
    assert_eq!(inst.op, Op::Beq);
    assert_eq!(inst.to_string(), "beq $a0, $a1, -16(0x3fff0)");

    // bgeu $t1, $zero, 64
    let word = enc_b16(0x6C00_0000, 64, 13, 0);
    assert_eq!(decode(word, 0).unwrap().to_string(), "bgeu $t1, $zero, 64(0x40)");
}

#[test]
fn zero_compare_branches_carry_a_wide_offset() {
    // beqz $a0, 16
    let word = 0x4000_0000 | ((16u32 >> 2) << 10) | (4 << 5);
    assert_eq!(decode(word, 0).unwrap().to_string(), "beqz $a0, 16(0x10)");

    // bnez with a negative offset splits across both halves of the field
    let raw = (-4096i32 >> 2) as u32 & 0x1F_FFFF;
    let word = 0x4400_0000 | ((raw & 0xFFFF) << 10) | (raw >> 16) | (4 << 5);
    assert_eq!(decode(word, 0).unwrap().to_string(), "bnez $a0, -4096(0x7ff000)");
}

#[test]
fn condition_flag_branches() {
    // bceqz $fcc2, 32
    let word = 0x4800_0000 | ((32u32 >> 2) << 10) | (2 << 5);
    let inst = decode(word, 0).unwrap();
    assert_eq!(inst.op, Op::Bceqz);
    assert_eq!(inst.to_string(), "bceqz $fcc2, 32(0x20)");

    // flipping bit 8 selects bcnez, same operands
    let inst = decode(word | 0x100, 0).unwrap();
    assert_eq!(inst.op, Op::Bcnez);
    assert_eq!(inst.to_string(), "bcnez $fcc2, 32(0x20)");
}

#[test]
fn unconditional_branches() {
    let inst = decode(enc_b26(0x5000_0000, -8), 0).unwrap();
    assert_eq!(inst.op, Op::B);
    assert_eq!(inst.to_string(), "b -8(0xffffff8)");

    let inst = decode(enc_b26(0x5400_0000, 2048), 0).unwrap();
    assert_eq!(inst.op, Op::Bl);
    assert_eq!(inst.to_string(), "bl 2048(0x800)");
}

#[test]
fn jirl_renders_zero_offset_as_plain_hex() {
    // jirl $ra, $t0, 0
    let word = 0x4C00_0000 | (12 << 5) | 1;
    assert_eq!(decode(word, 0).unwrap().to_string(), "jirl $ra, $t0, 0x0");
}
