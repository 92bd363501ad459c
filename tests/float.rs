use loong64_rs::{decode, Op};

#[test]
fn float_arithmetic_uses_float_names() {
    // fadd.s $fa0, $fa1, $fa2
    let word = 0x0100_8000 | (2 << 10) | (1 << 5);
    assert_eq!(decode(word, 0).unwrap().to_string(), "fadd.s $fa0, $fa1, $fa2");

    // fdiv.d $ft0, $fs0, $fs1: fd=f8, fj=f24, fk=f25
    let word = 0x0107_0000 | (25 << 10) | (24 << 5) | 8;
    assert_eq!(decode(word, 0).unwrap().to_string(), "fdiv.d $ft0, $fs0, $fs1");
}

#[test]
fn fused_multiply_add_has_four_operands() {
    // fmadd.s $fa0, $fa1, $fa2, $fa3
    let word = 0x0810_0000 | (3 << 15) | (2 << 10) | (1 << 5);
    let inst = decode(word, 0).unwrap();
    assert_eq!(inst.op, Op::FmaddS);
    assert_eq!(inst.to_string(), "fmadd.s $fa0, $fa1, $fa2, $fa3");
}

#[test]
fn float_unary_and_moves() {
    // fneg.s $fa0, $fa1
    let word = 0x0114_1400 | (1 << 5);
    assert_eq!(decode(word, 0).unwrap().to_string(), "fneg.s $fa0, $fa1");

    // movgr2fr.d $fa0, $a0 crosses register files
    let word = 0x0114_A800 | (4 << 5);
    assert_eq!(decode(word, 0).unwrap().to_string(), "movgr2fr.d $fa0, $a0");

    // movfr2gr.d $a0, $fa1
    let word = 0x0114_B800 | (1 << 5) | 4;
    assert_eq!(decode(word, 0).unwrap().to_string(), "movfr2gr.d $a0, $fa1");
}

#[test]
fn condition_flag_moves() {
    // movgr2cf $fcc1, $ra
    let word = 0x0114_D800 | (1 << 5) | 1;
    let inst = decode(word, 0).unwrap();
    assert_eq!(inst.op, Op::Movgr2cf);
    assert_eq!(inst.to_string(), "movgr2cf $fcc1, $ra");

    // movcf2gr $a0, $fcc1
    let word = 0x0114_DC00 | (1 << 5) | 4;
    assert_eq!(decode(word, 0).unwrap().to_string(), "movcf2gr $a0, $fcc1");
}

#[test]
fn float_compares_write_condition_flags() {
    // fcmp.clt.s $fcc0, $fa0, $fa1
    let word = 0x0C11_0000 | (1 << 10);
    assert_eq!(decode(word, 0).unwrap().to_string(), "fcmp.clt.s $fcc0, $fa0, $fa1");

    // fcmp.ceq.d $fcc3, $ft0, $ft1: fj=f8, fk=f9
    let word = 0x0C22_0000 | (9 << 10) | (8 << 5) | 3;
    assert_eq!(decode(word, 0).unwrap().to_string(), "fcmp.ceq.d $fcc3, $ft0, $ft1");
}

#[test]
fn fsel_picks_on_a_condition_flag() {
    // fsel $fa0, $fa1, $fa2, $fcc1
    let word = 0x0D00_0000 | (1 << 15) | (2 << 10) | (1 << 5);
    assert_eq!(decode(word, 0).unwrap().to_string(), "fsel $fa0, $fa1, $fa2, $fcc1");
}

#[test]
fn float_loads_and_stores() {
    // fld.d $fa0, $sp, 24
    let word = 0x2B80_0000 | (24 << 10) | (3 << 5);
    assert_eq!(decode(word, 0).unwrap().to_string(), "fld.d $fa0, $sp, 24(0x18)");

    // fstx.s $fa1, $a0, $a1
    let word = 0x3838_0000 | (5 << 10) | (4 << 5) | 1;
    assert_eq!(decode(word, 0).unwrap().to_string(), "fstx.s $fa1, $a0, $a1");
}
