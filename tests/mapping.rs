use loong64_rs::regnum;
use loong64_rs::Reg;

#[test]
fn round_trip_over_the_full_register_set() {
    for num in 0..=regnum::MAX_REG_NUM {
        let name = regnum::to_name(num);
        assert_eq!(regnum::from_name(&name), Some(num));
    }
}

#[test]
fn unknown_names_and_numbers() {
    assert_eq!(regnum::from_name("R32"), None);
    assert_eq!(regnum::from_name("XMM0"), None);
    assert_eq!(regnum::to_name(regnum::MAX_REG_NUM + 1), "Unknown74");
}

#[test]
fn numbering_matches_operand_classification() {
    // The bridge and the operand model must agree on which numeric range is
    // which: GPRs, then floats, then condition flags.
    let float_prefixes = ["$fa", "$ft", "$fs"];
    for num in 0..=31u16 {
        assert_eq!(regnum::to_name(num), format!("R{num}"));
        let abi = Reg(num).to_string();
        assert!(!float_prefixes.iter().any(|p| abi.starts_with(p)), "{abi} is not a GPR name");
    }
    for num in 32..=63u16 {
        assert_eq!(regnum::to_name(num), format!("F{}", num - 32));
        let abi = Reg(num).to_string();
        assert!(float_prefixes.iter().any(|p| abi.starts_with(p)), "{abi} is not a float name");
    }
}

#[test]
fn conventional_roles_line_up_with_abi_names() {
    assert_eq!(Reg(regnum::LR).to_string(), "$ra");
    assert_eq!(Reg(regnum::SP).to_string(), "$sp");
    assert_eq!(Reg(regnum::FP).to_string(), "$fp");
    assert_eq!(regnum::PC, regnum::ERA);
}
