//! DWARF register numbering for LoongArch64, per the LoongArch ELF ABI:
//! general-purpose registers first, then floating-point registers, then the
//! floating condition flags, then the pseudo-registers the debug convention
//! numbers but the hardware encoding does not.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const R0: u16 = 0;
pub const R31: u16 = 31;
pub const F0: u16 = 32;
pub const F31: u16 = 63;
pub const FCC0: u16 = 64;
pub const FCC7: u16 = 71;
/// Exception return address (program counter as far as unwinding cares).
pub const ERA: u16 = 72;
/// Bad-address register.
pub const BADV: u16 = 73;

pub const MAX_REG_NUM: u16 = BADV;

// Conventional roles within the numbering.
pub const LR: u16 = R0 + 1;
pub const SP: u16 = R0 + 3;
pub const FP: u16 = R0 + 22;
pub const PC: u16 = ERA;

static NAME_TO_NUM: LazyLock<HashMap<String, u16>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for i in 0..=31u16 {
        m.insert(format!("R{i}"), R0 + i);
    }
    for i in 0..=31u16 {
        m.insert(format!("F{i}"), F0 + i);
    }
    for i in 0..=7u16 {
        m.insert(format!("FCC{i}"), FCC0 + i);
    }
    m.insert("ERA".to_string(), ERA);
    m.insert("BADV".to_string(), BADV);
    m
});

/// Debug-information number for a hardware register name, if the name is
/// part of the numbering convention.
pub fn from_name(name: &str) -> Option<u16> {
    NAME_TO_NUM.get(name).copied()
}

/// Name for a debug-information register number. Classifies purely by
/// numeric range; numbers outside every range come back marked rather than
/// failing, symmetric with operand rendering.
pub fn to_name(num: u16) -> String {
    match num {
        R0..=R31 => format!("R{num}"),
        F0..=F31 => format!("F{}", num - F0),
        FCC0..=FCC7 => format!("FCC{}", num - FCC0),
        ERA => "ERA".to_string(),
        BADV => "BADV".to_string(),
        _ => format!("Unknown{num}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_and_numbers_are_mutual_inverses() {
        for num in 0..=MAX_REG_NUM {
            let name = to_name(num);
            assert_eq!(from_name(&name), Some(num), "{name} did not round-trip");
        }
        assert_eq!(NAME_TO_NUM.len() as u16, MAX_REG_NUM + 1);
    }

    #[test]
    fn classification_by_range() {
        assert_eq!(to_name(0), "R0");
        assert_eq!(to_name(31), "R31");
        assert_eq!(to_name(32), "F0");
        assert_eq!(to_name(63), "F31");
        assert_eq!(to_name(64), "FCC0");
        assert_eq!(to_name(71), "FCC7");
        assert_eq!(to_name(72), "ERA");
        assert_eq!(to_name(73), "BADV");
        assert_eq!(to_name(74), "Unknown74");
        assert_eq!(to_name(500), "Unknown500");
    }

    #[test]
    fn conventional_roles() {
        assert_eq!(LR, 1);
        assert_eq!(SP, 3);
        assert_eq!(FP, 22);
        assert_eq!(PC, ERA);
        assert_eq!(from_name("R3"), Some(SP));
    }
}
