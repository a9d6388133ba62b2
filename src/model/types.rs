use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid quantum numbers (n={n}, l={l}, m={m}): requires n >= 1, l < n, |m| <= l")]
pub struct InvalidQuantumNumbers {
    pub n: u32,
    pub l: u32,
    pub m: i32,
}

/// Quantum numbers identifying a single orbital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantumNumbers {
    pub n: u32,
    pub l: u32,
    pub m: i32,
}

impl QuantumNumbers {
    pub fn new(n: u32, l: u32, m: i32) -> Result<Self, InvalidQuantumNumbers> {
        if n == 0 || l >= n || m.unsigned_abs() > l {
            return Err(InvalidQuantumNumbers { n, l, m });
        }
        Ok(Self { n, l, m })
    }

    /// Builds quantum numbers the caller has already range-checked.
    pub(crate) const fn new_unchecked(n: u32, l: u32, m: i32) -> Self {
        Self { n, l, m }
    }

    /// Spectroscopic subshell label, e.g. `2p` or `3d`.
    pub fn subshell_label(&self) -> String {
        format!("{}{}", self.n, subshell_letter(self.l))
    }
}

impl fmt::Display for QuantumNumbers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.n, self.l, self.m)
    }
}

pub fn subshell_letter(l: u32) -> char {
    match l {
        0 => 's',
        1 => 'p',
        2 => 'd',
        3 => 'f',
        4 => 'g',
        5 => 'h',
        6 => 'i',
        _ => '?',
    }
}

/// Electron spin projection. An orbital holds at most one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Spin {
    #[default]
    Up,
    Down,
}

impl Spin {
    pub fn value(&self) -> f64 {
        match self {
            Spin::Up => 0.5,
            Spin::Down => -0.5,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }

    /// Spin used when seeding the `i`-th electron of a fresh atom.
    pub fn alternating(i: usize) -> Self {
        if i % 2 == 0 { Spin::Up } else { Spin::Down }
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spin::Up => write!(f, "↑"),
            Spin::Down => write!(f, "↓"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Element {
    H = 1,
    He,
    Li,
    Be,
    B,
    C,
    N,
    O,
    F,
    Ne,
    Na,
    Mg,
    Al,
    Si,
    P,
    S,
    Cl,
    Ar,
    K,
    Ca,
    Sc,
    Ti,
    V,
    Cr,
    Mn,
    Fe,
    Co,
    Ni,
    Cu,
    Zn,
    Ga,
    Ge,
    As,
    Se,
    Br,
    Kr = 36,
}

const ELEMENTS: [Element; 36] = [
    Element::H,
    Element::He,
    Element::Li,
    Element::Be,
    Element::B,
    Element::C,
    Element::N,
    Element::O,
    Element::F,
    Element::Ne,
    Element::Na,
    Element::Mg,
    Element::Al,
    Element::Si,
    Element::P,
    Element::S,
    Element::Cl,
    Element::Ar,
    Element::K,
    Element::Ca,
    Element::Sc,
    Element::Ti,
    Element::V,
    Element::Cr,
    Element::Mn,
    Element::Fe,
    Element::Co,
    Element::Ni,
    Element::Cu,
    Element::Zn,
    Element::Ga,
    Element::Ge,
    Element::As,
    Element::Se,
    Element::Br,
    Element::Kr,
];

impl Element {
    pub fn atomic_number(&self) -> u8 {
        *self as u8
    }

    pub fn from_atomic_number(z: usize) -> Option<Self> {
        z.checked_sub(1).and_then(|i| ELEMENTS.get(i)).copied()
    }

    /// Neutron count of the most abundant isotope.
    pub fn common_neutrons(&self) -> usize {
        match self {
            Element::H => 0,
            Element::He => 2,
            Element::Li => 4,
            Element::Be => 5,
            Element::B => 6,
            Element::C => 6,
            Element::N => 7,
            Element::O => 8,
            Element::F => 10,
            Element::Ne => 10,
            Element::Na => 12,
            Element::Mg => 12,
            Element::Al => 14,
            Element::Si => 14,
            Element::P => 16,
            Element::S => 16,
            Element::Cl => 18,
            Element::Ar => 22,
            Element::K => 20,
            Element::Ca => 20,
            Element::Sc => 24,
            Element::Ti => 26,
            Element::V => 28,
            Element::Cr => 28,
            Element::Mn => 30,
            Element::Fe => 30,
            Element::Co => 32,
            Element::Ni => 30,
            Element::Cu => 34,
            Element::Zn => 34,
            Element::Ga => 38,
            Element::Ge => 42,
            Element::As => 42,
            Element::Se => 46,
            Element::Br => 44,
            Element::Kr => 48,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::He => "He",
            Element::Li => "Li",
            Element::Be => "Be",
            Element::B => "B",
            Element::C => "C",
            Element::N => "N",
            Element::O => "O",
            Element::F => "F",
            Element::Ne => "Ne",
            Element::Na => "Na",
            Element::Mg => "Mg",
            Element::Al => "Al",
            Element::Si => "Si",
            Element::P => "P",
            Element::S => "S",
            Element::Cl => "Cl",
            Element::Ar => "Ar",
            Element::K => "K",
            Element::Ca => "Ca",
            Element::Sc => "Sc",
            Element::Ti => "Ti",
            Element::V => "V",
            Element::Cr => "Cr",
            Element::Mn => "Mn",
            Element::Fe => "Fe",
            Element::Co => "Co",
            Element::Ni => "Ni",
            Element::Cu => "Cu",
            Element::Zn => "Zn",
            Element::Ga => "Ga",
            Element::Ge => "Ge",
            Element::As => "As",
            Element::Se => "Se",
            Element::Br => "Br",
            Element::Kr => "Kr",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ELEMENTS
            .iter()
            .find(|el| el.symbol() == s)
            .copied()
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn quantum_numbers_validation() {
        assert!(QuantumNumbers::new(1, 0, 0).is_ok());
        assert!(QuantumNumbers::new(3, 2, -2).is_ok());
        assert!(QuantumNumbers::new(0, 0, 0).is_err());
        assert!(QuantumNumbers::new(2, 2, 0).is_err());
        assert!(QuantumNumbers::new(2, 1, 2).is_err());
    }

    #[test]
    fn quantum_numbers_display_and_label() {
        let q = QuantumNumbers::new(3, 2, -1).unwrap();
        assert_eq!(q.to_string(), "(3, 2, -1)");
        assert_eq!(q.subshell_label(), "3d");
        assert_eq!(QuantumNumbers::new(1, 0, 0).unwrap().subshell_label(), "1s");
    }

    #[test]
    fn invalid_quantum_numbers_message() {
        let err = QuantumNumbers::new(1, 1, 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid quantum numbers (n=1, l=1, m=0): requires n >= 1, l < n, |m| <= l"
        );
    }

    #[test]
    fn spin_values_and_flip() {
        assert_eq!(Spin::Up.value(), 0.5);
        assert_eq!(Spin::Down.value(), -0.5);
        assert_eq!(Spin::Up.flipped(), Spin::Down);
        assert_eq!(Spin::alternating(0), Spin::Up);
        assert_eq!(Spin::alternating(3), Spin::Down);
    }

    #[test]
    fn element_from_str_valid() {
        assert_eq!(Element::from_str("H").unwrap(), Element::H);
        assert_eq!(Element::from_str("Cl").unwrap(), Element::Cl);
        assert_eq!(Element::from_str("Kr").unwrap(), Element::Kr);
    }

    #[test]
    fn element_from_str_invalid_case() {
        let err = Element::from_str("na").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid or unsupported element symbol: 'na'"
        );
    }

    #[test]
    fn element_atomic_number_round_trip() {
        assert_eq!(Element::Na.atomic_number(), 11);
        assert_eq!(Element::from_atomic_number(17), Some(Element::Cl));
        assert_eq!(Element::from_atomic_number(0), None);
        assert_eq!(Element::from_atomic_number(37), None);
    }
}
