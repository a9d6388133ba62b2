//! Elementary and composite particles consumed by [`Atom`](super::atom::Atom).
//!
//! Quarks and composites are plain values whose mass, charge, and spin are
//! sums over their constituents. Electrons are the exception: a single
//! electron can be referenced by two atoms once a covalent bond is formed,
//! so it is handed around as a shared [`ElectronRef`] whose spin, orbital
//! tags, and identity index are interior-mutable.

use std::cell::Cell;
use std::rc::Rc;

use super::types::{InvalidQuantumNumbers, QuantumNumbers, Spin};

pub const ELECTRON_MASS: f64 = 1.0;
/// Magnitude of the electron charge; subtracted when summing atom charge.
pub const ELECTRON_CHARGE: f64 = 1.0;

/// Identity index of an entity the registry has not seen yet.
pub const UNREGISTERED: i64 = -1;

pub type ElectronRef = Rc<Electron>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Up,
    Down,
    Strange,
    Charm,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quark {
    pub flavor: Flavor,
    pub color: Color,
}

impl Quark {
    pub fn new(flavor: Flavor, color: Color) -> Self {
        Self { flavor, color }
    }

    pub fn up() -> Self {
        Self::new(Flavor::Up, Color::Red)
    }

    pub fn down() -> Self {
        Self::new(Flavor::Down, Color::Green)
    }

    pub fn charge(&self) -> f64 {
        match self.flavor {
            Flavor::Up | Flavor::Charm | Flavor::Top => 2.0 / 3.0,
            Flavor::Down | Flavor::Strange | Flavor::Bottom => -1.0 / 3.0,
        }
    }

    pub fn mass(&self) -> f64 {
        match self.flavor {
            Flavor::Up => 0.002,
            Flavor::Down => 0.005,
            Flavor::Strange => 0.095,
            Flavor::Charm => 1.27,
            Flavor::Top => 173.21,
            Flavor::Bottom => 4.18,
        }
    }

    pub fn spin(&self) -> f64 {
        0.5
    }
}

/// A hadron built from quarks (protons and neutrons in practice).
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeParticle {
    pub quarks: Vec<Quark>,
    pub index: i64,
}

impl CompositeParticle {
    pub fn new(quarks: Vec<Quark>) -> Self {
        Self {
            quarks,
            index: UNREGISTERED,
        }
    }

    pub fn proton() -> Self {
        Self::new(vec![Quark::up(), Quark::up(), Quark::down()])
    }

    pub fn neutron() -> Self {
        Self::new(vec![Quark::up(), Quark::down(), Quark::down()])
    }

    pub fn mass(&self) -> f64 {
        self.quarks.iter().map(Quark::mass).sum()
    }

    pub fn charge(&self) -> f64 {
        self.quarks.iter().map(Quark::charge).sum()
    }

    pub fn spin(&self) -> f64 {
        self.quarks.iter().map(Quark::spin).sum()
    }

    pub fn baryon_number(&self) -> f64 {
        self.quarks.len() as f64 / 3.0
    }
}

#[derive(Debug)]
pub struct Electron {
    spin: Cell<Spin>,
    quantum: Cell<QuantumNumbers>,
    index: Cell<i64>,
}

impl Electron {
    pub fn new(quantum: QuantumNumbers, spin: Spin) -> Self {
        Self {
            spin: Cell::new(spin),
            quantum: Cell::new(quantum),
            index: Cell::new(UNREGISTERED),
        }
    }

    #[inline]
    pub fn spin(&self) -> Spin {
        self.spin.get()
    }

    #[inline]
    pub fn set_spin(&self, spin: Spin) {
        self.spin.set(spin);
    }

    /// Orbital this electron was last placed in.
    #[inline]
    pub fn quantum(&self) -> QuantumNumbers {
        self.quantum.get()
    }

    #[inline]
    pub(crate) fn set_quantum(&self, quantum: QuantumNumbers) {
        self.quantum.set(quantum);
    }

    #[inline]
    pub fn index(&self) -> i64 {
        self.index.get()
    }

    #[inline]
    pub fn set_index(&self, index: i64) {
        self.index.set(index);
    }

    #[inline]
    pub fn is_registered(&self) -> bool {
        self.index() != UNREGISTERED
    }

    pub fn mass(&self) -> f64 {
        ELECTRON_MASS
    }

    pub fn charge(&self) -> f64 {
        ELECTRON_CHARGE
    }
}

/// Creates a spin-up electron tagged with the given orbital.
pub fn electron(n: u32, l: u32, m: i32) -> Result<ElectronRef, InvalidQuantumNumbers> {
    let quantum = QuantumNumbers::new(n, l, m)?;
    Ok(Rc::new(Electron::new(quantum, Spin::Up)))
}
