use std::rc::Rc;

use tracing::trace;

use super::particle::{Electron, ElectronRef};
use super::types::{QuantumNumbers, Spin};

pub const ORBITAL_CAPACITY: usize = 2;

/// A capacity-two slot addressed by `(n, l, m)`.
///
/// The only admission rule is spin exclusion: a second electron is accepted
/// only if its spin differs from the current occupant. The orbital does not
/// check that the candidate's own tags match its quantum numbers; callers
/// address the right orbital.
#[derive(Debug, Clone)]
pub struct Orbital {
    pub quantum: QuantumNumbers,
    electrons: Vec<ElectronRef>,
}

impl Orbital {
    pub fn new(quantum: QuantumNumbers) -> Self {
        Self {
            quantum,
            electrons: Vec::with_capacity(ORBITAL_CAPACITY),
        }
    }

    #[inline]
    pub fn n(&self) -> u32 {
        self.quantum.n
    }

    #[inline]
    pub fn l(&self) -> u32 {
        self.quantum.l
    }

    #[inline]
    pub fn m(&self) -> i32 {
        self.quantum.m
    }

    pub fn electrons(&self) -> &[ElectronRef] {
        &self.electrons
    }

    #[inline]
    pub fn occupancy(&self) -> usize {
        self.electrons.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.electrons.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.electrons.len() >= ORBITAL_CAPACITY
    }

    pub fn spins(&self) -> Vec<Spin> {
        self.electrons.iter().map(|e| e.spin()).collect()
    }

    pub fn contains(&self, electron: &Electron) -> bool {
        self.electrons.iter().any(|e| std::ptr::eq(e.as_ref(), electron))
    }

    pub fn can_add(&self, electron: &Electron) -> bool {
        let accepted = match self.electrons.as_slice() {
            [] => true,
            [occupant] => occupant.spin() != electron.spin(),
            _ => false,
        };
        trace!(
            orbital = %self.quantum,
            occupancy = self.electrons.len(),
            spin = %electron.spin(),
            accepted,
            "exclusion check"
        );
        accepted
    }

    /// Places `electron` here if [`can_add`](Self::can_add) allows it and
    /// retags the electron with this orbital. Returns `false` untouched otherwise.
    pub fn add(&mut self, electron: &ElectronRef) -> bool {
        if !self.can_add(electron) {
            return false;
        }
        electron.set_quantum(self.quantum);
        self.electrons.push(Rc::clone(electron));
        true
    }

    /// Takes `electron` out of this orbital. Returns whether it was here.
    pub fn remove(&mut self, electron: &Electron) -> bool {
        let Some(pos) = self
            .electrons
            .iter()
            .position(|e| std::ptr::eq(e.as_ref(), electron))
        else {
            return false;
        };
        self.electrons.remove(pos);
        true
    }

    /// True when `electron` sits here next to an occupant of the same spin.
    pub fn clashes_with(&self, electron: &Electron) -> bool {
        self.contains(electron)
            && self
                .electrons
                .iter()
                .filter(|e| e.spin() == electron.spin())
                .count()
                > 1
    }

    pub fn clear(&mut self) {
        self.electrons.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::particle::electron;

    fn q(n: u32, l: u32, m: i32) -> QuantumNumbers {
        QuantumNumbers::new(n, l, m).unwrap()
    }

    fn spun(spin: Spin) -> ElectronRef {
        let e = electron(1, 0, 0).unwrap();
        e.set_spin(spin);
        e
    }

    #[test]
    fn empty_orbital_accepts_any_spin() {
        let orbital = Orbital::new(q(1, 0, 0));
        assert!(orbital.can_add(&spun(Spin::Up)));
        assert!(orbital.can_add(&spun(Spin::Down)));
    }

    #[test]
    fn second_electron_requires_opposite_spin() {
        let mut orbital = Orbital::new(q(2, 1, 0));
        assert!(orbital.add(&spun(Spin::Up)));
        assert!(!orbital.add(&spun(Spin::Up)));
        assert_eq!(orbital.occupancy(), 1);
        assert!(orbital.add(&spun(Spin::Down)));
        assert!(orbital.is_full());
        assert_eq!(orbital.spins(), vec![Spin::Up, Spin::Down]);
    }

    #[test]
    fn remove_frees_the_slot_for_the_same_spin() {
        let mut orbital = Orbital::new(q(2, 0, 0));
        let up = spun(Spin::Up);
        let down = spun(Spin::Down);
        orbital.add(&up);
        orbital.add(&down);

        assert!(orbital.remove(&up));
        assert!(!orbital.remove(&up));
        assert_eq!(orbital.spins(), vec![Spin::Down]);
        assert!(orbital.add(&spun(Spin::Up)));
    }

    #[test]
    fn clash_is_reported_after_a_flip() {
        let mut orbital = Orbital::new(q(2, 0, 0));
        let up = spun(Spin::Up);
        let down = spun(Spin::Down);
        orbital.add(&up);
        orbital.add(&down);
        assert!(!orbital.clashes_with(&up));

        up.set_spin(Spin::Down);
        assert!(orbital.clashes_with(&up));
        assert!(!orbital.clashes_with(&spun(Spin::Down)));
    }

    #[test]
    fn full_orbital_rejects_everything() {
        let mut orbital = Orbital::new(q(1, 0, 0));
        orbital.add(&spun(Spin::Up));
        orbital.add(&spun(Spin::Down));
        assert!(!orbital.can_add(&spun(Spin::Up)));
        assert!(!orbital.add(&spun(Spin::Down)));
        assert_eq!(orbital.occupancy(), 2);
    }

    #[test]
    fn add_retags_electron() {
        let mut orbital = Orbital::new(q(3, 2, -2));
        let e = spun(Spin::Up);
        assert!(orbital.add(&e));
        assert_eq!(e.quantum(), q(3, 2, -2));
        assert!(orbital.contains(&e));
    }

    #[test]
    fn clear_empties_orbital() {
        let mut orbital = Orbital::new(q(1, 0, 0));
        orbital.add(&spun(Spin::Up));
        orbital.clear();
        assert!(orbital.is_empty());
    }
}
