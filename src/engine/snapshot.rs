//! Snapshots used to undo speculative mutations.
//!
//! Bonding and membership changes mutate an atom in several steps. Each
//! step is preceded by a capture of exactly the state it can touch, and a
//! failed step replays the capture instead of undoing changes by hand.

use std::collections::HashMap;
use std::rc::Rc;

use crate::model::atom::Atom;
use crate::model::orbital::Orbital;
use crate::model::particle::ElectronRef;
use crate::model::types::{QuantumNumbers, Spin};

/// Electron membership and orbital occupancy of one atom.
///
/// Orbital tags of the owned electrons are captured as well, since a
/// configuration pass rewrites them.
#[derive(Debug, Clone)]
pub(crate) struct AtomSnapshot {
    electrons: Vec<ElectronRef>,
    tags: Vec<QuantumNumbers>,
    orbitals: Vec<Orbital>,
    orbital_index: HashMap<QuantumNumbers, usize>,
    unassigned: Vec<ElectronRef>,
}

impl AtomSnapshot {
    pub fn capture(atom: &Atom) -> Self {
        Self {
            electrons: atom.electrons.clone(),
            tags: atom.electrons.iter().map(|e| e.quantum()).collect(),
            orbitals: atom.orbitals.clone(),
            orbital_index: atom.orbital_index.clone(),
            unassigned: atom.unassigned.clone(),
        }
    }

    /// Puts `atom` back into the captured state. The snapshot stays usable.
    pub fn restore(&self, atom: &mut Atom) {
        for (electron, tag) in self.electrons.iter().zip(&self.tags) {
            electron.set_quantum(*tag);
        }
        atom.electrons.clone_from(&self.electrons);
        atom.orbitals.clone_from(&self.orbitals);
        atom.orbital_index.clone_from(&self.orbital_index);
        atom.unassigned.clone_from(&self.unassigned);
    }
}

/// Spins of a handful of electrons touched by a speculative flip.
#[derive(Debug)]
pub(crate) struct SpinSnapshot {
    entries: Vec<(ElectronRef, Spin)>,
}

impl SpinSnapshot {
    pub fn capture<'a>(electrons: impl IntoIterator<Item = &'a ElectronRef>) -> Self {
        Self {
            entries: electrons
                .into_iter()
                .map(|e| (Rc::clone(e), e.spin()))
                .collect(),
        }
    }

    pub fn restore(&self) {
        for (electron, spin) in &self.entries {
            electron.set_spin(*spin);
        }
    }
}
