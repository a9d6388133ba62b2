use std::rc::Rc;

use tracing::debug;

use super::atom::Atom;
use super::molecule::Molecule;
use super::particle::{CompositeParticle, ElectronRef, Quark, UNREGISTERED};
use crate::engine::Error;

/// Anything that can be stored in a [`World`].
#[derive(Debug)]
pub enum Entity {
    Quark(Quark),
    Electron(ElectronRef),
    Composite(CompositeParticle),
    Atom(Atom),
    Molecule(Molecule),
}

impl From<Quark> for Entity {
    fn from(quark: Quark) -> Self {
        Self::Quark(quark)
    }
}

impl From<ElectronRef> for Entity {
    fn from(electron: ElectronRef) -> Self {
        Self::Electron(electron)
    }
}

impl From<CompositeParticle> for Entity {
    fn from(composite: CompositeParticle) -> Self {
        Self::Composite(composite)
    }
}

impl From<Atom> for Entity {
    fn from(atom: Atom) -> Self {
        Self::Atom(atom)
    }
}

impl From<Molecule> for Entity {
    fn from(molecule: Molecule) -> Self {
        Self::Molecule(molecule)
    }
}

/// Arena and slot of a stored entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Quark(usize),
    Electron(usize),
    Composite(usize),
    Atom(usize),
    Molecule(usize),
}

/// Registry of every entity in a simulation.
///
/// Each kind of entity lives in its own dense arena and is addressed by its
/// slot there. Registration also hands out identity indices from a single
/// counter that only ever grows; bond records refer to atoms and electrons
/// by these indices rather than by slot.
#[derive(Debug, Default)]
pub struct World {
    quarks: Vec<Quark>,
    particles: Vec<ElectronRef>,
    composites: Vec<CompositeParticle>,
    atoms: Vec<Atom>,
    molecules: Vec<Molecule>,
    next_index: i64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `entity` and registers whatever it carries.
    ///
    /// An atom takes the next index first, followed by its protons, its
    /// neutrons and its electrons in list order. Anything that already has
    /// an index keeps it. Quarks and molecules carry no identity index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownAtom`] if a molecule refers to an atom slot
    /// that does not exist yet.
    pub fn add(&mut self, entity: impl Into<Entity>) -> Result<EntityKey, Error> {
        let key = match entity.into() {
            Entity::Quark(quark) => {
                self.quarks.push(quark);
                EntityKey::Quark(self.quarks.len() - 1)
            }
            Entity::Electron(electron) => {
                self.register_electron(&electron);
                self.particles.push(electron);
                EntityKey::Electron(self.particles.len() - 1)
            }
            Entity::Composite(mut composite) => {
                self.register_composite(&mut composite);
                self.composites.push(composite);
                EntityKey::Composite(self.composites.len() - 1)
            }
            Entity::Atom(mut atom) => {
                self.register_atom(&mut atom);
                debug!(
                    slot = self.atoms.len(),
                    index = atom.index,
                    protons = atom.protons().len(),
                    electrons = atom.electron_count(),
                    "registered atom"
                );
                self.atoms.push(atom);
                EntityKey::Atom(self.atoms.len() - 1)
            }
            Entity::Molecule(molecule) => {
                let known = self.atoms.len();
                if let Some(&slot) = molecule.atom_slots().iter().find(|&&s| s >= known) {
                    return Err(Error::UnknownAtom { slot });
                }
                self.molecules.push(molecule);
                EntityKey::Molecule(self.molecules.len() - 1)
            }
        };
        Ok(key)
    }

    /// Index the next registered entity will receive.
    #[inline]
    pub fn next_index(&self) -> i64 {
        self.next_index
    }

    pub fn quarks(&self) -> &[Quark] {
        &self.quarks
    }

    pub fn particles(&self) -> &[ElectronRef] {
        &self.particles
    }

    pub fn composites(&self) -> &[CompositeParticle] {
        &self.composites
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn molecules(&self) -> &[Molecule] {
        &self.molecules
    }

    pub fn atom(&self, slot: usize) -> Option<&Atom> {
        self.atoms.get(slot)
    }

    pub fn atom_mut(&mut self, slot: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(slot)
    }

    pub fn molecule(&self, slot: usize) -> Option<&Molecule> {
        self.molecules.get(slot)
    }

    /// Atom carrying the identity index `index`, as found in bond records.
    pub fn atom_by_index(&self, index: i64) -> Option<&Atom> {
        if index == UNREGISTERED {
            return None;
        }
        self.atoms.iter().find(|a| a.index == index)
    }

    /// Electron carrying `index`, whether stored on its own or inside an atom.
    pub fn electron_by_index(&self, index: i64) -> Option<ElectronRef> {
        if index == UNREGISTERED {
            return None;
        }
        self.particles
            .iter()
            .chain(self.atoms.iter().flat_map(|a| a.electrons()))
            .find(|e| e.index() == index)
            .map(Rc::clone)
    }

    /// Mutable access to two distinct atoms at once.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Result<(&mut Atom, &mut Atom), Error> {
        let len = self.atoms.len();
        for slot in [a, b] {
            if slot >= len {
                return Err(Error::UnknownAtom { slot });
            }
        }
        if a == b {
            return Err(Error::SameAtom { slot: a });
        }

        if a < b {
            let (head, tail) = self.atoms.split_at_mut(b);
            Ok((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.atoms.split_at_mut(a);
            Ok((&mut tail[0], &mut head[b]))
        }
    }

    /// Runs [`Atom::covalent_bond`] between the atoms at slots `a` and `b`.
    pub fn covalent_bond(&mut self, a: usize, b: usize) -> Result<bool, Error> {
        let (first, second) = self.pair_mut(a, b)?;
        Ok(first.covalent_bond(second))
    }

    /// Runs [`Atom::ionic_bond`] from the atom at slot `a` to the one at `b`.
    ///
    /// Orbitals are not refreshed; call [`Atom::configure`] on both atoms to
    /// settle the transferred electron.
    pub fn ionic_bond(&mut self, a: usize, b: usize) -> Result<bool, Error> {
        let (donor, acceptor) = self.pair_mut(a, b)?;
        Ok(donor.ionic_bond(acceptor))
    }

    fn take_index(&mut self) -> i64 {
        let index = self.next_index;
        self.next_index += 1;
        index
    }

    fn register_electron(&mut self, electron: &ElectronRef) {
        if !electron.is_registered() {
            electron.set_index(self.take_index());
        }
    }

    fn register_composite(&mut self, composite: &mut CompositeParticle) {
        if composite.index == UNREGISTERED {
            composite.index = self.take_index();
        }
    }

    fn register_atom(&mut self, atom: &mut Atom) {
        if atom.index == UNREGISTERED {
            atom.index = self.take_index();
        }
        for nucleon in atom.protons.iter_mut().chain(atom.neutrons.iter_mut()) {
            self.register_composite(nucleon);
        }
        for electron in &atom.electrons {
            self.register_electron(electron);
        }
    }
}
