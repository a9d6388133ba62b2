use super::atom::Atom;
use super::bond::{CovalentBond, IonicBond};
use super::world::World;

/// A group of atoms stored in a [`World`], addressed by arena slot.
///
/// The molecule owns no atoms. Every query reads the member atoms through
/// the world that stores them; slots that the world does not hold are
/// skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Molecule {
    atoms: Vec<usize>,
}

impl Molecule {
    pub fn new(atoms: Vec<usize>) -> Self {
        Self { atoms }
    }

    #[inline]
    pub fn atom_slots(&self) -> &[usize] {
        &self.atoms
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Member atoms in slot-list order.
    pub fn atoms<'w>(&self, world: &'w World) -> impl Iterator<Item = &'w Atom> {
        self.atoms.iter().filter_map(move |&slot| world.atom(slot))
    }

    /// Covalent bond records of every member, member by member.
    ///
    /// A bond between two members appears twice, once from each side.
    pub fn covalent_bonds(&self, world: &World) -> Vec<CovalentBond> {
        self.atoms(world)
            .flat_map(|a| a.covalent_bonds().iter().copied())
            .collect()
    }

    /// Ionic bond records of every member, member by member.
    pub fn ionic_bonds(&self, world: &World) -> Vec<IonicBond> {
        self.atoms(world)
            .flat_map(|a| a.ionic_bonds().iter().copied())
            .collect()
    }

    pub fn mass(&self, world: &World) -> f64 {
        self.atoms(world).map(Atom::mass).sum()
    }

    pub fn charge(&self, world: &World) -> f64 {
        self.atoms(world).map(Atom::charge).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Element;
    use crate::model::world::EntityKey;

    fn water(world: &mut World) -> Molecule {
        let mut slots = Vec::new();
        for element in [Element::O, Element::H, Element::H] {
            let key = world.add(Atom::neutral(element).unwrap()).unwrap();
            let EntityKey::Atom(slot) = key else {
                panic!("expected an atom key, got {key:?}");
            };
            slots.push(slot);
        }
        Molecule::new(slots)
    }

    #[test]
    fn bonds_are_reported_per_member_in_order() {
        let mut world = World::new();
        let molecule = water(&mut world);
        assert!(world.covalent_bond(1, 2).unwrap());

        let bonds = molecule.covalent_bonds(&world);
        assert_eq!(bonds.len(), 2);
        assert_eq!(bonds[0], world.atoms()[1].covalent_bonds()[0]);
        assert_eq!(bonds[1], world.atoms()[2].covalent_bonds()[0]);
        assert!(molecule.ionic_bonds(&world).is_empty());
    }

    #[test]
    fn ionic_bonds_include_both_sides() {
        let mut world = World::new();
        world.add(Atom::neutral(Element::Na).unwrap()).unwrap();
        world.add(Atom::neutral(Element::Cl).unwrap()).unwrap();
        let salt = Molecule::new(vec![0, 1]);

        assert!(world.ionic_bond(0, 1).unwrap());
        let bonds = salt.ionic_bonds(&world);
        assert_eq!(bonds.len(), 2);
        assert_eq!(bonds[0].electron, bonds[1].electron);
        assert_eq!(bonds[0].partner, world.atoms()[1].index);
        assert_eq!(bonds[1].partner, world.atoms()[0].index);
    }

    #[test]
    fn mass_and_charge_sum_over_members() {
        let mut world = World::new();
        let molecule = water(&mut world);

        let expected: f64 = world.atoms().iter().map(Atom::mass).sum();
        assert!((molecule.mass(&world) - expected).abs() < 1e-9);
        assert!(molecule.charge(&world).abs() < 1e-9);
        assert_eq!(molecule.atom_count(), 3);
    }

    #[test]
    fn missing_slots_are_skipped() {
        let world = World::new();
        let molecule = Molecule::new(vec![0, 1]);
        assert_eq!(molecule.atoms(&world).count(), 0);
        assert_eq!(molecule.mass(&world), 0.0);
    }
}
