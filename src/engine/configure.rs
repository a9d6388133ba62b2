use std::rc::Rc;

use tracing::{debug, trace, warn};

use super::config::{EngineConfig, UnassignedPolicy};
use super::error::Error;
use super::snapshot::AtomSnapshot;
use crate::model::atom::Atom;
use crate::model::orbital::{ORBITAL_CAPACITY, Orbital};
use crate::model::particle::{Electron, ElectronRef};
use crate::model::types::QuantumNumbers;

impl Atom {
    /// Redistributes the electron list into orbitals along the fill order.
    ///
    /// Existing orbitals are emptied and reused so that their slots stay
    /// stable; orbitals left empty afterwards are dropped together with
    /// their index entries. The assignment depends only on the ordered
    /// electron list and the fill order, so repeated calls are idempotent.
    ///
    /// # Errors
    ///
    /// Under [`UnassignedPolicy::Strict`] returns
    /// [`Error::UnassignedElectrons`] if any electron is left without an
    /// orbital. The electron list is never modified; the orbital occupancy
    /// reflects the partial pass.
    pub fn configure(&mut self) -> Result<(), Error> {
        let order = self.config.fill_order();

        for orbital in &mut self.orbitals {
            orbital.clear();
        }

        let mut assigned = 0;
        for quantum in order.orbitals() {
            let slot = self.ensure_orbital(quantum);
            let orbital = &mut self.orbitals[slot];
            for _ in 0..ORBITAL_CAPACITY {
                let Some(electron) = self.electrons.get(assigned) else {
                    break;
                };
                if orbital.add(electron) {
                    assigned += 1;
                } else {
                    trace!(
                        orbital = %quantum,
                        position = assigned,
                        "electron rejected by exclusion rule, moving to next orbital"
                    );
                    break;
                }
            }
        }

        self.prune_empty_orbitals();

        let total = self.electrons.len();
        let capacity = order.capacity();
        if assigned == total {
            self.unassigned.clear();
            debug!(
                atom = self.index,
                electrons = total,
                orbitals = self.orbitals.len(),
                "configured"
            );
            return Ok(());
        }

        let leftover = total - assigned;
        match self.config.unassigned_policy {
            UnassignedPolicy::Strict => Err(Error::unassigned(leftover, total, capacity)),
            UnassignedPolicy::Stash => {
                warn!(
                    atom = self.index,
                    unassigned = leftover,
                    total,
                    capacity,
                    "stashing electrons without an orbital"
                );
                self.unassigned = self.electrons[assigned..].to_vec();
                Ok(())
            }
        }
    }

    /// Switches the atom to `config` and reconfigures it.
    ///
    /// The atom keeps its previous settings and occupancy if `config` is
    /// invalid or the new fill order cannot place every electron.
    pub fn configure_with(&mut self, config: &EngineConfig) -> Result<(), Error> {
        config.validate()?;
        let previous = std::mem::replace(&mut self.config, *config);
        let snapshot = AtomSnapshot::capture(self);
        if let Err(err) = self.configure() {
            snapshot.restore(self);
            self.config = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Appends `electron` if some active orbital would admit it.
    ///
    /// Returns `Ok(false)` without mutation when no active orbital can take
    /// the electron. On a configuration error the atom is restored to its
    /// previous state and the error is returned.
    pub fn add_electron(&mut self, electron: ElectronRef) -> Result<bool, Error> {
        if !self.orbitals.iter().any(|o| o.can_add(&electron)) {
            return Ok(false);
        }
        self.mutate_membership(|electrons| electrons.push(electron))?;
        Ok(true)
    }

    /// Pops the last electron in list order. `Ok(false)` if there is none.
    pub fn remove_last_electron(&mut self) -> Result<bool, Error> {
        if self.electrons.is_empty() {
            return Ok(false);
        }
        self.mutate_membership(|electrons| {
            electrons.pop();
        })?;
        Ok(true)
    }

    /// Removes the first electron carrying the same identity index.
    ///
    /// Unregistered electrons (index `-1`) and electrons not owned by this
    /// atom yield `Ok(false)` with no mutation.
    pub fn remove_electron(&mut self, electron: &Electron) -> Result<bool, Error> {
        if !electron.is_registered() {
            return Ok(false);
        }
        let Some(position) = self
            .electrons
            .iter()
            .position(|e| e.index() == electron.index())
        else {
            return Ok(false);
        };
        self.mutate_membership(|electrons| {
            electrons.remove(position);
        })?;
        Ok(true)
    }

    /// Places `electron` in the outermost shell without a full reconfiguration.
    ///
    /// Existing orbitals of the valence shell are tried first, then missing
    /// `(shell, l, m)` slots are created in order. Nothing is registered
    /// when the electron cannot be placed.
    pub fn add_to_valence_shell(&mut self, electron: &ElectronRef) -> bool {
        if !self.seat_in_valence_shell(electron) {
            return false;
        }
        self.electrons.push(Rc::clone(electron));
        true
    }

    /// Places `electron` in a valence orbital, leaving the electron list alone.
    pub(crate) fn seat_in_valence_shell(&mut self, electron: &ElectronRef) -> bool {
        let Some(shell) = self.valence_shell() else {
            return false;
        };

        if let Some(orbital) = self
            .orbitals
            .iter_mut()
            .find(|o| o.n() == shell && o.can_add(electron))
        {
            return orbital.add(electron);
        }

        for l in 0..shell {
            let l_signed = l as i32;
            for m in -l_signed..=l_signed {
                let quantum = QuantumNumbers::new_unchecked(shell, l, m);
                if self.orbital_index.contains_key(&quantum) {
                    continue;
                }
                let mut orbital = Orbital::new(quantum);
                if orbital.add(electron) {
                    debug!(atom = self.index, orbital = %quantum, "opened valence orbital");
                    self.orbital_index.insert(quantum, self.orbitals.len());
                    self.orbitals.push(orbital);
                    return true;
                }
            }
        }

        debug!(atom = self.index, shell, "valence shell cannot accept electron");
        false
    }

    /// Slot of the orbital for `quantum`, creating and indexing it if absent.
    fn ensure_orbital(&mut self, quantum: QuantumNumbers) -> usize {
        if let Some(&slot) = self.orbital_index.get(&quantum) {
            return slot;
        }
        let slot = self.orbitals.len();
        trace!(orbital = %quantum, slot, "created orbital");
        self.orbitals.push(Orbital::new(quantum));
        self.orbital_index.insert(quantum, slot);
        slot
    }

    fn prune_empty_orbitals(&mut self) {
        self.orbitals.retain(|o| !o.is_empty());
        self.orbital_index = self
            .orbitals
            .iter()
            .enumerate()
            .map(|(slot, o)| (o.quantum, slot))
            .collect();
    }

    /// Applies `change` to the electron list and reconfigures, rolling the
    /// whole atom back if the pass fails.
    fn mutate_membership(
        &mut self,
        change: impl FnOnce(&mut Vec<ElectronRef>),
    ) -> Result<(), Error> {
        let snapshot = AtomSnapshot::capture(self);
        change(&mut self.electrons);
        if let Err(e) = self.configure() {
            snapshot.restore(self);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::EngineConfig;
    use crate::model::particle::electron;
    use crate::model::types::Spin;

    fn q(n: u32, l: u32, m: i32) -> QuantumNumbers {
        QuantumNumbers::new(n, l, m).unwrap()
    }

    fn registered(index: i64, spin: Spin) -> ElectronRef {
        let e = electron(1, 0, 0).unwrap();
        e.set_index(index);
        e.set_spin(spin);
        e
    }

    fn assert_exclusion(atom: &Atom) {
        for orbital in atom.orbitals() {
            assert!(orbital.occupancy() <= 2);
            if let [a, b] = orbital.electrons() {
                assert_ne!(a.spin(), b.spin(), "orbital {}", orbital.quantum);
            }
        }
    }

    #[test]
    fn configure_is_idempotent() {
        let mut atom = Atom::new(17, 18, 17).unwrap();
        let configuration = atom.configuration();
        let index = atom.orbital_index().clone();

        atom.configure().unwrap();
        assert_eq!(atom.configuration(), configuration);
        assert_eq!(atom.orbital_index(), &index);
        assert_exclusion(&atom);
    }

    #[test]
    fn configure_assigns_every_electron() {
        let atom = Atom::new(26, 30, 26).unwrap();
        let placed: usize = atom.orbitals().iter().map(Orbital::occupancy).sum();
        assert_eq!(placed, 26);
        assert!(atom.unassigned().is_empty());
        assert_exclusion(&atom);
    }

    #[test]
    fn configure_follows_nested_traversal() {
        // 3d precedes 4s in the fixed traversal.
        let atom = Atom::new(19, 20, 19).unwrap();
        assert!(atom.orbital(q(3, 2, -2)).is_some());
        assert!(atom.orbital(q(4, 0, 0)).is_none());
        assert_eq!(atom.valence_shell(), Some(3));
    }

    #[test]
    fn index_matches_orbital_slots() {
        let atom = Atom::new(8, 8, 8).unwrap();
        for (slot, orbital) in atom.orbitals().iter().enumerate() {
            assert_eq!(atom.orbital_index()[&orbital.quantum], slot);
        }
        assert_eq!(atom.orbital_index().len(), atom.orbitals().len());
    }

    #[test]
    fn same_spin_electrons_spill_into_next_orbital() {
        let mut atom = Atom::new(2, 2, 1).unwrap();
        atom.electrons.push(registered(5, Spin::Up));
        atom.configure().unwrap();

        assert_eq!(atom.orbital(q(1, 0, 0)).unwrap().occupancy(), 1);
        assert_eq!(atom.orbital(q(2, 0, 0)).unwrap().occupancy(), 1);
        assert_eq!(atom.electrons()[1].quantum(), q(2, 0, 0));
    }

    #[test]
    fn strict_policy_reports_leftovers() {
        let config = EngineConfig {
            max_shell: 1,
            ..Default::default()
        };
        let mut atom = Atom::with_config(2, 2, 2, config).unwrap();
        atom.electrons.push(registered(9, Spin::Up));

        let err = atom.configure().unwrap_err();
        assert!(matches!(
            err,
            Error::UnassignedElectrons {
                unassigned: 1,
                total: 3,
                capacity: 2
            }
        ));
        assert_eq!(atom.electron_count(), 3);
    }

    #[test]
    fn stash_policy_keeps_leftovers() {
        let config = EngineConfig {
            max_shell: 1,
            unassigned_policy: UnassignedPolicy::Stash,
        };
        let mut atom = Atom::with_config(2, 2, 2, config).unwrap();
        let extra = registered(9, Spin::Up);
        atom.electrons.push(Rc::clone(&extra));

        atom.configure().unwrap();
        assert_eq!(atom.unassigned().len(), 1);
        assert!(Rc::ptr_eq(&atom.unassigned()[0], &extra));

        atom.electrons.pop();
        atom.configure().unwrap();
        assert!(atom.unassigned().is_empty());
    }

    #[test]
    fn add_then_remove_round_trip() {
        let mut atom = Atom::new(1, 0, 1).unwrap();
        let electrons_before = atom.electrons().to_vec();
        let configuration_before = atom.configuration();

        let e = registered(42, Spin::Down);
        assert!(atom.add_electron(Rc::clone(&e)).unwrap());
        assert_eq!(atom.electron_count(), 2);
        assert_eq!(
            atom.orbital(q(1, 0, 0)).unwrap().spins(),
            vec![Spin::Up, Spin::Down]
        );

        assert!(atom.remove_electron(&e).unwrap());
        assert_eq!(atom.configuration(), configuration_before);
        assert_eq!(atom.electron_count(), electrons_before.len());
        assert!(
            atom.electrons()
                .iter()
                .zip(&electrons_before)
                .all(|(a, b)| Rc::ptr_eq(a, b))
        );
    }

    #[test]
    fn add_electron_rejected_when_no_orbital_admits_it() {
        let mut neon = Atom::new(10, 10, 10).unwrap();
        let before = neon.configuration();
        assert!(!neon.add_electron(registered(1, Spin::Up)).unwrap());
        assert_eq!(neon.electron_count(), 10);
        assert_eq!(neon.configuration(), before);

        let mut bare = Atom::new(1, 0, 0).unwrap();
        assert!(!bare.add_electron(registered(2, Spin::Up)).unwrap());
    }

    #[test]
    fn add_electron_with_same_spin_as_lone_occupant_is_rejected() {
        let mut hydrogen = Atom::new(1, 0, 1).unwrap();
        assert!(!hydrogen.add_electron(registered(3, Spin::Up)).unwrap());
    }

    #[test]
    fn add_electron_failure_restores_atom() {
        let config = EngineConfig {
            max_shell: 1,
            ..Default::default()
        };
        let mut atom = Atom::with_config(2, 2, 1, config).unwrap();
        // A second spin-up electron the one-orbital traversal cannot place.
        atom.electrons.push(registered(7, Spin::Up));

        let before_count = atom.electron_count();
        let before = atom.configuration();
        let result = atom.add_electron(registered(8, Spin::Down));
        assert!(result.is_err());
        assert_eq!(atom.electron_count(), before_count);
        assert_eq!(atom.configuration(), before);
    }

    #[test]
    fn remove_last_electron_pops_in_list_order() {
        let mut atom = Atom::new(3, 4, 3).unwrap();
        let last = Rc::clone(atom.electrons().last().unwrap());
        assert!(atom.remove_last_electron().unwrap());
        assert_eq!(atom.electron_count(), 2);
        assert!(!atom.electrons().iter().any(|e| Rc::ptr_eq(e, &last)));
        assert!(atom.orbital(q(2, 0, 0)).is_none());
    }

    #[test]
    fn remove_last_electron_on_empty_atom() {
        let mut atom = Atom::new(1, 0, 0).unwrap();
        assert!(!atom.remove_last_electron().unwrap());
    }

    #[test]
    fn remove_unregistered_or_foreign_electron_is_noop() {
        let mut atom = Atom::new(2, 2, 2).unwrap();
        let before = atom.configuration();

        let stranger = electron(1, 0, 0).unwrap();
        assert!(!atom.remove_electron(&stranger).unwrap());

        stranger.set_index(99);
        assert!(!atom.remove_electron(&stranger).unwrap());
        assert_eq!(atom.configuration(), before);
        assert_eq!(atom.electron_count(), 2);
    }

    #[test]
    fn remove_electron_drops_only_first_match() {
        let mut atom = Atom::new(2, 2, 2).unwrap();
        for (i, e) in atom.electrons().iter().enumerate() {
            e.set_index(10 + i as i64);
        }
        let target = Rc::clone(&atom.electrons()[0]);
        assert!(atom.remove_electron(&target).unwrap());
        assert_eq!(atom.electron_count(), 1);
        assert_eq!(atom.electrons()[0].index(), 11);
    }

    #[test]
    fn valence_shell_prefers_existing_orbitals() {
        let mut atom = Atom::new(9, 10, 9).unwrap();
        let slots = atom.orbitals().len();
        let incoming = registered(50, Spin::Down);

        assert!(atom.add_to_valence_shell(&incoming));
        assert_eq!(atom.orbitals().len(), slots);
        assert_eq!(atom.electron_count(), 10);
        assert_eq!(incoming.quantum(), q(2, 1, 1));
        assert_exclusion(&atom);
    }

    #[test]
    fn valence_shell_opens_missing_orbital() {
        let mut atom = Atom::new(3, 4, 3).unwrap();
        let incoming = registered(51, Spin::Up);

        assert!(atom.add_to_valence_shell(&incoming));
        assert_eq!(incoming.quantum(), q(2, 1, -1));
        assert_eq!(atom.orbital_index()[&q(2, 1, -1)], atom.orbitals().len() - 1);
    }

    #[test]
    fn valence_shell_full_returns_false_without_mutation() {
        let mut atom = Atom::new(10, 10, 10).unwrap();
        let before = atom.configuration();
        let index = atom.orbital_index().clone();

        assert!(!atom.add_to_valence_shell(&registered(52, Spin::Up)));
        assert_eq!(atom.configuration(), before);
        assert_eq!(atom.orbital_index(), &index);
        assert_eq!(atom.electron_count(), 10);
    }

    #[test]
    fn configure_with_switches_settings() {
        let mut atom = Atom::new(10, 10, 10).unwrap();
        let narrow = EngineConfig {
            max_shell: 2,
            ..Default::default()
        };

        atom.configure_with(&narrow).unwrap();
        assert_eq!(atom.config().max_shell, 2);
        assert_eq!(atom.electron_configuration(), "1s2 2s2 2p6");
    }

    #[test]
    fn configure_with_keeps_atom_on_failure() {
        let mut atom = Atom::new(11, 12, 11).unwrap();
        let before = atom.configuration();
        let narrow = EngineConfig {
            max_shell: 2,
            ..Default::default()
        };

        let err = atom.configure_with(&narrow).unwrap_err();
        assert!(matches!(err, Error::UnassignedElectrons { unassigned: 1, .. }));
        assert_eq!(atom.config().max_shell, 6);
        assert_eq!(atom.configuration(), before);

        let invalid = EngineConfig {
            max_shell: 0,
            ..Default::default()
        };
        assert!(matches!(
            atom.configure_with(&invalid),
            Err(Error::InvalidConfig(_))
        ));
        assert_eq!(atom.configuration(), before);
    }
}
