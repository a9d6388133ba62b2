//! Covalent and ionic bond formation between two atoms.
//!
//! Both protocols are all-or-nothing. A bond that cannot form returns
//! `false` and leaves both atoms exactly as they were: electron lists,
//! orbital occupancy, spins, and bond lists.
//!
//! # Covalent bonds
//!
//! Each atom contributes its first spin-up valence electron into the
//! other's valence shell. A shared electron must pair with an opposite spin
//! in the partner's orbital, so the two contributed spins are flipped
//! speculatively. A flipped electron that now matches its orbital partner
//! is moved to another valence orbital of the same atom first. Two flip
//! directions are tried in turn; every failed attempt replays snapshots of
//! both atoms and the two spins.
//!
//! # Ionic bonds
//!
//! The first spin-up valence electron of `self` moves to `other`'s
//! electron list with its spin set down. Orbital occupancy is left as is:
//! callers that need it refreshed call [`Atom::configure`] on both atoms.

use std::rc::Rc;

use tracing::debug;

use super::snapshot::{AtomSnapshot, SpinSnapshot};
use crate::model::atom::Atom;
use crate::model::bond::{CovalentBond, IonicBond};
use crate::model::particle::ElectronRef;
use crate::model::types::Spin;

/// Spins tried for the own electron, in order. The partner's electron
/// always takes the opposite spin.
const FLIP_ATTEMPTS: [Spin; 2] = [Spin::Down, Spin::Up];

impl Atom {
    /// First spin-up electron of the valence shell, paired or not.
    pub fn unpaired_valence_electron(&self) -> Option<ElectronRef> {
        self.valence_electrons()
            .into_iter()
            .find(|e| e.spin() == Spin::Up)
    }

    /// Moves each of `electrons` that shares its orbital with an equal spin
    /// into another valence orbital. Returns `false` if one has nowhere to go.
    fn reseat_clashing(&mut self, electrons: [&ElectronRef; 2]) -> bool {
        for electron in electrons {
            let Some(slot) = self.orbitals.iter().position(|o| o.clashes_with(electron)) else {
                continue;
            };
            self.orbitals[slot].remove(electron);
            if !self.seat_in_valence_shell(electron) {
                return false;
            }
            debug!(
                atom = self.index,
                electron = electron.index(),
                orbital = %electron.quantum(),
                "reseated flipped electron"
            );
        }
        true
    }

    /// Shares one electron each way with `other`.
    ///
    /// Requires both atoms to be unstable and to hold a spin-up valence
    /// electron. On success both atoms record the bond, mirrored.
    pub fn covalent_bond(&mut self, other: &mut Atom) -> bool {
        if self.is_stable() || other.is_stable() {
            debug!(
                atom = self.index,
                partner = other.index,
                "covalent bond refused: stable atom"
            );
            return false;
        }
        let (Some(own), Some(theirs)) = (
            self.unpaired_valence_electron(),
            other.unpaired_valence_electron(),
        ) else {
            debug!(
                atom = self.index,
                partner = other.index,
                "covalent bond refused: no spin-up valence electron"
            );
            return false;
        };

        let spins = SpinSnapshot::capture([&own, &theirs]);
        let own_state = AtomSnapshot::capture(self);
        let other_state = AtomSnapshot::capture(other);

        for (attempt, own_spin) in FLIP_ATTEMPTS.into_iter().enumerate() {
            own.set_spin(own_spin);
            theirs.set_spin(own_spin.flipped());

            if self.reseat_clashing([&own, &theirs])
                && other.reseat_clashing([&own, &theirs])
                && self.add_to_valence_shell(&theirs)
                && other.add_to_valence_shell(&own)
            {
                self.covalent_bonds
                    .push(CovalentBond::new(other.index, own.index(), theirs.index()));
                other
                    .covalent_bonds
                    .push(CovalentBond::new(self.index, theirs.index(), own.index()));
                debug!(
                    atom = self.index,
                    partner = other.index,
                    attempt,
                    "covalent bond formed"
                );
                return true;
            }

            debug!(
                atom = self.index,
                partner = other.index,
                attempt,
                "covalent attempt rolled back"
            );
            own_state.restore(self);
            other_state.restore(other);
            spins.restore();
        }

        false
    }

    /// Transfers one electron from `self` to `other`.
    ///
    /// Requires both atoms to be unstable and to hold a spin-up valence
    /// electron. Only the electron lists change; orbital occupancy
    /// is refreshed by a later [`configure`](Atom::configure).
    pub fn ionic_bond(&mut self, other: &mut Atom) -> bool {
        if self.is_stable() || other.is_stable() {
            debug!(
                atom = self.index,
                partner = other.index,
                "ionic bond refused: stable atom"
            );
            return false;
        }
        let (Some(donated), Some(_)) = (
            self.unpaired_valence_electron(),
            other.unpaired_valence_electron(),
        ) else {
            debug!(
                atom = self.index,
                partner = other.index,
                "ionic bond refused: no spin-up valence electron"
            );
            return false;
        };
        let Some(position) = self.electrons.iter().position(|e| Rc::ptr_eq(e, &donated)) else {
            return false;
        };

        self.electrons.remove(position);
        donated.set_spin(Spin::Down);
        other.electrons.push(Rc::clone(&donated));

        self.ionic_bonds.push(IonicBond::new(other.index, donated.index()));
        other.ionic_bonds.push(IonicBond::new(self.index, donated.index()));
        debug!(
            atom = self.index,
            partner = other.index,
            electron = donated.index(),
            "ionic bond formed"
        );
        true
    }
}
