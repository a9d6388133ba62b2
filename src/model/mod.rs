//! Data model for particles, atoms and the registry that holds them.
//!
//! - [`types`] – Quantum numbers, spin, and the element table used for display and parsing.
//! - [`particle`] – Quarks, composite nucleons, and shared electron handles.
//! - [`orbital`] – Capacity-two orbitals enforcing spin exclusion.
//! - [`atom`] – Atoms owning a nucleus, an ordered electron list, and active orbitals.
//! - [`bond`] – Covalent and ionic bond records keyed by identity index.
//! - [`world`] – Arena registry assigning identity indices and bonding atoms by slot.
//! - [`molecule`] – Atom groups that report the bonds of their members.
//!
//! Algorithms that change electron occupancy are implemented in
//! [`crate::engine`] as inherent methods on [`Atom`](atom::Atom).

pub mod atom;
pub mod bond;
pub mod molecule;
pub mod orbital;
pub mod particle;
pub mod types;
pub mod world;
