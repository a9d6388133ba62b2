//! A small, pure Rust engine for atomic electron configurations and bonding.
//! It distributes an atom's electrons into orbitals under quantum-number and
//! spin-exclusion rules, and forms covalent or ionic bonds between atoms with
//! all-or-nothing semantics.
//!
//! # Features
//!
//! - **Deterministic filling**: Electrons are poured along a fixed `(n, l, m)`
//!   traversal, so a configuration depends only on the ordered electron list
//! - **Spin exclusion**: Every orbital holds at most two electrons of opposite spin
//! - **Rollback-safe bonding**: Covalent and ionic bonds either form completely
//!   or leave both atoms untouched
//! - **Registry**: A [`World`] arena assigns identity indices and bonds atoms by slot
//! - **Configurable**: Shell limit and leftover policy via [`EngineConfig`],
//!   loadable from TOML
//!
//! # Quick Start
//!
//! ```
//! use orbital_forge::{Atom, Element, Error, World};
//!
//! // Sodium fills 1s 2s 2p and leaves one electron in 3s.
//! let sodium = Atom::neutral(Element::Na)?;
//! assert_eq!(sodium.electron_configuration(), "1s2 2s2 2p6 3s1");
//! assert_eq!(sodium.valence_count(), 1);
//! assert!(!sodium.is_stable());
//!
//! // Two hydrogen atoms share their lone electrons.
//! let mut world = World::new();
//! world.add(Atom::neutral(Element::H)?)?;
//! world.add(Atom::neutral(Element::H)?)?;
//! assert!(world.covalent_bond(0, 1)?);
//!
//! let h = &world.atoms()[0];
//! assert_eq!(h.electron_count(), 2);
//! assert!(h.is_stable());
//! assert_eq!(h.covalent_bonds()[0].partner, world.atoms()[1].index);
//!
//! // Stable atoms refuse further bonds; refusal is not an error.
//! assert!(!world.covalent_bond(0, 1)?);
//! # Ok::<(), Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`model`] – Particles, orbitals, atoms, bonds, molecules, and the registry
//! - [`engine`] – Fill order, configuration passes, bonding, settings, and errors
//!
//! # Data Types
//!
//! - [`Atom`] – Nucleus, ordered electron list, active orbitals, and bond records
//! - [`Orbital`] – Capacity-two slot addressed by [`QuantumNumbers`]
//! - [`Electron`] – Shared via [`ElectronRef`], with mutable spin and orbital tags
//! - [`CompositeParticle`] / [`Quark`] – Nucleons and their constituents
//! - [`CovalentBond`] / [`IonicBond`] – Bond records keyed by identity index
//! - [`World`] / [`Entity`] / [`Molecule`] – Registry, stored values, and atom groups
//!
//! # Logging
//!
//! The engine emits [`tracing`] events (orbital creation, configuration
//! passes, bond formation and rollback) and never installs a subscriber.

pub mod engine;
pub mod model;

pub use model::atom::{Atom, Configuration, OrbitalState};
pub use model::bond::{CovalentBond, IonicBond};
pub use model::molecule::Molecule;
pub use model::orbital::{ORBITAL_CAPACITY, Orbital};
pub use model::particle::{Color, CompositeParticle, Electron, ElectronRef, Flavor, Quark, electron};
pub use model::types::{Element, InvalidQuantumNumbers, ParseElementError, QuantumNumbers, Spin};
pub use model::world::{Entity, EntityKey, World};

pub use engine::{
    EngineConfig, Error, FillOrder, MAX_SUPPORTED_SHELL, UnassignedPolicy, default_config,
    load_config,
};
