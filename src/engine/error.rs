//! Error types for the configuration engine and the registry.
//!
//! Bonding never produces an [`Error`]: a bond that cannot form is an
//! expected outcome reported as `false`. Errors here are reserved for
//! configuration passes that cannot place every electron, malformed engine
//! settings, and lookups of atoms that do not exist.

use thiserror::Error;

use crate::model::types::InvalidQuantumNumbers;

#[derive(Debug, Error)]
pub enum Error {
    /// A configuration pass could not place every electron.
    ///
    /// Either the electron count exceeds the capacity of the fill order or
    /// the spin sequence left the traversal without free orbitals.
    #[error(
        "{unassigned} of {total} electrons could not be assigned to an orbital (fill order capacity: {capacity})"
    )]
    UnassignedElectrons {
        /// Electrons left without an orbital.
        unassigned: usize,
        /// Electrons owned by the atom.
        total: usize,
        /// Total capacity of the fill order.
        capacity: usize,
    },

    #[error(transparent)]
    InvalidQuantumNumbers(#[from] InvalidQuantumNumbers),

    /// Engine settings are out of range.
    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// Failed to parse an engine configuration TOML document.
    #[error("failed to parse engine configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// No atom is stored at the given arena slot.
    #[error("no atom at registry slot {slot}")]
    UnknownAtom { slot: usize },

    /// A two-atom operation was asked to bond an atom with itself.
    #[error("atom at registry slot {slot} cannot bond with itself")]
    SameAtom { slot: usize },
}

impl Error {
    /// Creates an [`UnassignedElectrons`](Error::UnassignedElectrons) error.
    pub fn unassigned(unassigned: usize, total: usize, capacity: usize) -> Self {
        Self::UnassignedElectrons {
            unassigned,
            total,
            capacity,
        }
    }

    /// Creates an [`InvalidConfig`](Error::InvalidConfig) error.
    pub fn invalid_config(detail: impl Into<String>) -> Self {
        Self::InvalidConfig(detail.into())
    }
}
