//! The electron-configuration engine.
//!
//! Everything that changes how electrons sit in an [`Atom`](crate::Atom) lives
//! here, as inherent methods on the atom grouped by concern:
//!
//! - [`fill`] – The deterministic `(n, l, m)` traversal electrons are poured along.
//! - `configure` – Full configuration passes and electron membership changes.
//! - `bonding` – Covalent and ionic bond protocols with rollback.
//! - [`config`] – Engine settings, with TOML loading and embedded defaults.
//! - `snapshot` – Capture and replay of atom state for all-or-nothing operations.
//! - [`error`] – The crate-wide error type.

mod bonding;
pub mod config;
mod configure;
pub mod error;
pub mod fill;
mod snapshot;

pub use config::{
    EngineConfig, MAX_SUPPORTED_SHELL, UnassignedPolicy, default_config, load_config,
};
pub use error::Error;
pub use fill::FillOrder;
