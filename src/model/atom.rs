use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::bond::{CovalentBond, IonicBond};
use super::orbital::Orbital;
use super::particle::{CompositeParticle, Electron, ElectronRef, UNREGISTERED};
use super::types::{Element, QuantumNumbers, Spin, subshell_letter};
use crate::engine::{EngineConfig, Error};

/// Occupancy of one active orbital, detached from the live electrons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbitalState {
    pub quantum: QuantumNumbers,
    pub spins: Vec<Spin>,
    pub electrons: Vec<i64>,
}

/// Ordered occupancy of every active orbital of an atom.
pub type Configuration = Vec<OrbitalState>;

#[derive(Debug)]
pub struct Atom {
    pub(crate) protons: Vec<CompositeParticle>,
    pub(crate) neutrons: Vec<CompositeParticle>,
    pub(crate) electrons: Vec<ElectronRef>,
    pub(crate) orbital_index: HashMap<QuantumNumbers, usize>,
    pub(crate) orbitals: Vec<Orbital>,
    pub(crate) ionic_bonds: Vec<IonicBond>,
    pub(crate) covalent_bonds: Vec<CovalentBond>,
    pub(crate) unassigned: Vec<ElectronRef>,
    pub(crate) config: EngineConfig,
    pub index: i64,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
}

impl Atom {
    /// Builds an atom with the default engine configuration.
    ///
    /// Electrons are seeded along the fill order with alternating spin and
    /// immediately distributed into orbitals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnassignedElectrons`] if `n_electrons` exceeds the
    /// capacity of the fill order.
    pub fn new(n_protons: usize, n_neutrons: usize, n_electrons: usize) -> Result<Self, Error> {
        Self::with_config(n_protons, n_neutrons, n_electrons, EngineConfig::default())
    }

    pub fn with_config(
        n_protons: usize,
        n_neutrons: usize,
        n_electrons: usize,
        config: EngineConfig,
    ) -> Result<Self, Error> {
        config.validate()?;

        let order = config.fill_order();
        let capacity = order.capacity();
        if n_electrons > capacity {
            return Err(Error::unassigned(n_electrons - capacity, n_electrons, capacity));
        }

        let electrons = order
            .orbitals()
            .flat_map(|q| [q, q])
            .take(n_electrons)
            .enumerate()
            .map(|(i, q)| Rc::new(Electron::new(q, Spin::alternating(i))))
            .collect();

        let mut atom = Self {
            protons: (0..n_protons).map(|_| CompositeParticle::proton()).collect(),
            neutrons: (0..n_neutrons).map(|_| CompositeParticle::neutron()).collect(),
            electrons,
            orbital_index: HashMap::new(),
            orbitals: Vec::new(),
            ionic_bonds: Vec::new(),
            covalent_bonds: Vec::new(),
            unassigned: Vec::new(),
            config,
            index: UNREGISTERED,
            position: [f64::NAN; 3],
            velocity: [f64::NAN; 3],
        };
        atom.configure()?;
        Ok(atom)
    }

    /// Neutral atom of `element` with its most common isotope.
    pub fn neutral(element: Element) -> Result<Self, Error> {
        let z = element.atomic_number() as usize;
        Self::new(z, element.common_neutrons(), z)
    }

    pub fn with_motion(mut self, position: [f64; 3], velocity: [f64; 3]) -> Self {
        self.position = position;
        self.velocity = velocity;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn protons(&self) -> &[CompositeParticle] {
        &self.protons
    }

    pub fn neutrons(&self) -> &[CompositeParticle] {
        &self.neutrons
    }

    pub fn electrons(&self) -> &[ElectronRef] {
        &self.electrons
    }

    #[inline]
    pub fn electron_count(&self) -> usize {
        self.electrons.len()
    }

    pub fn orbitals(&self) -> &[Orbital] {
        &self.orbitals
    }

    pub fn orbital(&self, quantum: QuantumNumbers) -> Option<&Orbital> {
        self.orbital_index
            .get(&quantum)
            .and_then(|&slot| self.orbitals.get(slot))
    }

    pub fn orbital_index(&self) -> &HashMap<QuantumNumbers, usize> {
        &self.orbital_index
    }

    pub fn covalent_bonds(&self) -> &[CovalentBond] {
        &self.covalent_bonds
    }

    pub fn ionic_bonds(&self) -> &[IonicBond] {
        &self.ionic_bonds
    }

    /// Electrons left over by the last configuration pass under
    /// [`UnassignedPolicy::Stash`](crate::UnassignedPolicy::Stash).
    pub fn unassigned(&self) -> &[ElectronRef] {
        &self.unassigned
    }

    #[inline]
    pub fn atomic_number(&self) -> usize {
        self.protons.len()
    }

    pub fn element(&self) -> Option<Element> {
        Element::from_atomic_number(self.atomic_number())
    }

    pub fn mass(&self) -> f64 {
        self.protons.iter().map(CompositeParticle::mass).sum::<f64>()
            + self.neutrons.iter().map(CompositeParticle::mass).sum::<f64>()
            + self.electrons.iter().map(|e| e.mass()).sum::<f64>()
    }

    pub fn charge(&self) -> f64 {
        self.protons.iter().map(CompositeParticle::charge).sum::<f64>()
            - self.electrons.iter().map(|e| e.charge()).sum::<f64>()
    }

    pub fn spin(&self) -> f64 {
        self.protons.iter().map(CompositeParticle::spin).sum::<f64>()
            + self.neutrons.iter().map(CompositeParticle::spin).sum::<f64>()
            + self.electrons.iter().map(|e| e.spin().value()).sum::<f64>()
    }

    /// Magnitude of `mass * velocity`; NaN while the velocity is unspecified.
    pub fn momentum(&self) -> f64 {
        let m = self.mass();
        self.velocity
            .iter()
            .map(|v| (m * v).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Outermost occupied shell, `None` when no orbital is active.
    pub fn valence_shell(&self) -> Option<u32> {
        self.orbitals.iter().map(Orbital::n).max()
    }

    pub fn valence_electrons(&self) -> Vec<ElectronRef> {
        let Some(shell) = self.valence_shell() else {
            return Vec::new();
        };
        self.orbitals
            .iter()
            .filter(|o| o.n() == shell)
            .flat_map(|o| o.electrons().iter().cloned())
            .collect()
    }

    pub fn valence_count(&self) -> usize {
        let Some(shell) = self.valence_shell() else {
            return 0;
        };
        self.orbitals
            .iter()
            .filter(|o| o.n() == shell)
            .map(Orbital::occupancy)
            .sum()
    }

    /// Valence count that closes the outer shell: 18 from argon onwards, else 8.
    pub fn max_valence(&self) -> usize {
        if self.atomic_number() >= 18 { 18 } else { 8 }
    }

    /// Simplified octet/duet rule: stable with 0, 2, or a full outer shell.
    pub fn is_stable(&self) -> bool {
        let v = self.valence_count();
        v == 0 || v == 2 || v == self.max_valence()
    }

    pub fn configuration(&self) -> Configuration {
        self.orbitals
            .iter()
            .map(|o| OrbitalState {
                quantum: o.quantum,
                spins: o.spins(),
                electrons: o.electrons().iter().map(|e| e.index()).collect(),
            })
            .collect()
    }

    /// Subshell notation such as `1s2 2s2 2p6 3s1`, ordered by `(n, l)`.
    pub fn electron_configuration(&self) -> String {
        let mut subshells: BTreeMap<(u32, u32), usize> = BTreeMap::new();
        for orbital in &self.orbitals {
            *subshells.entry((orbital.n(), orbital.l())).or_insert(0) += orbital.occupancy();
        }

        subshells
            .iter()
            .map(|((n, l), count)| format!("{}{}{}", n, subshell_letter(*l), count))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
