/// Covalent bond as seen from one participant.
///
/// All fields are registry identity indices, never live references; they
/// are `-1` for entities that were not registered when the bond formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CovalentBond {
    pub partner: i64,
    pub own_electron: i64,
    pub partner_electron: i64,
}

impl CovalentBond {
    pub fn new(partner: i64, own_electron: i64, partner_electron: i64) -> Self {
        Self {
            partner,
            own_electron,
            partner_electron,
        }
    }
}

/// Ionic bond as seen from one participant. `electron` is the transferred one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IonicBond {
    pub partner: i64,
    pub electron: i64,
}

impl IonicBond {
    pub fn new(partner: i64, electron: i64) -> Self {
        Self { partner, electron }
    }
}
