use crate::model::orbital::ORBITAL_CAPACITY;
use crate::model::types::QuantumNumbers;

/// The fixed `(n, l)` traversal used to distribute electrons.
///
/// Shells run from 1 to `max_shell`, and within a shell `l` runs from 0 to
/// `n - 1`. The walk is not the Madelung ordering: `3d` is visited before
/// `4s`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillOrder {
    max_shell: u32,
}

impl FillOrder {
    pub fn new(max_shell: u32) -> Self {
        Self { max_shell }
    }

    #[inline]
    pub fn max_shell(&self) -> u32 {
        self.max_shell
    }

    /// `(n, l)` pairs in traversal order.
    pub fn subshells(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        (1..=self.max_shell).flat_map(|n| (0..n).map(move |l| (n, l)))
    }

    /// Every orbital of the traversal, `m` running from `-l` to `+l`.
    pub fn orbitals(&self) -> impl Iterator<Item = QuantumNumbers> + use<> {
        self.subshells().flat_map(|(n, l)| {
            let l_signed = l as i32;
            (-l_signed..=l_signed).map(move |m| QuantumNumbers::new_unchecked(n, l, m))
        })
    }

    /// Total electrons the traversal can hold: the sum of `2(2l + 1)`.
    pub fn capacity(&self) -> usize {
        self.subshells()
            .map(|(_, l)| ORBITAL_CAPACITY * (2 * l as usize + 1))
            .sum()
    }
}
