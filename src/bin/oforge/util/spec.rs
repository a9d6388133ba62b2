use std::fmt;
use std::str::FromStr;

use orbital_forge::Element;

/// Command-line description of an atom: `Na`, `11`, `Na:10` or `11:10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtomSpec {
    pub protons: usize,
    /// Electron count after the colon, if one was given.
    pub electrons: Option<usize>,
}

impl AtomSpec {
    pub fn element(&self) -> Option<Element> {
        Element::from_atomic_number(self.protons)
    }

    pub fn electron_count(&self) -> usize {
        self.electrons.unwrap_or(self.protons)
    }

    /// Neutron count of the most common isotope; equal to `Z` past krypton.
    pub fn default_neutrons(&self) -> usize {
        self.element()
            .map(|e| e.common_neutrons())
            .unwrap_or(self.protons)
    }
}

impl fmt::Display for AtomSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.element() {
            Some(element) => write!(f, "{element}")?,
            None => write!(f, "Z={}", self.protons)?,
        }
        if let Some(electrons) = self.electrons {
            write!(f, ":{electrons}")?;
        }
        Ok(())
    }
}

impl FromStr for AtomSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (head, tail) = match s.split_once(':') {
            Some((head, tail)) => (head.trim(), Some(tail.trim())),
            None => (s.trim(), None),
        };

        let protons = match head.parse::<usize>() {
            Ok(z) => z,
            Err(_) => head
                .parse::<Element>()
                .map(|e| e.atomic_number() as usize)
                .map_err(|e| e.to_string())?,
        };
        if protons == 0 {
            return Err("atomic number must be at least 1".to_string());
        }

        let electrons = tail
            .map(|t| {
                t.parse::<usize>()
                    .map_err(|_| format!("invalid electron count '{t}'"))
            })
            .transpose()?;

        Ok(Self { protons, electrons })
    }
}
