//! Spectroscopic data for the CO isotopologues

use crate::error::{CoLinesError, Result};
use serde::Serialize;
use std::fmt;

/// Spectroscopic record of one J=1→0 line
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IsotopologueSpec {
    /// Display name ("12CO", "13CO")
    pub name: &'static str,
    /// Rest frequency ν₀ (Hz)
    pub rest_frequency: f64,
    /// Einstein A coefficient A₁₀ (s⁻¹)
    pub einstein_a: f64,
    /// Energy of the J=1 level in K (T₁)
    pub t_upper: f64,
    /// Rotational constant in K (B₀)
    pub rotational_constant: f64,
}

impl IsotopologueSpec {
    /// ¹²C¹⁶O J=1→0
    pub const CO12: IsotopologueSpec = IsotopologueSpec {
        name: "12CO",
        rest_frequency: 115.271e9,
        einstein_a: 6.78e-8,
        t_upper: 5.56,
        rotational_constant: 2.78,
    };

    /// ¹³C¹⁶O J=1→0
    pub const CO13: IsotopologueSpec = IsotopologueSpec {
        name: "13CO",
        rest_frequency: 110.201e9,
        einstein_a: 6.73e-8,
        t_upper: 5.3,
        rotational_constant: 2.65,
    };
}

/// The two modelled isotopologues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Isotopologue {
    /// Main isotopologue, column density set directly
    Co12,
    /// Rare isotopologue, column density N / ratio
    Co13,
}

impl Isotopologue {
    /// Both isotopologues in display order
    pub const ALL: [Isotopologue; 2] = [Isotopologue::Co12, Isotopologue::Co13];

    /// Spectroscopic data for this isotopologue
    pub fn spec(&self) -> &'static IsotopologueSpec {
        match self {
            Isotopologue::Co12 => &IsotopologueSpec::CO12,
            Isotopologue::Co13 => &IsotopologueSpec::CO13,
        }
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    /// Look up an isotopologue by display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Isotopologue> {
        Self::ALL
            .into_iter()
            .find(|iso| iso.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Resolve a species selection, keeping display order
    ///
    /// An empty selection means every isotopologue.
    pub fn select<S: AsRef<str>>(names: &[S]) -> Result<Vec<Isotopologue>> {
        if names.is_empty() {
            return Ok(Self::ALL.to_vec());
        }

        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            let iso = Self::from_name(name.as_ref()).ok_or_else(|| {
                CoLinesError::UnknownIsotopologue {
                    name: name.as_ref().to_string(),
                }
            })?;
            if !selected.contains(&iso) {
                selected.push(iso);
            }
        }
        selected.sort_by_key(|iso| Self::ALL.iter().position(|other| other == iso));
        Ok(selected)
    }
}

impl fmt::Display for Isotopologue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
