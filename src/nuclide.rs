use crate::{
    atomic_data::{AtomicNumber, ElementData},
    periodic_table::PeriodicTable,
};
use anyhow::Result;
use log::debug;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum InvalidNuclideError {
    #[error("mass number {mass_number} is less than proton count {protons}")]
    MassNumberBelowProtons { protons: u32, mass_number: u32 },
    #[error("mass number overflows for {protons} protons and {neutrons} neutrons")]
    MassNumberOverflow { protons: u32, neutrons: u32 },
}

/// A definite nuclear species, identified by its proton count (Z) and mass
/// number (A).
///
/// Construction guarantees `mass_number >= protons`, so the neutron count is
/// always representable. Ordered by proton count first, then mass number.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone)]
pub struct Nuclide {
    protons: u32,
    mass_number: u32,
}

impl Nuclide {
    pub fn new(protons: u32, mass_number: u32) -> Result<Nuclide, InvalidNuclideError> {
        if mass_number < protons {
            debug!(
                "event=nuclide_rejected module=nuclide protons={} mass_number={}",
                protons, mass_number
            );
            return Err(InvalidNuclideError::MassNumberBelowProtons {
                protons,
                mass_number,
            });
        }
        Ok(Nuclide {
            protons,
            mass_number,
        })
    }

    pub fn from_neutrons(protons: u32, neutrons: u32) -> Result<Nuclide, InvalidNuclideError> {
        let mass_number = protons
            .checked_add(neutrons)
            .ok_or(InvalidNuclideError::MassNumberOverflow { protons, neutrons })?;
        Nuclide::new(protons, mass_number)
    }

    /// Proton count (Z), the atomic number.
    pub fn protons(&self) -> u32 {
        self.protons
    }

    pub fn neutrons(&self) -> u32 {
        // can't underflow, checked in `new`
        self.mass_number - self.protons
    }

    /// Total nucleon count (A).
    pub fn mass_number(&self) -> u32 {
        self.mass_number
    }

    pub fn element(&self) -> Result<&'static ElementData> {
        PeriodicTable::get().element(AtomicNumber(self.protons))
    }

    pub fn is_isotope_of(&self, other: &Nuclide) -> bool {
        self.protons == other.protons
    }

    pub fn is_isobar_of(&self, other: &Nuclide) -> bool {
        self.mass_number == other.mass_number
    }

    pub fn is_isotone_of(&self, other: &Nuclide) -> bool {
        self.neutrons() == other.neutrons()
    }
}

impl fmt::Display for Nuclide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.element() {
            Ok(element) if !element.is_dummy() => {
                write!(f, "{}-{}", element.symbol, self.mass_number)
            }
            _ => write!(f, "Z{}-{}", self.protons, self.mass_number),
        }
    }
}
