//! Nuclear binding energy and mass estimates from the semi-empirical mass
//! formula (liquid drop model).
//!
//! Energies are in MeV, masses in unified atomic mass units (u, daltons).

use crate::nuclide::Nuclide;
use anyhow::{anyhow, Result};
use log::debug;

/// MeV per u.
pub const ATOMIC_MASS_ENERGY_EQUIVALENCE: f64 = 931.49410242;
pub const PROTON_MASS: f64 = 1.0072765;
pub const NEUTRON_MASS: f64 = 1.0086649;
pub const ELECTRON_MASS: f64 = 0.00054858;

/// Measured atomic masses of protium, deuterium and tritium, indexed by A - 1.
/// The liquid drop model is meaningless for these, so they are special cased.
pub const HYDROGEN_ISOTOPE_MASSES: [f64; 3] = [1.00782503223, 2.01410177812, 3.01604927790];

/// Coefficients of the semi-empirical mass formula, in MeV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BindingCoefficients {
    pub volume: f64,
    pub surface: f64,
    pub coulomb: f64,
    pub asymmetry: f64,
    pub pairing: f64,
}

impl Default for BindingCoefficients {
    fn default() -> Self {
        BindingCoefficients {
            volume: 15.835,
            surface: 18.33,
            coulomb: 0.714,
            asymmetry: 23.20,
            pairing: 11.20,
        }
    }
}

impl BindingCoefficients {
    /// Binding energy of `nuclide` in MeV.
    ///
    /// The larger this is, the more stable the nucleus. It also accounts for
    /// the mass missing when comparing a nucleus to its separated nucleons.
    pub fn binding_energy(&self, nuclide: &Nuclide) -> Result<f64> {
        let z = nuclide.protons();
        let a = nuclide.mass_number();
        if a == 0 {
            return Err(anyhow!("binding energy not defined for a nuclide without nucleons"));
        }

        if z == 1 && a <= 3 {
            debug!(
                "event=binding_energy module=binding path=hydrogen_measured mass_number={}",
                a
            );
            let separated = nuclide.neutrons() as f64 * NEUTRON_MASS + PROTON_MASS + ELECTRON_MASS;
            let measured = HYDROGEN_ISOTOPE_MASSES[a as usize - 1];
            return Ok((separated - measured) * ATOMIC_MASS_ENERGY_EQUIVALENCE);
        }

        let z_even = z % 2 == 0;
        let n_even = nuclide.neutrons() % 2 == 0;
        let parity = match (z_even, n_even) {
            (false, false) => 1.0,
            (true, true) => -1.0,
            _ => 0.0,
        };

        let z_f = z as f64;
        let a_f = a as f64;
        Ok(self.volume * a_f
            - self.surface * a_f.powf(2.0 / 3.0)
            - self.coulomb * z_f.powi(2) / a_f.cbrt()
            - self.asymmetry * (a_f - 2.0 * z_f).powi(2) / a_f
            - self.pairing * parity / a_f.sqrt())
    }

    pub fn binding_energy_per_nucleon(&self, nuclide: &Nuclide) -> Result<f64> {
        Ok(self.binding_energy(nuclide)? / nuclide.mass_number() as f64)
    }

    /// Mass equivalent of the binding energy, in u.
    pub fn binding_energy_mass(&self, nuclide: &Nuclide) -> Result<f64> {
        Ok(self.binding_energy(nuclide)? / ATOMIC_MASS_ENERGY_EQUIVALENCE)
    }

    /// Estimated atomic mass (nucleus plus electrons) in u.
    pub fn atomic_mass(&self, nuclide: &Nuclide) -> Result<f64> {
        // binding releases energy, which the nucleus pays for in mass
        Ok(nuclide.protons() as f64 * (PROTON_MASS + ELECTRON_MASS)
            + nuclide.neutrons() as f64 * NEUTRON_MASS
            - self.binding_energy_mass(nuclide)?)
    }

    /// The nuclide with `mass_number` nucleons whose proton count maximises
    /// the binding energy, i.e. the bottom of the mass parabola for that isobar.
    pub fn most_stable_isobar(&self, mass_number: u32) -> Result<Nuclide> {
        if mass_number == 0 {
            return Err(anyhow!("no stable isobar for mass number 0"));
        }
        let a_f = mass_number as f64;
        let mass_difference_energy = (NEUTRON_MASS - PROTON_MASS) * ATOMIC_MASS_ENERGY_EQUIVALENCE;
        let z_f = a_f / 2.0 * (1.0 + mass_difference_energy / 4.0 / self.asymmetry)
            / (1.0 + self.coulomb * a_f.powf(2.0 / 3.0) / 4.0 / self.asymmetry);
        if !z_f.is_finite() || z_f < 0.0 {
            return Err(anyhow!(
                "no stable isobar for mass number {} with coefficients {:?}",
                mass_number,
                self
            ));
        }
        let protons = (z_f.round() as u32).min(mass_number);
        Ok(Nuclide::new(protons, mass_number)?)
    }
}

pub fn binding_energy(nuclide: &Nuclide) -> Result<f64> {
    BindingCoefficients::default().binding_energy(nuclide)
}

pub fn binding_energy_per_nucleon(nuclide: &Nuclide) -> Result<f64> {
    BindingCoefficients::default().binding_energy_per_nucleon(nuclide)
}

pub fn binding_energy_mass(nuclide: &Nuclide) -> Result<f64> {
    BindingCoefficients::default().binding_energy_mass(nuclide)
}

pub fn atomic_mass(nuclide: &Nuclide) -> Result<f64> {
    BindingCoefficients::default().atomic_mass(nuclide)
}

pub fn most_stable_isobar(mass_number: u32) -> Result<Nuclide> {
    BindingCoefficients::default().most_stable_isobar(mass_number)
}
