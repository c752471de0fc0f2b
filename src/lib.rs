pub mod atomic_data;
pub mod binding;
pub mod nuclide;
pub mod periodic_table;

pub use atomic_data::{AtomicNumber, ElementData};
pub use binding::{
    atomic_mass, binding_energy, binding_energy_mass, binding_energy_per_nucleon,
    most_stable_isobar, BindingCoefficients,
};
pub use nuclide::{InvalidNuclideError, Nuclide};
pub use periodic_table::PeriodicTable;
