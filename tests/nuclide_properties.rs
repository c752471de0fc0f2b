use nuclide::{binding_energy, most_stable_isobar, InvalidNuclideError, Nuclide};
use proptest::prelude::*;

fn valid_pair() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=u32::MAX).prop_flat_map(|z| (Just(z), z..=u32::MAX))
}

proptest! {
    #[test]
    fn accessors_project_components((z, a) in valid_pair()) {
        let n = Nuclide::new(z, a).unwrap();
        prop_assert_eq!(n.protons(), z);
        prop_assert_eq!(n.neutrons(), a - z);
        prop_assert_eq!(n.mass_number(), a);
    }

    #[test]
    fn construction_rejects_mass_number_below_protons(z in 1u32..=u32::MAX, deficit in 1u32..=u32::MAX) {
        let a = z.saturating_sub(deficit);
        prop_assume!(a < z);
        prop_assert_eq!(
            Nuclide::new(z, a),
            Err(InvalidNuclideError::MassNumberBelowProtons { protons: z, mass_number: a })
        );
    }

    #[test]
    fn equality_is_componentwise(z1 in 0u32..8, a1 in 8u32..16, z2 in 0u32..8, a2 in 8u32..16) {
        let first = Nuclide::new(z1, a1).unwrap();
        let second = Nuclide::new(z2, a2).unwrap();
        prop_assert_eq!(first == second, z1 == z2 && a1 == a2);
        prop_assert_eq!(first == second, second == first);
        prop_assert_eq!(first, first);
    }

    #[test]
    fn neutrons_round_trip_through_from_neutrons((z, a) in valid_pair()) {
        let n = Nuclide::new(z, a).unwrap();
        prop_assert_eq!(Nuclide::from_neutrons(n.protons(), n.neutrons()).unwrap(), n);
    }

    #[test]
    fn most_stable_isobar_keeps_mass_number(a in 1u32..300) {
        let isobar = most_stable_isobar(a).unwrap();
        prop_assert_eq!(isobar.mass_number(), a);
        prop_assert!(isobar.protons() <= a);
    }

    #[test]
    fn most_stable_isobar_is_bound(a in 4u32..300) {
        let isobar = most_stable_isobar(a).unwrap();
        prop_assert!(binding_energy(&isobar).unwrap() > 0.0);
    }
}
