//! Selection-token resolution and enumeration ordering.

use ppc_catalog::models::{ALIASES, MODELS};
use ppc_catalog::{by_pvr, by_pvr_masked, enumerate, resolve};
use proptest::prelude::*;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

#[rstest]
#[case("603e", "603e_v4.1")]
#[case("604e", "604e_v2.4")]
#[case("750", "750_v2.2")]
#[case("g3", "750_v2.2")]
#[case("g4", "7400_v2.9")]
#[case("e500", "e500v2_v22")]
#[case("970", "970_v2.2")]
#[case("ppc64", "970fx_v3.1")]
#[case("power9", "power9_v2.0")]
fn alias_reaches_its_canonical_model(#[case] alias: &str, #[case] canonical: &str) {
    assert_eq!(resolve(alias).unwrap().name, canonical);
}

#[test]
fn every_alias_round_trips() {
    for &(alias, canonical) in ALIASES {
        let resolved = resolve(alias).unwrap_or_else(|| panic!("alias {alias} unresolved"));
        assert_eq!(resolved.name, canonical);
    }
}

#[test]
fn every_model_resolves_by_its_own_name() {
    for model in MODELS {
        assert!(std::ptr::eq(resolve(model.name).unwrap(), model));
    }
}

#[rstest]
#[case("0x00080200", "740_v2.0")]
#[case("00080200", "740_v2.0")]
#[case("0X00040103", "604")]
#[case("80230020", "e500mc")]
fn pvr_tokens_resolve_by_exact_equality(#[case] token: &str, #[case] expected: &str) {
    assert_eq!(resolve(token).unwrap().name, expected);
}

#[test]
fn a_well_formed_pvr_token_never_falls_back_to_masked_matching() {
    // Inside the POWER9 masked range but not a cataloged PVR.
    assert!(by_pvr_masked(0x004E_0000).is_some());
    assert!(by_pvr(0x004E_0000).is_none());
    assert!(resolve("0x004E0000").is_none());
}

#[test]
fn resolution_is_case_insensitive_for_names_only() {
    assert_eq!(resolve("G4").unwrap().name, "7400_v2.9");
    assert_eq!(resolve("E6500").unwrap().name, "e6500");
}

#[test]
fn enumeration_sorts_by_pvr_with_the_host_appended() {
    let all = enumerate();
    assert_eq!(all.len(), MODELS.len() + 1);
    assert_eq!(all.last().unwrap().name, "host");
    for pair in all[..all.len() - 1].windows(2) {
        assert!(pair[0].pvr <= pair[1].pvr);
    }
}

proptest! {
    // An exact-PVR hit must return a model carrying that PVR, and a
    // masked hit must accept the probe under its own match predicate.
    #[test]
    fn pvr_lookups_agree_with_the_returned_model(pvr in any::<u32>()) {
        if let Some(model) = by_pvr(pvr) {
            prop_assert_eq!(model.pvr, pvr);
        }
        if let Some(model) = by_pvr_masked(pvr) {
            prop_assert!(model.pvr_matches(pvr));
        }
    }

    // Exact equality implies masked acceptance, so an exact hit means
    // the masked walk also finds a model.
    #[test]
    fn masked_matching_subsumes_exact_matching(pvr in any::<u32>()) {
        if by_pvr(pvr).is_some() {
            prop_assert!(by_pvr_masked(pvr).is_some());
        }
    }
}
