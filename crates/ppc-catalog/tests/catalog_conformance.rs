//! Whole-catalog conformance: every model must construct cleanly and
//! honor the descriptor consistency rules.

use ppc_catalog::models::MODELS;
use ppc_catalog::{
    bring_up, msr_bit, verify_msr_flags, CatalogDefect, InitPhase, ModelFlags, ReadHook,
    SprRegistry, TierAccess, TlbKind, TlbStore, WriteHook,
};
use proptest as _;
use rstest as _;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

#[test]
fn every_model_constructs_without_a_defect() {
    for model in MODELS {
        let state = bring_up(model).unwrap_or_else(|e| panic!("{}: {e}", model.name));
        assert_eq!(state.phase, InitPhase::Ready, "{}", model.name);
        assert!(
            state.registry.registered_count() >= 9,
            "{} registered too few SPRs",
            model.name
        );
    }
}

#[test]
fn every_model_copies_its_family_scalars() {
    for model in MODELS {
        let state = bring_up(model).unwrap();
        assert_eq!(state.msr_mask, model.family.msr_mask, "{}", model.name);
        assert_eq!(state.flags, model.family.flags, "{}", model.name);
        assert_eq!(state.mmu, model.family.mmu, "{}", model.name);
        assert_eq!(state.excp, model.family.excp, "{}", model.name);
        assert_eq!(state.bus, model.family.bus, "{}", model.name);
    }
}

#[test]
fn every_model_passes_the_msr_consistency_checks() {
    for model in MODELS {
        verify_msr_flags(model.family.msr_mask, model.family.flags)
            .unwrap_or_else(|e| panic!("{}: {e}", model.name));
    }
}

#[test]
fn tlb_allocation_doubles_for_split_layouts() {
    for model in MODELS {
        let state = bring_up(model).unwrap();
        let expected = if state.tlb.entries == 0 {
            0
        } else if state.tlb.split {
            state.tlb.entries * 2
        } else {
            state.tlb.entries
        };
        assert_eq!(state.tlb_store.kind(), state.tlb.kind, "{}", model.name);
        assert_eq!(state.tlb_store.len(), expected as usize, "{}", model.name);
        match &state.tlb_store {
            TlbStore::None => assert_eq!(state.tlb.kind, TlbKind::None, "{}", model.name),
            TlbStore::Shadow6xx(e) => assert_eq!(e.len(), expected as usize, "{}", model.name),
            TlbStore::Embedded(e) => assert_eq!(e.len(), expected as usize, "{}", model.name),
            TlbStore::Mas(e) => assert_eq!(e.len(), expected as usize, "{}", model.name),
        }
        if state.tlb.ways > 1 {
            assert_eq!(
                state.tlb.entries % state.tlb.ways,
                0,
                "{} entries not divisible by ways",
                model.name
            );
            assert_eq!(
                state.tlb.entries_per_way(),
                state.tlb.entries / state.tlb.ways,
                "{}",
                model.name
            );
        }
    }
}

#[test]
fn double_registration_of_the_link_register_names_the_slot() {
    let mut registry = SprRegistry::new();
    let tier = TierAccess::rw(ReadHook::Generic, WriteHook::Generic);
    registry.register(8, "LR", tier, tier, 0).unwrap();
    let err = registry.register(8, "LR", tier, tier, 0).unwrap_err();
    assert_eq!(err, CatalogDefect::SprRegisteredTwice { number: 8 });
    assert!(err.to_string().contains("8 (008)"));
}

#[test]
fn msr_bit_25_requires_exactly_one_claiming_flag() {
    let mask = msr_bit(25);
    let one = ModelFlags(ModelFlags::VRE.0 | ModelFlags::BUS_CLK.0);
    assert!(verify_msr_flags(mask, one).is_ok());

    let neither = ModelFlags::BUS_CLK;
    assert!(matches!(
        verify_msr_flags(mask, neither),
        Err(CatalogDefect::MsrFlagGroupUnsatisfied { bit: 25, .. })
    ));

    let both = ModelFlags(ModelFlags::VRE.0 | ModelFlags::SPE.0 | ModelFlags::BUS_CLK.0);
    assert!(verify_msr_flags(mask, both).is_err());
}

#[test]
fn missing_clock_source_is_fatal() {
    assert!(matches!(
        verify_msr_flags(0, ModelFlags::NONE),
        Err(CatalogDefect::MissingClockSource)
    ));
    assert!(matches!(
        verify_msr_flags(
            0,
            ModelFlags(ModelFlags::RTC_CLK.0 | ModelFlags::BUS_CLK.0)
        ),
        Err(CatalogDefect::MissingClockSource)
    ));
}
