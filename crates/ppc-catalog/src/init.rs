//! The bring-up pipeline.
//!
//! A CPU instance moves through [`InitPhase`] in a fixed order. Every
//! stage either completes and advances the phase or fails with a
//! [`CatalogDefect`], in which case the instance is abandoned. The
//! stages are exposed individually so tests can stop the pipeline
//! midway and inspect the state.

use crate::defect::CatalogDefect;
use crate::groups;
use crate::model::{Model, SVR_NONE};
use crate::msr::{verify_msr_flags, ModelFlags};
use crate::registry::SprRegistry;
use crate::state::{CpuState, InitPhase};
use crate::tlb::{TlbLayout, TlbStore};
use crate::vectors::VectorTable;

/// Runs the whole pipeline for one model.
pub fn bring_up(model: &'static Model) -> Result<CpuState, CatalogDefect> {
    let mut state = CpuState::new(model);
    reset_registry(&mut state);
    register_generic(&mut state)?;
    build_model(&mut state)?;
    check_consistency(&mut state)?;
    allocate_tlb(&mut state);
    finish(&mut state);
    Ok(state)
}

/// Clears the SPR registry back to 1024 empty slots, every vector
/// slot back to the invalid sentinel, and the BAT/TLB parameters to
/// zero.
pub fn reset_registry(state: &mut CpuState) {
    debug_assert_eq!(state.phase, InitPhase::Uninitialized);
    state.registry = SprRegistry::new();
    state.vectors = VectorTable::default();
    state.nb_bats = 0;
    state.tlb = TlbLayout::NONE;
    state.tlb_store = TlbStore::None;
    state.nb_pids = 0;
    state.mas_mask = 0;
    state.tlbncfg = [0; 4];
    state.mmucfg = 0;
    state.phase = InitPhase::RegistryReset;
}

/// Registers the architecture-wide SPRs plus the identification
/// registers: PVR always, SVR only for models that carry one.
pub fn register_generic(state: &mut CpuState) -> Result<(), CatalogDefect> {
    debug_assert_eq!(state.phase, InitPhase::RegistryReset);
    groups::generic(state)?;
    groups::pvr(state)?;
    if state.model.svr != SVR_NONE {
        groups::svr(state)?;
    }
    state.phase = InitPhase::GenericRegistered;
    Ok(())
}

/// Runs the family's register-file constructor.
pub fn build_model(state: &mut CpuState) -> Result<(), CatalogDefect> {
    debug_assert_eq!(state.phase, InitPhase::GenericRegistered);
    (state.model.family.build)(state)?;
    state.phase = InitPhase::ModelBuilt;
    Ok(())
}

/// Validates the family descriptor: the overloaded MSR bit groups and
/// the time-base clock source.
pub fn check_consistency(state: &mut CpuState) -> Result<(), CatalogDefect> {
    debug_assert_eq!(state.phase, InitPhase::ModelBuilt);
    verify_msr_flags(state.model.family.msr_mask, state.model.family.flags)?;
    state.phase = InitPhase::Checked;
    Ok(())
}

/// Allocates the TLB store from the geometry the build routine left
/// behind. A split layout doubles the element count.
pub fn allocate_tlb(state: &mut CpuState) {
    debug_assert_eq!(state.phase, InitPhase::Checked);
    state.tlb_store = TlbStore::allocate(state.tlb);
    state.phase = InitPhase::TlbAllocated;
}

/// Copies the family scalars into the instance and marks it ready.
pub fn finish(state: &mut CpuState) {
    debug_assert_eq!(state.phase, InitPhase::TlbAllocated);
    let family = state.model.family;
    state.msr_mask = family.msr_mask;
    state.flags = family.flags;
    state.check_pow = family.check_pow;
    state.mmu = family.mmu;
    state.excp = family.excp;
    state.bus = family.bus;
    if family.flags.contains(ModelFlags::VRE) {
        state.vscr = 0x0001_0000;
    }
    state.phase = InitPhase::Ready;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::TierAccess;
    use crate::catalog;
    use crate::registry::SyncKey;
    use crate::spr::{SPR_LR, SPR_PVR, SPR_SVR};
    use crate::tlb::TlbKind;
    use crate::vectors::{layout_604, Vector};

    #[test]
    fn pipeline_reaches_ready_for_a_classic_part() {
        let state = bring_up(catalog::resolve("604").unwrap()).unwrap();
        assert_eq!(state.phase, InitPhase::Ready);
        assert_eq!(state.msr_mask, state.model.family.msr_mask);
        assert!(state.registry.slot(SPR_LR).is_occupied());
    }

    #[test]
    fn reset_returns_a_dirtied_state_to_the_sentinels() {
        let mut state = CpuState::new(catalog::resolve("604").unwrap());
        state
            .registry
            .register(SPR_LR, "LR", TierAccess::GENERIC, TierAccess::GENERIC, 0)
            .unwrap();
        state.vectors = layout_604();
        state.nb_bats = 4;
        state.tlb = TlbLayout::split(TlbKind::Shadow6xx, 64, 2);

        reset_registry(&mut state);
        assert_eq!(state.phase, InitPhase::RegistryReset);
        assert!(!state.registry.slot(SPR_LR).is_occupied());
        assert!(!state.vectors.is_defined(Vector::Reset));
        assert_eq!(state.nb_bats, 0);
        assert_eq!(state.tlb, TlbLayout::NONE);
    }

    #[test]
    fn pvr_slot_defaults_to_the_model_value() {
        let state = bring_up(catalog::resolve("750_v2.2").unwrap()).unwrap();
        assert_eq!(state.registry.slot(SPR_PVR).default, 0x0008_0202);
    }

    #[test]
    fn svr_is_registered_only_when_the_model_carries_one() {
        let with = bring_up(catalog::resolve("e500mc").unwrap()).unwrap();
        assert!(with.registry.slot(SPR_SVR).is_occupied());
        let without = bring_up(catalog::resolve("g2").unwrap()).unwrap();
        assert!(!without.registry.slot(SPR_SVR).is_occupied());
    }

    #[test]
    fn vector_models_default_the_status_register_to_nj() {
        let g4 = bring_up(catalog::resolve("g4").unwrap()).unwrap();
        assert_eq!(g4.vscr, 0x0001_0000);
        let m603 = bring_up(catalog::resolve("603").unwrap()).unwrap();
        assert_eq!(m603.vscr, 0);
    }

    #[test]
    fn split_shadow_tlb_allocates_both_halves() {
        let state = bring_up(catalog::resolve("603").unwrap()).unwrap();
        // 64 entries, split instruction/data.
        let TlbStore::Shadow6xx(entries) = &state.tlb_store else {
            panic!("wrong store shape for a 603");
        };
        assert_eq!(entries.len(), 128);
    }

    #[test]
    fn sync_keys_fold_in_the_register_number() {
        let state = bring_up(catalog::resolve("power8").unwrap()).unwrap();
        let slot = state.registry.slot(crate::spr::SPR_DSISR);
        assert_eq!(slot.sync, Some(SyncKey::spr(crate::spr::SPR_DSISR)));
    }
}
