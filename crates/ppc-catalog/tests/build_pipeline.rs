//! Per-family build coverage: spot checks that the staged pipeline
//! leaves the register file, geometry and vector layout a collaborator
//! would expect for representative parts of each line.

use ppc_catalog::spr::{
    SPR_BOOKE_IVOR15, SPR_BOOKE_IVOR35, SPR_BOOKE_MAS2, SPR_BOOKE_TLB0CFG, SPR_BOOKE_TLB1CFG,
    SPR_CFAR, SPR_HDEC, SPR_HID0, SPR_HSRR0, SPR_IBAT0U, SPR_IBAT4U, SPR_LPCR, SPR_MQ,
    SPR_PSSCR, SPR_PVR, SPR_601_RTCL, SPR_SDR1, SPR_SVR, SPR_TBL, SPR_VRSAVE,
};
use ppc_catalog::{bring_up, resolve, CpuState, TlbKind, TlbStore};
use proptest as _;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;

fn ready(token: &str) -> CpuState {
    bring_up(resolve(token).unwrap_or_else(|| panic!("unknown model {token}")))
        .unwrap_or_else(|e| panic!("{token}: {e}"))
}

#[test]
fn the_601_keeps_its_real_time_clock_and_mq() {
    let state = ready("601");
    assert!(state.registry.slot(SPR_MQ).is_occupied());
    assert!(state.registry.slot(SPR_601_RTCL).is_occupied());
    // No time base on the 601.
    assert!(!state.registry.slot(SPR_TBL).is_occupied());
    assert_eq!(state.nb_bats, 4);
}

#[test]
fn classic_parts_carry_low_bats_and_sdr1() {
    let state = ready("604");
    assert_eq!(state.nb_bats, 4);
    assert!(state.registry.slot(SPR_IBAT0U).is_occupied());
    assert!(!state.registry.slot(SPR_IBAT4U).is_occupied());
    assert!(state.registry.slot(SPR_SDR1).is_occupied());
}

#[test]
fn the_745_carries_all_eight_bat_pairs_and_a_soft_tlb() {
    let state = ready("745");
    assert_eq!(state.nb_bats, 8);
    assert!(state.registry.slot(SPR_IBAT4U).is_occupied());
    assert_eq!(state.tlb.kind, TlbKind::Shadow6xx);
    assert!(state.tlb.split);
    assert_eq!(state.tlb_store.len(), 128);
}

#[rstest]
#[case("440gpc", 64)]
#[case("405gp", 64)]
#[case("403gcx", 64)]
fn embedded_parts_allocate_a_unified_tlb(#[case] token: &str, #[case] entries: usize) {
    let state = ready(token);
    assert_eq!(state.tlb.kind, TlbKind::Embedded);
    assert!(!state.tlb.split);
    assert_eq!(state.tlb_store.len(), entries);
}

#[test]
fn the_e500mc_publishes_its_mas_driven_mmu_geometry() {
    let state = ready("e500mc");
    assert_eq!(state.tlb.kind, TlbKind::Mas);
    // 512 + 64 entries across the two arrays.
    assert!(matches!(&state.tlb_store, TlbStore::Mas(e) if e.len() == 576));
    assert_eq!(state.nb_pids, 3);
    assert_eq!(state.mas_mask, 0xDF);
    assert!(state.registry.slot(SPR_BOOKE_TLB0CFG).is_occupied());
    assert!(state.registry.slot(SPR_BOOKE_TLB1CFG).is_occupied());
    assert!(state.registry.slot(SPR_SVR).is_occupied());
    assert_eq!(state.dcache_line_size, 64);
    assert_eq!(state.icache_line_size, 64);
}

#[test]
fn booke_ivor_subsets_follow_the_family_mask() {
    let b440 = ready("440gpc");
    assert!(b440.registry.slot(SPR_BOOKE_IVOR15).is_occupied());
    assert!(!b440.registry.slot(SPR_BOOKE_IVOR35).is_occupied());

    let e5500 = ready("e5500");
    assert!(e5500.registry.slot(SPR_BOOKE_IVOR35).is_occupied());
}

#[test]
fn mas2_goes_full_width_only_on_64_bit_booke() {
    let e500 = ready("e500v2_v22");
    let e5500 = ready("e5500");
    assert!(e500.registry.slot(SPR_BOOKE_MAS2).is_occupied());
    assert!(e5500.registry.slot(SPR_BOOKE_MAS2).is_occupied());
    // Write hooks differ: 32-bit parts truncate the value.
    assert_ne!(
        e500.registry.slot(SPR_BOOKE_MAS2).supervisor.write,
        e5500.registry.slot(SPR_BOOKE_MAS2).supervisor.write
    );
}

#[test]
fn power8_exposes_the_hypervisor_tier() {
    let state = ready("power8");
    let lpcr = state.registry.slot(SPR_LPCR);
    assert!(!lpcr.supervisor.write.is_present());
    assert!(lpcr.hypervisor.write.is_present());
    // LPES0 | LPES1 out of reset.
    assert_eq!(lpcr.default, 0x0000_000C);
    assert!(state.registry.slot(SPR_HSRR0).is_occupied());
    assert!(state.registry.slot(SPR_HDEC).is_occupied());
    assert!(state.registry.slot(SPR_VRSAVE).is_occupied());
}

#[test]
fn power9_drops_sdr1_and_gains_psscr() {
    let p8 = ready("power8");
    let p9 = ready("power9");
    assert!(p8.registry.slot(SPR_SDR1).is_occupied());
    assert!(!p9.registry.slot(SPR_SDR1).is_occupied());
    let psscr = p9.registry.slot(SPR_PSSCR);
    assert!(psscr.hypervisor.write.is_present());
    assert!(!psscr.supervisor.write.is_populated());
}

#[test]
fn cfar_appears_from_power7_on() {
    assert!(!ready("power5+").registry.slot(SPR_CFAR).is_occupied());
    assert!(ready("power7").registry.slot(SPR_CFAR).is_occupied());
}

#[rstest]
#[case("g2", 0x0081_0011)]
#[case("750fx_v2.0", 0x700A_0200)]
#[case("power10", 0x0080_1200)]
fn the_pvr_slot_mirrors_the_model(#[case] token: &str, #[case] pvr: u64) {
    let state = ready(token);
    assert_eq!(state.registry.slot(SPR_PVR).default, pvr);
    assert!(!state.registry.slot(SPR_PVR).user.read.is_present());
    assert!(state.registry.slot(SPR_PVR).supervisor.read.is_present());
}

#[test]
fn hid0_defaults_differ_where_the_silicon_does() {
    // The 601 powers up with HID0 pre-set; the 970 clears high bits on
    // write and starts from its nap-gate value.
    assert_eq!(ready("601").registry.slot(SPR_HID0).default, 0x8001_0080);
    assert_eq!(ready("970").registry.slot(SPR_HID0).default, 0x6000_0000);
}
