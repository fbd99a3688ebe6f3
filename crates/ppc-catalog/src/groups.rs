//! SPR registration groups.
//!
//! Each function claims the register block one processor line shares;
//! family build routines compose them. Groups are written in catalog
//! order so a double claim points at the model definition that caused
//! it.

use crate::access::{ReadHook as R, TierAccess, WriteHook as W};
use crate::defect::CatalogDefect;
use crate::msr::{msr_bit, MSR_CM, MSR_SF, MSR_SHV};
use crate::registry::SyncKey;
use crate::spr::*;
use crate::state::CpuState;
use crate::tlb::{TlbKind, TlbLayout};

const GEN: TierAccess = TierAccess::GENERIC;
const DENY: TierAccess = TierAccess::DENIED;

const fn rw(read: R, write: W) -> TierAccess {
    TierAccess::rw(read, write)
}

const fn ro(read: R) -> TierAccess {
    TierAccess::read_only(read)
}

const fn wo(write: W) -> TierAccess {
    TierAccess::write_only(write)
}

type Reg = Result<(), CatalogDefect>;

/// Privileged read/write slot with no implemented side effects.
pub fn unimplemented(state: &mut CpuState, number: u16, name: &'static str) -> Reg {
    state.registry.register(number, name, DENY, GEN, 0)
}

/// User-readable mirror slot with no implemented side effects.
pub fn unimplemented_ureg(state: &mut CpuState, number: u16, name: &'static str) -> Reg {
    state
        .registry
        .register(number, name, ro(R::Ureg), ro(R::Ureg), 0)
}

/// Privileged read-only slot with no implemented side effects.
pub fn unimplemented_no_write(state: &mut CpuState, number: u16, name: &'static str) -> Reg {
    state.registry.register(number, name, DENY, ro(R::Generic), 0)
}

/// Privileged slot whose writes are silently discarded.
pub fn unimplemented_write_nop(state: &mut CpuState, number: u16, name: &'static str) -> Reg {
    state
        .registry
        .register(number, name, DENY, rw(R::Generic, W::Nop), 0)
}

fn unimplemented_all(state: &mut CpuState, regs: &[(u16, &'static str)]) -> Reg {
    for &(number, name) in regs {
        unimplemented(state, number, name)?;
    }
    Ok(())
}

/// Registers every model carries: XER, link/count, the save/restore
/// pair and SPRG0-3.
pub fn generic(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_XER, "XER", rw(R::Xer, W::Xer), rw(R::Xer, W::Xer), 0)?;
    r.register(SPR_LR, "LR", rw(R::Lr, W::Lr), rw(R::Lr, W::Lr), 0)?;
    r.register(SPR_CTR, "CTR", rw(R::Ctr, W::Ctr), rw(R::Ctr, W::Ctr), 0)?;
    r.register(SPR_SRR0, "SRR0", DENY, GEN, 0)?;
    r.register(SPR_SRR1, "SRR1", DENY, GEN, 0)?;
    r.register(SPR_SPRG0, "SPRG0", DENY, GEN, 0)?;
    r.register(SPR_SPRG1, "SPRG1", DENY, GEN, 0)?;
    r.register(SPR_SPRG2, "SPRG2", DENY, GEN, 0)?;
    r.register(SPR_SPRG3, "SPRG3", DENY, GEN, 0)?;
    Ok(())
}

/// PVR, privileged read-only, preset to the model's value.
pub fn pvr(state: &mut CpuState) -> Reg {
    let value = u64::from(state.model.pvr);
    state
        .registry
        .register(SPR_PVR, "PVR", DENY, ro(R::Generic), value)
}

/// SVR, privileged read-only, for models that carry one.
pub fn svr(state: &mut CpuState) -> Reg {
    let value = u64::from(state.model.svr);
    state
        .registry
        .register(SPR_SVR, "SVR", DENY, ro(R::Generic), value)
}

/// Fault reporting and decrementer shared by everything except the 601.
pub fn exception_common(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register_sync(SPR_DSISR, "DSISR", DENY, GEN, SyncKey::spr(SPR_DSISR), 0)?;
    r.register_sync(SPR_DAR, "DAR", DENY, GEN, SyncKey::spr(SPR_DAR), 0)?;
    r.register(SPR_DECR, "DECR", DENY, rw(R::Decr, W::Decr), 0)?;
    Ok(())
}

/// Hash-table base. Hypervisor-capable families keep it out of
/// supervisor reach.
pub fn sdr1(state: &mut CpuState) -> Reg {
    if state.model.family.msr_mask & msr_bit(MSR_SHV) != 0 {
        state
            .registry
            .register_hv(SPR_SDR1, "SDR1", DENY, DENY, rw(R::Generic, W::Sdr1), 0)
    } else {
        state
            .registry
            .register(SPR_SDR1, "SDR1", DENY, rw(R::Generic, W::Sdr1), 0)
    }
}

/// IBAT0-3/DBAT0-3.
pub fn low_bats(state: &mut CpuState) -> Reg {
    const IBATS: [(u16, &str, u16, &str); 4] = [
        (SPR_IBAT0U, "IBAT0U", SPR_IBAT0L, "IBAT0L"),
        (SPR_IBAT1U, "IBAT1U", SPR_IBAT1L, "IBAT1L"),
        (SPR_IBAT2U, "IBAT2U", SPR_IBAT2L, "IBAT2L"),
        (SPR_IBAT3U, "IBAT3U", SPR_IBAT3L, "IBAT3L"),
    ];
    const DBATS: [(u16, &str, u16, &str); 4] = [
        (SPR_DBAT0U, "DBAT0U", SPR_DBAT0L, "DBAT0L"),
        (SPR_DBAT1U, "DBAT1U", SPR_DBAT1L, "DBAT1L"),
        (SPR_DBAT2U, "DBAT2U", SPR_DBAT2L, "DBAT2L"),
        (SPR_DBAT3U, "DBAT3U", SPR_DBAT3L, "DBAT3L"),
    ];
    for (upper, uname, lower, lname) in IBATS {
        state
            .registry
            .register(upper, uname, DENY, rw(R::Ibat, W::IbatUpper), 0)?;
        state
            .registry
            .register(lower, lname, DENY, rw(R::Ibat, W::IbatLower), 0)?;
    }
    for (upper, uname, lower, lname) in DBATS {
        state
            .registry
            .register(upper, uname, DENY, rw(R::Dbat, W::DbatUpper), 0)?;
        state
            .registry
            .register(lower, lname, DENY, rw(R::Dbat, W::DbatLower), 0)?;
    }
    state.nb_bats += 4;
    Ok(())
}

/// IBAT4-7/DBAT4-7 on parts that double the BAT file.
pub fn high_bats(state: &mut CpuState) -> Reg {
    const IBATS: [(u16, &str, u16, &str); 4] = [
        (SPR_IBAT4U, "IBAT4U", SPR_IBAT4L, "IBAT4L"),
        (SPR_IBAT5U, "IBAT5U", SPR_IBAT5L, "IBAT5L"),
        (SPR_IBAT6U, "IBAT6U", SPR_IBAT6L, "IBAT6L"),
        (SPR_IBAT7U, "IBAT7U", SPR_IBAT7L, "IBAT7L"),
    ];
    const DBATS: [(u16, &str, u16, &str); 4] = [
        (SPR_DBAT4U, "DBAT4U", SPR_DBAT4L, "DBAT4L"),
        (SPR_DBAT5U, "DBAT5U", SPR_DBAT5L, "DBAT5L"),
        (SPR_DBAT6U, "DBAT6U", SPR_DBAT6L, "DBAT6L"),
        (SPR_DBAT7U, "DBAT7U", SPR_DBAT7L, "DBAT7L"),
    ];
    for (upper, uname, lower, lname) in IBATS {
        state
            .registry
            .register(upper, uname, DENY, rw(R::IbatHigh, W::IbatUpperHigh), 0)?;
        state
            .registry
            .register(lower, lname, DENY, rw(R::IbatHigh, W::IbatLowerHigh), 0)?;
    }
    for (upper, uname, lower, lname) in DBATS {
        state
            .registry
            .register(upper, uname, DENY, rw(R::DbatHigh, W::DbatUpperHigh), 0)?;
        state
            .registry
            .register(lower, lname, DENY, rw(R::DbatHigh, W::DbatLowerHigh), 0)?;
    }
    state.nb_bats += 4;
    Ok(())
}

/// Time base: user-readable mirrors plus the privileged write side.
pub fn timebase(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_VTBL, "TBL", ro(R::Tbl), ro(R::Tbl), 0)?;
    r.register(SPR_TBL, "TBL", ro(R::Tbl), rw(R::Tbl, W::Tbl), 0)?;
    r.register(SPR_VTBU, "TBU", ro(R::Tbu), ro(R::Tbu), 0)?;
    r.register(SPR_TBU, "TBU", ro(R::Tbu), rw(R::Tbu, W::Tbu), 0)?;
    Ok(())
}

/// Software TLB window of the 6xx/G2 lines.
pub fn soft_tlb_6xx(state: &mut CpuState, entries: u32, ways: u32) -> Reg {
    state.tlb = TlbLayout::split(TlbKind::Shadow6xx, entries, ways);
    let r = &mut state.registry;
    r.register(SPR_DMISS, "DMISS", DENY, ro(R::Generic), 0)?;
    r.register(SPR_DCMP, "DCMP", DENY, ro(R::Generic), 0)?;
    r.register(SPR_HASH1, "HASH1", DENY, ro(R::Generic), 0)?;
    r.register(SPR_HASH2, "HASH2", DENY, ro(R::Generic), 0)?;
    r.register(SPR_IMISS, "IMISS", DENY, ro(R::Generic), 0)?;
    r.register(SPR_ICMP, "ICMP", DENY, ro(R::Generic), 0)?;
    r.register(SPR_RPA, "RPA", DENY, GEN, 0)?;
    Ok(())
}

/// Extra SPRG bank shared by G2 and 755.
pub fn sprgs_high(state: &mut CpuState) -> Reg {
    unimplemented_all(
        state,
        &[
            (SPR_SPRG4, "SPRG4"),
            (SPR_SPRG5, "SPRG5"),
            (SPR_SPRG6, "SPRG6"),
            (SPR_SPRG7, "SPRG7"),
        ],
    )
}

/// 7xx breakpoint, cache throttling and performance monitor block.
pub fn family_7xx(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register_sync(SPR_DABR, "DABR", DENY, GEN, SyncKey::spr(SPR_DABR), 0)?;
    r.register(SPR_IABR, "IABR", DENY, GEN, 0)?;
    r.register(SPR_ICTC, "ICTC", DENY, GEN, 0)?;
    r.register(SPR_7XX_MMCR0, "MMCR0", DENY, GEN, 0)?;
    r.register(SPR_7XX_MMCR1, "MMCR1", DENY, GEN, 0)?;
    r.register(SPR_7XX_PMC1, "PMC1", DENY, GEN, 0)?;
    r.register(SPR_7XX_PMC2, "PMC2", DENY, GEN, 0)?;
    r.register(SPR_7XX_PMC3, "PMC3", DENY, GEN, 0)?;
    r.register(SPR_7XX_PMC4, "PMC4", DENY, GEN, 0)?;
    r.register(SPR_7XX_SIAR, "SIAR", DENY, ro(R::Generic), 0)?;
    r.register(SPR_7XX_UMMCR0, "UMMCR0", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_7XX_UMMCR1, "UMMCR1", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_7XX_UPMC1, "UPMC1", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_7XX_UPMC2, "UPMC2", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_7XX_UPMC3, "UPMC3", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_7XX_UPMC4, "UPMC4", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_7XX_USIAR, "USIAR", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_EAR, "EAR", DENY, GEN, 0)?;
    Ok(())
}

/// Authority mask registers of the server line.
pub fn amr(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(
        SPR_UAMR,
        "UAMR",
        rw(R::Generic, W::Amr),
        rw(R::Generic, W::Amr),
        0,
    )?;
    r.register_sync_hv(
        SPR_AMR,
        "AMR",
        DENY,
        rw(R::Generic, W::Amr),
        GEN,
        SyncKey::spr(SPR_AMR),
        0,
    )?;
    r.register_sync_hv(
        SPR_UAMOR,
        "UAMOR",
        DENY,
        rw(R::Generic, W::Uamor),
        GEN,
        SyncKey::spr(SPR_UAMOR),
        0,
    )?;
    r.register_hv(SPR_AMOR, "AMOR", DENY, DENY, GEN, 0)?;
    Ok(())
}

/// Instruction authority mask.
pub fn iamr(state: &mut CpuState) -> Reg {
    state.registry.register_sync_hv(
        SPR_IAMR,
        "IAMR",
        DENY,
        rw(R::Generic, W::Iamr),
        GEN,
        SyncKey::spr(SPR_IAMR),
        0,
    )
}

/// Thermal assist block.
pub fn thrm(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_THRM1, "THRM1", DENY, rw(R::Thrm, W::Generic), 0)?;
    r.register(SPR_THRM2, "THRM2", DENY, rw(R::Thrm, W::Generic), 0)?;
    r.register(SPR_THRM3, "THRM3", DENY, rw(R::Thrm, W::Generic), 0)?;
    Ok(())
}

/// 604 breakpoint and performance monitor block.
pub fn family_604(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_PIR, "PIR", DENY, rw(R::Generic, W::Pir), 0)?;
    r.register(SPR_IABR, "IABR", DENY, GEN, 0)?;
    r.register_sync(SPR_DABR, "DABR", DENY, GEN, SyncKey::spr(SPR_DABR), 0)?;
    r.register(SPR_7XX_MMCR0, "MMCR0", DENY, GEN, 0)?;
    r.register(SPR_7XX_PMC1, "PMC1", DENY, GEN, 0)?;
    r.register(SPR_7XX_PMC2, "PMC2", DENY, GEN, 0)?;
    r.register(SPR_7XX_SIAR, "SIAR", DENY, ro(R::Generic), 0)?;
    r.register(SPR_SDA, "SDA", DENY, ro(R::Generic), 0)?;
    r.register(SPR_EAR, "EAR", DENY, GEN, 0)?;
    Ok(())
}

/// 603 extras.
pub fn family_603(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_EAR, "EAR", DENY, GEN, 0)?;
    r.register(SPR_IABR, "IABR", DENY, GEN, 0)?;
    Ok(())
}

/// G2 core debug and breakpoint block.
pub fn family_g2(state: &mut CpuState) -> Reg {
    unimplemented_all(
        state,
        &[
            (SPR_MBAR, "MBAR"),
            (SPR_BOOKE_CSRR0, "CSRR0"),
            (SPR_BOOKE_CSRR1, "CSRR1"),
            (SPR_DABR, "DABR"),
            (SPR_DABR2, "DABR2"),
            (SPR_IABR, "IABR"),
            (SPR_IABR2, "IABR2"),
            (SPR_IBCR, "IBCR"),
            (SPR_DBCR, "DBCR"),
        ],
    )
}

/// 602 oddball block.
pub fn family_602(state: &mut CpuState) -> Reg {
    unimplemented_all(
        state,
        &[
            (SPR_SER, "SER"),
            (SPR_SEBR, "SEBR"),
            (SPR_ESASRR, "ESASRR"),
            (SPR_SP, "SP"),
            (SPR_LT, "LT"),
            (SPR_TCR, "TCR"),
            (SPR_IBR, "IBR"),
            (SPR_IABR, "IABR"),
        ],
    )
}

/// 601: MQ, the RTC pair and its unified BAT file.
pub fn family_601(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_MQ, "MQ", GEN, GEN, 0)?;
    r.register(
        SPR_601_RTCU,
        "RTCU",
        DENY,
        wo(W::ClassicRtcUpper),
        0,
    )?;
    r.register(
        SPR_601_VRTCU,
        "RTCU",
        ro(R::ClassicRtcUpper),
        ro(R::ClassicRtcUpper),
        0,
    )?;
    r.register(
        SPR_601_RTCL,
        "RTCL",
        DENY,
        wo(W::ClassicRtcLower),
        0,
    )?;
    r.register(
        SPR_601_VRTCL,
        "RTCL",
        ro(R::ClassicRtcLower),
        ro(R::ClassicRtcLower),
        0,
    )?;
    r.register(SPR_EAR, "EAR", DENY, GEN, 0)?;
    const BATS: [(u16, &str, u16, &str); 4] = [
        (SPR_IBAT0U, "IBAT0U", SPR_IBAT0L, "IBAT0L"),
        (SPR_IBAT1U, "IBAT1U", SPR_IBAT1L, "IBAT1L"),
        (SPR_IBAT2U, "IBAT2U", SPR_IBAT2L, "IBAT2L"),
        (SPR_IBAT3U, "IBAT3U", SPR_IBAT3L, "IBAT3L"),
    ];
    for (upper, uname, lower, lname) in BATS {
        r.register(
            upper,
            uname,
            DENY,
            rw(R::ClassicUbat, W::ClassicUbatUpper),
            0,
        )?;
        r.register(
            lower,
            lname,
            DENY,
            rw(R::ClassicUbat, W::ClassicUbatLower),
            0,
        )?;
    }
    state.nb_bats = 4;
    Ok(())
}

/// 601 HID0 with its power-on value and the cache-control write filter.
pub fn hid0_601(state: &mut CpuState) -> Reg {
    state.registry.register(
        SPR_HID0,
        "HID0",
        DENY,
        rw(R::Generic, W::ClassicHid0),
        0x8001_0080,
    )
}

/// 74xx memory subsystem and VRSAVE block.
pub fn family_74xx(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_PIR, "PIR", DENY, rw(R::Generic, W::Pir), 0)?;
    r.register(SPR_74XX_MMCR2, "MMCR2", DENY, GEN, 0)?;
    r.register(SPR_74XX_UMMCR2, "UMMCR2", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_BAMR, "BAMR", DENY, GEN, 0)?;
    r.register(SPR_MSSCR0, "MSSCR0", DENY, GEN, 0)?;
    r.register(SPR_HID0, "HID0", DENY, GEN, 0)?;
    r.register(SPR_HID1, "HID1", DENY, GEN, 0)?;
    r.register(SPR_VRSAVE, "VRSAVE", GEN, GEN, 0)?;
    r.register(SPR_L2CR, "L2CR", DENY, rw(R::Generic, W::Nop), 0)?;
    Ok(())
}

/// L3 cache control on the parts that have one.
pub fn l3_ctrl(state: &mut CpuState) -> Reg {
    unimplemented_all(
        state,
        &[
            (SPR_L3CR, "L3CR"),
            (SPR_L3ITCR0, "L3ITCR0"),
            (SPR_L3PM, "L3PM"),
        ],
    )
}

/// 74xx software TLB window.
pub fn soft_tlb_74xx(state: &mut CpuState, entries: u32, ways: u32) -> Reg {
    state.tlb = TlbLayout::split(TlbKind::Shadow6xx, entries, ways);
    let r = &mut state.registry;
    r.register(SPR_PTEHI, "PTEHI", DENY, GEN, 0)?;
    r.register(SPR_PTELO, "PTELO", DENY, GEN, 0)?;
    r.register(SPR_TLBMISS, "TLBMISS", DENY, GEN, 0)?;
    Ok(())
}

/// Book E processor identification.
pub fn pir_booke(state: &mut CpuState) -> Reg {
    state
        .registry
        .register(SPR_BOOKE_PIR, "PIR", DENY, rw(R::Generic, W::Pir), 0)
}

/// SPE floating-point status and control, user-visible.
pub fn spefscr(state: &mut CpuState) -> Reg {
    state.registry.register(
        SPR_BOOKE_SPEFSCR,
        "SPEFSCR",
        rw(R::Spefscr, W::Spefscr),
        rw(R::Spefscr, W::Spefscr),
        0,
    )
}

/// Read-only L1 cache geometry word.
pub fn l1_cache_geometry(
    state: &mut CpuState,
    number: u16,
    name: &'static str,
    initial: u64,
) -> Reg {
    state
        .registry
        .register(number, name, ro(R::Generic), ro(R::Generic), initial)
}

/// MAS7/MAS3 combined view.
pub fn mas73(state: &mut CpuState) -> Reg {
    state.registry.register(
        SPR_BOOKE_MAS7_MAS3,
        "MAS7_MAS3",
        DENY,
        rw(R::Mas73, W::Mas73),
        0,
    )
}

/// MMU control and status, flash-invalidate on write.
pub fn mmucsr0(state: &mut CpuState) -> Reg {
    state.registry.register(
        SPR_MMUCSR0,
        "MMUCSR0",
        DENY,
        rw(R::Generic, W::BookeMmucsr0),
        0,
    )
}

/// e500 L1 control registers.
pub fn l1csr0(state: &mut CpuState) -> Reg {
    state
        .registry
        .register(SPR_EXXX_L1CSR0, "L1CSR0", DENY, rw(R::Generic, W::E500L1Csr0), 0)
}

/// e500 L1 control register 1.
pub fn l1csr1(state: &mut CpuState) -> Reg {
    state
        .registry
        .register(SPR_EXXX_L1CSR1, "L1CSR1", DENY, rw(R::Generic, W::E500L1Csr1), 0)
}

/// e500 L2 control.
pub fn l2csr0(state: &mut CpuState) -> Reg {
    state
        .registry
        .register(SPR_EXXX_L2CSR0, "L2CSR0", DENY, rw(R::Generic, W::E500L2Csr0), 0)
}

/// User-readable SPRG3 mirror.
pub fn usprg3(state: &mut CpuState) -> Reg {
    state
        .registry
        .register(SPR_USPRG3, "USPRG3", ro(R::Ureg), ro(R::Ureg), 0)
}

/// User-readable SPRG4-7 mirrors.
pub fn usprgh(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_USPRG4, "USPRG4", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_USPRG5, "USPRG5", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_USPRG6, "USPRG6", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_USPRG7, "USPRG7", ro(R::Ureg), ro(R::Ureg), 0)?;
    Ok(())
}

const IVORS_LOW: [(u16, &str); 16] = [
    (SPR_BOOKE_IVOR0, "IVOR0"),
    (SPR_BOOKE_IVOR1, "IVOR1"),
    (SPR_BOOKE_IVOR2, "IVOR2"),
    (SPR_BOOKE_IVOR3, "IVOR3"),
    (SPR_BOOKE_IVOR4, "IVOR4"),
    (SPR_BOOKE_IVOR5, "IVOR5"),
    (SPR_BOOKE_IVOR6, "IVOR6"),
    (SPR_BOOKE_IVOR7, "IVOR7"),
    (SPR_BOOKE_IVOR8, "IVOR8"),
    (SPR_BOOKE_IVOR9, "IVOR9"),
    (SPR_BOOKE_IVOR10, "IVOR10"),
    (SPR_BOOKE_IVOR11, "IVOR11"),
    (SPR_BOOKE_IVOR12, "IVOR12"),
    (SPR_BOOKE_IVOR13, "IVOR13"),
    (SPR_BOOKE_IVOR14, "IVOR14"),
    (SPR_BOOKE_IVOR15, "IVOR15"),
];

const IVORS_HIGH: [(u16, &str); 11] = [
    (SPR_BOOKE_IVOR32, "IVOR32"),
    (SPR_BOOKE_IVOR33, "IVOR33"),
    (SPR_BOOKE_IVOR34, "IVOR34"),
    (SPR_BOOKE_IVOR35, "IVOR35"),
    (SPR_BOOKE_IVOR36, "IVOR36"),
    (SPR_BOOKE_IVOR37, "IVOR37"),
    (SPR_BOOKE_IVOR38, "IVOR38"),
    (SPR_BOOKE_IVOR39, "IVOR39"),
    (SPR_BOOKE_IVOR40, "IVOR40"),
    (SPR_BOOKE_IVOR41, "IVOR41"),
    (SPR_BOOKE_IVOR42, "IVOR42"),
];

/// The Book E interrupt, debug, timer and SPRG block. `ivor_mask`
/// selects which IVORs the core implements: bits 0-15 map to
/// IVOR0-15 and bits 32-42 to IVOR32-42.
pub fn booke(state: &mut CpuState, ivor_mask: u64) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_BOOKE_CSRR0, "CSRR0", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_CSRR1, "CSRR1", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_IAC1, "IAC1", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_IAC2, "IAC2", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_DAC1, "DAC1", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_DAC2, "DAC2", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_DBCR0, "DBCR0", DENY, rw(R::Generic, W::EmbDbcr0), 0)?;
    r.register(SPR_BOOKE_DBCR1, "DBCR1", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_DBCR2, "DBCR2", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_DSRR0, "DSRR0", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_DSRR1, "DSRR1", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_DBSR, "DBSR", DENY, rw(R::Generic, W::Clear), 0)?;
    r.register(SPR_BOOKE_DEAR, "DEAR", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_ESR, "ESR", DENY, GEN, 0)?;
    r.register(
        SPR_BOOKE_IVPR,
        "IVPR",
        DENY,
        rw(R::Generic, W::ExcpPrefix),
        0,
    )?;
    for (bit, &(number, name)) in IVORS_LOW.iter().enumerate() {
        if ivor_mask & (1 << bit) != 0 {
            r.register(number, name, DENY, rw(R::Generic, W::ExcpVector), 0)?;
        }
    }
    for (i, &(number, name)) in IVORS_HIGH.iter().enumerate() {
        if ivor_mask & (1 << (32 + i)) != 0 {
            r.register(number, name, DENY, rw(R::Generic, W::ExcpVector), 0)?;
        }
    }
    r.register(SPR_BOOKE_PID, "PID", DENY, rw(R::Generic, W::BookePid), 0)?;
    r.register(SPR_BOOKE_TCR, "TCR", DENY, rw(R::Generic, W::BookeTcr), 0)?;
    r.register(SPR_BOOKE_TSR, "TSR", DENY, rw(R::Generic, W::BookeTsr), 0)?;
    r.register(SPR_DECR, "DECR", DENY, rw(R::Decr, W::Decr), 0)?;
    r.register(SPR_BOOKE_DECAR, "DECAR", DENY, wo(W::Generic), 0)?;
    r.register(SPR_USPRG0, "USPRG0", GEN, GEN, 0)?;
    r.register(SPR_SPRG4, "SPRG4", DENY, GEN, 0)?;
    r.register(SPR_SPRG5, "SPRG5", DENY, GEN, 0)?;
    r.register(SPR_SPRG6, "SPRG6", DENY, GEN, 0)?;
    r.register(SPR_SPRG7, "SPRG7", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_SPRG8, "SPRG8", DENY, GEN, 0)?;
    r.register(SPR_BOOKE_SPRG9, "SPRG9", DENY, GEN, 0)?;
    Ok(())
}

const MAS_REGS: [(u16, &str); 8] = [
    (SPR_BOOKE_MAS0, "MAS0"),
    (SPR_BOOKE_MAS1, "MAS1"),
    (SPR_BOOKE_MAS2, "MAS2"),
    (SPR_BOOKE_MAS3, "MAS3"),
    (SPR_BOOKE_MAS4, "MAS4"),
    (SPR_BOOKE_MAS5, "MAS5"),
    (SPR_BOOKE_MAS6, "MAS6"),
    (SPR_BOOKE_MAS7, "MAS7"),
];

/// Book E 2.06 storage control: MAS registers, extra PIDs, external
/// PID load/store context and the MMU/TLB configuration words.
/// `nb_configs` TLBnCFG registers are published from `state.tlbncfg`.
pub fn booke206(state: &mut CpuState, mas_mask: u32, nb_configs: usize) -> Reg {
    state.mas_mask = mas_mask;
    let wide = state.model.family.msr_mask & (msr_bit(MSR_CM) | msr_bit(MSR_SF)) != 0;
    for (i, &(number, name)) in MAS_REGS.iter().enumerate() {
        if mas_mask & (1 << i) == 0 {
            continue;
        }
        // MAS2 holds an effective address and is kept at full width on
        // 64-bit cores.
        let write = if i == 2 && wide {
            W::Generic
        } else {
            W::Generic32
        };
        state
            .registry
            .register(number, name, DENY, rw(R::Generic, write), 0)?;
    }
    if state.nb_pids > 1 {
        state
            .registry
            .register(SPR_BOOKE_PID1, "PID1", DENY, rw(R::Generic, W::BookePid), 0)?;
    }
    if state.nb_pids > 2 {
        state
            .registry
            .register(SPR_BOOKE_PID2, "PID2", DENY, rw(R::Generic, W::BookePid), 0)?;
    }
    state
        .registry
        .register(SPR_BOOKE_EPLC, "EPLC", DENY, rw(R::Generic, W::Eplc), 0)?;
    state
        .registry
        .register(SPR_BOOKE_EPSC, "EPSC", DENY, rw(R::Generic, W::Epsc), 0)?;
    let mmucfg = u64::from(state.mmucfg);
    state
        .registry
        .register(SPR_MMUCFG, "MMUCFG", DENY, ro(R::Generic), mmucfg)?;
    const TLB_CFGS: [(u16, &str); 4] = [
        (SPR_BOOKE_TLB0CFG, "TLB0CFG"),
        (SPR_BOOKE_TLB1CFG, "TLB1CFG"),
        (SPR_BOOKE_TLB2CFG, "TLB2CFG"),
        (SPR_BOOKE_TLB3CFG, "TLB3CFG"),
    ];
    for i in (0..nb_configs.min(4)).rev() {
        let (number, name) = TLB_CFGS[i];
        let value = u64::from(state.tlbncfg[i]);
        state
            .registry
            .register(number, name, DENY, ro(R::Generic), value)?;
    }
    usprgh(state)
}

/// 440 cache victim, cache debug and storage control block.
pub fn family_440(state: &mut CpuState) -> Reg {
    unimplemented_all(
        state,
        &[
            (SPR_440_DNV0, "DNV0"),
            (SPR_440_DNV1, "DNV1"),
            (SPR_440_DNV2, "DNV2"),
            (SPR_440_DNV3, "DNV3"),
            (SPR_440_DTV0, "DTV0"),
            (SPR_440_DTV1, "DTV1"),
            (SPR_440_DTV2, "DTV2"),
            (SPR_440_DTV3, "DTV3"),
            (SPR_440_DVLIM, "DVLIM"),
            (SPR_440_INV0, "INV0"),
            (SPR_440_INV1, "INV1"),
            (SPR_440_INV2, "INV2"),
            (SPR_440_INV3, "INV3"),
            (SPR_440_ITV0, "ITV0"),
            (SPR_440_ITV1, "ITV1"),
            (SPR_440_ITV2, "ITV2"),
            (SPR_440_ITV3, "ITV3"),
            (SPR_440_IVLIM, "IVLIM"),
        ],
    )?;
    unimplemented_no_write(state, SPR_BOOKE_DCDBTRH, "DCDBTRH")?;
    unimplemented_no_write(state, SPR_BOOKE_DCDBTRL, "DCDBTRL")?;
    unimplemented_no_write(state, SPR_BOOKE_ICDBDR, "ICDBDR")?;
    unimplemented_no_write(state, SPR_BOOKE_ICDBTRH, "ICDBTRH")?;
    unimplemented_no_write(state, SPR_BOOKE_ICDBTRL, "ICDBTRL")?;
    unimplemented(state, SPR_440_DBDR, "DBDR")?;
    unimplemented(state, SPR_4XX_CCR0, "CCR0")?;
    unimplemented_no_write(state, SPR_440_RSTCFG, "RSTCFG")?;
    unimplemented(state, SPR_440_MMUCR, "MMUCR")
}

/// Grab bag the 440 derivatives always register together.
pub fn misc_440(state: &mut CpuState) -> Reg {
    pir_booke(state)?;
    unimplemented_all(
        state,
        &[
            (SPR_BOOKE_IAC3, "IAC3"),
            (SPR_BOOKE_IAC4, "IAC4"),
            (SPR_BOOKE_DVC1, "DVC1"),
            (SPR_BOOKE_DVC2, "DVC2"),
        ],
    )
}

/// Cache, exception and timer SPRs shared across the 40x line.
pub fn family_40x(state: &mut CpuState) -> Reg {
    unimplemented(state, SPR_40X_DCCR, "DCCR")?;
    unimplemented(state, SPR_40X_ICCR, "ICCR")?;
    unimplemented_no_write(state, SPR_BOOKE_ICDBDR, "ICDBDR")?;
    unimplemented(state, SPR_40X_DEAR, "DEAR")?;
    unimplemented(state, SPR_40X_ESR, "ESR")?;
    state.registry.register(
        SPR_40X_EVPR,
        "EVPR",
        DENY,
        rw(R::Generic, W::ExcpPrefix),
        0,
    )?;
    state.registry.register(SPR_40X_SRR2, "SRR2", GEN, GEN, 0)?;
    state.registry.register(SPR_40X_SRR3, "SRR3", GEN, GEN, 0)?;
    state
        .registry
        .register(SPR_40X_PIT, "PIT", DENY, rw(R::EmbPit, W::EmbPit), 0)?;
    state
        .registry
        .register(SPR_40X_TCR, "TCR", DENY, rw(R::Generic, W::BookeTcr), 0)?;
    state
        .registry
        .register(SPR_40X_TSR, "TSR", DENY, rw(R::Generic, W::BookeTsr), 0)?;
    Ok(())
}

/// 405 MMU, debug and storage control block.
pub fn family_405(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_40X_PID, "PID", DENY, GEN, 0)?;
    r.register(SPR_4XX_CCR0, "CCR0", DENY, GEN, 0x0070_0000)?;
    r.register(SPR_40X_DBCR0, "DBCR0", DENY, rw(R::Generic, W::EmbDbcr0), 0)?;
    r.register(SPR_405_DBCR1, "DBCR1", DENY, GEN, 0)?;
    // Reads back as "last reset was a system reset".
    r.register(SPR_40X_DBSR, "DBSR", DENY, rw(R::Generic, W::Clear), 0x0000_0300)?;
    r.register(SPR_40X_DAC1, "DAC1", DENY, GEN, 0)?;
    r.register(SPR_40X_DAC2, "DAC2", DENY, GEN, 0)?;
    r.register(SPR_405_DVC1, "DVC1", DENY, GEN, 0)?;
    r.register(SPR_405_DVC2, "DVC2", DENY, GEN, 0)?;
    r.register(SPR_40X_IAC1, "IAC1", DENY, GEN, 0)?;
    r.register(SPR_40X_IAC2, "IAC2", DENY, GEN, 0)?;
    r.register(SPR_405_IAC3, "IAC3", DENY, GEN, 0)?;
    r.register(SPR_405_IAC4, "IAC4", DENY, GEN, 0)?;
    r.register(SPR_405_SLER, "SLER", DENY, rw(R::Generic, W::EmbSler), 0)?;
    r.register(SPR_40X_ZPR, "ZPR", DENY, GEN, 0)?;
    r.register(SPR_405_SU0R, "SU0R", DENY, GEN, 0)?;
    r.register(SPR_USPRG0, "USPRG0", ro(R::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_SPRG4, "SPRG4", DENY, GEN, 0)?;
    r.register(SPR_SPRG5, "SPRG5", DENY, GEN, 0)?;
    r.register(SPR_SPRG6, "SPRG6", DENY, GEN, 0)?;
    r.register(SPR_SPRG7, "SPRG7", DENY, GEN, 0)?;
    usprgh(state)
}

/// Time base window shared by the 401 and 403.
pub fn family_401_403(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_403_VTBL, "TBL", ro(R::Tbl), ro(R::Tbl), 0)?;
    r.register(SPR_403_TBL, "TBL", DENY, wo(W::Tbl), 0)?;
    r.register(SPR_403_VTBU, "TBU", ro(R::Tbu), ro(R::Tbu), 0)?;
    r.register(SPR_403_TBU, "TBU", DENY, wo(W::Tbu), 0)?;
    unimplemented(state, SPR_403_CDBCR, "CDBCR")
}

/// 401 debug and storage control block.
pub fn family_401(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_40X_DBCR0, "DBCR", DENY, rw(R::Generic, W::EmbDbcr0), 0)?;
    r.register(SPR_40X_DBSR, "DBSR", DENY, rw(R::Generic, W::Clear), 0x0000_0300)?;
    r.register(SPR_40X_DAC1, "DAC", DENY, GEN, 0)?;
    r.register(SPR_40X_IAC1, "IAC", DENY, GEN, 0)?;
    r.register(SPR_405_SLER, "SLER", DENY, rw(R::Generic, W::EmbSler), 0)?;
    r.register(SPR_40X_SGR, "SGR", DENY, GEN, 0xFFFF_FFFF)?;
    unimplemented(state, SPR_40X_DCWR, "DCWR")
}

/// 401 variants with address translation add PID and zone protection.
pub fn family_401x2(state: &mut CpuState) -> Reg {
    family_401(state)?;
    unimplemented(state, SPR_40X_PID, "PID")?;
    unimplemented(state, SPR_40X_ZPR, "ZPR")
}

/// 403 debug block.
pub fn family_403(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_40X_DBCR0, "DBCR0", DENY, rw(R::Generic, W::EmbDbcr0), 0)?;
    r.register(SPR_40X_DBSR, "DBSR", DENY, rw(R::Generic, W::Clear), 0x0000_0300)?;
    r.register(SPR_40X_DAC1, "DAC1", DENY, GEN, 0)?;
    r.register(SPR_40X_DAC2, "DAC2", DENY, GEN, 0)?;
    r.register(SPR_40X_IAC1, "IAC1", DENY, GEN, 0)?;
    r.register(SPR_40X_IAC2, "IAC2", DENY, GEN, 0)?;
    Ok(())
}

/// 403 programmable boundary registers.
pub fn pbr_403(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_403_PBL1, "PBL1", DENY, rw(R::EmbPbr, W::EmbPbr), 0)?;
    r.register(SPR_403_PBU1, "PBU1", DENY, rw(R::EmbPbr, W::EmbPbr), 0)?;
    r.register(SPR_403_PBL2, "PBL2", DENY, rw(R::EmbPbr, W::EmbPbr), 0)?;
    r.register(SPR_403_PBU2, "PBU2", DENY, rw(R::EmbPbr, W::EmbPbr), 0)?;
    Ok(())
}

/// 403 MMU block.
pub fn mmu_403(state: &mut CpuState) -> Reg {
    unimplemented(state, SPR_40X_PID, "PID")?;
    unimplemented(state, SPR_40X_ZPR, "ZPR")
}

/// 40x bus access control.
pub fn bus_control_40x(state: &mut CpuState) -> Reg {
    unimplemented(state, SPR_40X_SGR, "SGR")?;
    unimplemented(state, SPR_40X_DCWR, "DCWR")
}

/// Compression coprocessor key register.
pub fn compress_401(state: &mut CpuState) -> Reg {
    unimplemented(state, SPR_401_SKR, "SKR")
}

/// Exception, debug and development-support block shared by the RCPU
/// (5xx) and PowerQUICC (8xx) lines.
pub fn family_5xx_8xx(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register_sync(SPR_DSISR, "DSISR", DENY, GEN, SyncKey::spr(SPR_DSISR), 0)?;
    r.register_sync(SPR_DAR, "DAR", DENY, GEN, SyncKey::spr(SPR_DAR), 0)?;
    r.register(SPR_DECR, "DECR", DENY, rw(R::Decr, W::Decr), 0)?;
    unimplemented_all(
        state,
        &[
            (SPR_MPC_EIE, "EIE"),
            (SPR_MPC_EID, "EID"),
            (SPR_MPC_NRI, "NRI"),
            (SPR_MPC_CMPA, "CMPA"),
            (SPR_MPC_CMPB, "CMPB"),
            (SPR_MPC_CMPC, "CMPC"),
            (SPR_MPC_CMPD, "CMPD"),
            (SPR_MPC_ECR, "ECR"),
            (SPR_MPC_DER, "DER"),
            (SPR_MPC_COUNTA, "COUNTA"),
            (SPR_MPC_COUNTB, "COUNTB"),
            (SPR_MPC_CMPE, "CMPE"),
            (SPR_MPC_CMPF, "CMPF"),
            (SPR_MPC_CMPG, "CMPG"),
            (SPR_MPC_CMPH, "CMPH"),
            (SPR_MPC_LCTRL1, "LCTRL1"),
            (SPR_MPC_LCTRL2, "LCTRL2"),
            (SPR_MPC_BAR, "BAR"),
            (SPR_MPC_DPDR, "DPDR"),
            (SPR_MPC_IMMR, "IMMR"),
        ],
    )
}

/// RCPU burst buffer and L2U block.
pub fn family_5xx(state: &mut CpuState) -> Reg {
    unimplemented_all(
        state,
        &[
            (SPR_RCPU_MI_GRA, "MI_GRA"),
            (SPR_RCPU_L2U_GRA, "L2U_GRA"),
            (SPR_RCPU_BBCMCR, "L2U_BBCMCR"),
            (SPR_RCPU_L2U_MCR, "L2U_MCR"),
            (SPR_RCPU_MI_RBA0, "MI_RBA0"),
            (SPR_RCPU_MI_RBA1, "MI_RBA1"),
            (SPR_RCPU_MI_RBA2, "MI_RBA2"),
            (SPR_RCPU_MI_RBA3, "MI_RBA3"),
            (SPR_RCPU_L2U_RBA0, "L2U_RBA0"),
            (SPR_RCPU_L2U_RBA1, "L2U_RBA1"),
            (SPR_RCPU_L2U_RBA2, "L2U_RBA2"),
            (SPR_RCPU_L2U_RBA3, "L2U_RBA3"),
            (SPR_RCPU_MI_RA0, "MI_RA0"),
            (SPR_RCPU_MI_RA1, "MI_RA1"),
            (SPR_RCPU_MI_RA2, "MI_RA2"),
            (SPR_RCPU_MI_RA3, "MI_RA3"),
            (SPR_RCPU_L2U_RA0, "L2U_RA0"),
            (SPR_RCPU_L2U_RA1, "L2U_RA1"),
            (SPR_RCPU_L2U_RA2, "L2U_RA2"),
            (SPR_RCPU_L2U_RA3, "L2U_RA3"),
            (SPR_RCPU_FPECR, "FPECR"),
        ],
    )
}

/// PowerQUICC cache and software-tablewalk block.
pub fn family_8xx(state: &mut CpuState) -> Reg {
    unimplemented_all(
        state,
        &[
            (SPR_MPC_IC_CST, "IC_CST"),
            (SPR_MPC_IC_ADR, "IC_ADR"),
            (SPR_MPC_IC_DAT, "IC_DAT"),
            (SPR_MPC_DC_CST, "DC_CST"),
            (SPR_MPC_DC_ADR, "DC_ADR"),
            (SPR_MPC_DC_DAT, "DC_DAT"),
            (SPR_MPC_MI_CTR, "MI_CTR"),
            (SPR_MPC_MI_AP, "MI_AP"),
            (SPR_MPC_MI_EPN, "MI_EPN"),
            (SPR_MPC_MI_TWC, "MI_TWC"),
            (SPR_MPC_MI_RPN, "MI_RPN"),
            (SPR_MPC_MI_DBCAM, "MI_DBCAM"),
            (SPR_MPC_MI_DBRAM0, "MI_DBRAM0"),
            (SPR_MPC_MI_DBRAM1, "MI_DBRAM1"),
            (SPR_MPC_MD_CTR, "MD_CTR"),
            (SPR_MPC_MD_CASID, "MD_CASID"),
            (SPR_MPC_MD_AP, "MD_AP"),
            (SPR_MPC_MD_EPN, "MD_EPN"),
            (SPR_MPC_MD_TWB, "MD_TWB"),
            (SPR_MPC_MD_TWC, "MD_TWC"),
            (SPR_MPC_MD_RPN, "MD_RPN"),
            (SPR_MPC_MD_TW, "MD_TW"),
            (SPR_MPC_MD_DBCAM, "MD_DBCAM"),
            (SPR_MPC_MD_DBRAM0, "MD_DBRAM0"),
            (SPR_MPC_MD_DBRAM1, "MD_DBRAM1"),
        ],
    )
}

/// 970 hardware implementation registers.
pub fn hid_970(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_HID0, "HID0", DENY, rw(R::Generic, W::Clear), 0x6000_0000)?;
    r.register(SPR_HID1, "HID1", DENY, GEN, 0)?;
    r.register(SPR_970_HID5, "HID5", DENY, GEN, 0)?;
    Ok(())
}

/// 970 hardware interrupt offset register.
pub fn hior_970(state: &mut CpuState) -> Reg {
    state
        .registry
        .register(SPR_HIOR, "SPR_HIOR", DENY, rw(R::Hior, W::Hior), 0)
}

/// Run-control register and its user mirror.
pub fn ctrl_book3s(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_CTRL, "SPR_CTRL", DENY, wo(W::Generic), 0)?;
    r.register(SPR_UCTRL, "SPR_UCTRL", ro(R::Ureg), ro(R::Ureg), 0)?;
    Ok(())
}

/// VRSAVE for the vector-capable server parts.
pub fn altivec_book3s(state: &mut CpuState) -> Reg {
    state
        .registry
        .register_sync(SPR_VRSAVE, "VRSAVE", GEN, GEN, SyncKey::spr(SPR_VRSAVE), 0)
}

/// Pre-2.07 data breakpoint pair.
pub fn dbg_book3s(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register_sync(SPR_DABR, "DABR", DENY, GEN, SyncKey::spr(SPR_DABR), 0)?;
    r.register_sync(SPR_DABRX, "DABRX", DENY, GEN, SyncKey::spr(SPR_DABRX), 0)?;
    Ok(())
}

/// 2.07 data watchpoint and instruction breakpoint, hypervisor scope.
pub fn dbg_book3s_207(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register_sync_hv(SPR_DAWR, "DAWR", DENY, DENY, GEN, SyncKey::spr(SPR_DAWR), 0)?;
    r.register_sync_hv(SPR_DAWRX, "DAWRX", DENY, DENY, GEN, SyncKey::spr(SPR_DAWRX), 0)?;
    r.register_sync_hv(SPR_CIABR, "CIABR", DENY, DENY, GEN, SyncKey::spr(SPR_CIABR), 0)?;
    Ok(())
}

/// 970 instruction breakpoint.
pub fn dbg_970(state: &mut CpuState) -> Reg {
    state.registry.register(SPR_IABR, "IABR", DENY, GEN, 0)
}

const PMU_SUP: [(u16, &str); 11] = [
    (SPR_POWER_MMCR0, "MMCR0"),
    (SPR_POWER_MMCR1, "MMCR1"),
    (SPR_POWER_MMCRA, "MMCRA"),
    (SPR_POWER_PMC1, "PMC1"),
    (SPR_POWER_PMC2, "PMC2"),
    (SPR_POWER_PMC3, "PMC3"),
    (SPR_POWER_PMC4, "PMC4"),
    (SPR_POWER_PMC5, "PMC5"),
    (SPR_POWER_PMC6, "PMC6"),
    (SPR_POWER_SIAR, "SIAR"),
    (SPR_POWER_SDAR, "SDAR"),
];

const PMU_USER: [(u16, &str); 11] = [
    (SPR_POWER_UMMCR0, "UMMCR0"),
    (SPR_POWER_UMMCR1, "UMMCR1"),
    (SPR_POWER_UMMCRA, "UMMCRA"),
    (SPR_POWER_UPMC1, "UPMC1"),
    (SPR_POWER_UPMC2, "UPMC2"),
    (SPR_POWER_UPMC3, "UPMC3"),
    (SPR_POWER_UPMC4, "UPMC4"),
    (SPR_POWER_UPMC5, "UPMC5"),
    (SPR_POWER_UPMC6, "UPMC6"),
    (SPR_POWER_USIAR, "USIAR"),
    (SPR_POWER_USDAR, "USDAR"),
];

/// Server performance monitor, privileged side.
pub fn pmu_book3s_sup(state: &mut CpuState) -> Reg {
    for (number, name) in PMU_SUP {
        state
            .registry
            .register_sync(number, name, DENY, GEN, SyncKey::spr(number), 0)?;
    }
    Ok(())
}

/// Server performance monitor, user mirrors.
pub fn pmu_book3s_user(state: &mut CpuState) -> Reg {
    for (number, name) in PMU_USER {
        state
            .registry
            .register(number, name, rw(R::Ureg, W::Ureg), ro(R::Ureg), 0)?;
    }
    Ok(())
}

/// 970's extra counter pair, privileged side.
pub fn pmu_970_sup(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register_sync(SPR_970_PMC7, "PMC7", DENY, GEN, SyncKey::spr(SPR_970_PMC7), 0)?;
    r.register_sync(SPR_970_PMC8, "PMC8", DENY, GEN, SyncKey::spr(SPR_970_PMC8), 0)?;
    Ok(())
}

/// 970's extra counter pair, user mirrors.
pub fn pmu_970_user(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_970_UPMC7, "UPMC7", rw(R::Ureg, W::Ureg), ro(R::Ureg), 0)?;
    r.register(SPR_970_UPMC8, "UPMC8", rw(R::Ureg, W::Ureg), ro(R::Ureg), 0)?;
    Ok(())
}

/// POWER8 performance monitor additions, privileged side.
pub fn pmu_power8_sup(state: &mut CpuState) -> Reg {
    const REGS: [(u16, &str); 8] = [
        (SPR_POWER_MMCR2, "MMCR2"),
        (SPR_POWER_MMCRS, "MMCRS"),
        (SPR_POWER_SIER, "SIER"),
        (SPR_POWER_SPMC1, "SPMC1"),
        (SPR_POWER_SPMC2, "SPMC2"),
        (SPR_TACR, "TACR"),
        (SPR_TCSCR, "TCSCR"),
        (SPR_CSIGR, "CSIGR"),
    ];
    for (number, name) in REGS {
        state
            .registry
            .register_sync(number, name, DENY, GEN, SyncKey::spr(number), 0)?;
    }
    Ok(())
}

/// POWER8 performance monitor additions, user mirrors.
pub fn pmu_power8_user(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(
        SPR_POWER_UMMCR2,
        "UMMCR2",
        rw(R::Ureg, W::Ureg),
        ro(R::Ureg),
        0,
    )?;
    r.register(SPR_POWER_USIER, "USIER", ro(R::Generic), GEN, 0)?;
    Ok(())
}

/// External access register, POWER5+ onward.
pub fn ear_power5p(state: &mut CpuState) -> Reg {
    state.registry.register(SPR_EAR, "EAR", DENY, GEN, 0)
}

/// Hypervisor-writable top 40 bits of the time base.
pub fn tb_power5p(state: &mut CpuState) -> Reg {
    state
        .registry
        .register_hv(SPR_TBU40, "TBU40", DENY, DENY, wo(W::Tbu40), 0)
}

/// 970 partitioning cover: HID4 stands in for the later LPCR.
pub fn lpar_970(state: &mut CpuState) -> Reg {
    state.registry.register(SPR_970_HID4, "HID4", DENY, GEN, 0)
}

/// LPCR and the hypervisor decrementer.
pub fn lpar_power5p(state: &mut CpuState) -> Reg {
    // LPES0 | LPES1: external interrupts go straight to the kernel.
    state.registry.register_sync_hv(
        SPR_LPCR,
        "LPCR",
        DENY,
        DENY,
        rw(R::Generic, W::Lpcr),
        SyncKey::spr(SPR_LPCR),
        0x0000_000C,
    )?;
    state
        .registry
        .register_hv(SPR_HDEC, "HDEC", DENY, DENY, rw(R::Hdecr, W::Hdecr), 0)
}

/// Identification and hypervisor working registers of the server line.
pub fn ids_book3s(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register_hv(SPR_PIR, "PIR", DENY, ro(R::Generic), ro(R::Generic), 0)?;
    r.register_hv(SPR_HID0, "HID0", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_TSCR, "TSCR", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_HMER, "HMER", DENY, DENY, rw(R::Generic, W::Hmer), 0)?;
    r.register_hv(SPR_HMEER, "HMEER", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_TFMR, "TFMR", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_LPIDR, "LPIDR", DENY, DENY, rw(R::Generic, W::Lpidr), 0)?;
    r.register_hv(SPR_HFSCR, "HFSCR", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_MMCRC, "MMCRC", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_MMCRH, "MMCRH", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_HSPRG0, "HSPRG0", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_HSPRG1, "HSPRG1", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_HSRR0, "HSRR0", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_HSRR1, "HSRR1", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_HDAR, "HDAR", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_HDSISR, "HDSISR", DENY, DENY, GEN, 0)?;
    r.register_hv(SPR_HRMOR, "HRMOR", DENY, DENY, GEN, 0)?;
    Ok(())
}

/// Real mode offset register.
pub fn rmor(state: &mut CpuState) -> Reg {
    state
        .registry
        .register_hv(SPR_RMOR, "RMOR", DENY, DENY, GEN, 0)
}

/// Thread identification register.
pub fn ids_power8(state: &mut CpuState) -> Reg {
    state
        .registry
        .register(SPR_TIR, "TIR", DENY, ro(R::Generic), 0)
}

/// Processor and scaled processor utilisation counters.
pub fn purr_book3s(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register_sync_hv(
        SPR_PURR,
        "PURR",
        ro(R::Purr),
        ro(R::Purr),
        rw(R::Purr, W::Purr),
        SyncKey::spr(SPR_PURR),
        0,
    )?;
    r.register_sync_hv(
        SPR_SPURR,
        "SPURR",
        ro(R::Purr),
        ro(R::Purr),
        rw(R::Purr, W::Purr),
        SyncKey::spr(SPR_SPURR),
        0,
    )?;
    Ok(())
}

/// Come-from address register.
pub fn dbg_power6(state: &mut CpuState) -> Reg {
    state
        .registry
        .register(SPR_CFAR, "SPR_CFAR", DENY, rw(R::Cfar, W::Cfar), 0)
}

/// Program priority register, user-writable.
pub fn common_power5p(state: &mut CpuState) -> Reg {
    state
        .registry
        .register_sync(SPR_PPR, "PPR", GEN, GEN, SyncKey::spr(SPR_PPR), 0)
}

/// Data stream control and the processor compatibility register.
pub fn common_power6(state: &mut CpuState) -> Reg {
    state
        .registry
        .register_sync(SPR_DSCR, "SPR_DSCR", DENY, GEN, SyncKey::spr(SPR_DSCR), 0)?;
    state
        .registry
        .register_hv(SPR_PCR, "PCR", DENY, DENY, rw(R::Generic, W::Pcr), 0)
}

/// Target address register, facility-gated in problem state.
pub fn tar_power8(state: &mut CpuState) -> Reg {
    state
        .registry
        .register_sync(SPR_TAR, "TAR", rw(R::Tar, W::Tar), GEN, SyncKey::spr(SPR_TAR), 0)
}

/// Transactional memory checkpoint registers.
pub fn tm_power8(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register_sync(
        SPR_TFHAR,
        "TFHAR",
        rw(R::Tm, W::Tm),
        rw(R::Tm, W::Tm),
        SyncKey::spr(SPR_TFHAR),
        0,
    )?;
    r.register_sync(
        SPR_TFIAR,
        "TFIAR",
        rw(R::Tm, W::Tm),
        rw(R::Tm, W::Tm),
        SyncKey::spr(SPR_TFIAR),
        0,
    )?;
    r.register_sync(
        SPR_TEXASR,
        "TEXASR",
        rw(R::Tm, W::Tm),
        rw(R::Tm, W::Tm),
        SyncKey::spr(SPR_TEXASR),
        0,
    )?;
    r.register(
        SPR_TEXASRU,
        "TEXASRU",
        rw(R::TmUpper32, W::TmUpper32),
        rw(R::TmUpper32, W::TmUpper32),
        0,
    )?;
    Ok(())
}

/// Event-based branching registers.
pub fn ebb_power8(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register(SPR_BESCRS, "BESCRS", rw(R::Ebb, W::Ebb), GEN, 0)?;
    r.register(
        SPR_BESCRSU,
        "BESCRSU",
        rw(R::EbbUpper32, W::EbbUpper32),
        rw(R::PrevUpper32, W::PrevUpper32),
        0,
    )?;
    r.register(SPR_BESCRR, "BESCRR", rw(R::Ebb, W::Ebb), GEN, 0)?;
    r.register(
        SPR_BESCRRU,
        "BESCRRU",
        rw(R::EbbUpper32, W::EbbUpper32),
        rw(R::PrevUpper32, W::PrevUpper32),
        0,
    )?;
    r.register_sync(
        SPR_EBBHR,
        "EBBHR",
        rw(R::Ebb, W::Ebb),
        GEN,
        SyncKey::spr(SPR_EBBHR),
        0,
    )?;
    r.register_sync(
        SPR_EBBRR,
        "EBBRR",
        rw(R::Ebb, W::Ebb),
        GEN,
        SyncKey::spr(SPR_EBBRR),
        0,
    )?;
    r.register_sync(
        SPR_BESCR,
        "BESCR",
        rw(R::Ebb, W::Ebb),
        GEN,
        SyncKey::spr(SPR_BESCR),
        0,
    )?;
    Ok(())
}

/// Virtual time base, read-anywhere.
pub fn vtb(state: &mut CpuState) -> Reg {
    state.registry.register_sync_hv(
        SPR_VTB,
        "VTB",
        DENY,
        ro(R::Vtb),
        rw(R::Vtb, W::Vtb),
        SyncKey::spr(SPR_VTB),
        0,
    )
}

/// Facility status and control.
pub fn fscr_power8(state: &mut CpuState) -> Reg {
    state
        .registry
        .register_sync(SPR_FSCR, "FSCR", DENY, GEN, SyncKey::spr(SPR_FSCR), 0)
}

/// Problem state priority boost, 32-bit.
pub fn pspb_power8(state: &mut CpuState) -> Reg {
    state.registry.register_sync(
        SPR_PSPB,
        "PSPB",
        DENY,
        rw(R::Generic, W::Generic32),
        SyncKey::spr(SPR_PSPB),
        0,
    )
}

/// Doorbell exception state used for inter-processor interrupts.
pub fn dpdes_power8(state: &mut CpuState) -> Reg {
    state.registry.register_sync_hv(
        SPR_DPDES,
        "DPDES",
        DENY,
        ro(R::Dpdes),
        rw(R::Dpdes, W::Dpdes),
        SyncKey::spr(SPR_DPDES),
        0,
    )
}

/// Instruction counter.
pub fn ic_power8(state: &mut CpuState) -> Reg {
    state
        .registry
        .register_hv(SPR_IC, "IC", DENY, ro(R::Generic), GEN, 0)
}

/// POWER8 book IV block: coprocessor, PID and workload registers.
pub fn book4_power8(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register_sync(SPR_ACOP, "ACOP", DENY, GEN, SyncKey::spr(SPR_ACOP), 0)?;
    r.register_sync(
        SPR_BOOK3S_PID,
        "PID",
        DENY,
        rw(R::Generic, W::Pidr),
        SyncKey::spr(SPR_BOOK3S_PID),
        0,
    )?;
    r.register_sync(SPR_WORT, "WORT", DENY, GEN, SyncKey::spr(SPR_WORT), 0)?;
    Ok(())
}

/// POWER7 book IV block.
pub fn book4_power7(state: &mut CpuState) -> Reg {
    let r = &mut state.registry;
    r.register_sync(SPR_ACOP, "ACOP", DENY, GEN, SyncKey::spr(SPR_ACOP), 0)?;
    r.register_sync(
        SPR_BOOK3S_PID,
        "PID",
        DENY,
        GEN,
        SyncKey::spr(SPR_BOOK3S_PID),
        0,
    )?;
    Ok(())
}

/// Relative priority register with its architected reset value.
pub fn rpr_power8(state: &mut CpuState) -> Reg {
    state
        .registry
        .register_hv(SPR_RPR, "RPR", DENY, DENY, GEN, 0x0000_0103_070F_1F3F)
}

/// POWER9 radix MMU control.
pub fn mmu_power9(state: &mut CpuState) -> Reg {
    state.registry.register_sync_hv(
        SPR_PTCR,
        "PTCR",
        DENY,
        DENY,
        rw(R::Generic, W::Ptcr),
        SyncKey::spr(SPR_PTCR),
        0,
    )?;
    state
        .registry
        .register_hv(SPR_ASDR, "ASDR", DENY, DENY, GEN, 0)
}

/// Processor stop status and control, hypervisor resource.
pub fn psscr(state: &mut CpuState) -> Reg {
    state.registry.register_sync_hv(
        SPR_PSSCR,
        "PSSCR",
        TierAccess::ABSENT,
        TierAccess::ABSENT,
        GEN,
        SyncKey::spr(SPR_PSSCR),
        0,
    )
}

/// Thread identity for accelerator interrupts.
pub fn tidr(state: &mut CpuState) -> Reg {
    state.registry.register(SPR_TIDR, "TIDR", DENY, GEN, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;

    fn fresh(name: &str) -> CpuState {
        let model = models::by_name(name).unwrap();
        CpuState::new(model)
    }

    #[test]
    fn generic_block_claims_nine_slots() {
        let mut state = fresh("604");
        generic(&mut state).unwrap();
        assert_eq!(state.registry.registered_count(), 9);
        assert!(state.registry.slot(SPR_XER).is_occupied());
        assert!(state.registry.slot(SPR_SPRG3).is_occupied());
    }

    #[test]
    fn double_claim_is_reported() {
        let mut state = fresh("604");
        generic(&mut state).unwrap();
        let err = generic(&mut state).unwrap_err();
        assert_eq!(err, CatalogDefect::SprRegisteredTwice { number: SPR_XER });
    }

    #[test]
    fn bats_accumulate() {
        let mut state = fresh("755_v2.8");
        low_bats(&mut state).unwrap();
        high_bats(&mut state).unwrap();
        assert_eq!(state.nb_bats, 8);
        assert!(state.registry.slot(SPR_IBAT7L).is_occupied());
    }

    #[test]
    fn booke_registers_only_masked_ivors() {
        let mut state = fresh("440gpc");
        booke(&mut state, 0xFFFF).unwrap();
        assert!(state.registry.slot(SPR_BOOKE_IVOR15).is_occupied());
        assert!(!state.registry.slot(SPR_BOOKE_IVOR32).is_occupied());

        let mut state = fresh("e500mc");
        booke(&mut state, 0x0000_03FE_0000_FFFF).unwrap();
        assert!(!state.registry.slot(SPR_BOOKE_IVOR32).is_occupied());
        assert!(state.registry.slot(SPR_BOOKE_IVOR33).is_occupied());
        assert!(state.registry.slot(SPR_BOOKE_IVOR41).is_occupied());
        assert!(!state.registry.slot(SPR_BOOKE_IVOR42).is_occupied());
    }

    #[test]
    fn timebase_mirrors_share_a_name() {
        let mut state = fresh("603");
        timebase(&mut state).unwrap();
        assert_eq!(state.registry.slot(SPR_VTBL).name, "TBL");
        assert_eq!(state.registry.slot(SPR_TBL).name, "TBL");
        assert!(state.registry.slot(SPR_VTBL).supervisor.write.is_populated());
        assert!(!state.registry.slot(SPR_VTBL).supervisor.write.is_present());
    }
}
