//! The model catalog.
//!
//! One [`Family`] per processor line, one [`Model`] per taped-out chip.
//! Family build routines compose the registration groups in the order
//! the silicon documentation lists them, so a registration conflict
//! names the group at fault.

use crate::defect::CatalogDefect;
use crate::groups;
use crate::model::{BusModel, CheckPow, ExcpModel, Family, MmuModel, Model, PvrMatch, SVR_NONE};
use crate::msr::{
    msr_bit, ModelFlags, MSR_AL, MSR_CE, MSR_CM, MSR_DE, MSR_DR, MSR_DWE, MSR_EE, MSR_EP, MSR_GS,
    MSR_FE0, MSR_FE1, MSR_FP, MSR_ILE, MSR_IR, MSR_KEY, MSR_LE, MSR_ME, MSR_PE, MSR_PMM,
    MSR_POW, MSR_PR, MSR_PX, MSR_RI, MSR_SA, MSR_SE, MSR_SF, MSR_SHV, MSR_SPE, MSR_TGPR,
    MSR_TM, MSR_TS0, MSR_TS1, MSR_UCLE, MSR_VR, MSR_VSX,
};
use crate::spr::*;
use crate::state::CpuState;
use crate::tlb::{tlbncfg, tlbncfg_entries, TlbKind, TlbLayout, TLBNCFG_AVAIL, TLBNCFG_IPROT};
use crate::vectors;

type Build = Result<(), CatalogDefect>;

/*
 * 40x line.
 */

fn build_401(state: &mut CpuState) -> Build {
    groups::family_40x(state)?;
    groups::family_401_403(state)?;
    groups::family_401(state)?;
    state.vectors = vectors::layout_40x_real();
    Ok(())
}

fn build_401x2(state: &mut CpuState) -> Build {
    groups::family_40x(state)?;
    groups::family_401_403(state)?;
    groups::family_401x2(state)?;
    groups::compress_401(state)?;
    state.tlb = TlbLayout::unified(TlbKind::Embedded, 64, 1);
    state.vectors = vectors::layout_40x_mmu();
    Ok(())
}

// The 401x3 translates but keeps its TLB geometry unpublished.
fn build_401x3(state: &mut CpuState) -> Build {
    groups::family_40x(state)?;
    groups::family_401_403(state)?;
    groups::family_401x2(state)?;
    groups::compress_401(state)?;
    state.vectors = vectors::layout_40x_mmu();
    Ok(())
}

fn build_403(state: &mut CpuState) -> Build {
    groups::family_40x(state)?;
    groups::family_401_403(state)?;
    groups::family_403(state)?;
    groups::pbr_403(state)?;
    state.vectors = vectors::layout_40x_real();
    Ok(())
}

fn build_403gcx(state: &mut CpuState) -> Build {
    groups::family_40x(state)?;
    groups::family_401_403(state)?;
    groups::family_403(state)?;
    groups::pbr_403(state)?;
    groups::mmu_403(state)?;
    groups::bus_control_40x(state)?;
    state.tlb = TlbLayout::unified(TlbKind::Embedded, 64, 1);
    state.vectors = vectors::layout_40x_mmu();
    Ok(())
}

fn build_405(state: &mut CpuState) -> Build {
    groups::timebase(state)?;
    groups::family_40x(state)?;
    groups::family_405(state)?;
    groups::bus_control_40x(state)?;
    state.tlb = TlbLayout::unified(TlbKind::Embedded, 64, 1);
    state.vectors = vectors::layout_40x_mmu();
    Ok(())
}

/*
 * 440 line.
 */

fn build_440_base(state: &mut CpuState) -> Build {
    groups::timebase(state)?;
    groups::booke(state, 0xFFFF)?;
    groups::family_440(state)?;
    groups::usprgh(state)?;
    groups::misc_440(state)?;
    state.tlb = TlbLayout::unified(TlbKind::Embedded, 64, 1);
    state.vectors = vectors::layout_booke();
    Ok(())
}

fn build_440ep(state: &mut CpuState) -> Build {
    build_440_base(state)?;
    groups::unimplemented(state, SPR_BOOKE_MCSR, "MCSR")?;
    groups::unimplemented(state, SPR_BOOKE_MCSRR0, "MCSRR0")?;
    groups::unimplemented(state, SPR_BOOKE_MCSRR1, "MCSRR1")?;
    groups::unimplemented(state, SPR_440_CCR1, "CCR1")
}

fn build_440gp(state: &mut CpuState) -> Build {
    build_440_base(state)
}

/*
 * RCPU and PowerQUICC.
 */

fn build_mpc5xx(state: &mut CpuState) -> Build {
    groups::timebase(state)?;
    groups::family_5xx_8xx(state)?;
    groups::family_5xx(state)?;
    state.vectors = vectors::layout_mpc5xx();
    Ok(())
}

fn build_mpc8xx(state: &mut CpuState) -> Build {
    groups::timebase(state)?;
    groups::family_5xx_8xx(state)?;
    groups::family_8xx(state)?;
    state.vectors = vectors::layout_mpc8xx();
    Ok(())
}

/*
 * G2 and the e-series embedded cores.
 */

fn build_g2(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::sprgs_high(state)?;
    groups::family_g2(state)?;
    groups::timebase(state)?;
    groups::unimplemented(state, SPR_EAR, "EAR")?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::unimplemented(state, SPR_HID2, "HID2")?;
    groups::low_bats(state)?;
    groups::high_bats(state)?;
    groups::soft_tlb_6xx(state, 64, 2)?;
    state.vectors = vectors::layout_g2();
    Ok(())
}

fn build_e200(state: &mut CpuState) -> Build {
    groups::timebase(state)?;
    groups::booke(state, 0x0000_0007_0000_FFFF)?;
    groups::spefscr(state)?;
    groups::booke206(state, 0x5D, 0)?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::unimplemented(state, SPR_EXXX_ALTCTXCR, "ALTCTXCR")?;
    groups::unimplemented(state, SPR_EXXX_BUCSR, "BUCSR")?;
    groups::unimplemented(state, SPR_EXXX_CTXCR, "CTXCR")?;
    groups::unimplemented(state, SPR_EXXX_DBCNT, "DBCNT")?;
    groups::unimplemented(state, SPR_EXXX_DBCR3, "DBCR3")?;
    groups::l1_cache_geometry(state, SPR_EXXX_L1CFG0, "L1CFG0", 0)?;
    groups::unimplemented(state, SPR_EXXX_L1CSR0, "L1CSR0")?;
    groups::unimplemented(state, SPR_EXXX_L1FINV0, "L1FINV0")?;
    groups::unimplemented(state, SPR_BOOKE_TLB0CFG, "TLB0CFG")?;
    groups::unimplemented(state, SPR_BOOKE_TLB1CFG, "TLB1CFG")?;
    groups::unimplemented(state, SPR_BOOKE_IAC3, "IAC3")?;
    groups::unimplemented(state, SPR_BOOKE_IAC4, "IAC4")?;
    groups::unimplemented(state, SPR_MMUCSR0, "MMUCSR0")?;
    state.tlb = TlbLayout::unified(TlbKind::Embedded, 64, 1);
    state.vectors = vectors::layout_e200(0xFFFF_0000);
    Ok(())
}

fn build_e300(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_603(state)?;
    groups::timebase(state)?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::unimplemented(state, SPR_HID2, "HID2")?;
    groups::unimplemented(state, SPR_DABR, "DABR")?;
    groups::unimplemented(state, SPR_DABR2, "DABR2")?;
    groups::unimplemented(state, SPR_IABR2, "IABR2")?;
    groups::unimplemented(state, SPR_IBCR, "IBCR")?;
    groups::unimplemented(state, SPR_DBCR, "DBCR")?;
    groups::low_bats(state)?;
    groups::high_bats(state)?;
    groups::soft_tlb_6xx(state, 64, 2)?;
    state.vectors = vectors::layout_603();
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum E500 {
    V1,
    V2,
    Mc,
    E5500,
    E6500,
}

fn build_e500(state: &mut CpuState, version: E500) -> Build {
    groups::timebase(state)?;
    let ivor_mask = match version {
        E500::V1 | E500::V2 => 0x0000_000F_0000_FFFF,
        E500::Mc | E500::E5500 => 0x0000_03FE_0000_FFFF,
        E500::E6500 => 0x0000_03FF_0000_FFFF,
    };
    groups::booke(state, ivor_mask)?;
    groups::usprg3(state)?;
    groups::pir_booke(state)?;
    groups::spefscr(state)?;
    state.nb_pids = if version == E500::E6500 { 1 } else { 3 };
    let mut l1cfg0: u32 = 0x3800 | 0x0020;
    let mut l1cfg1: u32 = 0x3800 | 0x0020;
    match version {
        E500::V1 => {
            state.tlbncfg[0] = tlbncfg(2, 1, 1, 0, 256);
            state.tlbncfg[1] = tlbncfg(16, 1, 9, TLBNCFG_AVAIL | TLBNCFG_IPROT, 16);
        }
        E500::V2 => {
            state.tlbncfg[0] = tlbncfg(4, 1, 1, 0, 512);
            state.tlbncfg[1] = tlbncfg(16, 1, 12, TLBNCFG_AVAIL | TLBNCFG_IPROT, 16);
        }
        E500::Mc | E500::E5500 => {
            state.tlbncfg[0] = tlbncfg(4, 1, 1, 0, 512);
            state.tlbncfg[1] = tlbncfg(64, 1, 12, TLBNCFG_AVAIL | TLBNCFG_IPROT, 64);
        }
        E500::E6500 => {
            state.mmucfg = 0x0651_0B45;
            state.tlbncfg[0] = 0x0805_2400;
            state.tlbncfg[1] = 0x4002_8040;
        }
    }
    match version {
        E500::V1 | E500::V2 => {}
        E500::Mc | E500::E5500 => {
            state.dcache_line_size = 64;
            state.icache_line_size = 64;
            l1cfg0 |= 0x0100_0000;
            l1cfg1 |= 0x0100_0000;
        }
        E500::E6500 => {
            l1cfg0 |= 0x00F8_3820;
            l1cfg1 |= 0x00B8_3820;
        }
    }
    groups::booke206(state, 0xDF, 2)?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::unimplemented(state, SPR_EXXX_BBEAR, "BBEAR")?;
    groups::unimplemented(state, SPR_EXXX_BBTAR, "BBTAR")?;
    groups::unimplemented(state, SPR_EXXX_MCAR, "MCAR")?;
    groups::unimplemented(state, SPR_BOOKE_MCSR, "MCSR")?;
    groups::unimplemented(state, SPR_EXXX_NPIDR, "NPIDR")?;
    groups::unimplemented(state, SPR_EXXX_BUCSR, "BUCSR")?;
    groups::l1_cache_geometry(state, SPR_EXXX_L1CFG0, "L1CFG0", u64::from(l1cfg0))?;
    groups::l1_cache_geometry(state, SPR_EXXX_L1CFG1, "L1CFG1", u64::from(l1cfg1))?;
    groups::l1csr0(state)?;
    groups::l1csr1(state)?;
    if version != E500::V1 && version != E500::V2 {
        groups::l2csr0(state)?;
    }
    groups::unimplemented(state, SPR_BOOKE_MCSRR0, "MCSRR0")?;
    groups::unimplemented(state, SPR_BOOKE_MCSRR1, "MCSRR1")?;
    groups::mmucsr0(state)?;
    groups::unimplemented_no_write(state, SPR_BOOKE_EPR, "EPR")?;
    let mut ivpr_mask: u32 = 0xFFFF_0000;
    if version == E500::E5500 || version == E500::E6500 {
        groups::unimplemented(state, SPR_BOOKE_EPCR, "EPCR")?;
        groups::mas73(state)?;
        ivpr_mask = !0xFFFF;
    }
    if version == E500::E6500 {
        groups::unimplemented_no_write(state, SPR_TIR, "TIR")?;
        groups::unimplemented_no_write(state, SPR_BOOKE_TLB0PS, "TLB0PS")?;
        groups::unimplemented_no_write(state, SPR_BOOKE_TLB1PS, "TLB1PS")?;
    }
    let entries = tlbncfg_entries(state.tlbncfg[0]) + tlbncfg_entries(state.tlbncfg[1]);
    state.tlb = TlbLayout::unified(TlbKind::Mas, entries, 2);
    state.vectors = vectors::layout_e200(ivpr_mask);
    Ok(())
}

fn build_e500v1(state: &mut CpuState) -> Build {
    build_e500(state, E500::V1)
}

fn build_e500v2(state: &mut CpuState) -> Build {
    build_e500(state, E500::V2)
}

fn build_e500mc(state: &mut CpuState) -> Build {
    build_e500(state, E500::Mc)
}

fn build_e5500(state: &mut CpuState) -> Build {
    build_e500(state, E500::E5500)
}

fn build_e6500(state: &mut CpuState) -> Build {
    build_e500(state, E500::E6500)
}

/*
 * Classic 32-bit parts.
 */

fn build_601(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_601(state)?;
    groups::hid0_601(state)?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::unimplemented(state, SPR_601_HID2, "HID2")?;
    groups::unimplemented(state, SPR_601_HID5, "HID5")?;
    state.dcache_line_size = 32;
    state.icache_line_size = 64;
    state.vectors = vectors::layout_601();
    Ok(())
}

fn build_601v(state: &mut CpuState) -> Build {
    build_601(state)?;
    groups::unimplemented(state, SPR_601_HID15, "HID15")
}

fn build_602(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_602(state)?;
    groups::timebase(state)?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::low_bats(state)?;
    groups::soft_tlb_6xx(state, 64, 2)?;
    state.vectors = vectors::layout_602();
    Ok(())
}

fn build_603(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_603(state)?;
    groups::timebase(state)?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::low_bats(state)?;
    groups::soft_tlb_6xx(state, 64, 2)?;
    state.vectors = vectors::layout_603();
    Ok(())
}

fn build_604(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_604(state)?;
    groups::timebase(state)?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::low_bats(state)?;
    state.vectors = vectors::layout_604();
    Ok(())
}

fn build_604e(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_604(state)?;
    groups::unimplemented(state, SPR_7XX_MMCR1, "MMCR1")?;
    groups::unimplemented(state, SPR_7XX_PMC3, "PMC3")?;
    groups::unimplemented(state, SPR_7XX_PMC4, "PMC4")?;
    groups::timebase(state)?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::low_bats(state)?;
    state.vectors = vectors::layout_604();
    Ok(())
}

fn build_740(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::timebase(state)?;
    groups::thrm(state)?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::low_bats(state)?;
    state.vectors = vectors::layout_7x0();
    Ok(())
}

fn build_750(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::unimplemented_write_nop(state, SPR_L2CR, "L2CR")?;
    groups::timebase(state)?;
    groups::thrm(state)?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::low_bats(state)?;
    state.vectors = vectors::layout_7x0();
    Ok(())
}

fn build_750cl(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::unimplemented_write_nop(state, SPR_L2CR, "L2CR")?;
    groups::timebase(state)?;
    groups::unimplemented(state, SPR_THRM1, "THRM1")?;
    groups::unimplemented(state, SPR_THRM2, "THRM2")?;
    groups::unimplemented(state, SPR_THRM3, "THRM3")?;
    groups::unimplemented(state, SPR_750_TDCL, "TDCL")?;
    groups::unimplemented(state, SPR_750_TDCH, "TDCH")?;
    groups::unimplemented(state, SPR_750_WPAR, "WPAR")?;
    groups::unimplemented(state, SPR_750_DMAL, "DMAL")?;
    groups::unimplemented(state, SPR_750_DMAU, "DMAU")?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::unimplemented(state, SPR_750CL_HID2, "HID2")?;
    groups::unimplemented(state, SPR_750CL_HID4, "HID4")?;
    groups::unimplemented(state, SPR_750_GQR0, "GQR0")?;
    groups::unimplemented(state, SPR_750_GQR1, "GQR1")?;
    groups::unimplemented(state, SPR_750_GQR2, "GQR2")?;
    groups::unimplemented(state, SPR_750_GQR3, "GQR3")?;
    groups::unimplemented(state, SPR_750_GQR4, "GQR4")?;
    groups::unimplemented(state, SPR_750_GQR5, "GQR5")?;
    groups::unimplemented(state, SPR_750_GQR6, "GQR6")?;
    groups::unimplemented(state, SPR_750_GQR7, "GQR7")?;
    groups::low_bats(state)?;
    groups::high_bats(state)?;
    state.vectors = vectors::layout_750cl();
    Ok(())
}

fn build_750cx(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::unimplemented_write_nop(state, SPR_L2CR, "L2CR")?;
    groups::timebase(state)?;
    groups::thrm(state)?;
    groups::unimplemented(state, SPR_SDA, "SDA")?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::low_bats(state)?;
    groups::high_bats(state)?;
    state.vectors = vectors::layout_750cx();
    Ok(())
}

fn build_750fx(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::unimplemented_write_nop(state, SPR_L2CR, "L2CR")?;
    groups::timebase(state)?;
    groups::thrm(state)?;
    groups::unimplemented(state, SPR_750_THRM4, "THRM4")?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::unimplemented(state, SPR_750FX_HID2, "HID2")?;
    groups::low_bats(state)?;
    groups::high_bats(state)?;
    state.vectors = vectors::layout_7x0();
    Ok(())
}

fn build_745(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::sprgs_high(state)?;
    groups::timebase(state)?;
    groups::thrm(state)?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::unimplemented(state, SPR_HID2, "HID2")?;
    groups::low_bats(state)?;
    groups::high_bats(state)?;
    groups::soft_tlb_6xx(state, 64, 2)?;
    state.vectors = vectors::layout_7x5();
    Ok(())
}

fn build_755(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::sprgs_high(state)?;
    groups::unimplemented_write_nop(state, SPR_L2CR, "L2CR")?;
    groups::unimplemented(state, SPR_L2PMCR, "L2PMCR")?;
    groups::timebase(state)?;
    groups::thrm(state)?;
    groups::unimplemented(state, SPR_HID0, "HID0")?;
    groups::unimplemented(state, SPR_HID1, "HID1")?;
    groups::unimplemented(state, SPR_HID2, "HID2")?;
    groups::low_bats(state)?;
    groups::high_bats(state)?;
    groups::soft_tlb_6xx(state, 64, 2)?;
    state.vectors = vectors::layout_7x5();
    Ok(())
}

/*
 * 74xx (G4) line.
 */

fn build_7400(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::timebase(state)?;
    groups::family_74xx(state)?;
    groups::unimplemented_ureg(state, SPR_UBAMR, "UBAMR")?;
    groups::unimplemented(state, SPR_MSSCR1, "MSSCR1")?;
    groups::thrm(state)?;
    groups::low_bats(state)?;
    state.vectors = vectors::layout_7400();
    Ok(())
}

fn build_7410(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::timebase(state)?;
    groups::family_74xx(state)?;
    groups::unimplemented_ureg(state, SPR_UBAMR, "UBAMR")?;
    groups::unimplemented(state, SPR_L2PMCR, "L2PMCR")?;
    groups::unimplemented(state, SPR_LDSTDB, "LDSTDB")?;
    groups::thrm(state)?;
    groups::low_bats(state)?;
    state.vectors = vectors::layout_7400();
    Ok(())
}

fn build_74xx_pmu5_6(state: &mut CpuState) -> Build {
    groups::unimplemented(state, SPR_LDSTCR, "LDSTCR")?;
    groups::unimplemented(state, SPR_ICTRL, "ICTRL")?;
    groups::unimplemented(state, SPR_MSSSR0, "MSSSR0")?;
    groups::unimplemented(state, SPR_7XX_PMC5, "PMC5")?;
    groups::unimplemented_ureg(state, SPR_7XX_UPMC5, "UPMC5")?;
    groups::unimplemented(state, SPR_7XX_PMC6, "PMC6")?;
    groups::unimplemented_ureg(state, SPR_7XX_UPMC6, "UPMC6")
}

fn build_74xx_sprg_mirrors(state: &mut CpuState) -> Build {
    groups::unimplemented(state, SPR_SPRG4, "SPRG4")?;
    groups::unimplemented_ureg(state, SPR_USPRG4, "USPRG4")?;
    groups::unimplemented(state, SPR_SPRG5, "SPRG5")?;
    groups::unimplemented_ureg(state, SPR_USPRG5, "USPRG5")?;
    groups::unimplemented(state, SPR_SPRG6, "SPRG6")?;
    groups::unimplemented_ureg(state, SPR_USPRG6, "USPRG6")?;
    groups::unimplemented(state, SPR_SPRG7, "SPRG7")?;
    groups::unimplemented_ureg(state, SPR_USPRG7, "USPRG7")
}

fn build_7440(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::timebase(state)?;
    groups::family_74xx(state)?;
    groups::unimplemented_ureg(state, SPR_UBAMR, "UBAMR")?;
    build_74xx_pmu5_6(state)?;
    groups::low_bats(state)?;
    groups::soft_tlb_74xx(state, 128, 2)?;
    state.vectors = vectors::layout_7450();
    Ok(())
}

fn build_7450(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::timebase(state)?;
    groups::family_74xx(state)?;
    groups::unimplemented_ureg(state, SPR_UBAMR, "UBAMR")?;
    groups::l3_ctrl(state)?;
    groups::unimplemented(state, SPR_L3ITCR1, "L3ITCR1")?;
    groups::unimplemented(state, SPR_L3ITCR2, "L3ITCR2")?;
    groups::unimplemented(state, SPR_L3ITCR3, "L3ITCR3")?;
    groups::unimplemented(state, SPR_L3OHCR, "L3OHCR")?;
    build_74xx_pmu5_6(state)?;
    groups::low_bats(state)?;
    groups::soft_tlb_74xx(state, 128, 2)?;
    state.vectors = vectors::layout_7450();
    Ok(())
}

fn build_7445(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::timebase(state)?;
    groups::family_74xx(state)?;
    build_74xx_pmu5_6(state)?;
    build_74xx_sprg_mirrors(state)?;
    groups::low_bats(state)?;
    groups::high_bats(state)?;
    groups::soft_tlb_74xx(state, 128, 2)?;
    state.vectors = vectors::layout_7450();
    Ok(())
}

fn build_7455(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::timebase(state)?;
    groups::family_74xx(state)?;
    groups::l3_ctrl(state)?;
    build_74xx_pmu5_6(state)?;
    build_74xx_sprg_mirrors(state)?;
    groups::low_bats(state)?;
    groups::high_bats(state)?;
    groups::soft_tlb_74xx(state, 128, 2)?;
    state.vectors = vectors::layout_7450();
    Ok(())
}

fn build_7457(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::timebase(state)?;
    groups::family_74xx(state)?;
    groups::l3_ctrl(state)?;
    groups::unimplemented(state, SPR_L3ITCR1, "L3ITCR1")?;
    groups::unimplemented(state, SPR_L3ITCR2, "L3ITCR2")?;
    groups::unimplemented(state, SPR_L3ITCR3, "L3ITCR3")?;
    groups::unimplemented(state, SPR_L3OHCR, "L3OHCR")?;
    build_74xx_pmu5_6(state)?;
    build_74xx_sprg_mirrors(state)?;
    groups::low_bats(state)?;
    groups::high_bats(state)?;
    groups::soft_tlb_74xx(state, 128, 2)?;
    state.vectors = vectors::layout_7450();
    Ok(())
}

fn build_e600(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::sdr1(state)?;
    groups::family_7xx(state)?;
    groups::timebase(state)?;
    groups::family_74xx(state)?;
    groups::unimplemented_ureg(state, SPR_LDSTCR, "LDSTCR")?;
    groups::unimplemented_ureg(state, SPR_UBAMR, "UBAMR")?;
    groups::unimplemented(state, SPR_ICTRL, "ICTRL")?;
    groups::unimplemented(state, SPR_MSSSR0, "MSSSR0")?;
    groups::unimplemented(state, SPR_7XX_PMC5, "PMC5")?;
    groups::unimplemented(state, SPR_7XX_UPMC5, "UPMC5")?;
    groups::unimplemented(state, SPR_7XX_PMC6, "PMC6")?;
    groups::unimplemented(state, SPR_7XX_UPMC6, "UPMC6")?;
    build_74xx_sprg_mirrors(state)?;
    groups::low_bats(state)?;
    groups::high_bats(state)?;
    groups::soft_tlb_74xx(state, 128, 2)?;
    state.vectors = vectors::layout_7450();
    Ok(())
}

/*
 * 64-bit server line.
 */

fn build_book3s_common(state: &mut CpuState) -> Build {
    groups::exception_common(state)?;
    groups::timebase(state)?;
    groups::usprg3(state)?;
    groups::altivec_book3s(state)?;
    groups::pmu_book3s_sup(state)?;
    groups::pmu_book3s_user(state)?;
    groups::ctrl_book3s(state)?;
    state.dcache_line_size = 128;
    state.icache_line_size = 128;
    Ok(())
}

fn build_970(state: &mut CpuState) -> Build {
    build_book3s_common(state)?;
    groups::sdr1(state)?;
    groups::dbg_book3s(state)?;
    groups::hid_970(state)?;
    groups::hior_970(state)?;
    groups::low_bats(state)?;
    groups::pmu_970_sup(state)?;
    groups::pmu_970_user(state)?;
    groups::lpar_970(state)?;
    groups::dbg_970(state)?;
    state.vectors = vectors::layout_970();
    Ok(())
}

fn build_power5plus(state: &mut CpuState) -> Build {
    build_book3s_common(state)?;
    groups::sdr1(state)?;
    groups::dbg_book3s(state)?;
    groups::hid_970(state)?;
    groups::hior_970(state)?;
    groups::low_bats(state)?;
    groups::common_power5p(state)?;
    groups::lpar_power5p(state)?;
    groups::ear_power5p(state)?;
    groups::tb_power5p(state)?;
    state.vectors = vectors::layout_970();
    Ok(())
}

fn build_power7(state: &mut CpuState) -> Build {
    build_book3s_common(state)?;
    groups::sdr1(state)?;
    groups::dbg_book3s(state)?;
    groups::ids_book3s(state)?;
    groups::rmor(state)?;
    groups::amr(state)?;
    groups::purr_book3s(state)?;
    groups::common_power5p(state)?;
    groups::lpar_power5p(state)?;
    groups::ear_power5p(state)?;
    groups::tb_power5p(state)?;
    groups::common_power6(state)?;
    groups::dbg_power6(state)?;
    groups::book4_power7(state)?;
    state.vectors = vectors::layout_power7();
    Ok(())
}

fn build_power8(state: &mut CpuState) -> Build {
    build_book3s_common(state)?;
    groups::sdr1(state)?;
    groups::dbg_book3s_207(state)?;
    groups::ids_book3s(state)?;
    groups::rmor(state)?;
    groups::amr(state)?;
    groups::iamr(state)?;
    groups::purr_book3s(state)?;
    groups::common_power5p(state)?;
    groups::lpar_power5p(state)?;
    groups::ear_power5p(state)?;
    groups::tb_power5p(state)?;
    groups::common_power6(state)?;
    groups::dbg_power6(state)?;
    groups::tar_power8(state)?;
    groups::ids_power8(state)?;
    groups::ebb_power8(state)?;
    groups::fscr_power8(state)?;
    groups::pmu_power8_sup(state)?;
    groups::pmu_power8_user(state)?;
    groups::tm_power8(state)?;
    groups::pspb_power8(state)?;
    groups::dpdes_power8(state)?;
    groups::vtb(state)?;
    groups::ic_power8(state)?;
    groups::book4_power8(state)?;
    groups::rpr_power8(state)?;
    state.vectors = vectors::layout_power8();
    Ok(())
}

fn build_power9(state: &mut CpuState) -> Build {
    build_book3s_common(state)?;
    groups::dbg_book3s_207(state)?;
    groups::ids_book3s(state)?;
    groups::amr(state)?;
    groups::iamr(state)?;
    groups::purr_book3s(state)?;
    groups::common_power5p(state)?;
    groups::lpar_power5p(state)?;
    groups::ear_power5p(state)?;
    groups::tb_power5p(state)?;
    groups::common_power6(state)?;
    groups::dbg_power6(state)?;
    groups::tar_power8(state)?;
    groups::ids_power8(state)?;
    groups::ebb_power8(state)?;
    groups::fscr_power8(state)?;
    groups::pmu_power8_sup(state)?;
    groups::pmu_power8_user(state)?;
    groups::tm_power8(state)?;
    groups::pspb_power8(state)?;
    groups::dpdes_power8(state)?;
    groups::vtb(state)?;
    groups::ic_power8(state)?;
    groups::book4_power8(state)?;
    groups::rpr_power8(state)?;
    groups::mmu_power9(state)?;
    groups::tidr(state)?;
    groups::psscr(state)?;
    state.vectors = vectors::layout_power9();
    Ok(())
}

fn build_power10(state: &mut CpuState) -> Build {
    build_book3s_common(state)?;
    groups::dbg_book3s_207(state)?;
    groups::ids_book3s(state)?;
    groups::amr(state)?;
    groups::iamr(state)?;
    groups::purr_book3s(state)?;
    groups::common_power5p(state)?;
    groups::lpar_power5p(state)?;
    groups::ear_power5p(state)?;
    groups::common_power6(state)?;
    groups::dbg_power6(state)?;
    groups::tar_power8(state)?;
    groups::ids_power8(state)?;
    groups::ebb_power8(state)?;
    groups::fscr_power8(state)?;
    groups::pmu_power8_sup(state)?;
    groups::pmu_power8_user(state)?;
    groups::tm_power8(state)?;
    groups::pspb_power8(state)?;
    groups::vtb(state)?;
    groups::ic_power8(state)?;
    groups::book4_power8(state)?;
    groups::rpr_power8(state)?;
    groups::mmu_power9(state)?;
    groups::psscr(state)?;
    state.vectors = vectors::layout_power9();
    Ok(())
}

/*
 * Family descriptors.
 */

static FAM_401: Family = Family {
    name: "401",
    desc: "PowerPC 401",
    msr_mask: msr_bit(MSR_KEY)
        | msr_bit(MSR_POW)
        | msr_bit(MSR_CE)
        | msr_bit(MSR_ILE)
        | msr_bit(MSR_EE)
        | msr_bit(MSR_PR)
        | msr_bit(MSR_ME)
        | msr_bit(MSR_DE)
        | msr_bit(MSR_LE),
    flags: ModelFlags(ModelFlags::CE.0 | ModelFlags::DE.0 | ModelFlags::BUS_CLK.0),
    mmu: MmuModel::Real,
    excp: ExcpModel::E40x,
    bus: BusModel::Ppc401,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_401,
};

const MSR_MASK_401X2: u64 = msr_bit(20)
    | msr_bit(MSR_KEY)
    | msr_bit(MSR_POW)
    | msr_bit(MSR_CE)
    | msr_bit(MSR_ILE)
    | msr_bit(MSR_EE)
    | msr_bit(MSR_PR)
    | msr_bit(MSR_ME)
    | msr_bit(MSR_DE)
    | msr_bit(MSR_IR)
    | msr_bit(MSR_DR)
    | msr_bit(MSR_LE);

static FAM_401X2: Family = Family {
    name: "401x2",
    desc: "PowerPC 401x2",
    msr_mask: MSR_MASK_401X2,
    flags: ModelFlags(ModelFlags::CE.0 | ModelFlags::DE.0 | ModelFlags::BUS_CLK.0),
    mmu: MmuModel::Soft4xxZ,
    excp: ExcpModel::E40x,
    bus: BusModel::Ppc401,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_401x2,
};

static FAM_401X3: Family = Family {
    name: "401x3",
    desc: "PowerPC 401x3",
    msr_mask: msr_bit(20)
        | msr_bit(MSR_KEY)
        | msr_bit(MSR_POW)
        | msr_bit(MSR_CE)
        | msr_bit(MSR_ILE)
        | msr_bit(MSR_EE)
        | msr_bit(MSR_PR)
        | msr_bit(MSR_ME)
        | msr_bit(MSR_DWE)
        | msr_bit(MSR_DE)
        | msr_bit(MSR_IR)
        | msr_bit(MSR_DR)
        | msr_bit(MSR_LE),
    flags: ModelFlags(ModelFlags::CE.0 | ModelFlags::DE.0 | ModelFlags::BUS_CLK.0),
    mmu: MmuModel::Soft4xxZ,
    excp: ExcpModel::E40x,
    bus: BusModel::Ppc401,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_401x3,
};

static FAM_IOP480: Family = Family {
    name: "iop480",
    desc: "IOP480",
    msr_mask: MSR_MASK_401X2,
    flags: ModelFlags(ModelFlags::CE.0 | ModelFlags::DE.0 | ModelFlags::BUS_CLK.0),
    mmu: MmuModel::Soft4xxZ,
    excp: ExcpModel::E40x,
    bus: BusModel::Ppc401,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_401x2,
};

const MSR_MASK_403: u64 = msr_bit(MSR_POW)
    | msr_bit(MSR_CE)
    | msr_bit(MSR_ILE)
    | msr_bit(MSR_EE)
    | msr_bit(MSR_PR)
    | msr_bit(MSR_ME)
    | msr_bit(MSR_PE)
    | msr_bit(MSR_PX)
    | msr_bit(MSR_LE);

static FAM_403: Family = Family {
    name: "403",
    desc: "PowerPC 403",
    msr_mask: MSR_MASK_403,
    flags: ModelFlags(ModelFlags::CE.0 | ModelFlags::PX.0 | ModelFlags::BUS_CLK.0),
    mmu: MmuModel::Real,
    excp: ExcpModel::E40x,
    bus: BusModel::Ppc401,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_403,
};

static FAM_403GCX: Family = Family {
    name: "403gcx",
    desc: "PowerPC 403 GCX",
    msr_mask: MSR_MASK_403,
    flags: ModelFlags(ModelFlags::CE.0 | ModelFlags::PX.0 | ModelFlags::BUS_CLK.0),
    mmu: MmuModel::Soft4xxZ,
    excp: ExcpModel::E40x,
    bus: BusModel::Ppc401,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_403gcx,
};

static FAM_405: Family = Family {
    name: "405",
    desc: "PowerPC 405",
    msr_mask: msr_bit(MSR_POW)
        | msr_bit(MSR_CE)
        | msr_bit(MSR_EE)
        | msr_bit(MSR_PR)
        | msr_bit(MSR_FP)
        | msr_bit(MSR_DWE)
        | msr_bit(MSR_DE)
        | msr_bit(MSR_IR)
        | msr_bit(MSR_DR),
    flags: ModelFlags(
        ModelFlags::CE.0 | ModelFlags::DWE.0 | ModelFlags::DE.0 | ModelFlags::BUS_CLK.0,
    ),
    mmu: MmuModel::Soft4xx,
    excp: ExcpModel::E40x,
    bus: BusModel::Ppc405,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_405,
};

const MSR_MASK_440: u64 = msr_bit(MSR_POW)
    | msr_bit(MSR_CE)
    | msr_bit(MSR_EE)
    | msr_bit(MSR_PR)
    | msr_bit(MSR_FP)
    | msr_bit(MSR_ME)
    | msr_bit(MSR_FE0)
    | msr_bit(MSR_DWE)
    | msr_bit(MSR_DE)
    | msr_bit(MSR_FE1)
    | msr_bit(MSR_IR)
    | msr_bit(MSR_DR);

const FLAGS_440: ModelFlags = ModelFlags(
    ModelFlags::CE.0 | ModelFlags::DWE.0 | ModelFlags::DE.0 | ModelFlags::BUS_CLK.0,
);

static FAM_440EP: Family = Family {
    name: "440ep",
    desc: "PowerPC 440 EP",
    msr_mask: MSR_MASK_440,
    flags: FLAGS_440,
    mmu: MmuModel::BookE,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_440ep,
};

static FAM_460EX: Family = Family {
    name: "460ex",
    desc: "PowerPC 460 EX",
    msr_mask: MSR_MASK_440,
    flags: FLAGS_440,
    mmu: MmuModel::BookE,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_440ep,
};

static FAM_440GP: Family = Family {
    name: "440gp",
    desc: "PowerPC 440 GP",
    msr_mask: MSR_MASK_440,
    flags: FLAGS_440,
    mmu: MmuModel::BookE,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_440gp,
};

static FAM_440X4: Family = Family {
    name: "440x4",
    desc: "PowerPC 440x4",
    msr_mask: MSR_MASK_440,
    flags: FLAGS_440,
    mmu: MmuModel::BookE,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_440gp,
};

static FAM_440X5: Family = Family {
    name: "440x5",
    desc: "PowerPC 440x5",
    msr_mask: MSR_MASK_440,
    flags: FLAGS_440,
    mmu: MmuModel::BookE,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_440ep,
};

static FAM_440X5_DFPU: Family = Family {
    name: "440x5wdfpu",
    desc: "PowerPC 440x5 with double precision FPU",
    msr_mask: MSR_MASK_440,
    flags: FLAGS_440,
    mmu: MmuModel::BookE,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_440ep,
};

static FAM_MPC5XX: Family = Family {
    name: "mpc5xx",
    desc: "Freescale 5xx cores (aka RCPU)",
    msr_mask: msr_bit(MSR_ILE)
        | msr_bit(MSR_EE)
        | msr_bit(MSR_PR)
        | msr_bit(MSR_FP)
        | msr_bit(MSR_ME)
        | msr_bit(MSR_FE0)
        | msr_bit(MSR_SE)
        | msr_bit(MSR_DE)
        | msr_bit(MSR_FE1)
        | msr_bit(MSR_EP)
        | msr_bit(MSR_RI)
        | msr_bit(MSR_LE),
    flags: ModelFlags(ModelFlags::SE.0 | ModelFlags::BE.0 | ModelFlags::BUS_CLK.0),
    mmu: MmuModel::Real,
    excp: ExcpModel::E603,
    bus: BusModel::Rcpu,
    check_pow: CheckPow::Never,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_mpc5xx,
};

static FAM_MPC8XX: Family = Family {
    name: "mpc8xx",
    desc: "Freescale 8xx cores (aka PowerQUICC)",
    msr_mask: msr_bit(MSR_ILE)
        | msr_bit(MSR_EE)
        | msr_bit(MSR_PR)
        | msr_bit(MSR_FP)
        | msr_bit(MSR_ME)
        | msr_bit(MSR_SE)
        | msr_bit(MSR_DE)
        | msr_bit(MSR_EP)
        | msr_bit(MSR_IR)
        | msr_bit(MSR_DR)
        | msr_bit(MSR_RI)
        | msr_bit(MSR_LE),
    flags: ModelFlags(ModelFlags::SE.0 | ModelFlags::BE.0 | ModelFlags::BUS_CLK.0),
    mmu: MmuModel::Mpc8xx,
    excp: ExcpModel::E603,
    bus: BusModel::Rcpu,
    check_pow: CheckPow::Never,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_mpc8xx,
};

const MSR_MASK_G2: u64 = msr_bit(MSR_POW)
    | msr_bit(MSR_TGPR)
    | msr_bit(MSR_EE)
    | msr_bit(MSR_PR)
    | msr_bit(MSR_FP)
    | msr_bit(MSR_ME)
    | msr_bit(MSR_FE0)
    | msr_bit(MSR_SE)
    | msr_bit(MSR_DE)
    | msr_bit(MSR_FE1)
    | msr_bit(MSR_AL)
    | msr_bit(MSR_EP)
    | msr_bit(MSR_IR)
    | msr_bit(MSR_DR)
    | msr_bit(MSR_RI);

const FLAGS_603: ModelFlags = ModelFlags(
    ModelFlags::TGPR.0 | ModelFlags::SE.0 | ModelFlags::BE.0 | ModelFlags::BUS_CLK.0,
);

static FAM_G2: Family = Family {
    name: "g2",
    desc: "PowerPC G2",
    msr_mask: MSR_MASK_G2,
    flags: FLAGS_603,
    mmu: MmuModel::Soft6xx,
    excp: ExcpModel::G2,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_g2,
};

static FAM_G2LE: Family = Family {
    name: "g2le",
    desc: "PowerPC G2LE",
    msr_mask: MSR_MASK_G2 | msr_bit(MSR_ILE) | msr_bit(MSR_LE),
    flags: FLAGS_603,
    mmu: MmuModel::Soft6xx,
    excp: ExcpModel::G2,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_g2,
};

const MSR_MASK_E500V1: u64 = msr_bit(MSR_UCLE)
    | msr_bit(MSR_SPE)
    | msr_bit(MSR_POW)
    | msr_bit(MSR_CE)
    | msr_bit(MSR_EE)
    | msr_bit(MSR_PR)
    | msr_bit(MSR_FP)
    | msr_bit(MSR_ME)
    | msr_bit(MSR_FE0)
    | msr_bit(MSR_DWE)
    | msr_bit(MSR_DE)
    | msr_bit(MSR_FE1)
    | msr_bit(MSR_IR)
    | msr_bit(MSR_DR);

const FLAGS_E500: ModelFlags = ModelFlags(
    ModelFlags::SPE.0
        | ModelFlags::CE.0
        | ModelFlags::UBLE.0
        | ModelFlags::DE.0
        | ModelFlags::BUS_CLK.0,
);

static FAM_E200: Family = Family {
    name: "e200",
    desc: "e200 core",
    msr_mask: MSR_MASK_E500V1,
    flags: FLAGS_E500,
    mmu: MmuModel::BookE206,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_e200,
};

static FAM_E300: Family = Family {
    name: "e300",
    desc: "e300 core",
    msr_mask: MSR_MASK_G2 | msr_bit(MSR_ILE) | msr_bit(MSR_LE),
    flags: FLAGS_603,
    mmu: MmuModel::Soft6xx,
    excp: ExcpModel::E603,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_e300,
};

static FAM_E500V1: Family = Family {
    name: "e500v1",
    desc: "e500v1 core",
    msr_mask: MSR_MASK_E500V1,
    flags: FLAGS_E500,
    mmu: MmuModel::BookE206,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_e500v1,
};

static FAM_E500V2: Family = Family {
    name: "e500v2",
    desc: "e500v2 core",
    msr_mask: MSR_MASK_E500V1,
    flags: FLAGS_E500,
    mmu: MmuModel::BookE206,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_e500v2,
};

const MSR_MASK_E500MC: u64 = msr_bit(MSR_GS)
    | msr_bit(MSR_UCLE)
    | msr_bit(MSR_CE)
    | msr_bit(MSR_EE)
    | msr_bit(MSR_PR)
    | msr_bit(MSR_FP)
    | msr_bit(MSR_ME)
    | msr_bit(MSR_FE0)
    | msr_bit(MSR_DE)
    | msr_bit(MSR_FE1)
    | msr_bit(MSR_IR)
    | msr_bit(MSR_DR)
    | msr_bit(MSR_PX)
    | msr_bit(MSR_RI);

const FLAGS_E500MC: ModelFlags = ModelFlags(
    ModelFlags::CE.0 | ModelFlags::DE.0 | ModelFlags::PMM.0 | ModelFlags::BUS_CLK.0,
);

static FAM_E500MC: Family = Family {
    name: "e500mc",
    desc: "e500mc core",
    msr_mask: MSR_MASK_E500MC,
    flags: FLAGS_E500MC,
    mmu: MmuModel::BookE206,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Never,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_e500mc,
};

static FAM_E5500: Family = Family {
    name: "e5500",
    desc: "e5500 core",
    msr_mask: msr_bit(MSR_CM) | MSR_MASK_E500MC,
    flags: FLAGS_E500MC,
    mmu: MmuModel::BookE206,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Never,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_e5500,
};

static FAM_E6500: Family = Family {
    name: "e6500",
    desc: "e6500 core",
    msr_mask: msr_bit(MSR_CM) | msr_bit(MSR_VR) | MSR_MASK_E500MC,
    flags: ModelFlags(FLAGS_E500MC.0 | ModelFlags::VRE.0),
    mmu: MmuModel::BookE206,
    excp: ExcpModel::BookE,
    bus: BusModel::BookE,
    check_pow: CheckPow::Never,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_e6500,
};

const MSR_MASK_601: u64 = msr_bit(MSR_EE)
    | msr_bit(MSR_PR)
    | msr_bit(MSR_FP)
    | msr_bit(MSR_ME)
    | msr_bit(MSR_FE0)
    | msr_bit(MSR_SE)
    | msr_bit(MSR_FE1)
    | msr_bit(MSR_EP)
    | msr_bit(MSR_IR)
    | msr_bit(MSR_DR);

static FAM_601: Family = Family {
    name: "601",
    desc: "PowerPC 601",
    msr_mask: MSR_MASK_601,
    flags: ModelFlags(ModelFlags::SE.0 | ModelFlags::RTC_CLK.0),
    mmu: MmuModel::Model601,
    excp: ExcpModel::E601,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Never,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_601,
};

static FAM_601V: Family = Family {
    name: "601v",
    desc: "PowerPC 601v",
    msr_mask: MSR_MASK_601,
    flags: ModelFlags(ModelFlags::SE.0 | ModelFlags::RTC_CLK.0),
    mmu: MmuModel::Model601,
    excp: ExcpModel::E601,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Never,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_601v,
};

static FAM_602: Family = Family {
    name: "602",
    desc: "PowerPC 602",
    msr_mask: msr_bit(MSR_VSX)
        | msr_bit(MSR_SA)
        | msr_bit(MSR_POW)
        | msr_bit(MSR_TGPR)
        | msr_bit(MSR_ILE)
        | msr_bit(MSR_EE)
        | msr_bit(MSR_PR)
        | msr_bit(MSR_FP)
        | msr_bit(MSR_ME)
        | msr_bit(MSR_FE0)
        | msr_bit(MSR_SE)
        | msr_bit(MSR_DE)
        | msr_bit(MSR_FE1)
        | msr_bit(MSR_EP)
        | msr_bit(MSR_IR)
        | msr_bit(MSR_DR)
        | msr_bit(MSR_RI)
        | msr_bit(MSR_LE),
    flags: FLAGS_603,
    mmu: MmuModel::Soft6xx,
    excp: ExcpModel::E602,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_602,
};

const MSR_MASK_603: u64 = msr_bit(MSR_POW)
    | msr_bit(MSR_TGPR)
    | msr_bit(MSR_ILE)
    | msr_bit(MSR_EE)
    | msr_bit(MSR_PR)
    | msr_bit(MSR_FP)
    | msr_bit(MSR_ME)
    | msr_bit(MSR_FE0)
    | msr_bit(MSR_SE)
    | msr_bit(MSR_DE)
    | msr_bit(MSR_FE1)
    | msr_bit(MSR_EP)
    | msr_bit(MSR_IR)
    | msr_bit(MSR_DR)
    | msr_bit(MSR_RI)
    | msr_bit(MSR_LE);

static FAM_603: Family = Family {
    name: "603",
    desc: "PowerPC 603",
    msr_mask: MSR_MASK_603,
    flags: FLAGS_603,
    mmu: MmuModel::Soft6xx,
    excp: ExcpModel::E603,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_603,
};

static FAM_603E: Family = Family {
    name: "603e",
    desc: "PowerPC 603e",
    msr_mask: MSR_MASK_603,
    flags: FLAGS_603,
    mmu: MmuModel::Soft6xx,
    excp: ExcpModel::E603,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_603,
};

const MSR_MASK_604: u64 = msr_bit(MSR_POW)
    | msr_bit(MSR_ILE)
    | msr_bit(MSR_EE)
    | msr_bit(MSR_PR)
    | msr_bit(MSR_FP)
    | msr_bit(MSR_ME)
    | msr_bit(MSR_FE0)
    | msr_bit(MSR_SE)
    | msr_bit(MSR_DE)
    | msr_bit(MSR_FE1)
    | msr_bit(MSR_EP)
    | msr_bit(MSR_IR)
    | msr_bit(MSR_DR)
    | msr_bit(MSR_PMM)
    | msr_bit(MSR_RI)
    | msr_bit(MSR_LE);

const FLAGS_604: ModelFlags = ModelFlags(
    ModelFlags::SE.0 | ModelFlags::BE.0 | ModelFlags::PMM.0 | ModelFlags::BUS_CLK.0,
);

static FAM_604: Family = Family {
    name: "604",
    desc: "PowerPC 604",
    msr_mask: MSR_MASK_604,
    flags: FLAGS_604,
    mmu: MmuModel::Bat32,
    excp: ExcpModel::E604,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_604,
};

static FAM_604E: Family = Family {
    name: "604e",
    desc: "PowerPC 604E",
    msr_mask: MSR_MASK_604,
    flags: FLAGS_604,
    mmu: MmuModel::Bat32,
    excp: ExcpModel::E604,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_604e,
};

static FAM_740: Family = Family {
    name: "740",
    desc: "PowerPC 740",
    msr_mask: MSR_MASK_604,
    flags: FLAGS_604,
    mmu: MmuModel::Bat32,
    excp: ExcpModel::E7x0,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_740,
};

static FAM_750: Family = Family {
    name: "750",
    desc: "PowerPC 750",
    msr_mask: MSR_MASK_604,
    flags: FLAGS_604,
    mmu: MmuModel::Bat32,
    excp: ExcpModel::E7x0,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_750,
};

static FAM_750CL: Family = Family {
    name: "750cl",
    desc: "PowerPC 750 CL",
    msr_mask: MSR_MASK_604,
    flags: FLAGS_604,
    mmu: MmuModel::Bat32,
    excp: ExcpModel::E7x0,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_750cl,
};

static FAM_750CX: Family = Family {
    name: "750cx",
    desc: "PowerPC 750CX",
    msr_mask: MSR_MASK_604,
    flags: FLAGS_604,
    mmu: MmuModel::Bat32,
    excp: ExcpModel::E7x0,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_750cx,
};

static FAM_750FX: Family = Family {
    name: "750fx",
    desc: "PowerPC 750FX",
    msr_mask: MSR_MASK_604,
    flags: FLAGS_604,
    mmu: MmuModel::Bat32,
    excp: ExcpModel::E7x0,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_750fx,
};

static FAM_750GX: Family = Family {
    name: "750gx",
    desc: "PowerPC 750GX",
    msr_mask: MSR_MASK_604,
    flags: FLAGS_604,
    mmu: MmuModel::Bat32,
    excp: ExcpModel::E7x0,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_750fx,
};

static FAM_745: Family = Family {
    name: "745",
    desc: "PowerPC 745",
    msr_mask: MSR_MASK_604,
    flags: FLAGS_604,
    mmu: MmuModel::Soft6xx,
    excp: ExcpModel::E7x5,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_745,
};

static FAM_755: Family = Family {
    name: "755",
    desc: "PowerPC 755",
    msr_mask: MSR_MASK_604,
    flags: FLAGS_604,
    mmu: MmuModel::Soft6xx,
    excp: ExcpModel::E7x5,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_755,
};

const MSR_MASK_7400: u64 = msr_bit(MSR_VR) | MSR_MASK_604;

const FLAGS_7400: ModelFlags = ModelFlags(ModelFlags::VRE.0 | FLAGS_604.0);

static FAM_7400: Family = Family {
    name: "7400",
    desc: "PowerPC 7400 (aka G4)",
    msr_mask: MSR_MASK_7400,
    flags: FLAGS_7400,
    mmu: MmuModel::Bat32,
    excp: ExcpModel::E74xx,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_7400,
};

static FAM_7410: Family = Family {
    name: "7410",
    desc: "PowerPC 7410 (aka G4)",
    msr_mask: MSR_MASK_7400,
    flags: FLAGS_7400,
    mmu: MmuModel::Bat32,
    excp: ExcpModel::E74xx,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid0,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_7410,
};

static FAM_7440: Family = Family {
    name: "7440",
    desc: "PowerPC 7440 (aka G4)",
    msr_mask: MSR_MASK_7400,
    flags: FLAGS_7400,
    mmu: MmuModel::Soft74xx,
    excp: ExcpModel::E74xx,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid074xx,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_7440,
};

static FAM_7450: Family = Family {
    name: "7450",
    desc: "PowerPC 7450 (aka G4)",
    msr_mask: MSR_MASK_7400,
    flags: FLAGS_7400,
    mmu: MmuModel::Soft74xx,
    excp: ExcpModel::E74xx,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid074xx,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_7450,
};

static FAM_7445: Family = Family {
    name: "7445",
    desc: "PowerPC 7445 (aka G4)",
    msr_mask: MSR_MASK_7400,
    flags: FLAGS_7400,
    mmu: MmuModel::Soft74xx,
    excp: ExcpModel::E74xx,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid074xx,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_7445,
};

static FAM_7455: Family = Family {
    name: "7455",
    desc: "PowerPC 7455 (aka G4)",
    msr_mask: MSR_MASK_7400,
    flags: FLAGS_7400,
    mmu: MmuModel::Soft74xx,
    excp: ExcpModel::E74xx,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid074xx,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_7455,
};

static FAM_7457: Family = Family {
    name: "7457",
    desc: "PowerPC 7457 (aka G4)",
    msr_mask: MSR_MASK_7400,
    flags: FLAGS_7400,
    mmu: MmuModel::Soft74xx,
    excp: ExcpModel::E74xx,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid074xx,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_7457,
};

static FAM_E600: Family = Family {
    name: "e600",
    desc: "PowerPC e600",
    msr_mask: MSR_MASK_7400,
    flags: FLAGS_7400,
    mmu: MmuModel::Bat32,
    excp: ExcpModel::E74xx,
    bus: BusModel::Ppc6xx,
    check_pow: CheckPow::Hid074xx,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0,
    l1_icache_size: 0,
    build: build_e600,
};

const MSR_MASK_970: u64 = msr_bit(MSR_SF)
    | msr_bit(MSR_VR)
    | msr_bit(MSR_POW)
    | msr_bit(MSR_EE)
    | msr_bit(MSR_PR)
    | msr_bit(MSR_FP)
    | msr_bit(MSR_ME)
    | msr_bit(MSR_FE0)
    | msr_bit(MSR_SE)
    | msr_bit(MSR_DE)
    | msr_bit(MSR_FE1)
    | msr_bit(MSR_IR)
    | msr_bit(MSR_DR)
    | msr_bit(MSR_PMM)
    | msr_bit(MSR_RI);

static FAM_970: Family = Family {
    name: "970",
    desc: "PowerPC 970",
    msr_mask: MSR_MASK_970,
    flags: ModelFlags(ModelFlags::VRE.0 | FLAGS_604.0),
    mmu: MmuModel::Hash64,
    excp: ExcpModel::E970,
    bus: BusModel::Ppc970,
    check_pow: CheckPow::Hid0Nap,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0x8000,
    l1_icache_size: 0x10000,
    build: build_970,
};

static FAM_POWER5P: Family = Family {
    name: "power5+",
    desc: "POWER5+",
    msr_mask: MSR_MASK_970,
    flags: ModelFlags(ModelFlags::VRE.0 | FLAGS_604.0),
    mmu: MmuModel::V2_03,
    excp: ExcpModel::E970,
    bus: BusModel::Ppc970,
    check_pow: CheckPow::Hid0Nap,
    pvr_match: PvrMatch::Exact,
    l1_dcache_size: 0x8000,
    l1_icache_size: 0x10000,
    build: build_power5plus,
};

const FLAGS_POWER7: ModelFlags = ModelFlags(
    ModelFlags::VRE.0
        | ModelFlags::SE.0
        | ModelFlags::BE.0
        | ModelFlags::PMM.0
        | ModelFlags::BUS_CLK.0
        | ModelFlags::CFAR.0
        | ModelFlags::VSX.0,
);

static FAM_POWER7: Family = Family {
    name: "power7",
    desc: "POWER7",
    msr_mask: msr_bit(MSR_SF)
        | msr_bit(MSR_VR)
        | msr_bit(MSR_VSX)
        | msr_bit(MSR_EE)
        | msr_bit(MSR_PR)
        | msr_bit(MSR_FP)
        | msr_bit(MSR_ME)
        | msr_bit(MSR_FE0)
        | msr_bit(MSR_SE)
        | msr_bit(MSR_DE)
        | msr_bit(MSR_FE1)
        | msr_bit(MSR_IR)
        | msr_bit(MSR_DR)
        | msr_bit(MSR_PMM)
        | msr_bit(MSR_RI)
        | msr_bit(MSR_LE),
    flags: FLAGS_POWER7,
    mmu: MmuModel::V2_06,
    excp: ExcpModel::Power7,
    bus: BusModel::Power7,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Power7,
    l1_dcache_size: 0x8000,
    l1_icache_size: 0x8000,
    build: build_power7,
};

const MSR_MASK_POWER9: u64 = msr_bit(MSR_SF)
    | msr_bit(MSR_SHV)
    | msr_bit(MSR_TM)
    | msr_bit(MSR_VR)
    | msr_bit(MSR_VSX)
    | msr_bit(MSR_EE)
    | msr_bit(MSR_PR)
    | msr_bit(MSR_FP)
    | msr_bit(MSR_ME)
    | msr_bit(MSR_FE0)
    | msr_bit(MSR_SE)
    | msr_bit(MSR_DE)
    | msr_bit(MSR_FE1)
    | msr_bit(MSR_IR)
    | msr_bit(MSR_DR)
    | msr_bit(MSR_PMM)
    | msr_bit(MSR_RI)
    | msr_bit(MSR_LE);

static FAM_POWER8: Family = Family {
    name: "power8",
    desc: "POWER8",
    msr_mask: MSR_MASK_POWER9 | msr_bit(MSR_TS0) | msr_bit(MSR_TS1),
    flags: ModelFlags(FLAGS_POWER7.0 | ModelFlags::TM.0),
    mmu: MmuModel::V2_07,
    excp: ExcpModel::Power8,
    bus: BusModel::Power7,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Power8,
    l1_dcache_size: 0x8000,
    l1_icache_size: 0x8000,
    build: build_power8,
};

static FAM_POWER9: Family = Family {
    name: "power9",
    desc: "POWER9",
    msr_mask: MSR_MASK_POWER9,
    flags: ModelFlags(FLAGS_POWER7.0 | ModelFlags::TM.0 | ModelFlags::SCV.0),
    mmu: MmuModel::V3_00,
    excp: ExcpModel::Power9,
    bus: BusModel::Power9,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Power9,
    l1_dcache_size: 0x8000,
    l1_icache_size: 0x8000,
    build: build_power9,
};

static FAM_POWER10: Family = Family {
    name: "power10",
    desc: "POWER10",
    msr_mask: MSR_MASK_POWER9,
    flags: ModelFlags(FLAGS_POWER7.0 | ModelFlags::TM.0),
    mmu: MmuModel::V3_00,
    excp: ExcpModel::Power9,
    bus: BusModel::Power9,
    check_pow: CheckPow::Always,
    pvr_match: PvrMatch::Power10,
    l1_dcache_size: 0x8000,
    l1_icache_size: 0x8000,
    build: build_power10,
};

/*
 * Model catalog.
 */

const fn model(name: &'static str, pvr: u32, family: &'static Family) -> Model {
    Model {
        name,
        pvr,
        svr: SVR_NONE,
        family,
    }
}

const fn model_svr(name: &'static str, pvr: u32, svr: u32, family: &'static Family) -> Model {
    Model {
        name,
        pvr,
        svr,
        family,
    }
}

/// Every registered model, in catalog order. When two models share a
/// PVR the earlier entry wins exact-PVR lookups.
pub static MODELS: &[Model] = &[
    model("401a1", 0x0021_0000, &FAM_401),
    model("401b2", 0x0022_0000, &FAM_401X2),
    model("401g2", 0x0027_0000, &FAM_401X3),
    model("iop480", 0x4010_0000, &FAM_IOP480),
    model("403ga", 0x0020_0011, &FAM_403),
    model("403gcx", 0x0020_1400, &FAM_403GCX),
    model("405gp", 0x4011_0000, &FAM_405),
    model("405ep", 0x5121_0950, &FAM_405),
    model("x2vp4", 0x2001_0820, &FAM_405),
    model("440epb", 0x4222_18D3, &FAM_440EP),
    model("440epx", 0x2000_08D0, &FAM_440EP),
    model("460exb", 0x1306_41C2, &FAM_460EX),
    model("440gpc", 0x4012_0481, &FAM_440GP),
    model("440-xilinx", 0x7FF2_1910, &FAM_440X5),
    model("440-xilinx-w-dfpu", 0x7FF2_1912, &FAM_440X5_DFPU),
    model("440a4", 0x4188_0213, &FAM_440X4),
    model("440a5", 0x4191_0406, &FAM_440X5),
    model("mpc5xx", 0x0002_0020, &FAM_MPC5XX),
    model("mpc8xx", 0x0050_0000, &FAM_MPC8XX),
    model("g2", 0x0081_0011, &FAM_G2),
    model("g2le", 0x8082_0010, &FAM_G2LE),
    model("e200z5", 0x8100_0000, &FAM_E200),
    model("e200z6", 0x8112_0000, &FAM_E200),
    model("e300c1", 0x0083_0010, &FAM_E300),
    model("e300c2", 0x0084_0010, &FAM_E300),
    model("e300c3", 0x0085_0010, &FAM_E300),
    model("e300c4", 0x0086_0010, &FAM_E300),
    model_svr("e500_v20", 0x8020_0020, 0x8030_0020, &FAM_E500V1),
    model_svr("e500v2_v22", 0x8021_0022, 0x8031_0022, &FAM_E500V2),
    model_svr("e500mc", 0x8023_0020, 0x80E2_0020, &FAM_E500MC),
    model_svr("e5500", 0x8024_0020, 0x8241_0020, &FAM_E5500),
    model_svr("e6500", 0x8040_0020, 0x8248_0020, &FAM_E6500),
    model("601_v1", 0x0001_0001, &FAM_601),
    model("601_v2", 0x0001_0002, &FAM_601V),
    model("602", 0x0005_0100, &FAM_602),
    model("603", 0x0003_0100, &FAM_603),
    model("603e_v1.1", 0x0006_0101, &FAM_603E),
    model("603e_v2.2", 0x0006_0202, &FAM_603E),
    model("603e_v4.0", 0x0006_0400, &FAM_603E),
    model("603e_v4.1", 0x0006_0401, &FAM_603E),
    model("604", 0x0004_0103, &FAM_604),
    model("604e_v1.0", 0x0009_0100, &FAM_604E),
    model("604e_v2.2", 0x0009_0202, &FAM_604E),
    model("604e_v2.4", 0x0009_0204, &FAM_604E),
    // The 740 and 750 taped out with the same PVR; the 740 entry
    // comes first so exact lookups keep returning it.
    model("740_v2.0", 0x0008_0200, &FAM_740),
    model("750_v2.0", 0x0008_0200, &FAM_750),
    model("750_v2.2", 0x0008_0202, &FAM_750),
    model("740_v3.1", 0x0008_0301, &FAM_740),
    model("750_v3.1", 0x0008_0301, &FAM_750),
    model("750cl_v1.0", 0x0008_7200, &FAM_750CL),
    model("750cx_v2.1", 0x0008_2201, &FAM_750CX),
    model("750cx_v2.2", 0x0008_2202, &FAM_750CX),
    model("750fx_v2.0", 0x700A_0200, &FAM_750FX),
    model("750fx_v2.1", 0x700A_0201, &FAM_750FX),
    model("750gx_v1.0", 0x7002_0100, &FAM_750GX),
    model("745_v2.8", 0x0008_3208, &FAM_745),
    model("755_v2.8", 0x0008_3208, &FAM_755),
    model("7400_v2.6", 0x000C_0206, &FAM_7400),
    model("7400_v2.7", 0x000C_0207, &FAM_7400),
    model("7400_v2.9", 0x000C_0209, &FAM_7400),
    model("7410_v1.3", 0x800C_1103, &FAM_7410),
    model("7410_v1.4", 0x800C_1104, &FAM_7410),
    model("7440_v2.1", 0x8000_0201, &FAM_7440),
    model("7450_v2.0", 0x8000_0200, &FAM_7450),
    model("7445_v2.1", 0x8001_0201, &FAM_7445),
    model("7455_v3.3", 0x8001_0303, &FAM_7455),
    model("7457_v1.2", 0x8002_0102, &FAM_7457),
    model("e600", 0x8004_0010, &FAM_E600),
    model("970_v2.2", 0x0039_0202, &FAM_970),
    model("970fx_v2.1", 0x003C_0201, &FAM_970),
    model("970fx_v3.1", 0x003C_0301, &FAM_970),
    model("970mp_v1.1", 0x0044_0101, &FAM_970),
    model("power5+_v2.1", 0x003B_0201, &FAM_POWER5P),
    model("power7_v2.3", 0x003F_0203, &FAM_POWER7),
    model("power7+_v2.1", 0x004A_0201, &FAM_POWER7),
    model("power8e_v2.1", 0x004B_0201, &FAM_POWER8),
    model("power8_v2.0", 0x004D_0200, &FAM_POWER8),
    model("power8nvl_v1.0", 0x004C_0100, &FAM_POWER8),
    model("power9_v2.0", 0x004E_1200, &FAM_POWER9),
    model("power9_v2.2", 0x004E_1202, &FAM_POWER9),
    model("power10_v2.0", 0x0080_1200, &FAM_POWER10),
];

/// Convenience names. Each alias points directly at a canonical model
/// name; chains are not followed.
pub static ALIASES: &[(&str, &str)] = &[
    ("403", "403gcx"),
    ("405", "405gp"),
    ("440ep", "440epb"),
    ("601", "601_v2"),
    ("603e", "603e_v4.1"),
    ("604e", "604e_v2.4"),
    ("750", "750_v2.2"),
    ("g3", "750_v2.2"),
    ("745", "745_v2.8"),
    ("755", "755_v2.8"),
    ("7400", "7400_v2.9"),
    ("g4", "7400_v2.9"),
    ("e200", "e200z6"),
    ("e300", "e300c3"),
    ("e500", "e500v2_v22"),
    ("e500v1", "e500_v20"),
    ("e500v2", "e500v2_v22"),
    ("970", "970_v2.2"),
    ("ppc970", "970_v2.2"),
    ("970fx", "970fx_v3.1"),
    ("power5+", "power5+_v2.1"),
    ("power7", "power7_v2.3"),
    ("power7+", "power7+_v2.1"),
    ("power8e", "power8e_v2.1"),
    ("power8", "power8_v2.0"),
    ("power8nvl", "power8nvl_v1.0"),
    ("power9", "power9_v2.0"),
    ("power10", "power10_v2.0"),
    ("ppc32", "604"),
    ("ppc64", "970fx_v3.1"),
];

/// Pseudo-model standing for "whatever the host machine runs". It only
/// takes part in enumeration and name lookup, never in PVR matching.
pub static HOST: Model = Model {
    name: "host",
    pvr: 0,
    svr: SVR_NONE,
    family: &FAM_POWER9,
};

/// Finds a model by its canonical name. Includes the host pseudo-model.
#[must_use]
pub fn by_name(name: &str) -> Option<&'static Model> {
    if name == HOST.name {
        return Some(&HOST);
    }
    MODELS.iter().find(|m| m.name == name)
}

/// Finds the canonical name an alias points at.
#[must_use]
pub fn alias_target(name: &str) -> Option<&'static str> {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|&(_, target)| target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msr::verify_msr_flags;

    #[test]
    fn every_alias_points_at_a_canonical_model() {
        for &(alias, target) in ALIASES {
            assert!(
                by_name(target).is_some(),
                "alias {alias} points at unknown model {target}"
            );
        }
    }

    #[test]
    fn model_names_are_unique() {
        for (i, a) in MODELS.iter().enumerate() {
            for b in &MODELS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
            assert_ne!(a.name, HOST.name);
        }
    }

    #[test]
    fn aliases_never_shadow_models() {
        for &(alias, _) in ALIASES {
            assert!(by_name(alias).is_none(), "{alias} is both alias and model");
        }
    }

    #[test]
    fn every_family_passes_the_msr_flag_check() {
        for m in MODELS {
            verify_msr_flags(m.family.msr_mask, m.family.flags)
                .unwrap_or_else(|e| panic!("{}: {e}", m.name));
        }
    }

    #[test]
    fn shared_pvr_pairs_are_adjacent_with_the_older_part_first() {
        for (older, newer) in [
            ("740_v2.0", "750_v2.0"),
            ("740_v3.1", "750_v3.1"),
            ("745_v2.8", "755_v2.8"),
        ] {
            let a = MODELS.iter().position(|m| m.name == older).unwrap();
            let b = MODELS.iter().position(|m| m.name == newer).unwrap();
            assert!(a < b, "{older} must precede {newer}");
            assert_eq!(MODELS[a].pvr, MODELS[b].pvr);
        }
    }

    #[test]
    fn every_family_line_keeps_its_revision_leaves() {
        assert!(MODELS.len() >= 80, "catalog shrank to {}", MODELS.len());
    }

    #[test]
    fn host_is_outside_the_pvr_space() {
        assert_eq!(HOST.pvr, 0);
        assert!(MODELS.iter().all(|m| m.pvr != HOST.pvr));
    }
}
