//! CPU family and model descriptors.
//!
//! A family fixes the behavioural contract of a processor line: its MSR
//! mask, capability flags, MMU/exception/interrupt models, power-down
//! gating and the SPR construction routine. A model is one taped-out
//! chip of a family, identified by its PVR.

use crate::defect::CatalogDefect;
use crate::msr::ModelFlags;
use crate::state::CpuState;

/// Processor version register value reserved for "no SVR".
pub const SVR_NONE: u32 = 0xFFFF_FFFF;

/// Mask applied when matching server-class PVRs by family base.
pub const SERVER_PVR_MASK: u32 = 0xFFFF_0000;

/// POWER7 PVR base.
pub const PVR_BASE_POWER7: u32 = 0x003F_0000;
/// POWER7+ PVR base.
pub const PVR_BASE_POWER7P: u32 = 0x004A_0000;
/// POWER8E PVR base.
pub const PVR_BASE_POWER8E: u32 = 0x004B_0000;
/// POWER8NVL PVR base.
pub const PVR_BASE_POWER8NVL: u32 = 0x004C_0000;
/// POWER8 PVR base.
pub const PVR_BASE_POWER8: u32 = 0x004D_0000;
/// POWER9 PVR base.
pub const PVR_BASE_POWER9: u32 = 0x004E_0000;
/// POWER10 PVR base.
pub const PVR_BASE_POWER10: u32 = 0x0080_0000;

/// MMU model implemented by a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MmuModel {
    /// No translation.
    Real,
    /// 40x software TLB with zone protection.
    Soft4xxZ,
    /// 40x software TLB.
    Soft4xx,
    /// Book E MMU.
    BookE,
    /// Book E 2.06 MAS-driven MMU.
    BookE206,
    /// MPC8xx MMU.
    Mpc8xx,
    /// 6xx software TLB.
    Soft6xx,
    /// 601 BAT-only MMU.
    Model601,
    /// 32-bit hash MMU with BATs.
    Bat32,
    /// 74xx software TLB.
    Soft74xx,
    /// 64-bit hash MMU.
    Hash64,
    /// Architecture 2.03 hash MMU.
    V2_03,
    /// Architecture 2.06 hash MMU.
    V2_06,
    /// Architecture 2.07 hash MMU.
    V2_07,
    /// Architecture 3.00 radix/hash MMU.
    V3_00,
}

/// Exception model implemented by a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExcpModel {
    /// 40x embedded.
    E40x,
    /// Book E.
    BookE,
    /// 601.
    E601,
    /// 602.
    E602,
    /// 603 and derivatives.
    E603,
    /// G2 core.
    G2,
    /// 604.
    E604,
    /// 740/750.
    E7x0,
    /// 745/755.
    E7x5,
    /// 74xx.
    E74xx,
    /// 970.
    E970,
    /// POWER7.
    Power7,
    /// POWER8.
    Power8,
    /// POWER9/POWER10.
    Power9,
}

/// Interrupt input pin model of a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusModel {
    /// 6xx pin set.
    Ppc6xx,
    /// 401 pin set.
    Ppc401,
    /// 405 pin set.
    Ppc405,
    /// Book E pin set.
    BookE,
    /// RCPU (5xx/8xx) pin set.
    Rcpu,
    /// 970 pin set.
    Ppc970,
    /// POWER7/POWER8 pin set.
    Power7,
    /// POWER9/POWER10 pin set.
    Power9,
}

/// How a family gates entry to power-down states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CheckPow {
    /// Power-down never permitted.
    Never,
    /// Power-down always permitted.
    Always,
    /// Permitted when HID0 enables doze, nap or sleep.
    Hid0,
    /// Permitted when HID0 enables nap or sleep (74xx encoding).
    Hid074xx,
    /// Permitted when HID0 enables deep nap, doze or nap (970 encoding).
    Hid0Nap,
}

impl CheckPow {
    /// HID0 doze/nap/sleep field.
    pub const HID0_DOZE_NAP_SLEEP: u64 = 0x00E0_0000;
    /// HID0 nap/sleep field (74xx).
    pub const HID0_NAP_SLEEP_74XX: u64 = 0x0060_0000;
    /// HID0 deep-nap/doze/nap field (970).
    pub const HID0_POW_970: u64 = 0x01C0_0000;

    /// Whether the given HID0 value permits power-down.
    #[must_use]
    pub const fn permits(self, hid0: u64) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::Hid0 => hid0 & Self::HID0_DOZE_NAP_SLEEP != 0,
            Self::Hid074xx => hid0 & Self::HID0_NAP_SLEEP_74XX != 0,
            Self::Hid0Nap => hid0 & Self::HID0_POW_970 != 0,
        }
    }
}

/// PVR matching rule used when a lookup runs in masked mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PvrMatch {
    /// The candidate must equal the model's PVR.
    Exact,
    /// Any POWER7 or POWER7+ revision.
    Power7,
    /// Any POWER8, POWER8E or POWER8NVL revision.
    Power8,
    /// Any POWER9 revision.
    Power9,
    /// Any POWER10 revision.
    Power10,
}

impl PvrMatch {
    /// Whether `candidate` matches a model whose exact PVR is
    /// `model_pvr` under this rule.
    #[must_use]
    pub const fn matches(self, model_pvr: u32, candidate: u32) -> bool {
        let base = candidate & SERVER_PVR_MASK;
        match self {
            Self::Exact => candidate == model_pvr,
            Self::Power7 => base == PVR_BASE_POWER7 || base == PVR_BASE_POWER7P,
            Self::Power8 => {
                base == PVR_BASE_POWER8
                    || base == PVR_BASE_POWER8E
                    || base == PVR_BASE_POWER8NVL
            }
            Self::Power9 => base == PVR_BASE_POWER9,
            Self::Power10 => base == PVR_BASE_POWER10,
        }
    }
}

/// SPR construction routine of a family.
pub type FamilyBuild = fn(&mut CpuState) -> Result<(), CatalogDefect>;

/// A processor family.
#[derive(Clone, Copy)]
pub struct Family {
    /// Family name.
    pub name: &'static str,
    /// Human-readable description.
    pub desc: &'static str,
    /// Bits implemented in the MSR.
    pub msr_mask: u64,
    /// Capability and clocking flags.
    pub flags: ModelFlags,
    /// MMU model.
    pub mmu: MmuModel,
    /// Exception model.
    pub excp: ExcpModel,
    /// Interrupt input model.
    pub bus: BusModel,
    /// Power-down gating.
    pub check_pow: CheckPow,
    /// Masked-mode PVR matching rule.
    pub pvr_match: PvrMatch,
    /// L1 data cache size in bytes, zero when unspecified.
    pub l1_dcache_size: u32,
    /// L1 instruction cache size in bytes, zero when unspecified.
    pub l1_icache_size: u32,
    /// SPR construction routine.
    pub build: FamilyBuild,
}

impl core::fmt::Debug for Family {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Family")
            .field("name", &self.name)
            .field("msr_mask", &self.msr_mask)
            .field("mmu", &self.mmu)
            .field("excp", &self.excp)
            .finish_non_exhaustive()
    }
}

/// One concrete CPU model.
#[derive(Debug, Clone, Copy)]
pub struct Model {
    /// Canonical model name.
    pub name: &'static str,
    /// Processor version register value.
    pub pvr: u32,
    /// System version register value, [`SVR_NONE`] when absent.
    pub svr: u32,
    /// The family the model belongs to.
    pub family: &'static Family,
}

impl Model {
    /// Whether `candidate` matches this model under its family's
    /// masked-mode rule.
    #[must_use]
    pub const fn pvr_matches(&self, candidate: u32) -> bool {
        self.family.pvr_match.matches(self.pvr, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_rules_match_by_base() {
        assert!(PvrMatch::Power7.matches(0x003F_0203, 0x003F_0101));
        assert!(PvrMatch::Power7.matches(0x003F_0203, 0x004A_0100));
        assert!(!PvrMatch::Power7.matches(0x003F_0203, 0x004D_0200));
        assert!(PvrMatch::Power8.matches(0x004D_0200, 0x004C_0100));
        assert!(PvrMatch::Power10.matches(0x0080_1200, 0x0080_0100));
    }

    #[test]
    fn exact_rule_requires_equality() {
        assert!(PvrMatch::Exact.matches(0x0008_0200, 0x0008_0200));
        assert!(!PvrMatch::Exact.matches(0x0008_0200, 0x0008_0201));
    }

    #[test]
    fn power_down_gating() {
        assert!(!CheckPow::Never.permits(u64::MAX));
        assert!(CheckPow::Always.permits(0));
        assert!(CheckPow::Hid0.permits(0x0080_0000));
        assert!(!CheckPow::Hid0.permits(0x0000_1000));
        assert!(CheckPow::Hid074xx.permits(0x0040_0000));
        assert!(!CheckPow::Hid074xx.permits(0x0080_0000));
        assert!(CheckPow::Hid0Nap.permits(0x0100_0000));
        assert!(!CheckPow::Hid0Nap.permits(0x0020_0000));
    }
}
