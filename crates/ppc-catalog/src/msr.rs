//! Machine State Register bit positions, model capability flags and the
//! mask/flag consistency checks run when a CPU model is brought up.

use crate::defect::CatalogDefect;

/// Sixty-four-bit mode.
pub const MSR_SF: u32 = 63;
/// Hypervisor state.
pub const MSR_SHV: u32 = 60;
/// Transactional state, upper bit.
pub const MSR_TS0: u32 = 34;
/// Transactional state, lower bit.
pub const MSR_TS1: u32 = 33;
/// Transactional memory available.
pub const MSR_TM: u32 = 32;
/// Computation mode (Book E 64-bit).
pub const MSR_CM: u32 = 31;
/// Guest state (embedded hypervisor).
pub const MSR_GS: u32 = 28;
/// User-mode cache lock enable.
pub const MSR_UCLE: u32 = 26;
/// Vector facility available.
pub const MSR_VR: u32 = 25;
/// Signal-processing extension available (shares a bit with `MSR_VR`).
pub const MSR_SPE: u32 = 25;
/// VSX facility available.
pub const MSR_VSX: u32 = 23;
/// Supervisor access (602 specific).
pub const MSR_SA: u32 = 22;
/// Key bit (603e).
pub const MSR_KEY: u32 = 19;
/// Power management enable.
pub const MSR_POW: u32 = 18;
/// Wait-state enable (embedded, shares a bit with `MSR_POW`).
pub const MSR_WE: u32 = 18;
/// Temporary GPRs available (shares a bit with `MSR_CE`).
pub const MSR_TGPR: u32 = 17;
/// Critical interrupt enable.
pub const MSR_CE: u32 = 17;
/// Interrupt little-endian mode.
pub const MSR_ILE: u32 = 16;
/// External interrupt enable.
pub const MSR_EE: u32 = 15;
/// Problem state.
pub const MSR_PR: u32 = 14;
/// Floating point available.
pub const MSR_FP: u32 = 13;
/// Machine check enable.
pub const MSR_ME: u32 = 12;
/// Floating point exception mode 0.
pub const MSR_FE0: u32 = 11;
/// Single-step trace enable (shares a bit with `MSR_DWE`/`MSR_UBLE`).
pub const MSR_SE: u32 = 10;
/// Debug wait enable (embedded).
pub const MSR_DWE: u32 = 10;
/// User BTB lock enable (e200).
pub const MSR_UBLE: u32 = 10;
/// Branch trace enable (shares a bit with `MSR_DE`).
pub const MSR_BE: u32 = 9;
/// Debug interrupt enable (embedded).
pub const MSR_DE: u32 = 9;
/// Floating point exception mode 1.
pub const MSR_FE1: u32 = 8;
/// Alignment checking (601/G2).
pub const MSR_AL: u32 = 7;
/// Exception prefix.
pub const MSR_EP: u32 = 6;
/// Instruction relocation.
pub const MSR_IR: u32 = 5;
/// Instruction address space (Book E).
pub const MSR_IS: u32 = 5;
/// Data relocation.
pub const MSR_DR: u32 = 4;
/// Data address space (Book E).
pub const MSR_DS: u32 = 4;
/// Protection enable (403).
pub const MSR_PE: u32 = 3;
/// Protection exclusive (403, shares a bit with `MSR_PMM`).
pub const MSR_PX: u32 = 2;
/// Performance monitor mark.
pub const MSR_PMM: u32 = 2;
/// Recoverable interrupt.
pub const MSR_RI: u32 = 1;
/// Little-endian mode.
pub const MSR_LE: u32 = 0;

/// `1 << bit` as a 64-bit MSR mask term.
#[must_use]
pub const fn msr_bit(bit: u32) -> u64 {
    1_u64 << bit
}

/// Capability and clocking flags attached to a CPU family.
///
/// Several MSR bits are overloaded across the architecture's branches;
/// a family's flags state which interpretation applies, and the
/// consistency checks below enforce that exactly one is picked for each
/// overloaded bit the family exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelFlags(pub u32);

impl ModelFlags {
    /// No flags.
    pub const NONE: Self = Self(0);
    /// Vector facility present.
    pub const VRE: Self = Self(0x0000_0001);
    /// Signal-processing extension present.
    pub const SPE: Self = Self(0x0000_0002);
    /// Temporary GPRs present.
    pub const TGPR: Self = Self(0x0000_0004);
    /// Critical interrupts present.
    pub const CE: Self = Self(0x0000_0008);
    /// Single-step trace present.
    pub const SE: Self = Self(0x0000_0010);
    /// Debug wait enable present.
    pub const DWE: Self = Self(0x0000_0020);
    /// Debug interrupts present.
    pub const DE: Self = Self(0x0000_0040);
    /// Branch trace present.
    pub const BE: Self = Self(0x0000_0080);
    /// User BTB lock enable present.
    pub const UBLE: Self = Self(0x0000_0100);
    /// Protection exclusive present.
    pub const PX: Self = Self(0x0000_0200);
    /// Performance monitor mark present.
    pub const PMM: Self = Self(0x0000_0400);
    /// Time base driven by the real-time clock.
    pub const RTC_CLK: Self = Self(0x0000_0800);
    /// Time base driven by the bus clock.
    pub const BUS_CLK: Self = Self(0x0000_1000);
    /// Come-from address register present.
    pub const CFAR: Self = Self(0x0000_2000);
    /// VSX facility present.
    pub const VSX: Self = Self(0x0000_4000);
    /// Transactional memory present.
    pub const TM: Self = Self(0x0000_8000);
    /// System-call-vectored present.
    pub const SCV: Self = Self(0x0001_0000);

    /// Whether every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Flags common to `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Whether no flags are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl core::ops::BitOr for ModelFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl core::ops::BitOrAssign for ModelFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// The overloaded MSR bits and the flags allowed to claim each one.
const FLAG_GROUPS: [(u32, ModelFlags, &str); 5] = [
    (
        MSR_VR,
        ModelFlags(ModelFlags::SPE.0 | ModelFlags::VRE.0),
        "SPE or VRE",
    ),
    (
        MSR_TGPR,
        ModelFlags(ModelFlags::TGPR.0 | ModelFlags::CE.0),
        "TGPR or CE",
    ),
    (
        MSR_SE,
        ModelFlags(ModelFlags::SE.0 | ModelFlags::DWE.0 | ModelFlags::UBLE.0),
        "SE, DWE or UBLE",
    ),
    (
        MSR_BE,
        ModelFlags(ModelFlags::BE.0 | ModelFlags::DE.0),
        "BE or DE",
    ),
    (
        MSR_PX,
        ModelFlags(ModelFlags::PX.0 | ModelFlags::PMM.0),
        "PX or PMM",
    ),
];

/// Check an MSR mask against a family's flags.
///
/// For each overloaded MSR bit: if the mask exposes the bit, exactly
/// one of the flags that can claim it must be set; if the mask hides
/// it, none of those flags may be set. Independently of the mask, the
/// family must name exactly one time-base clock source.
pub fn verify_msr_flags(msr_mask: u64, flags: ModelFlags) -> Result<(), CatalogDefect> {
    for (bit, allowed, label) in FLAG_GROUPS {
        let claimed = flags.intersection(allowed);
        if msr_mask & msr_bit(bit) != 0 {
            if claimed.0.count_ones() != 1 {
                return Err(CatalogDefect::MsrFlagGroupUnsatisfied {
                    bit: bit as u8,
                    allowed: label,
                });
            }
        } else if !claimed.is_empty() {
            return Err(CatalogDefect::MsrFlagGroupStray {
                bit: bit as u8,
                allowed: label,
            });
        }
    }
    let clocks = flags.intersection(ModelFlags(
        ModelFlags::RTC_CLK.0 | ModelFlags::BUS_CLK.0,
    ));
    if clocks.0.count_ones() != 1 {
        return Err(CatalogDefect::MissingClockSource);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sane_mask_and_flags_pass() {
        let mask = msr_bit(MSR_EE)
            | msr_bit(MSR_PR)
            | msr_bit(MSR_SE)
            | msr_bit(MSR_BE)
            | msr_bit(MSR_PMM)
            | msr_bit(MSR_LE);
        let flags =
            ModelFlags::SE | ModelFlags::BE | ModelFlags::PMM | ModelFlags::BUS_CLK;
        assert!(verify_msr_flags(mask, flags).is_ok());
    }

    #[test]
    fn exposed_vr_bit_without_a_claim_is_a_defect() {
        let mask = msr_bit(MSR_VR) | msr_bit(MSR_EE);
        let flags = ModelFlags::BUS_CLK;
        assert_eq!(
            verify_msr_flags(mask, flags),
            Err(CatalogDefect::MsrFlagGroupUnsatisfied {
                bit: 25,
                allowed: "SPE or VRE",
            })
        );
    }

    #[test]
    fn both_claims_on_one_bit_is_a_defect() {
        let mask = msr_bit(MSR_VR);
        let flags = ModelFlags::SPE | ModelFlags::VRE | ModelFlags::BUS_CLK;
        assert!(matches!(
            verify_msr_flags(mask, flags),
            Err(CatalogDefect::MsrFlagGroupUnsatisfied { bit: 25, .. })
        ));
    }

    #[test]
    fn hidden_bit_with_a_claim_is_a_defect() {
        let flags = ModelFlags::DE | ModelFlags::BUS_CLK;
        assert_eq!(
            verify_msr_flags(0, flags),
            Err(CatalogDefect::MsrFlagGroupStray {
                bit: 9,
                allowed: "BE or DE",
            })
        );
    }

    #[test]
    fn clock_source_is_mandatory_and_exclusive() {
        assert_eq!(
            verify_msr_flags(0, ModelFlags::NONE),
            Err(CatalogDefect::MissingClockSource)
        );
        assert_eq!(
            verify_msr_flags(0, ModelFlags::RTC_CLK | ModelFlags::BUS_CLK),
            Err(CatalogDefect::MissingClockSource)
        );
        assert!(verify_msr_flags(0, ModelFlags::RTC_CLK).is_ok());
    }
}
