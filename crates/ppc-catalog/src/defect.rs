//! Authoring defects detected while constructing a CPU instance.
//!
//! Everything in this module is a catalog bug, not an operational fault:
//! a defect means the model definition itself is broken and must be fixed,
//! so construction stops at the first one and nothing is retried.

use thiserror::Error;

/// Broad classification of catalog defects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefectClass {
    /// Register-slot bookkeeping went wrong during builder replay.
    Registration,
    /// The MSR legal-bit mask and the behaviour flag set disagree.
    MsrConsistency,
    /// No time-base clock source is declared.
    Clocking,
    /// An exception vector required by the chosen layout is undefined.
    Vectors,
}

/// Fatal defects raised while replaying a model's builder chain.
///
/// The double-registration message names the register in decimal and in
/// three-digit hex, matching the form the register tables are written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogDefect {
    /// A builder claimed a register slot that an earlier builder already
    /// populated. Registration never overwrites; the chain is aborted.
    #[error("tried to register SPR {number} ({number:03x}) twice")]
    SprRegisteredTwice {
        /// Register number claimed twice.
        number: u16,
    },
    /// A gated MSR bit is legal but its flag group does not contain exactly
    /// one of the allowed flags.
    #[error("MSR definition inconsistency: bit {bit} is legal, exactly one of {allowed} must be set")]
    MsrFlagGroupUnsatisfied {
        /// MSR bit position gating the group.
        bit: u8,
        /// Human-readable list of the flags legal for this bit.
        allowed: &'static str,
    },
    /// Flags of a gated group are present although the MSR bit is illegal
    /// for this model.
    #[error("MSR definition inconsistency: bit {bit} is illegal, none of {allowed} may be set")]
    MsrFlagGroupStray {
        /// MSR bit position gating the group.
        bit: u8,
        /// Human-readable list of the flags that must stay clear.
        allowed: &'static str,
    },
    /// Neither the RTC nor the bus clock flag is set, so the time base and
    /// decrementer would have no clock source.
    #[error("MSR definition inconsistency: no time-base and decrementer clock source is set")]
    MissingClockSource,
    /// An exception vector was required from a layout that never defined it.
    #[error("exception vector {vector} has no offset in the selected layout")]
    VectorUndefined {
        /// Index of the undefined vector.
        vector: usize,
    },
}

impl CatalogDefect {
    /// Returns the broad class of this defect.
    #[must_use]
    pub const fn class(self) -> DefectClass {
        match self {
            Self::SprRegisteredTwice { .. } => DefectClass::Registration,
            Self::MsrFlagGroupUnsatisfied { .. } | Self::MsrFlagGroupStray { .. } => {
                DefectClass::MsrConsistency
            }
            Self::MissingClockSource => DefectClass::Clocking,
            Self::VectorUndefined { .. } => DefectClass::Vectors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_registration_names_decimal_and_hex() {
        let defect = CatalogDefect::SprRegisteredTwice { number: 8 };
        let text = defect.to_string();
        assert!(text.contains("8 (008)"), "diagnostic was: {text}");
    }

    #[test]
    fn wide_numbers_keep_three_hex_digits() {
        let defect = CatalogDefect::SprRegisteredTwice { number: 1013 };
        assert!(defect.to_string().contains("1013 (3f5)"));
    }

    #[test]
    fn classes_partition_the_variants() {
        assert_eq!(
            CatalogDefect::MissingClockSource.class(),
            DefectClass::Clocking
        );
        assert_eq!(
            CatalogDefect::MsrFlagGroupUnsatisfied { bit: 25, allowed: "SPE or VRE" }.class(),
            DefectClass::MsrConsistency
        );
        assert_eq!(
            CatalogDefect::VectorUndefined { vector: 3 }.class(),
            DefectClass::Vectors
        );
    }
}
