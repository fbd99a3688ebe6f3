//! Per-tier accessor descriptors and the code-generation hook vocabulary.
//!
//! A register slot carries one [`Accessor`] per privilege tier and
//! direction. `Denied` and `Absent` are distinct on purpose: `Denied` means
//! the register exists and the access must fault at execution time, while
//! `Absent` means the model never provides it at that tier. The hook enums
//! only name the translation strategy an external decoder attaches; no code
//! generation happens here.

/// Access contract for one direction at one privilege tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accessor<H> {
    /// The register exists but this access is illegal at this tier.
    Denied,
    /// The model never provides this access at this tier.
    #[default]
    Absent,
    /// The access is legal and handled by the named hook.
    Present(H),
}

impl<H> Accessor<H> {
    /// True for `Denied` and `Present`; false only for `Absent`.
    ///
    /// The double-registration check treats a denied tier as populated,
    /// since an explicit denial is a deliberate statement about the slot.
    #[must_use]
    pub const fn is_populated(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// True only when an actual hook is attached.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// The attached hook, if any.
    #[must_use]
    pub const fn hook(&self) -> Option<&H> {
        match self {
            Self::Present(hook) => Some(hook),
            Self::Denied | Self::Absent => None,
        }
    }
}

/// Read-side translation strategies.
///
/// `Generic` loads the live slot value; everything else names a register
/// with side effects or storage outside the plain slot array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadHook {
    /// Plain load of the live slot value.
    Generic,
    /// User-mode mirror: loads the slot sixteen numbers above.
    Ureg,
    /// Integer exception register, reassembled from split fields.
    Xer,
    /// Link register.
    Lr,
    /// Count register.
    Ctr,
    /// Decrementer, derived from the time base.
    Decr,
    /// Time base, lower half.
    Tbl,
    /// Time base, upper half.
    Tbu,
    /// Processor utilisation resource register.
    Purr,
    /// Virtual time base.
    Vtb,
    /// Hypervisor decrementer.
    Hdecr,
    /// Instruction BAT register (pairs 0-3).
    Ibat,
    /// Instruction BAT register (pairs 4-7).
    IbatHigh,
    /// Data BAT register (pairs 0-3).
    Dbat,
    /// Data BAT register (pairs 4-7).
    DbatHigh,
    /// Unified BAT register of the 601.
    ClassicUbat,
    /// Real-time clock, upper word.
    ClassicRtcUpper,
    /// Real-time clock, lower word.
    ClassicRtcLower,
    /// Protection-bounds register pair.
    EmbPbr,
    /// Programmable interval timer, embedded 40x form.
    EmbPit,
    /// Signal-processing engine status and control register.
    Spefscr,
    /// Thermal-assist unit register.
    Thrm,
    /// Transactional-memory register.
    Tm,
    /// Upper 32 bits of a transactional-memory register.
    TmUpper32,
    /// Event-based branching register.
    Ebb,
    /// Upper 32 bits of an event-based branching register.
    EbbUpper32,
    /// Upper 32 bits of the previous-instruction address registers.
    PrevUpper32,
    /// Directed privileged doorbell exception state.
    Dpdes,
    /// Target address register.
    Tar,
    /// Combined MAS7_MAS3 view of two MAS registers.
    Mas73,
    /// Hardware interrupt offset register.
    Hior,
    /// Come-from address register.
    Cfar,
}

/// Write-side translation strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WriteHook {
    /// Plain store into the live slot.
    Generic,
    /// Store truncated to the low 32 bits.
    Generic32,
    /// Store through the user-mode mirror slot.
    Ureg,
    /// Accepted and discarded.
    Nop,
    /// Write-one-to-clear semantics.
    Clear,
    /// Integer exception register, split back into fields.
    Xer,
    /// Link register.
    Lr,
    /// Count register.
    Ctr,
    /// Decrementer reload.
    Decr,
    /// Time base, lower half.
    Tbl,
    /// Time base, upper half.
    Tbu,
    /// Upper 40 bits of the time base.
    Tbu40,
    /// Processor utilisation resource register.
    Purr,
    /// Virtual time base.
    Vtb,
    /// Hypervisor decrementer.
    Hdecr,
    /// Upper word of an instruction BAT pair (0-3), revalidates the pair.
    IbatUpper,
    /// Lower word of an instruction BAT pair (0-3).
    IbatLower,
    /// Upper word of an instruction BAT pair (4-7).
    IbatUpperHigh,
    /// Lower word of an instruction BAT pair (4-7).
    IbatLowerHigh,
    /// Upper word of a data BAT pair (0-3).
    DbatUpper,
    /// Lower word of a data BAT pair (0-3).
    DbatLower,
    /// Upper word of a data BAT pair (4-7).
    DbatUpperHigh,
    /// Lower word of a data BAT pair (4-7).
    DbatLowerHigh,
    /// Upper word of a unified BAT pair.
    ClassicUbatUpper,
    /// Lower word of a unified BAT pair.
    ClassicUbatLower,
    /// Real-time clock, upper word.
    ClassicRtcUpper,
    /// Real-time clock, lower word.
    ClassicRtcLower,
    /// HID0 with the little-endian mode bit folded into execution state.
    ClassicHid0,
    /// Debug control register 0, embedded 40x form.
    EmbDbcr0,
    /// Storage little-endian register.
    EmbSler,
    /// Programmable interval timer reload.
    EmbPit,
    /// Protection-bounds register pair.
    EmbPbr,
    /// Processor id, masked to the writable field.
    Pir,
    /// Embedded process id registers, masked per model.
    BookePid,
    /// Timer control register, embedded form.
    BookeTcr,
    /// Timer status register, write-one-to-clear with timer rearm.
    BookeTsr,
    /// MMU control and status, triggers flash invalidation bits.
    BookeMmucsr0,
    /// Exception prefix, masked to the valid page.
    ExcpPrefix,
    /// Indirect exception vector offset, masked per family.
    ExcpVector,
    /// Page-table base register.
    Sdr1,
    /// Signal-processing engine status and control register.
    Spefscr,
    /// Authority mask register, filtered by the supervisor mask.
    Amr,
    /// Authority mask override register.
    Uamor,
    /// Instruction authority mask register.
    Iamr,
    /// Transactional-memory register.
    Tm,
    /// Upper 32 bits of a transactional-memory register.
    TmUpper32,
    /// Event-based branching register.
    Ebb,
    /// Upper 32 bits of an event-based branching register.
    EbbUpper32,
    /// Upper 32 bits of the previous-instruction address registers.
    PrevUpper32,
    /// Target address register.
    Tar,
    /// Directed privileged doorbell exception state.
    Dpdes,
    /// Combined MAS7_MAS3 store of two MAS registers.
    Mas73,
    /// Logical partitioning control, filtered by the family mask.
    Lpcr,
    /// Logical partition id, flushes cached translations.
    Lpidr,
    /// Process id register, hashed MMU form.
    Pidr,
    /// Processor compatibility register.
    Pcr,
    /// Partition table control register.
    Ptcr,
    /// Hardware interrupt offset register, masked.
    Hior,
    /// Hypervisor maintenance exception register, and-style clear.
    Hmer,
    /// Come-from address register.
    Cfar,
    /// External PID load context.
    Eplc,
    /// External PID store context.
    Epsc,
    /// L1 data-cache control, embedded e500 form.
    E500L1Csr0,
    /// L1 instruction-cache control, embedded e500 form.
    E500L1Csr1,
    /// L2 cache control, embedded e500 form.
    E500L2Csr0,
}

/// Read/write accessor pair for one privilege tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierAccess {
    /// Read-side contract.
    pub read: Accessor<ReadHook>,
    /// Write-side contract.
    pub write: Accessor<WriteHook>,
}

impl TierAccess {
    /// Tier never provided for this model.
    pub const ABSENT: Self = Self {
        read: Accessor::Absent,
        write: Accessor::Absent,
    };

    /// Both directions exist but are illegal at this tier.
    pub const DENIED: Self = Self {
        read: Accessor::Denied,
        write: Accessor::Denied,
    };

    /// Plain load/store of the live slot value.
    pub const GENERIC: Self = Self::rw(ReadHook::Generic, WriteHook::Generic);

    /// Both directions present with the given hooks.
    #[must_use]
    pub const fn rw(read: ReadHook, write: WriteHook) -> Self {
        Self {
            read: Accessor::Present(read),
            write: Accessor::Present(write),
        }
    }

    /// Read present, write denied.
    #[must_use]
    pub const fn read_only(read: ReadHook) -> Self {
        Self {
            read: Accessor::Present(read),
            write: Accessor::Denied,
        }
    }

    /// Write present, read denied.
    #[must_use]
    pub const fn write_only(write: WriteHook) -> Self {
        Self {
            read: Accessor::Denied,
            write: Accessor::Present(write),
        }
    }

    /// True when either direction is `Denied` or `Present`.
    #[must_use]
    pub const fn is_populated(&self) -> bool {
        self.read.is_populated() || self.write.is_populated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_is_the_only_unpopulated_state() {
        assert!(!Accessor::<ReadHook>::Absent.is_populated());
        assert!(Accessor::<ReadHook>::Denied.is_populated());
        assert!(Accessor::Present(ReadHook::Generic).is_populated());
    }

    #[test]
    fn denied_carries_no_hook() {
        assert_eq!(Accessor::<WriteHook>::Denied.hook(), None);
        assert_eq!(
            Accessor::Present(WriteHook::Clear).hook(),
            Some(&WriteHook::Clear)
        );
    }

    #[test]
    fn tier_shorthands() {
        assert!(!TierAccess::ABSENT.is_populated());
        assert!(TierAccess::DENIED.is_populated());
        let tier = TierAccess::read_only(ReadHook::Tbl);
        assert!(tier.read.is_present());
        assert_eq!(tier.write, Accessor::Denied);
    }
}
