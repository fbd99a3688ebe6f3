//! PowerPC CPU model catalog and privilege-gated SPR access control.
//!
//! The crate describes, per CPU model, which special-purpose registers
//! exist, which privilege tiers may touch them and through which
//! accessor hooks, and drives the staged bring-up pipeline that turns
//! a catalog entry into a usable [`CpuState`].

/// Defect taxonomy for catalog authoring errors.
pub mod defect;
pub use defect::{CatalogDefect, DefectClass};

/// Privilege-tier accessor model: read/write hooks per tier.
pub mod access;
pub use access::{Accessor, ReadHook, TierAccess, WriteHook};

/// Special-purpose register numbers.
pub mod spr;

/// The 1024-slot SPR registry and the external-sync key scheme.
pub mod registry;
pub use registry::{SprRegistry, SprSlot, SyncKey};

/// MSR bit positions, capability flags and the consistency checks.
pub mod msr;
pub use msr::{msr_bit, verify_msr_flags, ModelFlags};

/// Exception vector identities and per-family vector layouts.
pub mod vectors;
pub use vectors::{Vector, VectorTable};

/// TLB geometry descriptors and the Book E TLBnCFG word.
pub mod tlb;
pub use tlb::{tlbncfg, tlbncfg_entries, TlbKind, TlbLayout, TlbStore};

/// Family and model descriptors.
pub mod model;
pub use model::{
    BusModel, CheckPow, ExcpModel, Family, FamilyBuild, MmuModel, Model, PvrMatch,
    SERVER_PVR_MASK, SVR_NONE,
};

/// Per-CPU state assembled by the bring-up pipeline.
pub mod state;
pub use state::{CpuState, InitPhase};

/// SPR registration groups shared between families.
pub mod groups;

/// The model catalog: every family, model and alias.
pub mod models;

/// Model resolution and sorted enumeration.
pub mod catalog;
pub use catalog::{by_pvr, by_pvr_masked, enumerate, resolve};

/// The staged bring-up pipeline.
pub mod init;
pub use init::bring_up;

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
