//! Per-CPU mutable state assembled by the bring-up pipeline.

use crate::model::{BusModel, CheckPow, ExcpModel, MmuModel, Model};
use crate::msr::ModelFlags;
use crate::registry::SprRegistry;
use crate::tlb::{TlbLayout, TlbStore};
use crate::vectors::VectorTable;

/// Bring-up pipeline phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitPhase {
    /// Nothing done yet.
    Uninitialized,
    /// SPR registry cleared.
    RegistryReset,
    /// Architecture-wide SPRs registered, PVR/SVR installed.
    GenericRegistered,
    /// Family construction routine has run.
    ModelBuilt,
    /// Consistency checks passed.
    Checked,
    /// TLB storage sized and allocated.
    TlbAllocated,
    /// Family scalars copied in; the CPU is usable.
    Ready,
}

/// State of one CPU instance while and after it is brought up.
#[derive(Debug, Clone)]
pub struct CpuState {
    /// The model being instantiated.
    pub model: &'static Model,
    /// Current pipeline phase.
    pub phase: InitPhase,
    /// SPR table.
    pub registry: SprRegistry,
    /// Exception vector layout, filled by the family's build routine.
    pub vectors: VectorTable,
    /// MSR mask, copied from the family when the CPU becomes ready.
    pub msr_mask: u64,
    /// Capability flags, copied from the family when ready.
    pub flags: ModelFlags,
    /// Power-down gating, copied from the family when ready.
    pub check_pow: CheckPow,
    /// MMU model, copied from the family when ready.
    pub mmu: MmuModel,
    /// Exception model, copied from the family when ready.
    pub excp: ExcpModel,
    /// Interrupt input model, copied from the family when ready.
    pub bus: BusModel,
    /// Number of BAT pairs registered.
    pub nb_bats: u32,
    /// TLB geometry, set by the family's build routine.
    pub tlb: TlbLayout,
    /// Allocated TLB storage, shaped per the geometry's kind.
    pub tlb_store: TlbStore,
    /// Number of PID registers (Book E 2.06).
    pub nb_pids: u32,
    /// Writable MAS register mask (Book E 2.06).
    pub mas_mask: u32,
    /// TLBnCFG words (Book E 2.06).
    pub tlbncfg: [u32; 4],
    /// MMUCFG value (Book E 2.06).
    pub mmucfg: u32,
    /// Default vector status value, non-zero only for models with the
    /// vector unit (non-Java mode enabled out of reset).
    pub vscr: u32,
    /// Data cache line size in bytes.
    pub dcache_line_size: u32,
    /// Instruction cache line size in bytes.
    pub icache_line_size: u32,
}

impl CpuState {
    /// Fresh, un-initialized state for a model.
    #[must_use]
    pub fn new(model: &'static Model) -> Self {
        Self {
            model,
            phase: InitPhase::Uninitialized,
            registry: SprRegistry::new(),
            vectors: VectorTable::default(),
            msr_mask: 0,
            flags: ModelFlags::NONE,
            check_pow: CheckPow::Never,
            mmu: MmuModel::Real,
            excp: ExcpModel::E601,
            bus: BusModel::Ppc6xx,
            nb_bats: 0,
            tlb: TlbLayout::NONE,
            tlb_store: TlbStore::None,
            nb_pids: 0,
            mas_mask: 0,
            tlbncfg: [0; 4],
            mmucfg: 0,
            vscr: 0,
            dcache_line_size: 32,
            icache_line_size: 32,
        }
    }
}
