//! Sparse 1024-slot SPR registry with per-tier access metadata.
//!
//! A slot is claimed exactly once while a CPU model is being composed.
//! Claiming an already-occupied slot is a table bug in the model
//! definitions, reported as [`CatalogDefect::SprRegisteredTwice`] rather
//! than silently overwriting the earlier registration.

use crate::access::{Accessor, ReadHook, TierAccess, WriteHook};
use crate::defect::CatalogDefect;
use crate::spr::SPR_SLOTS;

/// Identity of an SPR that mirrors state owned by another subsystem.
///
/// Some registers are views onto state the execution engine keeps
/// elsewhere (the decrementer, the page-table base, the PMU counters).
/// Writes to those slots must be forwarded, so their registry entries
/// carry a key the engine can dispatch on. The key packs a class tag in
/// the high byte and the register number in the low bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SyncKey(u64);

impl SyncKey {
    const CLASS_TAG: u64 = 0x1030_0000_0000_0000;

    /// Key for a plain SPR slot.
    #[must_use]
    pub const fn spr(number: u16) -> Self {
        Self(Self::CLASS_TAG | number as u64)
    }

    /// Raw 64-bit encoding.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// One registry slot: identity, defaults and the three privilege tiers.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SprSlot {
    /// Architectural register name, empty while unclaimed.
    pub name: &'static str,
    /// Problem-state (user) accessors.
    pub user: TierAccess,
    /// Supervisor accessors.
    pub supervisor: TierAccess,
    /// Hypervisor accessors.
    pub hypervisor: TierAccess,
    /// Value installed at registration time and restored on reset.
    pub default: u64,
    /// Live register value.
    pub value: u64,
    /// Present when the slot mirrors externally-owned state.
    pub sync: Option<SyncKey>,
}

impl SprSlot {
    const EMPTY: Self = Self {
        name: "",
        user: TierAccess::ABSENT,
        supervisor: TierAccess::ABSENT,
        hypervisor: TierAccess::ABSENT,
        default: 0,
        value: 0,
        sync: None,
    };

    /// Whether any registration has touched this slot.
    ///
    /// A non-empty name, a non-zero live value or any populated tier
    /// counts; an explicit `Denied` accessor marks the slot occupied
    /// just as a hook does.
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        !self.name.is_empty()
            || self.value != 0
            || self.user.is_populated()
            || self.supervisor.is_populated()
            || self.hypervisor.is_populated()
    }

    /// Read accessor for the given tier index (0 user, 1 supervisor,
    /// 2 hypervisor).
    #[must_use]
    pub fn read_tier(&self, tier: usize) -> &Accessor<ReadHook> {
        match tier {
            0 => &self.user.read,
            1 => &self.supervisor.read,
            _ => &self.hypervisor.read,
        }
    }

    /// Write accessor for the given tier index.
    #[must_use]
    pub fn write_tier(&self, tier: usize) -> &Accessor<WriteHook> {
        match tier {
            0 => &self.user.write,
            1 => &self.supervisor.write,
            _ => &self.hypervisor.write,
        }
    }
}

/// The per-CPU SPR table.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SprRegistry {
    slots: Vec<SprSlot>,
}

impl Default for SprRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SprRegistry {
    /// Fresh registry with every slot unclaimed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![SprSlot::EMPTY; SPR_SLOTS],
        }
    }

    fn claim(
        &mut self,
        number: u16,
        name: &'static str,
        user: TierAccess,
        supervisor: TierAccess,
        hypervisor: TierAccess,
        sync: Option<SyncKey>,
        default: u64,
    ) -> Result<(), CatalogDefect> {
        let slot = &mut self.slots[number as usize];
        if slot.is_occupied() {
            return Err(CatalogDefect::SprRegisteredTwice { number });
        }
        *slot = SprSlot {
            name,
            user,
            supervisor,
            hypervisor,
            default,
            value: default,
            sync,
        };
        Ok(())
    }

    /// Register an SPR without hypervisor-specific behaviour; the
    /// hypervisor tier inherits the supervisor accessors.
    pub fn register(
        &mut self,
        number: u16,
        name: &'static str,
        user: TierAccess,
        supervisor: TierAccess,
        default: u64,
    ) -> Result<(), CatalogDefect> {
        self.claim(number, name, user, supervisor, supervisor, None, default)
    }

    /// Register an SPR that mirrors externally-owned state.
    pub fn register_sync(
        &mut self,
        number: u16,
        name: &'static str,
        user: TierAccess,
        supervisor: TierAccess,
        sync: SyncKey,
        default: u64,
    ) -> Result<(), CatalogDefect> {
        self.claim(
            number,
            name,
            user,
            supervisor,
            supervisor,
            Some(sync),
            default,
        )
    }

    /// Register an SPR with a distinct hypervisor tier.
    pub fn register_hv(
        &mut self,
        number: u16,
        name: &'static str,
        user: TierAccess,
        supervisor: TierAccess,
        hypervisor: TierAccess,
        default: u64,
    ) -> Result<(), CatalogDefect> {
        self.claim(number, name, user, supervisor, hypervisor, None, default)
    }

    /// Register a synchronized SPR with a distinct hypervisor tier.
    #[allow(clippy::too_many_arguments)]
    pub fn register_sync_hv(
        &mut self,
        number: u16,
        name: &'static str,
        user: TierAccess,
        supervisor: TierAccess,
        hypervisor: TierAccess,
        sync: SyncKey,
        default: u64,
    ) -> Result<(), CatalogDefect> {
        self.claim(
            number,
            name,
            user,
            supervisor,
            hypervisor,
            Some(sync),
            default,
        )
    }

    /// Slot view, registered or not.
    #[must_use]
    pub fn slot(&self, number: u16) -> &SprSlot {
        &self.slots[number as usize]
    }

    /// Live value of a slot.
    #[must_use]
    pub fn value(&self, number: u16) -> u64 {
        self.slots[number as usize].value
    }

    /// Overwrite the live value of a slot.
    pub fn set_value(&mut self, number: u16, value: u64) {
        self.slots[number as usize].value = value;
    }

    /// Restore every named slot's live value to its registration
    /// default.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            if !slot.name.is_empty() {
                slot.value = slot.default;
            }
        }
    }

    /// All named slots in ascending number order.
    pub fn iter_registered(&self) -> impl Iterator<Item = (u16, &SprSlot)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.name.is_empty())
            .map(|(number, slot)| (u16::try_from(number).unwrap_or(u16::MAX), slot))
    }

    /// Number of named slots.
    #[must_use]
    pub fn registered_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.name.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spr::{SPR_LR, SPR_XER};

    #[test]
    fn fresh_registry_is_unclaimed() {
        let reg = SprRegistry::new();
        assert_eq!(reg.registered_count(), 0);
        assert!(!reg.slot(SPR_XER).is_occupied());
    }

    #[test]
    fn plain_registration_copies_supervisor_into_hypervisor() {
        let mut reg = SprRegistry::new();
        reg.register(
            SPR_XER,
            "XER",
            TierAccess::rw(ReadHook::Xer, WriteHook::Xer),
            TierAccess::rw(ReadHook::Xer, WriteHook::Xer),
            0,
        )
        .unwrap();
        let slot = reg.slot(SPR_XER);
        assert_eq!(slot.hypervisor, slot.supervisor);
    }

    #[test]
    fn double_registration_reports_the_slot_number() {
        let mut reg = SprRegistry::new();
        reg.register(SPR_LR, "LR", TierAccess::GENERIC, TierAccess::GENERIC, 0)
            .unwrap();
        let err = reg
            .register(SPR_LR, "LR", TierAccess::GENERIC, TierAccess::GENERIC, 0)
            .unwrap_err();
        assert_eq!(err, CatalogDefect::SprRegisteredTwice { number: SPR_LR });
        assert_eq!(err.to_string(), "tried to register SPR 8 (008) twice");
    }

    #[test]
    fn denied_tier_marks_the_slot_occupied() {
        let mut reg = SprRegistry::new();
        reg.register(
            SPR_LR,
            "LR",
            TierAccess::DENIED,
            TierAccess::DENIED,
            0,
        )
        .unwrap();
        assert!(reg
            .register(SPR_LR, "LR", TierAccess::GENERIC, TierAccess::GENERIC, 0)
            .is_err());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut reg = SprRegistry::new();
        reg.register(
            SPR_LR,
            "LR",
            TierAccess::GENERIC,
            TierAccess::GENERIC,
            0x100,
        )
        .unwrap();
        reg.set_value(SPR_LR, 0xDEAD);
        reg.reset();
        assert_eq!(reg.value(SPR_LR), 0x100);
    }

    #[test]
    fn sync_key_packs_class_and_number() {
        assert_eq!(SyncKey::spr(0x016).raw(), 0x1030_0000_0000_0016);
    }
}
