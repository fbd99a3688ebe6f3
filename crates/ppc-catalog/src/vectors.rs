//! Exception vector identities and the per-family vector layouts.
//!
//! Classic families hard-wire vector offsets; Book E families leave
//! most vectors software-settable through IVORs, whose writable bits
//! are described by the table's IVOR/IVPR masks.

use crate::defect::CatalogDefect;

/// Logical exception vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum Vector {
    /// System reset.
    Reset = 0,
    /// Critical input.
    Critical,
    /// Machine check.
    MachineCheck,
    /// Data storage.
    DataStorage,
    /// Data segment (64-bit).
    DataSegment,
    /// Instruction storage.
    InstStorage,
    /// Instruction segment (64-bit).
    InstSegment,
    /// External input.
    External,
    /// Alignment.
    Alignment,
    /// Program.
    Program,
    /// Floating-point unavailable.
    FpUnavailable,
    /// System call.
    Syscall,
    /// Scalable vectored system call.
    SyscallVectored,
    /// Auxiliary processor unavailable.
    Apu,
    /// Decrementer.
    Decrementer,
    /// Hypervisor decrementer.
    HvDecrementer,
    /// Fixed-interval timer.
    Fit,
    /// Watchdog timer.
    Wdt,
    /// Programmable-interval timer.
    Pit,
    /// Data TLB miss.
    DataTlbMiss,
    /// Instruction TLB miss.
    InstTlbMiss,
    /// Data TLB error.
    DataTlbError,
    /// Instruction TLB error.
    InstTlbError,
    /// Debug.
    Debug,
    /// SPE/embedded FP unavailable.
    SpeUnavailable,
    /// Embedded FP data exception.
    EmbFpData,
    /// Embedded FP round exception.
    EmbFpRound,
    /// Trace.
    Trace,
    /// Floating-point assist.
    FpAssist,
    /// Emulation trap.
    Emulation,
    /// Instruction address breakpoint.
    Iabr,
    /// Data address breakpoint.
    Dabr,
    /// System management interrupt.
    Smi,
    /// Thermal management.
    Therm,
    /// Performance monitor.
    PerfMon,
    /// Vector unit unavailable.
    VpuUnavailable,
    /// Vector assist.
    VpuAssist,
    /// Maintenance.
    Maintenance,
    /// I/O error (601).
    Io,
    /// Run mode (601).
    RunMode,
    /// Maskable external breakpoint.
    Mextbr,
    /// Non-maskable external breakpoint.
    Nmextbr,
    /// Hypervisor data storage.
    HvDataStorage,
    /// Hypervisor instruction storage.
    HvInstStorage,
    /// Hypervisor emulation assist.
    HvEmulation,
    /// Hypervisor maintenance.
    HvMaintenance,
    /// Directed privileged doorbell.
    Doorbell,
    /// Directed hypervisor doorbell.
    HvDoorbell,
    /// Hypervisor virtualization.
    HvVirt,
    /// VSX unavailable.
    VsxUnavailable,
    /// Facility unavailable.
    FacilityUnavailable,
    /// Hypervisor facility unavailable.
    HvFacilityUnavailable,
    /// Instruction fetch TLB miss (software-loaded 6xx).
    IfTlbMiss,
    /// Data load TLB miss (software-loaded 6xx).
    DlTlbMiss,
    /// Data store TLB miss (software-loaded 6xx).
    DsTlbMiss,
}

impl Vector {
    /// Number of distinct vectors.
    pub const COUNT: usize = Self::DsTlbMiss as usize + 1;
}

/// A family's exception vector layout.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VectorTable {
    slots: [Option<u64>; Vector::COUNT],
    /// Writable bits of the IVOR registers (Book E families).
    pub ivor_mask: u32,
    /// Writable bits of the IVPR register (Book E families).
    pub ivpr_mask: u32,
    /// Address fetched on hard reset.
    pub hreset: u64,
}

impl Default for VectorTable {
    fn default() -> Self {
        Self::new(0)
    }
}

impl VectorTable {
    fn new(hreset: u64) -> Self {
        Self {
            slots: [None; Vector::COUNT],
            ivor_mask: 0,
            ivpr_mask: 0,
            hreset,
        }
    }

    fn set(&mut self, vector: Vector, offset: u64) -> &mut Self {
        self.slots[vector as usize] = Some(offset);
        self
    }

    /// Offset for a vector the layout defines.
    pub fn vector(&self, vector: Vector) -> Result<u64, CatalogDefect> {
        self.slots[vector as usize].ok_or(CatalogDefect::VectorUndefined {
            vector: vector as usize,
        })
    }

    /// Whether the layout defines the vector.
    #[must_use]
    pub fn is_defined(&self, vector: Vector) -> bool {
        self.slots[vector as usize].is_some()
    }

    /// Number of vectors the layout defines.
    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.slots.iter().filter(|v| v.is_some()).count()
    }

    /// All defined vectors with their offsets.
    pub fn iter_defined(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.map(|offset| (i, offset)))
    }
}

/// 40x family running without address translation.
#[must_use]
pub fn layout_40x_real() -> VectorTable {
    let mut t = VectorTable::new(0xFFFF_FFFC);
    t.set(Vector::Critical, 0x0000_0100)
        .set(Vector::MachineCheck, 0x0000_0200)
        .set(Vector::External, 0x0000_0500)
        .set(Vector::Alignment, 0x0000_0600)
        .set(Vector::Program, 0x0000_0700)
        .set(Vector::Syscall, 0x0000_0C00)
        .set(Vector::Pit, 0x0000_1000)
        .set(Vector::Fit, 0x0000_1010)
        .set(Vector::Wdt, 0x0000_1020)
        .set(Vector::Debug, 0x0000_2000);
    t.ivor_mask = 0x0000_FFF0;
    t.ivpr_mask = 0xFFFF_0000;
    t
}

/// 40x family with the software-loaded TLB.
#[must_use]
pub fn layout_40x_mmu() -> VectorTable {
    let mut t = layout_40x_real();
    t.set(Vector::DataStorage, 0x0000_0300)
        .set(Vector::InstStorage, 0x0000_0400)
        .set(Vector::DataTlbMiss, 0x0000_1100)
        .set(Vector::InstTlbMiss, 0x0000_1200);
    t
}

/// MPC5xx.
#[must_use]
pub fn layout_mpc5xx() -> VectorTable {
    let mut t = VectorTable::new(0x0000_0100);
    t.set(Vector::Reset, 0x0000_0100)
        .set(Vector::MachineCheck, 0x0000_0200)
        .set(Vector::External, 0x0000_0500)
        .set(Vector::Alignment, 0x0000_0600)
        .set(Vector::Program, 0x0000_0700)
        .set(Vector::FpUnavailable, 0x0000_0900)
        .set(Vector::Decrementer, 0x0000_0900)
        .set(Vector::Syscall, 0x0000_0C00)
        .set(Vector::Trace, 0x0000_0D00)
        .set(Vector::FpAssist, 0x0000_0E00)
        .set(Vector::Emulation, 0x0000_1000)
        .set(Vector::Dabr, 0x0000_1C00)
        .set(Vector::Iabr, 0x0000_1C00)
        .set(Vector::Mextbr, 0x0000_1E00)
        .set(Vector::Nmextbr, 0x0000_1F00);
    t.ivor_mask = 0x0000_FFF0;
    t.ivpr_mask = 0xFFFF_0000;
    t
}

/// MPC8xx.
#[must_use]
pub fn layout_mpc8xx() -> VectorTable {
    let mut t = layout_mpc5xx();
    t.set(Vector::DataStorage, 0x0000_0300)
        .set(Vector::InstStorage, 0x0000_0400)
        .set(Vector::InstTlbMiss, 0x0000_1100)
        .set(Vector::DataTlbMiss, 0x0000_1200)
        .set(Vector::InstTlbError, 0x0000_1300)
        .set(Vector::DataTlbError, 0x0000_1400);
    t
}

/// G2 core.
#[must_use]
pub fn layout_g2() -> VectorTable {
    let mut t = VectorTable::new(0x0000_0100);
    t.set(Vector::Reset, 0x0000_0100)
        .set(Vector::MachineCheck, 0x0000_0200)
        .set(Vector::DataStorage, 0x0000_0300)
        .set(Vector::InstStorage, 0x0000_0400)
        .set(Vector::External, 0x0000_0500)
        .set(Vector::Alignment, 0x0000_0600)
        .set(Vector::Program, 0x0000_0700)
        .set(Vector::FpUnavailable, 0x0000_0800)
        .set(Vector::Decrementer, 0x0000_0900)
        .set(Vector::Critical, 0x0000_0A00)
        .set(Vector::Syscall, 0x0000_0C00)
        .set(Vector::Trace, 0x0000_0D00)
        .set(Vector::IfTlbMiss, 0x0000_1000)
        .set(Vector::DlTlbMiss, 0x0000_1100)
        .set(Vector::DsTlbMiss, 0x0000_1200)
        .set(Vector::Iabr, 0x0000_1300)
        .set(Vector::Smi, 0x0000_1400);
    t
}

/// Book E core with every IVOR software-settable.
#[must_use]
pub fn layout_booke() -> VectorTable {
    let mut t = VectorTable::new(0xFFFF_FFFC);
    for v in [
        Vector::Critical,
        Vector::MachineCheck,
        Vector::DataStorage,
        Vector::InstStorage,
        Vector::External,
        Vector::Alignment,
        Vector::Program,
        Vector::FpUnavailable,
        Vector::Syscall,
        Vector::Apu,
        Vector::Decrementer,
        Vector::Fit,
        Vector::Wdt,
        Vector::DataTlbMiss,
        Vector::InstTlbMiss,
        Vector::Debug,
    ] {
        t.set(v, 0x0000_0000);
    }
    t.ivor_mask = 0x0000_FFF0;
    t.ivpr_mask = 0xFFFF_0000;
    t
}

/// e200 core, which adds the embedded FP vectors and pins reset.
#[must_use]
pub fn layout_e200(ivpr_mask: u32) -> VectorTable {
    let mut t = layout_booke();
    t.set(Vector::Reset, 0x0000_0FFC)
        .set(Vector::SpeUnavailable, 0x0000_0000)
        .set(Vector::EmbFpData, 0x0000_0000)
        .set(Vector::EmbFpRound, 0x0000_0000);
    t.ivor_mask = 0x0000_FFF7;
    t.ivpr_mask = ivpr_mask;
    t
}

/// 601.
#[must_use]
pub fn layout_601() -> VectorTable {
    let mut t = VectorTable::new(0x0000_0100);
    t.set(Vector::Reset, 0x0000_0100)
        .set(Vector::MachineCheck, 0x0000_0200)
        .set(Vector::DataStorage, 0x0000_0300)
        .set(Vector::InstStorage, 0x0000_0400)
        .set(Vector::External, 0x0000_0500)
        .set(Vector::Alignment, 0x0000_0600)
        .set(Vector::Program, 0x0000_0700)
        .set(Vector::FpUnavailable, 0x0000_0800)
        .set(Vector::Decrementer, 0x0000_0900)
        .set(Vector::Io, 0x0000_0A00)
        .set(Vector::Syscall, 0x0000_0C00)
        .set(Vector::RunMode, 0x0000_2000);
    t
}

fn layout_classic_base() -> VectorTable {
    let mut t = VectorTable::new(0x0000_0100);
    t.set(Vector::Reset, 0x0000_0100)
        .set(Vector::MachineCheck, 0x0000_0200)
        .set(Vector::DataStorage, 0x0000_0300)
        .set(Vector::InstStorage, 0x0000_0400)
        .set(Vector::External, 0x0000_0500)
        .set(Vector::Alignment, 0x0000_0600)
        .set(Vector::Program, 0x0000_0700)
        .set(Vector::FpUnavailable, 0x0000_0800)
        .set(Vector::Decrementer, 0x0000_0900)
        .set(Vector::Syscall, 0x0000_0C00)
        .set(Vector::Trace, 0x0000_0D00);
    t
}

/// 602.
#[must_use]
pub fn layout_602() -> VectorTable {
    let mut t = layout_classic_base();
    t.set(Vector::IfTlbMiss, 0x0000_1000)
        .set(Vector::DlTlbMiss, 0x0000_1100)
        .set(Vector::DsTlbMiss, 0x0000_1200)
        .set(Vector::Iabr, 0x0000_1300)
        .set(Vector::Smi, 0x0000_1400)
        .set(Vector::Wdt, 0x0000_1500)
        .set(Vector::Emulation, 0x0000_1600);
    t
}

/// 603 and derivatives.
#[must_use]
pub fn layout_603() -> VectorTable {
    let mut t = layout_classic_base();
    t.set(Vector::IfTlbMiss, 0x0000_1000)
        .set(Vector::DlTlbMiss, 0x0000_1100)
        .set(Vector::DsTlbMiss, 0x0000_1200)
        .set(Vector::Iabr, 0x0000_1300)
        .set(Vector::Smi, 0x0000_1400);
    t
}

/// 604.
#[must_use]
pub fn layout_604() -> VectorTable {
    let mut t = layout_classic_base();
    t.set(Vector::PerfMon, 0x0000_0F00)
        .set(Vector::Iabr, 0x0000_1300)
        .set(Vector::Smi, 0x0000_1400);
    t
}

/// 740/750.
#[must_use]
pub fn layout_7x0() -> VectorTable {
    let mut t = layout_604();
    t.set(Vector::Therm, 0x0000_1700);
    t
}

/// 750CL, which drops the thermal vector.
#[must_use]
pub fn layout_750cl() -> VectorTable {
    layout_604()
}

/// 750CX, which drops SMI but keeps thermal.
#[must_use]
pub fn layout_750cx() -> VectorTable {
    let mut t = layout_classic_base();
    t.set(Vector::PerfMon, 0x0000_0F00)
        .set(Vector::Iabr, 0x0000_1300)
        .set(Vector::Therm, 0x0000_1700);
    t
}

/// 745/755.
#[must_use]
pub fn layout_7x5() -> VectorTable {
    let mut t = layout_604();
    t.set(Vector::IfTlbMiss, 0x0000_1000)
        .set(Vector::DlTlbMiss, 0x0000_1100)
        .set(Vector::DsTlbMiss, 0x0000_1200)
        .set(Vector::Therm, 0x0000_1700);
    t
}

/// 7400/7410.
#[must_use]
pub fn layout_7400() -> VectorTable {
    let mut t = layout_classic_base();
    t.set(Vector::PerfMon, 0x0000_0F00)
        .set(Vector::VpuUnavailable, 0x0000_0F20)
        .set(Vector::Iabr, 0x0000_1300)
        .set(Vector::Smi, 0x0000_1400)
        .set(Vector::VpuAssist, 0x0000_1600)
        .set(Vector::Therm, 0x0000_1700);
    t
}

/// 7450 and derivatives.
#[must_use]
pub fn layout_7450() -> VectorTable {
    let mut t = layout_classic_base();
    t.set(Vector::PerfMon, 0x0000_0F00)
        .set(Vector::VpuUnavailable, 0x0000_0F20)
        .set(Vector::IfTlbMiss, 0x0000_1000)
        .set(Vector::DlTlbMiss, 0x0000_1100)
        .set(Vector::DsTlbMiss, 0x0000_1200)
        .set(Vector::Iabr, 0x0000_1300)
        .set(Vector::Smi, 0x0000_1400)
        .set(Vector::VpuAssist, 0x0000_1600);
    t
}

/// 970 and POWER5+.
#[must_use]
pub fn layout_970() -> VectorTable {
    let mut t = VectorTable::new(0x0000_0100);
    t.set(Vector::Reset, 0x0000_0100)
        .set(Vector::MachineCheck, 0x0000_0200)
        .set(Vector::DataStorage, 0x0000_0300)
        .set(Vector::DataSegment, 0x0000_0380)
        .set(Vector::InstStorage, 0x0000_0400)
        .set(Vector::InstSegment, 0x0000_0480)
        .set(Vector::External, 0x0000_0500)
        .set(Vector::Alignment, 0x0000_0600)
        .set(Vector::Program, 0x0000_0700)
        .set(Vector::FpUnavailable, 0x0000_0800)
        .set(Vector::Decrementer, 0x0000_0900)
        .set(Vector::HvDecrementer, 0x0000_0980)
        .set(Vector::Syscall, 0x0000_0C00)
        .set(Vector::Trace, 0x0000_0D00)
        .set(Vector::PerfMon, 0x0000_0F00)
        .set(Vector::VpuUnavailable, 0x0000_0F20)
        .set(Vector::Iabr, 0x0000_1300)
        .set(Vector::Maintenance, 0x0000_1600)
        .set(Vector::VpuAssist, 0x0000_1700)
        .set(Vector::Therm, 0x0000_1800);
    t
}

fn layout_books_base() -> VectorTable {
    let mut t = VectorTable::new(0x0000_0100);
    t.set(Vector::Reset, 0x0000_0100)
        .set(Vector::MachineCheck, 0x0000_0200)
        .set(Vector::DataStorage, 0x0000_0300)
        .set(Vector::DataSegment, 0x0000_0380)
        .set(Vector::InstStorage, 0x0000_0400)
        .set(Vector::InstSegment, 0x0000_0480)
        .set(Vector::External, 0x0000_0500)
        .set(Vector::Alignment, 0x0000_0600)
        .set(Vector::Program, 0x0000_0700)
        .set(Vector::FpUnavailable, 0x0000_0800)
        .set(Vector::Decrementer, 0x0000_0900)
        .set(Vector::HvDecrementer, 0x0000_0980)
        .set(Vector::Syscall, 0x0000_0C00)
        .set(Vector::Trace, 0x0000_0D00);
    t
}

/// POWER7.
#[must_use]
pub fn layout_power7() -> VectorTable {
    let mut t = layout_books_base();
    t.set(Vector::HvDataStorage, 0x0000_0E00)
        .set(Vector::HvInstStorage, 0x0000_0E20)
        .set(Vector::HvEmulation, 0x0000_0E40)
        .set(Vector::HvMaintenance, 0x0000_0E60)
        .set(Vector::PerfMon, 0x0000_0F00)
        .set(Vector::VpuUnavailable, 0x0000_0F20)
        .set(Vector::VsxUnavailable, 0x0000_0F40);
    t
}

/// POWER8.
#[must_use]
pub fn layout_power8() -> VectorTable {
    let mut t = layout_power7();
    t.set(Vector::Doorbell, 0x0000_0A00)
        .set(Vector::HvDoorbell, 0x0000_0E80)
        .set(Vector::FacilityUnavailable, 0x0000_0F60)
        .set(Vector::HvFacilityUnavailable, 0x0000_0F80);
    t
}

/// POWER9 and POWER10.
#[must_use]
pub fn layout_power9() -> VectorTable {
    let mut t = layout_power8();
    t.set(Vector::HvVirt, 0x0000_0EA0)
        .set(Vector::SyscallVectored, 0x0000_0000);
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booke_layout_leaves_reset_undefined() {
        let t = layout_booke();
        assert_eq!(
            t.vector(Vector::Reset),
            Err(CatalogDefect::VectorUndefined {
                vector: Vector::Reset as usize,
            })
        );
        assert_eq!(t.vector(Vector::Critical), Ok(0));
        assert_eq!(t.ivor_mask, 0x0000_FFF0);
        assert_eq!(t.hreset, 0xFFFF_FFFC);
    }

    #[test]
    fn classic_layouts_pin_reset_at_0x100() {
        for t in [layout_601(), layout_603(), layout_604(), layout_970()] {
            assert_eq!(t.vector(Vector::Reset), Ok(0x100));
            assert_eq!(t.hreset, 0x100);
        }
    }

    #[test]
    fn mpc5xx_layouts_carry_the_embedded_vector_masks() {
        for t in [layout_mpc5xx(), layout_mpc8xx()] {
            assert_eq!(t.ivor_mask, 0x0000_FFF0);
            assert_eq!(t.ivpr_mask, 0xFFFF_0000);
        }
    }

    #[test]
    fn power9_extends_power8() {
        let p8 = layout_power8();
        let p9 = layout_power9();
        assert!(!p8.is_defined(Vector::HvVirt));
        assert_eq!(p9.vector(Vector::HvVirt), Ok(0xEA0));
        assert_eq!(p9.vector(Vector::SyscallVectored), Ok(0));
        assert_eq!(p9.vector(Vector::Doorbell), Ok(0xA00));
    }

    #[test]
    fn mpc8xx_adds_tlb_vectors_to_mpc5xx() {
        let t5 = layout_mpc5xx();
        let t8 = layout_mpc8xx();
        assert!(!t5.is_defined(Vector::InstTlbMiss));
        assert_eq!(t8.vector(Vector::InstTlbMiss), Ok(0x1100));
        assert_eq!(t8.vector(Vector::DataTlbError), Ok(0x1400));
    }
}
