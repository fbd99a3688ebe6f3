//! Rendering for the model listing and inspection tool.
//!
//! Everything that produces output lives here so the binary shell
//! stays a thin argument parser and the renderers stay testable.

use std::fmt::Write as _;

use ppc_catalog::models::{ALIASES, HOST};
use ppc_catalog::{bring_up, catalog, CatalogDefect, Model, SprSlot, TlbKind, SVR_NONE};

/// One line per model, PVR ascending with the host pseudo-model last,
/// each followed by the aliases that point at it.
#[must_use]
pub fn render_list() -> String {
    let mut out = String::new();
    for model in catalog::enumerate() {
        if std::ptr::eq(model, &HOST) {
            let _ = writeln!(out, "PowerPC {:<16}", model.name);
            continue;
        }
        let _ = writeln!(out, "PowerPC {:<16} PVR {:08x}", model.name, model.pvr);
        for &(alias, canonical) in ALIASES {
            if canonical == model.name {
                let _ = writeln!(out, "PowerPC {alias:<16} (alias for {canonical})");
            }
        }
    }
    out
}

fn tier_flags(slot: &SprSlot, tier: usize) -> (char, char) {
    let r = if slot.read_tier(tier).is_present() { 'r' } else { '-' };
    let w = if slot.write_tier(tier).is_present() { 'w' } else { '-' };
    (r, w)
}

/// Registered-SPR dump for one brought-up model, four entries per row.
pub fn render_sprs(model: &'static Model) -> Result<String, CatalogDefect> {
    let state = bring_up(model)?;
    let mut out = String::new();
    let mut column = 0;
    for (number, slot) in state.registry.iter_registered() {
        let (sr, sw) = tier_flags(slot, 1);
        let (ur, uw) = tier_flags(slot, 0);
        let _ = write!(
            out,
            "SPR: {number:4} ({number:03x}) {:<8} s{sr}{sw} u{ur}{uw}",
            slot.name
        );
        column += 1;
        if column == 4 {
            out.push('\n');
            column = 0;
        } else {
            out.push(' ');
        }
    }
    if column != 0 {
        out.push('\n');
    }
    Ok(out)
}

fn flag_names(flags: ppc_catalog::ModelFlags) -> String {
    use ppc_catalog::ModelFlags as F;
    const NAMES: [(ppc_catalog::ModelFlags, &str); 16] = [
        (F::VRE, "VRE"),
        (F::SPE, "SPE"),
        (F::TGPR, "TGPR"),
        (F::CE, "CE"),
        (F::SE, "SE"),
        (F::DWE, "DWE"),
        (F::DE, "DE"),
        (F::BE, "BE"),
        (F::UBLE, "UBLE"),
        (F::PX, "PX"),
        (F::PMM, "PMM"),
        (F::RTC_CLK, "RTC_CLK"),
        (F::BUS_CLK, "BUS_CLK"),
        (F::CFAR, "CFAR"),
        (F::VSX, "VSX"),
        (F::TM, "TM"),
    ];
    let mut names: Vec<&str> = Vec::new();
    for (flag, name) in NAMES {
        if flags.contains(flag) {
            names.push(name);
        }
    }
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(" ")
    }
}

/// Descriptor summary for one brought-up model.
pub fn render_info(model: &'static Model) -> Result<String, CatalogDefect> {
    let state = bring_up(model)?;
    let family = model.family;
    let mut out = String::new();
    let _ = writeln!(out, "{:<16} {}", model.name, family.desc);
    let _ = writeln!(out, "PVR:        {:08x}", model.pvr);
    if model.svr != SVR_NONE {
        let _ = writeln!(out, "SVR:        {:08x}", model.svr);
    }
    let _ = writeln!(out, "MMU:        {:?}", family.mmu);
    let _ = writeln!(out, "exceptions: {:?}", family.excp);
    let _ = writeln!(out, "interrupts: {:?}", family.bus);
    let _ = writeln!(out, "MSR mask:   {:016x}", family.msr_mask);
    let _ = writeln!(out, "flags:      {}", flag_names(family.flags));
    let _ = writeln!(out, "power mgmt: {:?}", family.check_pow);
    let _ = writeln!(
        out,
        "cache:      {}B dcache line, {}B icache line",
        state.dcache_line_size, state.icache_line_size
    );
    if state.nb_bats != 0 {
        let _ = writeln!(out, "BATs:       {}", state.nb_bats);
    }
    match state.tlb.kind {
        TlbKind::None => {}
        kind => {
            let _ = writeln!(
                out,
                "TLB:        {:?}, {} entries ({} allocated), {} ways{}",
                kind,
                state.tlb.entries,
                state.tlb_store.len(),
                state.tlb.ways,
                if state.tlb.split { ", split I/D" } else { "" }
            );
        }
    }
    let _ = writeln!(out, "SPRs:       {} registered", state.registry.registered_count());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_puts_host_last_and_pads_names() {
        let listing = render_list();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(*lines.last().unwrap(), format!("PowerPC {:<16}", "host"));
        let m604 = format!("PowerPC {:<16} PVR {:08x}", "604", 0x0004_0103);
        assert!(lines.contains(&m604.as_str()));
        let g3 = format!("PowerPC {:<16} (alias for 750_v2.2)", "g3");
        assert!(lines.contains(&g3.as_str()));
    }

    #[test]
    fn spr_dump_marks_supervisor_only_registers() {
        let dump = render_sprs(catalog::resolve("604").unwrap()).unwrap();
        // SRR0 is supervisor read/write, user denied.
        assert!(dump.contains(&format!("{:<8} srw u--", "SRR0")));
        // XER is live at both tiers.
        assert!(dump.contains(&format!("{:<8} srw urw", "XER")));
    }

    #[test]
    fn info_includes_the_tlb_line_only_for_soft_tlb_models() {
        let soft = render_info(catalog::resolve("603").unwrap()).unwrap();
        assert!(soft.contains("TLB:"));
        assert!(soft.contains("split I/D"));
        let hard = render_info(catalog::resolve("604").unwrap()).unwrap();
        assert!(!hard.contains("TLB:"));
    }

    #[test]
    fn info_shows_svr_only_when_present() {
        let e500 = render_info(catalog::resolve("e500mc").unwrap()).unwrap();
        assert!(e500.contains("SVR:"));
        let classic = render_info(catalog::resolve("740_v2.0").unwrap()).unwrap();
        assert!(!classic.contains("SVR:"));
    }
}
