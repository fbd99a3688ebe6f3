//! Model resolution and enumeration.
//!
//! A selection token is either a PVR written as exactly eight hex
//! digits (an optional `0x` prefix is allowed) or a model name. A
//! well-formed PVR token is matched against the catalog by exact
//! equality only; it never falls back to name lookup or to masked
//! matching. Anything else is lowercased and tried first against the
//! alias table, then against canonical names.

use crate::model::Model;
use crate::models::{self, HOST, MODELS};

/// True when the whole token spells an eight-digit hex PVR.
fn is_pvr_token(token: &str) -> bool {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_pvr_token(token: &str) -> Option<u32> {
    if !is_pvr_token(token) {
        return None;
    }
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).ok()
}

/// Finds the first catalog model with exactly this PVR. The host
/// pseudo-model is not a candidate.
#[must_use]
pub fn by_pvr(pvr: u32) -> Option<&'static Model> {
    MODELS.iter().find(|m| m.pvr == pvr)
}

/// Finds the first catalog model whose family match predicate accepts
/// this PVR. Catalog order decides ties between overlapping masked
/// families, so reordering the table changes the answer.
#[must_use]
pub fn by_pvr_masked(pvr: u32) -> Option<&'static Model> {
    MODELS.iter().find(|m| m.pvr_matches(pvr))
}

/// Resolves a selection token to a model.
#[must_use]
pub fn resolve(token: &str) -> Option<&'static Model> {
    if let Some(pvr) = parse_pvr_token(token) {
        return by_pvr(pvr);
    }
    let name = token.to_lowercase();
    let canonical = models::alias_target(&name).unwrap_or(&name);
    models::by_name(canonical)
}

/// All models ordered by PVR ascending, ties in catalog order, with
/// the host pseudo-model appended last.
#[must_use]
pub fn enumerate() -> Vec<&'static Model> {
    let mut out: Vec<&'static Model> = MODELS.iter().collect();
    out.sort_by_key(|m| m.pvr);
    out.push(&HOST);
    out
}

/// Alias cross-references as (alias, canonical) pairs, catalog order.
#[must_use]
pub fn aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    models::ALIASES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_hex_digits_resolve_by_pvr_only() {
        let m = resolve("0x00080200").unwrap();
        assert_eq!(m.name, "740_v2.0");
        let m = resolve("00080200").unwrap();
        assert_eq!(m.name, "740_v2.0");
    }

    #[test]
    fn unknown_pvr_token_never_falls_back() {
        // Masked matching would accept this under the POWER8 family.
        assert!(by_pvr_masked(0x004D_FFFF).is_some());
        assert!(resolve("0x004DFFFF").is_none());
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(resolve("POWER9").unwrap().name, "power9_v2.0");
        assert_eq!(resolve("E500mc").unwrap().name, "e500mc");
    }

    #[test]
    fn aliases_reach_their_canonical_model() {
        for (alias, canonical) in aliases() {
            assert_eq!(resolve(alias).unwrap().name, canonical);
        }
    }

    #[test]
    fn seven_or_nine_digit_tokens_are_names_not_pvrs() {
        assert!(resolve("0080200").is_none());
        assert!(resolve("000080200").is_none());
    }

    #[test]
    fn masked_matching_covers_the_server_parts() {
        assert_eq!(by_pvr_masked(0x004E_0100).unwrap().name, "power9_v2.0");
        assert_eq!(by_pvr_masked(0x0080_FFFF).unwrap().name, "power10_v2.0");
        // Non-server parts still need exact equality.
        assert!(by_pvr_masked(0x0004_0199).is_none());
    }

    #[test]
    fn enumeration_is_pvr_ascending_with_host_last() {
        let all = enumerate();
        assert_eq!(all.last().unwrap().name, "host");
        let models = &all[..all.len() - 1];
        for pair in models.windows(2) {
            assert!(pair[0].pvr <= pair[1].pvr);
        }
        assert_eq!(models.len(), MODELS.len());
    }

    #[test]
    fn enumeration_keeps_catalog_order_on_pvr_ties() {
        let all = enumerate();
        let m740 = all.iter().position(|m| m.name == "740_v2.0").unwrap();
        let m750 = all.iter().position(|m| m.name == "750_v2.0").unwrap();
        assert_eq!(m740 + 1, m750);
    }

    #[test]
    fn host_resolves_by_name_but_not_by_pvr() {
        assert_eq!(resolve("host").unwrap().name, "host");
        assert!(resolve("0x00000000").is_none());
    }
}
