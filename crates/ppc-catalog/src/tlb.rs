//! TLB geometry descriptions and the TLBnCFG encoding used by the
//! Book E 2.06 MMU.

/// Associativity field shift within a TLBnCFG word.
pub const TLBNCFG_ASSOC_SHIFT: u32 = 24;
/// Minimum-page-size field shift.
pub const TLBNCFG_MINSIZE_SHIFT: u32 = 20;
/// Maximum-page-size field shift.
pub const TLBNCFG_MAXSIZE_SHIFT: u32 = 16;
/// Variable-page-size-available flag.
pub const TLBNCFG_AVAIL: u32 = 0x0000_4000;
/// Invalidation-protection flag.
pub const TLBNCFG_IPROT: u32 = 0x0000_8000;
/// Entry-count field mask.
pub const TLBNCFG_N_ENTRY: u32 = 0x0000_0FFF;

/// Pack a TLBnCFG configuration word.
#[must_use]
pub const fn tlbncfg(assoc: u32, minsize: u32, maxsize: u32, flags: u32, nentries: u32) -> u32 {
    (assoc << TLBNCFG_ASSOC_SHIFT)
        | (minsize << TLBNCFG_MINSIZE_SHIFT)
        | (maxsize << TLBNCFG_MAXSIZE_SHIFT)
        | flags
        | (nentries & TLBNCFG_N_ENTRY)
}

/// Entry count encoded in a TLBnCFG word.
#[must_use]
pub const fn tlbncfg_entries(cfg: u32) -> u32 {
    cfg & TLBNCFG_N_ENTRY
}

/// The kind of TLB state a model carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TlbKind {
    /// Hardware-walked or no TLB; nothing allocated.
    #[default]
    None,
    /// Software-loaded shadow TLB of the 6xx/74xx lines.
    Shadow6xx,
    /// Embedded (40x/Book E) TLB.
    Embedded,
    /// MAS-driven Book E 2.06 TLB.
    Mas,
}

/// TLB geometry of a CPU model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TlbLayout {
    /// Entry representation.
    pub kind: TlbKind,
    /// Entries per array.
    pub entries: u32,
    /// Set associativity.
    pub ways: u32,
    /// Whether instruction and data arrays are separate.
    pub split: bool,
}

impl TlbLayout {
    /// A model with no software-visible TLB state.
    pub const NONE: Self = Self {
        kind: TlbKind::None,
        entries: 0,
        ways: 0,
        split: false,
    };

    /// Unified layout.
    #[must_use]
    pub const fn unified(kind: TlbKind, entries: u32, ways: u32) -> Self {
        Self {
            kind,
            entries,
            ways,
            split: false,
        }
    }

    /// Split instruction/data layout.
    #[must_use]
    pub const fn split(kind: TlbKind, entries: u32, ways: u32) -> Self {
        Self {
            kind,
            entries,
            ways,
            split: true,
        }
    }

    /// Total entries to allocate: `entries` per array, doubled when the
    /// instruction and data arrays are separate.
    #[must_use]
    pub const fn total_entries(&self) -> u32 {
        if matches!(self.kind, TlbKind::None) {
            0
        } else if self.split {
            self.entries * 2
        } else {
            self.entries
        }
    }

    /// Entries in one way of one array.
    #[must_use]
    pub const fn entries_per_way(&self) -> u32 {
        if self.ways == 0 {
            0
        } else {
            self.entries / self.ways
        }
    }
}

/// One entry of the 6xx/74xx software-loaded shadow TLB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tlb6xxEntry {
    /// First PTE word.
    pub pte0: u64,
    /// Second PTE word.
    pub pte1: u64,
    /// Effective page number the entry shadows.
    pub epn: u64,
}

/// One entry of the embedded (40x/Book E) TLB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TlbEmbEntry {
    /// Real page number.
    pub rpn: u64,
    /// Effective page number.
    pub epn: u64,
    /// Process id tag.
    pub pid: u32,
    /// Page size in bytes.
    pub size: u64,
    /// Access protection bits.
    pub prot: u32,
    /// Storage attribute bits.
    pub attr: u32,
}

/// One entry of the MAS-driven Book E 2.06 TLB.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TlbMasEntry {
    /// MAS1: valid, IPROT, TID, page size.
    pub mas1: u32,
    /// MAS2: effective page number and attributes.
    pub mas2: u64,
    /// MAS7_3: real page number and permissions.
    pub mas7_3: u64,
    /// MAS8: virtualization control.
    pub mas8: u32,
}

/// Allocated TLB storage of one CPU instance, shaped per [`TlbKind`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TlbStore {
    /// Hardware-walked or no TLB.
    #[default]
    None,
    /// Shadow TLB entries of the 6xx/74xx lines.
    Shadow6xx(Vec<Tlb6xxEntry>),
    /// Embedded TLB entries.
    Embedded(Vec<TlbEmbEntry>),
    /// MAS TLB entries.
    Mas(Vec<TlbMasEntry>),
}

impl TlbStore {
    /// Allocates zeroed storage for a geometry, doubled when the
    /// instruction and data arrays are separate.
    #[must_use]
    pub fn allocate(layout: TlbLayout) -> Self {
        let n = layout.total_entries() as usize;
        match layout.kind {
            TlbKind::None => Self::None,
            TlbKind::Shadow6xx => Self::Shadow6xx(vec![Tlb6xxEntry::default(); n]),
            TlbKind::Embedded => Self::Embedded(vec![TlbEmbEntry::default(); n]),
            TlbKind::Mas => Self::Mas(vec![TlbMasEntry::default(); n]),
        }
    }

    /// The shape tag of the allocated storage.
    #[must_use]
    pub const fn kind(&self) -> TlbKind {
        match self {
            Self::None => TlbKind::None,
            Self::Shadow6xx(_) => TlbKind::Shadow6xx,
            Self::Embedded(_) => TlbKind::Embedded,
            Self::Mas(_) => TlbKind::Mas,
        }
    }

    /// Number of allocated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Shadow6xx(e) => e.len(),
            Self::Embedded(e) => e.len(),
            Self::Mas(e) => e.len(),
        }
    }

    /// Whether no entries are allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tlbncfg_packs_the_documented_fields() {
        let cfg = tlbncfg(4, 1, 1, 0, 512);
        assert_eq!(cfg >> TLBNCFG_ASSOC_SHIFT, 4);
        assert_eq!((cfg >> TLBNCFG_MINSIZE_SHIFT) & 0xF, 1);
        assert_eq!((cfg >> TLBNCFG_MAXSIZE_SHIFT) & 0xF, 1);
        assert_eq!(tlbncfg_entries(cfg), 512);

        let cfg = tlbncfg(16, 1, 12, TLBNCFG_AVAIL | TLBNCFG_IPROT, 16);
        assert_ne!(cfg & TLBNCFG_AVAIL, 0);
        assert_ne!(cfg & TLBNCFG_IPROT, 0);
        assert_eq!(tlbncfg_entries(cfg), 16);
    }

    #[test]
    fn split_layouts_double_the_allocation() {
        let split = TlbLayout::split(TlbKind::Shadow6xx, 64, 2);
        assert_eq!(split.total_entries(), 128);
        let unified = TlbLayout::unified(TlbKind::Embedded, 64, 1);
        assert_eq!(unified.total_entries(), 64);
        assert_eq!(TlbLayout::NONE.total_entries(), 0);
    }

    #[test]
    fn stores_are_shaped_by_the_layout_kind() {
        let store = TlbStore::allocate(TlbLayout::split(TlbKind::Shadow6xx, 64, 2));
        assert_eq!(store.kind(), TlbKind::Shadow6xx);
        assert_eq!(store.len(), 128);
        let TlbStore::Shadow6xx(entries) = &store else {
            panic!("wrong variant");
        };
        assert_eq!(entries[0], Tlb6xxEntry::default());

        let store = TlbStore::allocate(TlbLayout::unified(TlbKind::Mas, 576, 2));
        assert!(matches!(&store, TlbStore::Mas(e) if e.len() == 576));

        assert_eq!(TlbStore::allocate(TlbLayout::NONE), TlbStore::None);
        assert!(TlbStore::default().is_empty());
    }
}
