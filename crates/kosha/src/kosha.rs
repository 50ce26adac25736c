//! [`Kosha`]: a parsed registry plus its lookup indices, the type most
//! callers above this crate actually hold onto.

use fst::Map;
use rustc_hash::FxHashMap;
use slbc_types::{RegistryError, SlbcError};

use crate::binary::{read_registry, write_registry};
use crate::entry::{Entry, RegistryKind};
use crate::index::build_index;
use crate::merge::merge_append_only;

pub struct Kosha {
    kind: RegistryKind,
    version: u16,
    entries: Vec<Entry>,
    iast_index: Map<Vec<u8>>,
    id_index: FxHashMap<u64, usize>,
}

impl Kosha {
    /// Builds a `Kosha` from already-parsed entries.
    #[must_use]
    pub fn from_entries(kind: RegistryKind, version: u16, entries: Vec<Entry>) -> Self {
        let iast_index = build_index(
            &entries
                .iter()
                .map(|e| (e.iast.clone(), e.id))
                .collect::<Vec<_>>(),
        );
        let id_index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id, i))
            .collect();
        Self {
            kind,
            version,
            entries,
            iast_index,
            id_index,
        }
    }

    /// Parses a registry binary and builds its indices.
    pub fn from_bytes(bytes: &[u8], kind: RegistryKind) -> Result<Self, SlbcError> {
        let (version, entries) = read_registry(bytes, kind)?;
        Ok(Self::from_entries(kind, version, entries))
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        write_registry(self.kind, self.version, &self.entries)
    }

    #[must_use]
    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn lookup_by_iast(&self, iast: &str) -> Option<&Entry> {
        let id = self.iast_index.get(iast)?;
        self.lookup_by_id(id)
    }

    #[must_use]
    pub fn lookup_by_id(&self, id: u64) -> Option<&Entry> {
        self.id_index.get(&id).map(|&i| &self.entries[i])
    }

    /// Merges `incoming` in, append-only. Fails fatally on any ID
    /// collision, rebuilding indices only on success.
    pub fn merge(self, incoming: Vec<Entry>) -> Result<Self, RegistryError> {
        let merged = merge_append_only(self.entries, incoming)?;
        Ok(Self::from_entries(self.kind, self.version, merged))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u64, iast: &str) -> Entry {
        Entry {
            id,
            iast: iast.to_string(),
            metadata: Vec::new(),
        }
    }

    #[test]
    fn round_trips_through_bytes() {
        let kosha = Kosha::from_entries(
            RegistryKind::Dhatu,
            1,
            vec![entry(1, "gam"), entry(2, "kr")],
        );
        let bytes = kosha.to_bytes();
        let reloaded = Kosha::from_bytes(&bytes, RegistryKind::Dhatu).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.lookup_by_iast("gam").unwrap().id, 1);
    }

    #[test]
    fn merge_extends_and_rebuilds_indices() {
        let kosha = Kosha::from_entries(RegistryKind::Dhatu, 1, vec![entry(1, "gam")]);
        let merged = kosha.merge(vec![entry(2, "kr")]).unwrap();
        assert_eq!(merged.len(), 2);
        assert!(merged.lookup_by_iast("kr").is_some());
    }

    #[test]
    fn merge_rejects_id_collision() {
        let kosha = Kosha::from_entries(RegistryKind::Dhatu, 1, vec![entry(1, "gam")]);
        assert!(kosha.merge(vec![entry(1, "kr")]).is_err());
    }
}
