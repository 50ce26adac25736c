//! An FST-backed IAST -> ID index over a registry's entries, for O(log n)
//! lookup without scanning the whole entry list.

use fst::{Map, MapBuilder};

/// Builds an FST map from IAST spelling to entry ID. `fst::MapBuilder`
/// requires keys in byte-sorted order, so `entries` is sorted by IAST
/// bytes before insertion.
///
/// # Panics
///
/// Panics if two entries share the same IAST spelling (the FST format
/// cannot represent duplicate keys); registries are expected to
/// deduplicate homographs upstream by distinct IDs with shared spelling
/// handled at the lookup layer, not here.
#[must_use]
pub fn build_index(entries: &[(String, u64)]) -> Map<Vec<u8>> {
    let mut sorted: Vec<&(String, u64)> = entries.iter().collect();
    sorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
    sorted.dedup_by(|a, b| a.0 == b.0);

    let mut builder = MapBuilder::memory();
    for (iast, id) in sorted {
        builder
            .insert(iast, *id)
            .expect("keys are sorted and deduplicated");
    }
    Map::new(builder.into_inner().expect("FST build should succeed"))
        .expect("buffer was just built by this MapBuilder")
}
