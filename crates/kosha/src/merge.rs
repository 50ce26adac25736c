//! Append-only merge: registries only ever grow, and an ID collision
//! between an existing registry and an incoming one is a fatal error,
//! never silently resolved by last-write-wins.

use slbc_types::RegistryError;

use crate::entry::Entry;

/// Appends `incoming` onto `existing`, failing on the first ID already
/// present in `existing`.
pub fn merge_append_only(
    mut existing: Vec<Entry>,
    incoming: Vec<Entry>,
) -> Result<Vec<Entry>, RegistryError> {
    let existing_ids: rustc_hash::FxHashSet<u64> = existing.iter().map(|e| e.id).collect();

    for entry in &incoming {
        if existing_ids.contains(&entry.id) {
            return Err(RegistryError::IdCollision { id: entry.id });
        }
    }

    existing.extend(incoming);
    Ok(existing)
}
