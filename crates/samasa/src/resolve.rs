//! Resolution order for a DICT chunk: builtin < external < embedded/hybrid
//! override. Unlike extension-registry merge in `slbc-kosha` (append-only,
//! fatal on ID collision), DICT overrides are
//! per-document and *expected* to collide with the builtin table — that
//! collision is exactly how an override takes effect, so resolution here
//! replaces by ID rather than rejecting the merge.

use std::collections::HashMap;

use slbc_kosha::{Entry, Kosha, RegistryKind};

use crate::error::SamasaError;
use crate::payload::DictPayload;

/// Resolves a DICT chunk payload against a builtin registry and an
/// optional already-loaded external registry, returning the effective
/// `Kosha` a downstream lookup should use.
pub fn resolve(
    builtin: &Kosha,
    external: Option<&Kosha>,
    payload: &DictPayload,
) -> Result<Kosha, SamasaError> {
    let kind = payload.kind();
    let mut by_id: HashMap<u64, Entry> = builtin
        .entries()
        .iter()
        .cloned()
        .map(|e| (e.id, e))
        .collect();

    match payload {
        DictPayload::Embedded { entries, .. } => {
            apply_overrides(&mut by_id, entries);
        }
        DictPayload::External { filename, .. } => {
            apply_external(&mut by_id, external, filename)?;
        }
        DictPayload::Hybrid {
            filename,
            overrides,
            ..
        } => {
            apply_external(&mut by_id, external, filename)?;
            apply_overrides(&mut by_id, overrides);
        }
    }

    let mut entries: Vec<Entry> = by_id.into_values().collect();
    entries.sort_by_key(|e| e.id);
    Ok(Kosha::from_entries(kind, 1, entries))
}

fn apply_overrides(by_id: &mut HashMap<u64, Entry>, overrides: &[Entry]) {
    for entry in overrides {
        by_id.insert(entry.id, entry.clone());
    }
}

fn apply_external(
    by_id: &mut HashMap<u64, Entry>,
    external: Option<&Kosha>,
    filename: &str,
) -> Result<(), SamasaError> {
    let Some(external) = external else {
        return Err(SamasaError::ExternalFileUnavailable {
            filename: filename.to_string(),
        });
    };
    apply_overrides(by_id, external.entries());
    Ok(())
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
    fn embedded_override_replaces_builtin_entry() {
        let builtin = Kosha::from_entries(RegistryKind::Dhatu, 1, vec![entry(1, "gam")]);
        let payload = DictPayload::Embedded {
            kind: RegistryKind::Dhatu,
            entries: vec![entry(1, "gam-variant")],
        };
        let resolved = resolve(&builtin, None, &payload).unwrap();
        assert_eq!(resolved.lookup_by_id(1).unwrap().iast, "gam-variant");
    }

    #[test]
    fn missing_external_file_is_an_error() {
        let builtin = Kosha::from_entries(RegistryKind::Dhatu, 1, vec![]);
        let payload = DictPayload::External {
            kind: RegistryKind::Dhatu,
            version: 1,
            filename: "missing.sldr".to_string(),
        };
        assert!(resolve(&builtin, None, &payload).is_err());
    }

    #[test]
    fn hybrid_applies_external_then_override() {
        let builtin = Kosha::from_entries(RegistryKind::Dhatu, 1, vec![entry(1, "gam")]);
        let external = Kosha::from_entries(RegistryKind::Dhatu, 1, vec![entry(2, "kr")]);
        let payload = DictPayload::Hybrid {
            kind: RegistryKind::Dhatu,
            version: 1,
            filename: "ext.sldr".to_string(),
            overrides: vec![entry(2, "kr-override")],
        };
        let resolved = resolve(&builtin, Some(&external), &payload).unwrap();
        assert_eq!(resolved.lookup_by_id(1).unwrap().iast, "gam");
        assert_eq!(resolved.lookup_by_id(2).unwrap().iast, "kr-override");
    }
}
