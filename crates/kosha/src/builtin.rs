//! The immutable builtin registries shipped with the codec. Compiled once
//! from the bundled bootstrap TSV text and never mutated afterward — any
//! extension registry merges into a copy, never into these.

use std::sync::LazyLock;

use crate::kosha::Kosha;
use crate::tsv::{compile_dhatu_tsv, compile_pratipadika_tsv, compile_sandhi_rule_tsv};
use crate::entry::RegistryKind;

static DHATU_TSV: &str = include_str!("../data/dhatu.tsv");
static PRATIPADIKA_TSV: &str = include_str!("../data/pratipadika.tsv");
static SANDHI_RULE_TSV: &str = include_str!("../data/sandhi_rule.tsv");

static BUILTIN_DHATU: LazyLock<Kosha> = LazyLock::new(|| {
    let entries = compile_dhatu_tsv(DHATU_TSV).expect("bundled dhatu.tsv is well-formed");
    Kosha::from_entries(RegistryKind::Dhatu, 1, entries)
});

static BUILTIN_PRATIPADIKA: LazyLock<Kosha> = LazyLock::new(|| {
    let entries =
        compile_pratipadika_tsv(PRATIPADIKA_TSV).expect("bundled pratipadika.tsv is well-formed");
    Kosha::from_entries(RegistryKind::Pratipadika, 1, entries)
});

static BUILTIN_SANDHI_RULE: LazyLock<Kosha> = LazyLock::new(|| {
    let entries =
        compile_sandhi_rule_tsv(SANDHI_RULE_TSV).expect("bundled sandhi_rule.tsv is well-formed");
    Kosha::from_entries(RegistryKind::SandhiRule, 1, entries)
});

/// The bundled dhātu bootstrap registry, built once and shared by every
/// caller in this process.
#[must_use]
pub fn builtin_dhatu() -> &'static Kosha {
    &BUILTIN_DHATU
}

/// The bundled prātipadika bootstrap registry.
#[must_use]
pub fn builtin_pratipadika() -> &'static Kosha {
    &BUILTIN_PRATIPADIKA
}

/// The bundled sandhi-rule bootstrap registry.
#[must_use]
pub fn builtin_sandhi_rule() -> &'static Kosha {
    &BUILTIN_SANDHI_RULE
}

/// Returns the builtin registry for `kind`.
#[must_use]
pub fn builtin(kind: RegistryKind) -> &'static Kosha {
    match kind {
        RegistryKind::Dhatu => builtin_dhatu(),
        RegistryKind::Pratipadika => builtin_pratipadika(),
        RegistryKind::SandhiRule => builtin_sandhi_rule(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dhatu_contains_gam() {
        assert!(builtin_dhatu().lookup_by_iast("gam").is_some());
    }

    #[test]
    fn builtin_pratipadika_contains_rama() {
        assert!(builtin_pratipadika().lookup_by_iast("rama").is_some());
    }

    #[test]
    fn builtin_sandhi_rule_contains_iko_yan_aci() {
        assert!(builtin_sandhi_rule()
            .lookup_by_iast("iko yan aci")
            .is_some());
    }

    #[test]
    fn builtin_dispatches_by_kind() {
        assert_eq!(builtin(RegistryKind::Dhatu).kind(), RegistryKind::Dhatu);
    }
}
