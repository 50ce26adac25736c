//! TSV → binary compiler. Source of truth for the bootstrap registries is
//! tab-separated text with `#`-prefixed comment lines; this module turns
//! that text into the [`Entry`] metadata bytes the binary format expects.
//!
//! Columns are `id<TAB>iast<TAB>...kind-specific fields`. Blank lines and
//! lines starting with `#` are skipped.

use slbc_types::RegistryError;

use crate::entry::Entry;

fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn field<'a>(fields: &[&'a str], index: usize, line: usize) -> Result<&'a str, RegistryError> {
    fields.get(index).copied().ok_or(RegistryError::MalformedTsvRow {
        line,
        reason: format!("missing column {index}"),
    })
}

fn parse_field<T: std::str::FromStr>(
    fields: &[&str],
    index: usize,
    line: usize,
) -> Result<T, RegistryError> {
    field(fields, index, line)?
        .parse()
        .map_err(|_| RegistryError::MalformedTsvRow {
            line,
            reason: format!("column {index} is not a valid number"),
        })
}

/// Dhātu metadata: `[GAṆA(4)|PADA(2)|KARMA(2)][IT flags][SET flags]`.
/// Columns: `id  iast  gana  pada  karma  it_flags  set_flags`.
pub fn compile_dhatu_tsv(text: &str) -> Result<Vec<Entry>, RegistryError> {
    let mut entries = Vec::new();
    for (line, row) in data_lines(text) {
        let fields: Vec<&str> = row.split('\t').collect();
        let id: u64 = parse_field(&fields, 0, line)?;
        let iast = field(&fields, 1, line)?.to_string();
        let gana: u8 = parse_field(&fields, 2, line)?;
        let pada: u8 = parse_field(&fields, 3, line)?;
        let karma: u8 = parse_field(&fields, 4, line)?;
        let it_flags: u8 = parse_field(&fields, 5, line)?;
        let set_flags: u8 = parse_field(&fields, 6, line)?;

        let byte0 = ((gana & 0x0F) << 4) | ((pada & 0x03) << 2) | (karma & 0x03);
        entries.push(Entry {
            id,
            iast,
            metadata: vec![byte0, it_flags, set_flags],
        });
    }
    Ok(entries)
}

/// Prātipadika metadata: `[STEM_CLASS(4)|LIṄGA(3)|rsv(1)][FLAGS]`.
/// Columns: `id  iast  stem_class  linga  flags`.
pub fn compile_pratipadika_tsv(text: &str) -> Result<Vec<Entry>, RegistryError> {
    let mut entries = Vec::new();
    for (line, row) in data_lines(text) {
        let fields: Vec<&str> = row.split('\t').collect();
        let id: u64 = parse_field(&fields, 0, line)?;
        let iast = field(&fields, 1, line)?.to_string();
        let stem_class: u8 = parse_field(&fields, 2, line)?;
        let linga: u8 = parse_field(&fields, 3, line)?;
        let flags: u8 = parse_field(&fields, 4, line)?;

        let byte0 = ((stem_class & 0x0F) << 4) | ((linga & 0x07) << 1);
        entries.push(Entry {
            id,
            iast,
            metadata: vec![byte0, flags],
        });
    }
    Ok(entries)
}

/// Sandhi-rule metadata: `[TYPE(4)|rsv(4)][ULEB128 sutra_len][sutra utf8]`.
/// Columns: `id  iast  type  sutra_ref`.
pub fn compile_sandhi_rule_tsv(text: &str) -> Result<Vec<Entry>, RegistryError> {
    let mut entries = Vec::new();
    for (line, row) in data_lines(text) {
        let fields: Vec<&str> = row.split('\t').collect();
        let id: u64 = parse_field(&fields, 0, line)?;
        let iast = field(&fields, 1, line)?.to_string();
        let rule_type: u8 = parse_field(&fields, 2, line)?;
        let sutra_ref = fields.get(3).copied().unwrap_or("");

        let mut metadata = vec![(rule_type & 0x0F) << 4];
        metadata.extend(slbc_types::uleb128::encode(sutra_ref.len() as u32));
        metadata.extend(sutra_ref.as_bytes());

        entries.push(Entry { id, iast, metadata });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_a_dhatu_row() {
        let tsv = "# comment\n1\tgam\t1\t0\t1\t0\t0\n";
        let entries = compile_dhatu_tsv(tsv).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 1);
        assert_eq!(entries[0].iast, "gam");
        assert_eq!(entries[0].metadata.len(), 3);
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let tsv = "\n# a comment\n\n1\tkr\t2\t1\t0\t0\t1\n";
        let entries = compile_dhatu_tsv(tsv).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn compiles_a_pratipadika_row() {
        let tsv = "5\trāma\t3\t0\t0\n";
        let entries = compile_pratipadika_tsv(tsv).unwrap();
        assert_eq!(entries[0].id, 5);
        assert_eq!(entries[0].metadata.len(), 2);
    }

    #[test]
    fn compiles_a_sandhi_rule_row_with_sutra_ref() {
        let tsv = "10\tiko yan aci\t1\t6.1.77\n";
        let entries = compile_sandhi_rule_tsv(tsv).unwrap();
        assert_eq!(entries[0].id, 10);
        assert!(entries[0].metadata.len() > 1);
    }

    #[test]
    fn malformed_row_is_rejected() {
        let tsv = "not-a-number\tgam\t1\t0\t1\t0\t0\n";
        assert!(compile_dhatu_tsv(tsv).is_err());
    }
}
