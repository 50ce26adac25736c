//! Cross-function integration checks for the transformation algebra,
//! composing vowel and consonant ops the way a sandhi rule would.

use slbc_sandhi::{dirgha, guna, hrasva, jastva, samprasarana_to_svara, toggle_voice, vrddhi};

#[test]
fn guna_then_vrddhi_differ_only_in_grade() {
    let i = 0x44;
    let guna_form = guna(i).unwrap();
    let vrddhi_form = vrddhi(i).unwrap();
    assert_ne!(guna_form, vrddhi_form);
    assert_eq!(guna_form, 0x85);
    assert_eq!(vrddhi_form, 0x86);
}

#[test]
fn hrasva_then_dirgha_roundtrips_quantity() {
    let ii = 0x84; // ī
    let shortened = hrasva(ii).unwrap();
    assert_eq!(shortened, 0x44); // i
    let lengthened = dirgha(shortened).unwrap();
    assert_eq!(lengthened, ii);
}

#[test]
fn jastva_then_toggle_voice_returns_to_start() {
    let ka = 0x00;
    let voiced = jastva(ka).unwrap();
    assert_eq!(toggle_voice(voiced).unwrap(), ka);
}

#[test]
fn samprasarana_chain_resolves_all_four_semivowels() {
    assert_eq!(samprasarana_to_svara(0x28).unwrap(), 0x44); // ya -> i
    assert_eq!(samprasarana_to_svara(0x2B).unwrap(), 0x48); // va -> u
    assert_eq!(samprasarana_to_svara(0x29).unwrap(), 0x4C); // ra -> ṛ
    assert_eq!(samprasarana_to_svara(0x34).unwrap(), 0x4F); // la -> ḷ
}
