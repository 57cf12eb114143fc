use super::*;

#[test]
fn standards_list_is_non_empty_with_unique_keys() {
    assert!(!COMPLIANCE_STANDARDS.is_empty());
    for (i, a) in COMPLIANCE_STANDARDS.iter().enumerate() {
        for b in &COMPLIANCE_STANDARDS[i + 1..] {
            assert_ne!(a.value, b.value);
        }
    }
}

#[test]
fn standard_label_resolves_known_keys_and_echoes_unknown_ones() {
    assert_eq!(standard_label("ISO_27001"), "ISO 27001:2022");
    assert_eq!(standard_label("SOC2"), "SOC2");
}
