use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_reads_both_values() {
    let cfg = MailConfig::from_lookup(lookup_from(&[
        ("RESEND_API_KEY", "re_123"),
        ("RESEND_FROM", "Teaching Notes <no-reply@example.com>"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_key, "re_123");
    assert_eq!(cfg.from, "Teaching Notes <no-reply@example.com>");
}

#[test]
fn missing_api_key_is_reported() {
    let err = MailConfig::from_lookup(lookup_from(&[("RESEND_FROM", "a@b.co")])).unwrap_err();
    assert!(matches!(err, MailError::MissingConfig { ref var } if var == "RESEND_API_KEY"));
}

#[test]
fn blank_sender_counts_as_missing() {
    let err = MailConfig::from_lookup(lookup_from(&[("RESEND_API_KEY", "k"), ("RESEND_FROM", "   ")])).unwrap_err();
    assert!(matches!(err, MailError::MissingConfig { ref var } if var == "RESEND_FROM"));
}

#[test]
fn sender_without_at_is_invalid() {
    let err = MailConfig::from_lookup(lookup_from(&[("RESEND_API_KEY", "k"), ("RESEND_FROM", "nobody")])).unwrap_err();
    assert!(matches!(err, MailError::InvalidConfig(_)));
}
