use super::*;

#[test]
fn formats_server_timestamp_in_spanish() {
    assert_eq!(format_full_date("2024-03-15 14:30:00"), "15 de marzo de 2024, 14:30");
}

#[test]
fn accepts_iso_separator() {
    assert_eq!(format_full_date("2023-12-01T08:05:59"), "1 de diciembre de 2023, 08:05");
}

#[test]
fn date_without_time_uses_midnight() {
    assert_eq!(format_full_date("2024-01-09"), "9 de enero de 2024, 00:00");
}

#[test]
fn unparseable_input_is_returned_unchanged() {
    assert_eq!(format_full_date("ayer"), "ayer");
    assert_eq!(format_full_date("2024-13-01 10:00:00"), "2024-13-01 10:00:00");
    assert_eq!(format_full_date(""), "");
}
