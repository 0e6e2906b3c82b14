//! Display formatting for server timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// `2024-03-15 14:30:00` → `15 de marzo de 2024, 14:30`.
///
/// Anything that does not parse is returned unchanged.
#[must_use]
pub fn format_full_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_owned(),
        |(year, month, day, hour, minute)| {
            format!("{day} de {} de {year}, {hour:02}:{minute:02}", MONTHS[usize::from(month - 1)])
        },
    )
}

fn parse_timestamp(raw: &str) -> Option<(u16, u8, u8, u8, u8)> {
    let raw = raw.trim();
    let (date, time) = raw.split_once([' ', 'T']).unwrap_or((raw, "00:00"));
    let mut date_parts = date.splitn(3, '-');
    let year: u16 = date_parts.next()?.parse().ok()?;
    let month: u8 = date_parts.next()?.parse().ok()?;
    let day: u8 = date_parts.next()?.parse().ok()?;
    let mut time_parts = time.splitn(3, ':');
    let hour: u8 = time_parts.next()?.parse().ok()?;
    let minute: u8 = time_parts.next()?.parse().ok()?;

    let valid = (1..=12).contains(&month) && (1..=31).contains(&day) && hour < 24 && minute < 60;
    valid.then_some((year, month, day, hour, minute))
}
