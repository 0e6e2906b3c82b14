use super::*;

#[test]
fn slots_render_counts_and_percentage() {
    let slots = StatSlots::from_stats(&ReadStatistics::from_counts(3, 2));
    assert_eq!(slots.total, "3");
    assert_eq!(slots.read, "2");
    assert_eq!(slots.unread, "1");
    assert_eq!(slots.percentage, "66.7%");
    assert_eq!(slots.bar_style, "width: 66.7%");
    assert_eq!(slots.aria_valuenow, "66.7");
}

#[test]
fn whole_percentages_drop_decimal() {
    assert_eq!(format_percentage(100.0), "100");
    assert_eq!(format_percentage(0.0), "0");
    assert_eq!(format_percentage(50.0), "50");
}

#[test]
fn percentage_is_clamped() {
    assert_eq!(format_percentage(140.0), "100");
    assert_eq!(format_percentage(-3.0), "0");
}

#[test]
fn empty_state_renders_zeroes() {
    let slots = StatsState::default().slots();
    assert_eq!(slots.total, "0");
    assert_eq!(slots.percentage, "0%");
}

#[test]
fn inconsistent_stats_are_rejected() {
    let mut state = StatsState::default();
    assert!(state.apply(ReadStatistics::from_counts(4, 1)));
    let bad = ReadStatistics { total: 4, leidas: 3, no_leidas: 3, porcentaje_leidas: 75.0 };
    assert!(!state.apply(bad));
    assert_eq!(state.current.unwrap().leidas, 1);
}

#[test]
fn mark_read_moves_one_count() {
    let mut state = StatsState::default();
    state.apply(ReadStatistics::from_counts(5, 2));
    let before = state.current.unwrap();
    state.apply(ReadStatistics::from_counts(5, 3));
    let after = state.current.unwrap();

    assert_eq!(after.total, before.total);
    assert_eq!(after.leidas, before.leidas + 1);
    assert_eq!(after.no_leidas + 1, before.no_leidas);
    assert!(after.is_consistent());
}
