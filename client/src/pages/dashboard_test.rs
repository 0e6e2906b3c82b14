use super::*;

#[test]
fn summary_items_label_each_count() {
    assert_eq!(
        summary_items((7, 4, 2)),
        [("Observaciones", 7), ("Positivas", 4), ("Con multimedia", 2)]
    );
}

#[test]
fn summary_items_keep_zeroes() {
    assert!(summary_items((0, 0, 0)).iter().all(|(_, count)| *count == 0));
}
