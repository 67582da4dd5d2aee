use deals_core::prelude::*;

fn tracker() -> (ManualClock, CopyFeedback<ManualClock>) {
    let clock = ManualClock::new();
    (clock.clone(), CopyFeedback::new(clock))
}

#[test]
fn test_flag_expires_after_two_seconds() {
    let (clock, mut feedback) = tracker();
    feedback.flag("SAVE30TECH");
    assert!(feedback.is_flagged("SAVE30TECH"));

    clock.advance(FEEDBACK_DURATION);
    assert!(!feedback.is_flagged("SAVE30TECH"));
}

#[test]
fn test_reflag_restarts_expiry() {
    let (clock, mut feedback) = tracker();
    feedback.flag("SAVE30TECH");

    clock.advance_ms(1000);
    feedback.flag("SAVE30TECH");

    // 2500ms after the first flag
    clock.advance_ms(1500);
    assert!(feedback.is_flagged("SAVE30TECH"));

    // 1999ms after the second flag
    clock.advance_ms(499);
    assert!(feedback.is_flagged("SAVE30TECH"));

    // 2000ms after the second flag
    clock.advance_ms(1);
    assert!(!feedback.is_flagged("SAVE30TECH"));
}

#[test]
fn test_codes_expire_independently() {
    let (clock, mut feedback) = tracker();
    feedback.flag("A");
    clock.advance_ms(500);
    feedback.flag("B");

    clock.advance_ms(1500);
    assert!(!feedback.is_flagged("A"));
    assert!(feedback.is_flagged("B"));

    assert_eq!(feedback.sweep(), vec!["A".to_string()]);
    assert!(feedback.is_flagged("B"));

    clock.advance_ms(500);
    assert!(!feedback.is_flagged("B"));
}

#[test]
fn test_copy_from_catalog() {
    let catalog = Catalog::featured();
    let (_clock, mut feedback) = tracker();
    let clipboard = RecordingClipboard::new();

    let deal = catalog.find_by_code("MUSIC3FREE").unwrap();
    feedback.copy(&deal.code, &clipboard).unwrap();

    assert_eq!(clipboard.writes(), vec!["MUSIC3FREE".to_string()]);
    assert_eq!(feedback.flagged_codes(), vec!["MUSIC3FREE"]);
}
