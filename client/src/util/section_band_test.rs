#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;

const VIEWPORT: f64 = 1000.0;

fn layout(entries: &[(Section, f64, f64)]) -> HashMap<Section, RegionRect> {
    entries
        .iter()
        .map(|&(section, top, bottom)| (section, RegionRect::new(top, bottom)))
        .collect()
}

fn resolve(entries: &[(Section, f64, f64)]) -> Option<Section> {
    let rects = layout(entries);
    ReadingBand::default().resolve(VIEWPORT, |s| rects.get(&s).copied())
}

/// Stacked full-height sections, scrolled down by `offset` pixels.
fn stacked(offset: f64) -> Vec<(Section, f64, f64)> {
    Section::ALL
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            #[allow(clippy::cast_precision_loss)]
            let top = i as f64 * VIEWPORT - offset;
            (s, top, top + VIEWPORT)
        })
        .collect()
}

// =============================================================
// ReadingBand::contains
// =============================================================

#[test]
fn band_defaults_to_thirty_seventy() {
    let band = ReadingBand::default();
    assert!((band.upper - 0.3).abs() < f64::EPSILON);
    assert!((band.lower - 0.7).abs() < f64::EPSILON);
}

#[test]
fn region_inside_band_is_contained() {
    assert!(ReadingBand::default().contains(RegionRect::new(350.0, 650.0), VIEWPORT));
}

#[test]
fn region_covering_band_is_contained() {
    assert!(ReadingBand::default().contains(RegionRect::new(-500.0, 1500.0), VIEWPORT));
}

#[test]
fn region_above_band_is_not_contained() {
    assert!(!ReadingBand::default().contains(RegionRect::new(-900.0, 50.0), VIEWPORT));
}

#[test]
fn region_below_band_is_not_contained() {
    assert!(!ReadingBand::default().contains(RegionRect::new(800.0, 1600.0), VIEWPORT));
}

#[test]
fn band_edges_are_exclusive() {
    let band = ReadingBand::default();
    assert!(!band.contains(RegionRect::new(700.0, 1200.0), VIEWPORT));
    assert!(!band.contains(RegionRect::new(-200.0, 300.0), VIEWPORT));
    assert!(band.contains(RegionRect::new(699.0, 1200.0), VIEWPORT));
    assert!(band.contains(RegionRect::new(-200.0, 301.0), VIEWPORT));
}

#[test]
fn band_scales_with_viewport_height() {
    let band = ReadingBand::default();
    let rect = RegionRect::new(500.0, 900.0);
    assert!(band.contains(rect, 1000.0));
    assert!(!band.contains(rect, 600.0));
}

// =============================================================
// ReadingBand::resolve
// =============================================================

#[test]
fn single_region_in_band_is_active() {
    for target in Section::ALL {
        let entries: Vec<_> = Section::ALL
            .iter()
            .map(|&s| if s == target { (s, 350.0, 650.0) } else { (s, 2000.0, 3000.0) })
            .collect();
        assert_eq!(resolve(&entries), Some(target));
    }
}

#[test]
fn later_section_wins_when_two_are_in_band() {
    let entries = [
        (Section::Hero, -2000.0, -1000.0),
        (Section::About, 100.0, 500.0),
        (Section::Skills, 500.0, 900.0),
        (Section::Projects, 1500.0, 2000.0),
        (Section::Contact, 2000.0, 2500.0),
    ];
    assert_eq!(resolve(&entries), Some(Section::Skills));
}

#[test]
fn later_section_wins_regardless_of_gap_between_them() {
    let entries = [(Section::Hero, 0.0, 900.0), (Section::Contact, 400.0, 600.0)];
    assert_eq!(resolve(&entries), Some(Section::Contact));
}

#[test]
fn no_region_in_band_resolves_none() {
    let entries = [(Section::Hero, -2000.0, 100.0), (Section::About, 900.0, 1900.0)];
    assert_eq!(resolve(&entries), None);
}

#[test]
fn unmounted_regions_are_skipped() {
    let entries = [(Section::About, 200.0, 800.0)];
    assert_eq!(resolve(&entries), Some(Section::About));
}

#[test]
fn nothing_mounted_resolves_none() {
    assert_eq!(resolve(&[]), None);
}

#[test]
fn resolve_measures_in_fixed_order() {
    let mut seen = Vec::new();
    ReadingBand::default().resolve(VIEWPORT, |s| {
        seen.push(s);
        None
    });
    assert_eq!(seen, Section::ALL);
}

#[test]
fn stacked_sections_follow_scroll_position() {
    assert_eq!(resolve(&stacked(0.0)), Some(Section::Hero));
    assert_eq!(resolve(&stacked(1000.0)), Some(Section::About));
    assert_eq!(resolve(&stacked(2000.0)), Some(Section::Skills));
    assert_eq!(resolve(&stacked(3000.0)), Some(Section::Projects));
    assert_eq!(resolve(&stacked(4000.0)), Some(Section::Contact));
}

#[test]
fn stacked_sections_hand_over_at_band_edge() {
    // About's top reaches 700px after scrolling 300px; strict comparison keeps Hero.
    assert_eq!(resolve(&stacked(300.0)), Some(Section::Hero));
    assert_eq!(resolve(&stacked(301.0)), Some(Section::About));
}

// =============================================================
// SectionTracker
// =============================================================

#[test]
fn mount_pass_establishes_initial_section() {
    let rects = layout(&[(Section::Hero, 0.0, 900.0), (Section::About, 900.0, 1800.0)]);
    let tracker = SectionTracker::default();
    let active = tracker.pass(ActiveSection::default(), VIEWPORT, |s| rects.get(&s).copied());
    assert_eq!(active.section(), Section::Hero);
}

#[test]
fn pass_without_match_keeps_previous_section() {
    let tracker = SectionTracker::default();
    let current = ActiveSection::new(Section::Projects);
    let active = tracker.pass(current, VIEWPORT, |_| Some(RegionRect::new(5000.0, 6000.0)));
    assert_eq!(active, current);
}

#[test]
fn scrolling_hero_out_activates_about() {
    let mut tracker = SectionTracker::default();

    let at_top = layout(&[(Section::Hero, 0.0, 900.0), (Section::About, 900.0, 1800.0)]);
    let active = tracker.pass(ActiveSection::default(), VIEWPORT, |s| at_top.get(&s).copied());
    assert_eq!(active.section(), Section::Hero);

    let scrolled = layout(&[(Section::Hero, -900.0, 50.0), (Section::About, 50.0, 950.0)]);
    let active = tracker
        .on_scroll(16.0, active, VIEWPORT, |s| scrolled.get(&s).copied())
        .unwrap();
    assert_eq!(active.section(), Section::About);
}

#[test]
fn throttled_tracker_drops_events_inside_interval() {
    let mut tracker = SectionTracker::new(ReadingBand::default(), SamplingPolicy::Throttled { min_interval_ms: 100.0 });
    let about = layout(&[(Section::About, 200.0, 800.0)]);
    let current = ActiveSection::default();

    let first = tracker.on_scroll(0.0, current, VIEWPORT, |s| about.get(&s).copied());
    assert_eq!(first.map(ActiveSection::section), Some(Section::About));

    let mut measured = false;
    let dropped = tracker.on_scroll(50.0, current, VIEWPORT, |_| {
        measured = true;
        None
    });
    assert_eq!(dropped, None);
    assert!(!measured);

    let later = tracker.on_scroll(150.0, current, VIEWPORT, |s| about.get(&s).copied());
    assert_eq!(later.map(ActiveSection::section), Some(Section::About));
}

#[test]
fn every_event_tracker_processes_all_scrolls() {
    let mut tracker = SectionTracker::default();
    let contact = layout(&[(Section::Contact, 0.0, 1000.0)]);
    for t in 0..10 {
        let next = tracker.on_scroll(f64::from(t), ActiveSection::default(), VIEWPORT, |s| contact.get(&s).copied());
        assert_eq!(next.map(ActiveSection::section), Some(Section::Contact));
    }
}

#[test]
fn custom_band_changes_threshold() {
    let tracker = SectionTracker::new(ReadingBand { upper: 0.0, lower: 0.1 }, SamplingPolicy::EveryEvent);
    assert_eq!(tracker.band().lower, 0.1);
    let rects = layout(&[(Section::Hero, 50.0, 900.0), (Section::About, 200.0, 900.0)]);
    let active = tracker.pass(ActiveSection::default(), VIEWPORT, |s| rects.get(&s).copied());
    assert_eq!(active.section(), Section::Hero);
}
