// Host-side tests for the page shell state, fade-in latch and content tracks.

use lipstick_core::content::*;
use lipstick_core::reveal::parse_delay;
use lipstick_core::shell::{anchor_for, marquee_track, reversed_track};
use lipstick_core::{Reveal, ShellState};

#[test]
fn reveal_flips_once_and_never_reverts() {
    let mut r = Reveal::new(150);
    assert!(!r.is_visible());
    assert!(!r.observe(false));
    assert!(!r.is_visible());

    assert!(r.observe(true));
    assert!(r.is_visible());

    // Leaving and re-entering the viewport changes nothing.
    assert!(!r.observe(false));
    assert!(!r.observe(true));
    assert!(r.is_visible());
}

#[test]
fn reveal_formats_transition_delay() {
    assert_eq!(Reveal::new(300).transition_delay(), "300ms");
    assert_eq!(Reveal::default().transition_delay(), "0ms");
}

#[test]
fn delay_attribute_parsing() {
    assert_eq!(parse_delay(Some("200")), 200);
    assert_eq!(parse_delay(Some(" 50 ")), 50);
    assert_eq!(parse_delay(Some("soon")), 0);
    assert_eq!(parse_delay(Some("-5")), 0);
    assert_eq!(parse_delay(None), 0);
}

#[test]
fn nav_scrolled_flag_uses_strict_threshold() {
    let mut s = ShellState::default();
    assert_eq!(s.nav_class(), "nav--top");
    assert!(!s.on_scroll(20.0));
    assert!(!s.is_scrolled());
    assert!(s.on_scroll(20.5));
    assert_eq!(s.nav_class(), "nav--scrolled");
    assert!(!s.on_scroll(400.0));
    assert!(s.on_scroll(0.0));
    assert!(!s.is_scrolled());
}

#[test]
fn menu_toggles_scroll_lock() {
    let mut s = ShellState::default();
    assert_eq!(s.body_overflow(), "unset");
    assert_eq!(s.menu_class(), "menu--closed");

    assert!(s.open_menu());
    assert!(!s.open_menu());
    assert_eq!(s.body_overflow(), "hidden");
    assert_eq!(s.menu_class(), "menu--open");

    assert!(s.close_menu());
    assert!(!s.close_menu());
    assert_eq!(s.body_overflow(), "unset");
}

#[test]
fn nav_anchors_match_section_ids() {
    let anchors: Vec<String> = NAV_LINKS.iter().map(|l| anchor_for(l)).collect();
    assert_eq!(anchors, vec!["#home", "#our-story", "#collections", "#reviews"]);
    // Only the first space becomes a dash.
    assert_eq!(anchor_for("Shop The Edit"), "#shop-the edit");
}

#[test]
fn brand_marquee_repeats_three_times() {
    let track = marquee_track(BRANDS, BRAND_COPIES);
    assert_eq!(track.len(), BRANDS.len() * 3);
    assert_eq!(&track[..BRANDS.len()], BRANDS);
    assert_eq!(&track[2 * BRANDS.len()..], BRANDS);
}

#[test]
fn review_rows_run_in_opposite_order() {
    let forward = marquee_track(REVIEWS, REVIEW_COPIES);
    let backward = reversed_track(REVIEWS, REVIEW_COPIES);
    assert_eq!(forward.len(), 12);
    assert_eq!(backward.len(), 12);
    assert_eq!(forward[0].name, "Priya K.");
    assert_eq!(backward[0].name, "Kavya L.");
    assert_eq!(backward[6].name, "Kavya L.");
    assert_eq!(backward[5].name, "Priya K.");
}

#[test]
fn content_tables_are_complete() {
    assert_eq!(BRANDS.len(), 7);
    assert_eq!(REVIEWS.len(), 6);
    assert!(REVIEWS.iter().all(|r| r.image.starts_with("https://")));
    let delays: Vec<u32> = COLLECTIONS.iter().map(|c| c.delay_ms).collect();
    assert_eq!(delays, vec![0, 150, 300]);
    let stats: Vec<(&str, &str)> = STORY_STATS.iter().map(|s| (s.value, s.label)).collect();
    assert_eq!(
        stats,
        vec![("100%", "Vegan"), ("0%", "Toxins"), ("24/7", "Glow")]
    );
    assert_eq!(REVIEW_STARS, 5);
}
