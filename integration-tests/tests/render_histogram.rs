use histoview_core::conf::ViewConfig;
use histoview_core::render::{
    HISTOGRAM_ANNOTATIONS, HISTOGRAM_BUCKET, HISTOGRAM_INTERVAL, HISTOGRAM_PERCENTILE,
    HISTOGRAM_POPUP,
};
use histoview_core::{HistogramSession, parse_stats, render_histograms};
use integration_tests::harness::fixture;
use pretty_assertions::assert_eq;
use std::time::{Duration, Instant};

fn session(file: &str) -> HistogramSession {
    let stats = parse_stats(&fixture(file)).expect("fixture should parse");
    render_histograms(stats, &ViewConfig::default()).remove(0)
}

fn left(style: Option<String>) -> f64 {
    style
        .expect("left is set")
        .trim_end_matches('%')
        .parse()
        .unwrap()
}

#[test]
fn buckets_are_placed_and_sized() {
    // Arrange
    let session = session("two_buckets.json");

    // Act
    let buckets = session.view().root().find_by_class(HISTOGRAM_BUCKET);

    // Assert
    assert_eq!(buckets.len(), 2);
    assert!(left(buckets[0].style.left_css()) < left(buckets[1].style.left_css()));

    let first_height = left(buckets[0].style.height_css());
    assert!(25.0 < first_height && first_height < 75.0);
    assert_eq!(buckets[1].style.height_css().as_deref(), Some("100%"));
}

#[test]
fn hover_shows_popup_and_hides_after_delay() {
    // Arrange
    let mut session = session("two_buckets.json");
    let t0 = Instant::now();

    // There is one popup and it is not visible initially.
    assert_eq!(session.view().root().find_by_class(HISTOGRAM_POPUP).len(), 1);
    assert!(!session.popup_visible());

    // Act: enter the first bucket.
    session.pointer_enter(0).unwrap();

    // Assert
    assert!(session.popup_visible());
    assert_eq!(
        session.popup_text(),
        vec![
            "[200, 210)",
            "P0: 200",
            "Interval [200, 210): 1",
            "P25: 207.5"
        ]
    );

    // Act: leave, then let three seconds pass.
    session.pointer_leave(0, t0).unwrap();
    session.advance(t0 + Duration::from_secs(3));

    // Assert
    assert!(!session.popup_visible());

    // Act: enter the other bucket.
    session.pointer_enter(1).unwrap();

    // Assert
    assert!(session.popup_visible());
    let entries = session.popup_text();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0], "[300, 310)");
    assert_eq!(entries[1], "Interval [300, 310): 2");

    // Act: leave and immediately re-enter the first bucket.
    let t1 = t0 + Duration::from_secs(4);
    session.pointer_leave(1, t1).unwrap();
    session.pointer_enter(0).unwrap();

    // Assert: no delay, and the cancelled hide never fires.
    assert!(session.popup_visible());
    assert_eq!(session.popup_text().len(), 4);
    assert_eq!(session.popup_text()[0], "[200, 210)");
    session.pointer_leave(1, t1).unwrap();
    session.advance(t1 + Duration::from_secs(10));
    assert!(session.popup_visible());
}

#[test]
fn ticks_are_ordered_left_to_right() {
    // Arrange
    let session = session("two_buckets.json");
    let root = session.view().root();

    // Assert
    assert_eq!(root.find_by_class(HISTOGRAM_ANNOTATIONS).len(), 1);

    let percentiles = root.find_by_class(HISTOGRAM_PERCENTILE);
    assert_eq!(percentiles.len(), 10);
    let lefts: Vec<f64> = percentiles
        .iter()
        .map(|p| left(p.style.left_css()))
        .collect();
    assert!(lefts.windows(2).all(|w| w[0] < w[1]));

    let intervals = root.find_by_class(HISTOGRAM_INTERVAL);
    assert_eq!(intervals.len(), 2);
    assert!(left(intervals[0].style.left_css()) < left(intervals[1].style.left_css()));
}

#[test]
fn empty_totals_render_an_empty_view() {
    // Arrange
    let mut session = session("empty_totals.json");
    let root = session.view().root();

    // Assert
    assert_eq!(root.find_by_class(HISTOGRAM_BUCKET).len(), 0);
    assert_eq!(root.find_by_class(HISTOGRAM_PERCENTILE).len(), 0);
    assert_eq!(root.find_by_class(HISTOGRAM_INTERVAL).len(), 0);
    assert_eq!(root.find_by_class(HISTOGRAM_POPUP).len(), 1);
    assert!(!session.popup_visible());
    assert!(session.pointer_enter(0).is_err());
}

#[test]
fn rendering_twice_is_identical() {
    // Act
    let a = session("two_buckets.json");
    let b = session("two_buckets.json");

    // Assert
    assert_eq!(a.layout(), b.layout());
    assert_eq!(a.view(), b.view());
}
