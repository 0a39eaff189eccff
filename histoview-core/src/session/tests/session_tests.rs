use crate::conf::ViewConfig;
use crate::render::HISTOGRAM_BUCKET;
use crate::session::{HistogramSession, SessionError, render_histograms};
use crate::stats::{HistogramStat, PercentileValue, RawBucket};
use crate::tooltip::TooltipState;
use std::time::{Duration, Instant};

fn stat(name: &str) -> HistogramStat {
    HistogramStat::new(
        name,
        vec![0.0, 100.0],
        vec![
            PercentileValue {
                cumulative: 0.0,
                interval: 0.0,
            },
            PercentileValue {
                cumulative: 20.0,
                interval: 20.0,
            },
        ],
        vec![RawBucket::new(0.0, 10.0, 3), RawBucket::new(10.0, 10.0, 1)],
        vec![RawBucket::new(10.0, 10.0, 1)],
    )
    .unwrap()
}

#[test]
fn enter_populates_popup_from_annotations() {
    // Arrange
    let mut session = HistogramSession::new(stat("h"), &ViewConfig::default());

    // Act
    session.pointer_enter(1).unwrap();

    // Assert
    assert!(session.popup_visible());
    assert_eq!(
        session.popup_text(),
        vec!["[10, 20)", "Interval [10, 20): 1", "P100: 20"]
    );
}

#[test]
fn hide_respects_configured_delay() {
    // Arrange
    let config = ViewConfig {
        hide_delay_ms: 100,
        ..ViewConfig::default()
    };
    let mut session = HistogramSession::new(stat("h"), &config);
    let t0 = Instant::now();
    session.pointer_enter(0).unwrap();

    // Act
    session.pointer_leave(0, t0).unwrap();

    // Assert
    assert_eq!(session.next_deadline(), Some(t0 + Duration::from_millis(100)));
    assert!(!session.advance(t0 + Duration::from_millis(99)));
    assert!(session.popup_visible());
    assert!(session.advance(t0 + Duration::from_millis(100)));
    assert!(!session.popup_visible());
    assert_eq!(session.tooltip_state(), TooltipState::Hidden);
}

#[test]
fn out_of_range_bucket_is_an_error() {
    // Arrange
    let mut session = HistogramSession::new(stat("h"), &ViewConfig::default());

    // Act
    let err = session.pointer_enter(7).unwrap_err();

    // Assert
    assert_eq!(
        err,
        SessionError::NoSuchBucket {
            histogram: "h".to_string(),
            index: 7,
            buckets: 2,
        }
    );
    assert!(!session.popup_visible());
    assert!(session.pointer_leave(2, Instant::now()).is_err());
}

#[test]
fn sessions_do_not_share_popup_state() {
    // Arrange
    let mut sessions = render_histograms(vec![stat("a"), stat("b")], &ViewConfig::default());

    // Act
    sessions[0].pointer_enter(0).unwrap();

    // Assert
    assert!(sessions[0].popup_visible());
    assert!(!sessions[1].popup_visible());
    assert_eq!(sessions[1].name(), "b");
}

#[test]
fn rendering_same_snapshot_twice_is_identical() {
    // Act
    let a = HistogramSession::new(stat("h"), &ViewConfig::default());
    let b = HistogramSession::new(stat("h"), &ViewConfig::default());

    // Assert
    assert_eq!(a.layout(), b.layout());
    assert_eq!(a.view(), b.view());
    assert_eq!(a.view().root().find_by_class(HISTOGRAM_BUCKET).len(), 2);
}
