use crate::cli::replay::parse::parse_pointer_event;
use crate::cli::replay::types::{PointerAction, PointerEvent};
use crate::conf::HistoviewConfig;
use crate::session::{HistogramSession, SessionError};
use crate::stats::HistogramStat;
use anyhow::Result;
use serde_json::{Value, json};
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

/// Replays pointer events from `input`, writing one JSON state line per
/// applied event to `out`.
pub fn run_replay(
    stat: HistogramStat,
    config: &HistoviewConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = HistogramSession::new(stat, &config.view);
    let origin = Instant::now();
    let mut clock_ms = 0u64;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let Ok(json) = serde_json::from_str::<Value>(&line) else {
            tracing::warn!(line = %line, "skipping non-JSON replay line");
            continue;
        };

        let Some(event) = parse_pointer_event(&json) else {
            tracing::warn!(line = %line, "skipping unrecognized pointer event");
            continue;
        };

        // Virtual time never runs backwards.
        if event.at_ms < clock_ms {
            tracing::warn!(at_ms = event.at_ms, clock_ms, "event is in the past; replaying at current time");
        }
        clock_ms = clock_ms.max(event.at_ms);
        let now = origin + Duration::from_millis(clock_ms);

        let hidden = session.advance(now);
        let outcome = apply(&mut session, event, now);

        let visible = session.popup_visible();
        let entries = if visible {
            session.popup_text()
        } else {
            Vec::new()
        };

        let state = json!({
            "at_ms": clock_ms,
            "event": event.action.as_str(),
            "bucket": event.action.bucket(),
            "hidden_by_timer": hidden,
            "visible": visible,
            "entries": entries,
            "error": outcome.err().map(|e| e.to_string()),
        });
        writeln!(out, "{state}")?;
    }

    out.flush()?;
    Ok(())
}

fn apply(
    session: &mut HistogramSession,
    event: PointerEvent,
    now: Instant,
) -> Result<(), SessionError> {
    match event.action {
        PointerAction::Enter(bucket) => session.pointer_enter(bucket),
        PointerAction::Leave(bucket) => session.pointer_leave(bucket, now),
        PointerAction::Tick => Ok(()),
    }
}
