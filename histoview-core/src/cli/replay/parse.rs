use crate::cli::replay::types::{PointerAction, PointerEvent};
use serde_json::Value;

/// `{"at_ms": 0, "event": "enter", "bucket": 0}`. `at_ms` defaults to 0;
/// enter and leave need a bucket.
pub fn parse_pointer_event(event: &Value) -> Option<PointerEvent> {
    let at_ms = event.get("at_ms").and_then(Value::as_u64).unwrap_or(0);
    let bucket = event
        .get("bucket")
        .and_then(Value::as_u64)
        .and_then(|b| usize::try_from(b).ok());

    let action = match event.get("event").and_then(Value::as_str)? {
        "enter" => PointerAction::Enter(bucket?),
        "leave" => PointerAction::Leave(bucket?),
        "tick" => PointerAction::Tick,
        _ => return None,
    };

    Some(PointerEvent { at_ms, action })
}
