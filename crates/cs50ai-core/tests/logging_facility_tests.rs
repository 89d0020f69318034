#![allow(clippy::unwrap_used, clippy::expect_used)]

use cs50ai_core::errors::{AiError, ExError, ExErrorKind};
use cs50ai_core::logging_facility::test_capture::init_test_capture;
use cs50ai_core::{log_op_end, log_op_error, log_op_start};
use cs50ai_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let events = capture.events();
    let start_events: Vec<_> = events
        .iter()
        .filter(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START))
        .collect();

    assert!(
        !start_events.is_empty(),
        "Should have captured at least one start event"
    );
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.events_for_op(op_name);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = AiError::CellOccupied { row: 1, col: 2 };
    log_op_error!(op_name, err, duration_ms = 10);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1, "Should have exactly one error event");
    assert_eq!(events[0].field("err_code"), Some("ERR_CELL_OCCUPIED"));
}

#[test]
fn test_boundary_ownership_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_ownership_unique_4";

    log_op_start!(op_name, game = 1u64);
    log_op_end!(op_name, duration_ms = 42);

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    let ends = capture
        .count_events(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END));

    assert_eq!(starts, 1, "Should have exactly one start event");
    assert_eq!(ends, 1, "Should have exactly one end event");
}

#[test]
fn test_log_macros_with_multiple_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_5";

    log_op_start!(op_name, session_id = "s-123", board = "X.O/.X./..O");

    let events = capture.events_for_op(op_name);
    let start_event = events.first().expect("Should have start event");
    assert_eq!(start_event.field("session_id"), Some("s-123"));
    assert_eq!(start_event.field("board"), Some("X.O/.X./..O"));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_error_conversion_preserves_kind() {
    let capture = init_test_capture();
    let op_name = "test_error_conversion_unique_6";

    let err = AiError::TooManySymbols { count: 30, max: 24 };
    log_op_error!(op_name, err.clone(), duration_ms = 5);

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::TooManySymbols);

    let events = capture.events_for_op(op_name);
    assert_eq!(events[0].field("err_code"), Some("ERR_TOO_MANY_SYMBOLS"));
}

#[test]
fn test_multiple_operations_logged_independently() {
    let capture = init_test_capture();
    let op1_name = "test_multi_ops_best_move_unique_7";
    let op2_name = "test_multi_ops_autoplay_unique_7";

    log_op_start!(op1_name);
    log_op_end!(op1_name, duration_ms = 10);
    log_op_start!(op2_name);
    log_op_end!(op2_name, duration_ms = 5);

    assert_eq!(capture.events_for_op(op1_name).len(), 2);
    assert_eq!(capture.events_for_op(op2_name).len(), 2);
}
