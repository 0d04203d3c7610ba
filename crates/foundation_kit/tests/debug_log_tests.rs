//! Tests for the debug log facade: caching, timing lines and pass-through
//! of failures for sync and async work.

#![cfg(any(debug_assertions, feature = "debug-log"))]

use foundation_kit::debug_log::format_elapsed;
use foundation_kit::{DebugLog, ErrorMessage, LogLevel, MemorySink};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn facade() -> (Arc<DebugLog>, Arc<MemorySink>) {
    let sink = MemorySink::shared();
    let log = Arc::new(DebugLog::with_defaults("com.zion.Tests", "Debug", sink.clone()));
    (log, sink)
}

// =============================================================================
// Logger cache
// =============================================================================

#[test]
fn test_concurrent_logger_requests_share_one_handle() {
    let (log, _) = facade();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let log = log.clone();
            thread::spawn(move || log.logger(Some("Rendering")))
        })
        .collect();
    let loggers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for logger in &loggers[1..] {
        assert!(Arc::ptr_eq(&loggers[0], logger));
    }
    assert_eq!(log.cached_categories(), vec!["Rendering"]);
}

#[test]
fn test_reconfigured_subsystem_only_affects_new_categories() {
    let (log, sink) = facade();
    log.debug(|| "before".into(), Some("Canvas"));

    log.configure(Some("com.zion.Other"), None);
    log.debug(|| "after".into(), Some("Canvas"));
    log.debug(|| "fresh".into(), Some("Brush"));

    let records = sink.records();
    assert_eq!(records[0].subsystem, "com.zion.Tests");
    assert_eq!(records[1].subsystem, "com.zion.Tests");
    assert_eq!(records[2].subsystem, "com.zion.Other");
}

#[test]
fn test_default_category_change_moves_implicit_calls() {
    let (log, sink) = facade();
    log.configure(None, Some("App"));
    log.info(|| "launched".into(), None);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].category, "App");
    assert_eq!(records[0].level, LogLevel::Info);
}

// =============================================================================
// Sync timing
// =============================================================================

#[test]
fn test_measure_returns_value_and_logs_label() {
    let (log, sink) = facade();
    let sum = log.measure(
        || "sum strokes".to_string(),
        None,
        || (1..=10).sum::<u32>(),
    );

    assert_eq!(sum, 55);
    let messages = sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("sum strokes: "));
    assert!(messages[0].ends_with("ms"));
}

#[test]
fn test_measure_reports_elapsed_time() {
    let (log, sink) = facade();
    log.measure(
        || "sleep".to_string(),
        Some("Performance"),
        || thread::sleep(Duration::from_millis(20)),
    );

    let message = &sink.messages()[0];
    let value: f64 = message
        .trim_start_matches("sleep: ")
        .trim_end_matches("ms")
        .parse()
        .unwrap();
    assert!(value >= 20.0, "expected at least 20ms, got {}", message);

    let decimals = message.trim_end_matches("ms").rsplit('.').next().unwrap();
    assert_eq!(decimals.len(), 2);
}

#[test]
fn test_try_measure_propagates_named_error() {
    let (log, sink) = facade();
    let original = ErrorMessage::new("Export failed", "Disk is full");
    let expected_id = original.id();

    let result: Result<(), ErrorMessage> =
        log.try_measure(|| "export".into(), Some("Export"), move || Err(original));

    let err = result.unwrap_err();
    assert_eq!(err.id(), expected_id);
    assert!(sink.is_empty());
}

#[test]
fn test_try_measure_ok_logs_once() -> anyhow::Result<()> {
    let (log, sink) = facade();
    let parsed: u32 = log.try_measure(|| "parse".into(), None, || "42".parse::<u32>())?;

    assert_eq!(parsed, 42);
    assert_eq!(sink.len(), 1);
    Ok(())
}

#[test]
fn test_timing_line_format_matches_helper() {
    assert_eq!(
        format_elapsed("decode", Duration::from_millis(3)),
        "decode: 3.00ms"
    );
}

// =============================================================================
// Async timing
// =============================================================================

#[tokio::test]
async fn test_measure_async_spans_the_await() {
    let (log, sink) = facade();
    let value = log
        .measure_async(|| "fetch".into(), Some("Data"), async {
            tokio::time::sleep(Duration::from_millis(25)).await;
            "payload"
        })
        .await;

    assert_eq!(value, "payload");
    let records = sink.records_for("Data");
    assert_eq!(records.len(), 1);
    let ms: f64 = records[0]
        .message
        .trim_start_matches("fetch: ")
        .trim_end_matches("ms")
        .parse()
        .unwrap();
    assert!(ms >= 20.0, "expected the await to be timed, got {}ms", ms);
}

#[tokio::test]
async fn test_try_measure_async_error_skips_timing() {
    let (log, sink) = facade();
    let result: anyhow::Result<u8> = log
        .try_measure_async(|| "upload".into(), None, async {
            Err::<u8, _>(anyhow::anyhow!("connection reset"))
        })
        .await;

    assert_eq!(result.unwrap_err().to_string(), "connection reset");
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_cancelled_measure_async_logs_nothing() {
    let (log, sink) = facade();
    let outcome = tokio::time::timeout(
        Duration::from_millis(10),
        log.measure_async(|| "slow".into(), None, async {
            tokio::time::sleep(Duration::from_secs(5)).await;
        }),
    )
    .await;

    assert!(outcome.is_err());
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_disabled_async_measure_runs_work() {
    let (log, sink) = facade();
    log.set_enabled(false);
    let value = log.measure_async(|| "quiet".into(), None, async { 3 }).await;

    assert_eq!(value, 3);
    assert!(sink.is_empty());
}
