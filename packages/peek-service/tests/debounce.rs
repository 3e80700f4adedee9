use std::time::Duration;

use tokio::{
	sync::mpsc,
	time::{self, Instant},
};

use peek_service::Debouncer;

const QUIET: Duration = Duration::from_millis(300);

#[tokio::test(start_paused = true)]
async fn burst_coalesces_into_last_value() {
	let (tx, mut rx) = mpsc::unbounded_channel();
	let mut debouncer = Debouncer::new(QUIET, tx);

	for value in ["r", "ru", "rus", "rust"] {
		debouncer.push(value.to_string());
		time::sleep(Duration::from_millis(100)).await;
	}

	assert_eq!(rx.recv().await.as_deref(), Some("rust"));

	time::sleep(Duration::from_secs(2)).await;

	assert!(rx.try_recv().is_err(), "Expected exactly one trigger for the burst.");
}

#[tokio::test(start_paused = true)]
async fn keystroke_resets_the_quiet_interval() {
	let (tx, mut rx) = mpsc::unbounded_channel();
	let mut debouncer = Debouncer::new(QUIET, tx);
	let start = Instant::now();

	debouncer.push("a".to_string());
	time::sleep(Duration::from_millis(250)).await;

	assert!(rx.try_recv().is_err(), "Trigger fired before the quiet interval elapsed.");

	debouncer.push("ab".to_string());

	assert_eq!(rx.recv().await.as_deref(), Some("ab"));

	let elapsed = start.elapsed();

	assert!(elapsed >= Duration::from_millis(550), "Fired too early: {elapsed:?}");
	assert!(elapsed < Duration::from_millis(600), "Fired too late: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn separate_quiet_periods_emit_separately() {
	let (tx, mut rx) = mpsc::unbounded_channel();
	let mut debouncer = Debouncer::new(QUIET, tx);

	debouncer.push("first".to_string());
	time::sleep(Duration::from_millis(400)).await;
	debouncer.push("second".to_string());

	assert_eq!(rx.recv().await.as_deref(), Some("first"));
	assert_eq!(rx.recv().await.as_deref(), Some("second"));
}

#[tokio::test(start_paused = true)]
async fn empty_value_is_still_emitted() {
	let (tx, mut rx) = mpsc::unbounded_channel();
	let mut debouncer = Debouncer::new(QUIET, tx);

	debouncer.push("abc".to_string());
	debouncer.push(String::new());

	assert_eq!(rx.recv().await.as_deref(), Some(""));
}

#[tokio::test(start_paused = true)]
async fn cancel_is_idempotent() {
	let (tx, mut rx) = mpsc::unbounded_channel();
	let mut debouncer = Debouncer::new(QUIET, tx);

	debouncer.cancel();
	debouncer.push("gone".to_string());

	assert!(debouncer.is_pending());

	debouncer.cancel();
	debouncer.cancel();

	assert!(!debouncer.is_pending());

	time::sleep(Duration::from_secs(1)).await;

	assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn settle_waits_for_armed_trigger_then_closes() {
	let (tx, mut rx) = mpsc::unbounded_channel();
	let mut debouncer = Debouncer::new(QUIET, tx);

	debouncer.push("last".to_string());
	debouncer.settle().await;

	assert_eq!(rx.recv().await.as_deref(), Some("last"));
	assert_eq!(rx.recv().await, None);
}

#[tokio::test(start_paused = true)]
async fn dropping_cancels_pending_trigger() {
	let (tx, mut rx) = mpsc::unbounded_channel();
	let mut debouncer = Debouncer::new(QUIET, tx);

	debouncer.push("dropped".to_string());
	drop(debouncer);

	assert_eq!(rx.recv().await, None);
}
