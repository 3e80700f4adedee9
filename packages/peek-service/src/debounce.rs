use std::time::Duration;

use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle, time};

/// Coalesces keystrokes into one trigger per quiet period.
///
/// Every [`push`](Self::push) aborts the pending timer and arms a new one carrying the pushed
/// value, so the emitted value is always the last one observed before the quiet period.
pub struct Debouncer {
	quiet: Duration,
	triggers: UnboundedSender<String>,
	pending: Option<JoinHandle<()>>,
}
impl Debouncer {
	pub fn new(quiet: Duration, triggers: UnboundedSender<String>) -> Self {
		Self { quiet, triggers, pending: None }
	}

	pub fn quiet(&self) -> Duration {
		self.quiet
	}

	pub fn push(&mut self, value: String) {
		self.cancel();

		let quiet = self.quiet;
		let triggers = self.triggers.clone();

		self.pending = Some(tokio::spawn(async move {
			time::sleep(quiet).await;

			if triggers.send(value).is_err() {
				tracing::debug!("Trigger receiver closed before the debounce fired.");
			}
		}));
	}

	pub fn cancel(&mut self) {
		if let Some(pending) = self.pending.take() {
			pending.abort();
		}
	}

	pub fn is_pending(&self) -> bool {
		self.pending.as_ref().is_some_and(|pending| !pending.is_finished())
	}

	/// Lets the armed timer fire, then releases the trigger sender.
	pub async fn settle(mut self) {
		if let Some(pending) = self.pending.take()
			&& let Err(err) = pending.await
		{
			tracing::error!(error = %err, "Debounce timer task failed.");
		}
	}
}
impl Drop for Debouncer {
	fn drop(&mut self) {
		self.cancel();
	}
}
