use std::sync::Arc;

use tokio::{
	sync::mpsc,
	task::{JoinError, JoinHandle, JoinSet},
};

use crate::{BoxFuture, Debouncer, Generation, Outcome, Pipeline, dom::ResultsContainer};

impl Pipeline {
	/// Issues a generation for `query` now and resolves it on a spawned task.
	pub fn trigger(self: &Arc<Self>, query: String) -> JoinHandle<Outcome> {
		tokio::spawn(self.begin(query))
	}

	/// Drives keystrokes through the debouncer until `keystrokes` closes.
	///
	/// On close the armed debounce still fires and every in-flight request is awaited, so the
	/// container reflects the last value typed once this returns.
	pub async fn run(self: Arc<Self>, mut keystrokes: mpsc::Receiver<String>) {
		let (trigger_tx, mut triggers) = mpsc::unbounded_channel();
		let mut debouncer = Debouncer::new(self.quiet, trigger_tx);
		let mut inflight = JoinSet::new();

		loop {
			tokio::select! {
				keystroke = keystrokes.recv() => match keystroke {
					Some(value) => debouncer.push(value),
					None => break,
				},
				Some(query) = triggers.recv() => {
					inflight.spawn(self.begin(query));
				},
				Some(joined) = inflight.join_next() => log_joined(joined),
			}
		}

		debouncer.settle().await;

		while let Some(query) = triggers.recv().await {
			inflight.spawn(self.begin(query));
		}
		while let Some(joined) = inflight.join_next().await {
			log_joined(joined);
		}
	}

	fn begin(self: &Arc<Self>, query: String) -> BoxFuture<'static, Outcome> {
		let generation = self.generations.issue();
		let pipeline = Arc::clone(self);

		Box::pin(async move { pipeline.resolve(generation, query).await })
	}

	async fn resolve(&self, generation: Generation, query: String) -> Outcome {
		if peek_domain::is_cleared(&query) {
			return if self.commit(generation, |container| self.renderer.clear(container)) {
				Outcome::Cleared { generation }
			} else {
				self.discard(generation, &query)
			};
		}

		tracing::debug!(generation = generation.get(), query = %query, "Issuing search request.");

		let results = match self.backend.search(&query).await {
			Ok(results) => results,
			Err(err) => {
				if !self.generations.is_current(generation) {
					tracing::debug!(error = %err, "Superseded search request failed.");

					return self.discard(generation, &query);
				}

				tracing::warn!(
					error = %err,
					generation = generation.get(),
					query = %query,
					"Search request failed."
				);

				return Outcome::Failed { generation };
			},
		};
		let mut shown = 0;

		if self.commit(generation, |container| shown = self.renderer.render(container, &results)) {
			tracing::debug!(
				generation = generation.get(),
				received = results.len(),
				shown,
				"Rendered search results."
			);

			Outcome::Rendered { generation, shown }
		} else {
			self.discard(generation, &query)
		}
	}

	// The generation check runs under the channel's write lock, so a stale commit can never
	// interleave with a newer one.
	fn commit(&self, generation: Generation, apply: impl FnOnce(&mut ResultsContainer)) -> bool {
		self.results.send_if_modified(|container| {
			if !self.generations.is_current(generation) {
				return false;
			}

			apply(container);

			true
		})
	}

	fn discard(&self, generation: Generation, query: &str) -> Outcome {
		tracing::debug!(
			generation = generation.get(),
			latest = ?self.generations.latest().map(Generation::get),
			query = %query,
			"Discarding superseded search result."
		);

		Outcome::Stale { generation }
	}
}

fn log_joined(joined: Result<Outcome, JoinError>) {
	match joined {
		Ok(outcome) => tracing::trace!(?outcome, "Trigger resolved."),
		Err(err) => tracing::error!(error = %err, "Search task failed."),
	}
}
