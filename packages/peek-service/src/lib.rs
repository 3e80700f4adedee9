pub mod debounce;
pub mod dom;
pub mod generation;
pub mod pipeline;
pub mod render;

mod error;

pub use debounce::Debouncer;
pub use dom::{Element, Node, ResultsContainer};
pub use error::{Error, Result};
pub use generation::{Generation, Generations};
pub use render::Renderer;

use std::{future::Future, pin::Pin, sync::Arc, time::Duration};

use tokio::sync::watch;

use peek_client::SearchClient;
use peek_config::Config;
use peek_domain::ResultSet;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait SearchBackend
where
	Self: Send + Sync,
{
	fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, peek_client::Result<ResultSet>>;
}

impl SearchBackend for SearchClient {
	fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, peek_client::Result<ResultSet>> {
		Box::pin(SearchClient::search(self, query))
	}
}

/// How a single trigger ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Rendered { generation: Generation, shown: usize },
	Cleared { generation: Generation },
	/// A newer trigger was issued before this one could commit. Routine, not a failure.
	Stale { generation: Generation },
	/// The request failed; the container keeps its last committed state.
	Failed { generation: Generation },
}
impl Outcome {
	pub fn generation(&self) -> Generation {
		match *self {
			Self::Rendered { generation, .. }
			| Self::Cleared { generation }
			| Self::Stale { generation }
			| Self::Failed { generation } => generation,
		}
	}
}

pub struct Pipeline {
	quiet: Duration,
	renderer: Renderer,
	backend: Arc<dyn SearchBackend>,
	generations: Generations,
	results: watch::Sender<ResultsContainer>,
}
impl Pipeline {
	pub fn new(cfg: &Config) -> Result<Self> {
		let client = SearchClient::new(&cfg.backend)?;

		Ok(Self::with_backend(cfg, Arc::new(client)))
	}

	pub fn with_backend(cfg: &Config, backend: Arc<dyn SearchBackend>) -> Self {
		let (results, _) = watch::channel(ResultsContainer::new(cfg.render.container_id.as_str()));

		Self {
			quiet: Duration::from_millis(cfg.debounce.quiet_ms),
			renderer: Renderer::new(&cfg.render),
			backend,
			generations: Generations::default(),
			results,
		}
	}

	pub fn quiet(&self) -> Duration {
		self.quiet
	}

	/// Receiver notified after every committed render or clear.
	pub fn subscribe(&self) -> watch::Receiver<ResultsContainer> {
		self.results.subscribe()
	}

	pub fn snapshot(&self) -> ResultsContainer {
		self.results.borrow().clone()
	}
}
