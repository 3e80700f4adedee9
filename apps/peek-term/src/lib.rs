pub mod cli;
pub mod term;

pub use cli::{Args, Command};

use std::sync::Arc;

use tokio::io::{self, AsyncWrite, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use peek_client::SearchClient;
use peek_service::Pipeline;

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = peek_config::load(&args.config)?;

	init_tracing(&config);

	match args.command.unwrap_or(Command::Watch) {
		Command::Watch => {
			let pipeline = Arc::new(Pipeline::new(&config)?);

			tracing::info!(
				backend = %config.backend.base_url,
				quiet_ms = config.debounce.quiet_ms,
				"Watching stdin for queries."
			);

			term::drive(pipeline, BufReader::new(io::stdin()), io::stdout()).await
		},
		Command::Stats => {
			let client = SearchClient::new(&config.backend)?;

			print_stats(&client, &mut io::stdout()).await
		},
	}
}

/// Fetches index statistics and writes them to `output` as pretty JSON followed by a newline.
pub async fn print_stats<W>(client: &SearchClient, output: &mut W) -> color_eyre::Result<()>
where
	W: AsyncWrite + Unpin,
{
	let stats = client.stats().await?;

	output.write_all(serde_json::to_string_pretty(&stats)?.as_bytes()).await?;
	output.write_all(b"\n").await?;
	output.flush().await?;

	Ok(())
}

fn init_tracing(config: &peek_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
