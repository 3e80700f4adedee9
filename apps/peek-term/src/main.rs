use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = peek_term::Args::parse();

	peek_term::run(args).await
}
