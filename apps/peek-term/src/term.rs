use std::sync::Arc;

use color_eyre::eyre;
use tokio::{
	io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
	sync::mpsc,
};

use peek_service::Pipeline;

const KEYSTROKE_BUFFER: usize = 64;

/// Feeds `input` lines to the pipeline as keystrokes and writes the latest committed state of the
/// results container as one HTML line to `output` whenever it changes. Renders committed between
/// two polls coalesce into one line. Returns once input is exhausted and the last trigger has
/// resolved.
pub async fn drive<R, W>(pipeline: Arc<Pipeline>, input: R, mut output: W) -> color_eyre::Result<()>
where
	R: AsyncBufRead + Unpin,
	W: AsyncWrite + Unpin,
{
	let mut renders = pipeline.subscribe();
	let (tx, rx) = mpsc::channel(KEYSTROKE_BUFFER);
	let mut runner = tokio::spawn(Arc::clone(&pipeline).run(rx));
	let mut lines = input.lines();
	let mut keystrokes = Some(tx);

	loop {
		tokio::select! {
			biased;

			changed = renders.changed() => {
				changed?;

				let html = renders.borrow_and_update().to_html();

				write_render(&mut output, &html).await?;
			},
			line = lines.next_line(), if keystrokes.is_some() => match line? {
				Some(value) => {
					if let Some(tx) = &keystrokes {
						tx.send(trim_line_ending(value))
							.await
							.map_err(|_| eyre::eyre!("Pipeline stopped accepting keystrokes."))?;
					}
				},
				None => {
					tracing::debug!("Input closed.");

					keystrokes = None;
				},
			},
			joined = &mut runner => {
				joined?;

				break;
			},
		}
	}

	if renders.has_changed()? {
		let html = renders.borrow_and_update().to_html();

		write_render(&mut output, &html).await?;
	}

	output.flush().await?;

	Ok(())
}

fn trim_line_ending(mut value: String) -> String {
	if value.ends_with('\r') {
		value.pop();
	}

	value
}

async fn write_render<W>(output: &mut W, html: &str) -> color_eyre::Result<()>
where
	W: AsyncWrite + Unpin,
{
	output.write_all(html.as_bytes()).await?;
	output.write_all(b"\n").await?;
	output.flush().await?;

	Ok(())
}
