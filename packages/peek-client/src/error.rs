pub type Result<T, E = SearchRequestError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum SearchRequestError {
	#[error("Search request failed: {0}")]
	Transport(#[from] reqwest::Error),
	#[error("Search backend responded with status {status}.")]
	Status { status: u16 },
	#[error("Search response is not valid JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("Search response is malformed: {message}")]
	InvalidResponse { message: String },
}
impl SearchRequestError {
	pub fn is_timeout(&self) -> bool {
		matches!(self, Self::Transport(err) if err.is_timeout())
	}
}
