use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub backend: Backend,
	#[serde(default)]
	pub debounce: Debounce,
	#[serde(default)]
	pub render: Render,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	/// `tracing_subscriber::EnvFilter` directive, e.g. "info" or "peek_service=debug".
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Backend {
	/// Scheme and authority of the ranking service, without a trailing slash.
	pub base_url: String,
	#[serde(default = "default_search_path")]
	pub search_path: String,
	#[serde(default = "default_stats_path")]
	pub stats_path: String,
	pub timeout_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Debounce {
	/// Quiet interval measured from the latest keystroke.
	#[serde(default = "default_quiet_ms")]
	pub quiet_ms: u64,
}
impl Default for Debounce {
	fn default() -> Self {
		Self { quiet_ms: default_quiet_ms() }
	}
}

#[derive(Debug, Clone, Deserialize)]
pub struct Render {
	/// Path namespace previews are loaded from. Empty means the site root.
	#[serde(default = "default_static_prefix")]
	pub static_prefix: String,
	#[serde(default = "default_container_id")]
	pub container_id: String,
}
impl Default for Render {
	fn default() -> Self {
		Self { static_prefix: default_static_prefix(), container_id: default_container_id() }
	}
}

fn default_search_path() -> String {
	"/api/search".to_string()
}

fn default_stats_path() -> String {
	"/api/stats".to_string()
}

fn default_quiet_ms() -> u64 {
	300
}

fn default_static_prefix() -> String {
	"/static".to_string()
}

fn default_container_id() -> String {
	"results".to_string()
}
