mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Backend, Config, Debounce, Render, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	finish(cfg)
}

pub fn parse(raw: &str) -> Result<Config> {
	let cfg: Config = toml::from_str(raw).map_err(|err| Error::ParseInline { source: err })?;

	finish(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if !(cfg.backend.base_url.starts_with("http://") || cfg.backend.base_url.starts_with("https://"))
	{
		return Err(Error::Validation {
			message: "backend.base_url must start with http:// or https://.".to_string(),
		});
	}

	for (label, path) in
		[("backend.search_path", &cfg.backend.search_path), ("backend.stats_path", &cfg.backend.stats_path)]
	{
		if !path.starts_with('/') {
			return Err(Error::Validation { message: format!("{label} must start with '/'.") });
		}
	}

	if cfg.backend.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "backend.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.debounce.quiet_ms == 0 {
		return Err(Error::Validation {
			message: "debounce.quiet_ms must be greater than zero.".to_string(),
		});
	}
	if !cfg.render.static_prefix.is_empty() && !cfg.render.static_prefix.starts_with('/') {
		return Err(Error::Validation {
			message: "render.static_prefix must be empty or start with '/'.".to_string(),
		});
	}
	if cfg.render.container_id.is_empty()
		|| cfg.render.container_id.chars().any(char::is_whitespace)
	{
		return Err(Error::Validation {
			message: "render.container_id must be non-empty and contain no whitespace."
				.to_string(),
		});
	}

	Ok(())
}

fn finish(mut cfg: Config) -> Result<Config> {
	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

fn normalize(cfg: &mut Config) {
	cfg.service.log_level = cfg.service.log_level.trim().to_string();
	cfg.backend.base_url = cfg.backend.base_url.trim().trim_end_matches('/').to_string();
	cfg.render.static_prefix = cfg.render.static_prefix.trim().trim_end_matches('/').to_string();
	cfg.render.container_id = cfg.render.container_id.trim().to_string();
}
