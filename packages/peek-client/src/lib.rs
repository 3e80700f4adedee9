mod error;

pub use error::{Result, SearchRequestError};

use std::time::Duration;

use reqwest::{Client, Response, header::CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use peek_domain::{RankedResult, ResultSet};

/// Corpus counters reported by the backend's stats endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
	pub docs_count: u64,
	pub terms_count: u64,
}

#[derive(Debug, Clone)]
pub struct SearchClient {
	http: Client,
	search_url: String,
	stats_url: String,
}
impl SearchClient {
	pub fn new(cfg: &peek_config::Backend) -> Result<Self> {
		let http = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;

		Ok(Self {
			http,
			search_url: format!("{}{}", cfg.base_url, cfg.search_path),
			stats_url: format!("{}{}", cfg.base_url, cfg.stats_path),
		})
	}

	/// Sends the raw query text and decodes the ranked `[identifier, score]` pairs.
	pub async fn search(&self, query: &str) -> Result<ResultSet> {
		let res = self
			.http
			.post(&self.search_url)
			.header(CONTENT_TYPE, "text/plain")
			.body(query.to_string())
			.send()
			.await?;
		let json = read_json(res).await?;

		parse_search_response(json)
	}

	pub async fn stats(&self) -> Result<IndexStats> {
		let res = self.http.get(&self.stats_url).send().await?;
		let json = read_json(res).await?;

		Ok(serde_json::from_value(json)?)
	}
}

async fn read_json(res: Response) -> Result<Value> {
	let status = res.status();

	if !status.is_success() {
		return Err(SearchRequestError::Status { status: status.as_u16() });
	}

	let body = res.bytes().await?;

	Ok(serde_json::from_slice(&body)?)
}

fn parse_search_response(json: Value) -> Result<ResultSet> {
	let Value::Array(items) = json else {
		return Err(invalid("Search response must be a JSON array."));
	};
	let mut results = Vec::with_capacity(items.len());

	for (index, item) in items.into_iter().enumerate() {
		let Value::Array(pair) = item else {
			return Err(invalid(format!("Result {index} must be an [identifier, score] pair.")));
		};
		let mut pair = pair.into_iter();
		let identifier = match pair.next() {
			Some(Value::String(identifier)) => identifier,
			_ => return Err(invalid(format!("Result {index} is missing a string identifier."))),
		};
		let score = match pair.next() {
			None | Some(Value::Null) => None,
			Some(Value::Number(number)) => number.as_f64(),
			Some(_) => return Err(invalid(format!("Result {index} score must be a number."))),
		};

		if pair.next().is_some() {
			return Err(invalid(format!("Result {index} has more than two elements.")));
		}

		results.push(RankedResult::new(identifier, score));
	}

	Ok(ResultSet::new(results))
}

fn invalid(message: impl Into<String>) -> SearchRequestError {
	SearchRequestError::InvalidResponse { message: message.into() }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_pairs_in_backend_order() {
		let json = serde_json::json!([["b.txt", 9.5], ["a.txt", 1], ["c.txt", 0]]);
		let results = parse_search_response(json).expect("parse failed");
		let pairs: Vec<_> =
			results.iter().map(|item| (item.identifier.as_str(), item.score)).collect();

		assert_eq!(pairs, vec![("b.txt", Some(9.5)), ("a.txt", Some(1.0)), ("c.txt", Some(0.0))]);
	}

	#[test]
	fn null_and_missing_scores_are_absent() {
		let json = serde_json::json!([["a.txt", null], ["b.txt"]]);
		let results = parse_search_response(json).expect("parse failed");

		assert!(results.iter().all(|item| item.score.is_none()));
	}

	#[test]
	fn rejects_non_array_body() {
		let err = parse_search_response(serde_json::json!({ "results": [] }))
			.expect_err("expected invalid response");

		assert!(matches!(err, SearchRequestError::InvalidResponse { .. }));
	}

	#[test]
	fn rejects_non_string_identifier() {
		let err = parse_search_response(serde_json::json!([[1, 2.0]]))
			.expect_err("expected invalid response");

		assert!(matches!(err, SearchRequestError::InvalidResponse { ref message } if message.contains("Result 0")));
	}

	#[test]
	fn rejects_string_score() {
		let err = parse_search_response(serde_json::json!([["a.txt", "high"]]))
			.expect_err("expected invalid response");

		assert!(matches!(err, SearchRequestError::InvalidResponse { .. }));
	}
}
