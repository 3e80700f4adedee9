use std::slice::Iter;

/// One `(identifier, score)` pair as produced by the ranking backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedResult {
	pub identifier: String,
	pub score: Option<f64>,
}
impl RankedResult {
	pub fn new(identifier: impl Into<String>, score: Option<f64>) -> Self {
		Self { identifier: identifier.into(), score }
	}

	/// Relevance cutoff: absent, zero, and NaN scores are hidden. Negative scores are shown.
	pub fn is_relevant(&self) -> bool {
		self.score.is_some_and(|score| score != 0.0 && !score.is_nan())
	}
}

/// Backend-ordered results of one completed request. Order is never changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
	items: Vec<RankedResult>,
}
impl ResultSet {
	pub fn new(items: Vec<RankedResult>) -> Self {
		Self { items }
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> Iter<'_, RankedResult> {
		self.items.iter()
	}

	pub fn relevant(&self) -> impl Iterator<Item = &RankedResult> {
		self.items.iter().filter(|item| item.is_relevant())
	}
}
impl From<Vec<RankedResult>> for ResultSet {
	fn from(items: Vec<RankedResult>) -> Self {
		Self::new(items)
	}
}
impl FromIterator<RankedResult> for ResultSet {
	fn from_iter<I: IntoIterator<Item = RankedResult>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}
impl<'a> IntoIterator for &'a ResultSet {
	type IntoIter = Iter<'a, RankedResult>;
	type Item = &'a RankedResult;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}
