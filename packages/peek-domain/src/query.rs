/// Only the exact empty string means "no active query"; whitespace is searchable text.
pub fn is_cleared(query: &str) -> bool {
	query.is_empty()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn whitespace_is_not_cleared() {
		assert!(is_cleared(""));
		assert!(!is_cleared(" "));
		assert!(!is_cleared("a"));
	}
}
