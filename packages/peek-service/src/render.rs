use peek_domain::{RankedResult, ResultSet};

use crate::dom::{Element, Node, ResultsContainer};

/// Turns a ranked result set into the results subtree: one `ul`, one `li` per relevant item.
#[derive(Debug, Clone)]
pub struct Renderer {
	static_prefix: String,
}
impl Renderer {
	pub fn new(cfg: &peek_config::Render) -> Self {
		Self { static_prefix: cfg.static_prefix.clone() }
	}

	pub fn preview_src(&self, identifier: &str) -> String {
		format!("{}/{identifier}", self.static_prefix)
	}

	/// Replaces every child of `container`. Returns the number of items shown.
	pub fn render(&self, container: &mut ResultsContainer, results: &ResultSet) -> usize {
		let list = self.fragment(results);
		let shown = list.children.len();

		container.replace_children(vec![list.into()]);

		shown
	}

	pub fn clear(&self, container: &mut ResultsContainer) {
		container.clear();
	}

	pub fn fragment(&self, results: &ResultSet) -> Element {
		let mut list = Element::new("ul");

		for result in results.relevant() {
			tracing::debug!(identifier = %result.identifier, score = ?result.score, "Rendering result.");

			list.push(self.item(result));
		}

		list
	}

	fn item(&self, result: &RankedResult) -> Element {
		let label = Element::new("span").with_child(Node::text(result.identifier.as_str()));
		let preview = Element::new("iframe")
			.with_attr("src", self.preview_src(&result.identifier))
			.with_attr("title", result.identifier.as_str())
			.with_child(Node::text(result.identifier.as_str()));

		Element::new("li").with_child(label).with_child(preview)
	}
}
