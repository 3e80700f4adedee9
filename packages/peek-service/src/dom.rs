//! Minimal owned node tree standing in for the page's results subtree.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	Element(Element),
	Text(String),
}
impl Node {
	pub fn text(value: impl Into<String>) -> Self {
		Self::Text(value.into())
	}

	pub fn as_element(&self) -> Option<&Element> {
		match self {
			Self::Element(element) => Some(element),
			Self::Text(_) => None,
		}
	}

	/// Concatenated text of this node and all descendants.
	pub fn text_content(&self) -> String {
		let mut out = String::new();

		self.collect_text(&mut out);

		out
	}

	pub fn write_html(&self, out: &mut String) {
		match self {
			Self::Element(element) => element.write_html(out),
			Self::Text(text) => escape_into(out, text, false),
		}
	}

	fn collect_text(&self, out: &mut String) {
		match self {
			Self::Element(element) => {
				for child in &element.children {
					child.collect_text(out);
				}
			},
			Self::Text(text) => out.push_str(text),
		}
	}
}
impl From<Element> for Node {
	fn from(element: Element) -> Self {
		Self::Element(element)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
	pub tag: &'static str,
	pub attributes: Vec<(&'static str, String)>,
	pub children: Vec<Node>,
}
impl Element {
	pub fn new(tag: &'static str) -> Self {
		Self { tag, attributes: Vec::new(), children: Vec::new() }
	}

	pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.attributes.push((name, value.into()));

		self
	}

	pub fn with_child(mut self, child: impl Into<Node>) -> Self {
		self.children.push(child.into());

		self
	}

	pub fn push(&mut self, child: impl Into<Node>) {
		self.children.push(child.into());
	}

	pub fn attr(&self, name: &str) -> Option<&str> {
		self.attributes.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
	}

	pub fn write_html(&self, out: &mut String) {
		out.push('<');
		out.push_str(self.tag);

		for (name, value) in &self.attributes {
			out.push(' ');
			out.push_str(name);
			out.push_str("=\"");
			escape_into(out, value, true);
			out.push('"');
		}

		out.push('>');

		for child in &self.children {
			child.write_html(out);
		}

		out.push_str("</");
		out.push_str(self.tag);
		out.push('>');
	}
}

/// The results area. Only the renderer writes to it, always by replacing every child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsContainer {
	id: String,
	children: Vec<Node>,
}
impl ResultsContainer {
	pub fn new(id: impl Into<String>) -> Self {
		Self { id: id.into(), children: Vec::new() }
	}

	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn children(&self) -> &[Node] {
		&self.children
	}

	pub fn is_empty(&self) -> bool {
		self.children.is_empty()
	}

	pub fn replace_children(&mut self, children: Vec<Node>) {
		self.children = children;
	}

	pub fn clear(&mut self) {
		self.children.clear();
	}

	pub fn to_html(&self) -> String {
		let mut out = String::new();

		out.push_str("<div id=\"");
		escape_into(&mut out, &self.id, true);
		out.push_str("\">");

		for child in &self.children {
			child.write_html(&mut out);
		}

		out.push_str("</div>");

		out
	}
}

fn escape_into(out: &mut String, raw: &str, attribute: bool) {
	for ch in raw.chars() {
		match ch {
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' if attribute => out.push_str("&quot;"),
			'\'' if attribute => out.push_str("&#39;"),
			_ => out.push(ch),
		}
	}
}
