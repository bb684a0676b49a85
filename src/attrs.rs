//! Ordered HTML attribute maps
//!
//! Attribute order is significant: attributes render in the order they were
//! inserted, so the map is backed by an [`IndexMap`] rather than a hash map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered map of HTML attribute names to values.
///
/// Values are interpolated verbatim into the rendered markup; no escaping,
/// quoting normalization, or name validation is performed. Sanitization is
/// the caller's responsibility.
///
/// # Examples
///
/// ```
/// use formbuilder::AttributeMap;
///
/// let attrs = AttributeMap::new()
///     .attr("id", "username")
///     .attr("class", "form-control");
///
/// assert_eq!(attrs.get("id"), Some("username"));
/// assert_eq!(attrs.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap {
	attrs: IndexMap<String, String>,
}

impl AttributeMap {
	/// Create an empty attribute map.
	pub fn new() -> Self {
		Self {
			attrs: IndexMap::new(),
		}
	}

	/// Add an attribute, chaining style.
	///
	/// Re-inserting an existing name overwrites its value but keeps its
	/// original position.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.insert(name.into(), value.into());
		self
	}

	/// Get an attribute value by name.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.attrs.get(name).map(String::as_str)
	}

	/// Number of attributes in the map.
	pub fn len(&self) -> usize {
		self.attrs.len()
	}

	/// Whether the map holds no attributes.
	pub fn is_empty(&self) -> bool {
		self.attrs.is_empty()
	}

	/// Iterate over `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.attrs
			.iter()
			.map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Append the attributes to a fragment under construction.
	///
	/// Each pair renders as ` name='value'`, placed before the closing `>`
	/// of the opening tag. An empty map appends nothing, so no spurious
	/// whitespace appears in the output.
	pub(crate) fn render_into(&self, out: &mut String) {
		for (name, value) in &self.attrs {
			out.push(' ');
			out.push_str(name);
			out.push_str("='");
			out.push_str(value);
			out.push('\'');
		}
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for AttributeMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl<K, V> FromIterator<(K, V)> for AttributeMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			attrs: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl<K, V> Extend<(K, V)> for AttributeMap
where
	K: Into<String>,
	V: Into<String>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		self.attrs
			.extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_preserves_insertion_order() {
		let attrs = AttributeMap::new()
			.attr("zeta", "1")
			.attr("alpha", "2")
			.attr("mid", "3");

		let mut out = String::new();
		attrs.render_into(&mut out);
		assert_eq!(out, " zeta='1' alpha='2' mid='3'");
	}

	#[test]
	fn test_empty_map_renders_nothing() {
		let mut out = String::from("<div");
		AttributeMap::new().render_into(&mut out);
		out.push('>');
		assert_eq!(out, "<div>");
	}

	#[test]
	fn test_reinsert_overwrites_in_place() {
		let attrs = AttributeMap::new()
			.attr("class", "old")
			.attr("id", "x")
			.attr("class", "new");

		let mut out = String::new();
		attrs.render_into(&mut out);
		assert_eq!(out, " class='new' id='x'");
	}

	#[test]
	fn test_values_are_verbatim() {
		let attrs = AttributeMap::from([("onclick", "alert(\"hi\")")]);
		let mut out = String::new();
		attrs.render_into(&mut out);
		assert_eq!(out, " onclick='alert(\"hi\")'");
	}
}
