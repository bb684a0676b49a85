//! Fluent form builder
//!
//! [`FormBuilder`] accumulates rendered field fragments in call order and
//! assembles them into an HTML `<form>` string. Every append operation
//! renders one fragment immediately and pushes it onto the field sequence;
//! fragments are never edited or removed once appended.
//!
//! ## Design Pattern
//!
//! - **Fluent API**: every configuration and append operation consumes the
//!   builder and returns it, so forms read as a single method chain
//! - **Render-on-append**: fragments are plain strings from the moment they
//!   are added; the final render is pure concatenation
//! - **Caller-owned correctness**: no escaping, no container balancing, no
//!   heading-level bounds checks

use crate::attrs::AttributeMap;
use crate::input_type::InputType;
use crate::method::FormMethod;
use tracing::trace;

/// Fluent builder for an HTML `<form>`.
///
/// # Examples
///
/// ```
/// use formbuilder::{AttributeMap, FormBuilder, FormMethod, InputType};
///
/// let form = FormBuilder::new()
///     .method(FormMethod::Post)
///     .action("/login")
///     .add_input("username", InputType::Text, AttributeMap::new())
///     .add_input("password", InputType::Password, AttributeMap::new())
///     .add_button("submit", "Log in", AttributeMap::new())
///     .render();
///
/// assert!(form.starts_with("<form method='post' action='/login' class='formbuilder'>"));
/// assert!(form.ends_with("</form>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
	/// Rendered field fragments, in append order
	fields: Vec<String>,
	method: FormMethod,
	action: String,
	/// Attributes of the `<form>` element itself, fixed at construction
	form_attributes: AttributeMap,
}

impl FormBuilder {
	/// Create a builder with no form-level attributes.
	///
	/// Method defaults to GET and the action to the empty string.
	pub fn new() -> Self {
		Self::with_attributes(AttributeMap::new())
	}

	/// Create a builder with attributes for the `<form>` element.
	///
	/// # Examples
	///
	/// ```
	/// use formbuilder::{AttributeMap, FormBuilder};
	///
	/// let attrs = AttributeMap::from([("id", "signup"), ("novalidate", "")]);
	/// let form = FormBuilder::with_attributes(attrs).render();
	/// assert!(form.contains("class='formbuilder' id='signup' novalidate=''"));
	/// ```
	pub fn with_attributes(form_attributes: AttributeMap) -> Self {
		Self {
			fields: vec![],
			method: FormMethod::default(),
			action: String::new(),
			form_attributes,
		}
	}

	/// Set the form method. Last call wins.
	pub fn method(mut self, method: FormMethod) -> Self {
		self.method = method;
		self
	}

	/// Set the form action URL. Last call wins; no URL validation is
	/// performed.
	pub fn action(mut self, action: impl Into<String>) -> Self {
		self.action = action.into();
		self
	}

	/// Append an `<input>` field.
	///
	/// # Examples
	///
	/// ```
	/// use formbuilder::{AttributeMap, FormBuilder, InputType};
	///
	/// let fields = FormBuilder::new()
	///     .add_input("age", InputType::Number, AttributeMap::from([("min", "0")]))
	///     .render_fields();
	/// assert_eq!(fields, "<input type='number' name='age' min='0'>");
	/// ```
	pub fn add_input(mut self, name: &str, input_type: InputType, attrs: AttributeMap) -> Self {
		let mut field = format!("<input type='{}' name='{}'", input_type.as_str(), name);
		attrs.render_into(&mut field);
		field.push('>');
		self.fields.push(field);
		self
	}

	/// Append a `<textarea>` field.
	///
	/// The value becomes the element's raw text content; no escaping is
	/// performed.
	pub fn add_text_area(mut self, name: &str, value: &str, attrs: AttributeMap) -> Self {
		let mut field = format!("<textarea name='{}'", name);
		attrs.render_into(&mut field);
		field.push('>');
		field.push_str(value);
		field.push_str("</textarea>");
		self.fields.push(field);
		self
	}

	/// Append a `<button>` with the given label.
	pub fn add_button(mut self, name: &str, value: &str, attrs: AttributeMap) -> Self {
		let mut field = format!("<button name='{}'", name);
		attrs.render_into(&mut field);
		field.push('>');
		field.push_str(value);
		field.push_str("</button>");
		self.fields.push(field);
		self
	}

	/// Append a `<select>` with one `<option>` per `(value, label)` pair.
	///
	/// Options render in slice order. The option whose value equals
	/// `selected` carries the `selected` marker; comparison is exact string
	/// equality, so numeric option values must be stringified by the caller.
	/// `attrs` apply to the `<select>` element, not the options.
	///
	/// # Examples
	///
	/// ```
	/// use formbuilder::{AttributeMap, FormBuilder};
	///
	/// let options = vec![
	///     ("1".to_string(), "One".to_string()),
	///     ("2".to_string(), "Two".to_string()),
	/// ];
	/// let fields = FormBuilder::new()
	///     .add_select("count", &options, Some("2"), AttributeMap::new())
	///     .render_fields();
	/// assert_eq!(
	///     fields,
	///     "<select name='count'><option value='1'>One</option>\
	///      <option value='2' selected>Two</option></select>"
	/// );
	/// ```
	pub fn add_select(
		mut self,
		name: &str,
		options: &[(String, String)],
		selected: Option<&str>,
		attrs: AttributeMap,
	) -> Self {
		let mut field = format!("<select name='{}'", name);
		attrs.render_into(&mut field);
		field.push('>');
		for (value, label) in options {
			field.push_str("<option value='");
			field.push_str(value);
			field.push('\'');
			if selected == Some(value.as_str()) {
				field.push_str(" selected");
			}
			field.push('>');
			field.push_str(label);
			field.push_str("</option>");
		}
		field.push_str("</select>");
		self.fields.push(field);
		self
	}

	/// Append a labelled radio group, one radio per `(value, label)` pair.
	///
	/// The whole group is appended as a single fragment, not one entry per
	/// radio. The radio whose value equals `selected` carries the `checked`
	/// marker. `attrs` are repeated on every `<input>` in the group.
	pub fn add_radio_buttons(
		mut self,
		name: &str,
		options: &[(String, String)],
		selected: Option<&str>,
		attrs: AttributeMap,
	) -> Self {
		let mut field = String::new();
		for (value, label) in options {
			field.push_str("<label><input type='radio' name='");
			field.push_str(name);
			field.push_str("' value='");
			field.push_str(value);
			field.push('\'');
			if selected == Some(value.as_str()) {
				field.push_str(" checked");
			}
			attrs.render_into(&mut field);
			field.push_str("> ");
			field.push_str(label);
			field.push_str("</label>");
		}
		self.fields.push(field);
		self
	}

	/// Append a single labelled checkbox.
	///
	/// # Examples
	///
	/// ```
	/// use formbuilder::{AttributeMap, FormBuilder};
	///
	/// let fields = FormBuilder::new()
	///     .add_checkbox("tos", "yes", "I agree", true, AttributeMap::new())
	///     .render_fields();
	/// assert_eq!(
	///     fields,
	///     "<label><input type='checkbox' name='tos' value='yes' checked> I agree</label>"
	/// );
	/// ```
	pub fn add_checkbox(
		mut self,
		name: &str,
		value: &str,
		label: &str,
		is_checked: bool,
		attrs: AttributeMap,
	) -> Self {
		let mut field = format!("<label><input type='checkbox' name='{}' value='{}'", name, value);
		if is_checked {
			field.push_str(" checked");
		}
		attrs.render_into(&mut field);
		field.push_str("> ");
		field.push_str(label);
		field.push_str("</label>");
		self.fields.push(field);
		self
	}

	/// Append an `<hr>` divider of the given size.
	pub fn add_divider(mut self, size: u32) -> Self {
		self.fields.push(format!("<hr size='{}'>", size));
		self
	}

	/// Append a heading element.
	///
	/// `level` is interpolated literally; callers are responsible for
	/// keeping it in the 1-6 range. `add_heading(7, ..)` renders `<h7>`.
	pub fn add_heading(mut self, level: u8, text: &str, attrs: AttributeMap) -> Self {
		let mut field = format!("<h{}", level);
		attrs.render_into(&mut field);
		field.push('>');
		field.push_str(text);
		field.push_str(&format!("</h{}>", level));
		self.fields.push(field);
		self
	}

	/// Append an opening `<div>`.
	///
	/// No matching close is appended; pair with [`close_container`]. The
	/// builder performs no balance tracking.
	///
	/// [`close_container`]: FormBuilder::close_container
	pub fn add_container(mut self, attrs: AttributeMap) -> Self {
		let mut field = String::from("<div");
		attrs.render_into(&mut field);
		field.push('>');
		self.fields.push(field);
		self
	}

	/// Append a bare `</div>`.
	pub fn close_container(mut self) -> Self {
		self.fields.push(String::from("</div>"));
		self
	}

	/// Render the complete `<form>` element.
	///
	/// Read-only and idempotent: rendering twice on the same builder yields
	/// identical strings.
	///
	/// # Examples
	///
	/// ```
	/// use formbuilder::FormBuilder;
	///
	/// let builder = FormBuilder::new();
	/// assert_eq!(
	///     builder.render(),
	///     "<form method='get' action='' class='formbuilder'></form>"
	/// );
	/// ```
	pub fn render(&self) -> String {
		trace!(fields = self.fields.len(), method = %self.method, "rendering form");
		let mut html = format!(
			"<form method='{}' action='{}' class='formbuilder'",
			self.method.as_str(),
			self.action
		);
		self.form_attributes.render_into(&mut html);
		html.push('>');
		for field in &self.fields {
			html.push_str(field);
		}
		html.push_str("</form>");
		html
	}

	/// Render the accumulated fields without the wrapping `<form>` tag.
	///
	/// For embedding the fields inside an externally managed form element.
	pub fn render_fields(&self) -> String {
		self.fields.concat()
	}

	/// Render an error container for a list of form error messages.
	///
	/// Produces a `<div class='formbuilder-errors'>` wrapping one `<li>` per
	/// message. An empty error list produces the empty string, with no
	/// container emitted at all.
	///
	/// # Examples
	///
	/// ```
	/// use formbuilder::{AttributeMap, FormBuilder};
	///
	/// assert_eq!(FormBuilder::render_form_errors(&[], AttributeMap::new()), "");
	///
	/// let html = FormBuilder::render_form_errors(&["Name is required"], AttributeMap::new());
	/// assert_eq!(
	///     html,
	///     "<div class='formbuilder-errors'><ul><li>Name is required</li></ul></div>"
	/// );
	/// ```
	pub fn render_form_errors(errors: &[&str], attrs: AttributeMap) -> String {
		if errors.is_empty() {
			return String::new();
		}
		trace!(errors = errors.len(), "rendering form errors");
		let mut html = String::from("<div class='formbuilder-errors'");
		attrs.render_into(&mut html);
		html.push_str("><ul>");
		for error in errors {
			html.push_str("<li>");
			html.push_str(error);
			html.push_str("</li>");
		}
		html.push_str("</ul></div>");
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_form_wrapper() {
		let form = FormBuilder::new().render();
		assert_eq!(form, "<form method='get' action='' class='formbuilder'></form>");
	}

	#[test]
	fn test_method_and_action_last_call_wins() {
		let form = FormBuilder::new()
			.method(FormMethod::Put)
			.action("/old")
			.method(FormMethod::Post)
			.action("/new")
			.render();
		assert!(form.starts_with("<form method='post' action='/new'"));
	}

	#[test]
	fn test_text_area_value_is_raw() {
		let fields = FormBuilder::new()
			.add_text_area("bio", "a <b>bold</b> claim", AttributeMap::new())
			.render_fields();
		assert_eq!(fields, "<textarea name='bio'>a <b>bold</b> claim</textarea>");
	}

	#[test]
	fn test_heading_out_of_range_renders_literally() {
		let fields = FormBuilder::new()
			.add_heading(7, "Too deep", AttributeMap::new())
			.render_fields();
		assert_eq!(fields, "<h7>Too deep</h7>");
	}

	#[test]
	fn test_radio_group_is_one_fragment() {
		let options = vec![
			("a".to_string(), "A".to_string()),
			("b".to_string(), "B".to_string()),
		];
		let builder = FormBuilder::new().add_radio_buttons("pick", &options, None, AttributeMap::new());
		assert_eq!(builder.fields.len(), 1);
		assert_eq!(
			builder.render_fields(),
			"<label><input type='radio' name='pick' value='a'> A</label>\
			 <label><input type='radio' name='pick' value='b'> B</label>"
		);
	}

	#[test]
	fn test_divider_size() {
		let fields = FormBuilder::new().add_divider(3).render_fields();
		assert_eq!(fields, "<hr size='3'>");
	}
}
