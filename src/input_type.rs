//! Input type vocabulary for `<input>` elements

use crate::error::ParseVocabularyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The `type` attribute value of an `<input>` element.
///
/// A closed vocabulary; each variant maps to the attribute string the
/// browser understands. `Datetime` is obsolete in current HTML but kept
/// because the vocabulary, not the standard, is authoritative here.
///
/// # Examples
///
/// ```
/// use formbuilder::InputType;
///
/// assert_eq!(InputType::DatetimeLocal.as_str(), "datetime-local");
/// assert_eq!(InputType::default(), InputType::Text);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputType {
	#[default]
	Text,
	Password,
	Checkbox,
	Radio,
	Number,
	Date,
	Time,
	Email,
	Url,
	File,
	Color,
	Range,
	Hidden,
	Submit,
	Reset,
	Image,
	Month,
	Week,
	Datetime,
	DatetimeLocal,
	Search,
	Tel,
}

impl InputType {
	/// Get the HTML attribute string for this input type.
	pub fn as_str(&self) -> &'static str {
		match self {
			InputType::Text => "text",
			InputType::Password => "password",
			InputType::Checkbox => "checkbox",
			InputType::Radio => "radio",
			InputType::Number => "number",
			InputType::Date => "date",
			InputType::Time => "time",
			InputType::Email => "email",
			InputType::Url => "url",
			InputType::File => "file",
			InputType::Color => "color",
			InputType::Range => "range",
			InputType::Hidden => "hidden",
			InputType::Submit => "submit",
			InputType::Reset => "reset",
			InputType::Image => "image",
			InputType::Month => "month",
			InputType::Week => "week",
			InputType::Datetime => "datetime",
			InputType::DatetimeLocal => "datetime-local",
			InputType::Search => "search",
			InputType::Tel => "tel",
		}
	}
}

impl fmt::Display for InputType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for InputType {
	type Err = ParseVocabularyError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"text" => Ok(InputType::Text),
			"password" => Ok(InputType::Password),
			"checkbox" => Ok(InputType::Checkbox),
			"radio" => Ok(InputType::Radio),
			"number" => Ok(InputType::Number),
			"date" => Ok(InputType::Date),
			"time" => Ok(InputType::Time),
			"email" => Ok(InputType::Email),
			"url" => Ok(InputType::Url),
			"file" => Ok(InputType::File),
			"color" => Ok(InputType::Color),
			"range" => Ok(InputType::Range),
			"hidden" => Ok(InputType::Hidden),
			"submit" => Ok(InputType::Submit),
			"reset" => Ok(InputType::Reset),
			"image" => Ok(InputType::Image),
			"month" => Ok(InputType::Month),
			"week" => Ok(InputType::Week),
			"datetime" => Ok(InputType::Datetime),
			"datetime-local" => Ok(InputType::DatetimeLocal),
			"search" => Ok(InputType::Search),
			"tel" => Ok(InputType::Tel),
			other => Err(ParseVocabularyError::UnknownInputType(other.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: [InputType; 22] = [
		InputType::Text,
		InputType::Password,
		InputType::Checkbox,
		InputType::Radio,
		InputType::Number,
		InputType::Date,
		InputType::Time,
		InputType::Email,
		InputType::Url,
		InputType::File,
		InputType::Color,
		InputType::Range,
		InputType::Hidden,
		InputType::Submit,
		InputType::Reset,
		InputType::Image,
		InputType::Month,
		InputType::Week,
		InputType::Datetime,
		InputType::DatetimeLocal,
		InputType::Search,
		InputType::Tel,
	];

	#[test]
	fn test_wire_strings_round_trip() {
		for input_type in ALL {
			assert_eq!(input_type.as_str().parse::<InputType>(), Ok(input_type));
		}
	}

	#[test]
	fn test_hyphenated_wire_string() {
		assert_eq!(
			"datetime-local".parse::<InputType>(),
			Ok(InputType::DatetimeLocal)
		);
		assert_eq!(
			serde_json::to_string(&InputType::DatetimeLocal).unwrap(),
			"\"datetime-local\""
		);
	}

	#[test]
	fn test_unknown_input_type_rejected() {
		let err = "textarea".parse::<InputType>().unwrap_err();
		assert_eq!(err.to_string(), "unknown input type: textarea");
	}
}
