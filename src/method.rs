//! HTTP method vocabulary for the `<form>` element

use crate::error::ParseVocabularyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP method used when the form is submitted.
///
/// A closed vocabulary; each variant maps to its lowercase wire string
/// as rendered into the `method` attribute.
///
/// # Examples
///
/// ```
/// use formbuilder::FormMethod;
///
/// assert_eq!(FormMethod::Post.as_str(), "post");
/// assert_eq!(FormMethod::default(), FormMethod::Get);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMethod {
	/// HTTP GET (the default)
	#[default]
	Get,
	/// HTTP POST
	Post,
	/// HTTP PUT
	Put,
	/// HTTP DELETE
	Delete,
	/// HTTP PATCH
	Patch,
}

impl FormMethod {
	/// Get the lowercase wire string for this method.
	pub fn as_str(&self) -> &'static str {
		match self {
			FormMethod::Get => "get",
			FormMethod::Post => "post",
			FormMethod::Put => "put",
			FormMethod::Delete => "delete",
			FormMethod::Patch => "patch",
		}
	}
}

impl fmt::Display for FormMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for FormMethod {
	type Err = ParseVocabularyError;

	/// Parse a lowercase wire string back into a method.
	///
	/// # Examples
	///
	/// ```
	/// use formbuilder::FormMethod;
	///
	/// assert_eq!("patch".parse::<FormMethod>(), Ok(FormMethod::Patch));
	/// assert!("track".parse::<FormMethod>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"get" => Ok(FormMethod::Get),
			"post" => Ok(FormMethod::Post),
			"put" => Ok(FormMethod::Put),
			"delete" => Ok(FormMethod::Delete),
			"patch" => Ok(FormMethod::Patch),
			other => Err(ParseVocabularyError::UnknownMethod(other.to_string())),
		}
	}
}
