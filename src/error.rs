//! Error types for the form vocabularies

use thiserror::Error;

/// Error returned when a wire string falls outside one of the closed
/// form vocabularies.
///
/// Building and rendering never fail; parsing external strings back into
/// [`FormMethod`](crate::FormMethod) or [`InputType`](crate::InputType) is
/// the only fallible surface of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVocabularyError {
	#[error("unknown form method: {0}")]
	UnknownMethod(String),
	#[error("unknown input type: {0}")]
	UnknownInputType(String),
}
