//! Fluent HTML form builder
//!
//! This crate assembles HTML `<form>` markup programmatically instead of by
//! hand-written templates. A [`FormBuilder`] accumulates rendered field
//! fragments in call order and concatenates them inside a `<form>` wrapper:
//!
//! ```
//! use formbuilder::{AttributeMap, FormBuilder, FormMethod, InputType};
//!
//! let form = FormBuilder::new()
//!     .method(FormMethod::Post)
//!     .action("/signup")
//!     .add_heading(2, "Sign up", AttributeMap::new())
//!     .add_input("email", InputType::Email, AttributeMap::new())
//!     .add_checkbox("tos", "yes", "I accept the terms", false, AttributeMap::new())
//!     .add_button("submit", "Create account", AttributeMap::new())
//!     .render();
//!
//! assert!(form.contains("<input type='email' name='email'>"));
//! ```
//!
//! Responsibility ends at string generation. The builder performs no input
//! validation, no submission handling, and no escaping: attribute and field
//! values are interpolated verbatim, and sanitization is the caller's job.

pub mod attrs;
pub mod builder;
pub mod error;
pub mod input_type;
pub mod method;

pub use attrs::AttributeMap;
pub use builder::FormBuilder;
pub use error::ParseVocabularyError;
pub use input_type::InputType;
pub use method::FormMethod;
