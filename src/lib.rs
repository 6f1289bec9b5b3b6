//! Interpol - positional placeholder formatting
//!
//! Substitutes `{N}` placeholders in a template with the N-th argument
//! (1-based), rejecting malformed templates with a precise error kind.
//!
//! # Example
//!
//! ```rust
//! use interpol::{format, values};
//!
//! let out = format("Hello {1}, you are {2}", &values!["Denis", 3.0]).unwrap();
//! assert_eq!(out, "Hello Denis, you are 3");
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod lexer;
pub mod text;
pub mod value;

pub use config::{Settings, SettingsError};
pub use error::{Diagnostic, FormatError};
pub use formatter::{format, format_or_original, format_spanned, placeholders};
pub use text::reverse;
pub use value::Value;
