//! Remove the leading whitespace shared by the lines of a multiline text.
//!
//! Text cut out of a deeply nested document (markup dumps, embedded code)
//! keeps the indentation of its surroundings. [`strip_common_indentation`]
//! removes it, optionally after [`collapse_blank_lines`] has limited runs of
//! blank lines.
//!
//! ```
//! use outdent::{Options, PartialOptions, strip_common_indentation};
//!
//! let options = PartialOptions {
//!     ignore_head: Some(0),
//!     ..Default::default()
//! }
//! .validate();
//! assert_eq!(strip_common_indentation("    a\n      b\n", &options), "a\n  b\n");
//! assert_eq!(Options::default().ignore_head(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod options;
pub mod request;
pub mod transform;
pub mod utils;

pub use error::OutdentError;
pub use options::{Options, PartialOptions};
pub use transform::{IndentReport, analyze, collapse_blank_lines, strip_common_indentation};
