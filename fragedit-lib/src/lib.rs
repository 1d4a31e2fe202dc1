//! `fragedit-lib` parses and constructs text fragment URL hashes - the
//! `#:~:text=` scroll-to-text directive that makes a browser highlight a
//! piece of the target page.
//!
//! The core surface is [`TextFragmentParts`] (decode a hash into its four
//! terms, encode them back) and [`rewrite_url`] (apply the parts to a base
//! URL). [`EditorSession`] is a thin state holder for interactive editing
//! on top of the two pure transformations.
//!
//! ```
//! use fragedit_lib::{rewrite_url, TextFragmentParts};
//!
//! # fn main() -> Result<(), fragedit_lib::TextFragmentError> {
//! let mut parts = TextFragmentParts::from_hash("#:~:text=foo-,hello,world,-bar");
//! assert_eq!(parts.text_start(), "hello");
//!
//! parts.set_text_start("well-known");
//! let url = rewrite_url("https://example.com/page", &parts)?;
//! assert_eq!(
//!     url,
//!     "https://example.com/page#:~:text=foo-,well%2Dknown,world,-bar"
//! );
//! # Ok(())
//! # }
//! ```

mod rewrite;
mod session;
mod types;

pub use rewrite::rewrite_url;
pub use session::EditorSession;
pub use types::*;
