/// Text fragment parts and the hash codec
use fancy_regex::Regex;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::types::error::TextFragmentError;

/// The four components of a text fragment directive, with the syntax
///     #:~:text=[prefix-,]textStart[,textEnd][,-suffix]
/// *textStart* is required for a non-empty directive; the other three
/// terms are optional. *textStart* with *textEnd* constitutes a text
/// range. *prefix* and *suffix* are contextual terms used to
/// disambiguate the match; they are not part of the highlighted text.
///
/// All four terms are held in decoded (human-readable) form; the hash
/// representation is percent-encoded.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFragmentParts {
    /// Contextual term immediately before the target text.
    /// Separated from *textStart* by `-,` in the hash
    /// OPTIONAL
    prefix: String,
    /// The target text to highlight, or the beginning of the target
    /// range when *textEnd* is present
    /// MANDATORY - an empty value means the directive is absent
    text_start: String,
    /// End of the target range
    /// OPTIONAL
    text_end: String,
    /// Contextual term immediately after the target text.
    /// Separated from the preceding term by `,-` in the hash
    /// OPTIONAL
    suffix: String,
}

pub(crate) const TEXT_FRAGMENT_PREFIX: &str = "#:~:text=";

/// Anchored grammar for a text fragment hash. Raw tokens may only contain
/// letters, digits and `! % ' ( ) * - . _ ~`; any other character anywhere
/// in the hash fails the whole match.
const TEXT_FRAGMENT_REGEX: &str = r"^#:~:text=(?:(?P<prefix>[!%'()*\-.0-9A-Z_a-z~]+)-,)?(?P<start>[!%'()*\-.0-9A-Z_a-z~]+)(?:,(?P<end>[!%'()*\-.0-9A-Z_a-z~]+))?(?:,-(?P<suffix>[!%'()*\-.0-9A-Z_a-z~]+))?$";

/// The `encodeURIComponent` escape set (everything but ASCII alphanumerics
/// and `- _ . ! ~ * ' ( )`), except that `-` stays in the set: the dash is
/// a structural delimiter of the directive grammar and must never appear
/// raw inside an encoded token.
const TOKEN_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Getters and setters
impl TextFragmentParts {
    pub fn prefix(&self) -> &str {
        self.prefix.as_str()
    }

    pub fn text_start(&self) -> &str {
        self.text_start.as_str()
    }

    pub fn text_end(&self) -> &str {
        self.text_end.as_str()
    }

    pub fn suffix(&self) -> &str {
        self.suffix.as_str()
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn set_text_start(&mut self, text_start: impl Into<String>) {
        self.text_start = text_start.into();
    }

    pub fn set_text_end(&mut self, text_end: impl Into<String>) {
        self.text_end = text_end.into();
    }

    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    /// An empty *textStart* means the whole directive is absent
    pub fn is_cleared(&self) -> bool {
        self.text_start.is_empty()
    }

    /// Reset all four terms
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Decoding and encoding
impl TextFragmentParts {
    /// Percent decode a single matched token
    ///
    /// `percent_decode_str` passes malformed escapes through untouched,
    /// but the grammar treats them as a failed token, so a `%` that is not
    /// followed by two hex digits is rejected up front.
    ///
    /// # Errors
    /// - `TextFragmentError::PercentDecode`, on a malformed escape or when
    ///   the decoded bytes are not valid UTF-8
    fn percent_decode(token: &str) -> Result<String, TextFragmentError> {
        let bytes = token.as_bytes();
        for (i, byte) in bytes.iter().enumerate() {
            if *byte == b'%'
                && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                    && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
            {
                return Err(TextFragmentError::PercentDecode(format!(
                    "malformed escape in {token}"
                )));
            }
        }

        let decode = percent_decode_str(token).decode_utf8();

        match decode {
            Ok(decode) => Ok(decode.to_string()),
            Err(e) => Err(TextFragmentError::PercentDecode(e.to_string())),
        }
    }

    /// Decode a captured token, degrading to an empty string when the
    /// token is absent or its percent decoding fails. A failed token never
    /// fails the other tokens.
    fn decode_token(token: Option<fancy_regex::Match>) -> String {
        let Some(token) = token else {
            return String::new();
        };

        match Self::percent_decode(token.as_str()) {
            Ok(decoded) => decoded,
            Err(e) => {
                log::debug!("dropping undecodable token: {e}");
                String::new()
            }
        }
    }

    /// Extract `TextFragmentParts` from a URL hash string (leading `#`
    /// included).
    ///
    /// A hash that does not match the directive grammar - wrong delimiter,
    /// a raw character outside the token class, a dangling separator -
    /// yields all-empty parts rather than an error; a hash without a text
    /// fragment is simply a cleared directive.
    pub fn from_hash(hash: &str) -> Self {
        let regex = match Regex::new(TEXT_FRAGMENT_REGEX) {
            Ok(regex) => regex,
            Err(e) => {
                log::error!("error constructing the text fragment regex: {e}");
                return Self::default();
            }
        };

        if let Ok(Some(captures)) = regex.captures(hash) {
            Self {
                prefix: Self::decode_token(captures.name("prefix")),
                text_start: Self::decode_token(captures.name("start")),
                text_end: Self::decode_token(captures.name("end")),
                suffix: Self::decode_token(captures.name("suffix")),
            }
        } else {
            Self::default()
        }
    }

    /// Re-derive the parts from a parsed URL's fragment
    pub fn from_url(url: &Url) -> Self {
        match url.fragment() {
            Some(fragment) => Self::from_hash(&format!("#{fragment}")),
            None => Self::default(),
        }
    }

    fn encode(token: &str) -> String {
        utf8_percent_encode(token, TOKEN_ENCODE_SET).to_string()
    }

    /// Serialize the parts back into a spec-compliant hash.
    ///
    /// Returns `None` when the directive is cleared (empty *textStart*).
    /// Empty optional terms are omitted entirely, so the hash never carries
    /// a dangling separator.
    pub fn to_hash(&self) -> Option<String> {
        if self.is_cleared() {
            return None;
        }

        let mut hash = String::from(TEXT_FRAGMENT_PREFIX);
        if !self.prefix.is_empty() {
            hash.push_str(&Self::encode(&self.prefix));
            hash.push_str("-,");
        }
        hash.push_str(&Self::encode(&self.text_start));
        if !self.text_end.is_empty() {
            hash.push(',');
            hash.push_str(&Self::encode(&self.text_end));
        }
        if !self.suffix.is_empty() {
            hash.push_str(",-");
            hash.push_str(&Self::encode(&self.suffix));
        }

        Some(hash)
    }
}
