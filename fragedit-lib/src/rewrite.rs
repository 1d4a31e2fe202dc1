use url::Url;

use crate::types::{TextFragmentError, TextFragmentParts, TEXT_FRAGMENT_PREFIX};

/// Apply `TextFragmentParts` to a base URL and return the rewritten URL.
///
/// With a non-empty *textStart* the URL's hash is replaced by the encoded
/// directive. With a cleared directive the hash is removed, but only when
/// the current hash is itself a text fragment; any other hash (a plain
/// `#section` anchor) is preserved unchanged.
///
/// # Errors
/// - `TextFragmentError::InvalidBaseUrl`, if `url_str` is not a
///   syntactically valid absolute URL
pub fn rewrite_url(
    url_str: &str,
    parts: &TextFragmentParts,
) -> Result<String, TextFragmentError> {
    let mut url =
        Url::parse(url_str).map_err(|e| TextFragmentError::InvalidBaseUrl(e.to_string()))?;

    match parts.to_hash() {
        // `Url` fragments carry no leading `#`
        Some(hash) => url.set_fragment(Some(&hash[1..])),
        None => {
            let is_text_fragment = url
                .fragment()
                .is_some_and(|fragment| fragment.starts_with(&TEXT_FRAGMENT_PREFIX[1..]));
            if is_text_fragment {
                url.set_fragment(None);
            }
        }
    }

    Ok(url.to_string())
}
