//! Speech markup envelope handling.
//!
//! The platform expects every spoken line inside a single `<speak>`
//! element. These helpers normalise free text into that envelope and strip
//! it back out. They do not parse or validate the interior markup.

/// Opening tag of the speech envelope.
pub const SPEAK_OPEN: &str = "<speak>";

/// Closing tag of the speech envelope.
pub const SPEAK_CLOSE: &str = "</speak>";

/// Wraps `text` in exactly one speech envelope.
///
/// Any envelope tags already present are removed first, so the result is
/// idempotent: `wrap(&wrap(x)) == wrap(x)`.
///
/// # Examples
///
/// ```
/// use palaver::response::domain::speech;
///
/// assert_eq!(speech::wrap("Hello"), "<speak>Hello</speak>");
/// assert_eq!(speech::wrap("<speak>Hello</speak>"), "<speak>Hello</speak>");
/// ```
#[must_use]
pub fn wrap(text: &str) -> String {
    format!("{SPEAK_OPEN}{}{SPEAK_CLOSE}", unwrap(text))
}

/// Removes every envelope tag from `text`, leaving interior content as is.
///
/// Balance and nesting are not checked.
///
/// # Examples
///
/// ```
/// use palaver::response::domain::speech;
///
/// assert_eq!(speech::unwrap("<speak>Hi <break time=\"1s\"/></speak>"), "Hi <break time=\"1s\"/>");
/// assert_eq!(speech::unwrap("plain"), "plain");
/// ```
#[must_use]
pub fn unwrap(text: &str) -> String {
    text.replace(SPEAK_OPEN, "").replace(SPEAK_CLOSE, "")
}

/// Builds the enveloped speech for an audio clip with a spoken fallback.
///
/// The fallback is read out when the clip cannot be played.
#[must_use]
pub fn audio(audio_url: &str, fallback_text: &str) -> String {
    wrap(&format!(r#"<audio src="{audio_url}">{fallback_text}</audio>"#))
}
