use std::borrow::Cow;
use std::fmt;

/// Characters allowed in QR alphanumeric mode.
pub const ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// QR data-encoding mode used for the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncodingMode {
    Alphanumeric,
    Byte,
}

impl EncodingMode {
    /// Picks the mode for `text` and the content to encode with it.
    ///
    /// Text whose ASCII-uppercased form fits the alphanumeric charset is
    /// encoded uppercased in `Alphanumeric` mode, so `hello` and `HELLO`
    /// produce the same symbol. Anything else keeps its original bytes in
    /// `Byte` mode.
    pub fn select(text: &str) -> (EncodingMode, Cow<'_, str>) {
        let upper = text.to_ascii_uppercase();
        if is_alphanumeric(&upper) {
            (EncodingMode::Alphanumeric, Cow::Owned(upper))
        } else {
            (EncodingMode::Byte, Cow::Borrowed(text))
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingMode::Alphanumeric => "alphanumeric",
            EncodingMode::Byte => "byte",
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact match of `^[0-9A-Z $%*+\-./:]*$`.
pub fn is_alphanumeric(text: &str) -> bool {
    text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_text_is_alphanumeric() {
        let (mode, content) = EncodingMode::select("HELLO WORLD $%*+-./:0123");
        assert_eq!(mode, EncodingMode::Alphanumeric);
        assert_eq!(content, "HELLO WORLD $%*+-./:0123");
    }

    #[test]
    fn lowercase_text_is_uppercased_into_alphanumeric() {
        let (mode, content) = EncodingMode::select("hello");
        assert_eq!(mode, EncodingMode::Alphanumeric);
        assert_eq!(content, "HELLO");
    }

    #[test]
    fn mixed_case_url_falls_back_to_byte() {
        let (mode, content) = EncodingMode::select("https://example.com/?q=1");
        assert_eq!(mode, EncodingMode::Byte);
        assert_eq!(content, "https://example.com/?q=1");
    }

    #[test]
    fn non_ascii_text_keeps_original_bytes() {
        let (mode, content) = EncodingMode::select("héllo");
        assert_eq!(mode, EncodingMode::Byte);
        assert_eq!(content, "héllo");
    }

    #[test]
    fn charset_check_is_case_sensitive() {
        assert!(is_alphanumeric("ABC 123"));
        assert!(is_alphanumeric(""));
        assert!(!is_alphanumeric("abc"));
        assert!(!is_alphanumeric("A_B"));
    }
}
