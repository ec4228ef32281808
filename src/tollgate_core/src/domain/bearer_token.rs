use secrecy::{ExposeSecret, Secret};

const BEARER_KEYWORD: &str = "bearer";

/// A raw bearer token extracted from an `Authorization` header value.
///
/// The `bearer` keyword is matched case-insensitively and the run of
/// whitespace between the keyword and the token is stripped. The remainder is
/// taken as-is: an empty or malformed token is passed through so the
/// introspection call can report the failure downstream.
///
/// The token is a credential, so it is held in a [`Secret`] and never shows
/// up in `Debug` output.
#[derive(Debug, Clone)]
pub struct BearerToken(Secret<String>);

impl BearerToken {
    /// Extract the token from an `Authorization` header value.
    pub fn from_header_value(value: &str) -> Self {
        Self(Secret::new(strip_bearer_prefix(value).to_owned()))
    }

    /// The bare token string, as sent to the introspection endpoint.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

fn strip_bearer_prefix(value: &str) -> &str {
    let Some(keyword) = value.get(..BEARER_KEYWORD.len()) else {
        return value;
    };
    if !keyword.eq_ignore_ascii_case(BEARER_KEYWORD) {
        return value;
    }

    // The keyword must be followed by at least one whitespace character,
    // otherwise the whole value is the token.
    let rest = &value[BEARER_KEYWORD.len()..];
    if rest.starts_with(char::is_whitespace) {
        rest.trim_start()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn strips_bearer_prefix() {
        let token = BearerToken::from_header_value("Bearer abc123");
        assert_eq!(token.expose(), "abc123");
    }

    #[test]
    fn keyword_is_case_insensitive() {
        for header in ["bearer tok", "BEARER tok", "BeArEr tok"] {
            assert_eq!(BearerToken::from_header_value(header).expose(), "tok");
        }
    }

    #[test]
    fn strips_whitespace_run_after_keyword() {
        let token = BearerToken::from_header_value("Bearer \t  abc123");
        assert_eq!(token.expose(), "abc123");
    }

    #[test]
    fn value_without_prefix_passes_through() {
        let token = BearerToken::from_header_value("abc123");
        assert_eq!(token.expose(), "abc123");
    }

    #[test]
    fn keyword_without_whitespace_is_not_a_prefix() {
        assert_eq!(BearerToken::from_header_value("Bearer").expose(), "Bearer");
        assert_eq!(
            BearerToken::from_header_value("bearerabc").expose(),
            "bearerabc"
        );
    }

    #[test]
    fn empty_remainder_passes_through() {
        assert_eq!(BearerToken::from_header_value("Bearer ").expose(), "");
        assert_eq!(BearerToken::from_header_value("").expose(), "");
    }

    #[test]
    fn trailing_whitespace_is_kept() {
        assert_eq!(BearerToken::from_header_value("Bearer tok ").expose(), "tok ");
    }

    #[quickcheck]
    fn any_prefixed_header_yields_the_token_exactly(
        case_mask: u8,
        ws_seed: u8,
        token: String,
    ) -> TestResult {
        // A token starting with whitespace would be absorbed into the
        // separator run, so it cannot appear after a prefix unchanged.
        if token.starts_with(char::is_whitespace) {
            return TestResult::discard();
        }

        let keyword: String = BEARER_KEYWORD
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if case_mask & (1 << (i % 8)) != 0 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        let whitespace = " ".repeat(usize::from(ws_seed % 4) + 1);

        let header = format!("{keyword}{whitespace}{token}");
        TestResult::from_bool(BearerToken::from_header_value(&header).expose() == token)
    }
}
