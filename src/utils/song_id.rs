//! Song identifier parsing for path parameters.

use serde_json::json;

use crate::error::AppError;

/// Parses a `{id}` path segment into a song id.
///
/// Accepts unsigned decimal integers that fit the database's `BIGINT`.
/// Anything else is rejected rather than coerced to a default.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for empty, signed, non-numeric or
/// out-of-range input.
pub fn parse_song_id(raw: &str) -> Result<i64, AppError> {
    let invalid = || AppError::bad_request("Invalid song ID format", json!({ "id": raw }));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    raw.parse::<u64>()
        .ok()
        .and_then(|id| i64::try_from(id).ok())
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert_eq!(parse_song_id("0").unwrap(), 0);
        assert_eq!(parse_song_id("42").unwrap(), 42);
        assert_eq!(parse_song_id("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(parse_song_id("").is_err());
        assert!(parse_song_id("abc").is_err());
        assert!(parse_song_id("12abc").is_err());
        assert!(parse_song_id("1.5").is_err());
    }

    #[test]
    fn test_parse_rejects_signs() {
        assert!(parse_song_id("-1").is_err());
        assert!(parse_song_id("+1").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_song_id("9223372036854775808").is_err());
        assert!(parse_song_id("99999999999999999999999").is_err());
    }

    #[test]
    fn test_error_is_validation() {
        let err = parse_song_id("abc").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
