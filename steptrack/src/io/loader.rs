//! Load and validate step counts from a whitespace-separated text file.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::core::sequence::StepSequence;

/// Initial allocation for a typical month of readings.
const INITIAL_CAPACITY: usize = 64;

/// The two terminal load failures.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open input file '{}'", .path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(
        "only read {found} values from '{}'; expected at least {required} integers",
        .path.display()
    )]
    InsufficientData {
        path: PathBuf,
        found: usize,
        required: usize,
    },
}

impl LoadError {
    /// Follow-up advice printed after the error message.
    pub fn hint(&self) -> &'static str {
        match self {
            LoadError::FileOpen { .. } => {
                "Ensure the file exists in the working directory and is readable."
            }
            LoadError::InsufficientData { .. } => {
                "Tip: Check for non-numeric characters or missing lines."
            }
        }
    }
}

/// Read integers from `path` until end of input or the first token that is
/// not an `i32`, then require at least `min_days` of them.
///
/// The file handle is dropped before this returns, on success or failure.
pub fn load_steps(path: &Path, min_days: usize) -> Result<StepSequence, LoadError> {
    let open_err = |source| LoadError::FileOpen {
        path: path.to_path_buf(),
        source,
    };
    let mut raw = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut raw))
        .map_err(open_err)?;

    let seq = parse_steps(&raw);
    debug!(path = %path.display(), count = seq.len(), "parsed step counts");

    if seq.len() < min_days {
        return Err(LoadError::InsufficientData {
            path: path.to_path_buf(),
            found: seq.len(),
            required: min_days,
        });
    }
    Ok(seq)
}

/// Parse whitespace-separated integers in encounter order.
///
/// Each token contributes its leading integer (optional sign, then digits).
/// Reading stops after a token with trailing characters, such as `3x` or
/// `2.5`, and at a token with no leading integer or one outside the `i32`
/// range.
pub fn parse_steps(raw: &[u8]) -> StepSequence {
    let mut seq = StepSequence::with_capacity(INITIAL_CAPACITY);
    let tokens = raw
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty());
    for token in tokens {
        let Some((value, consumed)) = leading_int(token) else {
            break;
        };
        seq.push(value);
        if consumed < token.len() {
            break;
        }
    }
    seq
}

/// Longest `[+-]?[0-9]+` prefix of `token` as an `i32`, with its byte length.
fn leading_int(token: &[u8]) -> Option<(i32, usize)> {
    let sign = usize::from(matches!(token.first(), Some(b'+' | b'-')));
    let digits = token[sign..]
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    let end = sign + digits;
    let value = std::str::from_utf8(&token[..end]).ok()?.parse::<i32>().ok()?;
    Some((value, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StepsFile;

    #[test]
    fn reads_all_values_in_order() {
        let file = StepsFile::with_values(&(1..=35).collect::<Vec<_>>()).expect("steps file");
        let seq = load_steps(file.path(), 30).expect("load");
        let expected: Vec<i32> = (1..=35).collect();
        assert_eq!(seq.as_slice(), expected.as_slice());
    }

    #[test]
    fn minimum_is_a_lower_bound_not_a_target() {
        let file = StepsFile::with_values(&(1..=30).collect::<Vec<_>>()).expect("steps file");
        assert_eq!(load_steps(file.path(), 30).expect("load").len(), 30);
    }

    #[test]
    fn missing_file_is_file_open_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let err = load_steps(&temp.path().join("nope.txt"), 30).expect_err("should fail");
        assert!(matches!(err, LoadError::FileOpen { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn short_file_is_insufficient_data() {
        let file = StepsFile::with_values(&[1, 2, 3]).expect("steps file");
        let err = load_steps(file.path(), 30).expect_err("should fail");
        assert!(matches!(
            err,
            LoadError::InsufficientData {
                found: 3,
                required: 30,
                ..
            }
        ));
    }

    #[test]
    fn empty_file_is_insufficient_data() {
        let file = StepsFile::with_contents("").expect("steps file");
        let err = load_steps(file.path(), 30).expect_err("should fail");
        assert!(matches!(err, LoadError::InsufficientData { found: 0, .. }));
    }

    #[test]
    fn non_numeric_token_halts_reading() {
        let seq = parse_steps(b"10 20\n30 abc 40 50\n");
        assert_eq!(seq.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn trailing_characters_keep_leading_integer_then_halt() {
        assert_eq!(parse_steps(b"1 2 3x 4").as_slice(), &[1, 2, 3]);
        assert_eq!(parse_steps(b"1 2.5 9").as_slice(), &[1, 2]);
        assert_eq!(parse_steps(b"-7kg 8").as_slice(), &[-7]);
    }

    #[test]
    fn bare_sign_halts_reading() {
        assert_eq!(parse_steps(b"4 - 5").as_slice(), &[4]);
        assert_eq!(parse_steps(b"4 +x 5").as_slice(), &[4]);
    }

    #[test]
    fn glued_suffix_on_last_value_still_counts() {
        let mut contents: String = (1..=29).map(|v| format!("{v}\n")).collect();
        contents.push_str("30steps\n");
        let file = StepsFile::with_contents(&contents).expect("steps file");

        let seq = load_steps(file.path(), 30).expect("load");
        assert_eq!(seq.len(), 30);
        assert_eq!(seq.back(), Some(30));
    }

    #[test]
    fn mixed_whitespace_and_signs() {
        let seq = parse_steps(b"  -5\t+7\r\n\n8000 \n");
        assert_eq!(seq.as_slice(), &[-5, 7, 8000]);
    }

    #[test]
    fn out_of_range_value_halts_reading() {
        let seq = parse_steps(b"1 2 99999999999 3");
        assert_eq!(seq.as_slice(), &[1, 2]);
    }

    #[test]
    fn invalid_utf8_halts_reading() {
        let seq = parse_steps(b"1 \xff\xfe 2");
        assert_eq!(seq.as_slice(), &[1]);
    }
}
