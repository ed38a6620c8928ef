//! Exit code constants for the quill CLI.
//!
//! - 0: Success (article written, with or without validation warnings)
//! - 1: User error (bad args, invalid config)
//! - 2: Model backend failure
//! - 3: Output write failure

/// Successful execution. Validation warnings do not change this.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an unreadable/invalid config file.
pub const USER_ERROR: i32 = 1;

/// Model backend failure: unreachable, HTTP error, or malformed response.
pub const MODEL_FAILURE: i32 = 2;

/// Output failure: output directory or article file could not be written.
pub const OUTPUT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, MODEL_FAILURE, OUTPUT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_match_documented_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(MODEL_FAILURE, 2);
        assert_eq!(OUTPUT_FAILURE, 3);
    }
}
