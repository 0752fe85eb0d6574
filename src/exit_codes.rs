//! Process exit codes.
//!
//! - `0`: every unit of work succeeded
//! - `1`: a unit failed, a URL is missing or unreachable, a registry file has
//!   issues, or the run aborted with an error
//! - `2`: invalid command-line usage (reported by clap)

pub const SUCCESS: u8 = 0;
pub const FAILURE: u8 = 1;

/// `FAILURE` if anything failed, else `SUCCESS`.
pub fn from_failures(failed: usize) -> u8 {
    if failed > 0 {
        FAILURE
    } else {
        SUCCESS
    }
}
