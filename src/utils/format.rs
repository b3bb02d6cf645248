//! Byte-count, duration and throughput formatting for command-line output.

use std::time::Duration;

use crate::error::Ring30Error;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Formats a byte count using whole binary units ("1 MB", "10 KB", "512 B").
pub fn format_size(bytes: u64) -> String {
    if bytes >= MIB {
        format!("{} MB", bytes / MIB)
    } else if bytes >= KIB {
        format!("{} KB", bytes / KIB)
    } else {
        format!("{} B", bytes)
    }
}

/// Formats a duration in the most readable unit, padded to a fixed width.
pub fn format_duration(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    if nanos < 1_000 {
        format!("{:>6} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:>6.2} µs", nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{:>6.2} ms", nanos as f64 / 1_000_000.0)
    } else {
        format!("{:>6.2} s", elapsed.as_secs_f64())
    }
}

/// Formats a throughput given in MiB/s.
pub fn format_throughput(mib_per_sec: f64) -> String {
    format!("{:>9.2} MB/s", mib_per_sec)
}

/// Computes throughput in MiB/s for `bytes` produced in `elapsed`.
///
/// Returns `f64::INFINITY` when the elapsed time is zero.
pub fn throughput_mib(bytes: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return f64::INFINITY;
    }
    bytes as f64 / secs / MIB as f64
}

/// Parses a byte-count literal such as `1024`, `64K`, `1M`, `2GB` or `4kib`.
///
/// Suffixes are binary multiples and case-insensitive.
///
/// # Errors
/// Returns [`Ring30Error::InvalidSize`] for empty input, unknown suffixes,
/// or values that overflow `u64`.
pub fn parse_size(input: &str) -> Result<u64, Ring30Error> {
    let invalid = || Ring30Error::InvalidSize(input.to_string());
    let trimmed = input.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, suffix) = trimmed.split_at(split);
    if digits.is_empty() {
        return Err(invalid());
    }
    let value: u64 = digits.parse().map_err(|_| invalid())?;
    let multiplier = match suffix.to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" | "kib" => KIB,
        "m" | "mb" | "mib" => MIB,
        "g" | "gb" | "gib" => GIB,
        _ => return Err(invalid()),
    };
    value.checked_mul(multiplier).ok_or_else(invalid)
}
