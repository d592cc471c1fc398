//! Display formatting for the columns of a fie listing.
//!
//! Sizes are scaled with decimal units (1K = 1000 bytes) and printed with three
//! significant digits. Permissions are rendered as the classic 9-character `rwx` string
//! and modification times as `YY-MM-DD HH:MM:SS` in local time.

use chrono::{DateTime, Local};

use std::fs::Metadata;
use std::time::SystemTime;

pub const KB: u64 = 1_000;
pub const MB: u64 = 1_000_000;
pub const GB: u64 = 1_000_000_000;
pub const TB: u64 = 1_000_000_000_000;

/// Minimum rendered width of the size column.
pub const SIZE_WIDTH: usize = 5;
/// Width of the modification time column (`YY-MM-DD HH:MM:SS`).
pub const TIME_WIDTH: usize = 17;

const TIME_FORMAT: &str = "%y-%m-%d %H:%M:%S";
// Significant digits shown for scaled sizes
const SIZE_PRECISION: usize = 3;
const UNITS: [(u64, &str); 5] = [(1, ""), (KB, "K"), (MB, "M"), (GB, "G"), (TB, "T")];

/// Formats a byte count into a human-readable size like `1.54K` or `999`,
/// right-padded with spaces to at least [SIZE_WIDTH] characters.
///
/// The unit is the largest one whose factor is not above the byte count, so exactly
/// 1000 bytes already reads `1K`. A value that rounds up to 1000 in its unit is carried
/// into the next unit (999 999 bytes is `1M`, not `1e+03K`).
pub fn format_size(bytes: u64) -> String {
    let mut unit = UNITS
        .iter()
        .rposition(|&(factor, _)| bytes >= factor)
        .unwrap_or(0);
    let mut value = scale(bytes, unit);

    let carries = rounded_exponent(value, SIZE_PRECISION) >= SIZE_PRECISION as i32;
    if carries && unit + 1 < UNITS.len() {
        unit += 1;
        value = scale(bytes, unit);
    }

    let text = format!("{}{}", format_significant(value, SIZE_PRECISION), UNITS[unit].1);
    format!("{:<width$}", text, width = SIZE_WIDTH)
}

fn scale(bytes: u64, unit: usize) -> f64 {
    bytes as f64 / UNITS[unit].0 as f64
}

/// Decimal exponent of `value` once rounded to `precision` significant digits.
fn rounded_exponent(value: f64, precision: usize) -> i32 {
    let sci = format!("{:.*e}", precision.saturating_sub(1), value);
    sci.split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

/// Formats a number with `precision` significant digits, the way `%g` does:
/// fixed notation with trailing zeros removed, or scientific notation once the
/// exponent reaches the precision.
pub fn format_significant(value: f64, precision: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_string();
    }
    let precision = precision.max(1);
    let exp = rounded_exponent(value, precision);

    if exp < -4 || exp >= precision as i32 {
        let sci = format!("{:.*e}", precision - 1, value);
        let mantissa = sci.split_once('e').map_or(sci.as_str(), |(m, _)| m);
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Formats the lower nine permission bits as `rwxrwxrwx`, owner first.
///
/// Bits above the nine (setuid, setgid, sticky, file type) are ignored.
pub fn format_permissions(mode: u32) -> String {
    let mut chars = ['-'; 9];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = i * 3;
        if (mode >> (shift + 2)) & 1u32 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1u32 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1u32 != 0 {
            chars[base + 2] = 'x';
        }
    }
    chars.iter().collect()
}

/// Extracts the owner/group/other permission bits from metadata.
///
/// On Unix this is the mode. Elsewhere only the read-only attribute exists,
/// which maps to `r-xr-xr-x`, and everything else to `rwxrwxrwx`.
pub fn permission_bits(meta: &Metadata) -> u32 {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        meta.permissions().mode() & 0o777
    }
    #[cfg(not(unix))]
    {
        if meta.permissions().readonly() {
            0o555
        } else {
            0o777
        }
    }
}

/// Formats a modification time as `YY-MM-DD HH:MM:SS` in the local time zone.
pub fn format_modified(modified: SystemTime) -> String {
    let dt: DateTime<Local> = DateTime::from(modified);
    dt.format(TIME_FORMAT).to_string()
}
