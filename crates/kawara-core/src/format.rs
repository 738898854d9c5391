//! Human-readable file sizes for the upload list.

/// Format a byte count the way the upload list displays it: plain
/// bytes under 1024, kibibytes with one decimal under 1 MiB, else
/// mebibytes with one decimal.
///
/// The unit labels are the colloquial "KB"/"MB" even though the
/// divisor is 1024, matching the rest of the site.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)] // sizes are capped at 10 MiB
    let b = bytes as f64;
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", b / 1024.0)
    } else {
        format!("{:.1} MB", b / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_below_1024_are_plain() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(999), "999 B");
        assert_eq!(format_file_size(1023), "1023 B");
    }

    #[test]
    fn kibibyte_range_has_one_decimal() {
        assert_eq!(format_file_size(1024), "1.0 KB");
        assert_eq!(format_file_size(2048), "2.0 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
    }

    #[test]
    fn mebibyte_range_has_one_decimal() {
        assert_eq!(format_file_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_file_size(5_242_880), "5.0 MB");
    }

    #[test]
    fn boundary_just_under_one_mebibyte_stays_in_kb() {
        // 1_048_575 / 1024 rounds up to 1024.0 but the unit is still KB.
        assert_eq!(format_file_size(1_048_575), "1024.0 KB");
    }
}
