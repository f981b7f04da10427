//! Formatting helpers for the per-file report lines.

use crate::constants::{KIB, PROGRESS_SPINNER_TEMPLATE};
use indicatif::{ProgressBar, ProgressStyle};

/// Size in whole KiB, e.g. `"146KB"`.
pub fn format_kib(bytes: u64) -> String {
    format!("{:.0}KB", bytes as f64 / KIB as f64)
}

/// Percentage of `original_size` saved (negative when the file grew).
pub fn calculate_savings(original_size: u64, new_size: u64) -> f64 {
    if original_size == 0 {
        return 0.0;
    }
    ((original_size as f64 - new_size as f64) / original_size as f64) * 100.0
}

/// Savings as shown in the report: `-41.3%` for a smaller file, `+2.0%` for a
/// larger one.
pub fn format_savings(original_size: u64, new_size: u64) -> String {
    let savings = calculate_savings(original_size, new_size);
    if savings >= 0.0 {
        format!("-{:.1}%", savings)
    } else {
        format!("+{:.1}%", savings.abs())
    }
}

/// Spinner shown while a file is being encoded. Hidden in quiet mode.
pub fn create_progress_spinner(message: String) -> ProgressBar {
    if crate::logger::is_quiet() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template(PROGRESS_SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kib() {
        assert_eq!(format_kib(0), "0KB");
        assert_eq!(format_kib(1024), "1KB");
        assert_eq!(format_kib(150 * 1024), "150KB");
        assert_eq!(format_kib(1024 * 1024), "1024KB");
    }

    #[test]
    fn test_calculate_savings() {
        assert_eq!(calculate_savings(1000, 800), 20.0);
        assert_eq!(calculate_savings(1000, 1200), -20.0);
        assert_eq!(calculate_savings(1000, 1000), 0.0);
        assert_eq!(calculate_savings(0, 500), 0.0);
    }

    #[test]
    fn test_format_savings() {
        assert_eq!(format_savings(1000, 800), "-20.0%");
        assert_eq!(format_savings(1000, 1200), "+20.0%");
        assert_eq!(format_savings(0, 10), "-0.0%");
    }
}
