//! Export filename helpers.

use chrono::{Local, NaiveDateTime};
use std::fmt::Write;

use crate::ports::{ExportError, ExportFormat};

const FORBIDDEN_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Makes a user-supplied name safe to use as a filename.
///
/// Strips `<>:"/\|?*`, turns spaces into underscores, collapses runs of
/// underscores and trims them from both ends.
pub fn sanitize_filename(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    for c in name.chars().filter(|c| !FORBIDDEN_CHARS.contains(c)) {
        let c = if c == ' ' { '_' } else { c };
        if c == '_' && sanitized.ends_with('_') {
            continue;
        }
        sanitized.push(c);
    }
    sanitized.trim_matches('_').to_string()
}

/// Default-name prefix for a sensitivity export of one criterion.
///
/// `"Build Cost"` gives `sensitivity_Build_Cost_`. A criterion that sanitizes
/// to nothing gives `sensitivity_`.
pub fn sensitivity_prefix(criterion: &str) -> String {
    let criterion = sanitize_filename(criterion);
    if criterion.is_empty() {
        String::from("sensitivity_")
    } else {
        format!("sensitivity_{}_", criterion)
    }
}

/// Builds `<prefix><timestamp>.<ext>` for the current local time.
pub fn default_filename(
    prefix: &str,
    date_format: &str,
    format: ExportFormat,
) -> Result<String, ExportError> {
    timestamped_filename(prefix, date_format, &Local::now().naive_local(), format)
}

/// Builds `<prefix><timestamp>.<ext>` for a given time.
///
/// # Errors
///
/// `EncodingFailed` if `date_format` is not a valid `chrono` format string.
pub fn timestamped_filename(
    prefix: &str,
    date_format: &str,
    at: &NaiveDateTime,
    format: ExportFormat,
) -> Result<String, ExportError> {
    let mut filename = String::from(prefix);
    write!(filename, "{}", at.format(date_format)).map_err(|_| {
        ExportError::EncodingFailed(format!("invalid date format: {}", date_format))
    })?;
    write!(filename, ".{}", format.extension())
        .map_err(|e| ExportError::EncodingFailed(e.to_string()))?;
    Ok(filename)
}

/// Picks the filename for an export.
///
/// A requested name is sanitized and gets the extension appended when missing.
/// No name, or one that sanitizes to nothing, falls back to a timestamped name.
pub fn resolve_filename(
    requested: Option<&str>,
    prefix: &str,
    date_format: &str,
    format: ExportFormat,
) -> Result<String, ExportError> {
    let sanitized = requested.map(sanitize_filename).unwrap_or_default();
    if sanitized.is_empty() {
        return default_filename(prefix, date_format, format);
    }

    let suffix = format!(".{}", format.extension());
    if sanitized.ends_with(&suffix) {
        Ok(sanitized)
    } else {
        Ok(sanitized + &suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 7)
            .unwrap()
    }

    #[test]
    fn sanitize_strips_forbidden_characters() {
        assert_eq!(sanitize_filename("a<b>c:d\"e/f\\g|h?i*j"), "abcdefghij");
    }

    #[test]
    fn sanitize_replaces_and_collapses_underscores() {
        assert_eq!(sanitize_filename("  my   results__final "), "my_results_final");
        assert_eq!(sanitize_filename("_a_ / _b_"), "a_b");
    }

    #[test]
    fn sanitize_can_produce_empty_name() {
        assert_eq!(sanitize_filename(" ?* "), "");
    }

    #[test]
    fn timestamped_filename_uses_prefix_and_format() {
        let name = timestamped_filename(
            "saw_results_",
            "%Y%m%d_%H%M%S",
            &fixed_time(),
            ExportFormat::Csv,
        )
        .unwrap();
        assert_eq!(name, "saw_results_20240309_140507.csv");
    }

    #[test]
    fn sensitivity_prefix_embeds_sanitized_criterion() {
        assert_eq!(sensitivity_prefix("Build Cost"), "sensitivity_Build_Cost_");
        assert_eq!(sensitivity_prefix("Price/Unit?"), "sensitivity_PriceUnit_");
        assert_eq!(sensitivity_prefix(" ** "), "sensitivity_");
    }

    #[test]
    fn sensitivity_default_name_carries_criterion_and_timestamp() {
        let name = timestamped_filename(
            &sensitivity_prefix("Build Cost"),
            "%Y%m%d_%H%M%S",
            &fixed_time(),
            ExportFormat::Csv,
        )
        .unwrap();
        assert_eq!(name, "sensitivity_Build_Cost_20240309_140507.csv");

        let fallback = resolve_filename(
            None,
            &sensitivity_prefix("Build Cost"),
            "%Y",
            ExportFormat::Csv,
        )
        .unwrap();
        assert!(fallback.starts_with("sensitivity_Build_Cost_"));
    }

    #[test]
    fn timestamped_filename_rejects_bad_format() {
        let result = timestamped_filename("x_", "%Y%", &fixed_time(), ExportFormat::Json);
        assert!(matches!(result, Err(ExportError::EncodingFailed(_))));
    }

    #[test]
    fn resolve_appends_extension_once() {
        let name = resolve_filename(Some("my run"), "p_", "%Y", ExportFormat::Csv).unwrap();
        assert_eq!(name, "my_run.csv");
        let name = resolve_filename(Some("my run.csv"), "p_", "%Y", ExportFormat::Csv).unwrap();
        assert_eq!(name, "my_run.csv");
    }

    #[test]
    fn resolve_falls_back_to_timestamp() {
        let name = resolve_filename(Some("???"), "p_", "%Y", ExportFormat::Json).unwrap();
        assert!(name.starts_with("p_"));
        assert!(name.ends_with(".json"));
        assert!(resolve_filename(None, "p_", "%Y", ExportFormat::Csv)
            .unwrap()
            .ends_with(".csv"));
    }
}
