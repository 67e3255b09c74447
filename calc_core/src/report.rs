//! # Text Report
//!
//! Plain-text summary of an estimate, offered to the user as a file named
//! `estructura_<unix millis>.txt`.
//!
//! ## Format
//!
//! ```text
//! REPORTE ESTRUCTURA METÁLICA
//!
//! 1. IPR 100x50 - 3m x2 = 57.9kg
//! 2. Ángulo 25x25x3 - 2m x5 = 11.2kg
//!
//! TOTAL: 69.1 kg
//! COSTO: $1,934.8
//! ```
//!
//! Saving writes to a temp file first and renames it into place, so a failed
//! save never leaves a truncated report behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::estimate::Estimate;
use crate::format::{format_currency, format_length, format_weight};

/// Attempts at finding a free file name before giving up
const MAX_NAME_ATTEMPTS: i64 = 1000;

/// A generated report, ready to be saved or downloaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Suggested artifact name (e.g., `estructura_1718000000000.txt`)
    pub file_name: String,

    /// UTF-8 report text, one `\n`-terminated line per row
    pub contents: String,

    /// When the report was generated
    pub created: DateTime<Utc>,
}

impl Report {
    /// Build the report for the estimate's current state.
    pub fn from_estimate(estimate: &Estimate) -> Self {
        Report::from_estimate_at(estimate, Utc::now())
    }

    /// Build the report with an explicit timestamp.
    pub fn from_estimate_at(estimate: &Estimate, created: DateTime<Utc>) -> Self {
        let settings = estimate.settings();
        let totals = estimate.totals();

        let mut lines = vec![settings.report_title.clone(), String::new()];
        lines.extend(estimate.elements().iter().enumerate().map(|(i, e)| {
            format!(
                "{}. {} {} - {}m x{} = {}kg",
                i + 1,
                e.profile_family(),
                e.size(),
                format_length(e.length_m()),
                e.quantity(),
                format_weight(e.weight_kg()),
            )
        }));
        lines.push(String::new());
        lines.push(format!("TOTAL: {} kg", format_weight(totals.total_weight_kg)));
        lines.push(format!(
            "COSTO: {}{}",
            settings.currency_symbol,
            format_currency(totals.total_cost)
        ));

        let mut contents = lines.join("\n");
        contents.push('\n');

        Report {
            file_name: file_name_at(&settings.report_file_prefix, created.timestamp_millis()),
            contents,
            created,
        }
    }

    /// Report rows without line terminators
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.contents.lines()
    }
}

/// `<prefix>_<millis>.txt`
pub fn file_name_at(prefix: &str, millis: i64) -> String {
    format!("{}_{}.txt", prefix, millis)
}

/// Save a report into `dir` and return the path written.
///
/// If a file with the report's name already exists, the timestamp suffix is
/// bumped until a free name is found.
pub fn save_report(report: &Report, dir: &Path) -> CalcResult<PathBuf> {
    let path = free_report_path(report, dir)?;
    write_atomic(&path, report.contents.as_bytes())?;
    tracing::info!(path = %path.display(), bytes = report.contents.len(), "report saved");
    Ok(path)
}

/// Write a report to an exact path (e.g., one picked in a save dialog).
pub fn save_report_as(report: &Report, path: &Path) -> CalcResult<()> {
    write_atomic(path, report.contents.as_bytes())?;
    tracing::info!(path = %path.display(), "report saved");
    Ok(())
}

fn free_report_path(report: &Report, dir: &Path) -> CalcResult<PathBuf> {
    let candidate = dir.join(&report.file_name);
    if !candidate.exists() {
        return Ok(candidate);
    }

    let (prefix, millis) = split_file_name(&report.file_name)
        .unwrap_or((report.file_name.trim_end_matches(".txt"), report.created.timestamp_millis()));

    (1..=MAX_NAME_ATTEMPTS)
        .map(|bump| dir.join(file_name_at(prefix, millis + bump)))
        .find(|p| !p.exists())
        .ok_or_else(|| {
            CalcError::file_error(
                "choose name",
                candidate.display().to_string(),
                "no free report file name",
            )
        })
}

/// Split `<prefix>_<millis>.txt` into its parts.
fn split_file_name(name: &str) -> Option<(&str, i64)> {
    let stem = name.strip_suffix(".txt")?;
    let (prefix, millis) = stem.rsplit_once('_')?;
    Some((prefix, millis.parse().ok()?))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> CalcResult<()> {
    let tmp_path = path.with_extension("txt.tmp");

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::ElementField;
    use chrono::TimeZone;
    use std::env::temp_dir;

    fn fixed_time() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_718_000_000_123).unwrap()
    }

    fn temp_report_dir(name: &str) -> PathBuf {
        let dir = temp_dir().join(format!("structcalc_test_{}_{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_single_element_report() {
        let mut estimate = Estimate::new();
        estimate.add_element();

        let report = Report::from_estimate_at(&estimate, fixed_time());
        assert_eq!(
            report.contents,
            "REPORTE ESTRUCTURA METÁLICA\n\n1. IPR 100x50 - 1m x1 = 9.7kg\n\nTOTAL: 9.7 kg\nCOSTO: $270.2\n"
        );
        assert_eq!(report.file_name, "estructura_1718000000123.txt");
    }

    #[test]
    fn test_multi_element_report() {
        let mut estimate = Estimate::new();
        let a = estimate.add_element();
        estimate.update_element(a, ElementField::Length(3.0));
        estimate.update_element(a, ElementField::Quantity(2));

        let b = estimate.add_element();
        estimate.change_profile_family(b, "Ángulo");
        estimate.update_element(b, ElementField::Length(2.0));
        estimate.update_element(b, ElementField::Quantity(5));

        let report = Report::from_estimate_at(&estimate, fixed_time());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[0], "REPORTE ESTRUCTURA METÁLICA");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "1. IPR 100x50 - 3m x2 = 57.9kg");
        assert_eq!(lines[3], "2. Ángulo 25x25x3 - 2m x5 = 11.2kg");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "TOTAL: 69.1 kg");
        assert_eq!(lines[6], "COSTO: $1,934.8");
    }

    #[test]
    fn test_empty_report() {
        let estimate = Estimate::new();
        let report = Report::from_estimate_at(&estimate, fixed_time());
        assert_eq!(report.contents, "REPORTE ESTRUCTURA METÁLICA\n\n\nTOTAL: 0.0 kg\nCOSTO: $0\n");
    }

    #[test]
    fn test_fractional_length_in_report() {
        let mut estimate = Estimate::new();
        let id = estimate.add_element();
        estimate.update_element(id, ElementField::Length(2.5));
        let report = Report::from_estimate_at(&estimate, fixed_time());
        assert!(report.contents.contains("1. IPR 100x50 - 2.5m x1 = 24.1kg\n"));
    }

    #[test]
    fn test_split_file_name() {
        assert_eq!(split_file_name("estructura_1718000000123.txt"), Some(("estructura", 1_718_000_000_123)));
        assert_eq!(split_file_name("estructura.txt"), None);
        assert_eq!(split_file_name("estructura_abc.txt"), None);
    }

    #[test]
    fn test_save_report_avoids_collisions() {
        let dir = temp_report_dir("collision");
        let mut estimate = Estimate::new();
        estimate.add_element();
        let report = Report::from_estimate_at(&estimate, fixed_time());

        let first = save_report(&report, &dir).unwrap();
        let second = save_report(&report, &dir).unwrap();
        assert_ne!(first, second);
        assert_eq!(first.file_name().unwrap(), "estructura_1718000000123.txt");
        assert_eq!(second.file_name().unwrap(), "estructura_1718000000124.txt");

        let written = fs::read_to_string(&first).unwrap();
        assert_eq!(written, report.contents);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_report_missing_dir() {
        let dir = temp_dir().join("structcalc_test_missing").join("nested");
        let report = Report::from_estimate_at(&Estimate::new(), fixed_time());
        let err = save_report(&report, &dir).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
