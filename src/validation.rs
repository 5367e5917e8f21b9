//! Icon file validation.
//!
//! Provides [`IconFile::validate`](crate::IconFile::validate) which inspects
//! an opened icon and returns a [`ValidationReport`] describing how it will
//! be reconciled and anything that looks off.
//!
//! # Example
//!
//! ```no_run
//! use icoview::IconFile;
//!
//! let icon = IconFile::open("app.ico")?;
//! let report = icon.validate();
//! if report.is_valid() {
//!     println!("Icon is valid");
//! } else {
//!     for error in &report.errors {
//!         println!("Error: {error}");
//!     }
//! }
//! # Ok::<(), icoview::IconError>(())
//! ```

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{icon_file::IconFile, size::IconSize};

/// Findings about one opened icon, grouped by severity.
///
/// Only files that [`IconFile::open`](crate::IconFile::open) accepted are
/// validated, so every report describes an icon that reconciles.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// How the directory and the decoded frames line up.
    pub info: Vec<String>,
    /// Sizes that will be synthesized, upscaled, or were declared twice.
    pub warnings: Vec<String>,
    /// Findings that leave the icon set with no entries to show.
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// `true` when the icon set will have at least one entry.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of findings at every severity.
    pub fn issue_count(&self) -> usize {
        self.info.len() + self.warnings.len() + self.errors.len()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let levels = [
            ("INFO", &self.info),
            ("WARN", &self.warnings),
            ("ERROR", &self.errors),
        ];
        for (level, lines) in levels {
            for line in lines {
                writeln!(f, "[{level}] {line}")?;
            }
        }
        if self.issue_count() == 0 {
            writeln!(f, "No issues found.")?;
        }
        Ok(())
    }
}

fn join_sizes(sizes: &[IconSize]) -> String {
    sizes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check how an opened icon's directory and decoded frames line up.
pub(crate) fn validate_icon(icon: &IconFile) -> ValidationReport {
    let mut report = ValidationReport::default();
    let metadata = icon.metadata();

    // ── Directory ──────────────────────────────────────────────────
    if !metadata.directory_read {
        report.warnings.push(
            "Icon directory could not be read; using the top-level image only".to_string(),
        );
    } else if metadata.declared_sizes.is_empty() {
        report
            .errors
            .push("Icon directory declares no entries; nothing to show".to_string());
    } else {
        report.info.push(format!(
            "Declared: {} size(s) ({})",
            metadata.declared_sizes.len(),
            join_sizes(&metadata.declared_sizes),
        ));
    }

    if !metadata.duplicate_sizes.is_empty() {
        report.warnings.push(format!(
            "Duplicate entries ignored (first kept): {}",
            join_sizes(&metadata.duplicate_sizes),
        ));
    }

    // ── Decoded frames ─────────────────────────────────────────────
    let Some(largest) = metadata.largest else {
        return report;
    };

    report.info.push(format!(
        "Decoded: {} frame(s) ({})",
        metadata.decoded_sizes.len(),
        join_sizes(&metadata.decoded_sizes),
    ));
    report
        .info
        .push(format!("Synthesis source: {largest}"));

    // ── Synthesis ──────────────────────────────────────────────────
    for size in metadata.missing_sizes() {
        report
            .warnings
            .push(format!("{size} is declared but not decodable; synthesized from {largest}"));
        if size.width > largest.width || size.height > largest.height {
            report
                .warnings
                .push(format!("{size} is upscaled from the smaller {largest} source"));
        }
    }

    report
}
