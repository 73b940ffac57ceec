//! Generate command report data structures.

use std::path::PathBuf;

use pathconst_codegen::{GenerateReport, Preview, WriteResult};

use super::output::{Output, Report};

/// Summary of a generation that went to disk.
#[derive(Debug)]
pub struct GenerateSummary {
    pub report: GenerateReport,
}

impl Report for GenerateSummary {
    fn render(&self, out: &mut dyn Output) {
        let report = &self.report;
        out.key_value("Type", &report.target.to_string());
        out.key_value("Members", &report.members.len().to_string());
        if report.duplicates_removed > 0 {
            out.key_value(
                "Duplicates removed",
                &report.duplicates_removed.to_string(),
            );
        }

        let path = report.output.display();
        match report.result {
            WriteResult::Written => out.success(&format!("Wrote {}", path)),
            WriteResult::Unchanged => out.success(&format!("{} is up to date", path)),
        }
    }
}

/// Dry-run output: the unit that would be written.
#[derive(Debug)]
pub struct PreviewReport {
    pub output: PathBuf,
    pub preview: Preview,
}

impl Report for PreviewReport {
    fn render(&self, out: &mut dyn Output) {
        out.divider(&self.output.display().to_string());
        out.preformatted(self.preview.content.trim_end());
        out.divider("Summary");
        out.preformatted(&format!(
            "{} members would be generated",
            self.preview.members.len()
        ));
    }
}
