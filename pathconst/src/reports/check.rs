//! Check command report data structures.

use std::path::PathBuf;

use pathconst_codegen::CheckStatus;

use super::output::{Output, Report};

/// Report data from comparing the output with a fresh generation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the generated file.
    pub output: PathBuf,
    /// Comparison outcome.
    pub status: CheckStatus,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.output.display();
        match self.status {
            CheckStatus::UpToDate => out.success(&format!("{} is up to date", path)),
            CheckStatus::Stale => out.warning(&format!(
                "{} is out of date, run 'pathconst generate'",
                path
            )),
            CheckStatus::Missing => out.warning(&format!(
                "{} does not exist, run 'pathconst generate'",
                path
            )),
        }
    }
}
