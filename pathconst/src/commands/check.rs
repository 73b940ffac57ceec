use clap::Args;
use eyre::Result;
use pathconst_codegen::{CheckStatus, Generator};

use super::{UnwrapOrExit, inputs::InputArgs};
use crate::reports::{CheckReport, Report, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub inputs: InputArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let generator = Generator::new(self.inputs.load()?);
        let status = generator.check().unwrap_or_exit();

        CheckReport {
            output: generator.config().output.clone(),
            status,
        }
        .render(&mut TerminalOutput::new());

        if status != CheckStatus::UpToDate {
            std::process::exit(1);
        }
        Ok(())
    }
}
