use clap::Args;
use eyre::Result;
use pathconst_codegen::{Generator, Overwrite};

use super::{UnwrapOrExit, inputs::InputArgs};
use crate::reports::{GenerateSummary, PreviewReport, Report, TerminalOutput};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Print the generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write the output even if it is already up to date
    #[arg(long)]
    pub force: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut config = self.inputs.load()?;
        if self.force {
            config.overwrite = Overwrite::Always;
        }
        let generator = Generator::new(config);
        let mut out = TerminalOutput::new();

        if self.dry_run {
            let preview = generator.preview().unwrap_or_exit();
            PreviewReport {
                output: generator.config().output.clone(),
                preview,
            }
            .render(&mut out);
        } else {
            let report = generator.generate().unwrap_or_exit();
            GenerateSummary { report }.render(&mut out);
        }

        Ok(())
    }
}
