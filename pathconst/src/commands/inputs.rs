use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use clap::Args;
use eyre::{Context, Result};
use pathconst_codegen::GeneratorConfig;
use pathconst_manifest::{MANIFEST_FILE, Manifest};
use tracing::debug;

use super::UnwrapOrExit;

/// Where the output, type name and source list come from.
#[derive(Args)]
pub struct InputArgs {
    /// Path to pathconst.toml (defaults to ./pathconst.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File to write the generated code to
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Dotted name of the generated class, e.g. Assets.Files
    #[arg(short, long)]
    pub type_name: Option<String>,

    /// File listing one source path per line ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    pub sources_file: Option<PathBuf>,

    /// Source file paths, in order
    pub sources: Vec<String>,
}

impl InputArgs {
    /// Merge the manifest with the command line into a generator config.
    ///
    /// Sources are concatenated: manifest, then `--sources-file`, then
    /// positional arguments. `--output` and `--type-name` override the
    /// manifest. Missing values are left empty for the generator to reject.
    pub fn load(&self) -> Result<GeneratorConfig> {
        let Manifest {
            output,
            type_name,
            mut sources,
        } = self.manifest();

        if let Some(path) = &self.sources_file {
            sources.extend(read_source_list(path)?);
        }
        sources.extend(self.sources.iter().cloned());
        debug!(sources = sources.len(), "collected source paths");

        Ok(GeneratorConfig {
            output: self.output.clone().or(output).unwrap_or_default(),
            type_name: self.type_name.clone().or(type_name).unwrap_or_default(),
            sources,
            ..GeneratorConfig::default()
        })
    }

    fn manifest(&self) -> Manifest {
        match &self.config {
            Some(path) => Manifest::from_file(path).unwrap_or_exit(),
            None if Path::new(MANIFEST_FILE).is_file() => {
                Manifest::from_file(MANIFEST_FILE).unwrap_or_exit()
            }
            None => Manifest::default(),
        }
    }
}

fn read_source_list(path: &Path) -> Result<Vec<String>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("Failed to read source list from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read source list '{}'", path.display()))?
    };
    Ok(parse_source_list(&content))
}

/// One path per line; blank lines are skipped and CRLF endings tolerated.
fn parse_source_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
