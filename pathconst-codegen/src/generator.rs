//! Write coordination: validate, deduplicate, render, and update the output.

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, map::Entry};
use pathconst_core::{File, Overwrite, WriteResult, dedup_preserving_order};
use tracing::{debug, info};

use crate::{
    Error, Result, TargetName,
    emit::{Member, members, render},
};

/// Everything one generation run needs, fixed up front.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// File the unit is written to. Its parent directory must exist.
    pub output: PathBuf,
    /// Dotted target name, e.g. `Assets.Files`.
    pub type_name: String,
    /// Source paths in build order, duplicates allowed.
    pub sources: Vec<String>,
    /// Whether an up-to-date output is rewritten anyway.
    pub overwrite: Overwrite,
}

impl GeneratorConfig {
    pub fn new(
        output: impl Into<PathBuf>,
        type_name: impl Into<String>,
        sources: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            output: output.into(),
            type_name: type_name.into(),
            sources: sources.into_iter().map(Into::into).collect(),
            overwrite: Overwrite::default(),
        }
    }

    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// A rendered unit that hasn't been written.
#[derive(Debug, Clone)]
pub struct Preview {
    pub target: TargetName,
    pub members: Vec<Member>,
    /// How many repeated source paths were dropped.
    pub duplicates_removed: usize,
    pub content: String,
}

/// Outcome of [`Generator::generate`].
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub target: TargetName,
    pub members: Vec<Member>,
    pub duplicates_removed: usize,
    pub result: WriteResult,
}

/// Outcome of [`Generator::check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// The output holds exactly what would be generated.
    UpToDate,
    /// The output exists but differs.
    Stale,
    /// There is no output file yet.
    Missing,
}

/// Generates the path constants unit for one configuration.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Validate and render without touching the filesystem.
    pub fn preview(&self) -> Result<Preview> {
        let target = self.validate()?;

        let sources = dedup_preserving_order(self.config.sources.iter().map(String::as_str));
        let duplicates_removed = self.config.sources.len() - sources.len();
        debug!(
            sources = sources.len(),
            duplicates_removed, "deduplicated source paths"
        );

        let members = members(&sources);
        check_collisions(&members)?;
        check_type_clash(&members, &target)?;

        let content = render(&members, &target);
        Ok(Preview {
            target,
            members,
            duplicates_removed,
            content,
        })
    }

    /// Render the unit and write it unless the output is already current.
    pub fn generate(&self) -> Result<GenerateReport> {
        let Preview {
            target,
            members,
            duplicates_removed,
            content,
        } = self.preview()?;

        let output = &self.config.output;
        let result = File::new(output, content)
            .with_overwrite(self.config.overwrite)
            .write()
            .map_err(|e| Error::io(output, e))?;

        match result {
            WriteResult::Written => info!(
                output = %output.display(),
                members = members.len(),
                "wrote generated unit"
            ),
            WriteResult::Unchanged => {
                info!(output = %output.display(), "generated unit is up to date, skipping write")
            }
        }

        Ok(GenerateReport {
            output: output.clone(),
            target,
            members,
            duplicates_removed,
            result,
        })
    }

    /// Compare the output with what would be generated, without writing.
    pub fn check(&self) -> Result<CheckStatus> {
        let preview = self.preview()?;
        let output = &self.config.output;
        let file = File::new(output, preview.content);

        if !file.exists() {
            return Ok(CheckStatus::Missing);
        }
        let current = file.is_current().map_err(|e| Error::io(output, e))?;
        Ok(if current {
            CheckStatus::UpToDate
        } else {
            CheckStatus::Stale
        })
    }

    fn validate(&self) -> Result<TargetName> {
        if is_blank(&self.config.output) {
            return Err(Box::new(Error::MissingField {
                field: "output path",
            }));
        }
        if self.config.type_name.trim().is_empty() {
            return Err(Box::new(Error::MissingField { field: "type name" }));
        }

        let target = TargetName::parse(&self.config.type_name);
        if let Some(reason) = target.defect() {
            return Err(Box::new(Error::InvalidTypeName {
                name: self.config.type_name.clone(),
                reason,
            }));
        }
        Ok(target)
    }
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().to_string_lossy().trim().is_empty()
}

/// Fail on the first member name claimed by two different paths.
fn check_collisions(members: &[Member]) -> Result<()> {
    let mut seen: IndexMap<&str, &str> = IndexMap::with_capacity(members.len());
    for member in members {
        match seen.entry(member.name.as_str()) {
            Entry::Occupied(first) => {
                return Err(Box::new(Error::MemberCollision {
                    member: member.name.clone(),
                    first: first.get().to_string(),
                    second: member.value.clone(),
                }));
            }
            Entry::Vacant(slot) => {
                slot.insert(member.value.as_str());
            }
        }
    }
    Ok(())
}

/// Fail when a member would share its name with the enclosing class.
fn check_type_clash(members: &[Member], target: &TargetName) -> Result<()> {
    // `@` is only an escape; `@Files` and `Files` name the same thing.
    let type_name = target.type_name().trim_start_matches('@');
    match members
        .iter()
        .find(|m| m.name.trim_start_matches('@') == type_name)
    {
        Some(member) => Err(Box::new(Error::MemberNamedLikeType {
            member: member.name.clone(),
            path: member.value.clone(),
            type_name: target.type_name().to_string(),
        })),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        fs,
        time::{Duration, SystemTime},
    };

    use tempfile::TempDir;

    use super::*;
    use crate::ErrorKind;

    fn generator(output: impl Into<PathBuf>, type_name: &str, sources: &[&str]) -> Generator {
        Generator::new(GeneratorConfig::new(
            output,
            type_name,
            sources.iter().copied(),
        ))
    }

    #[test]
    fn test_missing_output_path() {
        let err = generator("", "Assets.Files", &["a.txt"])
            .generate()
            .unwrap_err();
        assert!(matches!(
            *err,
            Error::MissingField {
                field: "output path"
            }
        ));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_whitespace_output_path() {
        let err = generator("  ", "Assets.Files", &["a.txt"])
            .preview()
            .unwrap_err();
        assert!(matches!(
            *err,
            Error::MissingField {
                field: "output path"
            }
        ));
    }

    #[test]
    fn test_missing_type_name() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("Gen.cs");

        let err = generator(&output, "  ", &["a.txt"]).generate().unwrap_err();

        assert!(matches!(*err, Error::MissingField { field: "type name" }));
        assert!(!output.exists());
    }

    #[test]
    fn test_output_checked_before_type_name() {
        let err = generator("", "", &[]).preview().unwrap_err();
        assert!(matches!(
            *err,
            Error::MissingField {
                field: "output path"
            }
        ));
    }

    #[test]
    fn test_invalid_type_name() {
        let err = generator("Gen.cs", "Assets.", &[]).preview().unwrap_err();
        assert!(matches!(*err, Error::InvalidTypeName { .. }));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_preview_deduplicates() {
        let preview = generator("Gen.cs", "N.T", &["a.txt", "b.txt", "a.txt"])
            .preview()
            .unwrap();

        let values: Vec<_> = preview.members.iter().map(|m| m.value.as_str()).collect();
        assert_eq!(values, ["a.txt", "b.txt"]);
        assert_eq!(preview.duplicates_removed, 1);
    }

    #[test]
    fn test_type_name_must_be_identifier() {
        let err = generator("Gen.cs", "My-Assets.File s", &["a.txt"])
            .preview()
            .unwrap_err();
        assert!(matches!(*err, Error::InvalidTypeName { .. }));
    }

    #[test]
    fn test_member_named_like_type() {
        let err = generator("Gen.cs", "Assets.Files", &["icon.png", "Files"])
            .preview()
            .unwrap_err();

        match *err {
            Error::MemberNamedLikeType {
                ref member,
                ref path,
                ref type_name,
            } => {
                assert_eq!(member, "Files");
                assert_eq!(path, "Files");
                assert_eq!(type_name, "Files");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_member_named_like_escaped_type() {
        let err = generator("Gen.cs", "Assets.@class", &["class"])
            .preview()
            .unwrap_err();
        assert!(matches!(*err, Error::MemberNamedLikeType { .. }));
    }

    #[test]
    fn test_member_similar_to_type_is_allowed() {
        let preview = generator("Gen.cs", "Assets.Files", &["Files.txt", "files"])
            .preview()
            .unwrap();
        assert_eq!(preview.members.len(), 2);
    }

    #[test]
    fn test_member_collision() {
        let err = generator("Gen.cs", "N.T", &["a.txt", "a_txt"])
            .preview()
            .unwrap_err();

        match *err {
            Error::MemberCollision {
                ref member,
                ref first,
                ref second,
            } => {
                assert_eq!(member, "a_txt");
                assert_eq!(first, "a.txt");
                assert_eq!(second, "a_txt");
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_generate_end_to_end() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("Gen.cs");
        let generator = generator(
            &output,
            "Assets.Files",
            &["icon.png", "icon.png", "data/readme.txt"],
        );

        let first = generator.generate().unwrap();
        assert_eq!(first.result, WriteResult::Written);
        assert_eq!(first.duplicates_removed, 1);
        assert_eq!(first.target.namespace(), "Assets");
        assert_eq!(first.target.type_name(), "Files");

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("namespace Assets"));
        assert!(content.contains("public static class Files"));
        assert!(content.contains("public const string icon_png = \"icon.png\";"));
        assert!(content.contains("public const string data_readme_txt = \"data/readme.txt\";"));

        let old = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000);
        fs::File::options()
            .write(true)
            .open(&output)
            .unwrap()
            .set_modified(old)
            .unwrap();

        let second = generator.generate().unwrap();
        assert_eq!(second.result, WriteResult::Unchanged);
        assert_eq!(fs::metadata(&output).unwrap().modified().unwrap(), old);
        assert_eq!(fs::read_to_string(&output).unwrap(), content);
    }

    #[test]
    fn test_generate_force_rewrites() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("Gen.cs");
        let config = GeneratorConfig::new(&output, "N.T", ["a.txt"]);

        Generator::new(config.clone()).generate().unwrap();
        let report = Generator::new(config.with_overwrite(Overwrite::Always))
            .generate()
            .unwrap();

        assert_eq!(report.result, WriteResult::Written);
    }

    #[test]
    fn test_generate_replaces_stale_output() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("Gen.cs");
        fs::write(&output, "// old").unwrap();

        let report = generator(&output, "N.T", &["a.txt"]).generate().unwrap();

        assert_eq!(report.result, WriteResult::Written);
        assert_ne!(fs::read_to_string(&output).unwrap(), "// old");
    }

    #[test]
    fn test_generate_missing_directory_is_io_error() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("no-such-dir").join("Gen.cs");

        let err = generator(&output, "N.T", &["a.txt"]).generate().unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Io);
        match *err {
            Error::Io { ref path, ref source } => {
                assert_eq!(path, &output);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_check_statuses() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("Gen.cs");
        let generator = generator(&output, "N.T", &["a.txt"]);

        assert_eq!(generator.check().unwrap(), CheckStatus::Missing);

        generator.generate().unwrap();
        assert_eq!(generator.check().unwrap(), CheckStatus::UpToDate);

        fs::write(&output, "// edited").unwrap();
        assert_eq!(generator.check().unwrap(), CheckStatus::Stale);
        assert_eq!(fs::read_to_string(&output).unwrap(), "// edited");
    }
}
