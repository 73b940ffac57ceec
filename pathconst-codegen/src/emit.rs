//! Rendering of the generated C# unit.

use crate::{
    TargetName,
    builder::CodeBuilder,
    naming::{escape_string_literal, member_name},
};

/// Header written at the top of every generated unit.
pub const HEADER: [&str; 2] = ["<auto-generated />", "Generated code, do not edit."];

/// One constant in the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// C# member name derived from the path.
    pub name: String,
    /// The original path, unescaped.
    pub value: String,
}

impl Member {
    pub fn from_path(path: &str) -> Self {
        Self {
            name: member_name(path),
            value: path.to_string(),
        }
    }

    /// The declaration line, without indentation.
    pub fn declaration(&self) -> String {
        format!(
            "public const string {} = \"{}\";",
            self.name,
            escape_string_literal(&self.value)
        )
    }
}

/// Build one member per path, in order.
pub fn members<S: AsRef<str>>(paths: &[S]) -> Vec<Member> {
    paths
        .iter()
        .map(|path| Member::from_path(path.as_ref()))
        .collect()
}

/// Render the full unit for `paths` under the dotted `target_name`.
///
/// Never fails; duplicate member names are emitted as is.
///
/// ```
/// let unit = pathconst_codegen::emit(&["icon.png"], "Assets.Files");
/// assert!(unit.contains("namespace Assets"));
/// assert!(unit.contains("public const string icon_png = \"icon.png\";"));
/// ```
pub fn emit<S: AsRef<str>>(paths: &[S], target_name: &str) -> String {
    render(&members(paths), &TargetName::parse(target_name))
}

/// Render already-derived members into a unit.
pub fn render(members: &[Member], target: &TargetName) -> String {
    CodeBuilder::csharp()
        .each(HEADER, |b, line| b.comment(line))
        .braced(&format!("namespace {}", target.namespace()), |b| {
            b.braced(
                &format!("public static class {}", target.type_name()),
                |b| b.each(members, |b, member| b.line(&member.declaration())),
            )
        })
        .build()
}
