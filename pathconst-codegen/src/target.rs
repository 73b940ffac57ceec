//! Dotted target names (`Namespace.Type`).

use std::fmt;

use crate::naming::is_reserved;

/// Namespace used when the target name has no dot.
pub const DEFAULT_NAMESPACE: &str = "GeneratedPaths";

/// A target name split into its namespace and type parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetName {
    namespace: Option<String>,
    type_name: String,
}

impl TargetName {
    /// Split on the last `.`; everything before it is the namespace.
    ///
    /// ```
    /// use pathconst_codegen::TargetName;
    ///
    /// let target = TargetName::parse("A.B.Type");
    /// assert_eq!(target.namespace(), "A.B");
    /// assert_eq!(target.type_name(), "Type");
    /// ```
    pub fn parse(name: &str) -> Self {
        match name.rsplit_once('.') {
            Some((namespace, type_name)) => Self {
                namespace: Some(namespace.to_string()),
                type_name: type_name.to_string(),
            },
            None => Self {
                namespace: None,
                type_name: name.to_string(),
            },
        }
    }

    /// The namespace, falling back to [`DEFAULT_NAMESPACE`].
    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or(DEFAULT_NAMESPACE)
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Describe why this name can't produce a declaration, if it can't.
    ///
    /// Every dotted segment must be a C# identifier; keywords need `@`.
    pub(crate) fn defect(&self) -> Option<String> {
        if self.type_name.is_empty() {
            return Some("type name after the last '.' is empty".to_string());
        }
        let namespace = self.namespace.as_deref().into_iter().flat_map(|ns| ns.split('.'));
        for segment in namespace.chain([self.type_name.as_str()]) {
            if segment.is_empty() {
                return Some("namespace contains an empty segment".to_string());
            }
            if !is_identifier(segment) {
                return Some(format!("'{}' is not a valid C# identifier", segment));
            }
        }
        None
    }
}

fn is_identifier(segment: &str) -> bool {
    let (escaped, name) = match segment.strip_prefix('@') {
        Some(name) => (true, name),
        None => (false, segment),
    };
    let mut chars = name.chars();
    let starts_well = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    starts_well
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && (escaped || !is_reserved(name))
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace(), self.type_name)
    }
}
