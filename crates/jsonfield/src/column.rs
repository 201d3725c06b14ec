// Physical column type selection

/// Declared SQL type for a JSON column.
///
/// `Text` is the portable choice; `Json` matches backends with a native JSON
/// type. Either way the stored bytes are the canonical text encoding, so
/// introspection of a JSON column must report one of these two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    Text,
    Json,
}

impl DeclaredType {
    /// Spelling used in DDL.
    pub fn as_sql(&self) -> &'static str {
        match self {
            DeclaredType::Text => "TEXT",
            DeclaredType::Json => "JSON",
        }
    }

    /// Parse a type name reported by schema introspection (e.g. SQLite's
    /// `PRAGMA table_info`). Case-insensitive; `None` for anything that is
    /// not a valid physical type for a JSON column.
    pub fn from_declared(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "TEXT" => Some(DeclaredType::Text),
            "JSON" => Some(DeclaredType::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_sql())
    }
}
