//! Per-conversion configuration.

/// Conventional location of the shared string pool inside the archive.
pub const DEFAULT_SHARED_STRINGS: &str = "xl/sharedStrings.xml";

/// Options for one worksheet conversion, passed explicitly into every
/// pipeline call.
///
/// There is no process-wide configuration and nothing is read from disk
/// to build this value. The worksheet member path is required up front:
/// workbooks can hold many sheets and this library converts exactly one
/// per invocation, so guessing a default here would silently pick the
/// wrong sheet. Callers that want the conventional first sheet say so
/// themselves (see the CLI).
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Archive member path of the worksheet to convert,
    /// e.g. `xl/worksheets/sheet1.xml`.
    pub worksheet: String,

    /// Archive member path of the shared string pool. The member is
    /// optional in the archive; this only controls where to look.
    pub shared_strings: String,
}

impl ConvertOptions {
    /// Create options for converting the worksheet at the given member path.
    pub fn for_sheet(worksheet: impl Into<String>) -> Self {
        Self {
            worksheet: worksheet.into(),
            shared_strings: DEFAULT_SHARED_STRINGS.to_string(),
        }
    }

    /// Override where the shared string pool is looked up.
    pub fn with_shared_strings(mut self, member: impl Into<String>) -> Self {
        self.shared_strings = member.into();
        self
    }
}
