//! Individual configured values

#[derive(Debug, Clone, PartialEq, Eq)]
/// A setting we read from a config file
pub struct Setting {
    /// The value, trimmed but otherwise exactly as written
    pub value: String,
    /// Line number (1-based) of the occurrence that set this value
    pub line_number: usize,
}
