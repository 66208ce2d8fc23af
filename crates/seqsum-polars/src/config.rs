//! Configuration for marshaling columns into summation input

/// How null entries in a column are handled before summation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullPolicy {
    /// Nulls become NaN, so any null makes the sum NaN
    Propagate,

    /// Nulls are dropped; remaining values keep their order
    Skip,

    /// A column holding nulls is an error
    Reject,
}

impl NullPolicy {
    /// Get the name of this policy
    pub fn name(&self) -> &'static str {
        match self {
            Self::Propagate => "propagate",
            Self::Skip => "skip",
            Self::Reject => "reject",
        }
    }
}

impl Default for NullPolicy {
    fn default() -> Self {
        Self::Propagate
    }
}

/// Options for column summation
#[derive(Debug, Clone, PartialEq)]
pub struct SumConfig {
    /// Null handling
    pub null_policy: NullPolicy,

    /// Appended to each input column name to name the output column
    pub suffix: String,
}

impl SumConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_null_policy(mut self, null_policy: NullPolicy) -> Self {
        self.null_policy = null_policy;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl Default for SumConfig {
    fn default() -> Self {
        Self {
            null_policy: NullPolicy::default(),
            suffix: "_sum".to_string(),
        }
    }
}
