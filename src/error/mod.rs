use thiserror::Error;

/// Failures raised by the strict `"Class::method"` parser.
///
/// Only the [`FromStr`](std::str::FromStr) surface reports these; the
/// annotation constructors are total and degrade malformed input to the
/// invalid sentinel instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetParseError {
    #[error("dependency target is empty")]
    Empty,

    #[error("dependency target `{0}` is missing the `::` separator")]
    MissingSeparator(String),

    #[error("dependency target `{0}` has an empty class or method name")]
    IncompleteTarget(String),
}
