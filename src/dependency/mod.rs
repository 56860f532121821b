//! The execution-order dependency model.
//!
//! A test annotated with `@depends ClassName::methodName` must run after the
//! test it names. This module holds the value type for one such reference and
//! the list algebra a scheduler needs to assemble and compare dependency
//! lists.

mod ops;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::TargetParseError;

/// Separator between class and method in a canonical target string.
pub const TARGET_SEPARATOR: &str = "::";

/// Method-name sentinel marking a whole-class target.
const CLASS_SENTINEL: &str = "class";

/// Annotation token requesting a deep copy of the dependency's fixture.
const DEEP_CLONE_OPTION: &str = "clone";

/// Annotation token requesting a shallow copy of the dependency's fixture.
const SHALLOW_CLONE_OPTION: &str = "shallowClone";

/// A reference to a test that another test depends on: either a whole test
/// class or one method within it.
///
/// Immutable after construction. Identity for deduplication and diffing is
/// the canonical `"Class::method"` string returned by [`target`], compared
/// exactly and case-sensitively; the clone flags never participate in that
/// identity.
///
/// The default value is the invalid sentinel (both names empty), which is
/// what every malformed parse degrades to. Callers filter those out with
/// [`filter_invalid`] before handing lists to the scheduler.
///
/// [`target`]: DependencyTarget::target
/// [`filter_invalid`]: DependencyTarget::filter_invalid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyTarget {
    class_name: String,
    method_name: String,
    deep_clone: bool,
    shallow_clone: bool,
}

impl DependencyTarget {
    /// Parse the text of a `@depends` annotation declared inside
    /// `declaring_class_name`.
    ///
    /// The text is at most two space-separated parts: an optional clone
    /// option (`clone` or `shallowClone`; any other token is ignored) and the
    /// target. An unqualified target is a method of the declaring class and
    /// gets prefixed with `"{declaring_class_name}::"`.
    ///
    /// This is a total function: empty or malformed text yields the invalid
    /// sentinel, never an error.
    pub fn from_annotation(declaring_class_name: &str, annotation_text: &str) -> Self {
        let text = annotation_text.trim();

        let (clone_option, raw_target) = match text.split_once(' ') {
            Some((option, rest)) => (option, rest),
            None => ("", text),
        };

        if !clone_option.is_empty()
            && clone_option != DEEP_CLONE_OPTION
            && clone_option != SHALLOW_CLONE_OPTION
        {
            debug!("ignoring unrecognized clone option `{clone_option}` in `@depends {text}`");
        }

        let target = if !raw_target.is_empty() && !raw_target.contains(TARGET_SEPARATOR) {
            format!("{declaring_class_name}{TARGET_SEPARATOR}{raw_target}")
        } else {
            raw_target.to_string()
        };

        let dependency = Self::new(
            &target,
            None,
            clone_option == DEEP_CLONE_OPTION,
            clone_option == SHALLOW_CLONE_OPTION,
        );

        trace!(dependency = %dependency, valid = dependency.is_valid(), "parsed depends annotation");

        dependency
    }

    /// Build a dependency from an explicit class-or-target string.
    ///
    /// An empty `class_or_target` yields the invalid sentinel with both clone
    /// flags unset. A `class_or_target` containing `::` is split on the first
    /// occurrence and the explicit `method_name` argument is discarded.
    /// Otherwise `method_name` is used when non-empty, else the target refers
    /// to the whole class.
    ///
    /// Both clone flags may be set at once here; only the scheduler decides
    /// whether that combination is meaningful.
    pub fn new(
        class_or_target: &str,
        method_name: Option<&str>,
        deep_clone: bool,
        shallow_clone: bool,
    ) -> Self {
        if class_or_target.is_empty() {
            return Self::invalid();
        }

        let (class_name, method_name) = match class_or_target.split_once(TARGET_SEPARATOR) {
            // A qualified target carries its own method name.
            Some((class, method)) => (class.to_string(), method.to_string()),
            None => (
                class_or_target.to_string(),
                match method_name {
                    Some(method) if !method.is_empty() => method.to_string(),
                    _ => CLASS_SENTINEL.to_string(),
                },
            ),
        };

        Self {
            class_name,
            method_name,
            deep_clone,
            shallow_clone,
        }
    }

    /// The invalid/empty sentinel: no class, no method, no clone flags.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// A dependency on a whole test class, canonically `"{class_name}::class"`.
    pub fn for_class(class_name: &str) -> Self {
        Self::new(class_name, None, false, false)
    }

    /// Whether both the class and method name are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.class_name.is_empty() && !self.method_name.is_empty()
    }

    /// Whether the dependency's fixture should be passed on as a deep copy.
    pub fn deep_clone(&self) -> bool {
        self.deep_clone
    }

    /// Whether the dependency's fixture should be passed on as a shallow copy.
    pub fn shallow_clone(&self) -> bool {
        self.shallow_clone
    }

    /// Whether this target names a whole class rather than one method.
    pub fn target_is_class(&self) -> bool {
        self.method_name == CLASS_SENTINEL
    }

    /// The canonical `"Class::method"` string, or empty when invalid.
    ///
    /// This exact string is the identity used by [`merge_unique`] and
    /// [`diff`]; downstream ordering logic matches on it verbatim.
    ///
    /// [`merge_unique`]: DependencyTarget::merge_unique
    /// [`diff`]: DependencyTarget::diff
    pub fn target(&self) -> String {
        if self.is_valid() {
            format!(
                "{}{TARGET_SEPARATOR}{}",
                self.class_name, self.method_name
            )
        } else {
            String::new()
        }
    }

    /// The class-name half of the target.
    pub fn target_class_name(&self) -> &str {
        &self.class_name
    }
}

impl fmt::Display for DependencyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.target())
    }
}

/// Strict parsing for callers that already hold a fully-qualified
/// `"Class::method"` string and want malformed input reported instead of
/// degraded to the invalid sentinel. Unqualified names are rejected since no
/// declaring class is available to qualify them; use
/// [`DependencyTarget::from_annotation`] for those.
impl FromStr for DependencyTarget {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TargetParseError::Empty);
        }

        let (class, method) = s
            .split_once(TARGET_SEPARATOR)
            .ok_or_else(|| TargetParseError::MissingSeparator(s.to_string()))?;

        if class.is_empty() || method.is_empty() {
            return Err(TargetParseError::IncompleteTarget(s.to_string()));
        }

        Ok(Self::new(s, None, false, false))
    }
}
