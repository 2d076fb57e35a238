//! Configurable bounds applied when validating task fields.

use serde::{Deserialize, Serialize};

/// Length and count limits for task fields.
///
/// Lengths are measured in characters, not bytes.
///
/// # Examples
///
/// ```
/// use taskwright::task::domain::TaskLimits;
///
/// let limits = TaskLimits::default();
/// assert_eq!(limits.max_title_length, 200);
/// assert_eq!(limits.max_tags, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskLimits {
    /// Maximum title length.
    pub max_title_length: usize,
    /// Maximum description length.
    pub max_description_length: usize,
    /// Maximum number of tags on one task.
    pub max_tags: usize,
    /// Maximum length of a single tag.
    pub max_tag_length: usize,
}

impl TaskLimits {
    /// Default limits as a constant.
    pub const STANDARD: Self = Self {
        max_title_length: 200,
        max_description_length: 1000,
        max_tags: 10,
        max_tag_length: 50,
    };
}

impl Default for TaskLimits {
    fn default() -> Self {
        Self::STANDARD
    }
}
