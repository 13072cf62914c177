use serde::{Deserialize, Serialize};

/// Danger level above which a reading counts as dangerous.
pub const DANGER_THRESHOLD: i32 = 70;

/// Danger level above which a reading counts as a warning.
pub const WARNING_THRESHOLD: i32 = 40;

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Emergency flag raised, regardless of level
    Emergency,
    /// Level above 70
    Danger,
    /// Level above 40
    Warning,
    /// Everything else
    Normal,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Emergency => "EMERGENCY",
            Category::Danger => "DANGER",
            Category::Warning => "WARNING",
            Category::Normal => "NORMAL",
        }
    }
}

/// Maps a danger level and emergency flag to a status category.
///
/// Thresholds are strict, so 40 and 70 fall to the lower tier. The result is
/// never stored; callers re-evaluate on every read.
pub fn classify(danger_level: i32, emergency: bool) -> Category {
    if emergency {
        Category::Emergency
    } else if danger_level > DANGER_THRESHOLD {
        Category::Danger
    } else if danger_level > WARNING_THRESHOLD {
        Category::Warning
    } else {
        Category::Normal
    }
}
