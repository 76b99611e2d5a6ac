//! Summary length budgets.
//!
//! A summary that will be translated must stay well under the translator's
//! 512-token input window, so it gets a smaller budget than one that is
//! returned as-is. The class is picked from the requested target language only.

use crate::core::models::{LengthBudget, SummaryLevel, TargetLanguage};

/// Where the summary ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationClass {
    /// Returned in the privileged language without further processing.
    Native,
    /// Fed into the translator.
    Translated,
}

impl DestinationClass {
    #[must_use]
    pub fn for_target(target: TargetLanguage) -> Self {
        if target.is_privileged() {
            DestinationClass::Native
        } else {
            DestinationClass::Translated
        }
    }
}

const fn budget(min_length: u32, max_length: u32) -> LengthBudget {
    LengthBudget {
        min_length,
        max_length,
    }
}

/// (destination, level) → budget.
const BUDGETS: [(DestinationClass, SummaryLevel, LengthBudget); 6] = [
    (DestinationClass::Native, SummaryLevel::Short, budget(100, 200)),
    (DestinationClass::Native, SummaryLevel::Medium, budget(200, 400)),
    (DestinationClass::Native, SummaryLevel::Long, budget(400, 800)),
    (DestinationClass::Translated, SummaryLevel::Short, budget(50, 120)),
    (DestinationClass::Translated, SummaryLevel::Medium, budget(120, 250)),
    (DestinationClass::Translated, SummaryLevel::Long, budget(250, 450)),
];

/// Looks up the budget for a destination class and level.
#[must_use]
pub fn length_budget(class: DestinationClass, level: SummaryLevel) -> Option<LengthBudget> {
    BUDGETS
        .iter()
        .find(|(c, l, _)| *c == class && *l == level)
        .map(|(_, _, b)| *b)
}
