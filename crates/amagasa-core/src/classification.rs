//! Sky classification types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Sky condition reported by a weather source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumIter, EnumString)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Clear or mostly clear sky.
    Fair,
    /// Cloud cover without precipitation.
    Overcast,
    /// Rain, snow, or anything else falling.
    Precipitating,
}

impl Classification {
    /// All classifications, in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        use strum::IntoEnumIterator;
        Self::iter()
    }

    /// Does this condition call for carrying an umbrella?
    ///
    /// Written as an exhaustive match on purpose: adding a classification
    /// must not compile until this mapping names it.
    pub fn requires_umbrella(&self) -> bool {
        match self {
            Self::Fair => false,
            Self::Overcast => false,
            Self::Precipitating => true,
        }
    }
}

impl Default for Classification {
    /// Fair, matching what the placeholder station reports.
    fn default() -> Self {
        Self::Fair
    }
}
