//! Preset Filters
//!
//! Preset filters are named server-side combinators covering conditions that
//! cannot be expressed through the other parameters, for example a union of
//! "type is X" and "program is Y". Presets are documented at
//! <https://bis.brontosaurus.cz/myr.php>.
//!
//! Presets are given as bit flags. Only two combinations are accepted by the
//! API: `WEEKEND | CAMP` and `WEEKEND | EKOSTAN`.

use bis_core::{BisError, BisResult};

/// A validated preset filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPreset {
    Club,
    Weekend,
    Camp,
    Ekostan,
    WeekendCamp,
    WeekendEkostan,
}

impl FilterPreset {
    pub const CLUB: u32 = 1;
    pub const WEEKEND: u32 = 2;
    pub const CAMP: u32 = 4;
    pub const EKOSTAN: u32 = 8;

    /// Every accepted preset, atomic flags first
    pub const ALL: [FilterPreset; 6] = [
        Self::Club,
        Self::Weekend,
        Self::Camp,
        Self::Ekostan,
        Self::WeekendCamp,
        Self::WeekendEkostan,
    ];

    /// Resolve a flag value, rejecting anything outside the accepted set
    pub fn from_bits(bits: u32) -> BisResult<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.bits() == bits)
            .ok_or_else(|| {
                tracing::warn!(bits, "Rejected preset filter value");
                BisError::usage(format!(
                    "Value `{}` is not of valid types and their combinations for `filter` parameter. \
                     Only `weekend+camp` and `weekend+ekostan` can be combined.",
                    bits
                ))
            })
    }

    pub fn bits(&self) -> u32 {
        match self {
            Self::Club => Self::CLUB,
            Self::Weekend => Self::WEEKEND,
            Self::Camp => Self::CAMP,
            Self::Ekostan => Self::EKOSTAN,
            Self::WeekendCamp => Self::WEEKEND | Self::CAMP,
            Self::WeekendEkostan => Self::WEEKEND | Self::EKOSTAN,
        }
    }

    /// Serialized form; combinations join the atomic segments weekend first
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Club => "klub",
            Self::Weekend => "vik",
            Self::Camp => "tabor",
            Self::Ekostan => "ekostan",
            Self::WeekendCamp => "viktabor",
            Self::WeekendEkostan => "vikekostan",
        }
    }
}

impl TryFrom<u32> for FilterPreset {
    type Error = BisError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl std::fmt::Display for FilterPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
