use serde::{Deserialize, Serialize};

/// Fixed age groups used by the demographics report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    Under25,
    From25To34,
    From35To44,
    From45To54,
    From55To64,
    Over65,
}

impl AgeBand {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Under25,
            Self::From25To34,
            Self::From35To44,
            Self::From45To54,
            Self::From55To64,
            Self::Over65,
        ]
    }

    /// Bands are `[0,25) [25,35) [35,45) [45,55) [55,65) [65,100]`.
    /// Ages outside 0..=100 land in the nearest edge band.
    pub const fn for_age(age: i32) -> Self {
        match age {
            i32::MIN..=24 => Self::Under25,
            25..=34 => Self::From25To34,
            35..=44 => Self::From35To44,
            45..=54 => Self::From45To54,
            55..=64 => Self::From55To64,
            _ => Self::Over65,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Under25 => "<25",
            Self::From25To34 => "25-34",
            Self::From35To44 => "35-44",
            Self::From45To54 => "45-54",
            Self::From55To64 => "55-64",
            Self::Over65 => "65+",
        }
    }
}
