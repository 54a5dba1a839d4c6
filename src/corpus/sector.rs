use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The industry sectors the corpus is grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sector {
    Fashion,
    Fitness,
    SkincareCosmetics,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::Fashion, Sector::Fitness, Sector::SkincareCosmetics];

    /// Directory name under the data root, also used in output file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sector::Fashion => "Fashion",
            Sector::Fitness => "Fitness",
            Sector::SkincareCosmetics => "Skincare_Cosmetics",
        }
    }

    /// Key into the coding scheme's `sector_specific_patterns` section.
    pub fn pattern_key(&self) -> &'static str {
        match self {
            Sector::Fashion => "fashion",
            Sector::Fitness => "fitness",
            Sector::SkincareCosmetics => "skincare",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fashion" => Ok(Sector::Fashion),
            "fitness" => Ok(Sector::Fitness),
            "skincare_cosmetics" | "skincare" | "cosmetics" => Ok(Sector::SkincareCosmetics),
            other => anyhow::bail!(
                "Unknown sector '{other}'. Expected one of: Fashion, Fitness, Skincare_Cosmetics"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for sector in Sector::ALL {
            assert_eq!(sector.as_str().parse::<Sector>().unwrap(), sector);
        }
    }

    #[test]
    fn test_skincare_pattern_key_drops_cosmetics() {
        assert_eq!(Sector::SkincareCosmetics.pattern_key(), "skincare");
    }

    #[test]
    fn test_unknown_sector_rejected() {
        assert!("Automotive".parse::<Sector>().is_err());
    }
}
