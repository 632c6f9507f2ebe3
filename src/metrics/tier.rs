//! Tier classification for scores and visa success rates

/// Ordinal quality bucket used by the dashboard badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    Base,
    Mid,
    Strong,
    Elite,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Base => "Base",
            Tier::Mid => "Mid",
            Tier::Strong => "Strong",
            Tier::Elite => "Elite",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thresholds for the editorial composite score, sorted by min descending
/// for an early-return scan.
const SCORE_LEVELS: [(i32, Tier); 3] = [(85, Tier::Elite), (75, Tier::Strong), (65, Tier::Mid)];

/// Thresholds for the parsed visa success rate, same mechanism.
const VISA_LEVELS: [(i32, Tier); 3] = [(90, Tier::Elite), (85, Tier::Strong), (80, Tier::Mid)];

#[inline]
fn classify(value: i32, levels: &[(i32, Tier)]) -> Tier {
    for (min, tier) in levels {
        if value >= *min {
            return *tier;
        }
    }
    Tier::Base
}

/// Tier of an editorial composite score (lower bounds inclusive: 85/75/65)
#[inline]
pub fn score_tier(score: i32) -> Tier {
    classify(score, &SCORE_LEVELS)
}

/// Tier of a parsed visa success rate (lower bounds inclusive: 90/85/80)
#[inline]
pub fn visa_tier(rate: i32) -> Tier {
    classify(rate, &VISA_LEVELS)
}
