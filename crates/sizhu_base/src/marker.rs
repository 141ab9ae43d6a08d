//! Symbolic marker (shen sha) lookup tables.
//!
//! Each marker rule is a deterministic table keyed on the day pillar: the
//! day stem for Nobleman and Academic, the day branch's trine group for
//! Peach Blossom and Travel Horse. Rules are independent and presence-only.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// The named marker rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerKey {
    /// Tian Yi Gui Ren — the nobleman star, auspicious.
    Nobleman,
    /// Wen Chang — the academic star, auspicious.
    Academic,
    /// Tao Hua — the peach-blossom star, charm and attraction.
    PeachBlossom,
    /// Yi Ma — the travelling-horse star, movement and change.
    TravelHorse,
}

/// All 4 marker rules.
pub const ALL_MARKER_KEYS: [MarkerKey; 4] = [
    MarkerKey::Nobleman,
    MarkerKey::Academic,
    MarkerKey::PeachBlossom,
    MarkerKey::TravelHorse,
];

impl MarkerKey {
    /// English name of the marker.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nobleman => "Nobleman",
            Self::Academic => "Academic",
            Self::PeachBlossom => "Peach Blossom",
            Self::TravelHorse => "Travel Horse",
        }
    }

    /// Pinyin name of the marker.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Nobleman => "Tian Yi Gui Ren",
            Self::Academic => "Wen Chang",
            Self::PeachBlossom => "Tao Hua",
            Self::TravelHorse => "Yi Ma",
        }
    }
}

/// Nobleman branches for a day stem (one or two favorable branches).
pub const fn nobleman_branches(day_stem: Stem) -> &'static [Branch] {
    match day_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => &[Branch::Chou, Branch::Wei],
        Stem::Yi | Stem::Ji => &[Branch::Zi, Branch::Shen],
        Stem::Bing | Stem::Ding => &[Branch::Hai, Branch::You],
        Stem::Xin => &[Branch::Yin, Branch::Wu],
        Stem::Ren | Stem::Gui => &[Branch::Mao, Branch::Si],
    }
}

/// Academic-star branch for a day stem.
pub const fn academic_branch(day_stem: Stem) -> Branch {
    match day_stem {
        Stem::Jia => Branch::Si,
        Stem::Yi => Branch::Wu,
        Stem::Bing | Stem::Wu => Branch::Shen,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Geng => Branch::Hai,
        Stem::Xin => Branch::Zi,
        Stem::Ren => Branch::Yin,
        Stem::Gui => Branch::Mao,
    }
}

/// Peach-blossom branch for a reference branch, keyed on its trine group.
pub const fn peach_blossom_branch(reference: Branch) -> Branch {
    match reference {
        Branch::Shen | Branch::Zi | Branch::Chen => Branch::You,
        Branch::Yin | Branch::Wu | Branch::Xu => Branch::Mao,
        Branch::Si | Branch::You | Branch::Chou => Branch::Wu,
        Branch::Hai | Branch::Mao | Branch::Wei => Branch::Zi,
    }
}

/// Travelling-horse branch for a reference branch, keyed on its trine group.
pub const fn travel_horse_branch(reference: Branch) -> Branch {
    match reference {
        Branch::Shen | Branch::Zi | Branch::Chen => Branch::Yin,
        Branch::Yin | Branch::Wu | Branch::Xu => Branch::Shen,
        Branch::Si | Branch::You | Branch::Chou => Branch::Hai,
        Branch::Hai | Branch::Mao | Branch::Wei => Branch::Si,
    }
}
