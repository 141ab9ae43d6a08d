//! The 12 earthly branches (di zhi).
//!
//! Branches cycle with period 12. Each branch carries a fixed principal
//! element, a polarity, a zodiac animal, and a two-hour window of the civil
//! day (Zi spans 23:00–01:00, then each branch takes the next two hours).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 12 earthly branches in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (0 = Zi, 11 = Hai).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Pinyin name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "Zi",
            Self::Chou => "Chou",
            Self::Yin => "Yin",
            Self::Mao => "Mao",
            Self::Chen => "Chen",
            Self::Si => "Si",
            Self::Wu => "Wu",
            Self::Wei => "Wei",
            Self::Shen => "Shen",
            Self::You => "You",
            Self::Xu => "Xu",
            Self::Hai => "Hai",
        }
    }

    /// Chinese character for the branch.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    /// Zodiac animal associated with the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "Rat",
            Self::Chou => "Ox",
            Self::Yin => "Tiger",
            Self::Mao => "Rabbit",
            Self::Chen => "Dragon",
            Self::Si => "Snake",
            Self::Wu => "Horse",
            Self::Wei => "Goat",
            Self::Shen => "Monkey",
            Self::You => "Rooster",
            Self::Xu => "Dog",
            Self::Hai => "Pig",
        }
    }

    /// 0-based cycle index (Zi=0 .. Hai=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Zi => 0,
            Self::Chou => 1,
            Self::Yin => 2,
            Self::Mao => 3,
            Self::Chen => 4,
            Self::Si => 5,
            Self::Wu => 6,
            Self::Wei => 7,
            Self::Shen => 8,
            Self::You => 9,
            Self::Xu => 10,
            Self::Hai => 11,
        }
    }

    /// Principal element of the branch.
    pub const fn principal_element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// Polarity alternates through the cycle: even index yang, odd yin.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Zi | Self::Yin | Self::Chen | Self::Wu | Self::Shen | Self::Xu => Polarity::Yang,
            Self::Chou | Self::Mao | Self::Si | Self::Wei | Self::You | Self::Hai => Polarity::Yin,
        }
    }

    /// Branch from its 0-based cycle index.
    pub fn from_index(idx: u8) -> Option<Branch> {
        ALL_BRANCHES.get(idx as usize).copied()
    }

    /// Step the branch forward (positive) or backward (negative) through the
    /// cycle. Modulo arithmetic keeps the result in range for any step.
    pub fn add(self, steps: i32) -> Branch {
        let idx = (self.index() as i32 + steps).rem_euclid(12);
        ALL_BRANCHES[idx as usize]
    }

    /// Branch of the two-hour window containing a civil hour (0..=23).
    ///
    /// Zi covers 23:00–01:00, Chou 01:00–03:00, and so on. A birth in
    /// 23:00–24:00 keeps the civil day's day pillar; the early/late Zi
    /// school split is not modeled.
    pub const fn from_civil_hour(hour: u32) -> Branch {
        ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize]
    }

    /// All 12 branches in cycle order.
    pub const fn all() -> &'static [Branch; 12] {
        &ALL_BRANCHES
    }
}
