//! The 10 heavenly stems (tian gan).
//!
//! Stems cycle with period 10 through years, months, days and hours.
//! Each stem carries a fixed element and polarity: the stems pair up
//! elementwise (Jia/Yi = Wood, Bing/Ding = Fire, ...) with the even index
//! of each pair yang and the odd index yin.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 10 heavenly stems in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (0 = Jia, 9 = Gui).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Pinyin name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "Jia",
            Self::Yi => "Yi",
            Self::Bing => "Bing",
            Self::Ding => "Ding",
            Self::Wu => "Wu",
            Self::Ji => "Ji",
            Self::Geng => "Geng",
            Self::Xin => "Xin",
            Self::Ren => "Ren",
            Self::Gui => "Gui",
        }
    }

    /// Chinese character for the stem.
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    /// 0-based cycle index (Jia=0 .. Gui=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Jia => 0,
            Self::Yi => 1,
            Self::Bing => 2,
            Self::Ding => 3,
            Self::Wu => 4,
            Self::Ji => 5,
            Self::Geng => 6,
            Self::Xin => 7,
            Self::Ren => 8,
            Self::Gui => 9,
        }
    }

    /// Element of the stem: consecutive pairs share an element.
    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// Polarity alternates through the cycle: even index yang, odd yin.
    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Jia | Self::Bing | Self::Wu | Self::Geng | Self::Ren => Polarity::Yang,
            Self::Yi | Self::Ding | Self::Ji | Self::Xin | Self::Gui => Polarity::Yin,
        }
    }

    /// Stem from its 0-based cycle index.
    pub fn from_index(idx: u8) -> Option<Stem> {
        ALL_STEMS.get(idx as usize).copied()
    }

    /// Step the stem forward (positive) or backward (negative) through the
    /// cycle. Modulo arithmetic keeps the result in range for any step.
    pub fn add(self, steps: i32) -> Stem {
        let idx = (self.index() as i32 + steps).rem_euclid(10);
        ALL_STEMS[idx as usize]
    }

    /// All 10 stems in cycle order.
    pub const fn all() -> &'static [Stem; 10] {
        &ALL_STEMS
    }
}
