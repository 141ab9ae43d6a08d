//! Ten-god (shi shen) classification of a stem against a reference stem.
//!
//! Given a reference stem (the day master) and any other stem, the ten gods
//! partition the 100 ordered stem pairs into 10 categories: the element
//! relation (same / generated / generating / dominated / dominating, from
//! the sheng and ke cycles) picks one of five pairs of siblings, and the
//! polarity match picks the sibling within the pair.

use serde::{Deserialize, Serialize};

use crate::element::Polarity;
use crate::stem::Stem;

/// The 10 relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// Bi Jian — same element, same polarity.
    Friend,
    /// Jie Cai — same element, opposite polarity.
    RobWealth,
    /// Shi Shen — day master generates it, same polarity.
    EatingGod,
    /// Shang Guan — day master generates it, opposite polarity.
    HurtingOfficer,
    /// Pian Cai — day master dominates it, same polarity.
    IndirectWealth,
    /// Zheng Cai — day master dominates it, opposite polarity.
    DirectWealth,
    /// Qi Sha — it dominates the day master, same polarity.
    SevenKillings,
    /// Zheng Guan — it dominates the day master, opposite polarity.
    DirectOfficer,
    /// Pian Yin — it generates the day master, same polarity.
    IndirectResource,
    /// Zheng Yin — it generates the day master, opposite polarity.
    DirectResource,
}

/// All 10 categories, sibling pairs adjacent.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Friend,
    TenGod::RobWealth,
    TenGod::EatingGod,
    TenGod::HurtingOfficer,
    TenGod::IndirectWealth,
    TenGod::DirectWealth,
    TenGod::SevenKillings,
    TenGod::DirectOfficer,
    TenGod::IndirectResource,
    TenGod::DirectResource,
];

impl TenGod {
    /// English name of the category.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::RobWealth => "Rob Wealth",
            Self::EatingGod => "Eating God",
            Self::HurtingOfficer => "Hurting Officer",
            Self::IndirectWealth => "Indirect Wealth",
            Self::DirectWealth => "Direct Wealth",
            Self::SevenKillings => "Seven Killings",
            Self::DirectOfficer => "Direct Officer",
            Self::IndirectResource => "Indirect Resource",
            Self::DirectResource => "Direct Resource",
        }
    }

    /// Pinyin name of the category.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Friend => "Bi Jian",
            Self::RobWealth => "Jie Cai",
            Self::EatingGod => "Shi Shen",
            Self::HurtingOfficer => "Shang Guan",
            Self::IndirectWealth => "Pian Cai",
            Self::DirectWealth => "Zheng Cai",
            Self::SevenKillings => "Qi Sha",
            Self::DirectOfficer => "Zheng Guan",
            Self::IndirectResource => "Pian Yin",
            Self::DirectResource => "Zheng Yin",
        }
    }
}

/// Classify `other` against the day master.
///
/// Total over all 100 ordered stem pairs. A stem classified against itself
/// is always [`TenGod::Friend`].
pub const fn ten_god(day_master: Stem, other: Stem) -> TenGod {
    let dm = day_master.element();
    let ot = other.element();
    let same_polarity = matches!(
        (day_master.polarity(), other.polarity()),
        (Polarity::Yang, Polarity::Yang) | (Polarity::Yin, Polarity::Yin)
    );

    if dm as u8 == ot as u8 {
        if same_polarity { TenGod::Friend } else { TenGod::RobWealth }
    } else if dm.generates() as u8 == ot as u8 {
        if same_polarity { TenGod::EatingGod } else { TenGod::HurtingOfficer }
    } else if dm.controls() as u8 == ot as u8 {
        if same_polarity { TenGod::IndirectWealth } else { TenGod::DirectWealth }
    } else if ot.controls() as u8 == dm as u8 {
        if same_polarity { TenGod::SevenKillings } else { TenGod::DirectOfficer }
    } else {
        // Remaining relation: other generates the day master.
        if same_polarity { TenGod::IndirectResource } else { TenGod::DirectResource }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn self_is_friend() {
        for s in ALL_STEMS {
            assert_eq!(ten_god(s, s), TenGod::Friend, "stem {}", s.name());
        }
    }

    #[test]
    fn opposite_polarity_sibling_is_rob_wealth() {
        // The other stem of the same element pair.
        assert_eq!(ten_god(Stem::Jia, Stem::Yi), TenGod::RobWealth);
        assert_eq!(ten_god(Stem::Yi, Stem::Jia), TenGod::RobWealth);
        assert_eq!(ten_god(Stem::Ren, Stem::Gui), TenGod::RobWealth);
    }

    #[test]
    fn jia_day_master_row() {
        // Jia (yang Wood) against each relation.
        assert_eq!(ten_god(Stem::Jia, Stem::Bing), TenGod::EatingGod); // Wood→Fire, yang
        assert_eq!(ten_god(Stem::Jia, Stem::Ding), TenGod::HurtingOfficer);
        assert_eq!(ten_god(Stem::Jia, Stem::Wu), TenGod::IndirectWealth); // Wood controls Earth
        assert_eq!(ten_god(Stem::Jia, Stem::Ji), TenGod::DirectWealth);
        assert_eq!(ten_god(Stem::Jia, Stem::Geng), TenGod::SevenKillings); // Metal controls Wood
        assert_eq!(ten_god(Stem::Jia, Stem::Xin), TenGod::DirectOfficer);
        assert_eq!(ten_god(Stem::Jia, Stem::Ren), TenGod::IndirectResource); // Water→Wood
        assert_eq!(ten_god(Stem::Jia, Stem::Gui), TenGod::DirectResource);
    }

    #[test]
    fn yin_day_master_row() {
        // Ding (yin Fire): same-polarity sibling is the other yin stem.
        assert_eq!(ten_god(Stem::Ding, Stem::Ji), TenGod::EatingGod); // Fire→Earth, both yin
        assert_eq!(ten_god(Stem::Ding, Stem::Wu), TenGod::HurtingOfficer);
        assert_eq!(ten_god(Stem::Ding, Stem::Xin), TenGod::IndirectWealth); // Fire controls Metal
        assert_eq!(ten_god(Stem::Ding, Stem::Gui), TenGod::SevenKillings); // Water controls Fire
        assert_eq!(ten_god(Stem::Ding, Stem::Jia), TenGod::DirectResource); // Wood→Fire, yang vs yin
    }

    #[test]
    fn total_and_balanced() {
        // Every ordered pair classifies, and each category claims exactly
        // 10 of the 100 pairs.
        let mut counts = [0usize; 10];
        for dm in ALL_STEMS {
            for other in ALL_STEMS {
                let god = ten_god(dm, other);
                let pos = ALL_TEN_GODS.iter().position(|g| *g == god).unwrap();
                counts[pos] += 1;
            }
        }
        for (i, n) in counts.iter().enumerate() {
            assert_eq!(*n, 10, "category {}", ALL_TEN_GODS[i].name());
        }
    }
}
