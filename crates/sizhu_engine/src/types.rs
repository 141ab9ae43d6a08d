//! Value objects of the chart output contract.
//!
//! Everything here is plain serializable data: no shared mutable state, no
//! embedded handles. A `Chart` is assembled once and owns its nested
//! collections for the rest of its life.

use serde::{Deserialize, Serialize};

use sizhu_base::{
    Branch, HiddenWeight, InteractionKind, MarkerKey, Stem, TenGod, hidden_stems_of, ten_god,
};
use sizhu_time::SolarTimeResult;

use crate::error::ChartError;

/// Position of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PillarId {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 pillar positions in chart order.
pub const ALL_PILLAR_IDS: [PillarId; 4] = [
    PillarId::Year,
    PillarId::Month,
    PillarId::Day,
    PillarId::Hour,
];

impl PillarId {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// A hidden stem decorated with its ten-god classification.
///
/// Derived, never constructed independently: built from the branch's
/// hidden-stem table against a reference stem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: Stem,
    pub ten_god: TenGod,
    pub weight: HiddenWeight,
}

/// A stem-branch pair with its classified hidden stems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
    pub hidden: Vec<HiddenStem>,
}

impl Pillar {
    /// Build a pillar, classifying the branch's hidden stems against the
    /// given reference stem (the day master for natal pillars, the month
    /// stem for luck pillars).
    pub fn new(stem: Stem, branch: Branch, reference: Stem) -> Pillar {
        let hidden = hidden_stems_of(branch)
            .iter()
            .map(|&(s, weight)| HiddenStem {
                stem: s,
                ten_god: ten_god(reference, s),
                weight,
            })
            .collect();
        Pillar { stem, branch, hidden }
    }

    /// Build a pillar from raw cycle indices (Jia = 0, Zi = 0).
    ///
    /// Boundary for untyped input such as CLI arguments or stored rows;
    /// the typed [`Pillar::new`] cannot fail. An out-of-range index is
    /// [`ChartError::UnknownStemOrBranch`], never masked or defaulted.
    pub fn from_indices(stem: u8, branch: u8, reference: Stem) -> Result<Pillar, ChartError> {
        let stem = Stem::from_index(stem).ok_or(ChartError::UnknownStemOrBranch(stem))?;
        let branch = Branch::from_index(branch).ok_or(ChartError::UnknownStemOrBranch(branch))?;
        Ok(Pillar::new(stem, branch, reference))
    }

    /// Pinyin label, e.g. "Geng Chen".
    pub fn label(&self) -> String {
        format!("{} {}", self.stem.name(), self.branch.name())
    }
}

/// The four natal pillars. The day pillar's stem is the day master.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// The day master: reference stem for all natal ten-god classification.
    pub fn day_master(&self) -> Stem {
        self.day.stem
    }

    /// Pillar at a chart position.
    pub fn get(&self, id: PillarId) -> &Pillar {
        match id {
            PillarId::Year => &self.year,
            PillarId::Month => &self.month,
            PillarId::Day => &self.day,
            PillarId::Hour => &self.hour,
        }
    }
}

/// One decade-long luck pillar.
///
/// Invariants: `index` is 1-based and sequential; ages are contiguous
/// decades (`end_age == start_age + 9`, next `start_age` follows on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuckPillar {
    pub index: u8,
    pub start_age: u8,
    pub end_age: u8,
    pub pillar: Pillar,
}

/// Stepping direction of the luck cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LuckDirection {
    Forward,
    Reverse,
}

impl LuckDirection {
    /// Signed step applied per decade.
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Reverse => -1,
        }
    }
}

/// One pairwise branch relationship between two pillars.
///
/// Produced at most once per unordered pillar pair per kind; never a
/// self-pair. `from` always precedes `to` in chart order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEntry {
    pub kind: InteractionKind,
    pub from: PillarId,
    pub to: PillarId,
    pub description: String,
}

/// One symbolic marker hit. Presence-only, no intensity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub key: MarkerKey,
    pub pillar: PillarId,
    pub description: String,
}

/// Gender of the subject; combined with the year-stem polarity it fixes
/// the luck-cycle direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Geographic coordinates of the birth location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Validated birth input, as supplied by an external geocoding layer.
///
/// When `timezone_id` or `coordinates` are absent the engine takes the
/// fallback solar path; it never geocodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub gender: Gender,
    /// Wall-clock timestamp at the birth location, no UTC offset.
    pub local_civil_timestamp: String,
    pub timezone_id: Option<String>,
    pub coordinates: Option<Coordinates>,
}

/// Which day-pillar path produced the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComputationPath {
    /// An external calendar authority supplied the day cycle.
    Precise,
    /// The engine's own sexagenary arithmetic.
    Approximate,
}

/// The assembled chart snapshot. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub four_pillars: FourPillars,
    pub luck_direction: LuckDirection,
    pub luck_pillars: Vec<LuckPillar>,
    pub interactions: Vec<InteractionEntry>,
    pub markers: Vec<Marker>,
    pub solar_time: SolarTimeResult,
    pub path: ComputationPath,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillar_classifies_hidden_stems() {
        // Day master Geng against the Chen branch: Wu/Yi/Gui hidden.
        let p = Pillar::new(Stem::Geng, Branch::Chen, Stem::Geng);
        assert_eq!(p.hidden.len(), 3);
        assert_eq!(p.hidden[0].stem, Stem::Wu);
        assert_eq!(p.hidden[0].weight, HiddenWeight::Principal);
        // Earth generates Metal: Wu (yang) against Geng (yang) is the
        // same-polarity resource.
        assert_eq!(p.hidden[0].ten_god, TenGod::IndirectResource);
    }

    #[test]
    fn pillar_from_indices_round_trips() {
        // Geng = 6, Chen = 4.
        let p = Pillar::from_indices(6, 4, Stem::Geng).unwrap();
        assert_eq!(p, Pillar::new(Stem::Geng, Branch::Chen, Stem::Geng));
    }

    #[test]
    fn pillar_from_indices_rejects_out_of_range() {
        assert_eq!(
            Pillar::from_indices(10, 4, Stem::Geng),
            Err(ChartError::UnknownStemOrBranch(10))
        );
        assert_eq!(
            Pillar::from_indices(6, 12, Stem::Geng),
            Err(ChartError::UnknownStemOrBranch(12))
        );
    }

    #[test]
    fn pillar_label() {
        let p = Pillar::new(Stem::Geng, Branch::Chen, Stem::Geng);
        assert_eq!(p.label(), "Geng Chen");
    }

    #[test]
    fn four_pillars_get_matches_fields() {
        let mk = |s, b| Pillar::new(s, b, Stem::Geng);
        let fp = FourPillars {
            year: mk(Stem::Ji, Branch::Si),
            month: mk(Stem::Ding, Branch::Chou),
            day: mk(Stem::Geng, Branch::Chen),
            hour: mk(Stem::Gui, Branch::Wei),
        };
        assert_eq!(fp.day_master(), Stem::Geng);
        for id in ALL_PILLAR_IDS {
            let _ = fp.get(id);
        }
        assert_eq!(fp.get(PillarId::Hour).branch, Branch::Wei);
    }

    #[test]
    fn direction_steps() {
        assert_eq!(LuckDirection::Forward.step(), 1);
        assert_eq!(LuckDirection::Reverse.step(), -1);
    }

    #[test]
    fn birth_input_deserializes_lowercase_gender() {
        let input: BirthInput = serde_json::from_str(
            r#"{"gender":"male","local_civil_timestamp":"1990-01-15T14:30:00",
                "timezone_id":"Asia/Shanghai",
                "coordinates":{"latitude":39.9,"longitude":116.4}}"#,
        )
        .unwrap();
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.coordinates.unwrap().longitude, 116.4);
    }
}
