//! Four-pillars chart computation engine.
//!
//! Pure, synchronous, side-effect-free: a chart is a deterministic
//! function of the birth instant, gender and location. The engine owns
//! nothing but fixed lookup tables (from `sizhu_base`) and is safe to call
//! concurrently for independent inputs without coordination.
//!
//! # Quick start
//!
//! ```rust
//! use sizhu_engine::{BirthInput, Coordinates, Gender, compute_chart};
//!
//! let input = BirthInput {
//!     gender: Gender::Male,
//!     local_civil_timestamp: "1990-01-15T14:30:00".to_string(),
//!     timezone_id: Some("Asia/Shanghai".to_string()),
//!     coordinates: Some(Coordinates { latitude: 39.9, longitude: 116.4 }),
//! };
//! let chart = compute_chart(&input).unwrap();
//! assert_eq!(chart.luck_pillars.len(), 8);
//! ```

pub mod analyze;
pub mod chart;
pub mod error;
pub mod luck;
pub mod pillars;
pub mod types;

pub use analyze::{analyze_interactions, annotate_markers};
pub use chart::{compute_chart, compute_chart_with};
pub use error::{AuthorityError, ChartError};
pub use luck::{LUCK_PILLAR_COUNT, compute_luck_pillars, first_start_age, luck_direction};
pub use pillars::{
    CalendarAuthority, SexagenaryArithmetic, YEAR_EPOCH, day_epoch, derive_four_pillars,
    derive_four_pillars_with, five_rat_first_stem, five_tiger_first_stem, year_stem_branch,
};
pub use types::{
    ALL_PILLAR_IDS, BirthInput, Chart, ComputationPath, Coordinates, FourPillars, Gender,
    HiddenStem, InteractionEntry, LuckDirection, LuckPillar, Marker, Pillar, PillarId,
};

// Re-export the symbol layer so callers don't need sizhu_base directly.
pub use sizhu_base::{
    Branch, Element, HiddenWeight, InteractionKind, MarkerKey, Polarity, Stem, TenGod,
};
pub use sizhu_time::{SolarTimeError, SolarTimeResult};
