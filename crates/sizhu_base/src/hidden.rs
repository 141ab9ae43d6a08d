//! Hidden stems (cang gan): the 1–3 stems latently present in each branch.
//!
//! Each branch stores a principal qi, and most also store a middle and/or
//! residual qi. The table below is the standard cang gan assignment; the
//! principal entry always matches the branch's principal element.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// Qualitative weight of a hidden stem within its branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HiddenWeight {
    /// Principal qi (ben qi) — the dominant hidden stem.
    Principal,
    /// Middle qi (zhong qi).
    Middle,
    /// Residual qi (yu qi) — the weakest trace.
    Residual,
}

impl HiddenWeight {
    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Principal => "Principal",
            Self::Middle => "Middle",
            Self::Residual => "Residual",
        }
    }
}

/// Hidden stems of a branch, principal qi first.
///
/// Total over all 12 branches; every slice has 1–3 entries.
pub const fn hidden_stems_of(branch: Branch) -> &'static [(Stem, HiddenWeight)] {
    use HiddenWeight::*;
    match branch {
        Branch::Zi => &[(Stem::Gui, Principal)],
        Branch::Chou => &[(Stem::Ji, Principal), (Stem::Gui, Middle), (Stem::Xin, Residual)],
        Branch::Yin => &[(Stem::Jia, Principal), (Stem::Bing, Middle), (Stem::Wu, Residual)],
        Branch::Mao => &[(Stem::Yi, Principal)],
        Branch::Chen => &[(Stem::Wu, Principal), (Stem::Yi, Middle), (Stem::Gui, Residual)],
        Branch::Si => &[(Stem::Bing, Principal), (Stem::Wu, Middle), (Stem::Geng, Residual)],
        Branch::Wu => &[(Stem::Ding, Principal), (Stem::Ji, Middle)],
        Branch::Wei => &[(Stem::Ji, Principal), (Stem::Ding, Middle), (Stem::Yi, Residual)],
        Branch::Shen => &[(Stem::Geng, Principal), (Stem::Ren, Middle), (Stem::Wu, Residual)],
        Branch::You => &[(Stem::Xin, Principal)],
        Branch::Xu => &[(Stem::Wu, Principal), (Stem::Xin, Middle), (Stem::Ding, Residual)],
        Branch::Hai => &[(Stem::Ren, Principal), (Stem::Jia, Middle)],
    }
}
