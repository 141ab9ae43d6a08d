//! Branch relationship tables: clash, combine, punishment and harm.
//!
//! All four relations are symmetric over unordered branch pairs:
//! - clash (chong): a perfect pairing, each branch has exactly one partner
//!   six steps away;
//! - combine (liu he): a perfect pairing, but not the clash one;
//! - punishment (xing): two triads (Yin-Si-Shen, Chou-Xu-Wei) plus the
//!   Zi-Mao pair, encoded as pair membership; self-punishment is not
//!   modeled because the analyzer never tests a branch against itself;
//! - harm (hai): six fixed pairs.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;

/// The four pairwise branch relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    Clash,
    Combine,
    Punish,
    Harm,
}

/// All 4 relation kinds.
pub const ALL_INTERACTION_KINDS: [InteractionKind; 4] = [
    InteractionKind::Clash,
    InteractionKind::Combine,
    InteractionKind::Punish,
    InteractionKind::Harm,
];

impl InteractionKind {
    /// English name of the relation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clash => "Clash",
            Self::Combine => "Combine",
            Self::Punish => "Punish",
            Self::Harm => "Harm",
        }
    }

    /// Pinyin name of the relation.
    pub const fn pinyin(self) -> &'static str {
        match self {
            Self::Clash => "chong",
            Self::Combine => "he",
            Self::Punish => "xing",
            Self::Harm => "hai",
        }
    }
}

/// The unique clash partner: six positions away on the cycle.
pub const fn clash_partner(branch: Branch) -> Branch {
    crate::branch::ALL_BRANCHES[((branch.index() + 6) % 12) as usize]
}

/// The combine (liu he) partner, if the branch participates.
///
/// The six combines form a perfect pairing over all 12 branches, so this
/// is total in practice; it stays `Option` to keep the table honest about
/// being a pairing rather than a formula.
pub const fn combine_partner(branch: Branch) -> Option<Branch> {
    match branch {
        Branch::Zi => Some(Branch::Chou),
        Branch::Chou => Some(Branch::Zi),
        Branch::Yin => Some(Branch::Hai),
        Branch::Hai => Some(Branch::Yin),
        Branch::Mao => Some(Branch::Xu),
        Branch::Xu => Some(Branch::Mao),
        Branch::Chen => Some(Branch::You),
        Branch::You => Some(Branch::Chen),
        Branch::Si => Some(Branch::Shen),
        Branch::Shen => Some(Branch::Si),
        Branch::Wu => Some(Branch::Wei),
        Branch::Wei => Some(Branch::Wu),
    }
}

/// Whether two distinct branches punish each other.
///
/// Pair membership in the Yin-Si-Shen triad, the Chou-Xu-Wei triad, or the
/// Zi-Mao pair.
pub const fn punishes(a: Branch, b: Branch) -> bool {
    const fn in_group(x: Branch, group: &[Branch]) -> bool {
        let mut i = 0;
        while i < group.len() {
            if x as u8 == group[i] as u8 {
                return true;
            }
            i += 1;
        }
        false
    }
    if a as u8 == b as u8 {
        return false;
    }
    const UNGRATEFUL: [Branch; 3] = [Branch::Yin, Branch::Si, Branch::Shen];
    const BULLYING: [Branch; 3] = [Branch::Chou, Branch::Xu, Branch::Wei];
    const RUDE: [Branch; 2] = [Branch::Zi, Branch::Mao];
    (in_group(a, &UNGRATEFUL) && in_group(b, &UNGRATEFUL))
        || (in_group(a, &BULLYING) && in_group(b, &BULLYING))
        || (in_group(a, &RUDE) && in_group(b, &RUDE))
}

/// The harm (hai) partner, if any. Six fixed pairs covering all branches.
pub const fn harm_partner(branch: Branch) -> Option<Branch> {
    match branch {
        Branch::Zi => Some(Branch::Wei),
        Branch::Wei => Some(Branch::Zi),
        Branch::Chou => Some(Branch::Wu),
        Branch::Wu => Some(Branch::Chou),
        Branch::Yin => Some(Branch::Si),
        Branch::Si => Some(Branch::Yin),
        Branch::Mao => Some(Branch::Chen),
        Branch::Chen => Some(Branch::Mao),
        Branch::Shen => Some(Branch::Hai),
        Branch::Hai => Some(Branch::Shen),
        Branch::You => Some(Branch::Xu),
        Branch::Xu => Some(Branch::You),
    }
}

/// Whether two distinct branches stand in the given relation.
pub const fn branches_interact(kind: InteractionKind, a: Branch, b: Branch) -> bool {
    if a as u8 == b as u8 {
        return false;
    }
    match kind {
        InteractionKind::Clash => clash_partner(a) as u8 == b as u8,
        InteractionKind::Combine => match combine_partner(a) {
            Some(p) => p as u8 == b as u8,
            None => false,
        },
        InteractionKind::Punish => punishes(a, b),
        InteractionKind::Harm => match harm_partner(a) {
            Some(p) => p as u8 == b as u8,
            None => false,
        },
    }
}
