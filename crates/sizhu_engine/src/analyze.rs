//! Pairwise branch interactions and symbolic markers over the four pillars.

use sizhu_base::{
    ALL_INTERACTION_KINDS, Branch, MarkerKey, academic_branch, branches_interact,
    nobleman_branches, peach_blossom_branch, travel_horse_branch,
};

use crate::types::{ALL_PILLAR_IDS, FourPillars, InteractionEntry, Marker, PillarId};

/// Enumerate the six unordered pillar pairs and test each against the four
/// relationship tables.
///
/// Emits at most one entry per (pair, kind); a pair satisfying several
/// kinds yields one entry per kind. Never emits self-pairs.
pub fn analyze_interactions(pillars: &FourPillars) -> Vec<InteractionEntry> {
    let mut entries = Vec::new();
    for (i, &from) in ALL_PILLAR_IDS.iter().enumerate() {
        for &to in &ALL_PILLAR_IDS[i + 1..] {
            let a = pillars.get(from).branch;
            let b = pillars.get(to).branch;
            for kind in ALL_INTERACTION_KINDS {
                if branches_interact(kind, a, b) {
                    entries.push(InteractionEntry {
                        kind,
                        from,
                        to,
                        description: format!(
                            "{} {} {} ({}): {} and {} pillars",
                            a.name(),
                            kind.pinyin(),
                            b.name(),
                            kind.name(),
                            from.name(),
                            to.name()
                        ),
                    });
                }
            }
        }
    }
    entries
}

/// Apply the marker rules across the four pillars.
///
/// Rules are independent; each may fire zero or more times. Nobleman and
/// Academic key on the day stem; Peach Blossom and Travel Horse key on the
/// day branch's trine group. The day pillar itself is skipped for the
/// branch-keyed rules, which describe other positions relative to the day.
pub fn annotate_markers(pillars: &FourPillars) -> Vec<Marker> {
    let day_stem = pillars.day.stem;
    let day_branch = pillars.day.branch;
    let mut markers = Vec::new();

    let mut push = |key: MarkerKey, id: PillarId, branch: Branch| {
        markers.push(Marker {
            key,
            pillar: id,
            description: format!("{} ({}) on the {} pillar's {} branch",
                key.name(),
                key.pinyin(),
                id.name(),
                branch.name()
            ),
        });
    };

    for id in ALL_PILLAR_IDS {
        let branch = pillars.get(id).branch;
        if nobleman_branches(day_stem).contains(&branch) {
            push(MarkerKey::Nobleman, id, branch);
        }
        if academic_branch(day_stem) == branch {
            push(MarkerKey::Academic, id, branch);
        }
        if id != PillarId::Day {
            if peach_blossom_branch(day_branch) == branch {
                push(MarkerKey::PeachBlossom, id, branch);
            }
            if travel_horse_branch(day_branch) == branch {
                push(MarkerKey::TravelHorse, id, branch);
            }
        }
    }
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use sizhu_base::{InteractionKind, Stem};
    use crate::types::Pillar;

    fn four(year: (Stem, Branch), month: (Stem, Branch), day: (Stem, Branch), hour: (Stem, Branch)) -> FourPillars {
        let dm = day.0;
        FourPillars {
            year: Pillar::new(year.0, year.1, dm),
            month: Pillar::new(month.0, month.1, dm),
            day: Pillar::new(day.0, day.1, dm),
            hour: Pillar::new(hour.0, hour.1, dm),
        }
    }

    #[test]
    fn no_duplicate_pair_kind_entries() {
        let fp = four(
            (Stem::Jia, Branch::Zi),
            (Stem::Bing, Branch::Wu),
            (Stem::Geng, Branch::Mao),
            (Stem::Ren, Branch::You),
        );
        let entries = analyze_interactions(&fp);
        for (i, a) in entries.iter().enumerate() {
            for b in &entries[i + 1..] {
                assert!(
                    !(a.kind == b.kind && a.from == b.from && a.to == b.to),
                    "duplicate entry {a:?}"
                );
            }
        }
        // No self-pairs by construction.
        for e in &entries {
            assert_ne!(e.from, e.to);
        }
    }

    #[test]
    fn clash_detected_between_year_and_month() {
        let fp = four(
            (Stem::Jia, Branch::Zi),
            (Stem::Bing, Branch::Wu),
            (Stem::Geng, Branch::Chen),
            (Stem::Ren, Branch::Shen),
        );
        let entries = analyze_interactions(&fp);
        assert!(entries.iter().any(|e| e.kind == InteractionKind::Clash
            && e.from == PillarId::Year
            && e.to == PillarId::Month));
    }

    #[test]
    fn pair_can_carry_multiple_kinds() {
        // Yin-Si is simultaneously a punishment and a harm.
        let fp = four(
            (Stem::Jia, Branch::Yin),
            (Stem::Bing, Branch::Si),
            (Stem::Geng, Branch::Chen),
            (Stem::Ren, Branch::Xu),
        );
        let entries = analyze_interactions(&fp);
        let between_year_month: Vec<_> = entries
            .iter()
            .filter(|e| e.from == PillarId::Year && e.to == PillarId::Month)
            .collect();
        assert!(between_year_month.iter().any(|e| e.kind == InteractionKind::Punish));
        assert!(between_year_month.iter().any(|e| e.kind == InteractionKind::Harm));
    }

    #[test]
    fn combine_detected() {
        let fp = four(
            (Stem::Jia, Branch::Zi),
            (Stem::Bing, Branch::Chou),
            (Stem::Geng, Branch::Chen),
            (Stem::Ren, Branch::Xu),
        );
        let entries = analyze_interactions(&fp);
        assert!(entries.iter().any(|e| e.kind == InteractionKind::Combine
            && e.from == PillarId::Year
            && e.to == PillarId::Month));
    }

    #[test]
    fn nobleman_fires_per_matching_pillar() {
        // Day master Jia: nobleman at Chou and Wei.
        let fp = four(
            (Stem::Ji, Branch::Chou),
            (Stem::Bing, Branch::Yin),
            (Stem::Jia, Branch::Zi),
            (Stem::Yi, Branch::Wei),
        );
        let markers = annotate_markers(&fp);
        let noblemen: Vec<_> = markers.iter().filter(|m| m.key == MarkerKey::Nobleman).collect();
        assert_eq!(noblemen.len(), 2);
        assert!(noblemen.iter().any(|m| m.pillar == PillarId::Year));
        assert!(noblemen.iter().any(|m| m.pillar == PillarId::Hour));
    }

    #[test]
    fn academic_fires_on_day_stem_match() {
        // Day master Jia: academic star at Si.
        let fp = four(
            (Stem::Ji, Branch::Si),
            (Stem::Bing, Branch::Yin),
            (Stem::Jia, Branch::Chen),
            (Stem::Yi, Branch::Mao),
        );
        let markers = annotate_markers(&fp);
        assert!(markers
            .iter()
            .any(|m| m.key == MarkerKey::Academic && m.pillar == PillarId::Year));
    }

    #[test]
    fn trine_markers_skip_day_pillar() {
        // Day branch Zi: peach blossom at You, travel horse at Yin.
        let fp = four(
            (Stem::Ji, Branch::You),
            (Stem::Bing, Branch::Yin),
            (Stem::Wu, Branch::Zi),
            (Stem::Yi, Branch::Mao),
        );
        let markers = annotate_markers(&fp);
        assert!(markers
            .iter()
            .any(|m| m.key == MarkerKey::PeachBlossom && m.pillar == PillarId::Year));
        assert!(markers
            .iter()
            .any(|m| m.key == MarkerKey::TravelHorse && m.pillar == PillarId::Month));
        assert!(!markers.iter().any(|m| m.pillar == PillarId::Day
            && (m.key == MarkerKey::PeachBlossom || m.key == MarkerKey::TravelHorse)));
    }

    #[test]
    fn rules_may_all_stay_silent() {
        // Day master Geng (nobleman Chou/Wei, academic Hai), day branch
        // Chen (peach blossom You, horse Yin): nothing matches.
        let fp = four(
            (Stem::Jia, Branch::Zi),
            (Stem::Bing, Branch::Wu),
            (Stem::Geng, Branch::Chen),
            (Stem::Ren, Branch::Xu),
        );
        let markers = annotate_markers(&fp);
        assert!(markers.is_empty(), "got {markers:?}");
    }
}
