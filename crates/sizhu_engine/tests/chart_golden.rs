//! End-to-end golden chart: 1990-01-15 14:30, Beijing, male.

use sizhu_engine::{
    BirthInput, Branch, ComputationPath, Coordinates, Gender, LuckDirection, Stem, compute_chart,
};

fn beijing_male() -> BirthInput {
    BirthInput {
        gender: Gender::Male,
        local_civil_timestamp: "1990-01-15T14:30:00".to_string(),
        timezone_id: Some("Asia/Shanghai".to_string()),
        coordinates: Some(Coordinates { latitude: 39.9, longitude: 116.4 }),
    }
}

#[test]
fn four_pillars_match_almanac() {
    let chart = compute_chart(&beijing_male()).unwrap();
    let fp = &chart.four_pillars;
    assert_eq!((fp.year.stem, fp.year.branch), (Stem::Ji, Branch::Si));
    assert_eq!((fp.month.stem, fp.month.branch), (Stem::Ding, Branch::Chou));
    assert_eq!((fp.day.stem, fp.day.branch), (Stem::Geng, Branch::Chen));
    assert_eq!((fp.hour.stem, fp.hour.branch), (Stem::Gui, Branch::Wei));
}

#[test]
fn all_pillars_carry_hidden_stems() {
    let chart = compute_chart(&beijing_male()).unwrap();
    let fp = &chart.four_pillars;
    for p in [&fp.year, &fp.month, &fp.day, &fp.hour] {
        assert!(!p.hidden.is_empty(), "pillar {}", p.label());
    }
}

#[test]
fn solar_correction_strictly_negative_and_bounded() {
    let chart = compute_chart(&beijing_male()).unwrap();
    let st = &chart.solar_time;
    assert!(st.applied);
    assert!(st.longitude_correction_minutes < 0.0);
    assert!(st.longitude_correction_minutes > -60.0);
}

#[test]
fn eight_decade_luck_pillars_reverse() {
    let chart = compute_chart(&beijing_male()).unwrap();
    // Male with a yin year stem (Ji) steps in reverse.
    assert_eq!(chart.luck_direction, LuckDirection::Reverse);
    assert_eq!(chart.luck_pillars.len(), 8);
    for (i, lp) in chart.luck_pillars.iter().enumerate() {
        assert_eq!(lp.index as usize, i + 1);
        assert_eq!(lp.end_age, lp.start_age + 9);
        if i > 0 {
            assert_eq!(lp.start_age, chart.luck_pillars[i - 1].start_age + 10);
        }
    }
    // First step back from Ding-Chou.
    let first = &chart.luck_pillars[0].pillar;
    assert_eq!((first.stem, first.branch), (Stem::Bing, Branch::Zi));
}

#[test]
fn chou_wei_clash_present() {
    // Month branch Chou clashes hour branch Wei.
    let chart = compute_chart(&beijing_male()).unwrap();
    assert!(chart.interactions.iter().any(|e| {
        e.kind == sizhu_engine::InteractionKind::Clash
    }));
    // Every entry orders its endpoints and avoids self-pairs.
    for e in &chart.interactions {
        assert_ne!(e.from, e.to);
    }
}

#[test]
fn day_master_geng_markers() {
    // Nobleman branches for Geng are Chou and Wei: both present.
    let chart = compute_chart(&beijing_male()).unwrap();
    let noblemen: Vec<_> = chart
        .markers
        .iter()
        .filter(|m| m.key == sizhu_engine::MarkerKey::Nobleman)
        .collect();
    assert_eq!(noblemen.len(), 2);
}

#[test]
fn internal_path_is_flagged_approximate() {
    let chart = compute_chart(&beijing_male()).unwrap();
    assert_eq!(chart.path, ComputationPath::Approximate);
}

#[test]
fn chart_serializes_to_plain_data() {
    let chart = compute_chart(&beijing_male()).unwrap();
    let json = serde_json::to_value(&chart).unwrap();
    assert_eq!(json["four_pillars"]["day"]["stem"], "Geng");
    assert_eq!(json["luck_pillars"].as_array().unwrap().len(), 8);
    // Timestamps serialize as local-time strings, not structured objects.
    assert!(json["solar_time"]["corrected"].is_string());
    // Round-trips.
    let back: sizhu_engine::Chart = serde_json::from_value(json).unwrap();
    assert_eq!(back, chart);
}

#[test]
fn deterministic_across_calls() {
    let a = compute_chart(&beijing_male()).unwrap();
    let b = compute_chart(&beijing_male()).unwrap();
    assert_eq!(a, b);
}
