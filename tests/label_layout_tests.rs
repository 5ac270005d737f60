use approx::assert_abs_diff_eq;
use spider_chart::ChartError;
use spider_chart::core::{AngleReference, AxisAngleTable, Vertex, place_labels};
use spider_chart::render::{TextHAlign, TextVAlign};

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

#[test]
fn labels_sit_beyond_the_rim_by_the_margin() {
    let angles = AxisAngleTable::new(4, 0.0, AngleReference::Up).expect("angles");
    let center = Vertex::new(200.0, 200.0);
    let placements = place_labels(&labels(&["N", "E", "S", "W"]), &angles, 100.0, 10.0, center)
        .expect("placements");

    assert_eq!(placements.len(), 4);
    let expected = [(200.0, 90.0), (310.0, 200.0), (200.0, 310.0), (90.0, 200.0)];
    for (placement, (x, y)) in placements.iter().zip(expected) {
        assert_abs_diff_eq!(placement.anchor.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(placement.anchor.y, y, epsilon = 1e-9);
        assert_abs_diff_eq!(placement.anchor.distance_to(center), 110.0, epsilon = 1e-9);
    }
}

#[test]
fn alignment_keeps_text_outside_the_web() {
    let angles = AxisAngleTable::new(4, 0.0, AngleReference::Up).expect("angles");
    let placements = place_labels(
        &labels(&["N", "E", "S", "W"]),
        &angles,
        100.0,
        8.0,
        Vertex::new(0.0, 0.0),
    )
    .expect("placements");

    let alignments: Vec<(TextHAlign, TextVAlign)> = placements
        .iter()
        .map(|placement| (placement.h_align, placement.v_align))
        .collect();
    assert_eq!(
        alignments,
        vec![
            (TextHAlign::Center, TextVAlign::Bottom),
            (TextHAlign::Left, TextVAlign::Middle),
            (TextHAlign::Center, TextVAlign::Top),
            (TextHAlign::Right, TextVAlign::Middle),
        ]
    );
}

#[test]
fn rotation_carries_labels_with_their_axes() {
    let angles = AxisAngleTable::new(4, 90.0, AngleReference::Up).expect("angles");
    let placements = place_labels(
        &labels(&["first", "second", "third", "fourth"]),
        &angles,
        50.0,
        0.0,
        Vertex::new(0.0, 0.0),
    )
    .expect("placements");

    let first = &placements[0];
    assert_eq!(first.text, "first");
    assert_abs_diff_eq!(first.anchor.x, 50.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.anchor.y, 0.0, epsilon = 1e-9);
    assert_eq!(first.h_align, TextHAlign::Left);
}

#[test]
fn label_count_must_match_axes() {
    let angles = AxisAngleTable::new(3, 0.0, AngleReference::Up).expect("angles");
    let err = place_labels(&labels(&["A", "B"]), &angles, 10.0, 1.0, Vertex::new(0.0, 0.0))
        .expect_err("two labels for three axes");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
