use detannounce::{filter_detections, pick_dominant_label, Detection, LabelTable, RawDetectionSet};

fn labels() -> LabelTable {
    ["cat", "dog", "bird", " chair "].into_iter().collect()
}

fn single(score: f32) -> RawDetectionSet {
    RawDetectionSet::from_flat(&[0.0, 0.0, 0.5, 0.5], &[0.0], &[score]).unwrap()
}

#[test]
fn score_equal_to_threshold_is_rejected() {
    let table = labels();
    let at = filter_detections(&single(0.5), &table, 0.5).unwrap();
    assert!(at.is_empty());

    let above = filter_detections(&single(0.5 + f32::EPSILON), &table, 0.5).unwrap();
    assert_eq!(above.len(), 1);
}

#[test]
fn accepted_slots_keep_input_order() {
    let table = labels();
    let locations = [
        0.0, 0.0, 0.2, 0.2, //
        0.0, 0.0, 0.9, 0.9, //
        0.1, 0.1, 0.5, 0.5,
    ];
    let raw = RawDetectionSet::from_flat(&locations, &[0.0, 1.0, 2.0], &[0.9, 0.1, 0.9]).unwrap();
    let detections = filter_detections(&raw, &table, 0.5).unwrap();

    let slots: Vec<usize> = detections.iter().map(|d| d.slot).collect();
    assert_eq!(slots, vec![0, 2]);
    assert_eq!(detections[0].label, "cat");
    assert_eq!(detections[1].label, "bird");
}

#[test]
fn area_uses_normalized_coordinates() {
    let table = labels();
    let raw = RawDetectionSet::from_flat(&[0.1, 0.2, 0.4, 0.6], &[1.0], &[0.8]).unwrap();
    let detections = filter_detections(&raw, &table, 0.5).unwrap();
    assert!((detections[0].area - 0.12).abs() < 1e-6);
    assert!((detections[0].score - 0.8).abs() < 1e-9);
}

#[test]
fn inverted_boxes_still_have_positive_area() {
    let table = labels();
    let raw = RawDetectionSet::from_flat(&[0.4, 0.6, 0.1, 0.2], &[1.0], &[0.8]).unwrap();
    let detections = filter_detections(&raw, &table, 0.5).unwrap();
    assert!((detections[0].area - 0.12).abs() < 1e-6);
}

#[test]
fn dominant_label_ties_keep_first() {
    let table = labels();
    let locations = [
        0.0, 0.0, 0.5, 0.5, //
        0.5, 0.5, 1.0, 1.0, //
        0.0, 0.0, 0.1, 0.1,
    ];
    let raw = RawDetectionSet::from_flat(&locations, &[1.0, 0.0, 2.0], &[0.9, 0.9, 0.9]).unwrap();
    let detections = filter_detections(&raw, &table, 0.5).unwrap();
    assert_eq!(pick_dominant_label(&detections), "dog");
}

#[test]
fn dominant_label_picks_largest_area_and_trims() {
    let table = labels();
    let locations = [
        0.0, 0.0, 0.3, 0.3, //
        0.0, 0.0, 0.8, 0.9,
    ];
    let raw = RawDetectionSet::from_flat(&locations, &[0.0, 3.0], &[0.7, 0.6]).unwrap();
    let detections = filter_detections(&raw, &table, 0.5).unwrap();
    assert_eq!(detections[1].label, " chair ");
    assert_eq!(pick_dominant_label(&detections), "chair");
}

#[test]
fn empty_inputs_give_empty_outputs() {
    let table = labels();
    let raw = RawDetectionSet::from_flat(&[], &[], &[]).unwrap();
    let detections = filter_detections(&raw, &table, 0.5).unwrap();
    assert!(detections.is_empty());

    let none: [Detection; 0] = [];
    assert_eq!(pick_dominant_label(&none), "");
}

#[test]
fn candidate_count_follows_input_length() {
    let table = labels();
    let n = 37;
    let locations: Vec<f32> = (0..n).flat_map(|_| [0.0, 0.0, 0.5, 0.5]).collect();
    let classes = vec![1.0; n];
    let scores = vec![0.75; n];
    let raw = RawDetectionSet::from_flat(&locations, &classes, &scores).unwrap();
    let detections = filter_detections(&raw, &table, 0.5).unwrap();
    assert_eq!(detections.len(), n);
}
