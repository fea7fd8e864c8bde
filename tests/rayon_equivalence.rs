#![cfg(feature = "rayon")]

use detannounce::{
    filter_batch, filter_batch_par, FrameProcessor, LabelTable, ProcessConfig, RawDetectionSet,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn make_frames(
    rng: &mut StdRng,
    frames: usize,
    slots: usize,
    num_labels: usize,
) -> Vec<RawDetectionSet> {
    (0..frames)
        .map(|_| {
            let mut locations = Vec::with_capacity(slots * 4);
            for _ in 0..slots {
                let top: f32 = rng.random_range(0.0..0.5);
                let left: f32 = rng.random_range(0.0..0.5);
                locations.extend_from_slice(&[
                    top,
                    left,
                    top + rng.random_range(0.0..0.5),
                    left + rng.random_range(0.0..0.5),
                ]);
            }
            let classes: Vec<f32> = (0..slots)
                .map(|_| rng.random_range(0..num_labels) as f32 + 0.25)
                .collect();
            let scores: Vec<f32> = (0..slots).map(|_| rng.random::<f32>()).collect();
            RawDetectionSet::from_flat(&locations, &classes, &scores).unwrap()
        })
        .collect()
}

fn labels(n: usize) -> LabelTable {
    (0..n).map(|i| format!("class-{}", i % 7)).collect()
}

#[test]
fn parallel_filter_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(7);
    let table = labels(20);
    let frames = make_frames(&mut rng, 64, 10, 20);

    let seq = filter_batch(&frames, &table, 0.5).unwrap();
    let par = filter_batch_par(&frames, &table, 0.5).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn parallel_processor_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(11);
    let table = labels(20);
    let frames = make_frames(&mut rng, 48, 10, 20);

    let mut seq = FrameProcessor::new(table.clone());
    let mut par = FrameProcessor::new(table)
        .with_config(ProcessConfig {
            parallel: true,
            ..ProcessConfig::default()
        })
        .unwrap();

    assert_eq!(
        seq.process_batch(&frames).unwrap(),
        par.process_batch(&frames).unwrap()
    );
    assert_eq!(seq.state(), par.state());
}

#[test]
fn parallel_reports_first_failing_frame() {
    let mut rng = StdRng::seed_from_u64(3);
    let table = labels(5);
    let mut frames = make_frames(&mut rng, 16, 4, 5);
    let bad_a = RawDetectionSet::from_flat(&[0.0, 0.0, 1.0, 1.0], &[5.0], &[1.0]).unwrap();
    let bad_b = RawDetectionSet::from_flat(&[0.0, 0.0, 1.0, 1.0], &[-1.0], &[1.0]).unwrap();
    frames.insert(3, bad_a);
    frames.insert(9, bad_b);

    let seq = filter_batch(&frames, &table, 0.5).err().unwrap();
    let par = filter_batch_par(&frames, &table, 0.5).err().unwrap();
    assert_eq!(seq, par);
}
