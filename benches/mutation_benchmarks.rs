use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use timing_edit::{
    EditorState, TimingPoint, TimingPointChanges, commit_mutation, delete_timing_point,
    insert_timing_point, update_timing_point,
};

const SIZES: [usize; 3] = [16, 256, 4096];

/// Build a timeline of `size` points spaced one unit apart
fn timeline(size: usize) -> EditorState {
    let mut state = EditorState::new();
    for i in 0..size {
        commit_mutation(
            &mut state,
            insert_timing_point(TimingPoint::new(i as f64).with_bpm(120.0)),
        )
        .unwrap();
    }
    state
}

/// Insert in the middle of the timeline, then undo it
fn bench_insert_and_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_undo");

    for size in SIZES {
        let mut state = timeline(size);
        let middle = size as f64 / 2.0;

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let inverse = commit_mutation(
                    &mut state,
                    insert_timing_point(TimingPoint::new(black_box(middle))),
                )
                .unwrap()
                .unwrap();
                black_box(commit_mutation(&mut state, inverse).unwrap());
            });
        });
    }
    group.finish();
}

/// Move the first point to the end and back (worst case for the scan)
fn bench_update_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_move");

    for size in SIZES {
        let mut state = timeline(size);
        let target = state.timing_points[0].uuid;
        let end = size as f64 + 1.0;

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let inverse = commit_mutation(
                    &mut state,
                    update_timing_point(target, TimingPointChanges::new().time(black_box(end))),
                )
                .unwrap()
                .unwrap();
                black_box(commit_mutation(&mut state, inverse).unwrap());
            });
        });
    }
    group.finish();
}

/// Delete the last point and restore it
fn bench_delete_and_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete_undo");

    for size in SIZES {
        let mut state = timeline(size);
        let target = state.timing_points[size - 1].uuid;

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let inverse = commit_mutation(&mut state, delete_timing_point(black_box(target)))
                    .unwrap()
                    .unwrap();
                black_box(commit_mutation(&mut state, inverse).unwrap());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_and_undo,
    bench_update_move,
    bench_delete_and_undo
);
criterion_main!(benches);
