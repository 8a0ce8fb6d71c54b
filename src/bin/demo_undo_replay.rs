// Walk through a sequence of timing mutations, then undo them all
// Run with: cargo run --bin demo_undo_replay [mutations.json]
//
// The optional file holds a JSON array of mutations, e.g.
// [{"type":"insertTimingPoint","entity":{"uuid":"...","time":0.0,"bpm":120.0,"signature":4}}]
// Set RUST_LOG=timing_edit=debug to see every dispatch.

use timing_edit::{
    EditorState, Mutation, TimingPoint, TimingPointChanges, commit_mutation, delete_timing_point,
    insert_timing_point, update_timing_point,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "timing_edit=info,warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let mutations = match std::env::args().nth(1) {
        Some(path) => {
            let data = std::fs::read_to_string(&path)?;
            let mutations: Vec<Mutation> = serde_json::from_str(&data)?;
            tracing::info!(count = mutations.len(), %path, "loaded mutations");
            mutations
        }
        None => scripted_session(),
    };

    let mut state = EditorState::new();
    let mut undo_stack: Vec<Mutation> = Vec::new();

    println!("Applying {} mutations", mutations.len());
    for mutation in mutations {
        let label = mutation.description();
        match commit_mutation(&mut state, mutation)? {
            Some(inverse) => undo_stack.push(inverse),
            None => println!("  (ignored) {}", label),
        }
        println!("  {:<32} {}", label, render(&state));
    }

    println!("\nUndoing {} mutations", undo_stack.len());
    while let Some(inverse) = undo_stack.pop() {
        let label = inverse.description();
        commit_mutation(&mut state, inverse)?;
        println!("  {:<32} {}", label, render(&state));
    }

    if !state.is_empty() {
        return Err(format!("undo left {} timing points behind", state.len()).into());
    }
    println!("\nTimeline restored to its initial state");
    Ok(())
}

/// Forward steps of the documented session: insert A and B, retempo A,
/// delete B
///
/// The undo pass then restores B in front of A, puts A back to 120 BPM and
/// removes both points.
fn scripted_session() -> Vec<Mutation> {
    let a = TimingPoint::new(10.0).with_bpm(120.0);
    let b = TimingPoint::new(5.0);
    vec![
        insert_timing_point(a.clone()),
        insert_timing_point(b.clone()),
        update_timing_point(a.uuid, TimingPointChanges::new().bpm(Some(140.0))),
        delete_timing_point(b.uuid),
    ]
}

fn render(state: &EditorState) -> String {
    let points: Vec<String> = state.timing_points().iter().map(|p| p.to_string()).collect();
    format!("[{}]", points.join(", "))
}
