use std::{env, fs, process};

use revision_trail::{Revision, RevisionField, TrackChanges};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Prints the history of one field of a chain of revisions, one range per line.
/// The revisions are read from a YAML list, see `demos/revisions.yml`.
///
/// Run it with:
/// `cargo run --example track-changes --features serde -- demos/revisions.yml [title|content]`
///
/// Set `RUST_LOG=revision_trail=trace` to see how the ranges got aligned.
fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "revision_trail=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: track-changes <revisions.yml> [title|content]");
        process::exit(1);
    }

    let revisions_file = &args[1];
    let field = args.get(2).map_or(Ok(RevisionField::Content), |field| {
        field.parse::<RevisionField>()
    });
    let field = field.unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let revisions_content = fs::read_to_string(revisions_file).unwrap_or_else(|e| {
        eprintln!("Error reading {revisions_file}: {e}");
        process::exit(1);
    });

    let revisions: Vec<Revision> =
        serde_yaml::from_str(&revisions_content).unwrap_or_else(|e| {
            eprintln!("Error parsing {revisions_file}: {e}");
            process::exit(1);
        });

    let merged = TrackChanges::with_field(field).execute(&revisions);

    for range in &merged {
        println!("{range}\t{} @ {}", range.author(), range.created_at());
    }
}
