//! Shell demo — plans the default rectangular shell and materializes it
//! into an in-memory document.
//!
//! ```text
//! cargo run --example shell_demo
//! ```
//!
//! Prints the created walls and openings with lengths converted back to
//! millimeters.

use muralis::build::{BuildShell, ShellParams};
use muralis::document::MemoryDocument;
use muralis::model::OpeningKind;
use muralis::units::{internal_to_mm, mm_to_internal};

fn main() -> muralis::Result<()> {
    // Default: WARN for everything, INFO for muralis.
    // Override with RUST_LOG env var (e.g. RUST_LOG=muralis=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("muralis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let params = ShellParams::default();

    let mut doc = MemoryDocument::new();
    doc.insert_level(&params.base_level_name, 0.0);
    doc.insert_level(&params.top_level_name, mm_to_internal(3_000.0));
    doc.insert_catalog_type(OpeningKind::Door, params.door.clone());
    doc.insert_catalog_type(OpeningKind::Window, params.window.clone());

    let shell = BuildShell::new(params).execute(&mut doc)?;

    println!("walls:");
    for handle in shell.walls {
        let segment = doc.wall(handle)?.segment;
        println!(
            "  ({:>8.1}, {:>8.1}) -> ({:>8.1}, {:>8.1}) mm, length {:.1} mm",
            internal_to_mm(segment.start.x),
            internal_to_mm(segment.start.y),
            internal_to_mm(segment.end.x),
            internal_to_mm(segment.end.y),
            internal_to_mm(segment.length()),
        );
    }

    println!("openings:");
    for (_, element) in doc.openings() {
        let type_data = doc.catalog_type(element.opening_type)?;
        let kind = match type_data.kind {
            OpeningKind::Door => "door",
            OpeningKind::Window => "window",
        };
        let position = element.placement.position;
        print!(
            "  {kind} '{}' at ({:.1}, {:.1}) mm",
            type_data.key.type_name,
            internal_to_mm(position.x),
            internal_to_mm(position.y),
        );
        if let Some(sill) = element.placement.sill_height {
            print!(", sill {:.1} mm", internal_to_mm(sill));
        }
        println!();
    }

    Ok(())
}
