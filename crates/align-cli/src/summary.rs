use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use align_cli::pipeline::RequestOutcome;
use align_model::{ColumnMatch, MatchKind, SynonymConflict};

pub fn print_summary(outcome: &RequestOutcome) {
    let alignment = &outcome.alignment;
    println!("Input: {}", outcome.input.display());
    println!("Reference: {}", outcome.reference.display());
    println!("Rows: {}", alignment.table.height());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input column"),
        header_cell("Canonical header"),
        header_cell("Match"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    let headers = outcome.mapping.reference_headers();
    let mut matches: Vec<&ColumnMatch> = alignment.matches.iter().collect();
    matches.sort_by_key(|found| headers.position(&found.canonical));
    for found in matches {
        table.add_row(vec![
            Cell::new(&found.source),
            Cell::new(&found.canonical),
            kind_cell(found.kind),
        ]);
    }
    for name in &alignment.unmatched {
        table.add_row(vec![
            Cell::new(name).fg(Color::Yellow),
            dim_cell("-"),
            Cell::new("not found").fg(Color::Yellow),
        ]);
    }
    println!("{table}");

    let renamed = alignment.matches.iter().filter(|m| m.is_renamed()).count();
    println!(
        "Matched: {} ({renamed} renamed)",
        alignment.matches.len()
    );
    if alignment.has_unmatched() {
        println!("Not found: {}", alignment.unmatched.join(", "));
    }

    let missing = alignment.missing_headers();
    if !missing.is_empty() {
        println!("Headers left empty: {}", missing.join(", "));
    }
    print_conflicts(&outcome.mapping.synonym_conflicts());

    match &outcome.outputs {
        Some(paths) => {
            println!("Aligned file: {}", paths.aligned.display());
            if let Some(path) = &paths.not_found {
                println!("Not found columns: {}", path.display());
            }
        }
        None => println!("Dry run: no files written"),
    }
}

pub fn print_conflicts(conflicts: &[SynonymConflict]) {
    if conflicts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Synonym"),
        header_cell("Resolves to"),
        header_cell("Shadowed"),
    ]);
    apply_table_style(&mut table);
    for conflict in conflicts {
        table.add_row(vec![
            Cell::new(&conflict.synonym).fg(Color::Yellow),
            Cell::new(&conflict.winner),
            dim_cell(conflict.shadowed.join(", ")),
        ]);
    }
    println!("Synonyms listed under more than one header:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn kind_cell(kind: MatchKind) -> Cell {
    match kind {
        MatchKind::Canonical => Cell::new(kind.as_str()).fg(Color::Green),
        MatchKind::Synonym => Cell::new(kind.as_str()).fg(Color::Blue),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
