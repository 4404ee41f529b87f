use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use typepass::api::{Passphrase, PhraseCost};
use typepass::config::ComposerParams;

pub fn passphrase(p: &Passphrase, params: &ComposerParams) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Passphrase").add_attribute(Attribute::Bold),
        Cell::new(&p.description).fg(Color::Green).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Words"), Cell::new(&p.spaced)]);
    table.add_row(vec![
        Cell::new("Length"),
        Cell::new(format!(
            "{} ({}..={})",
            p.length, params.min_len, params.max_len
        )),
    ]);
    table.add_row(vec![Cell::new("Word count"), Cell::new(p.word_count)]);
    table.add_row(vec![
        Cell::new(format!("Cost ({})", params.objective)),
        Cell::new(p.cost).fg(Color::Cyan),
    ]);

    println!("\n{}", table);
}

pub fn phrase_costs(costs: &[PhraseCost]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Phrase").add_attribute(Attribute::Bold),
        Cell::new("Words"),
        Cell::new("Gaps"),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Per Letter"),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for c in costs {
        let letters: usize = c.words.iter().map(|w| w.len()).sum();
        let per_letter = if letters > 0 {
            c.total as f32 / letters as f32
        } else {
            0.0
        };
        let word_total: u32 = c.word_costs.iter().sum();
        let gap_total: u32 = c.gap_costs.iter().sum();

        table.add_row(vec![
            Cell::new(&c.phrase).add_attribute(Attribute::Bold),
            Cell::new(word_total),
            Cell::new(gap_total),
            Cell::new(c.total).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", per_letter)),
        ]);
    }
    println!("\n{}", table);
}
