use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use typepass::cost::BigramCostTable;
use typepass::layouts::{Topology, LETTER_ROWS};

/// Square letter-by-letter grid, letters in keyboard row order.
pub fn print_cost_matrix(costs: &BigramCostTable, topology: Topology) {
    println!("\nBigram costs: {} (max {})", topology, costs.max_cost());

    let letters: Vec<char> = LETTER_ROWS
        .iter()
        .flat_map(|row| row.chars())
        .filter(|&c| costs.is_registered(c as u8))
        .collect();

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let mut header = vec![Cell::new("")];
    header.extend(
        letters
            .iter()
            .map(|c| Cell::new(c).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    for &a in &letters {
        let mut row = vec![Cell::new(a).add_attribute(Attribute::Bold)];
        for &b in &letters {
            let cell = match costs.cost_chars(a, b) {
                Some(0) => Cell::new("·").fg(Color::DarkGrey),
                Some(1) => Cell::new(1).fg(Color::Green),
                Some(c) => Cell::new(c),
                None => Cell::new("-"),
            };
            row.push(cell.set_alignment(CellAlignment::Right));
        }
        table.add_row(row);
    }
    println!("{}", table);
}
