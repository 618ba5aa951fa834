//! Text rendering of the territory map

use std::io::{self, Write};

use crate::core::types::{COLOR_CAPACITY, NAME_CAPACITY};
use crate::territory::TerritoryStore;

const ID_WIDTH: usize = 5;
/// Wide enough for any `u32` troop count
const TROOPS_WIDTH: usize = 10;

/// Write the map as a fixed-width table, one row per territory in storage
/// order.
pub fn display<W: Write>(store: &TerritoryStore, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== CURRENT MAP ===")?;
    writeln!(
        out,
        "{:<idw$} | {:<nw$} | {:<cw$} | {:<tw$}",
        "ID",
        "NAME",
        "ARMY COLOR",
        "TROOPS",
        idw = ID_WIDTH,
        nw = NAME_CAPACITY,
        cw = COLOR_CAPACITY,
        tw = TROOPS_WIDTH,
    )?;
    writeln!(out, "{}", "-".repeat(table_width()))?;

    for (id, territory) in store.iter() {
        writeln!(
            out,
            "{:<idw$} | {:<nw$} | {:<cw$} | {:<tw$}",
            id.0,
            territory.name,
            territory.army_color,
            territory.troops,
            idw = ID_WIDTH,
            nw = NAME_CAPACITY,
            cw = COLOR_CAPACITY,
            tw = TROOPS_WIDTH,
        )?;
    }
    Ok(())
}

/// Render the map into a string
pub fn render(store: &TerritoryStore) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = display(store, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

fn table_width() -> usize {
    // Three " | " separators between four columns
    ID_WIDTH + NAME_CAPACITY + COLOR_CAPACITY + TROOPS_WIDTH + 3 * 3
}
