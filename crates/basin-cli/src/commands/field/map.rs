use basin_core::field::{self, FieldNode, GRID_COLUMNS, TileColor};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::ui;

/// Render the 16-tile grid. JSON and raw formats emit the node list; the
/// table format draws the grid itself.
pub fn run(flags: &GlobalFlags) -> anyhow::Result<()> {
    let nodes = field::field_nodes();
    match flags.format {
        OutputFormat::Json | OutputFormat::Raw => output(&nodes, flags.format),
        OutputFormat::Table => {
            println!("{}", render_map(&nodes, ui::prefs().color));
            Ok(())
        }
    }
}

/// Pure grid renderer, 4 tiles per row plus a legend line.
#[must_use]
pub fn render_map(nodes: &[FieldNode], color: bool) -> String {
    let mut lines: Vec<String> = nodes
        .chunks(GRID_COLUMNS)
        .map(|row| {
            row.iter()
                .map(|node| {
                    let marker = if node.marker.is_empty() {
                        " "
                    } else {
                        node.marker
                    };
                    let cell = format!("{:<4}{:>3} {}", node.id, node.weight, marker);
                    if color {
                        paint(&cell, node.color())
                    } else {
                        cell
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect();

    lines.push(String::new());
    lines.push("weight: <=10 green | 11-20 orange | >20 red".to_string());
    lines.join("\n")
}

fn paint(text: &str, color: TileColor) -> String {
    let code = match color {
        TileColor::Green => "32",
        TileColor::Orange => "33",
        TileColor::Red => "31",
    };
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
