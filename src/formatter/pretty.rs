use crate::types;

use comfy_table::{presets::NOTHING, Attribute, Cell, CellAlignment, Color, Table};
use std::fmt::Display;

const COLUMNS: [&str; 5] = [
    "name",
    "webhook",
    "replicas",
    "has PDB",
    "kube-system ignored",
];

pub struct Pretty {
    result: types::FullResult,
}

impl Pretty {
    pub fn new(result: types::FullResult) -> Self {
        Self { result }
    }
}

/// Green when the value is the safe one, red otherwise.
fn flag(value: bool, safe: bool) -> Cell {
    let color = if value == safe {
        Color::AnsiValue(34)
    } else {
        Color::Red
    };
    let symbol = if value { "✔" } else { "✖" };
    Cell::new(symbol)
        .fg(color)
        .set_alignment(CellAlignment::Center)
}

impl Display for Pretty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut table = Table::new();
        table.load_preset(NOTHING);

        let show_all = self.result.config.show_all;
        let column_count = if show_all {
            COLUMNS.len() + 2
        } else {
            COLUMNS.len()
        };

        let mut titles = Vec::with_capacity(column_count);
        titles.extend(
            COLUMNS
                .iter()
                .map(|t| Cell::new(t).add_attribute(Attribute::Bold)),
        );
        if show_all {
            titles.push(Cell::new("ignore failures").add_attribute(Attribute::Bold));
            titles.push(Cell::new("risky").add_attribute(Attribute::Bold));
        }
        table.set_header(titles);

        self.result.items.iter().for_each(|record| {
            let mut row: Vec<Cell> = Vec::with_capacity(column_count);
            row.push(Cell::new(&record.configuration_name));
            row.push(Cell::new(&record.webhook_name));
            let replicas = Cell::new(record.backing_replica_count)
                .set_alignment(CellAlignment::Right);
            if record.backing_replica_count < 2 {
                row.push(replicas.fg(Color::Red));
            } else {
                row.push(replicas);
            }
            row.push(flag(record.has_disruption_budget, true));
            row.push(flag(record.kube_system_excluded, true));
            if show_all {
                row.push(flag(record.failure_policy_ignores, true));
                row.push(flag(record.is_risky(), false));
            }
            table.add_row(row);
        });

        table.fmt(f)
    }
}
