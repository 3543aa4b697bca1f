use comfy_table::{Cell, CellAlignment, Color, Table, TableComponent};
use petgraph::visit::EdgeRef;

use crate::config::Config;
use crate::graph::{EdgePayload, SpiderGraph};
use crate::transaction::Transaction;

/// Build the display table for the filtered transactions. Column names and
/// order are a contract with downstream consumers; the focus account's cells
/// are colored so the center of the map stands out in the row listing too.
pub(crate) fn transactions_table(transactions: &[Transaction], focus_account: &str) -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);

    table.set_header(vec![
        "Sender Name", "Sender Account", "Sender Bank",
        "Receiver Name", "Receiver Account", "Receiver Bank",
        "amount", "Transaction Date", "ip", "email", "phone",
    ]);

    for t in transactions {
        table.add_row(vec![
            Cell::new(t.from_holder.as_str()),
            account_cell(&t.from_account, focus_account),
            Cell::new(t.from_bank.as_str()),
            Cell::new(t.to_holder.as_str()),
            account_cell(&t.to_account, focus_account),
            Cell::new(t.to_bank.as_str()),
            Cell::new(format_amount(t.amount).as_str()).set_alignment(CellAlignment::Right),
            Cell::new(t.timestamp.as_str()),
            Cell::new(t.ip.as_str()),
            Cell::new(t.email.as_str()),
            Cell::new(t.phone.as_str()),
        ]);
    }

    table
}

fn account_cell(account: &str, focus_account: &str) -> Cell {
    if account == focus_account {
        Cell::new(account).fg(Color::Red)
    } else {
        Cell::new(account)
    }
}

/// Format $ amount
fn format_amount(amount: f32) -> String {
    format!("{amount:.2}")
}

/// Render the spider map as a Graphviz DOT string. Exactly one node, the
/// focus account, gets the focus fill color; every edge is labelled with
/// its amount. Layout is graphviz's problem.
pub(crate) fn to_dot(spider: &SpiderGraph, config: &Config) -> String {
    let graph = spider.graph();
    let mut out = String::new();
    out.push_str("digraph spider {\n");
    out.push_str("  node [fontname=\"Helvetica\", fontsize=10];\n");
    out.push_str("  edge [fontname=\"Helvetica\", fontsize=8];\n");
    out.push('\n');

    for idx in graph.node_indices() {
        let account = &graph[idx];
        let color = if account == spider.focus() {
            &config.focus_color
        } else {
            &config.node_color
        };
        out.push_str(&format!(
            "  n{} [label=\"{}\" style=filled fillcolor=\"{}\"];\n",
            idx.index(),
            escape_dot(account),
            color,
        ));
    }

    out.push('\n');

    for edge in graph.edge_references() {
        let payload = edge.weight();
        out.push_str(&format!(
            "  n{} -> n{} [label=\"{}\" tooltip=\"{}\"];\n",
            edge.source().index(),
            edge.target().index(),
            format_amount(payload.amount),
            escape_dot(&edge_tooltip(payload)),
        ));
    }

    out.push_str("}\n");
    out
}

/// Hover detail for an edge: who moved the money, when, and through which
/// contact points. Keeps the whole attribute payload reachable from the
/// rendered map.
fn edge_tooltip(p: &EdgePayload) -> String {
    format!(
        "{} ({}) -> {} ({}) at {} | ip {} email {} phone {}",
        p.from_holder, p.from_bank, p.to_holder, p.to_bank, p.timestamp, p.ip, p.email, p.phone
    )
}

fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
