use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::transaction::Transaction;

/// Attribute payload carried by one edge of the spider map. Every edge keeps
/// the full detail of the transaction it came from, so two transfers between
/// the same pair of accounts remain distinguishable.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EdgePayload {
    pub(crate) amount: f32,
    pub(crate) timestamp: String,
    pub(crate) ip: String,
    pub(crate) email: String,
    pub(crate) phone: String,
    pub(crate) from_holder: String,
    pub(crate) from_bank: String,
    pub(crate) to_holder: String,
    pub(crate) to_bank: String,
}

impl From<&Transaction> for EdgePayload {
    fn from(t: &Transaction) -> EdgePayload {
        EdgePayload {
            amount: t.amount,
            timestamp: t.timestamp.clone(),
            ip: t.ip.clone(),
            email: t.email.clone(),
            phone: t.phone.clone(),
            from_holder: t.from_holder.clone(),
            from_bank: t.from_bank.clone(),
            to_holder: t.to_holder.clone(),
            to_bank: t.to_bank.clone(),
        }
    }
}

/// Directed multi-graph of the transactions surrounding one focus account.
/// Nodes are account ids; each transaction contributes its own edge, so
/// parallel edges between the same ordered pair are kept apart. The focus
/// account id travels with the graph; a renderer needs nothing else to
/// single out the center of the map.
pub(crate) struct SpiderGraph {
    graph: DiGraph<String, EdgePayload>,
    node_map: HashMap<String, NodeIndex>,
    focus: String,
}

/// Build the spider map from the filtered transactions. Endpoint nodes are
/// created on first reference by an edge; an empty input therefore produces
/// a graph with no nodes and no edges.
pub(crate) fn build_graph(transactions: &[Transaction], focus_account: &str) -> SpiderGraph {
    let mut spider = SpiderGraph {
        graph: DiGraph::new(),
        node_map: HashMap::new(),
        focus: focus_account.to_string(),
    };

    for t in transactions {
        let from = spider.get_or_add_node(&t.from_account);
        let to = spider.get_or_add_node(&t.to_account);
        spider.graph.add_edge(from, to, EdgePayload::from(t));
    }

    spider
}

impl SpiderGraph {
    fn get_or_add_node(&mut self, account: &str) -> NodeIndex {
        if let Some(idx) = self.node_map.get(account) {
            return *idx;
        }

        let idx = self.graph.add_node(account.to_string());
        self.node_map.insert(account.to_string(), idx);
        idx
    }

    pub(crate) fn focus(&self) -> &str {
        &self.focus
    }

    pub(crate) fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Payloads of every edge from one account to another, in insertion
    /// order. Parallel transfers show up as separate entries.
    pub(crate) fn edges_between(&self, from: &str, to: &str) -> Vec<&EdgePayload> {
        match (self.node_map.get(from), self.node_map.get(to)) {
            (Some(&from_idx), Some(&to_idx)) => self
                .graph
                .edges_connecting(from_idx, to_idx)
                .map(|e| e.weight())
                .collect(),
            _ => vec![],
        }
    }

    /// The underlying petgraph structure, for layout and rendering.
    pub(crate) fn graph(&self) -> &DiGraph<String, EdgePayload> {
        &self.graph
    }
}
