//! The static field-map mockup model.
//!
//! Sixteen fixed nodes `Z1`..`Z16`, generated once and never stored. Weight
//! is the zone ordinal doubled; the marker emoji follows modulo rules on the
//! 0-based position, with the mod-5 rule winning by construction order.
//! Nothing here reads sensors or touches the zone store; the grid is a
//! presentation fixture, not monitoring data.

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

/// Number of nodes in the mockup grid.
pub const NODE_COUNT: u32 = 16;

/// Columns per row when the grid is rendered.
pub const GRID_COLUMNS: usize = 4;

/// One tile of the mockup grid.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct FieldNode {
    pub id: String,
    pub weight: u32,
    pub marker: &'static str,
}

impl FieldNode {
    /// Color bucket for this node's tile.
    #[must_use]
    pub const fn color(&self) -> TileColor {
        TileColor::for_weight(self.weight)
    }
}

/// Background color bucket of a rendered tile.
#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TileColor {
    Green,
    Orange,
    Red,
}

impl TileColor {
    /// Threshold rule: weight above 20 is red, above 10 orange, else green.
    #[must_use]
    pub const fn for_weight(weight: u32) -> Self {
        if weight > 20 {
            Self::Red
        } else if weight > 10 {
            Self::Orange
        } else {
            Self::Green
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the 16 fixed nodes.
#[must_use]
pub fn field_nodes() -> Vec<FieldNode> {
    (0..NODE_COUNT)
        .map(|i| FieldNode {
            id: format!("Z{}", i + 1),
            weight: (i + 1) * 2,
            marker: if i % 5 == 0 {
                "💧"
            } else if i % 7 == 0 {
                "🐛"
            } else {
                ""
            },
        })
        .collect()
}

/// Whether `id` names one of the 16 fixed nodes.
#[must_use]
pub fn is_node_id(id: &str) -> bool {
    id.strip_prefix('Z')
        .and_then(|n| n.parse::<u32>().ok())
        .is_some_and(|n| (1..=NODE_COUNT).contains(&n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_sixteen_nodes_with_doubled_weights() {
        let nodes = field_nodes();
        assert_eq!(nodes.len(), 16);
        for (i, node) in nodes.iter().enumerate() {
            let ordinal = u32::try_from(i).unwrap() + 1;
            assert_eq!(node.id, format!("Z{ordinal}"));
            assert_eq!(node.weight, ordinal * 2);
        }
    }

    #[test]
    fn color_buckets_follow_thresholds() {
        assert_eq!(TileColor::for_weight(2), TileColor::Green);
        assert_eq!(TileColor::for_weight(10), TileColor::Green);
        assert_eq!(TileColor::for_weight(12), TileColor::Orange);
        assert_eq!(TileColor::for_weight(20), TileColor::Orange);
        assert_eq!(TileColor::for_weight(22), TileColor::Red);
        assert_eq!(TileColor::for_weight(32), TileColor::Red);
    }

    #[test]
    fn every_node_color_matches_its_weight() {
        for node in field_nodes() {
            let expected = if node.weight > 20 {
                TileColor::Red
            } else if node.weight > 10 {
                TileColor::Orange
            } else {
                TileColor::Green
            };
            assert_eq!(node.color(), expected, "node {}", node.id);
        }
    }

    #[test]
    fn markers_follow_modulo_rules() {
        let nodes = field_nodes();
        let droplets: Vec<&str> = nodes
            .iter()
            .filter(|n| n.marker == "💧")
            .map(|n| n.id.as_str())
            .collect();
        let bugs: Vec<&str> = nodes
            .iter()
            .filter(|n| n.marker == "🐛")
            .map(|n| n.id.as_str())
            .collect();

        assert_eq!(droplets, ["Z1", "Z6", "Z11", "Z16"]);
        assert_eq!(bugs, ["Z8", "Z15"]);
    }

    #[test]
    fn droplet_rule_wins_over_bug_rule() {
        // Position 0 matches both mod 5 and mod 7; construction order gives 💧.
        let nodes = field_nodes();
        assert_eq!(nodes[0].marker, "💧");
    }

    #[test]
    fn unmarked_nodes_are_empty() {
        let nodes = field_nodes();
        assert_eq!(nodes[1].marker, "");
        assert_eq!(nodes[12].marker, "");
    }

    #[test]
    fn node_id_validation() {
        assert!(is_node_id("Z1"));
        assert!(is_node_id("Z16"));
        assert!(!is_node_id("Z0"));
        assert!(!is_node_id("Z17"));
        assert!(!is_node_id("A1"));
        assert!(!is_node_id("Z"));
        assert!(!is_node_id(""));
    }
}
