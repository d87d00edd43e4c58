//! Node identifiers for the editor tree.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// The three node kinds of the editor tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Section,
    Entry,
    Point,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Section => "section",
            NodeKind::Entry => "entry",
            NodeKind::Point => "point",
        }
    }
}

/// A unique node identifier, rendered as `section-N` / `entry-N` / `point-N`.
/// Ids scope lookups only; they carry no referential integrity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    kind: NodeKind,
    seq: u64,
}

impl NodeId {
    pub fn kind(self) -> NodeKind {
        self.kind
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.name(), self.seq)
    }
}

impl Serialize for NodeId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed node id: {0}")]
pub struct ParseNodeIdError(String);

impl FromStr for NodeId {
    type Err = ParseNodeIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, seq) = s
            .rsplit_once('-')
            .ok_or_else(|| ParseNodeIdError(s.to_string()))?;
        let kind = match prefix {
            "section" => NodeKind::Section,
            "entry" => NodeKind::Entry,
            "point" => NodeKind::Point,
            _ => return Err(ParseNodeIdError(s.to_string())),
        };
        let seq = seq.parse().map_err(|_| ParseNodeIdError(s.to_string()))?;
        Ok(NodeId { kind, seq })
    }
}

/// Three monotonically increasing counters, one per node kind. Ids are never
/// reused, even after deletion, so add/delete cycles cannot collide.
#[derive(Debug, Default)]
pub struct IdAllocator {
    section: u64,
    entry: u64,
    point: u64,
}

impl IdAllocator {
    pub fn next(&mut self, kind: NodeKind) -> NodeId {
        let counter = match kind {
            NodeKind::Section => &mut self.section,
            NodeKind::Entry => &mut self.entry,
            NodeKind::Point => &mut self.point,
        };
        let seq = *counter;
        *counter += 1;
        NodeId { kind, seq }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_strictly_increasing_per_kind() {
        let mut ids = IdAllocator::default();
        let a = ids.next(NodeKind::Section);
        let b = ids.next(NodeKind::Section);
        let c = ids.next(NodeKind::Section);
        assert_eq!(a.to_string(), "section-0");
        assert_eq!(b.to_string(), "section-1");
        assert_eq!(c.to_string(), "section-2");
    }

    #[test]
    fn test_counters_are_independent_per_kind() {
        let mut ids = IdAllocator::default();
        ids.next(NodeKind::Section);
        ids.next(NodeKind::Section);
        let entry = ids.next(NodeKind::Entry);
        let point = ids.next(NodeKind::Point);
        assert_eq!(entry.to_string(), "entry-0");
        assert_eq!(point.to_string(), "point-0");
    }

    #[test]
    fn test_node_id_round_trips_through_display() {
        let mut ids = IdAllocator::default();
        let id = ids.next(NodeKind::Entry);
        let parsed: NodeId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_unknown_prefix_and_garbage() {
        assert!("row-3".parse::<NodeId>().is_err());
        assert!("section-".parse::<NodeId>().is_err());
        assert!("section".parse::<NodeId>().is_err());
        assert!("".parse::<NodeId>().is_err());
    }

    #[test]
    fn test_parse_validates_kind() {
        let id: NodeId = "point-12".parse().unwrap();
        assert_eq!(id.kind(), NodeKind::Point);
    }
}
