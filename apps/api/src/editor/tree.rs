//! Node constructors for the three-level editor tree.
//!
//! Each kind has a typed factory that allocates its id and, for sections and
//! entries, seeds exactly one default child. No container is ever empty at
//! creation time, so the preview can simply skip empty content instead of
//! special-casing it.

use super::ids::{IdAllocator, NodeId, NodeKind};

/// One bullet line within an entry.
#[derive(Debug, Clone)]
pub struct PointNode {
    pub id: NodeId,
    pub text: String,
}

impl PointNode {
    pub fn new(ids: &mut IdAllocator) -> Self {
        Self {
            id: ids.next(NodeKind::Point),
            text: String::new(),
        }
    }
}

/// One job/role/item within a section. Owns its points.
#[derive(Debug, Clone)]
pub struct EntryNode {
    pub id: NodeId,
    pub company: String,
    pub position: String,
    pub location: String,
    pub duration: String,
    pub points: Vec<PointNode>,
}

impl EntryNode {
    /// A new entry seeds one default point.
    pub fn new(ids: &mut IdAllocator) -> Self {
        let id = ids.next(NodeKind::Entry);
        let first_point = PointNode::new(ids);
        Self {
            id,
            company: String::new(),
            position: String::new(),
            location: String::new(),
            duration: String::new(),
            points: vec![first_point],
        }
    }
}

/// A top-level resume grouping ("Experience", "Education", ...). Owns its
/// entries.
#[derive(Debug, Clone)]
pub struct SectionNode {
    pub id: NodeId,
    pub title: String,
    pub entries: Vec<EntryNode>,
}

impl SectionNode {
    /// A new section seeds one default entry (which in turn seeds a point).
    pub fn new(ids: &mut IdAllocator) -> Self {
        let id = ids.next(NodeKind::Section);
        let first_entry = EntryNode::new(ids);
        Self {
            id,
            title: String::new(),
            entries: vec![first_entry],
        }
    }
}
