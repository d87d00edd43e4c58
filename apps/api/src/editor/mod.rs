//! The editor tree: sections → entries → points, plus the personal-info
//! fields above them. A live, strictly hierarchical mirror of the resume
//! being edited — every entry belongs to exactly one section, every point to
//! exactly one entry, and deleting a node drops its whole subtree.

pub mod handlers;
mod ids;
mod populate;
mod preview;
mod tree;

pub use ids::{IdAllocator, NodeId, NodeKind, ParseNodeIdError};
pub use preview::render_preview;
pub use tree::{EntryNode, PointNode, SectionNode};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditorError {
    #[error("no such section: {0}")]
    SectionNotFound(NodeId),

    #[error("no such entry: {0}")]
    EntryNotFound(NodeId),

    #[error("no such point: {0}")]
    PointNotFound(NodeId),
}

/// The name and contact fields rendered above the section tree.
#[derive(Debug, Clone, Default)]
pub struct PersonalFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
}

/// One resume under edit.
#[derive(Debug, Default)]
pub struct Editor {
    ids: IdAllocator,
    pub personal: PersonalFields,
    pub sections: Vec<SectionNode>,
}

impl Editor {
    /// A fresh editor starts with one seeded section, like the editor page
    /// does on load.
    pub fn new() -> Self {
        let mut editor = Self::default();
        editor.add_section();
        editor
    }

    pub fn add_section(&mut self) -> NodeId {
        let section = SectionNode::new(&mut self.ids);
        let id = section.id;
        self.sections.push(section);
        id
    }

    pub fn add_entry(&mut self, section_id: NodeId) -> Result<NodeId, EditorError> {
        let idx = self
            .sections
            .iter()
            .position(|s| s.id == section_id)
            .ok_or(EditorError::SectionNotFound(section_id))?;
        let entry = EntryNode::new(&mut self.ids);
        let id = entry.id;
        self.sections[idx].entries.push(entry);
        Ok(id)
    }

    pub fn add_point(&mut self, entry_id: NodeId) -> Result<NodeId, EditorError> {
        let (s, e) = self
            .entry_position(entry_id)
            .ok_or(EditorError::EntryNotFound(entry_id))?;
        let point = PointNode::new(&mut self.ids);
        let id = point.id;
        self.sections[s].entries[e].points.push(point);
        Ok(id)
    }

    /// Deletes any node by id, dispatching on its kind. Removes the entire
    /// subtree; there is no undo.
    pub fn delete(&mut self, id: NodeId) -> Result<(), EditorError> {
        match id.kind() {
            NodeKind::Section => self.delete_section(id),
            NodeKind::Entry => self.delete_entry(id),
            NodeKind::Point => self.delete_point(id),
        }
    }

    pub fn delete_section(&mut self, id: NodeId) -> Result<(), EditorError> {
        let idx = self
            .sections
            .iter()
            .position(|s| s.id == id)
            .ok_or(EditorError::SectionNotFound(id))?;
        self.sections.remove(idx);
        Ok(())
    }

    pub fn delete_entry(&mut self, id: NodeId) -> Result<(), EditorError> {
        let (s, e) = self
            .entry_position(id)
            .ok_or(EditorError::EntryNotFound(id))?;
        self.sections[s].entries.remove(e);
        Ok(())
    }

    pub fn delete_point(&mut self, id: NodeId) -> Result<(), EditorError> {
        for section in &mut self.sections {
            for entry in &mut section.entries {
                if let Some(p) = entry.points.iter().position(|pt| pt.id == id) {
                    entry.points.remove(p);
                    return Ok(());
                }
            }
        }
        Err(EditorError::PointNotFound(id))
    }

    pub fn section_mut(&mut self, id: NodeId) -> Result<&mut SectionNode, EditorError> {
        self.sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(EditorError::SectionNotFound(id))
    }

    pub fn entry_mut(&mut self, id: NodeId) -> Result<&mut EntryNode, EditorError> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.entries.iter_mut())
            .find(|e| e.id == id)
            .ok_or(EditorError::EntryNotFound(id))
    }

    pub fn point_mut(&mut self, id: NodeId) -> Result<&mut PointNode, EditorError> {
        self.sections
            .iter_mut()
            .flat_map(|s| s.entries.iter_mut())
            .flat_map(|e| e.points.iter_mut())
            .find(|p| p.id == id)
            .ok_or(EditorError::PointNotFound(id))
    }

    fn entry_position(&self, id: NodeId) -> Option<(usize, usize)> {
        self.sections.iter().enumerate().find_map(|(s, section)| {
            section
                .entries
                .iter()
                .position(|e| e.id == id)
                .map(|e| (s, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fresh_editor_has_one_seeded_section() {
        let editor = Editor::new();
        assert_eq!(editor.sections.len(), 1);
        assert_eq!(editor.sections[0].entries.len(), 1);
        assert_eq!(editor.sections[0].entries[0].points.len(), 1);
    }

    #[test]
    fn test_every_node_has_exactly_one_parent_after_add_delete_churn() {
        let mut editor = Editor::new();
        let s1 = editor.add_section();
        let s2 = editor.add_section();
        let e1 = editor.add_entry(s1).unwrap();
        editor.add_entry(s2).unwrap();
        editor.add_point(e1).unwrap();
        editor.delete_section(s2).unwrap();
        let e2 = editor.add_entry(s1).unwrap();
        editor.add_point(e2).unwrap();
        editor.delete_entry(e1).unwrap();

        // No id appears twice anywhere in the tree.
        let mut seen = HashSet::new();
        for section in &editor.sections {
            assert!(seen.insert(section.id));
            for entry in &section.entries {
                assert!(seen.insert(entry.id));
                for point in &entry.points {
                    assert!(seen.insert(point.id));
                }
            }
        }
    }

    #[test]
    fn test_ids_are_never_reused_after_deletion() {
        let mut editor = Editor::new();
        let s1 = editor.add_section();
        editor.delete_section(s1).unwrap();
        let s2 = editor.add_section();
        assert_ne!(s1, s2);
    }

    #[test]
    fn test_delete_section_removes_entire_subtree() {
        let mut editor = Editor::new();
        let s = editor.add_section();
        let e = editor.add_entry(s).unwrap();
        let p = editor.add_point(e).unwrap();
        editor.delete_section(s).unwrap();
        assert_eq!(editor.entry_mut(e).unwrap_err(), EditorError::EntryNotFound(e));
        assert_eq!(editor.point_mut(p).unwrap_err(), EditorError::PointNotFound(p));
    }

    #[test]
    fn test_delete_dispatches_on_id_kind() {
        let mut editor = Editor::new();
        let s = editor.add_section();
        let e = editor.add_entry(s).unwrap();
        let p = editor.add_point(e).unwrap();
        editor.delete(p).unwrap();
        editor.delete(e).unwrap();
        editor.delete(s).unwrap();
    }

    #[test]
    fn test_add_entry_to_unknown_section_fails() {
        let mut editor = Editor::new();
        let s = editor.add_section();
        editor.delete_section(s).unwrap();
        assert_eq!(
            editor.add_entry(s),
            Err(EditorError::SectionNotFound(s))
        );
    }
}
