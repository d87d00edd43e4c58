//! Maps a parsed resume onto a freshly built tree.

use crate::models::resume::ParsedResume;

use super::tree::{EntryNode, PointNode, SectionNode};
use super::Editor;

impl Editor {
    /// Replaces the whole tree with the parsed resume. Full replace, not a
    /// merge: existing sections are dropped first, so populating twice with
    /// the same data yields the same preview.
    ///
    /// Sections and entries come from the same factories as interactive
    /// adds, so each arrives with a seeded default child; population clears
    /// those before inserting the parsed children. Missing optional fields
    /// are already empty strings on the wire types.
    pub fn populate(&mut self, resume: &ParsedResume) {
        self.sections.clear();

        let info = &resume.personal_info;
        self.personal.name = info.name.clone();
        self.personal.email = info.contact.email.clone();
        self.personal.phone = info.contact.phone.clone();
        self.personal.location = info.contact.location.clone();
        self.personal.linkedin = info.contact.linkedin.clone();
        self.personal.github = info.contact.github.clone();

        for section in &resume.sections {
            let mut section_node = SectionNode::new(&mut self.ids);
            section_node.title = section.title.clone();
            section_node.entries.clear();

            for entry in &section.entries {
                let mut entry_node = EntryNode::new(&mut self.ids);
                entry_node.company = entry.company.clone();
                entry_node.location = entry.location.clone();
                entry_node.duration = entry.duration.clone();
                entry_node.position = entry.position.clone();
                entry_node.points.clear();

                for text in &entry.points {
                    let mut point = PointNode::new(&mut self.ids);
                    point.text = text.clone();
                    entry_node.points.push(point);
                }

                section_node.entries.push(entry_node);
            }

            self.sections.push(section_node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::render_preview;

    fn jane_doe() -> ParsedResume {
        serde_json::from_str(
            r#"{
                "personal_info": {
                    "name": "Jane Doe",
                    "contact": {"email": "jane@x.com"}
                },
                "sections": [{
                    "title": "Experience",
                    "entries": [{
                        "company": "Acme",
                        "position": "Engineer",
                        "points": ["Built X", "Shipped Y"]
                    }]
                }]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_populate_replaces_existing_sections() {
        let mut editor = Editor::new();
        editor.add_section();
        editor.add_section();
        editor.populate(&jane_doe());
        assert_eq!(editor.sections.len(), 1);
        assert_eq!(editor.sections[0].title, "Experience");
    }

    #[test]
    fn test_populate_discards_seeded_defaults() {
        let mut editor = Editor::new();
        editor.populate(&jane_doe());
        let section = &editor.sections[0];
        assert_eq!(section.entries.len(), 1);
        assert_eq!(section.entries[0].points.len(), 2);
        assert_eq!(section.entries[0].points[0].text, "Built X");
    }

    #[test]
    fn test_populate_is_idempotent_by_replacement() {
        let resume = jane_doe();
        let mut editor = Editor::new();
        editor.populate(&resume);
        let first = render_preview(&editor);
        editor.populate(&resume);
        let second = render_preview(&editor);
        assert_eq!(first, second);
    }

    #[test]
    fn test_populate_defaults_missing_fields_to_empty() {
        let resume: ParsedResume = serde_json::from_str(
            r#"{"sections": [{"title": "Skills", "entries": [{"company": "X"}]}]}"#,
        )
        .unwrap();
        let mut editor = Editor::new();
        editor.populate(&resume);
        assert!(editor.personal.name.is_empty());
        let entry = &editor.sections[0].entries[0];
        assert!(entry.duration.is_empty());
        assert!(entry.points.is_empty());
    }

    #[test]
    fn test_end_to_end_preview_from_parsed_resume() {
        let mut editor = Editor::new();
        editor.populate(&jane_doe());
        let html = render_preview(&editor);
        assert!(html.contains("<h1>Jane Doe</h1>"));
        assert!(html.contains("jane@x.com"));
        assert!(html.contains("<h2>Experience</h2>"));
        assert!(html.contains("Acme"));
        assert!(html.contains("<div class=\"position\">Engineer</div>"));
        assert!(html.contains("<li>Built X</li>"));
        assert!(html.contains("<li>Shipped Y</li>"));
    }
}
