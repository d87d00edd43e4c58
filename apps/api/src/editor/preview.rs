//! Read-only HTML preview of the editor tree.
//!
//! Stateless: the whole string is recomputed from the current tree on every
//! call. Resume trees are small, so full recomputation wins on simplicity
//! over incremental diffing.

use std::fmt::Write;

use super::{Editor, EntryNode, PersonalFields};

/// Renders the current tree to the preview HTML string.
///
/// Output is intentionally unescaped: every value comes from the same
/// user's own form inputs, not from third parties.
pub fn render_preview(editor: &Editor) -> String {
    let mut html = String::new();
    render_header(&mut html, &editor.personal);

    for section in &editor.sections {
        // An untitled section is skipped wholesale, entries included.
        if section.title.is_empty() {
            continue;
        }
        let _ = write!(html, "<h2>{}</h2>", section.title);
        for entry in &section.entries {
            render_entry(&mut html, entry);
        }
    }

    html
}

fn render_header(html: &mut String, personal: &PersonalFields) {
    let _ = write!(html, "<h1>{}</h1>", personal.name);
    html.push_str("<div class=\"contact-info\">");

    let contact_line = join_nonempty(&[
        personal.email.as_str(),
        personal.phone.as_str(),
        personal.location.as_str(),
    ]);
    html.push_str(&contact_line);

    let links: Vec<String> = [&personal.linkedin, &personal.github]
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| format!("<a href=\"https://{v}\">{v}</a>"))
        .collect();

    // The break only appears when there is content on both sides of it.
    if !contact_line.is_empty() && !links.is_empty() {
        html.push_str("<br>");
    }
    html.push_str(&links.join(" | "));
    html.push_str("</div>");
}

fn render_entry(html: &mut String, entry: &EntryNode) {
    // Entries with neither company nor position render nothing at all.
    if entry.company.is_empty() && entry.position.is_empty() {
        return;
    }

    html.push_str("<div class=\"preview-entry\">");
    html.push_str("<div class=\"entry-header\">");
    if !entry.company.is_empty() {
        let _ = write!(html, "<span class=\"company\">{}</span>", entry.company);
    }
    if !entry.location.is_empty() || !entry.duration.is_empty() {
        html.push_str("<span class=\"entry-meta\">");
        html.push_str(&join_nonempty(&[
            entry.location.as_str(),
            entry.duration.as_str(),
        ]));
        html.push_str("</span>");
    }
    html.push_str("</div>");

    if !entry.position.is_empty() {
        let _ = write!(html, "<div class=\"position\">{}</div>", entry.position);
    }

    let bullets: Vec<&str> = entry
        .points
        .iter()
        .map(|p| p.text.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if !bullets.is_empty() {
        html.push_str("<ul>");
        for bullet in bullets {
            let _ = write!(html, "<li>{bullet}</li>");
        }
        html.push_str("</ul>");
    }

    html.push_str("</div>");
}

/// Joins the non-empty values with `" | "`, so a separator only ever sits
/// between two present neighbours.
fn join_nonempty(values: &[&str]) -> String {
    values
        .iter()
        .filter(|v| !v.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" | ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Editor;

    fn editor_with_entry(company: &str, position: &str, title: &str) -> Editor {
        let mut editor = Editor::new();
        let section = editor.sections[0].id;
        editor.section_mut(section).unwrap().title = title.to_string();
        let entry = &mut editor.sections[0].entries[0];
        entry.company = company.to_string();
        entry.position = position.to_string();
        editor
    }

    #[test]
    fn test_contact_line_with_single_field_has_no_separator() {
        let mut editor = Editor::new();
        editor.personal.email = "a@b.com".to_string();
        let html = render_preview(&editor);
        assert!(html.contains("a@b.com"));
        assert!(!html.contains(" | "));
    }

    #[test]
    fn test_contact_line_separators_only_between_present_fields() {
        let mut editor = Editor::new();
        editor.personal.email = "a@b.com".to_string();
        editor.personal.location = "Berlin".to_string();
        let html = render_preview(&editor);
        assert!(html.contains("a@b.com | Berlin"));
    }

    #[test]
    fn test_social_break_requires_both_contact_and_social_content() {
        let mut editor = Editor::new();
        editor.personal.linkedin = "linkedin.com/in/jane".to_string();
        let html = render_preview(&editor);
        assert!(!html.contains("<br>"));
        assert!(html.contains("<a href=\"https://linkedin.com/in/jane\">linkedin.com/in/jane</a>"));

        editor.personal.email = "a@b.com".to_string();
        let html = render_preview(&editor);
        assert!(html.contains("<br>"));
    }

    #[test]
    fn test_social_links_joined_only_when_both_present() {
        let mut editor = Editor::new();
        editor.personal.linkedin = "linkedin.com/in/jane".to_string();
        editor.personal.github = "github.com/jane".to_string();
        let html = render_preview(&editor);
        assert!(html.contains("</a> | <a"));
    }

    #[test]
    fn test_untitled_section_is_skipped_entirely() {
        // Decided behavior: the title check happens before entry iteration,
        // so a company-bearing entry under an untitled section is omitted.
        let editor = editor_with_entry("X", "", "");
        let html = render_preview(&editor);
        assert!(!html.contains("<h2>"));
        assert!(!html.contains("X"));
    }

    #[test]
    fn test_entry_without_company_and_position_is_skipped() {
        let mut editor = editor_with_entry("", "", "Experience");
        editor.sections[0].entries[0].location = "Berlin".to_string();
        let html = render_preview(&editor);
        assert!(html.contains("<h2>Experience</h2>"));
        assert!(!html.contains("preview-entry"));
    }

    #[test]
    fn test_entry_meta_joined_only_when_both_present() {
        let mut editor = editor_with_entry("Acme", "Engineer", "Experience");
        {
            let entry = &mut editor.sections[0].entries[0];
            entry.location = "Berlin".to_string();
            entry.duration = "2020-2023".to_string();
        }
        let html = render_preview(&editor);
        assert!(html.contains("Berlin | 2020-2023"));

        editor.sections[0].entries[0].duration.clear();
        let html = render_preview(&editor);
        assert!(html.contains("<span class=\"entry-meta\">Berlin</span>"));
    }

    #[test]
    fn test_bullet_list_omitted_when_all_points_blank() {
        let mut editor = editor_with_entry("Acme", "", "Experience");
        editor.sections[0].entries[0].points[0].text = "   ".to_string();
        let html = render_preview(&editor);
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn test_bullet_texts_are_trimmed() {
        let mut editor = editor_with_entry("Acme", "", "Experience");
        editor.sections[0].entries[0].points[0].text = "  Built X  ".to_string();
        let html = render_preview(&editor);
        assert!(html.contains("<li>Built X</li>"));
    }

    #[test]
    fn test_deleting_a_section_removes_its_content_from_preview() {
        let mut editor = Editor::new();
        let kept = editor.add_section();
        editor.section_mut(kept).unwrap().title = "Kept".to_string();
        let doomed = editor.add_section();
        {
            let section = editor.section_mut(doomed).unwrap();
            section.title = "Doomed".to_string();
            section.entries[0].company = "Ghost Corp".to_string();
        }
        assert!(render_preview(&editor).contains("Ghost Corp"));

        editor.delete_section(doomed).unwrap();
        let html = render_preview(&editor);
        assert!(!html.contains("Doomed"));
        assert!(!html.contains("Ghost Corp"));
    }
}
