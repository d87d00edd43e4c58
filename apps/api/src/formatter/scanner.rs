//! Line-oriented formatter for parsed resume text.
//!
//! Turns `===`-underlined headings and `•` bullets into display HTML. A
//! scanner with explicit states rather than chained text substitutions, so
//! section containers are always balanced.

/// Whether a section container is currently open.
#[derive(Debug, PartialEq, Eq)]
enum State {
    Outside,
    InSection,
}

/// Formats plain parsed text into display HTML.
///
/// Line grammar:
/// - a non-blank line whose successor is three-or-more `=` characters opens
///   a new section: any open container is closed, a `section-title` heading
///   is emitted, and a `section-content` container is opened;
/// - a line starting with `•` becomes a bullet element carrying its text in
///   a `data-original` attribute (the editable source of truth, distinct
///   from the rendered `• text` display);
/// - a blank line becomes a break;
/// - anything else passes through verbatim.
///
/// The final open container is closed at end of input.
pub fn format_parsed_text(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut html = String::new();
    let mut state = State::Outside;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        let heading = !line.trim().is_empty()
            && i + 1 < lines.len()
            && is_heading_underline(lines[i + 1]);
        if heading {
            if state == State::InSection {
                html.push_str("</div>");
            }
            html.push_str(&format!(
                "<h2 class=\"section-title\">{}</h2>",
                line.trim()
            ));
            html.push_str("<div class=\"section-content\">");
            state = State::InSection;
            i += 2; // consume the underline as well
            continue;
        }

        if let Some(rest) = line.strip_prefix('•') {
            let text = rest.trim();
            html.push_str(&format!(
                "<div class=\"bullet-point\" data-original=\"{text}\">• {text}</div>"
            ));
        } else if line.trim().is_empty() {
            html.push_str("<br>");
        } else {
            html.push_str(line);
            html.push('\n');
        }
        i += 1;
    }

    if state == State::InSection {
        html.push_str("</div>");
    }
    html
}

fn is_heading_underline(line: &str) -> bool {
    let line = line.trim();
    line.len() >= 3 && line.chars().all(|c| c == '=')
}
