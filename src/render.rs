// 🖼️ Renderer - full re-render of the board
// HTML for the web page, plain text for the command line

use crate::board::Board;
use crate::dispatch::Command;
use crate::money::format_money;
use crate::person::Person;

pub const HEADING_HTML: &str = "<h2><strong>Person</strong> Wealth</h2>";

/// The list area: fixed heading, one div per person, then one div per summary.
pub fn render_html(people: &[Person], summaries: &[f64]) -> String {
    let mut html = String::from(HEADING_HTML);

    for person in people {
        html.push_str(&format!(
            "<div class=\"person\"><strong>{}</strong> {}</div>",
            escape_html(&person.name),
            format_money(person.money)
        ));
    }

    for total in summaries {
        html.push_str(&render_summary_html(*total));
    }

    html
}

/// One appended "Total Wealth" element.
pub fn render_summary_html(total: f64) -> String {
    format!(
        "<div><h3>Total Wealth: <strong>{}</strong></h3></div>",
        format_money(total)
    )
}

/// Complete page: one form button per command plus the rendered list.
pub fn render_page(board: &Board, error: Option<&str>) -> String {
    let buttons: String = Command::ALL
        .iter()
        .map(|command| {
            format!(
                "<form method=\"post\" action=\"/commands/{}\"><button type=\"submit\">{}</button></form>",
                command.as_str(),
                command.label()
            )
        })
        .collect();

    let error_html = error
        .map(|message| format!("<p class=\"error\">{}</p>", escape_html(message)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n<title>Wealth Board</title>\n</head>\n<body>\n<h1>Wealth Board</h1>\n<div class=\"container\">\n<aside>{}</aside>\n{}\n<main id=\"main\">{}</main>\n</div>\n</body>\n</html>\n",
        buttons,
        error_html,
        render_html(board.people(), board.summaries())
    )
}

/// Plain-text version of `render_html` for terminals and logs.
pub fn render_text(people: &[Person], summaries: &[f64]) -> String {
    let width = people
        .iter()
        .map(|person| person.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Person".len());

    let mut lines = vec![format!("{:<width$}  {}", "Person", "Wealth", width = width)];
    for person in people {
        lines.push(format!(
            "{:<width$}  {}",
            person.name,
            format_money(person.money),
            width = width
        ));
    }
    for total in summaries {
        lines.push(format!("Total Wealth: {}", format_money(*total)));
    }

    lines.join("\n")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_html_empty_is_heading_only() {
        assert_eq!(render_html(&[], &[]), HEADING_HTML);
    }

    #[test]
    fn test_render_html_people_and_summaries() {
        let people = vec![
            Person::new("Jane Doe", 1_234_567.0),
            Person::new("John Roe", 12.5),
        ];
        let html = render_html(&people, &[1_234_579.5]);

        assert_eq!(
            html,
            "<h2><strong>Person</strong> Wealth</h2>\
             <div class=\"person\"><strong>Jane Doe</strong> $1,234,567.00</div>\
             <div class=\"person\"><strong>John Roe</strong> $12.50</div>\
             <div><h3>Total Wealth: <strong>$1,234,579.50</strong></h3></div>"
        );
    }

    #[test]
    fn test_render_html_escapes_names() {
        let html = render_html(&[Person::new("<b>Bob</b> & Co", 1.0)], &[]);
        assert!(html.contains("&lt;b&gt;Bob&lt;/b&gt; &amp; Co"));
        assert!(!html.contains("<b>Bob"));
    }

    #[test]
    fn test_render_page_has_every_button() {
        let board = Board::with_people(vec![Person::new("Jane Doe", 5.0)]);
        let page = render_page(&board, Some("fetch failed"));

        for command in Command::ALL {
            assert!(page.contains(&format!("action=\"/commands/{}\"", command.as_str())));
        }
        assert!(page.contains("<p class=\"error\">fetch failed</p>"));
        assert!(page.contains("<strong>Jane Doe</strong> $5.00"));
    }

    #[test]
    fn test_render_text() {
        let people = vec![Person::new("Al", 1000.0), Person::new("Beatrice", 2.0)];
        let text = render_text(&people, &[1002.0]);

        assert_eq!(
            text,
            "Person    Wealth\n\
             Al        $1,000.00\n\
             Beatrice  $2.00\n\
             Total Wealth: $1,002.00"
        );
    }
}
