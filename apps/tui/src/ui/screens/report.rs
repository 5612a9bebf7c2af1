use crate::app::App;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use url::Url;

/// A query parameter of the embed URL, if present.
pub fn report_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

fn field_line(label: &'static str, value: String) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::Yellow)),
    ])
}

pub fn render_report_view(app: &App, f: &mut Frame<'_>, area: Rect) {
    let missing = || "(none)".to_string();
    let url = &app.report_url;

    let lines = vec![
        TextLine::from(Span::styled(
            "Power BI Report",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("The report is embedded from a fixed URL. Open it in a browser:"),
        TextLine::from(Span::styled(
            url.as_str().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::UNDERLINED),
        )),
        TextLine::from(""),
        field_line("Report ID: ", report_param(url, "reportId").unwrap_or_else(missing)),
        field_line("Tenant:    ", report_param(url, "ctid").unwrap_or_else(missing)),
        field_line(
            "Auto auth: ",
            report_param(url, "autoAuth").unwrap_or_else(missing),
        ),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(" Power BI Report ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;

    #[test]
    fn default_embed_identifiers_are_parsed() {
        let url = DashboardConfig::default().report_url;

        assert_eq!(
            report_param(&url, "reportId").as_deref(),
            Some("150b84bb-d793-4ea5-9e45-70b3812a5ed5")
        );
        assert_eq!(
            report_param(&url, "ctid").as_deref(),
            Some("bf93bb5e-ecf0-4e3d-be0e-79b5cc527a48")
        );
        assert_eq!(report_param(&url, "missing"), None);
    }
}
