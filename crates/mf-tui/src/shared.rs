//! Shared layout helpers and the help popup.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw the global help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Summary:"),
        Line::from("  j / k       Next / previous field"),
        Line::from("  h / l       Cycle the selected value"),
        Line::from("  Enter       Edit text field / toggle checkbox"),
        Line::from("  r           Try your luck (dice roll)"),
        Line::from("  b           Religion and blessing"),
        Line::from(""),
        Line::from("Dice popup:"),
        Line::from("  Enter/Space Roll (or roll again)"),
        Line::from("  x           Clear the rolled values"),
        Line::from("  Esc         Close (abandons a running sequence)"),
        Line::from(""),
        Line::from("Blessing popup:"),
        Line::from("  j / k       Move between cards"),
        Line::from("  Space       Select the highlighted religion"),
        Line::from("  Enter       Proceed / choose deity"),
        Line::from("  Backspace   Back to religions"),
        Line::from("  Esc         Close without choosing"),
        Line::from(""),
        Line::from("  ?           Toggle this help"),
        Line::from("  q / Ctrl+C  Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
