use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};

use keyladder::engine::level_table::{LevelDescriptor, LevelDescriptors};

use crate::ui::theme::Theme;

/// Previous, current and next level side by side.
pub struct LevelInfo<'a> {
    descriptors: &'a LevelDescriptors,
    theme: &'a Theme,
}

impl<'a> LevelInfo<'a> {
    pub fn new(descriptors: &'a LevelDescriptors, theme: &'a Theme) -> Self {
        Self { descriptors, theme }
    }
}

fn column<'a>(
    heading: &str,
    descriptor: &LevelDescriptor,
    style: Style,
    border: Style,
) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::styled(descriptor.name.clone(), style),
        Line::styled(descriptor.character_set.clone(), style.add_modifier(Modifier::BOLD)),
    ])
    .block(
        Block::bordered()
            .title(format!(" {heading} "))
            .border_style(border),
    )
    .alignment(Alignment::Center)
}

impl Widget for LevelInfo<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        let dim = Style::default().fg(colors.text_pending());
        let current = Style::default().fg(colors.accent());

        let border = Style::default().fg(colors.border());

        column("Previous Level", &self.descriptors.previous, dim, border).render(columns[0], buf);
        column("Current Level", &self.descriptors.current, current, current)
            .render(columns[1], buf);
        column("Next Level", &self.descriptors.next, dim, border).render(columns[2], buf);
    }
}
