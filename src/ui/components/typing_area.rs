use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use keyladder::engine::markup::{ProgressMarkup, Segment, Tag};

use crate::ui::theme::{Theme, ThemeColors};

pub struct TypingArea<'a> {
    markup: &'a ProgressMarkup,
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(markup: &'a ProgressMarkup, theme: &'a Theme) -> Self {
        Self { markup, theme }
    }
}

fn segment_style(segment: &Segment, colors: &ThemeColors) -> Style {
    let style = match segment.tag {
        Some(Tag::Correct) => Style::default().fg(colors.text_correct()),
        Some(Tag::Error) => Style::default()
            .fg(colors.text_incorrect())
            .bg(colors.text_incorrect_bg()),
        Some(Tag::Next) => Style::default()
            .fg(colors.text_cursor_fg())
            .bg(colors.text_cursor_bg()),
        None => Style::default().fg(colors.text_pending()),
    };
    if segment.underlined {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let spans: Vec<Span> = self
            .markup
            .segments
            .iter()
            .map(|segment| Span::styled(segment.text.clone(), segment_style(segment, colors)))
            .collect();

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));

        let paragraph = Paragraph::new(Line::from(spans))
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        paragraph.render(area, buf);
    }
}
