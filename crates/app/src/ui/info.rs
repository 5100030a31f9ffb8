use crate::ui::{Context, border_style};
use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Text},
    widgets::{Block, Paragraph},
};

#[derive(Default)]
pub struct InfoPane;

impl InfoPane {
    pub fn render(&mut self, ctx: &mut Context, area: Rect) {
        let block = Block::bordered()
            .title("Machine")
            .border_style(border_style(false));

        let text = if ctx.panel.presented() == 0 {
            Text::styled("waiting for the first snapshot", Style::new().dim())
        } else {
            ctx.panel.labels().map(Line::raw).collect()
        };

        ctx.frame
            .render_widget(Paragraph::new(text).block(block), area);
    }
}
