use crate::ui::{Context, border_style};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Text},
    widgets::Block,
};

#[derive(Default)]
pub struct StatusPane;

impl StatusPane {
    pub fn render(&mut self, ctx: &mut Context, area: Rect) {
        let block = Block::bordered()
            .title("Status")
            .border_style(border_style(false));
        let inner = block.inner(area);
        ctx.frame.render_widget(block, area);

        let [state_area, refresh_area, help_area] = Layout::horizontal([
            Constraint::Length(24),
            Constraint::Min(1),
            Constraint::Length(48),
        ])
        .areas(inner);

        let state = if ctx.paused {
            Line::styled("⏸ Paused", Style::new().red())
        } else {
            Line::styled("⏵ Running", Style::new().green())
        };
        let executed = Line::styled(
            format!("{} instructions", ctx.executed),
            Style::new().light_blue(),
        );

        let stats = ctx.driver.stats();
        let refresh = Line::raw(format!(
            "every {}ms, {} shown, {} skipped",
            ctx.driver.interval().as_millis(),
            stats.presented,
            stats.skipped
        ));
        let error = match &stats.last_error {
            Some(e) => Line::styled(e.to_string(), Style::new().red()),
            None => Line::default(),
        };

        let help = Text::from(vec![
            Line::raw("p: pause  s: step  r: reset  q: quit").dim(),
            Line::raw("+/-: refresh rate  ↑/↓: scroll").dim(),
        ]);

        ctx.frame
            .render_widget(Text::from(vec![state, executed]), state_area);
        ctx.frame
            .render_widget(Text::from(vec![refresh, error]), refresh_area);
        ctx.frame.render_widget(help, help_area);
    }
}
