use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};

use crate::app::state::{AppState, Tab};
use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let items: Vec<ListItem> = Tab::ALL
        .iter()
        .map(|tab| {
            let (marker, style) = if *tab == state.tab {
                ("▸ ", Theme::nav_active())
            } else {
                ("  ", Theme::nav_inactive())
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker}{}", tab.title()),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Campaigner ")
            .title_style(Theme::title())
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border()),
    );
    frame.render_widget(list, area);
}
