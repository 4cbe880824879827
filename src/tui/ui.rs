use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::{CardList, DetailView, PageJump, Pager, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let counts = (!app.is_loading).then(|| (app.view().total_matches, app.catalog.len()));
    TitleBar::new(
        app.source_name.clone(),
        app.status_message.clone(),
        counts,
    )
    .render(frame, title_area);

    match &app.screen {
        Screen::Browse => draw_browse(frame, main_area, app, tui),
        Screen::Detail { id, detail } => {
            let name = app.catalog.find(id).map(|item| item.name.as_str());
            DetailView::new(&mut tui.detail, id, name, detail).render(frame, main_area);
        }
    }
}

fn draw_browse(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let view = app.view();
    let pager_height = if view.shows_controls() { 1 } else { 0 };
    let [search_area, list_area, pager_area] =
        Layout::vertical([Length(3), Min(0), Length(pager_height)]).areas(area);

    tui.search.focused = tui.focus == Focus::Search && tui.page_jump.is_none();
    tui.search.render(frame, search_area);

    CardList::new(
        &mut tui.card_list,
        &view.items,
        &app.search_term,
        app.is_loading,
        tui.focus == Focus::Results,
    )
    .render(frame, list_area);

    if view.shows_controls() {
        Pager::new(&tui.pager, &view, tui.focus == Focus::Pager).render(frame, pager_area);
    }

    if let Some(jump) = &tui.page_jump {
        PageJump::new(jump).render(frame, area);
    }
}
