use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::navigator::View;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ContentList, DestinationScreen, SubjectList, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    let view = app.navigator.current_view();

    let location = view.subject().map(|s| s.name.clone());
    TitleBar::new(location, app.status_message.clone()).render(frame, title_area);

    match view {
        View::Dashboard(subjects) => {
            SubjectList::new(&mut tui.subjects, subjects).render(frame, main_area);
        }
        View::Detail(subject) => {
            ContentList::new(&mut tui.content, subject).render(frame, main_area);
        }
    }

    if let Some(destination) = &tui.destination {
        DestinationScreen::new(destination).render(frame, main_area);
    }
}
