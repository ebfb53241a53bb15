//! UI module for rendering the TUI

mod components;
mod conferences;
mod layout;
mod widgets;
mod wizard;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_header(frame, header_area, app);

    match app.state.current_view {
        View::Conferences => conferences::draw_list(frame, main_area, app),
        View::ConferenceDetail => conferences::draw_detail(frame, main_area, app),
        View::ConferenceCreate | View::ConferenceEdit | View::TrackCreate => {
            wizard::draw(frame, main_area, app)
        }
    }

    layout::draw_status_bar(frame, status_area, app);

    // Overlays, most urgent last
    if app.state.confirm_cancel {
        components::dialog::render_confirm_dialog(
            frame,
            "Discard changes?",
            "The form has unsaved edits.",
        );
    }
    if let Some(error) = app.state.current_error() {
        components::dialog::render_error_dialog(frame, error);
    }
}
