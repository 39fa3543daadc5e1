pub mod calculator;
pub mod history;
pub mod theme;

pub use calculator::render_calculator;
pub use history::render_history;
pub use theme::Palette;

use crate::app::App;
use crate::storage::KeyValueStore;
use crate::view::View;

/// Render whichever view is active.
pub fn render<S: KeyValueStore>(app: &App<S>, palette: &Palette) -> String {
    match app.view() {
        View::Calculator => render_calculator(app.calculator(), app.theme(), app.mode(), palette),
        View::History => render_history(app.history(), palette),
    }
}
