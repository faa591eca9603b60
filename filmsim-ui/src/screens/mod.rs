mod charts_panel;
mod input_panel;
mod search_window;
mod status_bar;

pub use charts_panel::ChartsPanel;
pub use input_panel::InputPanel;
pub use search_window::SearchWindow;
pub use status_bar::StatusBar;
