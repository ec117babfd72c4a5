mod app;
mod infrastructure;
mod interface;
mod model;
mod tui;

pub use app::*;
pub use infrastructure::*;
pub use interface::*;
pub use model::*;
pub use tui::*;
