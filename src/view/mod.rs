pub mod assets;
pub mod format;
pub mod render;
pub mod reveal;
pub mod state;

pub use format::{format_date, format_price};
pub use reveal::{RevealTracker, Section};
pub use state::{DetailView, FetchTicket, LOAD_ERROR_MESSAGE, ViewState};
