mod engine;
mod score;
mod session;

pub use engine::search;
pub use score::score;
pub use session::{SearchSession, SearchTicket};
