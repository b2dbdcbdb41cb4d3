mod engine;
mod settings;

pub use engine::{ClockMode, SessionClock};
pub use settings::ClockSettings;
