//! Shell-side state that the core library does not own.

mod settings;

pub use settings::AppSettings;
