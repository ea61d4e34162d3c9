//! kreate - headless host for the kreate color picker
//!
//! Loads application configuration, sets up logging, and replays scripted
//! interaction sessions against a [`kreate_picker::PickerCoordinator`].

pub mod config;
pub mod logging;
pub mod session;

pub use config::{AppConfig, ConfigError, LogLevel};
pub use logging::init_logging;
pub use session::{Interaction, Notification, Session, SessionError, SurfaceKind};
