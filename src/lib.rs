pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, TriggerKind};

pub use adapters::{console::ConsoleNotifier, host::InMemoryMenus, host::StaticTabProvider};
pub use config::ClientConfig;
pub use core::{
    client::PredictionClient,
    context_menu::ContextMenuTrigger,
    popup::{PopupState, PopupTrigger, PopupView},
};
pub use utils::error::{ClassifierError, Result};
