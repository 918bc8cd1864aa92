pub mod config;
pub mod dependencies;
pub mod environment;
pub mod error;
pub mod invocation;
pub mod package_manager;
pub mod paths;
pub mod reporter;
pub mod scaffold;
pub mod shell;
pub mod templates;

// Re-export commonly used types
pub use config::Config;
pub use environment::Environment;
pub use error::ScaffoldError;
pub use invocation::Invocation;
pub use scaffold::{Scaffold, ScaffoldPlan, Stage};
