pub mod config_io;
pub mod items_io;
pub mod logging;

pub use config_io::LoadError;
