//! Station directory providers.

pub mod static_directory;

pub use static_directory::StationDirectory;
