pub mod files;
pub mod upload;
pub mod welcome;
