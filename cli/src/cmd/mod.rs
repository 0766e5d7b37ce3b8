pub mod conversion;
pub mod remove;
