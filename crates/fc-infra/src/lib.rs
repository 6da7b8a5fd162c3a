pub mod api;
pub mod config;
pub mod fs;

pub use api::{NodeDetailDto, RecordMappingError, UserDto};
pub use config::load_config;
pub use fs::JsonFileNodeDetail;
