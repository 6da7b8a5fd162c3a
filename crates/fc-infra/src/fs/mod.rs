pub mod node_file;

pub use node_file::JsonFileNodeDetail;
