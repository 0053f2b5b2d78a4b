pub mod data_context;
pub mod error;
pub mod text_file_store;


pub use data_context::DataContext;
pub use error::{Result, StoreError};
pub use text_file_store::TextFileStore;
