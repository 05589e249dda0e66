pub mod error;
pub mod output;
pub mod partitions;
pub mod polars_utils;

pub use error::{IngestError, Result};
pub use output::write_output;
pub use partitions::{partition_file_name, partition_path, read_partition};
pub use polars_utils::{any_to_string, any_to_string_non_empty};
