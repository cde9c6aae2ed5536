mod chunk_helpers;
mod property_partition;
pub(crate) mod utils;
