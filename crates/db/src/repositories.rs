pub mod event;
pub mod response;
pub mod time_slot;

/// Rows per multi-row INSERT, well under the bind-parameter limit.
pub(crate) const INSERT_CHUNK: usize = 1000;
