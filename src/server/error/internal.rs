use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A row that was just written could not be read back.
    #[error("{entity} with id {id} not found after write")]
    MissingAfterWrite {
        /// Entity name
        entity: &'static str,
        /// Primary key of the row
        id: i32,
    },
}
