use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("the post store is empty")]
    EmptyStore,

    #[error("duplicate post id {0}")]
    DuplicateId(u32),
}
