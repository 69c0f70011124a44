use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("A style named '{0}' already exists.")]
    DuplicateName(String),
    #[error("Parent style '{0}' does not exist.")]
    UnknownParent(String),
    #[error("Style names must not be empty; the empty name denotes the root style.")]
    EmptyName,
}
