/// Errors from building static mesh components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StaticMeshError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl StaticMeshError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
