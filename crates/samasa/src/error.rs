use thiserror::Error;

#[derive(Debug, Error)]
pub enum SamasaError {
    #[error("DICT chunk references external registry {filename:?}, which was not supplied")]
    ExternalFileUnavailable { filename: String },

    #[error(transparent)]
    Container(#[from] slbc_types::ContainerError),
}
