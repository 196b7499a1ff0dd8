use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("row has {fields} fields, at least {required} required")]
    ShortRow { fields: usize, required: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
