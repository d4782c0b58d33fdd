//! Error types for quantity resolution.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Unknown quantity: {name}")]
    UnknownQuantity { name: String },

    #[error("Unknown base component: {name}")]
    UnknownComponent { name: String },

    #[error("Missing base component {component} required by {quantity}")]
    MissingComponent {
        component: &'static str,
        quantity: String,
    },
}

pub type FieldResult<T> = Result<T, FieldError>;
