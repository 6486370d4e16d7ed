use thiserror::Error;

use crate::domain::{MenuError, OrderError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Order(#[from] OrderError),

    #[error("Invalid menu: {0}")]
    Menu(#[from] MenuError),
}
