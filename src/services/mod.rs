//! Listing and mutation flows shared by every front end.

use thiserror::Error;

use crate::pagination::{PaginationError, Paginator};
use crate::repository::errors::RepositoryError;

pub mod ingredients;
pub mod recipes;
pub mod recommendations;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("form error: {0}")]
    Form(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error("output error: {0}")]
    Output(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Moves `pager` to an explicitly requested page, rejecting pages that do
/// not exist. Page 1 of an empty listing is always accepted.
pub fn select_page<T>(pager: &mut Paginator<T>, page: Option<usize>) -> ServiceResult<()> {
    let Some(page) = page else {
        return Ok(());
    };

    if !(page == 1 && pager.is_empty()) {
        pager.try_slice(page)?;
    }
    pager.go_to(page);
    Ok(())
}
