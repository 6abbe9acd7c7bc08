//! Shared Kernel
//!
//! Error vocabulary every crate in the workspace agrees on. Auth and
//! activity errors convert into [`error::app_error::AppError`] at their own
//! crate boundary; with the `axum` feature an `AppError` renders itself as an
//! RFC 7807 problem document.

pub mod error {
    pub mod app_error;
    pub mod kind;
    pub mod problem;
}
