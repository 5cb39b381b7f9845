//! Request extractors that report rejections through [`AppError`].

use crate::error::AppError;
use axum::extract::FromRequest;

/// JSON body extractor.
///
/// Behaves like [`axum::Json`] but turns decoding failures into
/// [`AppError::InvalidBody`], so clients get the shared JSON error shape while
/// the status code stays the one axum picked for the rejection.
#[derive(Debug, Clone, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
