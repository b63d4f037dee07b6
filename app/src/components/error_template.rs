//! Error pages for the two failure modes the site distinguishes: a route
//! with no matching content (404) and an unreachable content source (503).
//!
//! On the server the first error also sets the HTTP status code, so an
//! unknown article slug responds with a real 404 rather than a rendered
//! error page behind a 200.

use http::status::StatusCode;
use leptos::{
    html::{div, h1, p},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
    #[error("Content Unavailable")]
    ContentUnavailable,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ContentUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

/// Renders an error page from either server-side errors (`outside_errors`)
/// or a client-side error signal.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = outside_errors.map_or_else(
        || errors.unwrap_or_else(|| panic!("No Errors found and we expected errors!")),
        |e| RwSignal::new(e),
    );
    let errors: Vec<AppError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect();

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let Some(response) = use_context::<ResponseOptions>() {
            if let Some(error) = errors.first() {
                response.set_status(error.status_code());
            }
        }
    }

    div()
        .class("grid place-content-center px-4 h-screen text-white bg-black antialiased")
        .child(For(
            ForProps::builder()
                .each(move || errors.clone().into_iter().enumerate())
                .key(|(index, _error)| *index)
                .children(|(_index, error)| {
                    let error_string = error.to_string();
                    let error_code = error.status_code();

                    div()
                        .class("flex flex-col gap-2 justify-center items-center text-center")
                        .child((
                            h1().class("text-xl tracking-widest text-gray-400 uppercase")
                                .child(format!("{error_code} | {error_string}")),
                            p().class("text-gray-300").child(match error {
                                AppError::NotFound => "The page you are looking for does not exist.",
                                AppError::ContentUnavailable => {
                                    "Our content is briefly unavailable. Please try again."
                                }
                            }),
                            div().class("mt-6 duration-200 hover:text-gray-300").child(A(
                                AProps::builder()
                                    .href("/")
                                    .children(ToChildren::to_children(|| "Go back home"))
                                    .build(),
                            )),
                        ))
                })
                .build(),
        ))
}
