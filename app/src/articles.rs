//! The article page.
//!
//! The slug comes from the route, the preview flag from the query string.
//! Props are composed server-side in one shot; a slug with no content item
//! renders the 404 template so unknown routes never produce an empty page.

use leptos::{
    html::{article, div, h1, p},
    prelude::*,
};
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::{
    api::select_article,
    components::{error_template, error_template::AppError, layout, loader, seo},
    types::ArticleProps,
};

pub fn component() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let slug = move || params.with(|params| params.get("slug").unwrap_or_default());
    let preview = move || {
        query.with(|query| {
            query
                .get("preview")
                .is_some_and(|flag| flag == "true" || flag == "1")
        })
    };

    // Re-fetches when the route slug or the preview flag changes.
    let article_props = Resource::new_blocking(
        move || (slug(), preview()),
        move |(slug, preview)| async move { select_article(slug, preview).await },
    );

    Suspense(
        SuspenseProps::builder()
            .fallback(loader::component)
            .children(TypedChildren::to_children(move || {
                move || {
                    article_props.with(|props| match props {
                        None => ().into_any(),
                        Some(Ok(props)) => page(props.clone()).into_any(),
                        Some(Err(ServerFnError::Request(_))) => {
                            error_page(AppError::NotFound).into_any()
                        }
                        Some(Err(_)) => error_page(AppError::ContentUnavailable).into_any(),
                    })
                }
            }))
            .build(),
    )
}

fn error_page(error: AppError) -> impl IntoView {
    let mut errors = Errors::default();
    errors.insert_with_default_key(error);
    error_template::component(Some(errors), None)
}

fn page(props: ArticleProps) -> impl IntoView {
    let ArticleProps {
        data,
        footer,
        header,
        preview,
    } = props;
    let content = data.content;

    layout::component(
        header,
        footer,
        (
            seo::component(content.title.clone(), content.description.clone()),
            preview.then(preview_banner),
            article().class("flex flex-col gap-6").child((
                h1().class("text-4xl font-semibold").child(content.post_title),
                div().class("flex flex-col gap-4 text-gray-200").child(
                    content
                        .body
                        .into_iter()
                        .map(|paragraph| p().child(paragraph))
                        .collect_view(),
                ),
            )),
        ),
    )
}

fn preview_banner() -> impl IntoView {
    div()
        .class("py-2 px-4 mb-6 text-sm text-black bg-white rounded")
        .child("Preview: draft content")
}
