//! The landing page: hero copy and the article index, wrapped in the shared
//! layout. Chrome blocks and the index are independent fetches; if either is
//! unavailable the page still renders without that region.

use leptos::{
    html::{h1, h2, li, p, section, span, ul},
    prelude::*,
};
use leptos_router::components::{A, AProps};

use crate::{
    api::{select_article_index, select_layout},
    components::{layout, loader, seo},
    types::LayoutProps,
};

pub fn component() -> impl IntoView {
    let layout_props = Resource::new_blocking(
        || (),
        move |()| async move { select_layout(false).await.unwrap_or_default() },
    );
    let articles = Resource::new_blocking(
        || (),
        move |()| async move { select_article_index().await.unwrap_or_default() },
    );

    Suspense(
        SuspenseProps::builder()
            .fallback(loader::component)
            .children(TypedChildren::to_children(move || {
                move || {
                    let LayoutProps { footer, header } =
                        layout_props.with(|props| props.clone().unwrap_or_default());

                    layout::component(
                        header,
                        footer,
                        (
                            seo::component(
                                "Consulting \u{2013} Data & Engineering Services".to_owned(),
                                "We help teams design, build, and scale the platforms behind their products."
                                    .to_owned(),
                            ),
                            hero(),
                            section()
                                .id("articles")
                                .class("flex flex-col gap-6 mt-16")
                                .child((
                                    h2().class("text-2xl font-semibold").child("Articles"),
                                    ul().class("flex flex-col gap-3").child(For(
                                        ForProps::builder()
                                            .each(move || articles.get().unwrap_or_default())
                                            .key(|entry| entry.slug.clone())
                                            .children(|entry| {
                                                li().child(A(AProps::builder()
                                                    .href(format!("/articles/{}", entry.slug))
                                                    .children(ToChildren::to_children(move || {
                                                        span()
                                                            .class("text-lg hover:underline")
                                                            .child(entry.title.clone())
                                                    }))
                                                    .build()))
                                            })
                                            .build(),
                                    )),
                                )),
                        ),
                    )
                }
            }))
            .build(),
    )
}

fn hero() -> impl IntoView {
    section().class("flex flex-col gap-6 mt-8").child((
        h1().class("text-5xl font-bold leading-tight md:text-6xl")
            .child("Uncommon solutions to common data problems"),
        p().class("max-w-2xl text-lg text-gray-300").child(
            "We partner with engineering and data teams to design, build, and run the platforms behind their products.",
        ),
    ))
}
