//! The site footer, rendered only when the CMS footer block has content.

use chrono::{Datelike as _, Utc};
use cms::types::{FooterContent, NavigationLink};
use leptos::{
    html::{a, div, footer, li, p, ul},
    prelude::*,
};

pub fn component(content: FooterContent) -> impl IntoView {
    let FooterContent { links, copyright } = content;

    footer()
        .class("py-10 px-[2rem] text-white bg-black border-t border-white/20")
        .child(
            div()
                .class("flex flex-col gap-4 justify-center items-center mx-auto max-w-6xl")
                .child((
                    ul().class("flex flex-row flex-wrap gap-6 justify-center").child(
                        links
                            .into_iter()
                            .map(|entry| {
                                let NavigationLink { id: _, label, link } = entry;
                                li().child(
                                    a().href(link)
                                        .class("text-sm text-gray-200 hover:underline")
                                        .child(label),
                                )
                            })
                            .collect_view(),
                    ),
                    p().class("text-sm text-gray-400").child((
                        copyright.unwrap_or_else(|| "Consulting".to_owned()),
                        format!(" \u{a9} {}", Utc::now().year()),
                    )),
                )),
        )
}
