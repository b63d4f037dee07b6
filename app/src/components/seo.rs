//! Per-page SEO tags, fed from CMS content fields.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaProps, Title, TitleProps};

pub fn component(title: String, description: String) -> impl IntoView {
    (
        Title(TitleProps::builder().text(title).build()),
        Meta(
            MetaProps::builder()
                .name("description")
                .content(description)
                .build(),
        ),
    )
}
