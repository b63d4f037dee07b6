//! The site header.
//!
//! Both responsive variants are always in the tree; the breakpoint classes
//! decide which one is visible. The mobile variant owns the navigation open
//! flag and hands it down read-only to the navigation panel.

use cms::types::{HeaderContent, NavigationItem, NavigationLink};
use leptos::{
    ev,
    html::{a, button, div, li, nav, span, ul},
    prelude::*,
    svg::svg,
};
use leptos_router::components::{A, AProps};

use crate::components::header_navigation;

pub fn component(content: HeaderContent) -> impl IntoView {
    view! {
        <header class="fixed inset-x-0 top-0 z-20 text-white">
            <div class="block lg:hidden">{mobile(content.clone())}</div>
            <div class="hidden lg:block">{desktop(content)}</div>
        </header>
    }
}

/// Mobile variant: brand bar, toggle button, and the full-screen panel.
fn mobile(content: HeaderContent) -> impl IntoView {
    let is_navigation_open = RwSignal::new(false);
    let HeaderContent {
        navigation,
        book_a_call_link_text,
    } = content;

    (
        div()
            .class("flex relative z-40 flex-row justify-between items-center py-4 px-[2rem] bg-black")
            .child((
                brand(),
                button()
                    .on(ev::click, move |_| {
                        is_navigation_open.update(|open| *open = !*open);
                    })
                    .class("p-2")
                    .attr("aria-controls", "menu")
                    .attr("aria-expanded", move || is_navigation_open.get().to_string())
                    .attr("aria-label", "Toggle navigation")
                    .child((
                        svg()
                            .attr("viewBox", icondata::BsList.view_box)
                            .attr("innerHTML", icondata::BsList.data)
                            .class("size-6")
                            .class(("hidden", move || is_navigation_open.get())),
                        svg()
                            .attr("viewBox", icondata::BsXLg.view_box)
                            .attr("innerHTML", icondata::BsXLg.data)
                            .class("size-6")
                            .class(("hidden", move || !is_navigation_open.get())),
                    )),
            )),
        header_navigation::component(
            navigation,
            book_a_call_link_text,
            is_navigation_open.read_only(),
        ),
    )
}

/// Desktop variant: inline navigation, submenus shown on hover via CSS.
fn desktop(content: HeaderContent) -> impl IntoView {
    let HeaderContent {
        navigation,
        book_a_call_link_text,
    } = content;

    div()
        .class("flex flex-row justify-between items-center py-6 px-12 mx-auto bg-black")
        .child((
            brand(),
            nav().class("flex flex-row gap-8 items-center").child((
                ul().class("flex flex-row gap-6 items-center").child(
                    navigation
                        .into_iter()
                        .map(desktop_item)
                        .collect_view(),
                ),
                a().href("/about-us#book-a-call")
                    .class("py-3 px-6 text-sm font-semibold text-black bg-white rounded-[4rem] transition-colors duration-300 hover:bg-gray-200")
                    .child(book_a_call_link_text),
            )),
        ))
}

fn desktop_item(item: NavigationItem) -> impl IntoView {
    let NavigationItem {
        id: _,
        label,
        link,
        sub_items,
    } = item;

    let top = match link {
        Some(href) => A(AProps::builder()
            .href(href)
            .children(ToChildren::to_children({
                let label = label.clone();
                move || {
                    span()
                        .class("transition-colors duration-300 hover:text-gray-300")
                        .child(label.clone())
                }
            }))
            .build())
        .into_any(),
        None => span().class("cursor-default").child(label).into_any(),
    };

    li().class("relative group").child((
        top,
        (!sub_items.is_empty()).then(|| {
            ul().class("hidden absolute left-0 top-full flex-col gap-2 py-4 px-5 min-w-[12rem] bg-black group-hover:flex")
                .child(
                    sub_items
                        .into_iter()
                        .map(|sub| {
                            let NavigationLink { id: _, label, link } = sub;
                            li().child(
                                a().href(link)
                                    .class("text-sm text-gray-200 hover:underline")
                                    .child(label),
                            )
                        })
                        .collect_view(),
                )
        }),
    ))
}

fn brand() -> impl IntoView {
    div().class("text-xl font-bold tracking-tight").child(A(
        AProps::builder()
            .href("/")
            .children(ToChildren::to_children(|| "consulting"))
            .build(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_build_from_the_same_content() {
        let owner = Owner::new();
        owner.set();

        let content = HeaderContent {
            navigation: vec![NavigationItem {
                id: "n1".to_owned(),
                label: "Services".to_owned(),
                link: Some("/services".to_owned()),
                sub_items: Vec::new(),
            }],
            book_a_call_link_text: "Book a call".to_owned(),
        };

        drop(mobile(content.clone()));
        drop(desktop(content));
    }

    #[test]
    fn header_builds_with_empty_navigation() {
        let owner = Owner::new();
        owner.set();

        drop(component(HeaderContent::default()));
    }
}
