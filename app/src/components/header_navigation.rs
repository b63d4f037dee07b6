//! The mobile navigation panel.
//!
//! The panel has exactly two states, open and closed, and owns neither: the
//! mobile header holds the flag and this component only renders it. The
//! panel's DOM, including every navigation item, stays mounted in both
//! states; toggling flips a visibility class so the CSS transition can run.
//! Each item with sub-items delegates its expansion to its own provider,
//! which collapses again whenever the panel closes.

use cms::types::{NavigationItem, NavigationLink};
use leptos::{
    ev,
    html::{a, button, div, li, nav, span, ul},
    prelude::*,
    svg::svg,
};
use leptos_router::components::{A, AProps};

/// Where the "book a call" link points; the CMS supplies only its label.
const BOOK_A_CALL_PATH: &str = "/about-us#book-a-call";

const PANEL_CLASS: &str = "absolute inset-0 z-30 pt-[8rem] w-screen h-screen bg-black transition-transform motion-reduce:transition-none duration-300 ease-in-out";

/// The class that shows or hides an always-mounted subtree.
pub(crate) const fn visibility_class(is_open: bool) -> &'static str {
    if is_open { "block" } else { "hidden" }
}

/// Render the navigation panel from an externally owned open flag.
///
/// An empty `navigation` list renders an empty menu, not an error.
pub fn component(
    navigation: Vec<NavigationItem>,
    book_a_call_link_text: String,
    is_navigation_open: ReadSignal<bool>,
) -> impl IntoView {
    nav()
        .class(move || format!("{PANEL_CLASS} {}", visibility_class(is_navigation_open.get())))
        .attr("aria-hidden", move || {
            (!is_navigation_open.get()).to_string()
        })
        .child(
            div().class("overflow-y-auto pb-[5rem] h-full").child((
                ul().id("menu")
                    .class("flex flex-col justify-start items-center px-[2rem] pt-[1.8rem]")
                    .child(For(
                        ForProps::builder()
                            .each(move || navigation.clone())
                            .key(|item| item.id.clone())
                            .children(move |item| {
                                li().class("w-full border-b border-b-white")
                                    .child(item_provider(item, is_navigation_open))
                            })
                            .build(),
                    )),
                booking_link(book_a_call_link_text),
            )),
        )
}

/// Per-item provider: renders one navigation entry and owns its submenu
/// expansion state.
fn item_provider(item: NavigationItem, is_navigation_open: ReadSignal<bool>) -> impl IntoView {
    let NavigationItem {
        id: _,
        label,
        link,
        sub_items,
    } = item;

    if sub_items.is_empty() {
        return match link {
            Some(href) => A(AProps::builder()
                .href(href)
                .children(ToChildren::to_children(move || {
                    span()
                        .class("block py-[1.4rem] text-xl text-white")
                        .child(label.clone())
                }))
                .build())
            .into_any(),
            None => span()
                .class("block py-[1.4rem] text-xl text-gray-400")
                .child(label)
                .into_any(),
        };
    }

    let is_expanded = RwSignal::new(false);

    // Closing the panel resets every submenu for the next open.
    Effect::new(move |_| {
        if !is_navigation_open.get() {
            is_expanded.set(false);
        }
    });

    div()
        .child((
            button()
                .on(ev::click, move |_| is_expanded.update(|open| *open = !*open))
                .class("flex flex-row justify-between items-center py-[1.4rem] w-full text-xl text-left text-white")
                .attr("aria-expanded", move || is_expanded.get().to_string())
                .child((
                    span().child(label),
                    svg()
                        .attr("viewBox", icondata::BsChevronDown.view_box)
                        .attr("innerHTML", icondata::BsChevronDown.data)
                        .class("size-4 transition-transform duration-300")
                        .class(("rotate-180", move || is_expanded.get())),
                )),
            ul().class(move || {
                format!(
                    "flex flex-col gap-2 pb-[1.4rem] pl-[1rem] {}",
                    visibility_class(is_expanded.get())
                )
            })
            .child(
                sub_items
                    .into_iter()
                    .map(|sub| {
                        let NavigationLink { id: _, label, link } = sub;
                        li().child(
                            a().href(link)
                                .class("text-base text-gray-200 hover:underline")
                                .child(label),
                        )
                    })
                    .collect_view(),
            ),
        ))
        .into_any()
}

fn booking_link(text: String) -> impl IntoView {
    div().class("flex justify-center mt-[2.4rem]").child(
        a().href(BOOK_A_CALL_PATH)
            .class("inline-block py-[1.1rem] px-[2.2rem] text-center text-black bg-white rounded-[4rem]")
            .child(text),
    )
}
