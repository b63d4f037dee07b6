//! Loading indicator shown while page props are being fetched.

use leptos::{
    html::{div, p},
    prelude::*,
};

pub fn component() -> impl IntoView {
    div()
        .class("flex absolute inset-0 flex-col gap-2 justify-center items-center m-auto")
        .child((
            div().class("rounded-full border-2 border-white animate-spin size-8 border-t-transparent"),
            p().class("text-sm italic text-gray-400").child("Loading..."),
        ))
}
