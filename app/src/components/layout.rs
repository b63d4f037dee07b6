//! The shared page layout: header and footer regions around the page content.
//!
//! Both chrome regions are driven by the CMS blocks fetched with the page.
//! A block whose `content` is absent renders as no region at all; the page
//! content itself is always rendered.

use cms::types::{FooterItem, HeaderItem};
use leptos::{
    html::{div, main},
    prelude::*,
};

use crate::components::{footer, header};

/// Compose the page chrome around `children`.
///
/// Stateless: the rendered tree is a pure function of the given blocks.
pub fn component(
    header: Option<HeaderItem>,
    footer: Option<FooterItem>,
    children: impl IntoView,
) -> impl IntoView {
    let header_content = header.and_then(|item| item.content);
    let footer_content = footer.and_then(|item| item.content);

    div().class("min-h-screen text-white bg-black").child((
        header_content.map(header::component),
        main()
            .id("maincontent")
            .class("container px-4 pt-32 pb-16 mx-auto max-w-4xl")
            .child(children),
        footer_content.map(footer::component),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms::types::{FooterContent, HeaderContent};

    #[test]
    fn header_region_requires_block_content() {
        // A missing block and a block without content both drop the region.
        assert!(None::<HeaderItem>.and_then(|item| item.content).is_none());
        assert!(
            Some(HeaderItem { content: None })
                .and_then(|item| item.content)
                .is_none()
        );
        assert!(
            Some(HeaderItem {
                content: Some(HeaderContent::default())
            })
            .and_then(|item| item.content)
            .is_some()
        );
    }

    #[test]
    fn footer_region_requires_block_content() {
        assert!(
            Some(FooterItem { content: None })
                .and_then(|item| item.content)
                .is_none()
        );
        assert!(
            Some(FooterItem {
                content: Some(FooterContent::default())
            })
            .and_then(|item| item.content)
            .is_some()
        );
    }

    #[test]
    fn component_builds_without_chrome_blocks() {
        // The content region stands alone when both blocks are absent.
        let view = component(None, None, "page content");
        drop(view);
    }
}
