use dioxus::prelude::*;
use dioxus_primitives::avatar as prim;

/// Round avatar for the signed-in user.
///
/// Shows `image` when set, otherwise `default_image`. If the image fails to
/// load the primitive falls back to the `fallback` glyph.
#[component]
pub fn UserAvatar(
    image: Option<String>,
    default_image: String,
    fallback: String,
) -> Element {
    let src = image
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(default_image);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Avatar { class: "servy-avatar",
            prim::AvatarImage { class: "servy-avatar-image", src: src }
            prim::AvatarFallback { class: "servy-avatar-fallback", "{fallback}" }
        }
    }
}
