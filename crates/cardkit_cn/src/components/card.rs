//! Card component - container with header, content and footer regions.
//!
//! ```ignore
//! card()
//!     .class("max-w-md")
//!     .child(card_header().child(h2().text("Title")))
//!     .child(card_content().text("Body"))
//!     .child(card_footer().text("Footer"))
//! ```

use cardkit_layout::prelude::*;

const CARD: &str = "rounded-lg border bg-card text-card-foreground shadow-sm";
const CARD_HEADER: &str = "flex flex-col space-y-1.5 p-6";
const CARD_CONTENT: &str = "p-6 pt-0";
const CARD_FOOTER: &str = "flex items-center p-6 pt-0";

pub fn card() -> Element {
    div().slot("card").class(CARD)
}

pub fn card_header() -> Element {
    div().slot("card-header").class(CARD_HEADER)
}

pub fn card_content() -> Element {
    div().slot("card-content").class(CARD_CONTENT)
}

pub fn card_footer() -> Element {
    div().slot("card-footer").class(CARD_FOOTER)
}
