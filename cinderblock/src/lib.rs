//! Composable HTML construction without templates.
//!
//! cinderblock provides:
//! - **Node model**: an immutable tree of text, element and self-closing nodes
//! - **Factories**: one function per tag ([`elem`]), per attribute ([`attr`]),
//!   and for raw or escaped text ([`text`])
//! - **Attribute merging**: repeated `class`/`style`/`accept` values combine,
//!   every other key keeps its last value
//! - **Rendering**: one pass to a compact HTML string
//!
//! # Example
//!
//! ```rust
//! use cinderblock::{attr, elem, text};
//!
//! let page = elem::html(
//!     [attr::lang("en")],
//!     [
//!         elem::plain::head([elem::plain::title([text::encoded("Hello World")])]),
//!         elem::plain::body([
//!             elem::plain::h1([text::encoded("Hello!")]),
//!             elem::div(
//!                 [attr::class("container"), attr::class("wide")],
//!                 [elem::plain::p([text::encoded("Fish & chips")])],
//!             ),
//!         ]),
//!     ],
//! );
//!
//! assert_eq!(
//!     page.to_html(),
//!     "<html lang=\"en\"><head><title>Hello World</title></head>\
//!      <body><h1>Hello!</h1><div class=\"container wide\"><p>Fish &amp; chips</p></div></body></html>"
//! );
//! ```
//!
//! Text passed to [`text::encoded`] is escaped once, when the node is built.
//! Attribute values are never escaped; see [`attr`].

mod tracing_macros;
pub(crate) use tracing_macros::{debug, trace};

pub mod attr;
pub mod elem;
pub mod error;
pub mod merge;
mod node;
pub mod render;
mod stem;
pub mod text;

pub use error::MarkupError;
pub use node::{Attribute, Attrs, Node};
pub use render::{render_fragment, render_into, render_to_string};
pub use stem::Stem;
