// Components module - reusable UI building blocks
//
// Shell components wrap the scrolling page:
// - Nav bar: Brand name plus links or menu hint
// - Status bar: Key hints and scroll position
// - Toast: Transient confirmation overlay
//
// Line producers (brand, snippet) build styled lines for the page body
// instead of rendering into a frame themselves.

pub mod brand;
pub mod nav_bar;
pub mod snippet;
pub mod status_bar;
pub mod toast;

pub use snippet::SnippetBlock;
pub use toast::Toast;
