//! HTML rendering of the site
//!
//! Templates are compiled into the binary and rendered with handlebars:
//!
//! - `index`: every published repository
//! - `import`: one page per repository carrying the `go-import` meta tag
//! - `pkg`: one page per public package

pub mod error;
pub mod site;
pub mod templates;

pub use error::SiteError;
pub use site::{render_site, SiteOptions, SiteWriter, THEME_CSS};
pub use templates::{ImportPage, IndexPage, PackagePage, SiteTemplates};
