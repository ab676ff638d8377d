//! Build phases, in execution order

pub mod docs;
pub mod fetch;
pub mod introspect;
pub mod list;
pub mod render;

pub use docs::DocPhase;
pub use fetch::FetchPhase;
pub use introspect::IntrospectPhase;
pub use list::ListPhase;
pub use render::RenderPhase;
