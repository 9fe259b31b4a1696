//! Core OpenLaw client types.

mod api_root;
mod params;
mod template;

pub use api_root::ApiRoot;
pub use params::Params;
pub use template::Template;
