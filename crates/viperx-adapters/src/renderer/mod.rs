//! Template rendering adapters.

mod minijinja;

pub use self::minijinja::MiniJinjaRenderer;
