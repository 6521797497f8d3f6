mod escape;
mod render;
mod view;

pub mod prelude {
    pub use super::escape::escape;
    pub use super::render::render;
    pub use super::view::{CritiqueView, HtmlReport, MockCritiqueView};
}
