pub mod affordance;
pub mod source;
pub mod touch;
pub mod viewer;

pub use touch::{InputEvent, InputKind, Point};
pub use viewer::{PresentationMode, Viewer, ViewerAction};
