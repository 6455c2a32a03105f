mod canvas_panel;
mod control_panel;
mod gallery_panel;

pub use canvas_panel::canvas_panel;
pub use control_panel::control_panel;
pub use gallery_panel::gallery_panel;
