#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod config;
pub mod error;
pub mod gallery;
pub mod history;
pub mod input;
pub mod panels;
pub mod point;
pub mod raster;
pub mod renderer;
pub mod stroke;
pub mod surface;
pub mod texture_manager;

pub use app::DoiliesApp;
pub use canvas::{BrushState, CanvasParams, SectorTransform};
pub use command::{Command, CommandContext};
pub use config::DoilyConfig;
pub use error::{DoilyError, DoilyResult};
pub use gallery::{Gallery, GalleryEntry};
pub use history::History;
pub use point::Coordinate;
pub use renderer::{DrawTarget, Pen, Scene, SymmetryRenderer};
pub use stroke::{Stroke, StrokeBuilder, StrokeRef, StrokeStyle};
pub use surface::{DrawingSurface, SurfaceState};
