use crate::command::{Command, CommandContext};
use crate::config::DoilyConfig;
use crate::error::DoilyResult;
use crate::gallery::Gallery;
use crate::input::InputHandler;
use crate::panels;
use crate::surface::DrawingSurface;
use crate::texture_manager::TextureManager;

/// The application window: controls on the left, canvas in the middle,
/// gallery on the right
pub struct DoiliesApp {
    config: DoilyConfig,
    surface: DrawingSurface,
    gallery: Gallery,
    input: InputHandler,
    textures: TextureManager,
    /// Last command failure, shown under the controls
    status: Option<String>,
}

impl DoiliesApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: DoilyConfig) -> DoilyResult<Self> {
        Self::with_config(config)
    }

    /// Build the app state without a window
    pub fn with_config(config: DoilyConfig) -> DoilyResult<Self> {
        config.validate()?;
        let side = config.min_canvas_size;
        let surface = DrawingSurface::new(&config, side, side)?;
        let gallery = Gallery::new(&config);

        Ok(Self {
            config,
            surface,
            gallery,
            input: InputHandler::default(),
            textures: TextureManager::new(),
            status: None,
        })
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Run commands in order. Failures are logged and the last one is kept for display.
    pub fn execute(&mut self, commands: Vec<Command>) {
        let mut gallery_changed = false;
        for command in commands {
            gallery_changed |= matches!(command, Command::DeleteSelectedFromGallery);
            let mut ctx = CommandContext::new(&mut self.surface, &mut self.gallery);
            match command.execute(&mut ctx) {
                Ok(()) => self.status = None,
                Err(err) => {
                    log::warn!("{command:?} failed: {err}");
                    self.status = Some(err.to_string());
                }
            }
        }
        if gallery_changed {
            self.textures.retain_gallery(&self.gallery);
        }
    }
}

impl eframe::App for DoiliesApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = Vec::new();

        egui::SidePanel::left("control_panel")
            .resizable(false)
            .show(ctx, |ui| {
                commands.extend(panels::control_panel(
                    ui,
                    &self.surface,
                    &self.gallery,
                    &self.config,
                    self.status.as_deref(),
                ));
            });

        egui::SidePanel::right("gallery_panel")
            .resizable(false)
            .exact_width(self.config.gallery_width as f32)
            .show(ctx, |ui| {
                commands.extend(panels::gallery_panel(ui, &self.gallery, &mut self.textures));
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                panels::canvas_panel(
                    ui,
                    &mut self.surface,
                    &mut self.input,
                    &mut self.textures,
                    &self.config,
                );
            });

        if !commands.is_empty() {
            self.execute(commands);
        }
    }
}
