use anyhow::Result;
use winit::dpi::LogicalSize;

use ombre_css::GradientConfig;
use ombre_engine::coords::Rect;
use ombre_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use ombre_engine::device::GpuInit;
use ombre_engine::logging::{init_logging, LoggingConfig};
use ombre_engine::paint::{Color, GradientPaint, Unpaintable};
use ombre_engine::render::GradientRenderer;
use ombre_engine::window::{Runtime, RuntimeConfig};

use crate::session::{Outcome, Session};

/// Shown around the preview and wherever nothing can be painted.
const BACKGROUND: Color = Color { r: 0.09, g: 0.09, b: 0.1, a: 1.0 };

// ── Studio ────────────────────────────────────────────────────────────────

/// Gradient builder window.
///
/// ```rust,ignore
/// Studio::new()
///     .title("Ombre")
///     .initial(GradientConfig::default().with_kind(GradientKind::Conic))
///     .run()?;
/// ```
pub struct Studio {
    title: String,
    width: f64,
    height: f64,
    margin: f32,
    initial: GradientConfig,
    logging: LoggingConfig,
}

impl Studio {
    pub fn new() -> Self {
        Self {
            title: "Ombre".to_string(),
            width: 720.0,
            height: 480.0,
            margin: 24.0,
            initial: GradientConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Prefix of the window title; the declaration follows it.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Gap between the window edge and the preview, in logical pixels.
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Snapshot the session starts from.
    pub fn initial(mut self, config: GradientConfig) -> Self {
        self.initial = config;
        self
    }

    pub fn logging(mut self, config: LoggingConfig) -> Self {
        self.logging = config;
        self
    }

    /// Opens the window and blocks until it is closed.
    pub fn run(self) -> Result<()> {
        init_logging(self.logging);
        log::info!("starting {} ({}x{})", self.title, self.width, self.height);

        let config = RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        };
        let app = StudioApp {
            title: self.title,
            margin: self.margin,
            session: Session::new(self.initial),
            renderer: GradientRenderer::new(),
            shown_title: String::new(),
            printed_revision: None,
            warned_revision: None,
        };
        Runtime::run(config, GpuInit::default(), app)
    }
}

impl Default for Studio {
    fn default() -> Self {
        Self::new()
    }
}

// ── StudioApp ─────────────────────────────────────────────────────────────

struct StudioApp {
    title: String,
    margin: f32,
    session: Session,
    renderer: GradientRenderer,

    shown_title: String,
    printed_revision: Option<u64>,
    warned_revision: Option<u64>,
}

impl StudioApp {
    /// Pushes the current declaration to the title bar and stdout when it changed.
    fn publish(&mut self, window: &WindowCtx<'_>) {
        let title = format!("{} {}", self.title, self.session.title());
        if title != self.shown_title {
            window.set_title(&title);
            self.shown_title = title;
        }

        let revision = self.session.config().revision();
        if self.printed_revision != Some(revision) {
            println!("{}", self.session.declaration());
            self.printed_revision = Some(revision);
        }
    }

    fn copy(&self) {
        let declaration = self.session.declaration();
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(declaration.clone())) {
            Ok(()) => log::info!("copied {declaration}"),
            Err(err) => log::warn!("clipboard unavailable: {err}"),
        }
    }

    fn layout(&mut self, window: &WindowCtx<'_>) -> Option<GradientPaint> {
        let (w, h) = window.logical_size();
        let area = Rect::new(0.0, 0.0, w, h).inset(self.margin);

        match GradientPaint::layout(self.session.config(), area) {
            Ok(paint) => Some(paint),
            Err(Unpaintable::EmptyRect) => None,
            Err(err) => {
                let revision = self.session.config().revision();
                if self.warned_revision != Some(revision) {
                    log::warn!("preview cleared: {err}");
                    self.warned_revision = Some(revision);
                }
                None
            }
        }
    }
}

impl App for StudioApp {
    fn on_start(&mut self, ctx: &mut FrameCtx<'_>) {
        self.publish(&ctx.window);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        for event in &ctx.input_frame.events {
            match self.session.handle(event) {
                Outcome::Quit => return AppControl::Exit,
                Outcome::Copy => self.copy(),
                Outcome::Idle | Outcome::Redraw => {}
            }
        }

        self.publish(&ctx.window);

        let paint = self.layout(&ctx.window);
        let renderer = &mut self.renderer;
        ctx.render(BACKGROUND, |rctx, target| {
            if let Some(paint) = &paint {
                renderer.render(rctx, target, paint);
            }
        })
    }
}
