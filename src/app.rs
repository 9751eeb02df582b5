use crate::cli::AppConfig;
use crate::command::KeyBindings;
use crate::render::{Frame, RenderEvent, Renderer};
use crate::session::{Session, SessionConfig};

#[cfg(feature = "visual")]
use crate::render::sdl_renderer::{self, SdlConfig, SdlRenderer};

use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use rand::rngs::OsRng;
use rand::Rng;
use std::time::Duration;

pub struct SortApp {
    config: AppConfig,
    bindings: KeyBindings,
}

impl SortApp {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            bindings: KeyBindings::default(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn create_session(&self) -> Session {
        let seed = self.config.seed.unwrap_or_else(|| OsRng.gen());

        info!("Using seed: {}", seed);

        Session::new(SessionConfig {
            size: self.config.size,
            range: self.config.range,
            algorithm: self.config.algorithm,
            seed,
        })
    }

    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut session = self.create_session();

        if self.config.renderer.headless {
            return self.run_headless(&mut session);
        }

        self.run_visual(&mut session)
    }

    /// Frame loop: apply input, advance one step, draw. Returns when the
    /// renderer asks to quit.
    pub fn run_with(
        &self,
        session: &mut Session,
        renderer: &mut dyn Renderer<Error = String>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        renderer.handle_event(&RenderEvent::Started(session.algorithm()))?;

        loop {
            for command in renderer.poll_commands() {
                session.apply(command);
                renderer.handle_event(&RenderEvent::Restarted(session.algorithm()))?;
            }

            if renderer.should_quit() {
                info!("Quit requested");
                return Ok(());
            }

            let was_sorted = session.is_sorted();
            let highlight = session.tick().map_err(|e| {
                error!("{} sort broke an invariant: {}", session.algorithm(), e);
                e
            })?;

            if !was_sorted && session.is_sorted() {
                renderer.handle_event(&RenderEvent::Completed {
                    algorithm: session.algorithm(),
                    steps: session.steps(),
                })?;
            }

            renderer.draw(&Frame::new(session, highlight, &self.bindings))?;
        }
    }

    /// Steps to completion without a window.
    pub fn run_headless(&self, session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
        let progress = ProgressBar::new_spinner();
        progress.enable_steady_tick(Duration::from_millis(200));
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg} {pos:>8} steps {per_sec:>12}")
                .map_err(|e| e.to_string())?,
        );
        progress.set_message(format!("{} sort", session.algorithm()));

        while !session.is_sorted() {
            session.tick()?;
            progress.set_position(session.steps() as u64);
        }

        progress.finish();

        if !session.values().windows(2).all(|w| w[0] <= w[1]) {
            Err(format!("{} sort left the values unsorted", session.algorithm()))?
        }

        info!("{}", session.status_line());
        Ok(())
    }

    #[cfg(feature = "visual")]
    fn run_visual(&self, session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
        let sdl_config = SdlConfig {
            window_size: self.config.renderer.window_size,
            vsync: self.config.renderer.vsync,
            fullscreen: self.config.renderer.fullscreen,
            fps: self.config.renderer.fps,
            font: self.config.renderer.font.clone(),
        };

        // fonts borrow the ttf context, so it has to outlive the renderer
        let ttf = match sdl_config.font {
            Some(_) => Some(sdl_renderer::ttf_context()?),
            None => None,
        };

        let mut renderer = SdlRenderer::new(&sdl_config, self.bindings.clone(), ttf.as_ref())?;

        self.run_with(session, &mut renderer)
    }

    #[cfg(not(feature = "visual"))]
    fn run_visual(&self, _session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
        Err("Built without the visual feature, use --headless".into())
    }
}
