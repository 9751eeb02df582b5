use super::{Frame, Label, RenderEvent, Renderer, Rgb};
use crate::command::{Command, KeyBindings};
use crate::size::Size;

use log::{debug, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{FullscreenType, Window};
use sdl2::EventPump;
use std::collections::HashMap;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

const TITLE: &str = "Sorting Visualizer";

/// SDL2 window drawing the bars, with keyboard input
pub struct SdlRenderer<'ttf> {
    canvas: Canvas<Window>,
    events: EventPump,
    bindings: KeyBindings,
    fonts: Option<FontCache<'ttf>>,
    pending: Vec<Command>,
    title: String,
    frame_budget: Duration,
    last_present: Instant,
    should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct SdlConfig {
    pub window_size: Size,
    pub vsync: bool,
    pub fullscreen: bool,
    pub fps: u32,
    pub font: Option<PathBuf>,
}

pub fn ttf_context() -> Result<Sdl2TtfContext, String> {
    sdl2::ttf::init().map_err(|e| e.to_string())
}

/// Fonts of one face, loaded per point size on first use.
pub struct FontCache<'ttf> {
    context: &'ttf Sdl2TtfContext,
    path: PathBuf,
    fonts: HashMap<u16, Font<'ttf, 'static>>,
}

impl<'ttf> FontCache<'ttf> {
    pub fn new(context: &'ttf Sdl2TtfContext, path: PathBuf) -> Self {
        Self {
            context,
            path,
            fonts: HashMap::new(),
        }
    }

    pub fn get(&mut self, size: u16) -> Result<&Font<'ttf, 'static>, String> {
        if !self.fonts.contains_key(&size) {
            let font = self.context.load_font(&self.path, size)?;
            self.fonts.insert(size, font);
        }

        self.fonts
            .get(&size)
            .ok_or(format!("Missing font of size {}", size))
    }

    pub fn loaded(&self) -> usize {
        self.fonts.len()
    }
}

fn color(rgb: Rgb) -> Color {
    Color::RGB(rgb.0, rgb.1, rgb.2)
}

/// Lowercase character a key is bound by, keypad digits count as digits.
fn key_char(keycode: Keycode) -> Option<char> {
    match keycode {
        Keycode::Kp1 => Some('1'),
        Keycode::Kp2 => Some('2'),
        Keycode::Kp3 => Some('3'),
        Keycode::Kp4 => Some('4'),
        _ => {
            let name = keycode.name();
            let mut chars = name.chars();

            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c.to_ascii_lowercase()),
                _ => None,
            }
        }
    }
}

impl<'ttf> SdlRenderer<'ttf> {
    /// Labels are drawn only when both a font path and a ttf context are
    /// given, otherwise they go into the window title.
    pub fn new(
        config: &SdlConfig,
        bindings: KeyBindings,
        ttf: Option<&'ttf Sdl2TtfContext>,
    ) -> Result<Self, String> {
        let context = sdl2::init()?;
        let video = context.video()?;

        let mut window = video
            .window(
                TITLE,
                config.window_size.width as u32,
                config.window_size.height as u32,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        if config.fullscreen {
            window.set_fullscreen(FullscreenType::True)?;
        }

        let mut builder = window.into_canvas();

        if config.vsync {
            builder = builder.present_vsync();
        }

        let canvas = builder.build().map_err(|e| e.to_string())?;
        let events = context.event_pump()?;

        let fonts = match (ttf, &config.font) {
            (Some(context), Some(path)) => Some(FontCache::new(context, path.clone())),
            _ => {
                info!("No font given, status is shown in the window title");
                None
            }
        };

        Ok(Self {
            canvas,
            events,
            bindings,
            fonts,
            pending: Vec::new(),
            title: TITLE.to_string(),
            frame_budget: Duration::from_secs(1) / config.fps.max(1),
            last_present: Instant::now(),
            should_quit: false,
        })
    }

    fn handle_events(&mut self) {
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => {
                    self.should_quit = true;
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(command) = key_char(keycode).and_then(|c| self.bindings.command(c)) {
                        debug!("{:?} pressed", command);
                        self.pending.push(command);
                    }
                }
                _ => {}
            }
        }
    }

    fn draw_label(&mut self, label: &Label) -> Result<(), String> {
        let fonts = match self.fonts.as_mut() {
            Some(fonts) => fonts,
            None => return Ok(()),
        };

        if label.text.is_empty() {
            return Ok(());
        }

        let surface = fonts
            .get(label.size)?
            .render(&label.text)
            .blended(color(label.color))
            .map_err(|e| e.to_string())?;

        let texture_creator = self.canvas.texture_creator();
        let texture = texture_creator
            .create_texture_from_surface(&surface)
            .map_err(|e| e.to_string())?;
        let target = Rect::new(label.x, label.y, surface.width(), surface.height());

        self.canvas.copy(&texture, None, Some(target))
    }

    fn update_title(&mut self, labels: &[Label]) -> Result<(), String> {
        let title = std::iter::once(TITLE)
            .chain(labels.iter().map(|label| label.text.as_str()))
            .collect::<Vec<_>>()
            .join(" | ");

        if title != self.title {
            self.canvas
                .window_mut()
                .set_title(&title)
                .map_err(|e| e.to_string())?;
            self.title = title;
        }

        Ok(())
    }

    fn pace(&mut self) {
        let elapsed = self.last_present.elapsed();

        if elapsed < self.frame_budget {
            thread::sleep(self.frame_budget - elapsed);
        }

        self.last_present = Instant::now();
    }
}

impl Renderer for SdlRenderer<'_> {
    type Error = String;

    fn handle_event(&mut self, event: &RenderEvent) -> Result<(), Self::Error> {
        match event {
            RenderEvent::Started(algorithm) | RenderEvent::Restarted(algorithm) => {
                debug!("Drawing {} sort", algorithm);
            }
            RenderEvent::Completed { algorithm, steps } => {
                debug!("{} sort completed in {} steps", algorithm, steps);
            }
        }

        Ok(())
    }

    fn poll_commands(&mut self) -> Vec<Command> {
        self.handle_events();

        std::mem::take(&mut self.pending)
    }

    fn draw(&mut self, frame: &Frame) -> Result<(), Self::Error> {
        let (width, height) = self.canvas.output_size()?;

        self.canvas.set_draw_color(color(Rgb::BLACK));
        self.canvas.clear();

        for bar in frame.bars(width, height) {
            let rect = Rect::new(bar.x, bar.y, bar.width, bar.height);

            self.canvas.set_draw_color(color(bar.color()));
            self.canvas.fill_rect(rect)?;
        }

        if self.fonts.is_some() {
            for label in &frame.labels {
                self.draw_label(label)?;
            }
        } else {
            self.update_title(&frame.labels)?;
        }

        self.canvas.present();
        self.pace();

        Ok(())
    }

    fn should_quit(&mut self) -> bool {
        self.should_quit
    }
}
