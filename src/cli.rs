use crate::buffer::ValueRange;
use crate::engine::Algorithm;
use crate::size::Size;
use std::path::PathBuf;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub headless: bool,
    pub window_size: Size,
    pub fps: u32,
    pub vsync: bool,
    pub fullscreen: bool,
    pub font: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub algorithm: Algorithm,
    pub size: usize,
    pub range: ValueRange,
    pub seed: Option<u64>,
    pub renderer: RendererConfig,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Sorting Visualizer",
    about = "Watch sorting algorithms work one step per frame"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "selection",
        help = "Algorithm to start with: bubble, selection, insertion or quick"
    )]
    algorithm: Algorithm,

    #[structopt(short = "n", long, default_value = "100", help = "Number of values to sort")]
    size: usize,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        default_value = "1000x800",
        help = "Window size"
    )]
    window: Size,

    #[structopt(
        parse(try_from_str),
        short,
        long,
        help = "Value range as MIN..MAX, defaults to 50 up to 20 short of the window height"
    )]
    range: Option<ValueRange>,

    #[structopt(parse(try_from_str), short, long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(long, default_value = "60", help = "Frames per second, one step per frame")]
    fps: u32,

    #[structopt(long, help = "Turns on vsync")]
    vsync: bool,

    #[structopt(short, long, help = "Runs the application in full screen")]
    fullscreen: bool,

    #[structopt(parse(from_os_str), long, help = "TTF font used for the help and status lines")]
    font: Option<PathBuf>,

    #[structopt(long, help = "Sort once without opening a window")]
    headless: bool,

    #[structopt(long, possible_values = &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, String> {
        if self.size == 0 {
            Err("Size must be at least 1")?
        }

        if !self.headless && self.size > self.window.width {
            Err(format!(
                "Cannot fit {} bars into a window {} pixels wide",
                self.size, self.window.width
            ))?
        }

        if self.fps == 0 {
            Err("Fps must be at least 1")?
        }

        let range = match self.range {
            Some(range) => range,
            None => ValueRange::for_height(self.window.height)?,
        };

        Ok(AppConfig {
            algorithm: self.algorithm,
            size: self.size,
            range,
            seed: self.seed,
            renderer: RendererConfig {
                headless: self.headless,
                window_size: self.window,
                fps: self.fps,
                vsync: self.vsync,
                fullscreen: self.fullscreen,
                font: self.font,
            },
        })
    }
}
