use log::error;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io;
use std::process;
use structopt::StructOpt;
use structopt_flags::LogLevel;

use sorting_visualizer::app::SortApp;
use sorting_visualizer::cli::Opt;

fn main() {
    let opt = Opt::from_args();

    if let Some(shell) = opt.completions {
        Opt::clap().gen_completions_to("sorting-visualizer", shell, &mut io::stdout());
        return;
    }

    if let Err(e) = TermLogger::init(
        opt.verbose.get_level_filter(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to set up logging: {}", e);
    }

    let config = match opt.to_app_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        }
    };

    if let Err(e) = SortApp::new(config).run() {
        error!("{}", e);
        process::exit(1);
    }
}
