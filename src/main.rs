use std::{env, io, process};

use anyhow::Context;
use clap::Parser;
use webinit::{
    config::{Config, Settings},
    prompt::{Answer, Prompt},
    scaffold::{Outcome, Scaffolder},
};

/// Init a directory to be webpage.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Name of the main html file.
    name: String,
    /// Use asset directory.
    #[arg(long)]
    asset: bool,
    /// CSS file name, set to "None" to not creating css file.
    #[arg(short, long = "css_fname", default_value = "style")]
    css_fname: String,
    /// JavaScript file name, set to "None" to not creating javascript file.
    #[arg(short, long = "js_fname", default_value = "script")]
    js_fname: String,
    /// Overwrite existing files without asking.
    #[arg(short, long)]
    yes: bool,
    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(err) = run(args) {
        log::error!("Encountered error `{err:#}`");
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let settings = Settings::load().context("Reading settings")?;
    let template_dir = settings.template_dir()?;
    log::debug!("Using templates from `{}`", template_dir.display());

    let work_dir = env::current_dir().context("Reading current directory")?;
    let config = Config::load(&template_dir).context("Loading author info")?;
    let mut scaffolder = Scaffolder::new(work_dir, config)?;
    scaffolder
        .config_mut()
        .configure(&args.name, args.asset, &args.css_fname, &args.js_fname);

    let mut stdout = io::stdout();
    let outcome = if args.yes {
        scaffolder.run(&mut Answer::Yes, &mut stdout)?
    } else {
        let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
        scaffolder.run(&mut prompt, &mut stdout)?
    };
    if let Outcome::Written(paths) = outcome {
        log::debug!("Wrote {} file(s)", paths.len());
    }
    Ok(())
}
