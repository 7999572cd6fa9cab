//! Renders the logo candidates and their cropped variants as PNG files.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use aura_logo::{DesignKind, LogoError, LogoGenerator, LogoProfile};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Directory the PNG files are written to
    #[arg(short, long, default_value = "assets/icon")]
    output: PathBuf,

    /// JSON profile overriding the built-in settings
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Design to render; repeat to select several (default: all)
    #[arg(short, long, value_enum)]
    design: Vec<DesignKind>,

    /// Print the effective profile as JSON and exit
    #[arg(long)]
    print_profile: bool,
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

fn load_profile(path: Option<&PathBuf>) -> Result<LogoProfile, LogoError> {
    let Some(path) = path else {
        return Ok(LogoProfile::default());
    };
    log::info!("loading profile from {}", path.display());
    let profile = LogoProfile::from_json(&fs::read_to_string(path)?)?;
    profile.validate()?;
    Ok(profile)
}

fn run(args: Arguments) -> Result<(), LogoError> {
    let profile = load_profile(args.profile.as_ref())?;
    if args.print_profile {
        println!("{}", profile.to_json_pretty()?);
        return Ok(());
    }

    let kinds = if args.design.is_empty() {
        DesignKind::ALL.to_vec()
    } else {
        args.design
    };

    let logos = LogoGenerator::new(profile).render_many(&kinds)?;
    let written = logos.save(&args.output)?;
    println!("{} logo file(s) written to {}", written.len(), args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    match run(Arguments::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
