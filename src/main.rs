//! Neck posture estimation from image files.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use neck_posture::{
    app::{AnglePolicy, AppConfig, PostureApp},
    config::{Config, EXAMPLE_CONFIG},
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Images to measure
    #[arg(required_unless_present = "print_config")]
    images: Vec<PathBuf>,

    /// Path to the pose landmark ONNX model
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Use the superseded single-angle posture check
    #[arg(long)]
    legacy: bool,

    /// Largest head-forward angle in degrees still considered good
    #[arg(long)]
    max_good_angle: Option<f64>,

    /// Write annotated copies of the images into this directory
    #[arg(short, long)]
    annotate_dir: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    info!("Neck Posture Estimation");

    let mut settings = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config file {}", config_path.display()))?
    } else {
        Config::default()
    };

    // Command line flags take precedence over the file
    if let Some(model) = args.model {
        settings.model.pose_landmarks = model;
    }
    if let Some(max_good_angle) = args.max_good_angle {
        settings.assessment.max_good_angle = max_good_angle;
    }
    if let Some(dir) = args.annotate_dir {
        settings.output.annotate_dir = Some(dir);
    }
    settings.output.pretty |= args.pretty;

    let policy = if args.legacy {
        AnglePolicy::Legacy
    } else {
        AnglePolicy::HeadForward
    };
    let config = AppConfig::from_config(&settings, args.images, policy);

    let mut app = PostureApp::from_model(config, &settings).context("Failed to initialize pose model")?;
    let stdout = std::io::stdout();
    app.run(&mut stdout.lock())?;

    Ok(())
}
