use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use cineteca_core::{
    ClientConfig, HttpCatalog, UploadForm, get_config_path, load_movie_detail, load_movie_list,
    location::detail_href,
};
use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), (secs % 60.0).floor())
    }
}

#[derive(Parser)]
#[command(name = "cineteca")]
#[command(about = "Browse, watch and upload movies in a cineteca catalog")]
struct Cli {
    /// Catalog API base URL (overrides CINETECA_API_BASE and the config file)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Config file path (defaults to <config dir>/cineteca/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog
    List {
        /// Print the grid as HTML cards
        #[arg(long)]
        html: bool,
    },

    /// Show one movie: a page location (`movie.html?id=42`), a query or a bare id
    Show {
        target: String,

        /// Print the detail view as HTML
        #[arg(long)]
        html: bool,
    },

    /// Upload a thumbnail and a video, then create the movie record
    Upload {
        #[arg(long)]
        title: String,

        #[arg(long)]
        year: String,

        /// Thumbnail image
        #[arg(long)]
        thumb: PathBuf,

        /// Video file
        #[arg(long)]
        video: PathBuf,
    },
}

/// Treat a target without any query syntax as a bare movie id
fn location_for(target: &str) -> String {
    if target.contains('?') || target.contains('=') {
        target.to_string()
    } else {
        detail_href(target)
    }
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn init_logging(verbose: bool) {
    // RUST_LOG wins; otherwise the verbose flag picks the level
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "cineteca=debug,cineteca_core=debug".to_string()
        } else {
            "cineteca=info,cineteca_core=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn list(api: &HttpCatalog, html: bool) {
    // A failed fetch has already been logged; the grid simply stays empty
    let Some(view) = load_movie_list(api).await else {
        return;
    };

    if html {
        print!("{}", view.html());
    } else if view.movies.is_empty() {
        println!("{}", style("No movies in the catalog").dim());
    } else {
        println!("{}", view.text());
    }
}

async fn show(api: &HttpCatalog, target: &str, html: bool) {
    let location = location_for(target);
    let Some(view) = load_movie_detail(api, &location).await else {
        return;
    };

    if html {
        print!("{}", view.html());
    } else {
        println!("{}", view.text());
    }
}

async fn upload(api: &HttpCatalog, mut form: UploadForm) -> Result<()> {
    let start = Instant::now();
    let spinner = create_spinner("Reading files...");

    let created = form
        .submit_with_progress(api, |step| spinner.set_message(format!("{}...", step.label())))
        .await;
    let message = form.message.clone().unwrap_or_default();

    match created {
        Some(movie) => {
            spinner.finish_with_message(format!(
                "{} {} {}",
                style("✓").green().bold(),
                message,
                style(format!("[{}]", format_duration(start.elapsed()))).dim()
            ));
            println!("  {} {}", style("thumb:").dim(), style(&movie.thumb).cyan());
            println!("  {} {}", style("video:").dim(), style(&movie.video).cyan());
            Ok(())
        }
        None => {
            spinner.finish_with_message(format!("{} {}", style("✗").red().bold(), message));
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.unwrap_or_else(get_config_path);
    let config = match ClientConfig::resolve(cli.api_base.as_deref(), &config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };
    tracing::debug!(api_base = %config.api_base, "using catalog API");

    let api = HttpCatalog::new(config);

    match cli.command {
        Commands::List { html } => list(&api, html).await,
        Commands::Show { target, html } => show(&api, &target, html).await,
        Commands::Upload {
            title,
            year,
            thumb,
            video,
        } => {
            let form = UploadForm::new(title, year, Some(thumb), Some(video));
            upload(&api, form).await?;
        }
    }

    Ok(())
}
