use clap::{Parser, Subcommand};
use photo_wall::catalog::{self, GithubContents};
use photo_wall::category::Filter;
use photo_wall::config::{self, GalleryConfig, SourceOverrides};
use photo_wall::gallery::{Gallery, GalleryState, Viewport};
use photo_wall::surface::{HtmlSurface, LoadStatus};
use photo_wall::{output, page};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "photo-wall")]
#[command(about = "Progressive photo wall over a GitHub image directory")]
#[command(long_about = "\
Progressive photo wall over a GitHub image directory

One directory of a public GitHub repository is listed through the contents
API. Images (jpg, jpeg, png, webp, gif) are sorted into categories by
keywords in their filenames:

  portraits   portrait, people, person
  landscape   landscape, scenery
  ai          ai, generated, midjourney, stable
  edits       edit, before, after

Anything else is 'uncategorized'. The first matching row wins.

Run 'photo-wall gen-config' to generate a documented gallery.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "gallery.toml", global = true)]
    config: PathBuf,

    /// Override source.owner from the config
    #[arg(long, global = true)]
    owner: Option<String>,

    /// Override source.repo from the config
    #[arg(long, global = true)]
    repo: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the listing and print the categorized catalog
    Catalog,
    /// Render one HTML page per filter
    Build(BuildArgs),
    /// Validate the config without fetching anything
    Check,
    /// Print a stock gallery.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Output directory
    #[arg(long, default_value = "dist")]
    output: PathBuf,

    /// Batches rendered up front; the page loads the rest on scroll
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    batches: u32,

    /// Render every batch up front (ignores --batches)
    #[arg(long)]
    all: bool,

    /// Only build the page for this filter
    #[arg(long)]
    filter: Option<Filter>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Command::Catalog => {
            let config = load_config(&cli)?;
            let repo = config.repo_ref();
            let source = GithubContents::new(&config.source.api_base)?;
            let catalog = catalog::load_catalog(&source, &repo)
                .inspect_err(|e| error!(error = %e, "failed to fetch images from the GitHub API"))?;
            output::print_catalog_output(&catalog, &repo);
        }
        Command::Build(args) => {
            let config = load_config(&cli)?;
            build(&config, args)?;
        }
        Command::Check => {
            let config = load_config(&cli)?;
            println!("==> Checking {}", cli.config.display());
            let repo = config.repo_ref();
            println!("    Source: {}/{}/{}", repo.owner, repo.repo, repo.path);
            println!("    Batch size: {}", config.gallery.batch_size);
            println!("==> Config is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Log to stderr so command output on stdout stays clean.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,photo_wall=info"));
    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<GalleryConfig, config::ConfigError> {
    let overrides = SourceOverrides {
        owner: cli.owner.clone(),
        repo: cli.repo.clone(),
    };
    config::load_config(&cli.config, &overrides)
}

fn build(config: &GalleryConfig, args: &BuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = config.repo_ref();
    let batch_size = config.gallery.batch_size;

    println!("==> Fetching {}/{}/{}", repo.owner, repo.repo, repo.path);
    let source = GithubContents::new(&config.source.api_base)?;
    let mut gallery = match catalog::load_catalog(&source, &repo) {
        Ok(catalog) => {
            let state = GalleryState::new(catalog, batch_size)
                .with_scroll_threshold(config.gallery.scroll_threshold);
            Gallery::new(state, HtmlSurface::new())
        }
        Err(e) => {
            error!(error = %e, "failed to fetch images from the GitHub API");
            // The page still gets written, empty, with the failure status
            let failed: Gallery = Gallery::failed(batch_size, HtmlSurface::new());
            let status = failed.surface().status().unwrap_or(LoadStatus::Failed);
            let path = page::write_page(
                &args.output,
                Filter::All,
                page::render_page(config, Filter::All, failed.surface(), &[]),
            )?;
            eprintln!("{status}");
            println!("==> Wrote {}", path.display());
            return Ok(());
        }
    };

    println!("==> Rendering pages → {}", args.output.display());
    let filters: Vec<Filter> = match args.filter {
        Some(filter) => vec![filter],
        None => Filter::choices().collect(),
    };
    for filter in filters {
        let mut outcome = gallery.set_filter(filter);
        let mut remaining = args.batches - 1;
        while args.all || remaining > 0 {
            // Everything rendered so far fits on screen, so the viewer is always at the bottom
            match gallery.on_viewport_change(Viewport::scrolled_to_bottom(900.0, 900.0)) {
                Some(next) => outcome = next,
                None => break,
            }
            remaining = remaining.saturating_sub(1);
        }
        let path = page::write_page(
            &args.output,
            filter,
            page::render_page(config, filter, gallery.surface(), &gallery.pending_units()),
        )?;
        output::print_page_line(filter, &path, &outcome, gallery.state().filtered_len());
    }

    info!(output = %args.output.display(), "build complete");
    println!("==> Build complete: {}", args.output.display());
    Ok(())
}
