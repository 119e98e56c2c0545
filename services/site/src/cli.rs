use crate::directory::{run_export, ExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use direct_title_loans::config::AppConfig;
use direct_title_loans::content::ContentRegistry;
use direct_title_loans::error::AppError;
use direct_title_loans::render::{page_for_path, SiteRenderer};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(
    name = "Direct Title Loans site",
    about = "Serve and render the Direct Title Loans marketing site",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the HTML for a site path, e.g. /locations/florida/miami
    Render(RenderArgs),
    /// Branch directory tools
    Locations {
        #[command(subcommand)]
        command: LocationsCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LocationsCommand {
    /// Write the branch name/address/phone directory as CSV
    Export(ExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Site path to render, matched exactly
    pub(crate) path: String,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Render(args) => run_render(args),
        Command::Locations {
            command: LocationsCommand::Export(args),
        } => run_export(args),
    }
}

fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let registry = ContentRegistry::load(config.site.content_dir.as_deref())?;
    let renderer = SiteRenderer::new(&config.site, &registry);

    let document = page_for_path(&registry, &args.path)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(renderer.render(&document).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
