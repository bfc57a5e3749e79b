use clap::Parser;
use formosa_vista::catalog::{self, Location, TAIWAN_LOCATIONS};
use formosa_vista::server;

/// Formosa Vista — Taiwan panorama tour catalog
///
/// Prints tour locations with their camera orientation hints, or serves
/// the catalog over HTTP for the panorama viewer.
///
/// Examples:
///   formosa "Sun Moon Lake"
///   formosa --id 3
///   formosa --list
///   formosa taroko --json
///   formosa --serve --port 8080
#[derive(Parser)]
#[command(name = "formosa", version, about, long_about = None)]
struct Cli {
    /// Location name (positional). Example: formosa "Taroko Gorge"
    #[arg(index = 1)]
    name_positional: Option<String>,

    /// Location name (named). Example: --name alishan
    #[arg(long)]
    name: Option<String>,

    /// Look up a location by its id (1-5).
    #[arg(long)]
    id: Option<u32>,

    /// Print the whole tour in order.
    #[arg(long, short = 'l')]
    list: bool,

    /// Emit JSON to stdout instead of the human banner.
    #[arg(long)]
    json: bool,

    /// Validate the catalog literals and exit.
    #[arg(long)]
    check: bool,

    /// Serve the catalog over HTTP.
    #[arg(long)]
    serve: bool,

    /// Bind address for --serve.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port for --serve.
    #[arg(long, short = 'p', default_value_t = 8080)]
    port: u16,
}

fn main() {
    let cli = Cli::parse();

    // ── Catalog self-check ──────────────────────────────────────

    if cli.check {
        match catalog::validate_catalog() {
            Ok(()) => {
                eprintln!("  Catalog OK: {} entries.", TAIWAN_LOCATIONS.len());
                return;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    // ── Server mode ─────────────────────────────────────────────

    if cli.serve {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start async runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(server::start(&cli.host, cli.port));
        return;
    }

    // ── Full tour listing ───────────────────────────────────────

    if cli.list {
        if cli.json {
            println!("{}", serde_json::to_string_pretty(TAIWAN_LOCATIONS).unwrap());
        } else {
            for loc in TAIWAN_LOCATIONS {
                eprintln!("  {}", loc.display_line());
                eprintln!();
            }
        }
        return;
    }

    // ── Single location ─────────────────────────────────────────

    let loc = select_location(&cli);

    eprintln!("  {}", loc.display_line());
    if cli.json {
        println!("{}", serde_json::to_string_pretty(loc).unwrap());
    }
}

fn select_location(cli: &Cli) -> &'static Location {
    // Priority: --id > --name > positional name > usage error

    // 1. --id flag
    if let Some(id) = cli.id {
        return catalog::find_by_id(id).unwrap_or_else(|| {
            eprintln!("Error: No location with id {}. Valid ids: 1-5.", id);
            std::process::exit(1);
        });
    }

    // 2. --name flag
    if let Some(ref name) = cli.name {
        return find_or_exit(name);
    }

    // 3. Positional name argument
    if let Some(ref name) = cli.name_positional {
        return find_or_exit(name);
    }

    // 4. Nothing provided
    eprintln!("Error: No location specified.");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  formosa \"Sun Moon Lake\"");
    eprintln!("  formosa --name jiufen");
    eprintln!("  formosa --id 3");
    eprintln!("  formosa --list");
    eprintln!("  formosa --serve --port 8080");
    std::process::exit(1);
}

fn find_or_exit(name: &str) -> &'static Location {
    catalog::find_by_name(name).unwrap_or_else(|| {
        eprintln!("Error: {}", catalog::CatalogError::NotFound(name.to_string()));
        eprintln!("  Try 'formosa --list' to see the tour.");
        std::process::exit(1);
    })
}
