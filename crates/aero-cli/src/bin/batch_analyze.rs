use std::fs;
use std::path::PathBuf;

use aero_cli::{client_from_config, establish_session, init_tracing};
use aero_core::AnalysisTarget;
use aero_session::Config;
use aero_viewer::MemorySink;
use anyhow::{bail, Context, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run batch obstacle analysis and write the CSV export")]
struct Args {
    /// Account username (batch analysis is a premium feature)
    #[arg(long)]
    username: Option<String>,

    /// Account password
    #[arg(long)]
    password: Option<String>,

    /// File of "id, lat, lon, alt" rows; malformed rows are skipped
    #[arg(long)]
    input: PathBuf,

    /// Where to write the result CSV
    #[arg(long, default_value = "batch_results.csv")]
    output: PathBuf,

    /// Analyze against one stored surface
    #[arg(long, conflicts_with = "airport")]
    surface_id: Option<String>,

    /// Analyze against every surface of an airport grouping
    #[arg(long)]
    airport: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();

    let config = Config::from_env();
    let mut client = client_from_config(&config);
    let mut session = establish_session(
        &config,
        &mut client,
        args.username.as_deref(),
        args.password.as_deref(),
    )
    .await?;

    let target = match (args.surface_id, args.airport) {
        (Some(surface_id), None) => AnalysisTarget::Surface { surface_id },
        (None, Some(airport_name)) => AnalysisTarget::Airport { airport_name },
        _ => bail!("exactly one of --surface-id or --airport is required"),
    };
    session.select_target(target);

    let input = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let sink = MemorySink::new();
    let rows = session.batch_analyze(&client, &sink, &input).await?;

    let total = rows.len();
    let violations = rows.iter().filter(|row| row.penetration).count();
    println!("Analyzed {} obstacles, {} violations", total, violations);
    for row in rows.iter().filter(|row| row.penetration) {
        match row.margin {
            Some(margin) => println!(
                "  {}  {} by {:.2} m",
                row.id, row.limiting_surface, -margin
            ),
            None => println!("  {}  {}", row.id, row.limiting_surface),
        }
    }

    let csv = session
        .export_batch_csv()
        .context("batch produced no result rows")?;
    fs::write(&args.output, csv)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
