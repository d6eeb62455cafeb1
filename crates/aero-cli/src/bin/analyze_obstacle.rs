use aero_cli::{client_from_config, establish_session, init_tracing};
use aero_core::{AnalysisTarget, Coord};
use aero_session::{ActiveView, Config};
use anyhow::{bail, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Analyze a single obstacle position and print the report")]
struct Args {
    /// Account username (omit for a guest session)
    #[arg(long)]
    username: Option<String>,

    /// Account password
    #[arg(long)]
    password: Option<String>,

    /// Analyze against one stored surface
    #[arg(long, conflicts_with = "airport")]
    surface_id: Option<String>,

    /// Analyze against every surface of an airport grouping
    #[arg(long)]
    airport: Option<String>,

    #[arg(long)]
    lat: f64,
    #[arg(long)]
    lon: f64,
    /// Obstacle tip elevation in meters AMSL
    #[arg(long)]
    alt: f64,
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

    session.set_view(ActiveView::Analyze);
    session.select_target(target);
    session.set_obstacle(Coord {
        lat: args.lat,
        lon: args.lon,
        alt: args.alt,
    });

    let result = session.analyze(&client).await?;
    let verdict = if result.penetration { "PENETRATION" } else { "CLEAR" };
    println!(
        "{}: limited by {} (allowed {:.2} m, margin {:.2} m)",
        verdict, result.limiting_surface, result.allowed_alt, result.margin
    );

    let report = session.build_report(&client, &result, None);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
