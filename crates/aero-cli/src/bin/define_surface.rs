use std::fs;
use std::path::PathBuf;

use aero_cli::{client_from_config, establish_session, init_tracing};
use aero_core::{
    feet_to_meters, parse_custom_points, Coord, DesignGroup, FacilityType, FamilyParams,
    NavaidAlignment, NavaidParams, RunwayType, SurfaceDefinitionRequest, VssParams,
};
use aero_session::Config;
use aero_viewer::MemorySink;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Create a surface and print the stored grouping")]
struct Args {
    /// Account username (omit for a guest session)
    #[arg(long)]
    username: Option<String>,

    /// Account password
    #[arg(long)]
    password: Option<String>,

    /// Surface name, e.g. "RWY 09/27"
    #[arg(long)]
    name: String,

    /// Airport grouping name, e.g. "EGLL"
    #[arg(long)]
    airport: String,

    #[arg(long)]
    t1_lat: f64,
    #[arg(long)]
    t1_lon: f64,
    /// Threshold 1 elevation in feet
    #[arg(long)]
    t1_alt_ft: f64,

    #[arg(long)]
    t2_lat: f64,
    #[arg(long)]
    t2_lon: f64,
    /// Threshold 2 elevation in feet
    #[arg(long)]
    t2_alt_ft: f64,

    /// Aerodrome reference point elevation in feet
    #[arg(long)]
    arp_alt_ft: f64,

    #[command(subcommand)]
    family: Family,
}

#[derive(Subcommand, Debug)]
enum Family {
    /// Annex 14 obstacle limitation surfaces
    Ols {
        #[arg(long, default_value = "precision")]
        runway_type: String,
    },
    /// Legacy obstacle assessment surfaces
    Oas {
        #[arg(long, default_value = "precision")]
        runway_type: String,
    },
    /// Obstacle-free zone
    Ofz {
        #[arg(long, default_value = "precision")]
        runway_type: String,
        /// Aeroplane design group (I, IIA, IIB, IIC, III, IV, V)
        #[arg(long, default_value = "IV")]
        design_group: String,
    },
    /// Visual segment surface
    Vss {
        #[arg(long)]
        strip_width_m: f64,
        #[arg(long)]
        oca_m: f64,
        #[arg(long, default_value_t = 3.0)]
        descent_angle_deg: f64,
    },
    /// Navigation-aid restrictive surfaces
    Navaid {
        /// Facility type (CVOR, DVOR, DF, DME, NDB, ILS_LLZ, ILS_GP, MLS)
        #[arg(long)]
        facility: String,
        #[arg(long)]
        antenna_lat: f64,
        #[arg(long)]
        antenna_lon: f64,
        /// Antenna elevation in feet
        #[arg(long)]
        antenna_alt_ft: f64,
        /// Operational bearing, directional facilities only
        #[arg(long)]
        bearing: Option<f64>,
        #[arg(long)]
        thr_lat: Option<f64>,
        #[arg(long)]
        thr_lon: Option<f64>,
        /// Reference threshold elevation in feet
        #[arg(long)]
        thr_alt_ft: Option<f64>,
    },
    /// Operator-supplied polygon outline
    Custom {
        /// File of "id, lat, lon, alt" rows; malformed rows are skipped
        #[arg(long)]
        points_file: PathBuf,
    },
}

fn runway_type(value: &str) -> Result<RunwayType> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .with_context(|| format!("unknown runway type '{}'", value))
}

fn design_group(value: &str) -> Result<DesignGroup> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .with_context(|| format!("unknown design group '{}'", value))
}

fn facility_type(value: &str) -> Result<FacilityType> {
    serde_json::from_value(serde_json::Value::String(value.to_uppercase()))
        .with_context(|| format!("unknown facility type '{}'", value))
}

fn build_params(family: &Family) -> Result<FamilyParams> {
    Ok(match family {
        Family::Ols { runway_type: rt } => FamilyParams::Ols {
            runway_type: runway_type(rt)?,
        },
        Family::Oas { runway_type: rt } => FamilyParams::Oas {
            runway_type: runway_type(rt)?,
        },
        Family::Ofz {
            runway_type: rt,
            design_group: adg,
        } => FamilyParams::Ofz {
            runway_type: runway_type(rt)?,
            design_group: design_group(adg)?,
        },
        Family::Vss {
            strip_width_m,
            oca_m,
            descent_angle_deg,
        } => FamilyParams::Vss(VssParams {
            strip_width_m: *strip_width_m,
            oca_m: *oca_m,
            descent_angle_deg: *descent_angle_deg,
        }),
        Family::Navaid {
            facility,
            antenna_lat,
            antenna_lon,
            antenna_alt_ft,
            bearing,
            thr_lat,
            thr_lon,
            thr_alt_ft,
        } => {
            let alignment = match (bearing, thr_lat, thr_lon, thr_alt_ft) {
                (Some(bearing), Some(lat), Some(lon), Some(alt_ft)) => Some(NavaidAlignment {
                    bearing_deg: *bearing,
                    threshold: Coord {
                        lat: *lat,
                        lon: *lon,
                        alt: feet_to_meters(*alt_ft),
                    },
                }),
                (None, None, None, None) => None,
                _ => bail!("--bearing, --thr-lat, --thr-lon and --thr-alt-ft go together"),
            };
            FamilyParams::Navaid(NavaidParams {
                facility_type: facility_type(facility)?,
                antenna: Coord {
                    lat: *antenna_lat,
                    lon: *antenna_lon,
                    alt: feet_to_meters(*antenna_alt_ft),
                },
                alignment,
            })
        }
        Family::Custom { points_file } => {
            let text = fs::read_to_string(points_file)
                .with_context(|| format!("reading {}", points_file.display()))?;
            FamilyParams::Custom {
                points: parse_custom_points(&text),
            }
        }
    })
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

    let request = SurfaceDefinitionRequest {
        name: args.name.clone(),
        airport_name: args.airport.clone(),
        t1: Coord {
            lat: args.t1_lat,
            lon: args.t1_lon,
            alt: feet_to_meters(args.t1_alt_ft),
        },
        t2: Coord {
            lat: args.t2_lat,
            lon: args.t2_lon,
            alt: feet_to_meters(args.t2_alt_ft),
        },
        arp_alt_m: feet_to_meters(args.arp_alt_ft),
        params: build_params(&args.family)?,
    };

    let sink = MemorySink::new();
    let id = session.define_surface(&client, &sink, request).await?;
    println!("Created surface {} ({})", id, args.name);

    println!("Stored groupings ({} tier):", format!("{:?}", session.tier()).to_lowercase());
    for (airport, surfaces) in session.store().group_by_airport() {
        println!("  {}", airport);
        for surface in surfaces {
            println!("    {}  {:?}  {}", surface.id, surface.family, surface.name);
        }
    }

    Ok(())
}
