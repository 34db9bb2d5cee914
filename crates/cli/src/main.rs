use airfoils::prelude::*;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::f64::consts::PI;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;

#[derive(Parser)]
#[command(name = "airfoils-cli")]
#[command(about = "Solve NACA 4-digit sections with the source-vortex panel method")]
struct Cmd {
    /// Log solver internals at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one section and report coefficients and surface pressures
    Solve {
        #[command(flatten)]
        section: SectionArgs,
    },
    /// Sample velocity and pressure on a grid around the solved section
    Field {
        #[command(flatten)]
        section: SectionArgs,
        #[arg(long, default_value_t = FieldGrid::default().columns)]
        columns: usize,
        #[arg(long, default_value_t = FieldGrid::default().rows)]
        rows: usize,
    },
}

#[derive(Args, Clone, Debug)]
struct SectionArgs {
    /// NACA 4-digit designation, e.g. 2412
    #[arg(long, default_value = "2412")]
    naca: String,
    /// Panel count (even, 20..=200)
    #[arg(long, default_value_t = 100)]
    points: usize,
    /// Angle of attack in degrees
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    alpha: f64,
    #[arg(long)]
    closed_te: bool,
    /// Output JSON path; prints to stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
}

impl SectionArgs {
    fn params(&self) -> serde_json::Value {
        serde_json::json!({
            "naca": self.naca,
            "points": self.points,
            "alpha_degrees": self.alpha,
            "closed_te": self.closed_te,
        })
    }
}

#[derive(Debug, Serialize)]
struct SolveReport {
    lift: f64,
    drag: f64,
    moment: f64,
    aerodynamic_center: [f64; 2],
    rotated_aerodynamic_center: [f64; 2],
    surface: Vec<SurfacePoint>,
}

#[derive(Debug, Serialize)]
struct SurfacePoint {
    x: f64,
    y: f64,
    cp: f64,
}

#[derive(Debug, Serialize)]
struct FieldReport {
    columns: usize,
    rows: usize,
    masked: usize,
    min_cp: Option<f64>,
    outline: Vec<[f64; 2]>,
    /// Row-major; `None` inside the body.
    samples: Vec<Option<FieldPoint>>,
}

#[derive(Debug, Serialize)]
struct FieldPoint {
    x: f64,
    y: f64,
    u: f64,
    v: f64,
    cp: f64,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Solve { section } => {
            let report = solve(&section)?;
            emit(&section, &report)
        }
        Action::Field {
            section,
            columns,
            rows,
        } => {
            let grid = FieldGrid {
                columns,
                rows,
                ..FieldGrid::default()
            };
            let report = field(&section, &grid)?;
            emit(&section, &report)
        }
    }
}

fn solved_section(args: &SectionArgs) -> Result<Airfoil> {
    let mut params = Naca4Params::from_designation(&args.naca, args.points)
        .with_context(|| format!("building NACA {}", args.naca))?;
    params.closed_trailing_edge = args.closed_te;
    params.angle_of_attack_radians = args.alpha * PI / 180.0;
    let airfoil = Airfoil::naca4(&params)?;
    let solved = compute_source_vortex(&airfoil, args.alpha)
        .with_context(|| format!("solving NACA {} at {} deg", args.naca, args.alpha))?;
    tracing::info!(
        naca = %args.naca,
        panels = solved.panel_count(),
        alpha = args.alpha,
        "solved"
    );
    Ok(solved)
}

fn solve(args: &SectionArgs) -> Result<SolveReport> {
    let solved = solved_section(args)?;
    let s = solved.summary().context("post-processing solved section")?;
    let surface = solved
        .rotated_panels()
        .iter()
        .map(|p| SurfacePoint {
            x: p.mid().x,
            y: p.mid().y,
            cp: p.coefficient_of_pressure,
        })
        .collect();
    Ok(SolveReport {
        lift: s.lift,
        drag: s.drag,
        moment: s.moment,
        aerodynamic_center: [s.aerodynamic_center.x, s.aerodynamic_center.y],
        rotated_aerodynamic_center: [
            s.rotated_aerodynamic_center.x,
            s.rotated_aerodynamic_center.y,
        ],
        surface,
    })
}

fn field(args: &SectionArgs, grid: &FieldGrid) -> Result<FieldReport> {
    let solved = solved_section(args)?;
    let flow = sample_flow_field(&solved, grid).context("sampling flow field")?;
    let samples = flow
        .samples
        .iter()
        .map(|s| {
            s.velocity.map(|v| FieldPoint {
                x: s.point.x,
                y: s.point.y,
                u: v.x,
                v: v.y,
                cp: v.z,
            })
        })
        .collect();
    Ok(FieldReport {
        columns: grid.columns,
        rows: grid.rows,
        masked: flow.masked_count(),
        min_cp: flow.min_pressure_coefficient(),
        outline: flow.outline.points().iter().map(|p| [p.x, p.y]).collect(),
        samples,
    })
}

fn emit<T: Serialize>(args: &SectionArgs, report: &T) -> Result<()> {
    match &args.out {
        Some(path) => {
            output::write_json(path, args.params(), report)?;
            tracing::info!(out = %path.display(), "wrote");
        }
        None => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}
