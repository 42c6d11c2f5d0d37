//! Summarizes the geometry of a snake chart block described by a toml config.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgAction, Command};
use snake::image::Image;
use snake::prelude::*;
use snake::variables::{I00, I11, I12, I22, I33, NMETRIC};

fn summarize() -> Result<()> {
    let matches = Command::new("snakeinfo")
        .about("Precomputes the geometry of a block in the snake chart and reports its properties.")
        .arg(
            Arg::new("config")
                .value_name("FILE")
                .help("Block configuration (defaults are used if omitted)"),
        )
        .arg(
            Arg::new("amplitude")
                .short('a')
                .long("amplitude")
                .value_name("FLOAT")
                .help("Overrides the chart amplitude"),
        )
        .arg(
            Arg::new("wavenumber")
                .short('k')
                .long("wavenumber")
                .value_name("FLOAT")
                .help("Overrides the chart wavenumber"),
        )
        .arg(
            Arg::new("export")
                .short('e')
                .long("export")
                .value_name("FILE")
                .help("Writes the resolved configuration to a file"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log precomputation details"),
        )
        .version("0.1.0")
        .get_matches();

    env_logger::builder()
        .filter_level(if matches.get_flag("verbose") {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Info
        })
        .init();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::import(&PathBuf::from(path))
            .with_context(|| format!("Failed to load config {path}"))?,
        None => Config::default(),
    };

    if let Some(amplitude) = matches.get_one::<String>("amplitude") {
        config.chart.amplitude = amplitude
            .parse::<f64>()
            .map_err(|_| anyhow!("Failed to parse amplitude as float"))?;
    }

    if let Some(wavenumber) = matches.get_one::<String>("wavenumber") {
        config.chart.wavenumber = wavenumber
            .parse::<f64>()
            .map_err(|_| anyhow!("Failed to parse wavenumber as float"))?;
    }

    config.validate().context("Invalid configuration")?;

    if let Some(path) = matches.get_one::<String>("export") {
        config
            .export(&PathBuf::from(path))
            .with_context(|| format!("Failed to export config to {path}"))?;
        log::info!("Exported configuration to {path}");
    }

    let coords = Coordinates::from_config(&config)?;
    let grid = coords.grid();
    let chart = coords.chart();

    log::info!(
        "Chart a = {:.6}, k = {:.6}, physics {:?}",
        chart.amplitude(),
        chart.wavenumber(),
        coords.physics()
    );
    log::info!(
        "Block of {:?} cells ({:?} with ghosts), x1 in [{:.6}, {:.6}]",
        [
            grid.axis(0).active(),
            grid.axis(1).active(),
            grid.axis(2).active()
        ],
        grid.total(),
        grid.x1f(grid.is()),
        grid.x1f(grid.ie() + 1)
    );

    let (alpha_min, alpha_max) = (0..grid.axis(0).total())
        .map(|i| coords.cell_metric_pair(i).alpha_sq)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), a| {
            (lo.min(a), hi.max(a))
        });
    log::info!("α² ranges over [{alpha_min:.6}, {alpha_max:.6}]");

    let summed: f64 = (grid.is()..=grid.ie()).map(|i| coords.cell_width(i)).sum();
    let analytic = chart.width(grid.x1f(grid.is()), grid.x1f(grid.ie() + 1));
    log::info!(
        "Effective x1 width {summed:.12} (analytic {analytic:.12}, difference {:.3e})",
        (summed - analytic).abs()
    );

    let n = grid.axis(0).total() + 1;
    let mut residual = 0.0f64;
    let mut g = Image::new(NMETRIC, n);
    let mut g_inv = Image::new(NMETRIC, n);

    for direction in Direction::ALL {
        coords.face_metric(direction, &mut g, &mut g_inv);
        for i in coords.face_range(direction) {
            let [g00, g11, g12, g22, g33] = g.gather([I00, I11, I12, I22, I33], i);
            let [h00, h11, h12, h22, h33] = g_inv.gather([I00, I11, I12, I22, I33], i);

            for deviation in [
                g00 * h00 - 1.0,
                g11 * h11 + g12 * h12 - 1.0,
                g11 * h12 + g12 * h22,
                g12 * h12 + g22 * h22 - 1.0,
                g33 * h33 - 1.0,
            ] {
                residual = residual.max(deviation.abs());
            }
        }
    }
    log::info!("Largest metric inverse residual {residual:.3e}");

    let mut volumes = vec![0.0; n];
    coords.cell_volume(grid.ks(), grid.js(), grid.is(), grid.ie(), &mut volumes);
    let volume: f64 = volumes.iter().sum();
    log::info!("Volume of first active row {volume:.12}");

    Ok(())
}

fn main() -> ExitCode {
    match summarize() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if log::log_enabled!(log::Level::Error) {
                log::error!("{:?}", err);
            } else {
                eprintln!("{:?}", err);
            }
            ExitCode::FAILURE
        }
    }
}
