#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::wildcard_imports
)]

use std::{
    f64::consts::{PI, TAU},
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
};

use anyhow::{bail, ensure, Context, Result};
use nalgebra as na;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(test)]
use approx::{assert_abs_diff_eq, assert_ulps_eq};

#[macro_use]
extern crate log;

mod fixture;
mod intersection;
mod math;
mod ray;
mod sampling;
mod triangle;

use intersection::*;
use math::*;
use ray::*;
use sampling::*;
use triangle::*;

//
// Main
//

fn main() -> Result<()> {
    // Init logging.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Generate fixtures.
    let params = fixture::Params::default();
    let summary = fixture::run(&params)?;
    info!(
        "Hits: {} ({:.02}%), misses: {} ({:.02}%), out of {} tests",
        summary.hits,
        summary.hit_percentage(),
        summary.misses,
        summary.miss_percentage(),
        summary.tests
    );
    info!(
        "Generated {} hit and {} miss fixtures",
        summary.hits_written, summary.misses_written
    );

    Ok(())
}
