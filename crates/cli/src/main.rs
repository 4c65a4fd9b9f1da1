// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handcast CLI hand evaluator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::info;

use handcast_eval::{Hand, HandCategory, HandFeatures};

#[derive(Debug, Parser)]
struct Cli {
    /// The five cards, e.g. "K of Hearts" "10 Spades" "a d" "2 c" "2 h".
    #[clap(num_args = 5, required = true)]
    cards: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let hand = Hand::parse(&cli.cards)?;
    let category = HandCategory::classify(&hand);
    let features = HandFeatures::eval(&hand);
    info!("evaluated {hand} as {category}");

    println!("Hand      {hand}");
    println!("Category  {category}");

    let [strength, max_freq, unique_ranks, unique_suits] = features.to_vector();
    println!("Features  [{strength:.2}, {max_freq}, {unique_ranks}, {unique_suits}]");

    Ok(())
}
