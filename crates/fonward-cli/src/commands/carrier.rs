use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::Args;
use fonward_core::domain::normalize_phone_for_dialing;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct CarrierArgs {
    /// Dialable number; `+`, spaces and formatting are stripped first
    pub number: String,
}

#[derive(Debug, Serialize)]
struct CarrierDto {
    number: String,
    carrier: Option<String>,
    prefix: String,
}

pub fn lookup(ctx: &Context<'_>, args: CarrierArgs) -> Result<()> {
    let digits = normalize_phone_for_dialing(&args.number)
        .ok_or_else(|| invalid_input("number contains no digits"))?;

    let trie = ctx
        .config
        .carrier_trie()
        .with_context(|| "build carrier table")?;
    let matched = trie.longest_prefix(&digits);

    if ctx.json {
        print_json(&CarrierDto {
            number: digits,
            carrier: matched.carrier,
            prefix: matched.prefix,
        })?;
        return Ok(());
    }

    // An unknown carrier is a normal outcome; the prefix doubles as a
    // generic area-code display value.
    match matched.carrier.as_deref() {
        Some(name) => println!("{} ({})", name, matched.prefix),
        None => println!("unknown ({})", matched.prefix),
    }
    Ok(())
}
