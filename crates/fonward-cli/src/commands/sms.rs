use crate::commands::{print_json, Context};
use crate::util::segment_count;
use anyhow::Result;
use clap::{Args, Subcommand};
use fonward_core::sms;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Subcommand)]
pub enum SmsCommand {
    /// Map a message into the GSM 7-bit alphabet and report its cost
    Encode(EncodeArgs),
}

#[derive(Debug, Args)]
pub struct EncodeArgs {
    pub text: String,
}

#[derive(Debug, Serialize)]
struct EncodedDto {
    text: String,
    length: usize,
    segments: usize,
}

pub fn encode(ctx: &Context<'_>, args: EncodeArgs) -> Result<()> {
    let substituted = args
        .text
        .chars()
        .filter(|&ch| !sms::is_transmittable(ch))
        .count();
    if substituted > 0 && !ctx.config.sms.suppress_unsupported_warning {
        warn!(
            count = substituted,
            "characters outside the GSM alphabet were replaced"
        );
    }

    let encoded = sms::encode(&args.text);
    let segments = segment_count(encoded.length);

    if ctx.json {
        print_json(&EncodedDto {
            text: encoded.text,
            length: encoded.length,
            segments,
        })?;
        return Ok(());
    }

    println!("{}", encoded.text);
    println!("length: {}", encoded.length);
    println!("segments: {}", segments);
    Ok(())
}
