use crate::commands::{print_json, Context};
use crate::util::load_contacts;
use anyhow::Result;
use clap::Args;
use fonward_core::filter::filter_contacts;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Query text; an empty query returns the whole list
    #[arg(default_value = "")]
    pub query: String,
    /// JSON file holding the contact list
    #[arg(long, value_name = "FILE")]
    pub contacts: PathBuf,
}

pub fn filter(ctx: &Context<'_>, args: FilterArgs) -> Result<()> {
    let contacts = load_contacts(&args.contacts)?;
    let matches = filter_contacts(&contacts, &args.query);

    if ctx.json {
        print_json(&matches)?;
        return Ok(());
    }

    for contact in &matches {
        println!(
            "{}\t{}\t{}",
            contact.name, contact.phone_number, contact.category
        );
    }
    Ok(())
}
