// src/main.rs
mod cli;
mod logging;

use std::collections::HashMap;

use clap::Parser;
use cli::Args;
use namewise::{Config, NameError, parser};
use tracing::info;

fn main() -> Result<(), NameError> {
    let args = Args::parse();
    logging::setup(args.debug);

    let config = Config::merge(&args.config_name, cli::overrides(&args));

    let name = if let Some(json) = &args.json {
        let map: HashMap<String, String> = serde_json::from_str(json)?;
        parser::from_map(&map, &config)?
    } else if let Some(raw) = &args.name {
        parser::from_text(raw, &config)?
    } else {
        return Err(NameError::invalid_input(
            "provide a raw name or a --json map",
        ));
    };

    info!(characters = name.count()?, "name parsed");

    println!("full:    {}", name.longest()?);
    println!("short:   {}", name.shortest()?);
    println!("public:  {}", name.public_form()?);
    if args.initials {
        println!("initials: {}", name.initials(true)?.join("."));
    }
    if let Some(pattern) = &args.pattern {
        println!("custom:  {}", name.format(pattern)?);
    }
    if let Some(zip) = args.zip {
        println!("zipped:  {}", name.zip(zip.into(), !args.no_period)?);
    }

    Ok(())
}
