use anyhow::{Context, Result};
use clap::Parser;

use keychord::chord::{load_default_bindings, parse_chord};
use keychord::config::ChordConfig;

mod cli;

use cli::{CliArgs, CliCommand};

fn main() -> Result<()> {
    keychord::tracing::init();

    let args = CliArgs::parse();

    let mut config = ChordConfig::load();
    if let Some(platform) = args.platform {
        config.platform = platform.into();
    }
    if let Some(join) = args.join {
        config.join_symbol = join;
    }

    match args.command {
        CliCommand::Display { chord } => {
            let parsed = parse_chord(&chord).with_context(|| format!("parsing {:?}", chord))?;
            let rendered = config
                .display()
                .display_chord(parsed, &config.join_symbol)
                .context("rendering chord")?;
            println!("{}", rendered);
        }
        CliCommand::Match { chord, event } => {
            let parsed = parse_chord(&chord).with_context(|| format!("parsing {:?}", chord))?;
            let event = event.to_event();
            let pressed = config.matcher().is_chord_pressed(&event, parsed);

            println!(
                "{} {} {}",
                config.display().display_event(&event, &config.join_symbol),
                if pressed { "matches" } else { "does not match" },
                chord
            );
            if !pressed {
                std::process::exit(1);
            }
        }
        CliCommand::Bindings => {
            let display = config.display();
            for binding in load_default_bindings(config.platform) {
                let rendered = display
                    .display_chord(binding.chord, &config.join_symbol)
                    .unwrap_or_else(|e| e.to_string());
                println!("{:<24} {}", rendered, binding.action);
            }
        }
    }

    Ok(())
}
