mod cli;

use clap::Parser;
use eyre::WrapErr;

use labelkit_core::{to_destination_name, LabeledName, LabeledNameBuilder};

use cli::Command;

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so stdout stays usable in pipelines.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let output = run(args.command)?;
    println!("{output}");
    Ok(())
}

fn run(command: Command) -> eyre::Result<String> {
    match command {
        Command::Build {
            base,
            segments,
            labels,
        } => {
            let name = LabeledNameBuilder::start(&base, &segments)
                .labels(labels)
                .context("build labeled name")?
                .build()
                .context("build labeled name")?;
            tracing::debug!(%name, "built labeled name");
            Ok(name.to_string())
        }
        Command::Decode { name, json } => {
            let labeled = LabeledName::parse(&name).context("decode labeled name")?;
            if json {
                return serde_json::to_string_pretty(&labeled).context("serialize decoded name");
            }
            let lines: Vec<String> = std::iter::once(labeled.base.clone())
                .chain(labeled.labels.iter().map(ToString::to_string))
                .collect();
            Ok(lines.join("\n"))
        }
        Command::Render {
            name,
            domain,
            metric_type,
        } => {
            let object_name = to_destination_name(&metric_type, &domain, &name)
                .with_context(|| format!("render `{name}` in domain `{domain}`"))?;
            tracing::debug!(%object_name, pattern = object_name.is_pattern(), "rendered");
            Ok(object_name.to_string())
        }
    }
}
