use clap::{Parser, Subcommand};

/// labelkit — build, decode, and render labeled metric names.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build a canonical labeled name, e.g. `requests[route=/a,code=200]`.
    Build {
        /// Base metric name.
        base: String,

        /// Extra name segments, joined to the base with `.` (repeatable).
        #[arg(long = "segment")]
        segments: Vec<String>,

        /// Label as KEY=VALUE (repeatable, order is kept).
        #[arg(long = "label", value_parser = parse_label_arg)]
        labels: Vec<(String, String)>,
    },

    /// Decode a labeled name into its base and labels.
    Decode {
        /// Metric name, labeled or not.
        name: String,

        /// Print JSON instead of one `key=value` per line.
        #[arg(long)]
        json: bool,
    },

    /// Render a metric name as a destination object name.
    Render {
        /// Metric name, labeled or not.
        name: String,

        /// Object name domain.
        #[arg(long, default_value = "metrics", env = "LABELKIT_DOMAIN")]
        domain: String,

        /// Metric type reported by the registering layer.
        #[arg(long, default_value = "counter")]
        metric_type: String,
    },
}

fn parse_label_arg(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))
}
