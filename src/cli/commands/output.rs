use clap::{Arg, ArgMatches, Command};

pub const ARG_FORMAT: &str = "format";

/// How command replies are written to stdout.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

#[derive(Debug)]
pub struct Options {
    pub format: OutputFormat,
}

impl Options {
    /// Parse output arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the format is not `text` or `json`.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let format = matches
            .get_one::<String>(ARG_FORMAT)
            .map_or(Ok(OutputFormat::default()), |value| value.parse())
            .map_err(|e: String| anyhow::anyhow!(e))?;

        Ok(Self { format })
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_FORMAT)
            .short('f')
            .long("format")
            .help("Output format: text or json")
            .env("USERAUTH_FORMAT")
            .global(true)
            .default_value("text"),
    )
}
