use crate::utils::error::{ConvertError, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "convert")]
#[command(about = "Convert and compare distance, weight and temperature values")]
#[command(after_help = "Conversions:\n  convert <type> <value> [from] [to]\n  types: distance (m, km, mi), weight (g, oz, lb), temperature (C, F, K)\n\nExamples:\n  convert distance 5 km mi\n  convert temperature -40 C F\n  convert compare 5 km 3 mi")]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted before or after either command form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct GlobalOptions {
    /// Path to a TOML or JSON configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured precision for every type
    #[arg(short, long, global = true)]
    pub precision: Option<u32>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalOptions {
    /// Values in `other` win over the ones already set.
    pub fn merge(&mut self, other: &GlobalOptions) {
        if other.config.is_some() {
            self.config = other.config.clone();
        }
        if other.precision.is_some() {
            self.precision = other.precision;
        }
        self.json |= other.json;
        self.verbose |= other.verbose;
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare two measurements of the same type
    #[command(allow_negative_numbers = true)]
    Compare {
        value1: String,
        unit1: String,
        value2: String,
        unit2: String,
    },

    // <type> <value> [from] [to]
    #[command(external_subcommand)]
    Convert(Vec<String>),
}

impl Cli {
    /// Conversion form of the command line, with any flags written after it
    /// (`convert distance 5 km mi --json`) folded into [`Cli::options`].
    pub fn convert_request(&mut self) -> Result<Option<ConvertRequest>> {
        let Command::Convert(args) = &self.command else {
            return Ok(None);
        };

        let request = ConvertRequest::from_args(args)?;
        self.options.merge(&request.options);
        Ok(Some(request))
    }
}

/// Positional form of a conversion: `<type> <value> [from] [to]`.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "convert", no_binary_name = true, allow_negative_numbers = true)]
pub struct ConvertRequest {
    pub type_name: String,
    pub value: String,
    pub from: Option<String>,
    pub to: Option<String>,

    #[command(flatten)]
    pub options: GlobalOptions,
}

impl ConvertRequest {
    pub fn from_args(args: &[String]) -> Result<Self> {
        Self::try_parse_from(args).map_err(|e| {
            tracing::debug!("Conversion arguments rejected: {}", e);
            ConvertError::Usage {
                message: "convert <type> <value> [from] [to]".to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_convert_request_from_args() {
        let request = ConvertRequest::from_args(&args(&["distance", "5", "km", "mi"])).unwrap();
        assert_eq!(request.type_name, "distance");
        assert_eq!(request.value, "5");
        assert_eq!(request.from.as_deref(), Some("km"));
        assert_eq!(request.to.as_deref(), Some("mi"));

        let request = ConvertRequest::from_args(&args(&["temperature", "-40"])).unwrap();
        assert_eq!(request.from, None);
        assert_eq!(request.to, None);
    }

    #[test]
    fn test_convert_request_arity() {
        assert!(ConvertRequest::from_args(&args(&["distance"])).is_err());
        assert!(ConvertRequest::from_args(&args(&["distance", "1", "m", "km", "mi"])).is_err());
    }

    #[test]
    fn test_convert_request_keeps_negative_values() {
        let request =
            ConvertRequest::from_args(&args(&["temperature", "-40", "C", "F"])).unwrap();
        assert_eq!(request.value, "-40");
        assert_eq!(request.to.as_deref(), Some("F"));
    }

    #[test]
    fn test_flags_after_conversion_are_applied() {
        let mut cli = Cli::try_parse_from([
            "convert", "distance", "5", "km", "mi", "--json", "-p", "3",
        ])
        .unwrap();
        let request = cli.convert_request().unwrap().unwrap();

        assert_eq!(request.type_name, "distance");
        assert_eq!(request.to.as_deref(), Some("mi"));
        assert!(cli.options.json);
        assert_eq!(cli.options.precision, Some(3));
        assert!(!cli.options.verbose);
    }

    #[test]
    fn test_trailing_flags_override_leading_ones() {
        let mut cli = Cli::try_parse_from([
            "convert", "--precision", "1", "weight", "100", "g", "oz", "--precision", "4",
        ])
        .unwrap();
        cli.convert_request().unwrap();
        assert_eq!(cli.options.precision, Some(4));
    }

    #[test]
    fn test_compare_has_no_convert_request() {
        let mut cli = Cli::try_parse_from(["convert", "compare", "5", "km", "3", "mi", "--json"])
            .unwrap();
        assert_eq!(cli.convert_request().unwrap(), None);
        assert!(cli.options.json);
    }

    #[test]
    fn test_parse_compare_with_negative_values() {
        let cli = Cli::try_parse_from(["convert", "compare", "-40", "C", "-40", "F"]).unwrap();
        match cli.command {
            Command::Compare { value1, unit2, .. } => {
                assert_eq!(value1, "-40");
                assert_eq!(unit2, "F");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_conversion_as_external_subcommand() {
        let cli =
            Cli::try_parse_from(["convert", "--precision", "3", "weight", "100", "g", "oz"]).unwrap();
        assert_eq!(cli.options.precision, Some(3));
        match cli.command {
            Command::Convert(rest) => assert_eq!(rest, args(&["weight", "100", "g", "oz"])),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
        ConvertRequest::command().debug_assert();
    }
}
