use clap::Parser;
use std::ffi::OsString;

#[derive(Parser)]
#[command(name = "p256-check")]
#[command(author = "Equilibrium Labs")]
#[command(version)]
#[command(
    about = "Checks that hex encoded 256-bit integers are reduced elements of a NIST P-256 field."
)]
struct Cli {
    #[arg(
        long,
        long_help = r"The field to check against.

    base:   0 <= value <= p-1, e.g. public key coordinates
    scalar: 1 <= value <= n-1, e.g. secret keys and ECDSA r and s",
        value_enum,
        default_value = "scalar",
        env = "P256_CHECK_FIELD"
    )]
    field: FieldArg,

    #[arg(
        long,
        long_help = "Byte order of the 32 byte values",
        value_enum,
        default_value = "be",
        env = "P256_CHECK_ENCODING"
    )]
    encoding: Encoding,

    #[arg(
        value_name = "HEX",
        long_help = "Values to check, 64 hex digits each, optionally prefixed with 0x or 0X. Read from stdin when omitted."
    )]
    values: Vec<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FieldArg {
    Base,
    Scalar,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    Be,
    Le,
}

pub struct Config {
    pub field: p256_range::Field,
    pub encoding: Encoding,
    pub values: Vec<String>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            field: match cli.field {
                FieldArg::Base => p256_range::Field::Base,
                FieldArg::Scalar => p256_range::Field::Scalar,
            },
            encoding: cli.encoding,
            values: cli.values,
        }
    }
}

impl Config {
    /// Parses the command line.
    ///
    /// Note: This will terminate the program if invalid arguments are supplied.
    ///       This is intended, as [clap] will show the program usage / help.
    pub fn parse() -> Self {
        Cli::parse().into()
    }

    /// Kept separate from [Config::parse] to enable test coverage without requiring
    /// cmd line arg input.
    #[cfg_attr(not(test), allow(dead_code))]
    fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Cli::try_parse_from(args).map(Into::into)
    }
}
