#![deny(rust_2018_idioms)]

use anyhow::Context;
use p256_range::{BaseFieldElement, Field, RangeError, Scalar};
use std::io::Read;
use tracing::{debug, info, warn};

use config::{Config, Encoding};

mod config;

fn main() -> anyhow::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }

    setup_tracing();

    let config = Config::parse();

    let values = if config.values.is_empty() {
        debug!("Reading values from stdin");
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Reading values from stdin")?;
        input.split_whitespace().map(str::to_owned).collect()
    } else {
        config.values.clone()
    };

    let mut rejected = 0usize;
    for value in &values {
        match check_value(value, config.field, config.encoding) {
            Ok(true) => println!("{value} valid"),
            Ok(false) => {
                rejected += 1;
                println!("{value} invalid");
            }
            Err(e) => {
                rejected += 1;
                warn!(error = %format!("{e:#}"), "Malformed value");
                println!("{value} malformed");
            }
        }
    }

    info!(
        field = %config.field,
        checked = values.len(),
        rejected,
        "Done."
    );

    if rejected > 0 {
        std::process::exit(1);
    }

    Ok(())
}

/// Returns whether `value` lies in `field`.
///
/// Out of range values are `Ok(false)`; anything that is not 32 bytes of hex is an
/// error.
fn check_value(value: &str, field: Field, encoding: Encoding) -> anyhow::Result<bool> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    let bytes = hex::decode(digits).context("Decoding hex")?;

    let result = match (field, encoding) {
        (Field::Base, Encoding::Be) => BaseFieldElement::from_be_bytes(&bytes).map(drop),
        (Field::Base, Encoding::Le) => BaseFieldElement::from_le_bytes(&bytes).map(drop),
        (Field::Scalar, Encoding::Be) => Scalar::from_be_bytes(&bytes).map(drop),
        (Field::Scalar, Encoding::Le) => Scalar::from_le_bytes(&bytes).map(drop),
    };

    match result {
        Ok(()) => Ok(true),
        Err(RangeError::OutOfRange(_)) => Ok(false),
        Err(e @ RangeError::InvalidLength { .. }) => Err(e).context("Decoding value"),
    }
}

fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const N: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";
    const P: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";
    const ZERO: &str = "0000000000000000000000000000000000000000000000000000000000000000";
    const ONE_LE: &str = "0100000000000000000000000000000000000000000000000000000000000000";

    #[rstest]
    #[case::zero_scalar(ZERO, Field::Scalar, Encoding::Be, false)]
    #[case::zero_base(ZERO, Field::Base, Encoding::Be, true)]
    #[case::order_scalar(N, Field::Scalar, Encoding::Be, false)]
    #[case::order_base(N, Field::Base, Encoding::Be, true)]
    #[case::modulus_base(P, Field::Base, Encoding::Be, false)]
    #[case::one_le(ONE_LE, Field::Scalar, Encoding::Le, true)]
    #[case::one_le_read_as_be(ONE_LE, Field::Scalar, Encoding::Be, true)]
    #[test]
    fn checks(
        #[case] value: &str,
        #[case] field: Field,
        #[case] encoding: Encoding,
        #[case] expected: bool,
    ) {
        assert_eq!(check_value(value, field, encoding).unwrap(), expected);
    }

    #[rstest]
    #[case::lower("0x")]
    #[case::upper("0X")]
    #[case::none("")]
    #[test]
    fn prefix_is_optional(#[case] prefix: &str) {
        let prefixed = format!("{prefix}{N}");
        assert!(!check_value(&prefixed, Field::Scalar, Encoding::Be).unwrap());
        assert!(check_value(&prefixed, Field::Base, Encoding::Be).unwrap());
    }

    #[rstest]
    #[case::not_hex("zz")]
    #[case::short("00ff")]
    #[case::odd_length("0")]
    #[case::prefix_only("0x")]
    #[case::doubled_prefix("0x0x0000000000000000000000000000000000000000000000000000000000000001")]
    #[test]
    fn malformed(#[case] value: &str) {
        assert!(check_value(value, Field::Base, Encoding::Be).is_err());
    }
}
