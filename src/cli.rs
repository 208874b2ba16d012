//! Command-line interface.

use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliArgs {
    /// JSON config file to load instead of the built-in defaults.
    pub config: Option<PathBuf>,
    /// Overrides the config file's track seed.
    pub seed: Option<u64>,
}

impl CliArgs {
    /// Parse the process arguments.
    ///
    /// Supported:
    /// - `lanerunner --config <file>`
    /// - `lanerunner --seed <n>`
    pub fn parse() -> Result<Self, String> {
        Self::parse_from(std::env::args().skip(1))
    }

    pub fn parse_from<I, S>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => {
                    let path = args.next().ok_or("--config needs a file path")?;
                    parsed.config = Some(PathBuf::from(path));
                }
                "--seed" | "-s" => {
                    let value = args.next().ok_or("--seed needs a number")?;
                    let seed = value.parse().map_err(|_| format!("invalid seed: {value}"))?;
                    parsed.seed = Some(seed);
                }
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        assert_eq!(CliArgs::parse_from(Vec::<String>::new()), Ok(CliArgs::default()));
    }

    #[test]
    fn test_config_and_seed() {
        let args = CliArgs::parse_from(["--config", "run.json", "--seed", "42"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("run.json")));
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn test_errors() {
        assert!(CliArgs::parse_from(["--seed"]).is_err());
        assert!(CliArgs::parse_from(["--seed", "abc"]).is_err());
        assert!(CliArgs::parse_from(["--fullscreen"]).is_err());
    }
}
