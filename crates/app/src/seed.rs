//! `--seed` handling for the desktop app.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    /// Given on the command line.
    Cli(u64),
    /// Drawn from runtime entropy because no seed was given.
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cli(_) => "cli",
            Self::Generated(_) => "generated",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeedArgError {
    #[error("missing value for --seed")]
    MissingValue,
    #[error("seed provided more than once")]
    Duplicate,
    #[error("seed value '{0}' must be a number")]
    NotANumber(String),
}

/// Scans `args` (program name first) for `--seed N` or `--seed=N`; other arguments are ignored.
///
/// `generate` runs only when no seed flag is present.
pub fn resolve_seed_from_args(
    args: &[String],
    generate: impl FnOnce() -> u64,
) -> Result<SeedChoice, SeedArgError> {
    let mut selected = None;
    let mut rest = args.iter().skip(1);

    while let Some(argument) = rest.next() {
        let raw = if argument == "--seed" {
            rest.next().ok_or(SeedArgError::MissingValue)?
        } else if let Some(inline) = argument.strip_prefix("--seed=") {
            inline
        } else {
            continue;
        };

        if selected.is_some() {
            return Err(SeedArgError::Duplicate);
        }
        let seed = raw.parse::<u64>().map_err(|_| SeedArgError::NotANumber(raw.to_owned()))?;
        selected = Some(seed);
    }

    Ok(match selected {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generate()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn uses_generated_seed_when_seed_flag_is_absent() {
        let args = as_args(&["room-dungeon"]);
        let choice = resolve_seed_from_args(&args, || 9_876_543).expect("no flag is fine");
        assert_eq!(choice, SeedChoice::Generated(9_876_543));
    }

    #[test]
    fn parses_seed_flag_with_separate_value() {
        let args = as_args(&["room-dungeon", "--seed", "4242"]);
        let choice = resolve_seed_from_args(&args, || 1).expect("valid --seed should parse");
        assert_eq!(choice, SeedChoice::Cli(4_242));
    }

    #[test]
    fn parses_seed_flag_with_inline_value() {
        let args = as_args(&["room-dungeon", "--seed=2026"]);
        let choice = resolve_seed_from_args(&args, || 1).expect("valid --seed should parse");
        assert_eq!(choice, SeedChoice::Cli(2_026));
    }

    #[test]
    fn generator_is_not_called_when_a_seed_is_given() {
        let args = as_args(&["room-dungeon", "--seed", "5"]);
        let choice = resolve_seed_from_args(&args, || panic!("should not draw a seed"));
        assert_eq!(choice, Ok(SeedChoice::Cli(5)));
    }

    #[test]
    fn errors_when_seed_flag_has_no_value() {
        let args = as_args(&["room-dungeon", "--seed"]);
        assert_eq!(resolve_seed_from_args(&args, || 1), Err(SeedArgError::MissingValue));
    }

    #[test]
    fn errors_when_seed_value_is_not_a_number() {
        let args = as_args(&["room-dungeon", "--seed=abc"]);
        let err = resolve_seed_from_args(&args, || 1).expect_err("non-numeric seed should error");
        assert_eq!(err.to_string(), "seed value 'abc' must be a number");
    }

    #[test]
    fn errors_when_seed_is_provided_more_than_once() {
        let args = as_args(&["room-dungeon", "--seed=1", "--seed", "2"]);
        assert_eq!(resolve_seed_from_args(&args, || 1), Err(SeedArgError::Duplicate));
    }

    #[test]
    fn unrelated_arguments_are_ignored() {
        let args = as_args(&["room-dungeon", "--fullscreen", "--seed", "7", "extra"]);
        let choice = resolve_seed_from_args(&args, || 1).expect("valid --seed should parse");
        assert_eq!(choice.value(), 7);
        assert_eq!(choice.label(), "cli");
    }
}
