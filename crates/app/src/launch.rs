//! Launch options: the round seed and an optional rules file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use maze_core::Rules;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchOptions {
    pub seed: SeedChoice,
    pub rules_path: Option<PathBuf>,
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

/// Parses `--seed N`, `--seed=N`, `--rules PATH` and `--rules=PATH`.
/// Unknown arguments are ignored; `args[0]` is the program name.
pub fn parse_launch_args(args: &[String], generated_seed: u64) -> Result<LaunchOptions, String> {
    let mut selected_seed = None;
    let mut rules_path = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();
        let (flag, inline_value) = match argument.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (argument, None),
        };
        if flag != "--seed" && flag != "--rules" {
            index += 1;
            continue;
        }

        let value = match inline_value {
            Some(value) => value,
            None => {
                index += 1;
                args.get(index).map(String::as_str).ok_or(format!("missing value for {flag}"))?
            }
        };
        if flag == "--seed" {
            if selected_seed.is_some() {
                return Err("seed provided more than once".to_string());
            }
            selected_seed = Some(parse_seed_value(value)?);
        } else {
            if rules_path.is_some() {
                return Err("rules file provided more than once".to_string());
            }
            rules_path = Some(PathBuf::from(value));
        }
        index += 1;
    }

    let seed = match selected_seed {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    };
    Ok(LaunchOptions { seed, rules_path })
}

/// Reads a TOML rules file. Missing keys keep their defaults.
pub fn load_rules(path: &Path) -> Result<Rules, String> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("failed to read rules file {}: {err}", path.display()))?;
    parse_rules_toml(&text).map_err(|err| format!("{}: {err}", path.display()))
}

pub fn parse_rules_toml(text: &str) -> Result<Rules, String> {
    let rules: Rules = toml::from_str(text).map_err(|err| format!("invalid rules: {err}"))?;
    rules.validate().map_err(|err| err.to_string())?;
    Ok(rules)
}

fn parse_seed_value(raw_value: &str) -> Result<u64, String> {
    raw_value.parse::<u64>().map_err(|_| format!("seed value '{raw_value}' must be a number"))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn as_args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|part| part.to_string()).collect()
    }

    #[test]
    fn uses_generated_seed_when_seed_flag_is_absent() {
        let args = as_args(&["maze_chase"]);
        let options = parse_launch_args(&args, 9_876_543).expect("launch args should parse");
        assert_eq!(options.seed, SeedChoice::Generated(9_876_543));
        assert_eq!(options.rules_path, None);
    }

    #[test]
    fn parses_seed_flag_with_separate_value() {
        let args = as_args(&["maze_chase", "--seed", "4242"]);
        let options = parse_launch_args(&args, 1).expect("valid --seed should parse");
        assert_eq!(options.seed, SeedChoice::Cli(4_242));
    }

    #[test]
    fn parses_seed_flag_with_inline_value() {
        let args = as_args(&["maze_chase", "--seed=2026"]);
        let options = parse_launch_args(&args, 1).expect("valid --seed should parse");
        assert_eq!(options.seed.value(), 2_026);
    }

    #[test]
    fn parses_rules_path_in_both_forms() {
        let args = as_args(&["maze_chase", "--rules", "easy.toml", "--seed=3"]);
        let options = parse_launch_args(&args, 1).unwrap();
        assert_eq!(options.rules_path, Some(PathBuf::from("easy.toml")));

        let args = as_args(&["maze_chase", "--rules=hard.toml"]);
        let options = parse_launch_args(&args, 1).unwrap();
        assert_eq!(options.rules_path, Some(PathBuf::from("hard.toml")));
    }

    #[test]
    fn errors_when_seed_flag_has_no_value() {
        let args = as_args(&["maze_chase", "--seed"]);
        let err = parse_launch_args(&args, 1).expect_err("missing seed value should error");
        assert!(err.contains("missing"), "error should explain missing value: {err}");
    }

    #[test]
    fn errors_when_seed_value_is_not_a_number() {
        let args = as_args(&["maze_chase", "--seed=abc"]);
        let err = parse_launch_args(&args, 1).expect_err("non-numeric seed value should error");
        assert!(err.contains("number"), "error should explain numeric requirement: {err}");
    }

    #[test]
    fn errors_when_seed_is_provided_more_than_once() {
        let args = as_args(&["maze_chase", "--seed=1", "--seed", "2"]);
        let err = parse_launch_args(&args, 1).expect_err("duplicate seed flags should be rejected");
        assert!(err.contains("more than once"), "error should explain duplicate seed: {err}");
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }

    #[test]
    fn partial_rules_file_keeps_defaults() {
        let rules = parse_rules_toml("starting_lives = 5\ncapture_score = 400\n").unwrap();
        assert_eq!(rules.starting_lives, 5);
        assert_eq!(rules.capture_score, 400);
        assert_eq!(rules.pickup_score, Rules::default().pickup_score);
    }

    #[test]
    fn invalid_rules_are_reported() {
        let err = parse_rules_toml("player_speed = 3.0\n").unwrap_err();
        assert!(err.contains("speeds"), "error should name the bad field: {err}");
        assert!(parse_rules_toml("starting_lives = \"many\"\n").is_err());
    }

    #[test]
    fn rules_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vulnerability_ticks = 120").unwrap();

        let rules = load_rules(file.path()).unwrap();
        assert_eq!(rules.vulnerability_ticks, 120);

        let missing = load_rules(Path::new("/nonexistent/rules.toml")).unwrap_err();
        assert!(missing.contains("failed to read"));
    }
}
