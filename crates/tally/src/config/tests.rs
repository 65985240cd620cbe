use pretty_assertions::assert_eq;

use super::*;

#[test]
fn defaults() {
    let (config, positional) = ReplConfig::parse_args::<&str>(&[]).unwrap_or_default();
    assert_eq!(config, ReplConfig::default());
    assert!(positional.is_empty());
}

#[test]
fn all_options() {
    let args = ["--initial=-2.5", "-q", "--color=never", "--final", "calc.txt"];
    let (config, positional) = ReplConfig::parse_args(&args).unwrap_or_default();
    assert_eq!(
        config,
        ReplConfig {
            initial: -2.5,
            quiet: true,
            color: ColorMode::Never,
            final_only: true,
        }
    );
    assert_eq!(positional, vec!["calc.txt".to_string()]);
}

#[test]
fn last_initial_wins() {
    let (config, _) =
        ReplConfig::parse_args(&["--initial=1", "--initial=7"]).unwrap_or_default();
    assert_eq!(config.initial, 7.0);
}

#[test]
fn initial_must_be_finite() {
    for value in ["abc", "", "inf", "NaN", "1e999"] {
        let arg = format!("--initial={value}");
        assert_eq!(
            ReplConfig::parse_args(&[arg]).err(),
            Some(ConfigError::InvalidInitial(value.to_string())),
            "{value}"
        );
    }
}

#[test]
fn invalid_color() {
    assert_eq!(
        ReplConfig::parse_args(&["--color=rainbow"]).err(),
        Some(ConfigError::InvalidColor("rainbow".to_string()))
    );
}

#[test]
fn unknown_option() {
    assert_eq!(
        ReplConfig::parse_args(&["--verbose"]).err(),
        Some(ConfigError::UnknownOption("--verbose".to_string()))
    );
}

#[test]
fn dash_is_positional() {
    let (_, positional) = ReplConfig::parse_args(&["-"]).unwrap_or_default();
    assert_eq!(positional, vec!["-".to_string()]);
}
