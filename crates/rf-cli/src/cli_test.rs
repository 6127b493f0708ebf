use super::*;
use clap::CommandFactory;

#[test]
fn verify_cli_args() {
    // Validates the entire command tree: flag conflicts, duplicate args,
    // and other clap definition errors.
    Cli::command().debug_assert();
}

#[test]
fn dry_run_defaults_off() {
    let cli = Cli::try_parse_from(["rf"]).unwrap();
    assert!(!cli.dry_run);
}

#[test]
fn dry_run_flag_is_recognized() {
    let cli = Cli::try_parse_from(["rf", "--dry-run"]).unwrap();
    assert!(cli.dry_run);
}

#[test]
fn unknown_flags_are_rejected() {
    assert!(Cli::try_parse_from(["rf", "--down"]).is_err());
}
