use super::*;

#[test]
fn test_verbosity_from_zero_is_normal() {
    assert_eq!(VerbosityLevel::from_count(0), VerbosityLevel::Normal);
}

#[test]
fn test_verbosity_from_one_is_verbose() {
    assert_eq!(VerbosityLevel::from_count(1), VerbosityLevel::Verbose);
}

#[test]
fn test_verbosity_saturates_at_very_verbose() {
    assert_eq!(VerbosityLevel::from_count(2), VerbosityLevel::VeryVerbose);
    assert_eq!(VerbosityLevel::from_count(7), VerbosityLevel::VeryVerbose);
}

#[test]
fn test_verbosity_levels_are_ordered() {
    assert!(VerbosityLevel::Normal < VerbosityLevel::Verbose);
    assert!(VerbosityLevel::Verbose < VerbosityLevel::VeryVerbose);
}

#[test]
fn test_build_applies_cli_color_flag() {
    let ctx = AppContext::build(ColorChoice::Never, VerbosityLevel::Normal);
    assert_eq!(ctx.color, ColorChoice::Never);
}

#[test]
fn test_build_keeps_verbosity() {
    let ctx = AppContext::build(ColorChoice::Auto, VerbosityLevel::Verbose);
    assert_eq!(ctx.verbosity, VerbosityLevel::Verbose);
}
