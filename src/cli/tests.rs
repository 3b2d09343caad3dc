use super::*;

use clap::CommandFactory;
use rstest::rstest;

fn parse(args: &[&str]) -> Opt {
    Opt::try_parse_from(std::iter::once("fnm").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_positionals() {
    let opt = parse(&["*.rs", "main.rs", "lib.rs"]);
    assert_eq!(opt.pattern, "*.rs");
    assert_eq!(opt.candidates, vec![OsString::from("main.rs"), OsString::from("lib.rs")]);
    assert_eq!(opt.flags(), Flags::empty());
    assert!(!opt.invert_match && !opt.count && !opt.quiet && !opt.null);
}

#[rstest]
#[case(&["-e"], Flags::NOESCAPE)]
#[case(&["--pathname"], Flags::PATHNAME)]
#[case(&["-d", "-i"], Flags::DOTMATCH | Flags::CASEFOLD)]
#[case(&["-x"], Flags::EXTGLOB)]
#[case(&["--flags", "pathname,casefold"], Flags::PATHNAME | Flags::CASEFOLD)]
#[case(&["-f", "0x12"], Flags::PATHNAME | Flags::EXTGLOB)]
#[case(&["-f", "fnm_dotmatch", "-f", "extglob", "-p"], Flags::DOTMATCH | Flags::EXTGLOB | Flags::PATHNAME)]
fn test_flags(#[case] args: &[&str], #[case] expected: Flags) {
    let mut args = args.to_vec();
    args.push("pattern");
    assert_eq!(parse(&args).flags(), expected);
}

#[test]
fn test_invalid_flags() {
    let result = Opt::try_parse_from(["fnm", "--flags", "pathname,bogus", "*"]);
    assert!(result.is_err());
}

#[test]
fn test_count_conflicts_with_quiet() {
    let result = Opt::try_parse_from(["fnm", "-c", "-q", "*"]);
    assert!(result.is_err());
}

#[test]
fn test_missing_pattern() {
    assert!(Opt::try_parse_from(["fnm"]).is_err());
}

#[rstest]
#[case(&[], &[], false)]
#[case(&["--config", "a.yaml"], &["a.yaml"], false)]
#[case(&["--config", "a.yaml", "--config", "-", "--config", "b.yaml"], &["b.yaml"], true)]
#[case(&["--config", "a.yaml", "--config", ""], &[], true)]
fn test_configs(#[case] args: &[&str], #[case] expected: &[&str], #[case] no_default: bool) {
    let mut args = args.to_vec();
    args.push("pattern");
    let opt = parse(&args);
    let (configs, skip) = opt.configs();
    assert_eq!(configs, expected);
    assert_eq!(skip, no_default);
}
