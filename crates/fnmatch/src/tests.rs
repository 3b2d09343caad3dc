use rstest::rstest;

use super::*;

#[rstest]
#[case("hello", "hello")]
#[case("hello", "hell")]
#[case("hello", "Hello")]
#[case("a/b", "a/b")]
#[case("a/b", "a/c")]
#[case(".profile", ".profile")]
#[case("", "")]
#[case("", "x")]
fn test_plain_patterns_compare_equal(#[case] pattern: &str, #[case] text: &str) {
    for bits in 0..32 {
        let flags = Flags::from_bits(bits);
        let expected = if flags.contains(Flag::CaseFold) {
            pattern.eq_ignore_ascii_case(text)
        } else {
            pattern == text
        };
        assert_eq!(matches(pattern, text, flags), expected, "flags {}", flags);
    }
}

#[rstest]
#[case("file", true)]
#[case("file.txt", true)]
#[case("", true)]
#[case("dir/file", false)]
#[case("/", false)]
fn test_star_with_pathname(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(fnmatch("*", text, Flags::PATHNAME), expected);
    assert!(fnmatch("*", text, Flags::empty()));
}

#[rstest]
#[case("main.rs", true)]
#[case("src/main.rs", true)]
#[case("a/b/c/d/main.rs", true)]
#[case("a/b/c/d/main.py", false)]
fn test_recursive_descent(#[case] text: &str, #[case] expected: bool) {
    assert_eq!(fnmatch("**/*.rs", text, Flags::PATHNAME), expected);
    assert_eq!(fnmatch("**/**/*.rs", text, Flags::PATHNAME), expected);
}

#[test]
fn test_leading_dot() {
    assert!(!fnmatch("*", ".hidden", Flags::empty()));
    assert!(fnmatch(".*", ".hidden", Flags::empty()));
    assert!(fnmatch("*", ".hidden", Flags::DOTMATCH));
}

#[test]
fn test_brackets() {
    assert!(fnmatch("[a-c]", "b", Flags::empty()));
    assert!(!fnmatch("[a-c]", "d", Flags::empty()));
    assert!(fnmatch("[!a-c]", "d", Flags::empty()));
    assert!(fnmatch("[a-]", "-", Flags::empty()));
    assert!(!fnmatch("[abc", "a", Flags::empty()));
}

#[test]
fn test_case_folding() {
    assert!(fnmatch("ABC", "abc", Flags::CASEFOLD));
    assert!(!fnmatch("ABC", "abc", Flags::empty()));
}

#[test]
fn test_brace_expansion() {
    assert!(fnmatch_extended("{cat,dog}.txt", "dog.txt", Flags::EXTGLOB));
    assert!(fnmatch_extended("{a,ab}c", "abc", Flags::EXTGLOB));
    assert!(!fnmatch("{cat,dog}.txt", "dog.txt", Flags::EXTGLOB));
    assert!(fnmatch("{cat,dog}.txt", "{cat,dog}.txt", Flags::EXTGLOB));
}

#[test]
fn test_matches_dispatch() {
    assert!(matches("{cat,dog}.txt", "cat.txt", Flags::EXTGLOB));
    assert!(!matches("{cat,dog}.txt", "cat.txt", Flags::empty()));
    assert!(matches("{cat,dog}.txt", "{cat,dog}.txt", Flags::empty()));
}

#[test]
fn test_long_extended_patterns() {
    let pattern = "{a,b}".repeat(20);
    let text = "b".to_owned() + &"{a,b}".repeat(19);
    assert_eq!(try_fnmatch_extended(&pattern, &text, Flags::EXTGLOB), Ok(true));
    assert!(fnmatch_extended(&pattern, &text, Flags::EXTGLOB));
    assert!(matches(&pattern, &text, Flags::EXTGLOB));
    assert!(!matches(&pattern, "c", Flags::EXTGLOB));
}

#[test]
fn test_byte_inputs() {
    assert!(fnmatch(b"*.bin".as_slice(), b"data.bin".to_vec(), Flags::empty()));
    assert!(fnmatch("?", [0xffu8], Flags::empty()));
    assert!(fnmatch("a?b", "a\0b", Flags::empty()));
    assert!(!fnmatch("?", "ä", Flags::empty()));
    assert!(fnmatch("??", "ä", Flags::empty()));
    assert!(fnmatch(String::from("*"), String::from("x"), Flags::empty()));
}

#[test]
fn test_idempotence() {
    let cases = [
        ("**/{src,lib}/*.rs", "a/src/main.rs", Flags::PATHNAME | Flags::EXTGLOB),
        ("*[0-9]?", "file12", Flags::empty()),
        ("[!.]*", ".x", Flags::DOTMATCH),
    ];
    for (pattern, text, flags) in cases {
        let first = matches(pattern, text, flags);
        for _ in 0..3 {
            assert_eq!(matches(pattern, text, flags), first);
        }
    }
}
