//! Property-based tests for absolute paths.
//!
//! Note: The normalize module already has property tests for cleaning.
//! This module focuses on the laws relating constructors and derivations.

use super::{AbsolutePath, Expander, FixedDirectories};
use proptest::prelude::*;
use std::path::PathBuf;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}(\\.[a-z]{1,4})?"
}

fn absolute_path_strategy() -> impl Strategy<Value = AbsolutePath> {
    prop::collection::vec(path_component_strategy(), 0..8).prop_map(|parts| {
        let root = if cfg!(windows) { "C:/" } else { "/" };
        AbsolutePath::from_slash(&format!("{root}{}", parts.join("/"))).unwrap()
    })
}

fn relative_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 1..5).prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Validating the string form yields an equal value
    #[test]
    fn string_round_trip(path in absolute_path_strategy()) {
        prop_assert_eq!(AbsolutePath::new(path.to_string()).unwrap(), path);
    }

    // Joining nothing is the identity
    #[test]
    fn join_empty_is_identity(path in absolute_path_strategy()) {
        prop_assert_eq!(path.join(Vec::<String>::new()), path);
    }

    // The parent of a joined single element is the original path
    #[test]
    fn join_then_dir(path in absolute_path_strategy(), name in path_component_strategy()) {
        prop_assert_eq!(path.join([&name]).dir(), path);
    }

    // Splitting and joining back reproduces the path
    #[test]
    fn split_then_join(path in absolute_path_strategy()) {
        let (dir, file) = path.split();
        prop_assert_eq!(dir.join([file]), path);
    }

    // A relative path computed by rel leads back to the target
    #[test]
    fn rel_then_join(base in absolute_path_strategy(), target in absolute_path_strategy()) {
        let relative = base.rel(&target).unwrap();
        prop_assert_eq!(base.join([relative]), target);
    }

    // Expanding relative input joins it onto the working directory
    #[test]
    fn expand_relative_joins_cwd(
        cwd in absolute_path_strategy(),
        input in relative_path_strategy()
    ) {
        let expander = Expander::with_directories(FixedDirectories::new(cwd.as_path(), None));
        let expanded = expander.expand_slash(&input).unwrap();
        prop_assert_eq!(expanded, cwd.join(input.split('/')));
    }

    // Expanding `~/` input joins it onto the home directory
    #[test]
    fn expand_tilde_joins_home(
        home in absolute_path_strategy(),
        input in relative_path_strategy()
    ) {
        let expander = Expander::with_directories(FixedDirectories::new(
            home.as_path(),
            Some(PathBuf::from(home.as_path())),
        ));
        let expanded = expander.expand_slash(&format!("~/{input}")).unwrap();
        prop_assert_eq!(expanded, home.join(input.split('/')));
    }

    // Relative input never validates
    #[test]
    fn relative_never_validates(input in relative_path_strategy()) {
        prop_assert!(AbsolutePath::from_slash(&input).unwrap_err().is_not_absolute());
    }
}
