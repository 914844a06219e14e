use std::path::PathBuf;

use clap::Parser;

use crate::cli::{Cli, Cmd, planet_range};

#[test]
fn test_parse_generate_with_range() {
    let cli = Cli::try_parse_from(["orrery", "generate", "--min", "2", "--max", "5"]).unwrap();

    assert!(matches!(
        cli.cmd,
        Cmd::Generate {
            min: Some(2),
            max: Some(5)
        }
    ));
}

#[test]
fn test_global_database_flag() {
    let cli = Cli::try_parse_from(["orrery", "list", "--database", "/tmp/x.sqlite"]).unwrap();

    assert_eq!(cli.database, Some(PathBuf::from("/tmp/x.sqlite")));
    assert!(matches!(cli.cmd, Cmd::List));
}

#[test]
fn test_set_image_without_path_clears() {
    let cli = Cli::try_parse_from(["orrery", "set-image", "3"]).unwrap();

    match cli.cmd {
        Cmd::SetImage {
            planet,
            path,
            system,
        } => {
            assert_eq!(planet, 3);
            assert!(path.is_none());
            assert!(system.is_none());
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_export_requires_file() {
    assert!(Cli::try_parse_from(["orrery", "export"]).is_err());

    let cli = Cli::try_parse_from(["orrery", "export", "out.csv", "--index", "1"]).unwrap();
    assert!(matches!(cli.cmd, Cmd::Export { index: Some(1), .. }));
}

#[test]
fn test_kebab_case_subcommands() {
    for name in ["clear-list", "clear-store", "reload", "dump"] {
        assert!(Cli::try_parse_from(["orrery", name]).is_ok(), "{name}");
    }
}

#[test]
fn test_lone_bound_pairs_with_configured_range() {
    assert_eq!(planet_range(None, None, (4, 8)), (4, 8));
    assert_eq!(planet_range(Some(10), None, (4, 8)), (10, 10));
    assert_eq!(planet_range(Some(6), None, (4, 8)), (6, 8));
    assert_eq!(planet_range(None, Some(2), (4, 8)), (2, 2));
    assert_eq!(planet_range(None, Some(6), (4, 8)), (4, 6));
    assert_eq!(planet_range(Some(5), Some(2), (4, 8)), (5, 2));
}
