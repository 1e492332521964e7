//! Library integration tests.

use vsfind::VsFindError;

#[test]
fn error_types_are_public() {
    let err = VsFindError::InputParseError {
        source_name: "<stdin>".into(),
        message: "expected an array".into(),
    };
    assert!(err.to_string().contains("<stdin>"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> vsfind::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use vsfind::cli::{Cli, Commands};

    let cli = Cli::parse_from(["vsfind", "select", "--json"]);

    if let Some(Commands::Select(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Select command");
    }
}

#[test]
fn version_helpers_are_public() {
    use vsfind::diagnostics::DiagnosticLog;
    use vsfind::version::{normalize, ReleaseYear};

    let mut log = DiagnosticLog::new();
    let v = normalize("17.4.33213.308", &mut log).unwrap();
    assert_eq!(v.release_year, Some(ReleaseYear::Vs2022));
    assert_eq!(ReleaseYear::Vs2022.toolset(), "v143");
    assert!(log.is_empty());
}
