use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("iei-gene-hunter").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_lookup_defaults() {
    let cli = parse(&["lookup", "BRCA1"]);
    assert_eq!(cli.total_count(), TotalCount::Fixed(STRING_V11_PROTEINS));
    assert_eq!(cli.format, OutputFormat::Text);
    match cli.command {
        Command::Lookup { symbols, neighbors } => {
            assert_eq!(symbols, vec!["BRCA1".to_string()]);
            assert_eq!(neighbors.neighbors, DEFAULT_NEIGHBOR_WINDOW);
            assert!(!neighbors.no_neighbors);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_live_total_and_json() {
    let cli = parse(&["--total", "live", "top", "--format", "json", "-n", "5"]);
    assert_eq!(cli.total_count(), TotalCount::Live);
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(matches!(cli.command, Command::Top { count: 5 }));
}

#[test]
fn test_fixed_total_override() {
    let cli = parse(&["--fixed-total", "20000", "top"]);
    assert_eq!(cli.total_count(), TotalCount::Fixed(20_000));
    assert!(
        Cli::try_parse_from(["iei-gene-hunter", "--fixed-total", "0", "top"]).is_err()
    );
}

#[test]
fn test_lookup_requires_symbol() {
    assert!(Cli::try_parse_from(["iei-gene-hunter", "lookup"]).is_err());
}

#[test]
fn test_scan_labels_default_and_custom() {
    assert_eq!(scan_labels(&[]), default_scan_labels());
    let cli = parse(&["scan", "--within", "50", "--label", "Predicted IEI"]);
    match cli.command {
        Command::Scan { within, labels } => {
            assert_eq!(within, 50);
            assert_eq!(scan_labels(&labels), vec![Label::PredictedIei]);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_no_neighbors_flag() {
    let cli = parse(&["repl", "--no-neighbors"]);
    match cli.command {
        Command::Repl { neighbors } => assert!(neighbors.no_neighbors),
        other => panic!("unexpected command {other:?}"),
    }
}
