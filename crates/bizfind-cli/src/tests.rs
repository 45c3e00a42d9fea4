use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["bizfind"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_minimal_search() {
    let cli = Cli::try_parse_from([
        "bizfind", "search", "--lat", "40.0", "--lng", "-74.0", "--query", "cafe",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Search(args)) = cli.command else {
        panic!("expected search command");
    };
    assert!((args.lat - 40.0).abs() < f64::EPSILON);
    assert!((args.lng + 74.0).abs() < f64::EPSILON);
    assert_eq!(args.query, "cafe");
    assert_eq!(args.min_reviews, "");
    assert!((args.radius - 5.0).abs() < f64::EPSILON);
    assert_eq!(args.unit, DistanceUnit::Miles);
    assert!(args.output.is_none());
    assert!(!args.no_export);
}

#[test]
fn parses_full_search() {
    let cli = Cli::try_parse_from([
        "bizfind",
        "search",
        "--lat=51.5",
        "--lng=-0.12",
        "--place-id",
        "ChIJdd4hrwug2EcRmSrV3Vo6llI",
        "--address",
        "London, UK",
        "-q",
        "plumber",
        "--min-reviews",
        "25",
        "--radius",
        "10",
        "--unit",
        "kilometers",
        "--output",
        "/tmp/exports",
        "--no-export",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Search(args)) = cli.command else {
        panic!("expected search command");
    };
    assert_eq!(args.unit, DistanceUnit::Kilometers);
    assert_eq!(args.min_reviews, "25");
    assert!(args.no_export);

    let location = args.location();
    assert_eq!(location.place_id, "ChIJdd4hrwug2EcRmSrV3Vo6llI");
    assert_eq!(location.formatted_address, "London, UK");
}

#[test]
fn location_falls_back_to_coordinates() {
    let cli = Cli::try_parse_from([
        "bizfind", "search", "--lat", "40.5", "--lng", "-74.25", "--query", "cafe",
    ])
    .unwrap();
    let Some(Commands::Search(args)) = cli.command else {
        panic!("expected search command");
    };
    let location = args.location();
    assert_eq!(location.formatted_address, "40.5, -74.25");
    assert_eq!(location.place_id, "40.5,-74.25");
}

#[test]
fn search_requires_query() {
    let result = Cli::try_parse_from(["bizfind", "search", "--lat", "1", "--lng", "2"]);
    assert!(result.is_err());
}

#[test]
fn rejects_unknown_unit() {
    let result = Cli::try_parse_from([
        "bizfind", "search", "--lat", "1", "--lng", "2", "--query", "cafe", "--unit", "leagues",
    ]);
    assert!(result.is_err());
}

#[test]
fn parses_radius_command() {
    let cli = Cli::try_parse_from(["bizfind", "radius", "3", "--unit", "km"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Radius {
            unit: DistanceUnit::Kilometers,
            ..
        })
    ));
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
