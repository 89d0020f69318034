use cs50ai_core::errors::{AiError, ExError, ExErrorKind};

#[test]
fn test_out_of_bounds_carries_cell_subject() {
    let err = AiError::OutOfBounds {
        row: 4,
        col: 1,
        height: 3,
        width: 3,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::OutOfBounds);
    assert_eq!(ex_err.code(), "ERR_OUT_OF_BOUNDS");
    assert_eq!(ex_err.subject(), Some("(4, 1)"));
    assert!(ex_err.message().contains("3x3"));
}

#[test]
fn test_symbol_not_in_model_maps_to_unknown_symbol() {
    let err = AiError::SymbolNotInModel {
        symbol: "rain".to_string(),
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::UnknownSymbol);
    assert_eq!(ex_err.subject(), Some("rain"));
    assert_eq!(ex_err.message(), "Variable rain not in model");
}

#[test]
fn test_puzzle_errors_share_a_kind() {
    let errors = vec![
        AiError::UnknownCharacter {
            name: "D".to_string(),
        },
        AiError::DuplicateCharacter {
            name: "A".to_string(),
        },
        AiError::EmptyStatement {
            speaker: "B".to_string(),
        },
    ];

    for err in errors {
        let ex_err: ExError = err.into();
        assert_eq!(ex_err.kind(), ExErrorKind::InvalidPuzzle);
        assert_eq!(ex_err.code(), "ERR_INVALID_PUZZLE");
        assert!(ex_err.subject().is_some());
    }
}

#[test]
fn test_error_kind_code_mapping() {
    let kinds = vec![
        (ExErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
        (ExErrorKind::InvalidBoard, "ERR_INVALID_BOARD"),
        (ExErrorKind::InvalidPuzzle, "ERR_INVALID_PUZZLE"),
        (ExErrorKind::InvalidConfig, "ERR_INVALID_CONFIG"),
        (ExErrorKind::ParseError, "ERR_PARSE"),
        (ExErrorKind::OutOfBounds, "ERR_OUT_OF_BOUNDS"),
        (ExErrorKind::CellOccupied, "ERR_CELL_OCCUPIED"),
        (ExErrorKind::GameOver, "ERR_GAME_OVER"),
        (ExErrorKind::UnknownSymbol, "ERR_UNKNOWN_SYMBOL"),
        (ExErrorKind::TooManySymbols, "ERR_TOO_MANY_SYMBOLS"),
        (ExErrorKind::InconsistentKnowledge, "ERR_INCONSISTENT_KNOWLEDGE"),
        (ExErrorKind::Io, "ERR_IO"),
        (ExErrorKind::Serialization, "ERR_SERIALIZATION"),
        (ExErrorKind::Internal, "ERR_INTERNAL"),
    ];

    for (kind, expected_code) in kinds {
        assert_eq!(kind.code(), expected_code);
    }
}

#[test]
fn test_op_and_source_chain_in_display() {
    let inner: ExError = AiError::Parse {
        offset: 3,
        reason: "expected a symbol".to_string(),
    }
    .into();
    let outer = ExError::new(ExErrorKind::InvalidPuzzle)
        .with_op("load_puzzle")
        .with_subject("puzzles/liars.yaml")
        .with_message("statement could not be parsed")
        .with_source(inner);

    let rendered = outer.to_string();
    assert!(rendered.starts_with("[ERR_INVALID_PUZZLE]"));
    assert!(rendered.contains("load_puzzle"));
    assert!(rendered.contains("puzzles/liars.yaml"));
    assert!(rendered.contains("ERR_PARSE"));
    assert_eq!(
        outer.source_error().map(|e| e.kind()),
        Some(ExErrorKind::ParseError)
    );
}
