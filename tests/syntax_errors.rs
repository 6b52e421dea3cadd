use scalc::{Engine, FaultKind};

fn compile_fault(source: &str) -> (FaultKind, std::ops::Range<usize>) {
    match Engine::default().compile(source) {
        Err(err) => {
            let span = err.span().map(|span| span.0.clone()).unwrap_or_default();
            (err.kind(), span)
        }
        Ok(expr) => panic!("string {:?} is parsed: {:?}", source, expr),
    }
}

#[test]
fn test_rejected_sources() {
    for source in [
        "[",
        "]",
        ";",
        "0 [ 1 2 + [ 3 4 - ]",
        "0 [ 1 2 + [ 3 4 - ] ] 2 5 ] 7 8",
        "0 ; [ 1 2 + [ 3 4 - ]",
        "0 [ 1 2 + [ 3 4 - ] 11 ; 12",
    ] {
        assert!(compile_fault(source).0.is_syntax(), "{:?}", source);
    }
}

#[test]
fn test_fault_kinds_and_spans() {
    assert_eq!(compile_fault("]"), (FaultKind::UnmatchedCloseBracket, 0..1));
    assert_eq!(compile_fault(";"), (FaultKind::SemicolonOutsideBlock, 0..1));
    assert_eq!(compile_fault("["), (FaultKind::UnmatchedOpenBracket, 1..1));
    assert_eq!(
        compile_fault("0 [ 1 2 + [ 3 4 - ] ] 2 5 ] 7 8"),
        (FaultKind::UnmatchedCloseBracket, 26..27)
    );
    assert_eq!(
        compile_fault("0 ; [ 1 2 + [ 3 4 - ]"),
        (FaultKind::SemicolonOutsideBlock, 2..3)
    );
    assert_eq!(
        compile_fault("0 [ 1 2 + [ 3 4 - ] 11 ; 12  "),
        (FaultKind::UnmatchedOpenBracket, 27..27)
    );
}

#[test]
fn test_unclosed_block_points_at_opening() {
    let err = Engine::default().compile("1 [ 2 ; 3").unwrap_err();
    let diagnostics = err.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].related.len(), 1);
    assert_eq!(diagnostics[0].related[0].span.0, 2..3);
}

#[test]
fn test_syntax_errors_are_not_runtime_errors() {
    let err = Engine::default().compile("1 ]").unwrap_err();
    assert!(matches!(err, scalc::Error::Compilation { .. }));
    assert!(!err.kind().is_domain());
}
