use ean_scan::{
    CandidateSource, LineSource, ReplaySource, ScanEngine, ScanOptions, Symbology, WedgeSource,
};

fn options(symbologies: Vec<Symbology>) -> ScanOptions {
    ScanOptions {
        symbologies,
        wedge: false,
        emit_json: false,
    }
}

#[tokio::test]
async fn test_end_to_end_scan_over_replay_source() {
    // A realistic decoder burst: misreads first, then a valid code.
    let source = ReplaySource::new(vec![
        "".to_string(),
        "12AB567890123".to_string(),
        "4006381333930".to_string(),
        "4006381333931".to_string(),
        "96385074".to_string(),
    ]);

    let opts = options(vec![Symbology::Ean8, Symbology::Ean13]);
    let mut engine = ScanEngine::from_config(source, &opts);
    let report = engine.run().await.unwrap().unwrap();

    // First-match-wins: the EAN-13 is accepted, the trailing EAN-8 is
    // never reached.
    assert_eq!(report.code, "4006381333931");
    assert_eq!(report.symbology, Symbology::Ean13);
    assert_eq!(report.rejected, 3);
}

#[tokio::test]
async fn test_end_to_end_scan_over_line_stream() {
    let input: &[u8] = b"not-a-code\n4006381333930\n96385074\n4006381333931\n";
    let source = LineSource::new(input);

    let opts = options(vec![Symbology::Ean8, Symbology::Ean13]);
    let mut engine = ScanEngine::from_config(source, &opts);
    let report = engine.run().await.unwrap().unwrap();

    assert_eq!(report.code, "96385074");
    assert_eq!(report.symbology, Symbology::Ean8);
    assert_eq!(report.rejected, 2);
}

#[tokio::test]
async fn test_end_to_end_scan_over_wedge_stream() {
    // Raw keystrokes from a physical scanner: two reads, the second valid.
    let input: &[u8] = b"4006381333930\r\n96385074\r\n";
    let source = WedgeSource::new(input);

    let opts = options(vec![Symbology::Ean8, Symbology::Ean13]);
    let mut engine = ScanEngine::from_config(source, &opts);
    let report = engine.run().await.unwrap().unwrap();

    assert_eq!(report.code, "96385074");
    assert_eq!(report.symbology, Symbology::Ean8);
    assert_eq!(report.rejected, 1);
}

#[tokio::test]
async fn test_scan_with_restricted_symbology() {
    // EAN-8 disabled: a perfectly valid EAN-8 code must be rejected.
    let source = ReplaySource::new(vec![
        "96385074".to_string(),
        "4006381333931".to_string(),
    ]);

    let opts = options(vec![Symbology::Ean13]);
    let mut engine = ScanEngine::from_config(source, &opts);
    let report = engine.run().await.unwrap().unwrap();

    assert_eq!(report.code, "4006381333931");
    assert_eq!(report.rejected, 1);
}

#[tokio::test]
async fn test_scan_exhausted_without_match() {
    let source = ReplaySource::new(vec![
        "1234567890123".to_string(),
        "96385075".to_string(),
    ]);

    let opts = options(vec![Symbology::Ean8, Symbology::Ean13]);
    let mut engine = ScanEngine::from_config(source, &opts);

    assert!(engine.run().await.unwrap().is_none());
}

#[tokio::test]
async fn test_report_serializes_with_outcome_fields() {
    let source = ReplaySource::new(vec!["96385074".to_string()]);
    let opts = options(vec![Symbology::Ean8]);
    let mut engine = ScanEngine::from_config(source, &opts);
    let report = engine.run().await.unwrap().unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["code"], "96385074");
    assert_eq!(json["symbology"], "ean8");
    assert_eq!(json["rejected"], 0);
    assert!(json["scanned_at"].is_string());
}

#[tokio::test]
async fn test_sources_can_be_driven_directly() {
    // The port contract: sources are plain pull-based sequences.
    let mut source = ReplaySource::new(vec!["a".to_string(), "b".to_string()]);
    assert_eq!(source.next_candidate().await.unwrap(), Some("a".to_string()));
    assert_eq!(source.next_candidate().await.unwrap(), Some("b".to_string()));
    assert_eq!(source.next_candidate().await.unwrap(), None);
}
