use pdf_bleed::*;

#[test]
fn test_default_options_are_valid() {
    let options = FinishingOptions::default();
    assert!(options.validate().is_ok());
    assert!(options.mirror_bleed);
    assert!(options.crop_marks);
    assert!(options.grommets.is_none());
    assert_eq!(options.box_precedence, BoxKind::PRECEDENCE.to_vec());
}

#[test]
fn test_validation_non_finite_margins() {
    let mut options = FinishingOptions::default();
    options.margins.right = f32::INFINITY;

    match options.validate() {
        Err(FinishError::Config(msg)) => {
            assert!(msg.contains("finite"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_validation_negative_margins_allowed() {
    // Negative bleed disables the edge instead of failing
    let options = FinishingOptions {
        margins: BleedMargins::new(-10.0, 0.0, 36.0, -1.0),
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_empty_precedence() {
    let options = FinishingOptions {
        box_precedence: Vec::new(),
        ..Default::default()
    };
    assert!(matches!(options.validate(), Err(FinishError::Config(_))));
}

#[test]
fn test_validation_grommets() {
    let mut options = FinishingOptions {
        grommets: Some(GrommetOptions::every(24.0)),
        ..Default::default()
    };
    assert!(options.validate().is_ok());

    // Zero and negative spacing turn marking off
    options.grommets = Some(GrommetOptions::every(0.0));
    assert!(options.validate().is_ok());
    options.grommets = Some(GrommetOptions::every(-3.0));
    assert!(options.validate().is_ok());

    options.grommets = Some(GrommetOptions::every(f32::NAN));
    assert!(options.validate().is_err());

    let mut grommets = GrommetOptions::every(24.0);
    grommets.offset_in = -0.5;
    options.grommets = Some(grommets);
    match options.validate() {
        Err(FinishError::Config(msg)) => {
            assert!(msg.contains("-0.5"));
        }
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_grommet_options_every() {
    let grommets = GrommetOptions::every(12.0);
    assert_eq!(grommets.spacing_in, 12.0);
    assert_eq!(grommets.offset_in, 0.5);
    assert_eq!(grommets.policy, GrommetSpacingPolicy::Distribute);
}

#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = FinishingOptions {
        margins: BleedMargins::new(72.0, 72.0, 36.0, 0.0),
        box_precedence: vec![BoxKind::Crop, BoxKind::Media],
        mirror_bleed: false,
        crop_marks: true,
        grommets: Some(GrommetOptions {
            spacing_in: 18.0,
            offset_in: 1.0,
            policy: GrommetSpacingPolicy::FixedStep,
        }),
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = FinishingOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[tokio::test]
async fn test_load_partial_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    tokio::fs::write(
        &path,
        r#"{ "margins": { "left": 9, "right": 9, "top": 9, "bottom": 9 },
             "grommets": { "spacing_in": 24 } }"#,
    )
    .await
    .unwrap();

    let loaded = FinishingOptions::load(&path).await.unwrap();
    assert_eq!(loaded.margins, BleedMargins::uniform(9.0));
    assert!(loaded.mirror_bleed);
    assert_eq!(loaded.box_precedence, BoxKind::PRECEDENCE.to_vec());
    assert_eq!(loaded.grommets, Some(GrommetOptions::every(24.0)));
}

#[tokio::test]
async fn test_load_partial_margins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("left_only.json");
    tokio::fs::write(&path, r#"{ "margins": { "left": 9 } }"#)
        .await
        .unwrap();

    let loaded = FinishingOptions::load(&path).await.unwrap();
    assert_eq!(loaded.margins, BleedMargins::new(9.0, 0.0, 0.0, 0.0));
}

#[tokio::test]
async fn test_load_malformed_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    tokio::fs::write(&path, "{ not json").await.unwrap();

    let result = FinishingOptions::load(&path).await;
    assert!(matches!(result, Err(FinishError::Config(_))));
}
