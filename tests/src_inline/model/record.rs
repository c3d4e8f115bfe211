use super::*;

#[test]
fn test_known_tags_map_to_labels() {
    assert_eq!(Label::from_tag("Non-immune"), Label::NonImmune);
    assert_eq!(Label::from_tag("2022 IUIS IEI"), Label::KnownIei);
    assert_eq!(Label::from_tag("Novel 2024 IUIS"), Label::NovelIei);
    assert_eq!(Label::from_tag(" Predicted IEI "), Label::PredictedIei);
}

#[test]
fn test_unknown_tag_kept_verbatim() {
    let label = Label::from_tag("Curated 2025");
    assert_eq!(label, Label::Other("Curated 2025".to_string()));
    assert_eq!(label.tag(), "Curated 2025");
    assert_eq!(Label::KnownIei.tag(), "2022 IUIS IEI");
}

#[test]
fn test_label_serializes_as_tag() {
    let json = serde_json::to_string(&vec![Label::NovelIei, Label::NonImmune]).unwrap();
    assert_eq!(json, r#"["Novel 2024 IUIS","Non-immune"]"#);
}

#[test]
fn test_record_flags() {
    let record = GeneRecord {
        symbol: "BTK".to_string(),
        rank: 0,
        labels: vec![Label::KnownIei],
        probability: Probability::NotApplicable,
    };
    assert!(!record.is_ranked());
    assert!(record.has_label(&Label::KnownIei));
    assert!(!record.has_label(&Label::NovelIei));
    assert_eq!(record.probability.value(), None);
    assert_eq!(Probability::Value(0.25).value(), Some(0.25));
}
