use answer_key_extractor::{
    extract, AnswerReport, Config, ExtractionFlow, ParseError, StrategyKind,
};

#[test]
fn test_direct_key_wins_over_other_strategies() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<page>
  <modules>
    <addonModule addonId="Double_State_Button" id="btn">
      <properties><property name="onSelected" value="mod42.show()"/></properties>
    </addonModule>
    <textModule id="mod42"><text>Correct: true</text></textModule>
    <textModule id="key"><text><![CDATA[<b>Answer Key</b>: 1-A, 2-B]]></text></textModule>
    <textModule id="gaps"><text>\gap{Paris}</text></textModule>
  </modules>
</page>"#;

    let report = extract(xml).unwrap();
    assert_eq!(
        report,
        AnswerReport::Found {
            strategy: StrategyKind::DirectKey,
            html: "<b>Answer Key</b>: 1-A, 2-B".to_string(),
        }
    );
}

#[test]
fn test_interaction_key_when_no_direct_key() {
    let xml = r#"<page>
  <addonModule addonId="Double_State_Button" id="btn">
    <properties><property name="onSelected" value="mod42.show()"/></properties>
  </addonModule>
  <textModule id="mod42"><text>Correct: true</text></textModule>
</page>"#;

    let report = extract(xml).unwrap();
    assert_eq!(report.strategy(), Some(StrategyKind::InteractionKey));
    assert_eq!(report.html(), Some("Correct: true"));
}

#[test]
fn test_empty_interaction_module_falls_back_to_heuristic() {
    let xml = r#"<page>
  <addonModule addonId="Double_State_Button" id="b1">
    <properties><property name="onSelected" value="empty.show()"/></properties>
  </addonModule>
  <addonModule addonId="Double_State_Button" id="b2">
    <properties><property name="onSelected" value="other.show()"/></properties>
  </addonModule>
  <textModule id="empty"><text></text></textModule>
  <textModule id="other"><text>Not the answer</text></textModule>
  <textModule id="gaps"><text>\gap{Paris}</text></textModule>
</page>"#;

    let report = extract(xml).unwrap();
    assert_eq!(report.strategy(), Some(StrategyKind::Heuristic));
    let html = report.html().unwrap();
    assert!(html.contains("<li><b>Question 1:</b> Paris</li>"));
    assert!(!html.contains("Not the answer"));
}

#[test]
fn test_heuristic_gap_fill_only() {
    let xml = r#"<page><textModule id="t1"><text>The capital of France is \gap{Paris|paris}.</text></textModule></page>"#;

    let report = extract(xml).unwrap();
    assert_eq!(report.strategy(), Some(StrategyKind::Heuristic));
    let html = report.html().unwrap();
    assert!(html.contains("<h4>Gap-fill:</h4>"));
    assert!(html.contains("<li><b>Question 1:</b> Paris</li>"));
    assert!(!html.contains("paris</li>"));
}

#[test]
fn test_heuristic_choice_answer_by_index() {
    let xml = r#"<page>
  <addonModule addonId="MultipleChoice" id="mc7">
    <property displayName="Choices">
      <items>
        <item><property displayName="Choice">A</property></item>
        <item><property displayName="Choice">B</property></item>
        <item><property displayName="Choice">C</property></item>
      </items>
    </property>
    <property displayName="Questions">
      <items>
        <item>
          <property displayName="Question">Which letter?</property>
          <property displayName="Answer" value="2"/>
        </item>
        <item>
          <property displayName="Question">Another one</property>
          <property displayName="Answer" value="5"/>
        </item>
      </items>
    </property>
  </addonModule>
</page>"#;

    let html = extract(xml).unwrap().into_html().unwrap();
    assert!(html.contains("<h4>Multiple Choice (ID: mc7):</h4>"));
    assert!(html.contains("<li><b>Question 1 (Which letter?...):</b> B</li>"));
    assert!(html.contains("<li><b>Question 2 (Another one...):</b> unknown</li>"));
}

#[test]
fn test_nothing_found() {
    assert_eq!(extract("<page/>").unwrap(), AnswerReport::NotFound);
    assert_eq!(
        extract(r#"<page><textModule><text>Read the text.</text></textModule><addonModule addonId="Audio"/></page>"#)
            .unwrap(),
        AnswerReport::NotFound
    );
}

#[test]
fn test_malformed_xml_is_parse_error() {
    assert!(extract("<page><textModule></page>").is_err());
    assert!(extract("not xml at all").is_err());
}

#[test]
fn test_deeply_nested_document_is_rejected() {
    for depth in [20_000, 50_000] {
        let xml = format!("<page>{}{}</page>", "<d>".repeat(depth), "</d>".repeat(depth));
        assert!(matches!(extract(&xml), Err(ParseError::TooDeep(_))));
    }

    let shallow = format!("<page>{}{}</page>", "<d>".repeat(100), "</d>".repeat(100));
    assert_eq!(extract(&shallow).unwrap(), AnswerReport::NotFound);
}

#[test]
fn test_custom_labels() {
    let config = Config::from_toml_str(
        r#"
        [labels]
        heading = "Không tìm thấy"
        gap_fill_heading = "Dạng Gap-fill:"
        question_label = "Câu"
        "#,
    )
    .unwrap();
    let flow = ExtractionFlow::new(&config);

    let report = flow
        .extract_bytes(br"<page><textModule><text>\gap{went|go}</text></textModule></page>")
        .unwrap();
    let html = report.html().unwrap();
    assert!(html.starts_with("<h3>Không tìm thấy</h3>"));
    assert!(html.contains("<h4>Dạng Gap-fill:</h4><ul><li><b>Câu 1:</b> went</li></ul>"));
}
