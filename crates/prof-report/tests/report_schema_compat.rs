use prof_report::report::ReportDocument;

#[test]
fn schema_v1_fields_parse_and_round_trip() {
    let payload = r#"
{
  "schema_version": 1,
  "created_at": "2026-08-07T10:12:45.103220Z",
  "input": "profile.txt",
  "rows": [
    {
      "function": "parse",
      "mean_ms": 2.0,
      "stddev_ms": 1.0
    },
    {
      "function": "render",
      "mean_ms": 2.0,
      "stddev_ms": 0.0
    }
  ]
}
"#;

    let parsed: ReportDocument = serde_json::from_str(payload).expect("schema v1 should parse");
    assert_eq!(parsed.schema_version, 1);
    assert_eq!(parsed.input, "profile.txt");
    assert_eq!(parsed.rows.len(), 2);
    assert_eq!(parsed.rows[0].function, "parse");
    assert_eq!(parsed.rows[0].mean_ms, 2.0);
    assert_eq!(parsed.rows[1].stddev_ms, 0.0);

    let value = serde_json::to_value(&parsed).expect("document should serialize");
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["rows"][0]["function"], "parse");
    assert_eq!(value["rows"][0]["mean_ms"], 2.0);
    assert_eq!(value["rows"][1]["stddev_ms"], 0.0);
}
