//! End-to-end pipeline tests with a canned model client.

use mapling::llm::MockClient;
use mapling::xmind::Workbook;
use mapling::{Error, OutlineFormat, Pipeline};

const JSON_REPLY: &str = r#"
{
    "title": "Tea",
    "subtopics": [
        {"title": "Green", "subtopics": [{"title": "Sencha", "subtopics": []}]},
        {"title": "Black"}
    ]
}"#;

#[tokio::test]
async fn json_run_decodes_and_writes_one_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.xmind");

    let pipeline = Pipeline::new(
        Box::new(MockClient::new(JSON_REPLY)),
        OutlineFormat::Json,
        path.clone(),
    );
    let tree = pipeline.run("Tea").await.unwrap();

    assert_eq!(tree.title, "Tea");
    assert_eq!(tree.children.len(), 2);
    assert_eq!(tree.children[0].children[0].title, "Sencha");

    let wb = Workbook::load_or_new(&path).unwrap();
    assert_eq!(wb.sheets().len(), 1);
    assert_eq!(wb.sheets()[0].title, "Tea");
    assert_eq!(wb.sheets()[0].root_topic.title, "Tea");
}

#[tokio::test]
async fn malformed_json_aborts_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.xmind");

    let pipeline = Pipeline::new(
        Box::new(MockClient::new("here is your outline!")),
        OutlineFormat::Json,
        path.clone(),
    );
    let err = pipeline.run("Tea").await.unwrap_err();

    match err {
        Error::MalformedResponse { raw, .. } => assert_eq!(raw, "here is your outline!"),
        other => panic!("expected MalformedResponse, got {:?}", other),
    }
    assert!(!path.exists(), "no partial output on decode failure");
}

#[tokio::test]
async fn upstream_failure_aborts_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.xmind");

    let pipeline = Pipeline::new(
        Box::new(MockClient::failing("rate limited")),
        OutlineFormat::Json,
        path.clone(),
    );
    assert!(matches!(
        pipeline.run("Tea").await,
        Err(Error::Upstream(_))
    ));
    assert!(!path.exists());
}

#[tokio::test]
async fn markdown_run_titles_root_with_topic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.xmind");

    let pipeline = Pipeline::new(
        Box::new(MockClient::new("# History\n## Origins\n## Spread\n# Chemistry")),
        OutlineFormat::Markdown,
        path.clone(),
    );
    let tree = pipeline.run("Tea").await.unwrap();

    assert_eq!(tree.title, "Tea");
    let titles: Vec<_> = tree.children.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["History", "Chemistry"]);

    let wb = Workbook::load_or_new(&path).unwrap();
    assert_eq!(wb.sheets()[0].title, "Tea");
}

// Messy markdown still produces a tree: the decoder has no rejection path.
#[tokio::test]
async fn markdown_run_accepts_irregular_outline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.xmind");

    let pipeline = Pipeline::new(
        Box::new(MockClient::new("### deep start\nno markers at all\n# late top")),
        OutlineFormat::Markdown,
        path.clone(),
    );
    let tree = pipeline.run("Odd").await.unwrap();
    assert_eq!(tree.title, "Odd");
    assert!(!tree.children.is_empty());
    assert!(path.exists());
}

#[tokio::test]
async fn second_run_appends_a_sheet_to_the_same_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.xmind");

    let first = Pipeline::new(
        Box::new(MockClient::new(JSON_REPLY)),
        OutlineFormat::Json,
        path.clone(),
    );
    first.run("Tea").await.unwrap();

    let second = Pipeline::new(
        Box::new(MockClient::new(r#"{"title":"Coffee","subtopics":[]}"#)),
        OutlineFormat::Json,
        path.clone(),
    );
    second.run("Coffee").await.unwrap();

    let wb = Workbook::load_or_new(&path).unwrap();
    let titles: Vec<_> = wb.sheets().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Tea", "Coffee"]);
}
