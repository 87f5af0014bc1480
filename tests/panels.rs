//! End-to-end tests for panel loading, element building and index enrichment.
//!
//! Fixtures live in `tests/data/`. Names are resolved relative to the package
//! root, which is the working directory of `cargo test`.

use kidash_panels::{
    Element, FormatError, IndexNaming, LoaderConfig, PanelDocument, PanelError, PanelLoader,
    Provenance, add_index_elements, build_elements, dangling_references, load_panel,
    search_from_vis_json,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::fs;

const GIT_PANEL: &str = "tests/data/git_panel.json";
const GITHUB_PANEL: &str = "tests/data/github_panel.json";

fn read_json(path: &str) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn read_panel(name: &str) -> kidash_panels::LoadedPanel {
    PanelLoader::default().read(name).unwrap()
}

#[test]
fn reads_from_filesystem() {
    for path in [GIT_PANEL, GITHUB_PANEL] {
        let loaded = read_panel(path);
        assert_eq!(serde_json::to_value(&loaded.panel).unwrap(), read_json(path));
        assert_eq!(loaded.provenance, Provenance::Filesystem);
    }
}

#[test]
fn missing_file_is_not_found() {
    let err = PanelLoader::default()
        .read("tests/data/git_panel2.json")
        .unwrap_err();
    assert!(matches!(err, PanelError::FileNotFound { .. }));
    assert_eq!(err.name(), "tests/data/git_panel2.json");
}

#[test]
fn reads_from_bundle_by_bare_and_prefixed_name() {
    let expected: PanelDocument = serde_json::from_value(read_json(GIT_PANEL)).unwrap();

    let bare = read_panel("git.json");
    assert_eq!(bare.provenance, Provenance::Bundled);
    assert_eq!(bare.panel.id, "git");
    assert_eq!(bare.panel, expected);

    let prefixed = read_panel("panels/json/git.json");
    assert_eq!(prefixed.provenance, Provenance::Bundled);
    assert_eq!(prefixed.panel, expected);

    let from_disk = read_panel(GIT_PANEL);
    assert_eq!(from_disk.provenance, Provenance::Filesystem);
    assert_eq!(from_disk.panel, bare.panel);
}

#[test]
fn filesystem_wins_over_bundle() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("git.json"),
        r#"{"id": "local_git", "objects": []}"#,
    )
    .unwrap();

    let loader = PanelLoader::new(LoaderConfig::default().with_base_dir(dir.path()));
    let loaded = loader.read("git.json").unwrap();
    assert_eq!(loaded.provenance, Provenance::Filesystem);
    assert_eq!(loaded.panel.id, "local_git");

    let loaded = loader.read("github.json").unwrap();
    assert_eq!(loaded.provenance, Provenance::Bundled);
}

#[test]
fn wrong_format_files_are_rejected() {
    let loader = PanelLoader::default();

    // valid JSON without the top-level `id`
    let err = loader.read("tests/data/git_panel_wrong.json").unwrap_err();
    assert!(matches!(
        err,
        PanelError::FileWrongFormat {
            source: FormatError::MissingId,
            ..
        }
    ));

    // trailing ',' after the first searchSourceJSON
    let err = loader.read("tests/data/git_panel_wrong2.json").unwrap_err();
    assert!(matches!(
        err,
        PanelError::FileWrongFormat {
            source: FormatError::Syntax(_),
            ..
        }
    ));
}

#[test]
fn unreadable_garbage_is_wrong_format_not_missing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("junk.json"), b"\x00\x01 not json").unwrap();

    let loader = PanelLoader::new(LoaderConfig::default().with_base_dir(dir.path()));
    let err = loader.read("junk.json").unwrap_err();
    assert!(matches!(err, PanelError::FileWrongFormat { .. }));
}

#[test]
fn builds_elements() {
    for (panel, expected) in [
        (GIT_PANEL, "tests/data/git_panel_elements.json"),
        (GITHUB_PANEL, "tests/data/github_panel_elements.json"),
    ] {
        let loaded = read_panel(panel);
        let elements = build_elements(&loaded.panel);
        assert_eq!(elements.len(), loaded.panel.objects.len());
        assert_eq!(serde_json::to_value(&elements).unwrap(), read_json(expected));
    }
}

#[test]
fn adds_index_elements() {
    let loaded = read_panel(GIT_PANEL);
    let mut elements = build_elements(&loaded.panel);
    add_index_elements(&mut elements, &IndexNaming::default());
    assert_eq!(
        serde_json::to_value(&elements).unwrap(),
        read_json("tests/data/git_panel_elements_index.json")
    );
}

#[test]
fn load_runs_the_whole_pipeline() {
    let (loaded, elements) = load_panel("git.json").unwrap();
    assert_eq!(loaded.provenance, Provenance::Bundled);
    let ids: Vec<_> = elements
        .iter()
        .map(|e| e.index_action.as_ref().unwrap().document_id.as_str())
        .collect();
    assert_eq!(
        ids,
        [
            "dashboard:Git",
            "visualization:git_commits_evolution",
            "visualization:git_main_metrics",
            "search:Search:_merges:false",
            "index-pattern:git",
        ]
    );
    assert!(dangling_references(&elements).is_empty());
}

#[test]
fn legacy_nested_field_is_kept_as_text() {
    let (_, elements) = load_panel(GITHUB_PANEL).unwrap();
    let legacy = elements
        .iter()
        .find(|e| e.id == "github_issues_legacy_table")
        .unwrap();
    assert_eq!(
        legacy.value["uiStateJSON"],
        "{vis:{params:{sort:{columnIndex:null}}}}"
    );
    assert_eq!(legacy.value["visState"]["type"], "table");
}

#[test]
fn decoding_again_is_a_no_op() {
    let loaded = read_panel(GIT_PANEL);
    let once = build_elements(&loaded.panel);

    let redecoded: Vec<Element> = once
        .iter()
        .map(|e| {
            let entry = kidash_panels::ObjectEntry {
                kind: e.kind.clone(),
                id: e.id.clone(),
                value: e.value.clone(),
            };
            Element::from_entry(&entry)
        })
        .collect();
    assert_eq!(redecoded, once);
}

#[test]
fn saved_search_from_visualizations() {
    let visualizations = [
        json!({
            "description": "",
            "kibanaSavedObjectMeta": {
                "searchSourceJSON": "{\"index\":\"jira\",\"query\":{\"query_string\":{\"query\":\"*\",\"analyze_wildcard\":true}},\"filter\":[]}"
            },
            "title": "jira_main_metrics",
            "uiStateJSON": "{}",
            "version": 1,
            "visState": "{\"title\":\"jira_main_metrics\",\"type\":\"metric\",\"params\":{\"fontSize\":\"12\"},\"aggs\":[],\"listeners\":{}}"
        }),
        json!({
            "description": "",
            "kibanaSavedObjectMeta": {
                "searchSourceJSON": "{\"filter\":[]}"
            },
            "savedSearchId": "Search:_pull_request:false",
            "title": "github_issues_main_metrics",
            "uiStateJSON": "{}",
            "version": 1
        }),
    ];
    let expected = [None, Some("Search:_pull_request:false")];
    for (vis, want) in visualizations.iter().zip(expected) {
        assert_eq!(search_from_vis_json(vis), want);
    }
}

#[test]
fn jira_search_source_is_decoded_and_addressed() {
    let bytes = serde_json::to_vec(&json!({
        "id": "jira",
        "objects": [{
            "type": "visualization",
            "id": "jira_main_metrics",
            "value": {
                "searchSourceJSON": "{\"index\":\"jira\",\"query\":{\"query_string\":{\"query\":\"*\",\"analyze_wildcard\":true}},\"filter\":[]}"
            }
        }]
    }))
    .unwrap();
    let panel = PanelDocument::parse(&bytes).unwrap();
    let mut elements = build_elements(&panel);
    add_index_elements(&mut elements, &IndexNaming::default());

    let e = &elements[0];
    assert_eq!(e.value["searchSourceJSON"]["index"], "jira");
    let action = e.index_action.as_ref().unwrap();
    assert_eq!(action.document_id, "visualization:jira_main_metrics");
    assert_eq!(action.target_collection, ".kibana");
}
