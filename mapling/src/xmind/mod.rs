//! XMind workbook reader/writer.
//!
//! A `.xmind` file is a zip archive; the document lives in `content.json` as
//! an array of sheets, each carrying a `rootTopic` whose nested children sit
//! under `children.attached`. `metadata.json` and `manifest.json` round out
//! the container so viewers accept the file.
//!
//! Behavior preserved from the original tool: opening an existing file keeps
//! its sheets and a new run **appends** another sheet; a missing file starts
//! an empty workbook. One scoped open/write/close per run, no locking.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::Error;
use crate::outline::OutlineNode;

const CONTENT_ENTRY: &str = "content.json";
const METADATA_ENTRY: &str = "metadata.json";
const MANIFEST_ENTRY: &str = "manifest.json";

/// One sheet of the workbook: a titled page holding one topic tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sheet {
    pub id: String,
    pub class: String,
    pub title: String,
    #[serde(rename = "rootTopic")]
    pub root_topic: Topic,
}

/// A topic node in the XMind document; children are "attached" sub-topics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Children>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Children {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attached: Vec<Topic>,
}

impl Topic {
    /// Recursive tree-to-topic adapter: titles and child order are copied
    /// exactly; each topic gets a fresh id.
    fn from_outline(node: &OutlineNode) -> Self {
        let attached: Vec<Topic> = node.children.iter().map(Topic::from_outline).collect();
        Topic {
            id: new_id(),
            title: node.title.clone(),
            children: if attached.is_empty() {
                None
            } else {
                Some(Children { attached })
            },
        }
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// In-memory workbook: the sheet list that serializes to `content.json`.
#[derive(Debug, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an existing workbook, or starts an empty one when `path` does not
    /// exist. A file that exists but is not a readable workbook is a
    /// [`Error::DocumentWrite`].
    pub fn load_or_new(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| Error::DocumentWrite(format!("not an xmind archive: {}", e)))?;
        let mut entry = archive
            .by_name(CONTENT_ENTRY)
            .map_err(|e| Error::DocumentWrite(format!("no {} entry: {}", CONTENT_ENTRY, e)))?;
        let mut content = String::new();
        entry.read_to_string(&mut content)?;
        let sheets: Vec<Sheet> = serde_json::from_str(&content)
            .map_err(|e| Error::DocumentWrite(format!("bad {}: {}", CONTENT_ENTRY, e)))?;
        debug!(path = %path.display(), sheets = sheets.len(), "loaded existing workbook");
        Ok(Self { sheets })
    }

    /// Appends a new sheet built from the outline tree. Sheet title and root
    /// topic title both come from the tree's root title.
    pub fn add_outline(&mut self, outline: &OutlineNode) {
        self.sheets.push(Sheet {
            id: new_id(),
            class: "sheet".to_string(),
            title: outline.title.clone(),
            root_topic: Topic::from_outline(outline),
        });
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Writes the workbook to `path`, replacing any previous file.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut zip = ZipWriter::new(file);
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let zip_err = |e: zip::result::ZipError| Error::DocumentWrite(e.to_string());
        let json_err = |e: serde_json::Error| Error::DocumentWrite(e.to_string());

        zip.start_file(CONTENT_ENTRY, options).map_err(zip_err)?;
        zip.write_all(serde_json::to_string(&self.sheets).map_err(json_err)?.as_bytes())?;

        let metadata = json!({
            "creator": { "name": "mapling", "version": env!("CARGO_PKG_VERSION") }
        });
        zip.start_file(METADATA_ENTRY, options).map_err(zip_err)?;
        zip.write_all(metadata.to_string().as_bytes())?;

        let manifest = json!({
            "file-entries": { "content.json": {}, "metadata.json": {} }
        });
        zip.start_file(MANIFEST_ENTRY, options).map_err(zip_err)?;
        zip.write_all(manifest.to_string().as_bytes())?;

        zip.finish().map_err(zip_err)?;
        debug!(path = %path.display(), sheets = self.sheets.len(), "workbook saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outline() -> OutlineNode {
        OutlineNode {
            title: "Tea".to_string(),
            children: vec![
                OutlineNode {
                    title: "Green".to_string(),
                    children: vec![OutlineNode::new("Sencha")],
                },
                OutlineNode::new("Black"),
            ],
        }
    }

    #[test]
    fn topic_adapter_preserves_titles_and_order() {
        let topic = Topic::from_outline(&outline());
        assert_eq!(topic.title, "Tea");
        let attached = &topic.children.as_ref().unwrap().attached;
        assert_eq!(attached.len(), 2);
        assert_eq!(attached[0].title, "Green");
        assert_eq!(attached[1].title, "Black");
        assert!(attached[1].children.is_none());
        assert_eq!(
            attached[0].children.as_ref().unwrap().attached[0].title,
            "Sencha"
        );
    }

    #[test]
    fn save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.xmind");

        let mut wb = Workbook::new();
        wb.add_outline(&outline());
        wb.save(&path).unwrap();

        let reloaded = Workbook::load_or_new(&path).unwrap();
        assert_eq!(reloaded.sheets().len(), 1);
        let sheet = &reloaded.sheets()[0];
        assert_eq!(sheet.class, "sheet");
        assert_eq!(sheet.title, "Tea");
        assert_eq!(sheet.root_topic.title, "Tea");
        assert_eq!(
            sheet.root_topic.children.as_ref().unwrap().attached[0].title,
            "Green"
        );
    }

    #[test]
    fn second_save_appends_a_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.xmind");

        let mut wb = Workbook::new();
        wb.add_outline(&outline());
        wb.save(&path).unwrap();

        let mut wb = Workbook::load_or_new(&path).unwrap();
        wb.add_outline(&OutlineNode::new("Coffee"));
        wb.save(&path).unwrap();

        let reloaded = Workbook::load_or_new(&path).unwrap();
        let titles: Vec<_> = reloaded.sheets().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Tea", "Coffee"]);
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let wb = Workbook::load_or_new(&dir.path().join("nope.xmind")).unwrap();
        assert!(wb.sheets().is_empty());
    }

    #[test]
    fn garbage_file_is_a_document_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("junk.xmind");
        std::fs::write(&path, b"this is not a zip").unwrap();
        let err = Workbook::load_or_new(&path).unwrap_err();
        assert!(matches!(err, Error::DocumentWrite(_)));
    }

    #[test]
    fn archive_has_expected_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.xmind");
        let mut wb = Workbook::new();
        wb.add_outline(&outline());
        wb.save(&path).unwrap();

        let file = File::open(&path).unwrap();
        let mut archive = ZipArchive::new(file).unwrap();
        for name in [CONTENT_ENTRY, METADATA_ENTRY, MANIFEST_ENTRY] {
            assert!(archive.by_name(name).is_ok(), "missing entry {}", name);
        }
    }
}
