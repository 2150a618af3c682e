use crate::entry::{Descriptor, Entry};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// Already-fetched tree input: the entries plus optional column metadata.
///
/// Accepts either a bare JSON array of entries or an object carrying
/// `entries` with optional `trace` and `descriptors` keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct TreeDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptors: Option<Vec<Descriptor>>,

    pub entries: Vec<Entry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Entries(Vec<Entry>),
    Full {
        #[serde(default)]
        trace: Option<String>,
        #[serde(default, alias = "headers")]
        descriptors: Option<Vec<Descriptor>>,
        entries: Vec<Entry>,
    },
}

impl From<RawDocument> for TreeDocument {
    fn from(raw: RawDocument) -> Self {
        match raw {
            RawDocument::Entries(entries) => TreeDocument {
                trace: None,
                descriptors: None,
                entries,
            },
            RawDocument::Full {
                trace,
                descriptors,
                entries,
            } => TreeDocument {
                trace,
                descriptors,
                entries,
            },
        }
    }
}

impl TreeDocument {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            trace: None,
            descriptors: None,
            entries,
        }
    }

    pub fn with_descriptors(mut self, descriptors: Vec<Descriptor>) -> Self {
        self.descriptors = Some(descriptors);
        self
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }
}
