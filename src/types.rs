// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for lincat
//!
//! Models the Qt Linguist TS document: an ordered list of named contexts,
//! each holding translatable messages with status, disambiguation and
//! source-provenance metadata. The shape covers TS format versions 2.0
//! and 2.1 as written by lupdate and Qt Linguist.

use serde::{Deserialize, Serialize};

/// Translation state of a message.
///
/// Encoded by the `type` attribute on `<translation>`; a missing attribute
/// means finished. `Vanished` and `Obsolete` both mark entries dropped by a
/// merge (newer tools write `vanished`, older ones `obsolete`); they are
/// kept for translation-memory reuse and never resolve at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Finished,
    Unfinished,
    Vanished,
    Obsolete,
}

impl Status {
    /// Parses a TS `type` attribute value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Status::Unfinished),
            "vanished" => Some(Status::Vanished),
            "obsolete" => Some(Status::Obsolete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Finished => "finished",
            Status::Unfinished => "unfinished",
            Status::Vanished => "vanished",
            Status::Obsolete => "obsolete",
        }
    }

    /// Value for the serialized `type` attribute; `None` means finished.
    pub fn type_attr(&self) -> Option<&'static str> {
        match self {
            Status::Finished => None,
            Status::Unfinished => Some("unfinished"),
            Status::Vanished => Some("vanished"),
            Status::Obsolete => Some("obsolete"),
        }
    }

    /// Whether the entry takes part in runtime lookup.
    pub fn is_active(&self) -> bool {
        matches!(self, Status::Finished | Status::Unfinished)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Status::Finished)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the extraction tool saw a message in the application source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// One translatable unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Untranslated text; lookup key together with context name and comment.
    pub source: String,
    /// Localized text; empty while untranslated. A numerus message keeps its
    /// text in `numerus_forms` instead.
    pub translation: String,
    pub status: Status,
    /// Disambiguates messages sharing one source within a context.
    pub comment: Option<String>,
    /// Guidance from the developer to the translator; not a lookup key.
    pub extra_comment: Option<String>,
    /// Note written by the translator; not a lookup key.
    pub translator_comment: Option<String>,
    pub locations: Vec<Location>,
    /// Plural-aware message carrying one form per plural class of the
    /// target language.
    pub numerus: bool,
    pub numerus_forms: Vec<String>,
}

impl Message {
    /// A freshly extracted entry: unfinished, nothing translated yet.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            status: Status::Unfinished,
            ..Default::default()
        }
    }

    /// The disambiguation comment, with absence collapsed to `""` so the
    /// pair (source, comment) is directly usable as a map key.
    pub fn comment_key(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    /// Whether a lookup can return this entry's text.
    pub fn is_translated(&self) -> bool {
        self.status == Status::Finished
            && (!self.translation.is_empty() || !self.numerus_forms.is_empty())
    }
}

/// A named grouping of messages, typically one functional UI area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TsContext {
    pub name: String,
    pub messages: Vec<Message>,
}

impl TsContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// A whole TS document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// TS format version, `"2.0"` in every catalog this tool meets.
    pub version: String,
    /// Target locale code, e.g. `"nb_NO"`.
    pub language: String,
    /// Locale the source strings are written in, when declared.
    pub source_language: Option<String>,
    pub contexts: Vec<TsContext>,
}

impl Catalog {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            version: "2.0".to_string(),
            language: language.into(),
            source_language: None,
            contexts: Vec::new(),
        }
    }

    /// First context with the given name, if any.
    pub fn context(&self, name: &str) -> Option<&TsContext> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// Every message paired with its context, in document order.
    pub fn messages(&self) -> impl Iterator<Item = (&TsContext, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c, m)))
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    pub fn count_status(&self, status: Status) -> usize {
        self.messages().filter(|(_, m)| m.status == status).count()
    }
}
