// SPDX-License-Identifier: PMPL-1.0-or-later

//! TS document parsing
//!
//! Event-driven reader for Qt Linguist `.ts` files. Text is captured only
//! while inside one of the leaf elements we model, so indentation between
//! elements never leaks into message fields while newlines and spaces
//! inside a field survive verbatim. Elements the model does not cover
//! (`lengthvariant`, `oldsource`, `userdata`, and whatever the format
//! grows next) are skipped wholesale rather than rejected.

use crate::types::{Catalog, Location, Message, Status, TsContext};
use anyhow::{anyhow, bail, Context as _, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// Loads a catalog from disk.
///
/// Bytes are decoded as UTF-8 with a Windows-1252 fallback for catalogs
/// predating the UTF-8 default. Any parse failure is fatal and names the
/// file.
pub fn load_file(path: &Path) -> Result<Catalog> {
    let raw = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let content = match String::from_utf8(raw) {
        Ok(s) => s,
        Err(err) => {
            let raw = err.into_bytes();
            let (cow, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&raw);
            if had_errors {
                bail!("{} is neither UTF-8 nor Windows-1252", path.display());
            }
            cow.into_owned()
        }
    };
    parse(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Leaf element whose text is currently being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    ContextName,
    Source,
    Translation,
    NumerusForm,
    Comment,
    ExtraComment,
    TranslatorComment,
}

/// Parses a TS document.
pub fn parse(xml: &str) -> Result<Catalog> {
    let mut reader = Reader::from_str(xml);

    let mut catalog: Option<Catalog> = None;
    let mut context: Option<TsContext> = None;
    let mut message: Option<Message> = None;
    let mut forms: Vec<String> = Vec::new();
    let mut capture: Option<Capture> = None;
    let mut buf = String::new();
    let mut skip_depth = 0usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| anyhow!("malformed XML at byte {}: {}", reader.buffer_position(), e))?;

        match event {
            Event::Start(e) => {
                if skip_depth > 0 {
                    skip_depth += 1;
                    continue;
                }
                match e.name().as_ref() {
                    b"TS" => catalog = Some(read_ts_attrs(&e)?),
                    b"context" if catalog.is_some() => context = Some(TsContext::default()),
                    b"name" if context.is_some() && message.is_none() => {
                        capture = Some(Capture::ContextName);
                        buf.clear();
                    }
                    b"message" if context.is_some() => {
                        let mut msg = Message {
                            status: Status::Finished,
                            ..Default::default()
                        };
                        for attr in e.attributes() {
                            let attr = attr?;
                            if attr.key.as_ref() == b"numerus" {
                                msg.numerus = attr.unescape_value()?.as_ref() == "yes";
                            }
                        }
                        forms.clear();
                        message = Some(msg);
                    }
                    b"location" if message.is_some() => {
                        if let Some(msg) = message.as_mut() {
                            msg.locations.push(read_location(&e)?);
                        }
                    }
                    b"source" if message.is_some() => {
                        capture = Some(Capture::Source);
                        buf.clear();
                    }
                    b"comment" if message.is_some() => {
                        capture = Some(Capture::Comment);
                        buf.clear();
                    }
                    b"extracomment" if message.is_some() => {
                        capture = Some(Capture::ExtraComment);
                        buf.clear();
                    }
                    b"translatorcomment" if message.is_some() => {
                        capture = Some(Capture::TranslatorComment);
                        buf.clear();
                    }
                    b"translation" if message.is_some() => {
                        if let Some(msg) = message.as_mut() {
                            for attr in e.attributes() {
                                let attr = attr?;
                                if attr.key.as_ref() == b"type" {
                                    let value = attr.unescape_value()?;
                                    msg.status = Status::parse(&value).ok_or_else(|| {
                                        anyhow!("unknown translation type {:?}", value.as_ref())
                                    })?;
                                }
                            }
                        }
                        capture = Some(Capture::Translation);
                        buf.clear();
                    }
                    b"numerusform" if capture == Some(Capture::Translation) => {
                        capture = Some(Capture::NumerusForm);
                        buf.clear();
                    }
                    _ => skip_depth = 1,
                }
            }

            Event::Empty(e) => {
                if skip_depth > 0 {
                    continue;
                }
                if e.name().as_ref() == b"location" {
                    if let Some(msg) = message.as_mut() {
                        msg.locations.push(read_location(&e)?);
                    }
                }
            }

            Event::Text(t) => {
                if skip_depth == 0 && capture.is_some() {
                    buf.push_str(&t.unescape()?);
                }
            }

            Event::CData(t) => {
                if skip_depth == 0 && capture.is_some() {
                    buf.push_str(std::str::from_utf8(t.as_ref())?);
                }
            }

            Event::End(e) => {
                if skip_depth > 0 {
                    skip_depth -= 1;
                    continue;
                }
                match e.name().as_ref() {
                    b"name" => {
                        if capture.take() == Some(Capture::ContextName) {
                            if let Some(ctx) = context.as_mut() {
                                ctx.name = std::mem::take(&mut buf);
                            }
                        }
                    }
                    b"source" => {
                        if capture.take() == Some(Capture::Source) {
                            if let Some(msg) = message.as_mut() {
                                msg.source = std::mem::take(&mut buf);
                            }
                        }
                    }
                    b"comment" => {
                        if capture.take() == Some(Capture::Comment) {
                            if let Some(msg) = message.as_mut() {
                                let text = std::mem::take(&mut buf);
                                msg.comment = (!text.is_empty()).then_some(text);
                            }
                        }
                    }
                    b"extracomment" => {
                        if capture.take() == Some(Capture::ExtraComment) {
                            if let Some(msg) = message.as_mut() {
                                let text = std::mem::take(&mut buf);
                                msg.extra_comment = (!text.is_empty()).then_some(text);
                            }
                        }
                    }
                    b"translatorcomment" => {
                        if capture.take() == Some(Capture::TranslatorComment) {
                            if let Some(msg) = message.as_mut() {
                                let text = std::mem::take(&mut buf);
                                msg.translator_comment = (!text.is_empty()).then_some(text);
                            }
                        }
                    }
                    b"numerusform" => {
                        if capture.take() == Some(Capture::NumerusForm) {
                            forms.push(std::mem::take(&mut buf));
                            capture = Some(Capture::Translation);
                        }
                    }
                    b"translation" => {
                        if capture.take() == Some(Capture::Translation) {
                            if let Some(msg) = message.as_mut() {
                                if forms.is_empty() {
                                    msg.translation = std::mem::take(&mut buf);
                                } else {
                                    msg.numerus_forms = std::mem::take(&mut forms);
                                    buf.clear();
                                }
                            }
                        }
                    }
                    b"message" => {
                        if let (Some(ctx), Some(msg)) = (context.as_mut(), message.take()) {
                            ctx.messages.push(msg);
                        }
                    }
                    b"context" => {
                        if let (Some(cat), Some(ctx)) = (catalog.as_mut(), context.take()) {
                            cat.contexts.push(ctx);
                        }
                    }
                    _ => {}
                }
            }

            Event::Eof => {
                if message.is_some() || context.is_some() || skip_depth > 0 {
                    bail!("unexpected end of document");
                }
                break;
            }

            _ => {}
        }
    }

    catalog.ok_or_else(|| anyhow!("no <TS> root element found"))
}

fn read_ts_attrs(e: &BytesStart) -> Result<Catalog> {
    let mut catalog = Catalog::new("");
    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"version" => catalog.version = value.into_owned(),
            b"language" => catalog.language = value.into_owned(),
            b"sourcelanguage" => catalog.source_language = Some(value.into_owned()),
            _ => {}
        }
    }
    Ok(catalog)
}

fn read_location(e: &BytesStart) -> Result<Location> {
    let mut location = Location::new("", 0);
    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"filename" => location.file = value.into_owned(),
            b"line" => {
                // lupdate -locations relative prefixes offsets with '+'
                let digits = value.strip_prefix('+').unwrap_or(&value);
                location.line = digits
                    .parse()
                    .with_context(|| format!("bad line attribute {:?}", value.as_ref()))?;
            }
            _ => {}
        }
    }
    Ok(location)
}
