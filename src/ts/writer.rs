// SPDX-License-Identifier: PMPL-1.0-or-later

//! TS document serialization
//!
//! Writes a `Catalog` back out as Qt Linguist XML with the standard
//! prolog and entity escaping. Leaf elements always get a text event,
//! even when empty, so `<translation type="unfinished"></translation>`
//! stays inline and reloads as the empty string rather than as the
//! writer's own indentation.

use crate::types::{Catalog, Message, TsContext};
use anyhow::{Context as _, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs;
use std::path::Path;

/// Serializes a catalog to a TS document string.
pub fn to_xml(catalog: &Catalog) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::from_escaped("TS")))?;

    let mut ts = BytesStart::new("TS");
    ts.push_attribute(("version", catalog.version.as_str()));
    ts.push_attribute(("language", catalog.language.as_str()));
    if let Some(source_language) = &catalog.source_language {
        ts.push_attribute(("sourcelanguage", source_language.as_str()));
    }
    writer.write_event(Event::Start(ts))?;

    for context in &catalog.contexts {
        write_context(&mut writer, context)?;
    }

    writer.write_event(Event::End(BytesEnd::new("TS")))?;

    let mut xml =
        String::from_utf8(writer.into_inner()).context("serialized catalog is not UTF-8")?;
    xml.push('\n');
    Ok(xml)
}

/// Serializes a catalog and writes it to disk.
pub fn write_file(catalog: &Catalog, path: &Path) -> Result<()> {
    let xml = to_xml(catalog)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, xml).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn write_context(writer: &mut Writer<Vec<u8>>, context: &TsContext) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new("context")))?;
    write_text_element(writer, "name", &context.name)?;
    for message in &context.messages {
        write_message(writer, message)?;
    }
    writer.write_event(Event::End(BytesEnd::new("context")))?;
    Ok(())
}

fn write_message(writer: &mut Writer<Vec<u8>>, message: &Message) -> Result<()> {
    let mut start = BytesStart::new("message");
    if message.numerus {
        start.push_attribute(("numerus", "yes"));
    }
    writer.write_event(Event::Start(start))?;

    for location in &message.locations {
        let mut loc = BytesStart::new("location");
        loc.push_attribute(("filename", location.file.as_str()));
        loc.push_attribute(("line", location.line.to_string().as_str()));
        writer.write_event(Event::Empty(loc))?;
    }

    write_text_element(writer, "source", &message.source)?;
    if let Some(comment) = &message.comment {
        write_text_element(writer, "comment", comment)?;
    }
    if let Some(extra) = &message.extra_comment {
        write_text_element(writer, "extracomment", extra)?;
    }
    if let Some(note) = &message.translator_comment {
        write_text_element(writer, "translatorcomment", note)?;
    }

    let mut translation = BytesStart::new("translation");
    if let Some(kind) = message.status.type_attr() {
        translation.push_attribute(("type", kind));
    }
    writer.write_event(Event::Start(translation))?;
    if message.numerus_forms.is_empty() {
        writer.write_event(Event::Text(BytesText::new(&message.translation)))?;
    } else {
        for form in &message.numerus_forms {
            write_text_element(writer, "numerusform", form)?;
        }
    }
    writer.write_event(Event::End(BytesEnd::new("translation")))?;

    writer.write_event(Event::End(BytesEnd::new("message")))?;
    Ok(())
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
