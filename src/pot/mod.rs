// src/pot/mod.rs
use std::io::{self, Write};

// The fixed block every generated template starts with. The creation date
// is frozen so repeated runs over an unchanged config produce byte-identical
// files.
pub const POT_HEADER: &str = r#"# SOME DESCRIPTIVE TITLE.
# Copyright (C) YEAR THE PACKAGE'S COPYRIGHT HOLDER
# This file is distributed under the same license as the os-installer package.
# FIRST AUTHOR <EMAIL@ADDRESS>, YEAR.
#
msgid ""
msgstr ""
"Project-Id-Version: os-installer-config\n"
"Report-Msgid-Bugs-To: \n"
"POT-Creation-Date: 2023-08-18 03:39+0100\n"
"PO-Revision-Date: YEAR-MO-DA HO:MI+ZONE\n"
"Last-Translator: FULL NAME <EMAIL@ADDRESS>\n"
"Language-Team: LANGUAGE <LL@li.org>\n"
"Language: \n"
"MIME-Version: 1.0\n"
"Content-Type: text/plain; charset=UTF-8\n"
"Content-Transfer-Encoding: 8bit\n"

"#;

/// Writes gettext template entries to an underlying sink.
///
/// Strings are emitted verbatim: a value containing a double quote or a
/// newline corrupts the template. Shipped configs contain neither, and
/// escaping is out of scope.
pub struct PotWriter<W: Write> {
    out: W,
}

impl<W: Write> PotWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Writes the fixed header block. Call once, before any entry.
    pub fn write_header(&mut self) -> io::Result<()> {
        self.out.write_all(POT_HEADER.as_bytes())
    }

    /// Writes one `msgid` line paired with an empty `msgstr`, followed by a
    /// blank separator line.
    pub fn write_entry(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "msgid \"{}\"\nmsgstr \"\"\n\n", text)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Hands back the sink, for tests that inspect what was written.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
