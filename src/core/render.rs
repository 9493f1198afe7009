//! Block rendering
//!
//! Every included file becomes one block:
//!
//! ```text
//! \n
//! ==================================================\n
//! File: <relative path>\n
//! ==================================================\n
//! \n
//! <contents>\n
//! ```

use std::io::{self, Write};

/// 50 '=' characters
const RULE: &str = "==================================================";

/// Write the header that opens a block
pub fn write_header<W: Write>(writer: &mut W, relative: &str) -> io::Result<()> {
    write!(writer, "\n{RULE}\nFile: {relative}\n{RULE}\n\n")
}

/// Write a complete block for one file
pub fn write_block<W: Write>(writer: &mut W, relative: &str, contents: &str) -> io::Result<()> {
    write_header(writer, relative)?;
    writer.write_all(contents.as_bytes())?;
    writer.write_all(b"\n")
}

/// Render a block to a string
#[cfg(test)]
pub fn render_block(relative: &str, contents: &str) -> String {
    let mut buf = Vec::new();
    write_block(&mut buf, relative, contents).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("block is built from UTF-8 parts")
}
