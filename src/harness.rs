//! C harness rendering
//!
//! The harness includes the generated header, allocates one arena and, for
//! every message variant, parses a fixed buffer and serializes the result.
//! Nothing the program does at runtime matters; it exists so the linker
//! keeps the parse/serialize code of each referenced type.

use std::io::{self, Write};

use log::{debug, trace};

use crate::config::HarnessConfig;
use crate::error::GenResult;
use crate::message::MessageSpec;

pub struct HarnessGenerator<'a> {
    include: &'a str,
    spec: &'a MessageSpec,
    config: &'a HarnessConfig,
}

impl<'a> HarnessGenerator<'a> {
    pub fn new(include: &'a str, spec: &'a MessageSpec, config: &'a HarnessConfig) -> Self {
        Self { include, spec, config }
    }

    /// Render the complete program text into memory.
    pub fn render(&self) -> GenResult<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Stream the program into `w` one block at a time, e.g. stdout or a
    /// file. Memory use does not grow with the variant count.
    pub fn write_to<W: Write>(&self, mut w: W) -> GenResult<()> {
        debug!(
            "Rendering harness for {} ({} variant(s)) including {}",
            self.spec.base,
            self.spec.variant_count(),
            self.include
        );
        self.write_preamble(&mut w)?;
        for name in self.spec.variants() {
            trace!("Emitting block for {}", name);
            self.write_block(&mut w, &name)?;
        }
        self.write_epilogue(&mut w)?;
        w.flush()?;
        Ok(())
    }

    fn write_preamble<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let HarnessConfig { arena_type, arena_new, buffer_len } = self.config;
        write!(
            w,
            "\n#include \"{}\"\n\nchar buf[{}];\n\nint main() {{\n  {} *arena = {}();\n  size_t size;\n\n",
            self.include, buffer_len, arena_type, arena_new
        )
    }

    fn write_block<W: Write>(&self, w: &mut W, name: &str) -> io::Result<()> {
        write!(
            w,
            "\n  {{\n    {name} *proto = {name}_parse(buf, {len}, arena);\n    {name}_serialize(proto, arena, &size);\n  }}\n  \n",
            name = name,
            len = self.config.buffer_len
        )
    }

    fn write_epilogue<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(b"\n  return 0;\n}\n")
    }
}

/// Render a harness with the given settings.
pub fn render(include: &str, spec: &MessageSpec, config: &HarnessConfig) -> GenResult<String> {
    HarnessGenerator::new(include, spec, config).render()
}
