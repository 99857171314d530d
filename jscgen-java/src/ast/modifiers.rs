//! Java access and qualifier flags.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Modifier set of a class, field, method or constructor.
    ///
    /// Bit values follow the JVM access flags, so a mask read from a class
    /// file or from `java.lang.reflect.Modifier` can be used unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Modifiers: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const NATIVE = 0x0100;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
    }
}

/// Keyword order used when printing, the same order `Modifier.toString` uses.
const CANONICAL_ORDER: [(Modifiers, &str); 12] = [
    (Modifiers::PUBLIC, "public"),
    (Modifiers::PROTECTED, "protected"),
    (Modifiers::PRIVATE, "private"),
    (Modifiers::ABSTRACT, "abstract"),
    (Modifiers::STATIC, "static"),
    (Modifiers::FINAL, "final"),
    (Modifiers::TRANSIENT, "transient"),
    (Modifiers::VOLATILE, "volatile"),
    (Modifiers::SYNCHRONIZED, "synchronized"),
    (Modifiers::NATIVE, "native"),
    (Modifiers::STRICT, "strictfp"),
    (Modifiers::INTERFACE, "interface"),
];

impl Modifiers {
    /// Keywords of the set flags in canonical order.
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        CANONICAL_ORDER
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| *keyword)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, keyword) in self.keywords().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(keyword)?;
        }
        Ok(())
    }
}
