//! Indentation configuration for code generation.

/// Indentation unit for one level of block nesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation (Java default).
    pub const JAVA: Self = Self::Spaces(2);

    /// 4-space indentation (AOSP Java style).
    pub const AOSP: Self = Self::Spaces(4);

    /// Tab indentation.
    pub const TAB: Self = Self::Tab;

    /// Write one indent level into `buffer`.
    pub fn write_to(&self, buffer: &mut String) {
        match self {
            Self::Spaces(n) => buffer.extend(std::iter::repeat_n(' ', usize::from(*n))),
            Self::Tab => buffer.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}
