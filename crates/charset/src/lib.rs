//! Character classification for sprite font generation.
//!
//! Every input character is expanded into one or more [`CharacterSpec`]s:
//! alphabetic characters produce a lowercase and an uppercase variant, everything
//! else produces a single symbol variant. Each spec knows the filesystem-safe name
//! of the image generated for it.
//!
//! # Example
//!
//! ```
//! use glyphsheet_charset::{CharacterSpec, Role};
//!
//! let specs = CharacterSpec::derive_all("a!");
//! assert_eq!(specs.len(), 3);
//! assert_eq!(specs[1].role, Role::Uppercase);
//! assert_eq!(specs[2].file_stem(), "custom_font_S_exclamation");
//! ```

use std::fmt;

/// Prefix shared by every generated image name.
pub const IMAGE_PREFIX: &str = "custom_font_";

/// Symbolic names for characters that cannot appear directly in a filename.
pub const SYMBOL_NAMES: &[(char, &str)] = &[
    ('!', "exclamation"),
    ('@', "at"),
    ('#', "hash"),
    ('$', "dollar"),
    ('%', "percent"),
    ('^', "caret"),
    ('&', "ampersand"),
    ('*', "asterisk"),
    ('(', "lparen"),
    (')', "rparen"),
    ('-', "hyphen"),
    ('_', "underscore"),
    ('+', "plus"),
    ('=', "equals"),
    ('[', "lbracket"),
    (']', "rbracket"),
    ('{', "lcurly"),
    ('}', "rcurly"),
    ('|', "pipe"),
    ('\\', "backslash"),
    (';', "semicolon"),
    (':', "colon"),
    ('\'', "quote"),
    ('"', "dblquote"),
    (',', "comma"),
    ('.', "period"),
    ('/', "slash"),
    ('?', "question"),
    ('<', "lt"),
    ('>', "gt"),
    ('~', "tilde"),
    ('`', "backtick"),
    (' ', "space"),
];

/// Lowercase letters whose glyphs extend below the baseline.
pub const DESCENDERS: &[char] = &['g', 'j', 'p', 'q', 'y'];

/// The case role a generated image plays in the sprite font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Uppercase,
    Lowercase,
    Symbol,
}

impl Role {
    /// One-letter tag used in image names and mapping references.
    pub fn tag(self) -> &'static str {
        match self {
            Role::Uppercase => "U",
            Role::Lowercase => "L",
            Role::Symbol => "S",
        }
    }

    /// Filename prefix, e.g. `"L_"`.
    pub fn prefix(self) -> String {
        format!("{}_", self.tag())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Uppercase => "uppercase",
            Role::Lowercase => "lowercase",
            Role::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// Sizing category of a character, which drives its target glyph height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Uppercase alphabetic characters.
    UppercaseLetter,
    /// Lowercase letters with descenders (`g j p q y`).
    Descender,
    /// Lowercase letters, digits, and symbols.
    Other,
}

impl Category {
    pub fn of(ch: char) -> Self {
        if ch.is_uppercase() && ch.is_alphabetic() {
            Category::UppercaseLetter
        } else if DESCENDERS.contains(&ch) {
            Category::Descender
        } else {
            Category::Other
        }
    }
}

/// A single character paired with the role it is rendered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterSpec {
    pub ch: char,
    pub role: Role,
}

impl CharacterSpec {
    /// Expand one input character into the variants generated for it.
    ///
    /// Alphabetic characters yield the lowercase variant followed by the
    /// uppercase variant; anything else yields one symbol variant.
    pub fn derive(ch: char) -> Vec<Self> {
        if ch.is_alphabetic() {
            vec![
                Self { ch: to_lower(ch), role: Role::Lowercase },
                Self { ch: to_upper(ch), role: Role::Uppercase },
            ]
        } else {
            vec![Self { ch, role: Role::Symbol }]
        }
    }

    /// Expand a whole character set, preserving input order.
    pub fn derive_all(characters: &str) -> Vec<Self> {
        characters.chars().flat_map(Self::derive).collect()
    }

    pub fn is_space(&self) -> bool {
        self.ch == ' '
    }

    pub fn category(&self) -> Category {
        Category::of(self.ch)
    }

    /// Sanitized symbolic name of the character.
    pub fn symbolic_name(&self) -> String {
        symbolic_name(self.ch)
    }

    /// Image name without extension, e.g. `custom_font_U_a`.
    ///
    /// Space is always named as a symbol, whatever role it was derived under.
    pub fn file_stem(&self) -> String {
        if self.is_space() {
            return format!("{IMAGE_PREFIX}S_space");
        }
        sanitize(&format!("{IMAGE_PREFIX}{}{}", self.role.prefix(), symbol_name_or_raw(self.ch)))
    }
}

/// Look up the table name of a character, if it has one.
pub fn symbol_name(ch: char) -> Option<&'static str> {
    SYMBOL_NAMES.iter().find(|(c, _)| *c == ch).map(|(_, name)| *name)
}

/// Table name of a character, or the character itself.
fn symbol_name_or_raw(ch: char) -> String {
    symbol_name(ch).map_or_else(|| ch.to_string(), str::to_string)
}

/// Filesystem-safe symbolic name of a character.
pub fn symbolic_name(ch: char) -> String {
    sanitize(&symbol_name_or_raw(ch))
}

/// Replace every non-alphanumeric character with `_`.
pub fn sanitize(name: &str) -> String {
    name.chars().map(|c| if c.is_alphanumeric() { c } else { '_' }).collect()
}

/// Non-alphanumeric characters in `characters` that have no table name.
///
/// Images for these fall back to a name derived from the raw character, which
/// may collide with other fallbacks after sanitizing.
pub fn missing_symbol_names(characters: &str) -> Vec<char> {
    let mut missing = Vec::new();
    for c in characters.chars() {
        if !c.is_alphanumeric() && symbol_name(c).is_none() && !missing.contains(&c) {
            missing.push(c);
        }
    }
    missing
}

// Multi-character case mappings (e.g. `ß` -> `SS`) keep the original character.
fn to_lower(ch: char) -> char {
    single(ch.to_lowercase()).unwrap_or(ch)
}

fn to_upper(ch: char) -> char {
    single(ch.to_uppercase()).unwrap_or(ch)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}
