//! Canonicalization: re-parse the assembled lines and emit the final
//! title-cased address string.

use addr_model::{AddressComponents, Result};
use tracing::debug;

use crate::lines::{address_line_1, address_line_2};
use crate::tagger::{AddressTagger, LexiconTagger};

/// Join line 1 and line 2 into the tagger input.
pub fn canonical_input(line_1: &str, line_2: &str) -> String {
    if line_2.is_empty() {
        line_1.to_string()
    } else {
        format!("{line_1}, {line_2}")
    }
}

/// Title-case with per-character capitalization restarts: an alphabetic
/// character is upper-cased whenever the previous character was not
/// alphabetic, and lower-cased otherwise. "SMOKY" becomes "Smoky",
/// "E101" stays "E101", "RD," becomes "Rd,".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}

/// Produces the canonical address string from assembled lines.
///
/// The tagger's emitted pair order is authoritative: the canonical string
/// is the single-space join of each pair's text, independently title-cased,
/// in exactly the order the tagger returned them.
#[derive(Debug, Clone, Default)]
pub struct Canonicalizer<T: AddressTagger = LexiconTagger> {
    tagger: T,
}

impl Canonicalizer<LexiconTagger> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: AddressTagger> Canonicalizer<T> {
    pub fn with_tagger(tagger: T) -> Self {
        Self { tagger }
    }

    /// Canonicalize assembled address text. Batch-mode entry point: tagging
    /// failures (notably ambiguous parses) propagate to the caller.
    pub fn canonicalize(&self, text: &str) -> Result<String> {
        let pairs = self.tagger.tag(text)?;
        Ok(pairs
            .iter()
            .map(|(_, token_text)| title_case(token_text))
            .collect::<Vec<_>>()
            .join(" "))
    }

    /// Single-record entry point: every tagging failure is caught and the
    /// naive title-cased copy of the uncanonicalized text is returned.
    pub fn canonicalize_lossy(&self, text: &str) -> String {
        match self.canonicalize(text) {
            Ok(canonical) => canonical,
            Err(error) => {
                debug!(%error, "tagging failed, falling back to naive title-casing");
                title_case(text)
            }
        }
    }

    /// Build both lines from validated components and canonicalize them.
    pub fn canonical_address(&self, components: &AddressComponents) -> Result<String> {
        let text = canonical_input(&address_line_1(components), &address_line_2(components));
        self.canonicalize(&text)
    }
}
