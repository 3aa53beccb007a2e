//! Mapping Vesper pseudo-codes onto eBird taxa.
//!
//! Vesper classifiers emit a few codes that are not species (an empty code
//! for an unclassified tseep or thrush call, `zeep`, `peep`, ...). These map
//! to eBird "sp." groupings. Everything else is a four-letter species code
//! and passes through unchanged.

use crate::constants::SUSPECT_CODES;
use std::collections::BTreeMap;

/// Built-in pseudo-code table.
const PSEUDO_CODES: &[(&str, &str)] = &[
    ("", "passerine sp."),
    ("unkn", "bird sp."),
    ("zeep", "warbler sp. (Parulidae sp.)"),
    ("sparrow", "sparrow sp."),
    ("peep", "peep sp."),
];

/// Static lookup tables handed to the report writers.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    pseudo_codes: BTreeMap<String, String>,
    suspect_codes: Vec<String>,
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self {
            pseudo_codes: PSEUDO_CODES
                .iter()
                .map(|(code, name)| ((*code).to_string(), (*name).to_string()))
                .collect(),
            suspect_codes: SUSPECT_CODES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Taxonomy {
    /// Name a code is reported under: the grouping for pseudo-codes, the
    /// code itself otherwise.
    pub fn report_name(&self, code: &str) -> String {
        self.pseudo_codes
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    /// Whether `code` is usually an operator slip.
    pub fn is_suspect(&self, code: &str) -> bool {
        self.suspect_codes.iter().any(|c| c == code)
    }
}

/// Whether a report name is an eBird "sp." grouping.
pub fn is_grouping(name: &str) -> bool {
    name.contains("sp.")
}

/// Console form of a report name: groupings are capitalized, codes are
/// upper-cased.
pub fn display_name(name: &str) -> String {
    if is_grouping(name) {
        let mut chars = name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    } else {
        name.to_uppercase()
    }
}
