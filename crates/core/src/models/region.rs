use serde::{Deserialize, Serialize};

/// A regional market whose tickers can be offered for selection.
/// Each region knows the shape of its static source table and how raw
/// identifiers are turned into canonical exchange symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// B3 (IBOV composition), semicolon-delimited, "Código" column.
    Brazil,
    /// NASDAQ listings, comma-delimited, "Symbol" column.
    Usa,
    /// Euronext listings, semicolon-delimited, "Symbol" column.
    Europe,
}

impl Region {
    /// All regions in load order. Catalog merge order follows this,
    /// which fixes the reverse-lookup tie-break (first loaded wins).
    pub const ALL: [Region; 3] = [Region::Brazil, Region::Usa, Region::Europe];

    /// File name of this region's ticker source table.
    pub fn source_file(&self) -> &'static str {
        match self {
            Region::Brazil => "IBOV.csv",
            Region::Usa => "NASDAQ.csv",
            Region::Europe => "EURONEXT.csv",
        }
    }

    /// CSV field delimiter used by this region's source.
    pub fn delimiter(&self) -> u8 {
        match self {
            Region::Brazil | Region::Europe => b';',
            Region::Usa => b',',
        }
    }

    /// Header name of the identifier column in this region's source.
    pub fn symbol_column(&self) -> &'static str {
        match self {
            Region::Brazil => "C\u{f3}digo",
            Region::Usa | Region::Europe => "Symbol",
        }
    }

    /// Flag glyph prefixed to display labels for this region.
    pub fn flag(&self) -> &'static str {
        match self {
            Region::Brazil => "\u{1f1e7}\u{1f1f7}",
            Region::Usa => "\u{1f1fa}\u{1f1f8}",
            Region::Europe => "\u{1f1ea}\u{1f1fa}",
        }
    }

    /// Turn a raw identifier field into a canonical symbol, or `None`
    /// for rows that contribute nothing.
    ///
    /// - Brazil: trimmed identifier + ".SA" exchange suffix
    /// - USA: identifier as-is
    /// - Europe: trimmed identifier, blank rows dropped
    pub fn canonical_symbol(&self, raw: &str) -> Option<String> {
        match self {
            Region::Brazil => {
                let code = raw.trim();
                if code.is_empty() {
                    None
                } else {
                    Some(format!("{code}.SA"))
                }
            }
            Region::Usa => {
                if raw.is_empty() {
                    None
                } else {
                    Some(raw.to_string())
                }
            }
            Region::Europe => {
                let symbol = raw.trim();
                if symbol.is_empty() {
                    None
                } else {
                    Some(symbol.to_string())
                }
            }
        }
    }

    /// Build the user-facing label for a canonical symbol of this region.
    pub fn display_label(&self, symbol: &str) -> String {
        format!("{} {}", self.flag(), symbol)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Brazil => write!(f, "Brazil"),
            Region::Usa => write!(f, "USA"),
            Region::Europe => write!(f, "Europe"),
        }
    }
}
