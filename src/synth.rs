//! Synthesis pipeline: family → IR → lines.
//!
//! Pure apart from the timestamp carried by [`Provenance`]: the same family and
//! namespace always produce the same lines, save for the header's
//! `generated with ... on ...` line.
use chrono::{Local, NaiveDateTime};

use crate::codegen::Codegen;
use crate::error::Result;
use crate::grammar::{Family, GrammarTable};
use crate::lower::lower_to_ir;

/// Header timestamp layout, e.g. `28/05/25 17:53`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub tool: String,
    pub generated_at: NaiveDateTime,
}

impl Provenance {
    pub fn new(tool: impl Into<String>, generated_at: NaiveDateTime) -> Self {
        Self { tool: tool.into(), generated_at }
    }

    /// This binary, stamped with the local wall-clock time.
    pub fn now() -> Self {
        Self::new(env!("CARGO_PKG_NAME"), Local::now().naive_local())
    }

    pub fn formatted_timestamp(&self) -> String {
        self.generated_at.format(TIMESTAMP_FORMAT).to_string()
    }

    #[cfg(test)]
    pub(crate) fn fixed_for_tests() -> Self {
        use chrono::NaiveDate;
        let at = NaiveDate::from_ymd_opt(2025, 5, 28)
            .and_then(|d| d.and_hms_opt(17, 53, 0))
            .unwrap();
        Self::new("visitgen", at)
    }
}

impl Default for Provenance {
    fn default() -> Self {
        Self::now()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    provenance: Provenance,
}

impl Synthesizer {
    pub fn new(provenance: Provenance) -> Self {
        Self { provenance }
    }

    pub fn synthesize(&self, family: &Family, namespace: &str) -> Vec<String> {
        let unit = lower_to_ir(family, namespace, &self.provenance);
        let mut cg = Codegen::new();
        cg.emit(&unit);
        cg.into_lines()
    }

    /// Look `key` up in `table` and synthesize it. Unknown keys fail before
    /// anything is emitted.
    pub fn synthesize_key(&self, table: &GrammarTable, key: &str, namespace: &str) -> Result<Vec<String>> {
        let family = table.lookup_family(key)?;
        Ok(self.synthesize(family, namespace))
    }
}

/// [`Synthesizer::synthesize`] stamped with the current time.
pub fn synthesize(family: &Family, namespace: &str) -> Vec<String> {
    Synthesizer::default().synthesize(family, namespace)
}

/// [`Synthesizer::synthesize_key`] stamped with the current time.
pub fn synthesize_key(table: &GrammarTable, key: &str, namespace: &str) -> Result<Vec<String>> {
    Synthesizer::default().synthesize_key(table, key, namespace)
}

// ------------------------------- Tests ------------------------------------ //
