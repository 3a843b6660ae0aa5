pub mod tokenizer;

use std::collections::HashMap;
use std::io::BufRead;

use crate::analysis::tokenizer::RawTokens;
use crate::core::types::{DataType, SortingType, Token};
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::sort::comparator::{cached_count, make_token_order_comparator};
use crate::sort::merge_sort;

/// Tokens of one run, in input order, plus how often each distinct one
/// occurred. Read-only once ingestion has finished.
#[derive(Debug, Clone)]
pub struct Analysis {
    data_type: DataType,
    occurrences: Vec<Token>,
    frequencies: HashMap<Token, usize>,
    skipped: Vec<String>,
}

impl Analysis {
    fn empty(data_type: DataType) -> Self {
        Self {
            data_type,
            occurrences: Vec::new(),
            frequencies: HashMap::new(),
            skipped: Vec::new(),
        }
    }

    /// Reads `source` to exhaustion.
    ///
    /// Reads that do not parse as the requested type (only possible for
    /// numbers) are warned about and skipped. I/O errors abort ingestion.
    pub fn ingest<R: BufRead>(source: R, data_type: DataType, logger: &Logger) -> Result<Self> {
        let mut analysis = Self::empty(data_type);
        for raw in RawTokens::new(source, data_type) {
            let raw = raw?;
            match Token::parse(data_type, &raw) {
                Ok(token) => analysis.record(token),
                Err(bad) => {
                    logger.warn(
                        format!("\"{bad}\" is not a long. It will be skipped."),
                        LogTarget::ConsoleAndFile,
                    );
                    analysis.skipped.push(bad);
                }
            }
        }
        Ok(analysis)
    }

    fn record(&mut self, token: Token) {
        *self.frequencies.entry(token.clone()).or_insert(0) += 1;
        self.occurrences.push(token);
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Number of tokens ingested, duplicates included.
    pub fn size(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    pub fn count(&self, token: &Token) -> usize {
        cached_count(&self.frequencies, token)
    }

    pub fn occurrences(&self) -> &[Token] {
        &self.occurrences
    }

    pub fn frequencies(&self) -> &HashMap<Token, usize> {
        &self.frequencies
    }

    /// Raw reads rejected during ingestion, in input order.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// `Natural` sorts every occurrence; `ByCount` sorts the distinct tokens.
    pub fn sort(&self, mode: SortingType) -> Vec<Token> {
        let comparator = make_token_order_comparator(mode, &self.frequencies);
        let compare = |a: &Token, b: &Token| comparator.compare(a, b);
        match mode {
            SortingType::Natural => merge_sort(&self.occurrences, &compare),
            SortingType::ByCount => {
                let distinct: Vec<Token> = self.frequencies.keys().cloned().collect();
                merge_sort(&distinct, &compare)
            }
        }
    }
}
