use std::path::Path;

use noid_client::SearchIndex;
use noid_config::search::SearchConfig;
use noid_core::{EntryRecord, SearchResult};

use crate::accumulator::Accumulator;
use crate::{HarvestError, export};

/// Walks the index one letter at a time and keeps every distinct entry.
///
/// Letters are fetched sequentially. The first failed letter aborts the whole
/// walk and nothing is exported; there is no checkpointing between letters.
pub struct IndexWalker<I> {
    index: I,
    alphabet: Vec<char>,
    page_size: u32,
    hits: Accumulator<EntryRecord>,
}

impl<I: SearchIndex> IndexWalker<I> {
    pub fn new(index: I, config: &SearchConfig) -> Self {
        Self {
            index,
            alphabet: config.alphabet.clone(),
            page_size: config.size,
            hits: Accumulator::new(|entry: &EntryRecord| entry.noid().to_owned()),
        }
    }

    pub fn hits(&self) -> &Accumulator<EntryRecord> {
        &self.hits
    }

    pub fn number_of_hits(&self) -> usize {
        self.hits.len()
    }

    pub async fn search_letter(&self, letter: char) -> Result<SearchResult, HarvestError> {
        let mut buf = [0u8; 4];
        let result = self.index.search(letter.encode_utf8(&mut buf)).await?;

        let returned = result.len();
        if returned as u64 >= u64::from(self.page_size) {
            tracing::warn!(
                "Letter '{letter}' filled the whole page ({returned} hits), results may be truncated"
            );
        } else if let Some(total) = result.total().filter(|&t| t > returned as u64) {
            tracing::warn!("Letter '{letter}' reports {total} matches but returned {returned}");
        }

        Ok(result)
    }

    /// Merge one letter's hits, returning how many were new
    pub fn fold(&mut self, result: SearchResult) -> usize {
        self.hits.extend(result.into_entries())
    }

    pub async fn fetch_all(&mut self) -> Result<(), HarvestError> {
        for letter in self.alphabet.clone() {
            tracing::info!("Fetching letter: {letter}");
            let result = self.search_letter(letter).await?;
            let returned = result.len();
            let added = self.fold(result);
            tracing::info!(
                "Letter '{letter}': {returned} hits, {added} new, {} total",
                self.number_of_hits()
            );
        }
        Ok(())
    }

    pub fn save_to_tsv(&self, path: &Path) -> Result<usize, HarvestError> {
        tracing::info!(
            "Writing TSV with all {} records to {}",
            self.number_of_hits(),
            path.display()
        );
        export::save_tsv(path, self.hits.values())
    }

    /// Fetch every letter from `index`, then export. Returns the number of rows written.
    pub async fn run(&mut self, path: &Path) -> Result<usize, HarvestError> {
        tracing::info!(
            "Walking index '{}' over {} letters",
            self.index.name(),
            self.alphabet.len()
        );
        self.fetch_all().await?;
        self.save_to_tsv(path)
    }
}
