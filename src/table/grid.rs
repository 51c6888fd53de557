//! Grid table orchestrator

use crate::column::Resolver;
use crate::config::GridConfig;
use crate::errors::GridResult;
use crate::filter::FilterBuilder;
use crate::observe::Logger;
use crate::paginate::{page_index, strategy_for, PaginationStrategy};
use crate::request::SearchRequest;
use crate::response::GridResponse;
use crate::sort::SortBuilder;
use crate::source::DataSource;

/// One grid handling instance.
///
/// Holds the only long-lived shared state: the declared column descriptor
/// lists and the pagination strategy, both set at construction and never
/// mutated. Each request builds its own resolver and predicate objects, so
/// instances are safe to reuse across requests.
pub struct GridTable<'s, S: DataSource> {
    source: &'s S,
    config: GridConfig,
    searchable: Vec<String>,
    sortable: Vec<String>,
    strategy: Box<dyn PaginationStrategy>,
}

impl<'s, S: DataSource> GridTable<'s, S> {
    /// Creates a handling instance over a source with the declared
    /// searchable and sortable column descriptors.
    pub fn new(
        source: &'s S,
        config: GridConfig,
        searchable: Vec<String>,
        sortable: Vec<String>,
    ) -> Self {
        let strategy = strategy_for(config.paginator);
        Self {
            source,
            config,
            searchable,
            sortable,
            strategy,
        }
    }

    /// Runs the pipeline for one request and assembles the reply envelope.
    /// Failures are logged before being returned to the caller.
    pub fn respond(&self, request: &SearchRequest) -> GridResult<GridResponse> {
        match self.run(request) {
            Ok(response) => Ok(response),
            Err(err) => {
                Logger::error(
                    "GRID_FAIL",
                    &[
                        ("draw", &request.draw.to_string()),
                        ("error", &err.to_string()),
                    ],
                );
                Err(err)
            }
        }
    }

    fn run(&self, request: &SearchRequest) -> GridResult<GridResponse> {
        let mut resolver = Resolver::new(self.source);

        let raw = self.source.raw_records()?;
        let records_total = raw.len() as u64;
        let mut records = raw;

        if request.has_sort() {
            let keys = SortBuilder::new(&self.sortable).keys(request, &mut resolver)?;
            if !keys.is_empty() {
                records = self.source.order(records, &keys)?;
            }
        }

        if request.has_search() {
            let mut builder = FilterBuilder::new(
                &mut resolver,
                self.source,
                self.config.adapter,
                &self.searchable,
            );
            if let Some(condition) = builder.combined(request)? {
                records = self.source.filter(records, &condition)?;
            }
        }

        let records_filtered = records.len() as u64;

        if !request.is_unbounded() {
            let page = page_index(request.page_start, request.page_length);
            let per_page = request.page_length.max(0) as usize;
            records = self
                .strategy
                .window(self.source, records, page, per_page)?;
        }

        let data = self.source.rows(&records)?;

        Logger::info(
            "GRID_RESPOND",
            &[
                ("draw", &request.draw.to_string()),
                ("records_total", &records_total.to_string()),
                ("records_filtered", &records_filtered.to_string()),
                ("returned", &data.len().to_string()),
            ],
        );

        Ok(GridResponse::new(
            request.draw,
            records_total,
            records_filtered,
            data,
        ))
    }

    /// Parses a JSON request payload and runs the pipeline.
    pub fn respond_json(&self, json: &str) -> GridResult<GridResponse> {
        let request = SearchRequest::parse(json)?;
        self.respond(&request)
    }
}
