//! Grammar trait and the base grammar
//!
//! Every component has a rule method with a default implementation. A grammar
//! for a specific backend overrides only the rules it needs to change and
//! inherits the pipeline from [`Grammar::compile`].

use crate::errors::GrammarError;
use crate::rules;
use crate::CompiledParameters;
use query_state::{Component, Identifier, JsonMap, QueryState};
use serde_json::Value;

pub trait Grammar {
    /// Compile every present component of `query` into API parameters.
    ///
    /// Components are evaluated in [`Component::ORDERED`] order and merged with
    /// last-write-wins. Either every component compiles or the first failure is
    /// returned; there is no partial result.
    fn compile(&self, query: &QueryState) -> Result<CompiledParameters, GrammarError> {
        let mut parameters = CompiledParameters::new();

        for component in Component::ORDERED {
            if !query.has(component) {
                continue;
            }

            let partial = self.compile_component(query, component)?;
            trace_log!("Compiled component {} into {} parameter(s)", component, partial.len());
            parameters.extend(partial);
        }

        debug_log!("Compiled query into {} parameter(s)", parameters.len());
        Ok(parameters)
    }

    /// Compile a query described as untyped JSON
    fn compile_value(&self, query: Value) -> Result<CompiledParameters, GrammarError> {
        let state = QueryState::from_value(query)?;
        self.compile(&state)
    }

    /// Dispatch one component to its rule. Absent components compile to nothing.
    fn compile_component(
        &self,
        query: &QueryState,
        component: Component,
    ) -> Result<CompiledParameters, GrammarError> {
        match component {
            Component::Wheres => match &query.wheres {
                Some(wheres) => self.compile_wheres(query, wheres),
                None => Ok(CompiledParameters::new()),
            },
            Component::Limit => match query.limit {
                Some(limit) => self.compile_limit(query, limit),
                None => Ok(CompiledParameters::new()),
            },
            Component::Offset => match query.offset {
                Some(offset) => self.compile_offset(query, offset),
                None => Ok(CompiledParameters::new()),
            },
            Component::Page => match query.page {
                Some(page) => self.compile_page(query, page),
                None => Ok(CompiledParameters::new()),
            },
            Component::Orders => match &query.orders {
                Some(orders) => self.compile_orders(query, orders),
                None => Ok(CompiledParameters::new()),
            },
            Component::Ids => match &query.ids {
                Some(ids) => self.compile_ids(query, ids),
                None => Ok(CompiledParameters::new()),
            },
            Component::Columns => match &query.columns {
                Some(columns) => self.compile_columns(query, columns),
                None => Ok(CompiledParameters::new()),
            },
            Component::Include => match &query.include {
                Some(include) => self.compile_include(query, include),
                None => Ok(CompiledParameters::new()),
            },
            Component::SearchText => match &query.search_text {
                Some(text) => self.compile_search_text(query, text),
                None => Ok(CompiledParameters::new()),
            },
            Component::AggregationParameters => match &query.aggregation_parameters {
                Some(aggregations) => self.compile_aggregation_parameters(query, aggregations),
                None => Ok(CompiledParameters::new()),
            },
            Component::RawQuery => match &query.raw_query {
                Some(raw) => self.compile_raw_query(query, raw),
                None => Ok(CompiledParameters::new()),
            },
        }
    }

    /// Filters have no parameter translation in the base grammar, whatever
    /// their shape. Callers that need one pass it through `rawQuery` or
    /// override this rule.
    fn compile_wheres(
        &self,
        _query: &QueryState,
        _wheres: &Value,
    ) -> Result<CompiledParameters, GrammarError> {
        Ok(CompiledParameters::new())
    }

    fn compile_limit(
        &self,
        _query: &QueryState,
        limit: u64,
    ) -> Result<CompiledParameters, GrammarError> {
        Ok(rules::limit(limit))
    }

    fn compile_offset(
        &self,
        _query: &QueryState,
        offset: u64,
    ) -> Result<CompiledParameters, GrammarError> {
        Ok(rules::offset(offset))
    }

    fn compile_page(&self, _query: &QueryState, page: u64) -> Result<CompiledParameters, GrammarError> {
        Ok(rules::page(page))
    }

    fn compile_orders(
        &self,
        _query: &QueryState,
        orders: &Value,
    ) -> Result<CompiledParameters, GrammarError> {
        Ok(rules::orders(orders))
    }

    fn compile_ids(
        &self,
        _query: &QueryState,
        ids: &[Identifier],
    ) -> Result<CompiledParameters, GrammarError> {
        Ok(rules::ids(ids))
    }

    /// Columns become `fields`, the list of attributes the API returns
    fn compile_columns(
        &self,
        _query: &QueryState,
        columns: &[String],
    ) -> Result<CompiledParameters, GrammarError> {
        Ok(rules::columns(columns))
    }

    fn compile_include(
        &self,
        _query: &QueryState,
        include: &[String],
    ) -> Result<CompiledParameters, GrammarError> {
        Ok(rules::include(include))
    }

    fn compile_search_text(
        &self,
        _query: &QueryState,
        text: &str,
    ) -> Result<CompiledParameters, GrammarError> {
        Ok(rules::search_text(text))
    }

    fn compile_aggregation_parameters(
        &self,
        _query: &QueryState,
        aggregations: &JsonMap,
    ) -> Result<CompiledParameters, GrammarError> {
        Ok(rules::aggregation_parameters(aggregations))
    }

    fn compile_raw_query(
        &self,
        _query: &QueryState,
        raw: &JsonMap,
    ) -> Result<CompiledParameters, GrammarError> {
        Ok(rules::raw_query(raw))
    }
}

/// Grammar using every default rule
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseGrammar;

impl BaseGrammar {
    pub fn new() -> Self {
        Self
    }
}

impl Grammar for BaseGrammar {}
