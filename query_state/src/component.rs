//! Query components
//!
//! A component is a named, optional facet of a query that compiles
//! independently into part of the outgoing parameter set.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Wheres,
    Limit,
    Offset,
    Page,
    Orders,
    Ids,
    Columns,
    Include,
    SearchText,
    AggregationParameters,
    RawQuery,
}

impl Component {
    /// Evaluation order of the grammar pipeline. `RawQuery` must stay last so
    /// its keys override everything derived before it.
    pub const ORDERED: [Component; 11] = [
        Component::Wheres,
        Component::Limit,
        Component::Offset,
        Component::Page,
        Component::Orders,
        Component::Ids,
        Component::Columns,
        Component::Include,
        Component::SearchText,
        Component::AggregationParameters,
        Component::RawQuery,
    ];

    /// Name of the component as it appears in untyped query descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Wheres => "wheres",
            Component::Limit => "limit",
            Component::Offset => "offset",
            Component::Page => "page",
            Component::Orders => "orders",
            Component::Ids => "ids",
            Component::Columns => "columns",
            Component::Include => "include",
            Component::SearchText => "searchText",
            Component::AggregationParameters => "aggregationParameters",
            Component::RawQuery => "rawQuery",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ORDERED.iter().copied().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
