pub mod configured;
pub mod document;
pub mod exact;
pub mod table;

use crate::handler::Hello;
use document::PathUrlPair;
use exact::ExactMatch;
use table::Table;

/// Configured redirects, then the built-in ones, then the default greeting.
pub type Chain = ExactMatch<ExactMatch<Hello>>;

pub fn builtin_table() -> Table {
    [
        (
            "/urlshort-godoc",
            "https://godoc.org/github.com/gophercises/urlshort",
        ),
        ("/yaml-godoc", "https://godoc.org/gopkg.in/yaml.v2"),
    ]
    .into_iter()
    .collect()
}

pub fn build_chain(configured: impl IntoIterator<Item = PathUrlPair>) -> Chain {
    let builtin = ExactMatch::new(builtin_table(), Hello);
    configured::from_pairs(configured, builtin)
}
