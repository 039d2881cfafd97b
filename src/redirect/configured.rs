use crate::handler::Handler;
use crate::redirect::document::PathUrlPair;
use crate::redirect::exact::ExactMatch;

/// Builds a redirector from configured pairs; a path listed twice redirects to its last URL.
pub fn from_pairs<F: Handler>(
    pairs: impl IntoIterator<Item = PathUrlPair>,
    fallback: F,
) -> ExactMatch<F> {
    ExactMatch::new(pairs.into_iter().collect(), fallback)
}
