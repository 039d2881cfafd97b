use crate::body::BytesBody;
use crate::handler::{request_target, Handler};
use crate::redirect::table::Table;
use hyper::header::{HeaderValue, LOCATION};
use hyper::{Request, Response, StatusCode};

/// Redirects requests whose target is in its table, and hands everything else to `fallback`.
pub struct ExactMatch<F> {
    table: Table,
    fallback: F,
}

impl<F: Handler> ExactMatch<F> {
    pub fn new(table: Table, fallback: F) -> Self {
        Self { table, fallback }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl<F: Handler> Handler for ExactMatch<F> {
    fn handle(&self, req: &Request<()>) -> Response<BytesBody> {
        let target = request_target(req);
        let url = match self.table.get(&target) {
            Some(url) => url,
            None => {
                log::debug!("{} -> [no match, falling back]", target);
                return self.fallback.handle(req);
            }
        };

        match HeaderValue::from_str(url) {
            Ok(location) => {
                log::info!("{} -> {}", target, url);
                let mut resp = Response::new(BytesBody::empty());
                *resp.status_mut() = StatusCode::PERMANENT_REDIRECT;
                resp.headers_mut().insert(LOCATION, location);
                resp
            }
            Err(e) => {
                log::warn!("{} -> [unsendable location] {:?} : {}", target, url, e);
                let mut resp = Response::new(BytesBody::empty());
                *resp.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                resp
            }
        }
    }
}
