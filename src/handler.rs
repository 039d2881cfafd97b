use crate::body::BytesBody;
use headers::{ContentType, HeaderMapExt};
use hyper::{Request, Response, Version};
use std::borrow::Cow;

/// Anything that can answer a request: a redirector, or the end of a redirector chain.
///
/// Only the request head is passed down the chain; the body is never read.
pub trait Handler: Send + Sync {
    fn handle(&self, req: &Request<()>) -> Response<BytesBody>;
}

/// The request target as the client sent it: path and query for ordinary requests, or the whole
/// URI for HTTP/1 absolute-form requests.
///
/// HTTP/2 requests always carry scheme and authority pseudo-headers, so their URI is absolute even
/// though the client only asked for `:path`.
pub fn request_target(req: &Request<()>) -> Cow<'_, str> {
    let uri = req.uri();
    match uri.path_and_query() {
        Some(path_and_query)
            if req.version() == Version::HTTP_2
                || (uri.scheme().is_none() && uri.authority().is_none()) =>
        {
            Cow::Borrowed(path_and_query.as_str())
        }
        _ => Cow::Owned(uri.to_string()),
    }
}

/// Terminates a chain: every request gets a plain-text greeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Hello;

impl Hello {
    pub const BODY: &'static str = "Hello, world!\n";
}

impl Handler for Hello {
    fn handle(&self, req: &Request<()>) -> Response<BytesBody> {
        log::info!("{} -> [default]", request_target(req));
        let mut resp = Response::new(BytesBody::from(Self::BODY));
        resp.headers_mut().typed_insert(ContentType::text_utf8());
        resp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::header::CONTENT_TYPE;
    use hyper::StatusCode;

    #[tokio::test]
    async fn hello_answers_any_path() {
        for path in ["/", "/unknown", "/a/b?c=d"] {
            let req = Request::get(path).body(()).unwrap();
            let resp = Hello.handle(&req);
            assert_eq!(resp.status(), StatusCode::OK);
            assert_eq!(
                resp.headers()[CONTENT_TYPE],
                "text/plain; charset=utf-8"
            );
            let body = resp.into_body().collect().await.unwrap().to_bytes();
            assert_eq!(&body[..], b"Hello, world!\n");
        }
    }

    #[test]
    fn origin_form_target_is_path_and_query() {
        let req = Request::get("/x?y").body(()).unwrap();
        assert_eq!(request_target(&req), "/x?y");
    }

    #[test]
    fn http1_absolute_form_target_is_kept_whole() {
        let req = Request::get("http://example.com/x?y")
            .version(Version::HTTP_11)
            .body(())
            .unwrap();
        assert_eq!(request_target(&req), "http://example.com/x?y");
    }

    #[test]
    fn http2_target_is_the_path_pseudo_header() {
        let req = Request::get("https://example.com/x?y")
            .version(Version::HTTP_2)
            .body(())
            .unwrap();
        assert_eq!(request_target(&req), "/x?y");
    }
}
