use crate::err::{AppliesTo, IoErrorExt};
use crate::handler::Handler;
use hyper::body::Incoming;
use hyper::service::service_fn;
use hyper::Request;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto;
use std::convert::Infallible;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

pub async fn run<H: Handler + 'static>(addr: SocketAddr, handler: H) -> Result<(), io::Error> {
    log::info!("Binding to: {}", addr);
    let listener = TcpListener::bind(addr).await?;
    serve(listener, handler).await
}

pub async fn serve<H: Handler + 'static>(
    mut listener: TcpListener,
    handler: H,
) -> Result<(), io::Error> {
    let handler = Arc::new(handler);

    loop {
        let tcp = accept(&mut listener).await?;
        let io = TokioIo::new(tcp);

        let handler = Arc::clone(&handler);
        tokio::spawn(async move {
            let serve = service_fn(move |req: Request<Incoming>| {
                // only the head is needed, so the body is dropped unread
                let req = req.map(drop);
                let resp = handler.handle(&req);
                async move { Ok::<_, Infallible>(resp) }
            });

            if let Err(e) = auto::Builder::new(TokioExecutor::new())
                .serve_connection(io, serve)
                .await
            {
                log::error!("Error serving connection: {}", e);
            }
        });
    }
}

async fn accept(listener: &mut TcpListener) -> Result<TcpStream, io::Error> {
    loop {
        match listener.accept().await {
            Ok((stream, _addr)) => {
                if let Err(e) = stream.set_nodelay(true) {
                    log::debug!("Failed to set nodelay, serving anyway: {}", e);
                }
                return Ok(stream);
            }
            Err(e) => match e.applies_to() {
                AppliesTo::Connection => log::debug!("Aborted connection dropped: {}", e),
                AppliesTo::Listener => return Err(e),
            },
        }
    }
}
