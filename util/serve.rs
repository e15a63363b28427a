use std::{convert::Infallible, future::Future, sync::Arc};
use vigil_deps::{http, hyper};

/// Serve `handler` on `listener` until the future is dropped. The listener is bound by the caller so the caller can choose the port, or bind port zero and read the assigned port back before serving.
pub async fn serve<C, H, F>(
	listener: std::net::TcpListener,
	context: Arc<C>,
	handler: H,
) -> hyper::Result<()>
where
	C: Send + Sync + 'static,
	H: Fn(Arc<C>, http::Request<hyper::Body>) -> F + Send + Sync + 'static,
	F: Future<Output = http::Response<hyper::Body>> + Send + 'static,
{
	let handler = Arc::new(handler);
	let service = hyper::service::make_service_fn(|_| {
		let handler = handler.clone();
		let context = context.clone();
		async move {
			Ok::<_, Infallible>(hyper::service::service_fn(move |request| {
				let handler = handler.clone();
				let context = context.clone();
				async move { Ok::<_, Infallible>(handler(context, request).await) }
			}))
		}
	});
	hyper::Server::from_tcp(listener)?.serve(service).await?;
	Ok(())
}
