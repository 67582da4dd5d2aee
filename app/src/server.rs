//! Server-side rendering for Spin/WASI.
//!
//! The page has no server functions: every request renders the shell and
//! the router picks the deals page or the 404.

use deals_observability::StructuredLogger;
use leptos::config::{get_configuration, LeptosOptions};
use leptos::task::Executor;
use leptos_wasi::executor::Mode;
use leptos_wasi::handler::HandlerError;
use leptos_wasi::prelude::{Handler, IncomingRequest, ResponseOutparam, WasiExecutor};
use wasi::exports::http::incoming_handler::Guest;
use wasi::http::proxy::export;
use wasi::http::types::{Fields, OutgoingResponse};

use crate::app::{shell, App};
use crate::state::page_logger;

struct DealsPageServer;

impl Guest for DealsPageServer {
    fn handle(request: IncomingRequest, response_out: ResponseOutparam) {
        let logger = page_logger().with_view("ssr");

        let executor = WasiExecutor::new(Mode::Stalled);
        if let Err(e) = Executor::init_local_custom_executor(executor.clone()) {
            logger
                .warn_builder("executor init failed")
                .field("error", format!("{e:?}"))
                .emit();
            return;
        }

        let options = match get_configuration(None) {
            Ok(conf) => conf.leptos_options,
            Err(e) => {
                logger
                    .warn_builder("leptos configuration unavailable")
                    .field("error", format!("{e:?}"))
                    .emit();
                respond_with_status(response_out, 500);
                return;
            }
        };

        executor.run_until(async move {
            if let Err(e) = render(request, response_out, options, &logger).await {
                logger
                    .warn_builder("render failed")
                    .field("error", format!("{e:?}"))
                    .emit();
            }
        })
    }
}

async fn render(
    request: IncomingRequest,
    response_out: ResponseOutparam,
    options: LeptosOptions,
    logger: &StructuredLogger,
) -> Result<(), HandlerError> {
    let path = request.path_with_query().unwrap_or_default();

    Handler::build(request, response_out)?
        .generate_routes(App)
        .handle_with_context(move || shell(options.clone()), || {})
        .await?;

    logger.debug_builder("rendered").field("path", path).emit();
    Ok(())
}

/// Answer with an empty body and `status`.
fn respond_with_status(response_out: ResponseOutparam, status: u16) {
    let response = OutgoingResponse::new(Fields::new());
    // Only fails for codes outside 100..=999.
    let _ = response.set_status_code(status);
    ResponseOutparam::set(response_out, Ok(response));
}

export!(DealsPageServer with_types_in wasi);
