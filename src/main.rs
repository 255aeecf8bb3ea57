#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::Context as _;
    use axum::routing::{any, post};
    use axum::Router;
    use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
    use folio::api::{ApiClient, ProjectsHandle, Revalidated};
    use folio::app::*;
    use folio::config::Config;
    use folio::request_meta::record_forwarded_headers;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use opentelemetry_configuration::OtelSdkBuilder;
    use tower::ServiceBuilder;
    use tower_http::compression::CompressionLayer;

    let config = Config::load().context("loading configuration")?;

    let mut otel = OtelSdkBuilder::new()
        .service_name(env!("CARGO_PKG_NAME"))
        .service_version(env!("CARGO_PKG_VERSION"))
        .resource_attribute("deployment.environment.name", config.otel.environment.as_str())
        .resource_attribute("vcs.ref.head.revision", env!("VCS_REF_HEAD_REVISION"))
        .resource_attribute("vcs.ref.head.name", env!("VCS_REF_HEAD_NAME"))
        .resource_attribute("vcs.ref.head.type", "branch")
        .with_standard_env();
    if let Some(endpoint) = &config.otel.endpoint {
        otel = otel.endpoint(endpoint.as_str());
    }
    let _guard = otel
        .build()
        .map_err(|e| anyhow::anyhow!("failed to initialise OpenTelemetry: {e:?}"))?;

    let conf = get_configuration(None).context("loading leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let api_client = ApiClient::from_config(&config.api).context("configuring projects API")?;
    let projects: ProjectsHandle = Arc::new(Revalidated::new(
        api_client,
        Duration::from_secs(config.api.revalidate),
    ));

    let context = {
        let projects = projects.clone();
        move || provide_context(projects.clone())
    };

    let server_fn_context = context.clone();
    let app = Router::new()
        .route(
            "/api/{*fn_name}",
            any(move |request: axum::extract::Request| {
                let context = server_fn_context.clone();
                async move { leptos_axum::handle_server_fns_with_context(context, request).await }
            }),
        )
        .route("/admin/session", post(create_admin_session))
        .leptos_routes_with_context(&leptos_options, routes, context, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(
            ServiceBuilder::new()
                .layer(OtelAxumLayer::default())
                .layer(OtelInResponseLayer)
                .layer(axum::middleware::from_fn(record_forwarded_headers))
                .layer(CompressionLayer::new()),
        )
        .with_state(leptos_options);

    if let Ok(socket_path) = std::env::var("FOLIO_SOCKET") {
        tracing::info!("listening on unix socket {}", &socket_path);
        let listener = tokio::net::UnixListener::bind(&socket_path)
            .with_context(|| format!("binding unix socket {socket_path}"))?;
        axum::serve(listener, app.into_make_service()).await?;
    } else {
        tracing::info!("listening on http://{}", &config.listen);
        let listener = tokio::net::TcpListener::bind(&config.listen)
            .await
            .with_context(|| format!("binding {}", config.listen))?;
        axum::serve(listener, app.into_make_service()).await?;
    }

    Ok(())
}

/// Target of the admin login form. The request body is not read; there is
/// no credential check in this service.
#[cfg(feature = "ssr")]
async fn create_admin_session() -> axum::response::Redirect {
    axum::response::Redirect::to("/admin")
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
