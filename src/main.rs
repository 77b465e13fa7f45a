use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use interviewverse_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware, routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);

    let base_routes = Router::new().route("/health", get(routes::health::health));

    let public_api = Router::new()
        .route(
            "/api/check-interview-limit",
            post(routes::entitlement::check_interview_limit),
        )
        .route(
            "/api/record-interview-usage",
            post(routes::entitlement::record_interview_usage),
        )
        .route(
            "/api/interviews",
            get(routes::interviews::list_interviews).post(routes::interviews::save_interview),
        )
        .route(
            "/api/interviews/:id",
            get(routes::interviews::get_interview),
        )
        .route(
            "/api/applicants",
            post(routes::applicants::submit_application),
        )
        .route("/api/analyze-resume", post(routes::resume::analyze_resume))
        .route("/api/plans", get(routes::plans::list_plans))
        .route("/api/subscription", get(routes::plans::get_subscription))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.public_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let recruiter_api = Router::new()
        .route(
            "/api/jobs",
            get(routes::jobs::list_jobs).post(routes::jobs::create_job),
        )
        .route(
            "/api/jobs/:id",
            get(routes::jobs::get_job)
                .patch(routes::jobs::update_job)
                .delete(routes::jobs::delete_job),
        )
        .route(
            "/api/jobs/:id/applicants",
            get(routes::applicants::list_job_applicants),
        )
        .route(
            "/api/applicants/:id/status",
            post(routes::applicants::update_applicant_status),
        )
        .route(
            "/api/fix-interview-job-ids",
            get(routes::linkage::diagnose_linkage).post(routes::linkage::repair_linkage),
        )
        .route(
            "/api/recruiter/jobs-summary",
            get(routes::recruiter::jobs_summary),
        )
        .route(
            "/api/recruiter/activity-log",
            get(routes::recruiter::activity_log),
        )
        .layer(axum::middleware::from_fn(
            middleware::auth::require_recruiter_or_admin,
        ))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(config.recruiter_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let admin_api = Router::new()
        .route("/api/admin/analytics", get(routes::admin::analytics))
        .route("/api/admin/users", get(routes::admin::list_users))
        .route("/api/admin/usage", get(routes::admin::list_usage))
        .route("/api/admin/reset-usage", post(routes::admin::reset_usage))
        .layer(axum::middleware::from_fn(middleware::auth::require_admin));

    let app = base_routes
        .merge(public_api)
        .merge(recruiter_api)
        .merge(admin_api)
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
