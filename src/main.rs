use std::sync::Arc;

use nh_client::{
    NhApp,
    config::Config,
    ui::{ALERT_CONTAINER_ID, AlertKind, HeadlessSurface},
    utils::format_number,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 加载配置
    let config = Config::from_env().expect("Failed to load configuration (API_ORIGIN is required)");

    // 命令行下没有真实页面，用内存页面承接提示
    let surface = Arc::new(HeadlessSurface::with_containers([ALERT_CONTAINER_ID]));
    let app = NhApp::from_config(&config, surface)
        .await
        .expect("Failed to create API client");

    tracing::info!("Using API at {}", app.client.origin());

    // 检查服务是否在线
    let health = app.client.health_check().await;
    if !health.success {
        tracing::error!("Cannot reach server: {}", health.message_or_default());
        std::process::exit(1);
    }
    tracing::info!("Server is online");

    // 配置了账号时先登录
    if let Some((username, password)) = config.credentials() {
        let result = app.login(username, password).await;
        if result.success {
            tracing::info!(
                "Logged in as {} ({})",
                app.current_user()
                    .and_then(|user| user.full_name)
                    .unwrap_or_else(|| username.to_string()),
                app.user_initials()
            );
        } else {
            app.presenter
                .show_alert(result.message_or_default(), AlertKind::Error);
            tracing::warn!("Login failed: {}", result.message_or_default());
        }
    } else if app.is_authenticated() {
        tracing::info!("Reusing stored session ({})", app.user_initials());
    }

    let stats = app.client.get_dashboard_stats().await;
    tracing::info!(
        "National Highways: {}, segments: {}, division offices: {}",
        format_number(stats.total_nhs as f64),
        format_number(stats.total_segments as f64),
        format_number(stats.total_offices as f64)
    );

    // 校验接口需要登录
    if app.is_authenticated() {
        let report = app.client.run_validation().await;
        tracing::info!(
            "Validation: {} overlapping segment(s), {} overlapping configuration(s), {} out-of-bounds detail(s)",
            report.overlapping_segments.len(),
            report.overlapping_configs.len(),
            report.out_of_bounds.len()
        );
        for check in &report.failed_checks {
            tracing::warn!("Validation check {:?} could not be run", check);
        }
    }
}
