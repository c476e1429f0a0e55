use rstest::fixture;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub struct Tracing;

#[fixture]
#[once]
pub fn tracing() -> Tracing {
    let _ = std::env::var("RUST_LOG").map_err(|_| std::env::set_var("RUST_LOG", "resource_json=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer().with_test_writer();
    let filter_layer = EnvFilter::from_default_env();

    // Another subscriber may already be installed by the test binary.
    let _ = tracing_subscriber::registry().with(filter_layer).with(fmt_layer).try_init();

    Tracing
}
