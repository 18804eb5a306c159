use greeter_lib::shared::telemetry;

// Kept alone in its own test binary: the subscriber is process-global.
#[test]
fn init_installs_global_subscriber_once() {
    telemetry::init();
    assert!(tracing::dispatcher::has_been_set());

    let second = std::panic::catch_unwind(telemetry::init);
    assert!(second.is_err());
}
