//! Integration tests driving the fake local server lifecycle.

use verdict::{Outcome, Result, catch_unwrap, none, ok, some};

use crate::common::{
    EndpointPayload, FakeLocalServer, Method, Registration, ServerError, init_tracing,
};

#[test]
fn test_start_then_register_chains_on_success() {
    init_tracing();
    let server = FakeLocalServer::default();

    let registration = server
        .start(3000)
        .and_then(|_| server.add_or_update_endpoint(EndpointPayload::plain("users", "[]")));

    assert_eq!(registration, ok(Registration::Created));
    assert!(server.is_running());
    assert_eq!(server.endpoint("users").map(|c| c.status_code), some(200));
}

#[test]
fn test_failed_start_short_circuits_registration() {
    init_tracing();
    let server = FakeLocalServer::with_busy_ports(vec![3000]);

    let registration = server
        .start(3000)
        .and_then(|_| server.add_or_update_endpoint(EndpointPayload::plain("users", "[]")));

    assert_eq!(registration, verdict::err(ServerError::PortInUse { port: 3000 }));
    assert_eq!(server.endpoint("users"), none());
}

#[test]
fn test_second_registration_updates_endpoint() {
    init_tracing();
    let server = FakeLocalServer::default();
    server.start(8080).unwrap();

    let first = server.add_or_update_endpoint(EndpointPayload::plain("orders", "{}"));
    let mut replacement = EndpointPayload::plain("orders", "[1]");
    replacement.config.method = Method::Post;
    let second = server.add_or_update_endpoint(replacement);

    assert_eq!(first, ok(Registration::Created));
    assert_eq!(second, ok(Registration::Updated));
    assert_eq!(server.endpoint("orders").map(|c| c.method), some(Method::Post));
}

#[test]
fn test_running_state_from_lifecycle_results() {
    init_tracing();
    let server = FakeLocalServer::default();

    let started = server.start(3000).is_ok();
    let stopped = server.stop().is_ok();
    let stopped_twice = server.stop();

    assert!(started);
    assert!(stopped);
    assert!(stopped_twice.is_err_and(|e| e == ServerError::NotRunning));
}

#[test]
fn test_result_converted_to_option_drops_error_detail() {
    init_tracing();
    let server = FakeLocalServer::with_busy_ports(vec![80]);

    let port = server.start(80).ok();
    assert_eq!(port, none());

    let port = server.start(3000).ok();
    assert_eq!(port, some(3000));
}

#[test]
fn test_unwrap_on_server_error_renders_structured_message() {
    init_tracing();
    let server = FakeLocalServer::default();

    let outcome = server.add_or_update_endpoint(EndpointPayload::plain("users", "[]"));
    let caught = catch_unwrap(|| outcome.clone().unwrap()).unwrap_err();

    assert_eq!(caught.message(), r#"{"kind":"not_running"}"#);
    assert_eq!(outcome.expect_err("server is stopped"), ServerError::NotRunning);
}

#[test]
fn test_invalid_endpoint_error_carries_name() {
    init_tracing();
    let server = FakeLocalServer::default();
    server.start(3000).expect("port 3000 is free");

    let message = server
        .add_or_update_endpoint(EndpointPayload::plain("bad name", ""))
        .try_unwrap()
        .unwrap_err()
        .into_message();

    assert_eq!(message, r#"{"kind":"invalid_endpoint","endpoint":"bad name"}"#);
}

#[test]
fn test_generic_status_reporting_over_outcomes() {
    fn status<O: Outcome<u16>>(outcome: O) -> String {
        outcome
            .map(|port| format!("listening on {port}"))
            .unwrap_or_else(|_| "stopped".to_string())
    }

    init_tracing();
    let server = FakeLocalServer::with_busy_ports(vec![443]);

    assert_eq!(status(server.start(443)), "stopped");
    assert_eq!(status(server.start(3000)), "listening on 3000");
    assert_eq!(status(verdict::Option::<u16>::None), "stopped");

    let chained: Result<u16, ServerError> = server.stop().map(|()| 3000);
    assert_eq!(status(chained), "listening on 3000");
}
