mod common;

use common::{
    REQUEST_URL, anonymous, default_dispatcher, dispatcher_with, domain, env, env_for, not_found,
    open_group, wrong_group,
};
use pagewarden::{
    Action, NotFoundDelegation, PageNotFoundHook, Redirect, StaticConfigProvider, raw_url_encode,
};

#[test]
fn test_absent_fe_group_always_delegates() {
    let dispatcher = default_dispatcher();
    for text in ["", "The requested page does not exist!", "Page is hidden"] {
        let mut failure = not_found();
        failure.reason_text = text.to_string();
        match dispatcher.decide(&failure, &env()) {
            Action::Delegate(delegation) => assert_eq!(delegation.reason_text, text),
            Action::Redirect(redirect) => panic!("unexpected redirect to {}", redirect.location),
        }
    }
}

#[test]
fn test_wrong_group_redirects_without_param() {
    let dispatcher = default_dispatcher();
    assert_eq!(
        dispatcher.decide(&wrong_group(), &env()),
        Action::Redirect(Redirect {
            location: "https://example.org/login".into(),
            with_redirect_param: false,
        })
    );
}

#[test]
fn test_zero_any_user_entry_delegates() {
    let dispatcher = default_dispatcher();
    assert!(matches!(
        dispatcher.decide(&open_group(), &env()),
        Action::Delegate(_)
    ));
}

#[test]
fn test_anonymous_redirects_with_param() {
    let dispatcher = default_dispatcher();
    let Action::Redirect(redirect) = dispatcher.decide(&anonymous(), &env()) else {
        panic!("expected redirect");
    };
    assert!(redirect.with_redirect_param);
    assert!(
        redirect
            .location
            .ends_with("?redirect_url=https%3A%2F%2Fexample.org%2Fsecret")
    );
    assert_eq!(
        redirect.location,
        format!("https://example.org/login?redirect_url={}", raw_url_encode(REQUEST_URL))
    );
}

#[test]
fn test_existing_query_uses_ampersand() {
    let dispatcher = dispatcher_with(
        StaticConfigProvider::new().with_domain("_DEFAULT", domain("/login?x=1", "/login?x=1")),
    );
    let Action::Redirect(redirect) = dispatcher.decide(&anonymous(), &env()) else {
        panic!("expected redirect");
    };
    assert_eq!(
        redirect.location,
        "https://example.org/login?x=1&redirect_url=https%3A%2F%2Fexample.org%2Fsecret"
    );
}

#[test]
fn test_host_entry_wins_over_default() {
    let dispatcher = dispatcher_with(
        StaticConfigProvider::new()
            .with_domain("_DEFAULT", domain("/login", "/denied"))
            .with_domain(
                "intranet.example.org",
                domain("https://sso.example.org/", "https://sso.example.org/denied"),
            ),
    );

    let intranet = env_for("intranet.example.org");
    let Action::Redirect(redirect) = dispatcher.decide(&wrong_group(), &intranet) else {
        panic!("expected redirect");
    };
    assert_eq!(redirect.location, "https://sso.example.org/denied");

    let www = env_for("www.example.org");
    let Action::Redirect(redirect) = dispatcher.decide(&wrong_group(), &www) else {
        panic!("expected redirect");
    };
    assert_eq!(redirect.location, "https://example.org/denied");
}

#[test]
fn test_delegation_carries_strategy_and_status_header() {
    let dispatcher = default_dispatcher();
    assert_eq!(
        dispatcher.decide(&not_found(), &env()),
        Action::Delegate(NotFoundDelegation {
            strategy: "READFILE:fileadmin/404.html".into(),
            status_header: "HTTP/1.0 404 Not Found".into(),
            reason_text: "The requested page does not exist!".into(),
        })
    );
}

#[test]
fn test_missing_configuration_yields_empty_target() {
    let dispatcher = dispatcher_with(StaticConfigProvider::new());

    assert_eq!(
        dispatcher.decide(&wrong_group(), &env()),
        Action::Redirect(Redirect {
            location: String::new(),
            with_redirect_param: false,
        })
    );

    let Action::Redirect(redirect) = dispatcher.decide(&anonymous(), &env()) else {
        panic!("expected redirect");
    };
    assert_eq!(
        redirect.location,
        "?redirect_url=https%3A%2F%2Fexample.org%2Fsecret"
    );

    let Action::Delegate(delegation) = dispatcher.decide(&not_found(), &env()) else {
        panic!("expected delegation");
    };
    assert_eq!(delegation.strategy, "");
}
