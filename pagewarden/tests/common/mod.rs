#![allow(dead_code)]

use pagewarden::{
    AccessFailureReason, DomainConfiguration, GlobalSettings, NotFoundDispatcher,
    PageAccessFailure, StaticConfigProvider, StaticEnvironment,
};

// ============================================================================
// Fixtures
// ============================================================================

pub const SITE_URL: &str = "https://example.org/";
pub const REQUEST_URL: &str = "https://example.org/secret";

pub fn env() -> StaticEnvironment {
    StaticEnvironment::new("example.org", SITE_URL, REQUEST_URL)
}

pub fn env_for(host: &str) -> StaticEnvironment {
    StaticEnvironment::new(host, SITE_URL, REQUEST_URL)
}

pub fn domain(not_authorized: &str, not_authenticated: &str) -> DomainConfiguration {
    DomainConfiguration {
        page_not_found_handling: "READFILE:fileadmin/404.html".into(),
        page_not_authorized_url: not_authorized.into(),
        page_not_authenticated_not_authorized_url: not_authenticated.into(),
    }
}

pub fn dispatcher_with(provider: StaticConfigProvider) -> NotFoundDispatcher<StaticConfigProvider> {
    NotFoundDispatcher::new(provider, GlobalSettings::default())
}

pub fn default_dispatcher() -> NotFoundDispatcher<StaticConfigProvider> {
    dispatcher_with(StaticConfigProvider::new().with_domain("_DEFAULT", domain("/login", "/login")))
}

// ============================================================================
// Failure Records
// ============================================================================

pub fn not_found() -> PageAccessFailure {
    PageAccessFailure::new(AccessFailureReason::none(), "The requested page does not exist!")
}

pub fn wrong_group() -> PageAccessFailure {
    PageAccessFailure::new(
        AccessFailureReason::with_groups([("14", "2,3")]),
        "Subsection was found and not accessible",
    )
}

pub fn anonymous() -> PageAccessFailure {
    PageAccessFailure::new(
        AccessFailureReason::with_groups([("", 14)]),
        "Subsection was found and not accessible",
    )
}

pub fn open_group() -> PageAccessFailure {
    PageAccessFailure::new(
        AccessFailureReason::with_groups([("", 0)]),
        "Subsection was found and not accessible",
    )
}
