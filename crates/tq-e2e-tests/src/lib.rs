//! Test-only crate. The end-to-end suites live under `tests/` and drive the
//! `tq-api` router with in-memory and wiremock-backed capabilities.
