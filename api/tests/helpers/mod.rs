pub mod app;

pub use app::{TEST_RNG_SEED, TestApp, json_body, make_test_app, send, send_json};
