mod availability_test;
mod event_test;
mod middleware_test;
#[path = "../test_utils.rs"]
mod test_utils;
