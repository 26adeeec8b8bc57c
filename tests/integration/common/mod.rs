pub mod log_capture;
pub mod test_server;
