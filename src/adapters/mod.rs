pub mod console;
pub mod mock_registry;
pub mod navigation;
pub mod registration_client;
