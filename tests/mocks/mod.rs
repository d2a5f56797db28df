pub mod confirm_mock;
