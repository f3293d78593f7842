pub(crate) mod greeting_controller;
pub(crate) mod health_check_controller;
