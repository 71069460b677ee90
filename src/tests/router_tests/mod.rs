mod account_tests;
mod auth_flow_tests;
mod page_tests;
