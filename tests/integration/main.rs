mod common;
mod contact_test;
mod health_test;
