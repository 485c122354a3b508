pub mod configs;
pub mod forecast;
pub mod order;
