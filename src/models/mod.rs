pub mod forecast;
pub mod kma_forecast;
