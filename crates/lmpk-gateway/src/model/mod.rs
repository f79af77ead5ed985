mod health;
mod response;

pub use health::HealthResponse;
pub use response::ResponseCode;
