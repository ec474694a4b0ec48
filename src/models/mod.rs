pub mod request;
pub mod trip;
