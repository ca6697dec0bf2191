pub mod about;
pub mod footer;
pub mod header;
pub mod hero;
pub mod landing;
pub mod services;
