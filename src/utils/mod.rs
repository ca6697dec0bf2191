pub mod emailjs;
pub mod scroll;
