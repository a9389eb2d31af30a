pub mod ehex;
pub mod roll;
pub mod star;
