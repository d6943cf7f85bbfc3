pub mod keyword;
pub mod perfume;
pub mod review;
