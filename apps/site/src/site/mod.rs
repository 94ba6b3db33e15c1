pub mod cards;
pub mod contact;
pub mod pages;
pub mod paths;
pub mod reading;
pub mod sitemap;
pub mod theme;
