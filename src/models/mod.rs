pub mod product;
pub mod conrod;
pub mod production;
pub mod bill;
