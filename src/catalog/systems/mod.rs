// src/catalog/systems/mod.rs

pub mod fetch;
pub mod mutate;
pub mod results;

pub use fetch::handle_fetch_requests;
pub use mutate::{
    handle_brand_mutations, handle_category_mutations, handle_collection_mutations,
    handle_product_mutations,
};
pub use results::{handle_fetch_results, handle_mutation_results};
