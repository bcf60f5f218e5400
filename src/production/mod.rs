//! Production implementations of traits

mod shotwell_db;

pub use shotwell_db::ShotwellDatabase;
