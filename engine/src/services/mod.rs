pub mod certificates;
pub mod contributions;
