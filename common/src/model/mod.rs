pub mod contribution;
pub mod directory;
pub mod display;
pub mod rollup;
