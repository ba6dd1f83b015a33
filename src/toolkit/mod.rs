

pub mod concerns;
pub mod dataset;
pub mod glossary;
pub mod recommend;
