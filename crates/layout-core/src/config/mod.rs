//! Scaffolding settings shared by every product

pub mod settings;

pub use settings::ScaffoldSettings;
