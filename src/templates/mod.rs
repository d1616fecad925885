pub mod layout;
pub mod pages;

// Re-exports for convenience
pub use layout::page_layout;
