pub mod detail;

pub use detail::DetailController;
