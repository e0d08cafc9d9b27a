//! Build-file extractors for Gradle dependencies and CMake native metadata.

pub mod cmake;
pub mod gradle;

pub use cmake::extract_native_info;
pub use gradle::extract_dependencies;
