/// Decode-and-print command.
pub mod dump;
/// Input loading with compression detection.
pub mod input;
/// Typed scan command.
pub mod scan;
/// Shared rendering helpers.
pub mod util;

#[cfg(test)]
mod test_support;
