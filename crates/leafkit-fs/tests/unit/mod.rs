mod error_paths;
mod workflows;
