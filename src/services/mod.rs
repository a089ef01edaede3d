pub mod archive;
pub mod bootstrap_renderer;
pub mod build_script_generator;
pub mod templates;

pub use build_script_generator::BuildScriptGenerator;
