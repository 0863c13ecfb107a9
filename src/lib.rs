pub mod config;
pub mod error;
pub mod prompt;
pub mod scaffold;
pub mod template;
pub mod utils;

/// directory holding the author config and templates, next to the executable
pub const TEMPLATE_DIR: &str = "webInitTemplate";
/// subdirectory used for css and js in asset mode
pub const ASSET_DIR: &str = "assets";
/// author identity file inside the template directory
pub const AUTHOR_FILE: &str = "config.json";
/// file name argument that turns off the css or js artifact
pub const DISABLED: &str = "None";
