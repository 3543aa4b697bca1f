use std::fs;
use std::path::Path;
use serde::Deserialize;

/// Render settings for the spider map. Every field is optional in the file;
/// the defaults reproduce the red-center / skyblue look.
#[derive(Deserialize, Debug)]
pub(crate) struct Config {
    #[serde(default = "default_focus_color")]
    pub(crate) focus_color: String,
    #[serde(default = "default_node_color")]
    pub(crate) node_color: String,
    /// Write the rendered map to this file instead of stdout
    #[serde(default)]
    pub(crate) dot_file: Option<String>,
}

fn default_focus_color() -> String {
    "red".to_string()
}

fn default_node_color() -> String {
    "skyblue".to_string()
}

impl Config {
    pub(crate) fn empty() -> Config {
        Config {
            focus_color: default_focus_color(),
            node_color: default_node_color(),
            dot_file: None,
        }
    }

    pub(crate) fn load_from_file(file_path: &str) -> Config {
        let path = Path::new(file_path);
        if path.exists() && path.is_file() {
            let config: Config = toml::from_str(&fs::read_to_string(path).unwrap()).unwrap();
            config
        } else {
            Config::empty()
        }
    }
}
